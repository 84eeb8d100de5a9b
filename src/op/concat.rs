use crate::PipeRes;
use crate::cursor::Cursor;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
enum Side {
    First,
    Second,
    Done,
}

/// 拼接：第一个游标耗尽后释放它，再继续推进第二个游标。已耗尽的一侧不会再被推进。
#[derive(Debug, Clone)]
pub struct Concat<A, B> {
    first: A,
    second: B,
    side: Side,
}

impl<A, B> Concat<A, B> {
    pub(crate) fn new(first: A, second: B) -> Self {
        Concat { first, second, side: Side::First }
    }
}

impl<A, B> Cursor for Concat<A, B>
where
    A: Cursor,
    B: Cursor<Item = A::Item>,
{
    type Item = A::Item;

    #[inline]
    fn advance(&mut self) -> PipeRes<bool> {
        if self.side == Side::First {
            if self.first.advance()? {
                return Ok(true);
            }
            self.first.release();
            self.side = Side::Second;
        }
        if self.side == Side::Second {
            if self.second.advance()? {
                return Ok(true);
            }
            self.second.release();
            self.side = Side::Done;
        }
        Ok(false)
    }

    #[inline]
    fn current(&self) -> Option<&A::Item> {
        match self.side {
            Side::First => self.first.current(),
            Side::Second => self.second.current(),
            Side::Done => None,
        }
    }

    #[inline]
    fn take_current(&mut self) -> Option<A::Item> {
        match self.side {
            Side::First => self.first.take_current(),
            Side::Second => self.second.take_current(),
            Side::Done => None,
        }
    }

    fn reset(&mut self) {
        self.first.reset();
        self.second.reset();
        self.side = Side::First;
    }

    fn release(&mut self) {
        match self.side {
            Side::First => {
                self.first.release();
                self.second.release();
            }
            Side::Second => self.second.release(),
            Side::Done => {}
        }
        self.side = Side::Done;
    }
}
