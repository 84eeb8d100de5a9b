use crate::PipeRes;
use crate::cursor::Cursor;
use crate::func::Predicate;

/// 过滤：跳过不满足谓词的元素，当前元素直接委托给上游游标。
#[derive(Debug, Clone)]
pub struct Filter<C, P> {
    cursor: C,
    predicate: P,
}

impl<C, P> Filter<C, P> {
    pub(crate) fn new(cursor: C, predicate: P) -> Self {
        Filter { cursor, predicate }
    }
}

impl<C, P> Cursor for Filter<C, P>
where
    C: Cursor,
    P: Predicate<C::Item>,
{
    type Item = C::Item;

    #[inline]
    fn advance(&mut self) -> PipeRes<bool> {
        while self.cursor.advance()? {
            if self.cursor.current().is_some_and(|item| self.predicate.test(item)) {
                return Ok(true);
            }
        }
        self.cursor.release();
        Ok(false)
    }

    #[inline]
    fn current(&self) -> Option<&C::Item> {
        self.cursor.current()
    }

    #[inline]
    fn take_current(&mut self) -> Option<C::Item> {
        self.cursor.take_current()
    }

    fn reset(&mut self) {
        self.cursor.reset();
    }

    fn release(&mut self) {
        self.cursor.release();
    }
}
