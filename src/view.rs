use crate::PipeRes;
use crate::cursor::Cursor;
use crate::err::PipeErr;
use std::mem;

/// 只能遍历一次的视图，可以直接用于`for`循环：
/// ```
/// use zpipe::ToPipe;
///
/// let array = [1, 2, 3];
/// let mut view = array.pipe().copied().as_view();
/// let mut sum = 0;
/// for item in &mut view {
///     sum += item.unwrap();
/// }
/// assert_eq!(sum, 6);
/// assert!(view.iter().is_err());
/// ```
///
/// 被丢弃时释放游标。
pub struct View<C: Cursor> {
    cursor: C,
    used: bool,
}

impl<C: Cursor> View<C> {
    pub(crate) fn new(cursor: C) -> Self {
        View { cursor, used: false }
    }

    pub fn is_used(&self) -> bool {
        self.used
    }

    /// 开始遍历，重复调用返回`InvalidUse`。
    pub fn iter(&mut self) -> PipeRes<ViewIter<'_, C>> {
        if self.used {
            log_warn!("view iterated more than once");
            return Err(PipeErr::InvalidUse);
        }
        self.used = true;
        Ok(ViewIter { state: State::Live(&mut self.cursor) })
    }
}

impl<C: Cursor> Drop for View<C> {
    fn drop(&mut self) {
        self.cursor.release();
        log_trace!(used = self.used, "view released");
    }
}

enum State<'a, C> {
    Live(&'a mut C),
    Rejected,
    Done,
}

/// 视图上的迭代器，遇到第一个错误后结束，耗尽或出错时释放游标。
pub struct ViewIter<'a, C: Cursor> {
    state: State<'a, C>,
}

impl<'a, C: Cursor> Iterator for ViewIter<'a, C> {
    type Item = PipeRes<C::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        match mem::replace(&mut self.state, State::Done) {
            State::Live(cursor) => match cursor.advance() {
                Ok(true) => {
                    let item = cursor.take_current();
                    self.state = State::Live(cursor);
                    item.map(Ok)
                }
                Ok(false) => {
                    cursor.release();
                    None
                }
                Err(err) => {
                    cursor.release();
                    Some(Err(err))
                }
            },
            State::Rejected => Some(Err(PipeErr::InvalidUse)),
            State::Done => None,
        }
    }
}

impl<'a, C: Cursor> IntoIterator for &'a mut View<C> {
    type Item = PipeRes<C::Item>;
    type IntoIter = ViewIter<'a, C>;

    fn into_iter(self) -> ViewIter<'a, C> {
        match self.iter() {
            Ok(iter) => iter,
            Err(_) => ViewIter { state: State::Rejected },
        }
    }
}
