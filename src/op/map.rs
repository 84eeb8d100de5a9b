use crate::PipeRes;
use crate::cursor::Cursor;
use crate::func::Selector;

/// 投影：每个成功推进的元素只调用一次选择器，结果缓存为当前元素。
#[derive(Debug)]
pub struct Map<C, S>
where
    C: Cursor,
    S: Selector<C::Item>,
{
    cursor: C,
    selector: S,
    current: Option<S::Output>,
}

impl<C, S> Map<C, S>
where
    C: Cursor,
    S: Selector<C::Item>,
{
    pub(crate) fn new(cursor: C, selector: S) -> Self {
        Map { cursor, selector, current: None }
    }
}

impl<C, S> Cursor for Map<C, S>
where
    C: Cursor,
    S: Selector<C::Item>,
{
    type Item = S::Output;

    #[inline]
    fn advance(&mut self) -> PipeRes<bool> {
        if self.cursor.advance()? {
            self.current = self.cursor.current().map(|item| self.selector.select(item));
            Ok(self.current.is_some())
        } else {
            self.current = None;
            self.cursor.release();
            Ok(false)
        }
    }

    #[inline]
    fn current(&self) -> Option<&S::Output> {
        self.current.as_ref()
    }

    #[inline]
    fn take_current(&mut self) -> Option<S::Output> {
        self.current.take()
    }

    fn reset(&mut self) {
        self.current = None;
        self.cursor.reset();
    }

    fn release(&mut self) {
        self.current = None;
        self.cursor.release();
    }
}

/// 解引用借用的元素，得到元素副本。
#[derive(Debug, Clone)]
pub struct Copied<C, T> {
    cursor: C,
    current: Option<T>,
}

impl<C, T> Copied<C, T> {
    pub(crate) fn new(cursor: C) -> Self {
        Copied { cursor, current: None }
    }
}

impl<'a, C, T> Cursor for Copied<C, T>
where
    C: Cursor<Item = &'a T>,
    T: Copy + 'a,
{
    type Item = T;

    #[inline]
    fn advance(&mut self) -> PipeRes<bool> {
        if self.cursor.advance()? {
            self.current = self.cursor.current().map(|item| **item);
            Ok(self.current.is_some())
        } else {
            self.current = None;
            self.cursor.release();
            Ok(false)
        }
    }

    #[inline]
    fn current(&self) -> Option<&T> {
        self.current.as_ref()
    }

    #[inline]
    fn take_current(&mut self) -> Option<T> {
        self.current.take()
    }

    fn reset(&mut self) {
        self.current = None;
        self.cursor.reset();
    }

    fn release(&mut self) {
        self.current = None;
        self.cursor.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::tests::Probe;
    use crate::func::With;
    use crate::input::ArrayCursor;
    use std::cell::Cell;

    #[test]
    fn test_map() {
        let array = [1, 2, 3];
        let mut map = Map::new(ArrayCursor::new(&array), |x: &&i32| **x * 5);
        assert_eq!(map.step(), Ok(Some(&5)));
        assert_eq!(map.step(), Ok(Some(&10)));
        assert_eq!(map.step(), Ok(Some(&15)));
        assert_eq!(map.step(), Ok(None));
        assert_eq!(map.current(), None);
    }

    #[test]
    fn test_map_selector_called_once() {
        let calls = Cell::new(0);
        let mut map = Map::new(Probe::new(2), |x: &u32| {
            calls.set(calls.get() + 1);
            x.to_string()
        });
        assert_eq!(map.advance(), Ok(true));
        assert_eq!(map.current(), Some(&String::from("0")));
        assert_eq!(map.current(), Some(&String::from("0")));
        assert_eq!(calls.get(), 1);
        assert_eq!(map.take_current(), Some(String::from("0")));
        assert_eq!(map.current(), None);
        assert_eq!(map.advance(), Ok(true));
        assert_eq!(map.advance(), Ok(false));
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn test_map_with_context() {
        let array = [1u8, 2, 3];
        let mut map = Map::new(ArrayCursor::new(&array), With::new(100u32, |base: &u32, x: &&u8| base + u32::from(**x)));
        assert_eq!(map.step(), Ok(Some(&101)));
        assert_eq!(map.step(), Ok(Some(&102)));
    }

    #[test]
    fn test_map_release_on_exhaustion() {
        let probe = Probe::new(1);
        let releases = probe.releases.clone();
        let mut map = Map::new(probe, |x: &u32| x + 1);
        assert_eq!(map.step(), Ok(Some(&1)));
        assert_eq!(releases.get(), 0);
        assert_eq!(map.step(), Ok(None));
        assert_eq!(releases.get(), 1);
    }

    #[test]
    fn test_copied() {
        let array = [7i64, 8];
        let mut copied = Copied::new(ArrayCursor::new(&array));
        assert_eq!(copied.step(), Ok(Some(&7)));
        assert_eq!(copied.take_current(), Some(7));
        assert_eq!(copied.take_current(), None);
        assert_eq!(copied.current(), None);
        assert_eq!(copied.step(), Ok(Some(&8)));
        copied.reset();
        assert_eq!(copied.step(), Ok(Some(&7)));
    }

    #[test]
    fn test_map_debug() {
        fn double(x: &u32) -> u32 {
            x * 2
        }

        let mut map = Map::new(Probe::new(2), double as fn(&u32) -> u32);
        assert_eq!(map.step(), Ok(Some(&0)));
        assert!(format!("{map:?}").contains("current: Some(0)"));
    }
}
