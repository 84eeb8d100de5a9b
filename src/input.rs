use crate::PipeRes;
use crate::cursor::Cursor;
use crate::err::PipeErr;
use crate::pipe::Pipe;
use std::cell::RefCell;
use std::collections::VecDeque;

/// 固定长度数组源，按索引`0..len`遍历，产生对数组元素的借用。
#[derive(Debug, Clone)]
pub struct ArrayCursor<'a, T> {
    array: &'a [T],
    next: usize,
    current: Option<&'a T>,
}

impl<'a, T> ArrayCursor<'a, T> {
    pub fn new(array: &'a [T]) -> Self {
        ArrayCursor { array, next: 0, current: None }
    }
}

impl<'a, T> Cursor for ArrayCursor<'a, T> {
    type Item = &'a T;

    #[inline]
    fn advance(&mut self) -> PipeRes<bool> {
        self.current = self.array.get(self.next);
        if self.current.is_some() {
            self.next += 1;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    #[inline]
    fn current(&self) -> Option<&&'a T> {
        self.current.as_ref()
    }

    #[inline]
    fn take_current(&mut self) -> Option<&'a T> {
        self.current.take()
    }

    fn reset(&mut self) {
        self.next = 0;
        self.current = None;
    }

    fn release(&mut self) {
        self.next = self.array.len();
        self.current = None;
    }
}

/// 可增长序列：除按索引读取外，每次推进时还会读取当前元素数量，用于检测遍历期间的结构修改。
pub trait Sequence {
    type Item;

    /// 当前元素数量。
    fn count(&self) -> usize;

    /// 读取指定索引的元素副本。
    fn get(&self, index: usize) -> Option<Self::Item>;
}

impl<T: Clone> Sequence for [T] {
    type Item = T;

    #[inline]
    fn count(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<T> {
        <[T]>::get(self, index).cloned()
    }
}

impl<T: Clone> Sequence for Vec<T> {
    type Item = T;

    #[inline]
    fn count(&self) -> usize {
        self.as_slice().len()
    }

    #[inline]
    fn get(&self, index: usize) -> Option<T> {
        self.as_slice().get(index).cloned()
    }
}

impl<T: Clone> Sequence for VecDeque<T> {
    type Item = T;

    #[inline]
    fn count(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<T> {
        VecDeque::get(self, index).cloned()
    }
}

impl<S: Sequence + ?Sized> Sequence for RefCell<S> {
    type Item = S::Item;

    #[inline]
    fn count(&self) -> usize {
        self.borrow().count()
    }

    #[inline]
    fn get(&self, index: usize) -> Option<S::Item> {
        self.borrow().get(index)
    }
}

/// 可增长序列源，构造时记录元素数量快照，之后每次推进都会与实时数量比较。
///
/// # Panics
///
/// 源为`RefCell`时，推进期间会短暂地不可变借用；调用方在推进时仍持有`RefMut`会导致panic。
#[derive(Debug)]
pub struct ListCursor<'a, S: Sequence + ?Sized> {
    list: &'a S,
    next: usize,
    count: usize,
    current: Option<S::Item>,
}

impl<'a, S: Sequence + ?Sized> ListCursor<'a, S> {
    pub fn new(list: &'a S) -> Self {
        ListCursor { list, next: 0, count: list.count(), current: None }
    }
}

impl<'a, S: Sequence + ?Sized> Cursor for ListCursor<'a, S> {
    type Item = S::Item;

    fn advance(&mut self) -> PipeRes<bool> {
        let found = self.list.count();
        if found != self.count {
            log_warn!(expected = self.count, found, "sequence modified during iteration");
            return Err(PipeErr::ConcurrencyViolation { expected: self.count, found });
        }
        if self.next >= found {
            self.current = None;
            return Ok(false);
        }
        self.current = self.list.get(self.next);
        self.next += 1;
        Ok(self.current.is_some())
    }

    #[inline]
    fn current(&self) -> Option<&S::Item> {
        self.current.as_ref()
    }

    #[inline]
    fn take_current(&mut self) -> Option<S::Item> {
        self.current.take()
    }

    fn reset(&mut self) {
        self.next = 0;
        self.current = None;
    }

    fn release(&mut self) {
        self.next = self.count;
        self.current = None;
    }
}

/// 外部提供的迭代器源，无法回到初始位置。
#[derive(Debug)]
pub struct IterCursor<I: Iterator> {
    iter: Option<I>,
    current: Option<I::Item>,
}

impl<I: Iterator> IterCursor<I> {
    pub fn new(iter: impl IntoIterator<IntoIter = I>) -> Self {
        IterCursor { iter: Some(iter.into_iter()), current: None }
    }
}

impl<I: Iterator> Cursor for IterCursor<I> {
    type Item = I::Item;

    #[inline]
    fn advance(&mut self) -> PipeRes<bool> {
        self.current = self.iter.as_mut().and_then(|iter| iter.next());
        Ok(self.current.is_some())
    }

    #[inline]
    fn current(&self) -> Option<&I::Item> {
        self.current.as_ref()
    }

    #[inline]
    fn take_current(&mut self) -> Option<I::Item> {
        self.current.take()
    }

    fn reset(&mut self) {
        log_debug!("reset ignored, iterator source cannot rewind");
    }

    fn release(&mut self) {
        self.iter = None;
        self.current = None;
    }
}

/// 将集合转换为流水线。
///
/// 切片、数组和`Vec`被借用时无法修改，作为固定长度源；
/// `RefCell`包装的序列可以在遍历期间被修改，作为可增长源并检测修改。
pub trait ToPipe {
    type Cursor<'a>: Cursor
    where
        Self: 'a;

    fn pipe(&self) -> Pipe<Self::Cursor<'_>>;
}

impl<T> ToPipe for [T] {
    type Cursor<'a>
        = ArrayCursor<'a, T>
    where
        Self: 'a;

    fn pipe(&self) -> Pipe<ArrayCursor<'_, T>> {
        Pipe::of_slice(self)
    }
}

impl<T, const N: usize> ToPipe for [T; N] {
    type Cursor<'a>
        = ArrayCursor<'a, T>
    where
        Self: 'a;

    fn pipe(&self) -> Pipe<ArrayCursor<'_, T>> {
        Pipe::of_slice(self)
    }
}

impl<T> ToPipe for Vec<T> {
    type Cursor<'a>
        = ArrayCursor<'a, T>
    where
        Self: 'a;

    fn pipe(&self) -> Pipe<ArrayCursor<'_, T>> {
        Pipe::of_slice(self)
    }
}

impl<S: Sequence + ?Sized> ToPipe for RefCell<S> {
    type Cursor<'a>
        = ListCursor<'a, RefCell<S>>
    where
        Self: 'a;

    fn pipe(&self) -> Pipe<ListCursor<'_, RefCell<S>>> {
        Pipe::of_list(self)
    }
}
