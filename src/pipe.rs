use crate::cursor::Cursor;
use crate::func::With;
use crate::input::{ArrayCursor, IterCursor, ListCursor, Sequence};
use crate::op::{Concat, Copied, Filter, Flatten, Map};

/// 流水线：按值持有唯一的游标，每个组合方法消费当前流水线并返回包装了新游标的流水线。
///
/// 组合期间不会求值，只有终止操作推进最外层游标时才会逐个拉取元素。
#[derive(Debug, Clone)]
pub struct Pipe<C> {
    cursor: C,
}

impl<'a, T> Pipe<ArrayCursor<'a, T>> {
    pub fn of_slice(array: &'a [T]) -> Self {
        Pipe { cursor: ArrayCursor::new(array) }
    }
}

impl<'a, S: Sequence + ?Sized> Pipe<ListCursor<'a, S>> {
    pub fn of_list(list: &'a S) -> Self {
        Pipe { cursor: ListCursor::new(list) }
    }
}

impl<I: Iterator> Pipe<IterCursor<I>> {
    pub fn of_iter(iter: impl IntoIterator<IntoIter = I>) -> Self {
        Pipe { cursor: IterCursor::new(iter) }
    }
}

impl<C: Cursor> From<C> for Pipe<C> {
    fn from(cursor: C) -> Self {
        Pipe { cursor }
    }
}

impl<C: Cursor> Pipe<C> {
    pub fn new(cursor: C) -> Self {
        Pipe { cursor }
    }

    pub fn into_cursor(self) -> C {
        self.cursor
    }

    pub(crate) fn cursor_mut(&mut self) -> &mut C {
        &mut self.cursor
    }

    /// 回到初始位置，对整条流水线生效。
    pub fn reset(&mut self) {
        self.cursor.reset();
    }

    pub fn filter<F>(self, predicate: F) -> Pipe<Filter<C, F>>
    where
        F: FnMut(&C::Item) -> bool,
    {
        Pipe { cursor: Filter::new(self.cursor, predicate) }
    }

    pub fn filter_with<X, F>(self, context: X, predicate: F) -> Pipe<Filter<C, With<X, F>>>
    where
        F: FnMut(&X, &C::Item) -> bool,
    {
        Pipe { cursor: Filter::new(self.cursor, With::new(context, predicate)) }
    }

    pub fn map<R, F>(self, selector: F) -> Pipe<Map<C, F>>
    where
        F: FnMut(&C::Item) -> R,
    {
        Pipe { cursor: Map::new(self.cursor, selector) }
    }

    pub fn map_with<X, R, F>(self, context: X, selector: F) -> Pipe<Map<C, With<X, F>>>
    where
        F: FnMut(&X, &C::Item) -> R,
    {
        Pipe { cursor: Map::new(self.cursor, With::new(context, selector)) }
    }

    pub fn copied<'a, T>(self) -> Pipe<Copied<C, T>>
    where
        C: Cursor<Item = &'a T>,
        T: Copy + 'a,
    {
        Pipe { cursor: Copied::new(self.cursor) }
    }

    /// 展开：`inner_selector`为外层元素生成内层游标，`result_selector`转换内层元素。
    pub fn flatten<I, R, F, G>(self, inner_selector: F, result_selector: G) -> Pipe<Flatten<C, I, F, G>>
    where
        I: Cursor,
        F: FnMut(&C::Item) -> I,
        G: FnMut(&I::Item) -> R,
    {
        Pipe { cursor: Flatten::new(self.cursor, inner_selector, result_selector) }
    }

    /// 携带上下文的展开，两个选择器各自持有一份上下文副本。
    pub fn flatten_with<X, I, R, F, G>(
        self,
        context: X,
        inner_selector: F,
        result_selector: G,
    ) -> Pipe<Flatten<C, I, With<X, F>, With<X, G>>>
    where
        X: Clone,
        I: Cursor,
        F: FnMut(&X, &C::Item) -> I,
        G: FnMut(&X, &I::Item) -> R,
    {
        Pipe {
            cursor: Flatten::new(
                self.cursor,
                With::new(context.clone(), inner_selector),
                With::new(context, result_selector),
            ),
        }
    }

    pub fn concat<B>(self, other: Pipe<B>) -> Pipe<Concat<C, B>>
    where
        B: Cursor<Item = C::Item>,
    {
        Pipe { cursor: Concat::new(self.cursor, other.cursor) }
    }
}
