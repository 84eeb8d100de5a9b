use crate::PipeRes;
use std::ops::{Deref, DerefMut};

/// 游标，逐个拉取元素的最小能力集合。
///
/// 只有在`advance`返回`Ok(true)`之后，`current`才指向有效元素；
/// 其他任何时候（首次推进之前、耗尽之后、释放之后、元素被取走之后）均返回`None`。
pub trait Cursor {
    type Item;

    /// 推进到下一个元素，成功消费一个元素时返回`true`。
    fn advance(&mut self) -> PipeRes<bool>;

    /// 最近一次成功推进得到的元素。
    fn current(&self) -> Option<&Self::Item>;

    /// 取走当前元素的所有权，之后`current`返回`None`，直到下一次成功推进。
    fn take_current(&mut self) -> Option<Self::Item>;

    /// 回到初始位置，仅对可以按索引重新定位的源有效。
    fn reset(&mut self);

    /// 释放缓存的元素和临时状态，可重复调用。
    fn release(&mut self);

    /// 推进并借用当前元素，耗尽时返回`None`。
    #[inline]
    fn step(&mut self) -> PipeRes<Option<&Self::Item>> {
        if self.advance()? { Ok(Self::current(self)) } else { Ok(None) }
    }
}

impl<C: Cursor + ?Sized> Cursor for &mut C {
    type Item = C::Item;

    #[inline]
    fn advance(&mut self) -> PipeRes<bool> {
        (**self).advance()
    }

    #[inline]
    fn current(&self) -> Option<&Self::Item> {
        (**self).current()
    }

    #[inline]
    fn take_current(&mut self) -> Option<Self::Item> {
        (**self).take_current()
    }

    #[inline]
    fn reset(&mut self) {
        (**self).reset()
    }

    #[inline]
    fn release(&mut self) {
        (**self).release()
    }
}

/// 作用域释放：离开作用域时（包括错误返回和panic展开）调用`release`。
pub(crate) struct Release<C: Cursor>(C);

impl<C: Cursor> Release<C> {
    #[inline]
    pub(crate) fn new(cursor: C) -> Self {
        Release(cursor)
    }
}

impl<C: Cursor> Deref for Release<C> {
    type Target = C;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<C: Cursor> DerefMut for Release<C> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<C: Cursor> Drop for Release<C> {
    fn drop(&mut self) {
        self.0.release();
        log_trace!("cursor released");
    }
}
