use crate::PipeRes;
use crate::cursor::Cursor;
use crate::func::Selector;

/// 展开：对外层的每个元素按需生成内层游标，依次产出内层元素经结果选择器转换后的值。
///
/// 内层游标为`None`时表示尚无活动的内层游标。任意时刻最多只持有一个内层游标，
/// 不会缓冲中间结果。空的内层游标不会结束序列，会在同一次推进中继续推进外层游标。
#[derive(Debug)]
pub struct Flatten<C, I, F, G>
where
    C: Cursor,
    I: Cursor,
    F: Selector<C::Item, Output = I>,
    G: Selector<I::Item>,
{
    outer: C,
    inner: Option<I>,
    inner_selector: F,
    result_selector: G,
    current: Option<G::Output>,
}

impl<C, I, F, G> Flatten<C, I, F, G>
where
    C: Cursor,
    I: Cursor,
    F: Selector<C::Item, Output = I>,
    G: Selector<I::Item>,
{
    pub(crate) fn new(outer: C, inner_selector: F, result_selector: G) -> Self {
        Flatten { outer, inner: None, inner_selector, result_selector, current: None }
    }

    fn drop_inner(&mut self) {
        if let Some(mut inner) = self.inner.take() {
            inner.release();
        }
    }
}

impl<C, I, F, G> Cursor for Flatten<C, I, F, G>
where
    C: Cursor,
    I: Cursor,
    F: Selector<C::Item, Output = I>,
    G: Selector<I::Item>,
{
    type Item = G::Output;

    fn advance(&mut self) -> PipeRes<bool> {
        loop {
            if let Some(inner) = self.inner.as_mut() {
                if inner.advance()? {
                    self.current = inner.current().map(|item| self.result_selector.select(item));
                    return Ok(self.current.is_some());
                }
                self.drop_inner();
            }
            if !self.outer.advance()? {
                self.current = None;
                self.outer.release();
                return Ok(false);
            }
            self.inner = self.outer.current().map(|item| self.inner_selector.select(item));
        }
    }

    #[inline]
    fn current(&self) -> Option<&G::Output> {
        self.current.as_ref()
    }

    #[inline]
    fn take_current(&mut self) -> Option<G::Output> {
        self.current.take()
    }

    fn reset(&mut self) {
        self.current = None;
        self.drop_inner();
        self.outer.reset();
    }

    fn release(&mut self) {
        self.current = None;
        self.drop_inner();
        self.outer.release();
    }
}
