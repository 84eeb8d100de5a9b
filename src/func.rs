/// 谓词，对元素进行判断。
pub trait Predicate<T: ?Sized> {
    fn test(&mut self, item: &T) -> bool;
}

/// 选择器，将元素转换为新的值。
pub trait Selector<T: ?Sized> {
    type Output;

    fn select(&mut self, item: &T) -> Self::Output;
}

impl<T: ?Sized, F> Predicate<T> for F
where
    F: FnMut(&T) -> bool,
{
    #[inline]
    fn test(&mut self, item: &T) -> bool {
        self(item)
    }
}

impl<T: ?Sized, R, F> Selector<T> for F
where
    F: FnMut(&T) -> R,
{
    type Output = R;

    #[inline]
    fn select(&mut self, item: &T) -> R {
        self(item)
    }
}

/// 携带上下文的函数：上下文按值保存，每次调用时以不可变引用传入，
/// 从而无需闭包捕获外部状态。
#[derive(Debug, Clone, Copy)]
pub struct With<X, F> {
    context: X,
    func: F,
}

impl<X, F> With<X, F> {
    pub fn new(context: X, func: F) -> Self {
        With { context, func }
    }

    pub fn context(&self) -> &X {
        &self.context
    }
}

impl<T: ?Sized, X, F> Predicate<T> for With<X, F>
where
    F: FnMut(&X, &T) -> bool,
{
    #[inline]
    fn test(&mut self, item: &T) -> bool {
        (self.func)(&self.context, item)
    }
}

impl<T: ?Sized, X, R, F> Selector<T> for With<X, F>
where
    F: FnMut(&X, &T) -> R,
{
    type Output = R;

    #[inline]
    fn select(&mut self, item: &T) -> R {
        (self.func)(&self.context, item)
    }
}
