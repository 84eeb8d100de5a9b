use crate::PipeRes;
use crate::cursor::{Cursor, Release};
use crate::err::PipeErr;
use crate::func::{Predicate, Selector, With};
use crate::pipe::Pipe;
use crate::view::View;
use std::cmp::Ordering;

/// 终止操作。消费流水线的操作都会把游标放入作用域释放守卫中，
/// 无论正常返回、提前返回、错误返回还是回调panic，游标都会被释放。
impl<C: Cursor> Pipe<C> {
    pub fn any<F>(self, predicate: F) -> PipeRes<bool>
    where
        F: FnMut(&C::Item) -> bool,
    {
        self.any_by(predicate)
    }

    pub fn any_with<X, F>(self, context: X, predicate: F) -> PipeRes<bool>
    where
        F: FnMut(&X, &C::Item) -> bool,
    {
        self.any_by(With::new(context, predicate))
    }

    pub fn all<F>(self, predicate: F) -> PipeRes<bool>
    where
        F: FnMut(&C::Item) -> bool,
    {
        self.all_by(predicate)
    }

    pub fn all_with<X, F>(self, context: X, predicate: F) -> PipeRes<bool>
    where
        F: FnMut(&X, &C::Item) -> bool,
    {
        self.all_by(With::new(context, predicate))
    }

    /// 第一个元素，没有元素时返回默认值。
    pub fn first_or_default(self) -> PipeRes<C::Item>
    where
        C::Item: Default,
    {
        self.first_or_default_by(|_| true)
    }

    /// 第一个满足谓词的元素，没有时返回默认值。
    pub fn first_or_default_by<F>(self, predicate: F) -> PipeRes<C::Item>
    where
        C::Item: Default,
        F: FnMut(&C::Item) -> bool,
    {
        Ok(self.find_by(predicate)?.unwrap_or_default())
    }

    pub fn first_or_default_with<X, F>(self, context: X, predicate: F) -> PipeRes<C::Item>
    where
        C::Item: Default,
        F: FnMut(&X, &C::Item) -> bool,
    {
        Ok(self.find_by(With::new(context, predicate))?.unwrap_or_default())
    }

    /// 键最小的元素，键相等时保留最先遇到的元素，没有元素时返回默认值。
    pub fn min_or_default<K, F>(self, selector: F) -> PipeRes<C::Item>
    where
        C::Item: Default,
        K: Ord,
        F: FnMut(&C::Item) -> K,
    {
        self.extreme_by(selector, Ordering::Less)
    }

    pub fn min_or_default_with<X, K, F>(self, context: X, selector: F) -> PipeRes<C::Item>
    where
        C::Item: Default,
        K: Ord,
        F: FnMut(&X, &C::Item) -> K,
    {
        self.extreme_by(With::new(context, selector), Ordering::Less)
    }

    /// 键最大的元素，键相等时保留最先遇到的元素，没有元素时返回默认值。
    pub fn max_or_default<K, F>(self, selector: F) -> PipeRes<C::Item>
    where
        C::Item: Default,
        K: Ord,
        F: FnMut(&C::Item) -> K,
    {
        self.extreme_by(selector, Ordering::Greater)
    }

    pub fn max_or_default_with<X, K, F>(self, context: X, selector: F) -> PipeRes<C::Item>
    where
        C::Item: Default,
        K: Ord,
        F: FnMut(&X, &C::Item) -> K,
    {
        self.extreme_by(With::new(context, selector), Ordering::Greater)
    }

    /// 跳过至多`count`个元素，返回实际跳过的数量。
    ///
    /// 不消费流水线，只有在源耗尽时才释放游标，之后仍可继续使用。
    pub fn skip(&mut self, count: usize) -> PipeRes<usize> {
        let cursor = self.cursor_mut();
        let mut skipped = 0;
        while skipped < count {
            if !cursor.advance()? {
                cursor.release();
                break;
            }
            skipped += 1;
        }
        log_trace!(requested = count, skipped, "skip");
        Ok(skipped)
    }

    /// 将所有元素追加到调用方提供的容器中。
    pub fn to<E>(self, mut container: E) -> PipeRes<E>
    where
        E: Extend<C::Item>,
    {
        let mut cursor = Release::new(self.into_cursor());
        while cursor.advance()? {
            container.extend(cursor.take_current());
        }
        Ok(container)
    }

    /// 至多追加`max_count`个元素，达到上限后不再推进游标。
    pub fn to_limit<E>(self, mut container: E, max_count: usize) -> PipeRes<E>
    where
        E: Extend<C::Item>,
    {
        let mut cursor = Release::new(self.into_cursor());
        let mut count = 0;
        while count < max_count && cursor.advance()? {
            container.extend(cursor.take_current());
            count += 1;
        }
        Ok(container)
    }

    pub fn for_each<F>(self, mut action: F) -> PipeRes<()>
    where
        F: FnMut(C::Item),
    {
        let mut cursor = Release::new(self.into_cursor());
        while cursor.advance()? {
            if let Some(item) = cursor.take_current() {
                action(item);
            }
        }
        Ok(())
    }

    pub fn for_each_with<X, F>(self, context: X, mut action: F) -> PipeRes<()>
    where
        F: FnMut(&X, C::Item),
    {
        self.for_each(|item| action(&context, item))
    }

    /// 回调返回错误时立即停止，释放游标后原样返回该错误。
    pub fn try_for_each<E, F>(self, mut action: F) -> Result<(), E>
    where
        E: From<PipeErr>,
        F: FnMut(C::Item) -> Result<(), E>,
    {
        let mut cursor = Release::new(self.into_cursor());
        while cursor.advance()? {
            if let Some(item) = cursor.take_current() {
                action(item)?;
            }
        }
        Ok(())
    }

    /// 转换为只能遍历一次的视图。
    pub fn as_view(self) -> View<C> {
        View::new(self.into_cursor())
    }

    fn any_by<P: Predicate<C::Item>>(self, mut predicate: P) -> PipeRes<bool> {
        let mut cursor = Release::new(self.into_cursor());
        while cursor.advance()? {
            if cursor.current().is_some_and(|item| predicate.test(item)) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn all_by<P: Predicate<C::Item>>(self, mut predicate: P) -> PipeRes<bool> {
        let mut cursor = Release::new(self.into_cursor());
        while cursor.advance()? {
            if cursor.current().is_some_and(|item| !predicate.test(item)) {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn find_by<P: Predicate<C::Item>>(self, mut predicate: P) -> PipeRes<Option<C::Item>> {
        let mut cursor = Release::new(self.into_cursor());
        while cursor.advance()? {
            if cursor.current().is_some_and(|item| predicate.test(item)) {
                return Ok(cursor.take_current());
            }
        }
        Ok(None)
    }

    /// 单次遍历求极值，只有新键严格满足`keep`时才替换已有结果。
    fn extreme_by<S>(self, mut selector: S, keep: Ordering) -> PipeRes<C::Item>
    where
        C::Item: Default,
        S: Selector<C::Item>,
        S::Output: Ord,
    {
        let mut cursor = Release::new(self.into_cursor());
        let mut best: Option<(S::Output, C::Item)> = None;
        while cursor.advance()? {
            let Some(key) = cursor.current().map(|item| selector.select(item)) else { continue };
            if best.as_ref().is_none_or(|(best_key, _)| key.cmp(best_key) == keep) {
                if let Some(item) = cursor.take_current() {
                    best = Some((key, item));
                }
            }
        }
        Ok(best.map(|(_, item)| item).unwrap_or_default())
    }
}
