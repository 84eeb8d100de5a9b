//! 流水线的性质测试：组合子和终止操作的结果应当与标准迭代器上的等价写法一致。

use itertools::Itertools;
use proptest::prelude::*;
use std::cell::{Cell, RefCell};
use zpipe::{ArrayCursor, Pipe, PipeErr, ToPipe};

fn values() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-50i32..50, 0..40)
}

/// 含有空子序列的嵌套序列
fn nested() -> impl Strategy<Value = Vec<Vec<i32>>> {
    prop::collection::vec(prop_oneof![Just(Vec::new()), prop::collection::vec(-50i32..50, 0..6)], 0..12)
}

proptest! {
    #[test]
    fn filter_keeps_matching_in_order(input in values(), modulus in 1i32..6) {
        let expected = input.iter().copied().filter(|x| x % modulus == 0).collect_vec();
        prop_assert_eq!(input.pipe().copied().filter_with(modulus, |m, x| x % m == 0).to(Vec::new()), Ok(expected));
    }

    #[test]
    fn map_calls_selector_once_per_element(input in values()) {
        let calls = Cell::new(0usize);
        let out = input
            .pipe()
            .map(|x| {
                calls.set(calls.get() + 1);
                i64::from(**x) * 3
            })
            .to(Vec::new());
        prop_assert_eq!(out, Ok(input.iter().map(|x| i64::from(*x) * 3).collect_vec()));
        prop_assert_eq!(calls.get(), input.len());
    }

    #[test]
    fn flatten_skips_empty_inner(input in nested()) {
        let expected = input.iter().flatten().copied().collect_vec();
        let out = input.pipe().flatten(|&v| ArrayCursor::new(v), |&&x| x).to(Vec::new());
        prop_assert_eq!(out, Ok(expected));
    }

    #[test]
    fn concat_appends_second(first in values(), second in values()) {
        let expected = first.iter().chain(second.iter()).copied().collect_vec();
        prop_assert_eq!(first.pipe().concat(second.pipe()).copied().to(Vec::new()), Ok(expected));
    }

    #[test]
    fn skip_drops_prefix(input in values(), count in 0usize..50) {
        let mut pipe = input.pipe().copied();
        prop_assert_eq!(pipe.skip(count), Ok(count.min(input.len())));
        prop_assert_eq!(pipe.to(Vec::new()), Ok(input.iter().copied().skip(count).collect_vec()));
    }

    #[test]
    fn to_limit_takes_prefix(input in values(), max_count in 0usize..50) {
        let expected = input.iter().copied().take(max_count).collect_vec();
        prop_assert_eq!(input.pipe().copied().to_limit(Vec::new(), max_count), Ok(expected));
    }

    #[test]
    fn min_max_keep_first_occurrence(input in values()) {
        let indexed = input.iter().copied().enumerate().collect_vec();
        let min = indexed.iter().copied().min_by_key(|(_, x)| *x).unwrap_or_default();
        let max = indexed.iter().copied().rev().max_by_key(|(_, x)| *x).unwrap_or_default();
        prop_assert_eq!(indexed.pipe().copied().min_or_default(|(_, x)| *x), Ok(min));
        prop_assert_eq!(indexed.pipe().copied().max_or_default(|(_, x)| *x), Ok(max));
    }

    #[test]
    fn any_all_match_iterator(input in values(), bound in -50i32..50) {
        prop_assert_eq!(input.pipe().any_with(bound, |b, x| **x > *b), Ok(input.iter().any(|x| *x > bound)));
        prop_assert_eq!(input.pipe().all_with(bound, |b, x| **x > *b), Ok(input.iter().all(|x| *x > bound)));
    }

    #[test]
    fn growth_during_iteration_fails(input in prop::collection::vec(0i32..10, 1..20), at in 0usize..20) {
        let at = at % input.len();
        let list = RefCell::new(input.clone());
        let mut seen = 0;
        let res = Pipe::of_list(&list).map(|x| x + 1).for_each(|_| {
            if seen == at {
                list.borrow_mut().push(0);
            }
            seen += 1;
        });
        prop_assert_eq!(res, Err(PipeErr::ConcurrencyViolation { expected: input.len(), found: input.len() + 1 }));
        prop_assert_eq!(seen, at + 1);
    }

    #[test]
    fn view_iterates_once(input in values()) {
        let mut view = input.pipe().copied().as_view();
        let first = (&mut view).into_iter().collect::<Result<Vec<_>, _>>();
        prop_assert_eq!(first, Ok(input.clone()));
        let second = (&mut view).into_iter().collect_vec();
        prop_assert_eq!(second, vec![Err(PipeErr::InvalidUse)]);
    }
}
