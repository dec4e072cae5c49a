//! Default key ordering for deterministic output.
//!
//! [`default_less`] is a partial order: some pairs of keys are unordered in
//! both directions. [`sort_by_less`] is a stable merge sort that only asks
//! "is less", so unordered keys keep their insertion order and an
//! inconsistent predicate can never make it panic.

use crate::value::Value;

/// Default "is `a` ordered before `b`" policy for keys of one container.
///
/// 1. When both keys have a textual form and the forms differ, compare the forms.
/// 2. Otherwise, when the kinds differ, compare kind tag names.
/// 3. Otherwise, when both are functions, compare declaring source, then line.
/// 4. Otherwise the keys are unordered.
pub fn default_less(a: &Value, b: &Value) -> bool {
    if let (Some(ta), Some(tb)) = (a.textual_form(), b.textual_form())
        && ta != tb
    {
        return ta < tb;
    }

    let (ka, kb) = (a.kind(), b.kind());
    if ka != kb {
        return ka.name() < kb.name();
    }

    if let (Some(fa), Some(fb)) = (a.as_callable(), b.as_callable()) {
        return match (fa.source(), fb.source()) {
            (Some(sa), Some(sb)) if sa != sb => sa < sb,
            (Some(_), Some(_)) => match (fa.line(), fb.line()) {
                (Some(la), Some(lb)) => la < lb,
                _ => false,
            },
            _ => false,
        };
    }

    false
}

/// Stable sort driven by a strict "is less" predicate.
///
/// Elements for which neither `less(a, b)` nor `less(b, a)` holds keep their
/// relative order.
pub fn sort_by_less<T, F>(items: &mut Vec<T>, mut less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    if items.len() < 2 {
        return;
    }
    let taken = std::mem::take(items);
    *items = merge_sort(taken, &mut less);
}

fn merge_sort<T, F>(mut items: Vec<T>, less: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> bool,
{
    if items.len() < 2 {
        return items;
    }
    let right = items.split_off(items.len() / 2);
    let left = merge_sort(items, less);
    let right = merge_sort(right, less);

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    loop {
        let take_right = match (left.peek(), right.peek()) {
            // Only a strictly smaller right element may overtake the left one.
            (Some(l), Some(r)) => less(r, l),
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => break,
        };
        let next = if take_right { right.next() } else { left.next() };
        merged.extend(next);
    }
    merged
}
