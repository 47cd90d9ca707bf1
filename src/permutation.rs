//! Exhaustive permutation enumeration.
//!
//! The enumeration order is fixed: for each element `i` in input order, element
//! `i` is placed first and followed by every permutation of the remaining
//! elements, which keep their original relative order. For `[1, 2, 3]` this
//! yields `123, 132, 213, 231, 312, 321`. Route selection breaks ties by this
//! order, so it must not change.

/// Number of orderings of `n` elements, or `None` if it overflows `usize`.
pub fn permutation_count(n: usize) -> Option<usize> {
    (2..=n).try_fold(1usize, |acc, k| acc.checked_mul(k))
}

/// Returns all `n!` orderings of `items` in enumeration order.
///
/// An empty input yields a single empty ordering.
pub fn permutations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    let mut out = Vec::with_capacity(permutation_count(items.len()).unwrap_or(0));
    for_each_permutation(items, |ordering| out.push(ordering.to_vec()));
    out
}

/// Calls `visit` once per ordering of `items`, in enumeration order, without
/// materializing the whole list.
pub fn for_each_permutation<T, F>(items: &[T], mut visit: F)
where
    T: Clone,
    F: FnMut(&[T]),
{
    let mut prefix = Vec::with_capacity(items.len());
    let mut remaining = items.to_vec();
    extend(&mut prefix, &mut remaining, &mut visit);
}

fn extend<T, F>(prefix: &mut Vec<T>, remaining: &mut Vec<T>, visit: &mut F)
where
    F: FnMut(&[T]),
{
    if remaining.is_empty() {
        visit(prefix);
        return;
    }

    for i in 0..remaining.len() {
        prefix.push(remaining.remove(i));
        extend(prefix, remaining, visit);
        if let Some(item) = prefix.pop() {
            remaining.insert(i, item);
        }
    }
}
