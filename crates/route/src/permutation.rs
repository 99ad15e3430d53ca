/// Moves items so that `items[k]` ends up holding the element previously at `order[k]`.
///
/// `order` must be a permutation of `0..items.len()`.  Items are moved by following the
/// cycles of the permutation, nothing is cloned.
pub(crate) fn apply<T>(items: &mut [T], order: &[usize]) {
    debug_assert_eq!(items.len(), order.len());

    let mut placed = vec![false; items.len()];

    for start in 0..items.len() {
        if placed[start] {
            continue;
        }

        let mut current = start;
        loop {
            placed[current] = true;
            let source = order[current];
            if placed[source] {
                break;
            }
            items.swap(current, source);
            current = source;
        }
    }
}
