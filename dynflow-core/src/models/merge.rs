/// Merges several sorted breakpoint sequences into one sorted sequence of
/// distinct values.
///
/// A classic k-way merge with duplicate suppression: one cursor per input,
/// the smallest cursor head is emitted and every cursor sitting on that
/// value advances. Values may repeat across inputs but each input must be
/// strictly increasing. O(total breakpoints × number of inputs), which is
/// fine for the handful of commodities an edge carries.
///
/// Empty inputs contribute nothing; an empty collection yields an empty
/// output.
pub fn merge_breakpoints<'a, I>(lists: I) -> Vec<f64>
where
    I: IntoIterator<Item = &'a [f64]>,
{
    let lists = lists.into_iter().collect::<Vec<_>>();
    let mut cursors = vec![0usize; lists.len()];
    let mut merged = Vec::with_capacity(lists.iter().map(|list| list.len()).max().unwrap_or(0));

    loop {
        let mut min = f64::INFINITY;
        let mut found = false;
        for (list, &cursor) in lists.iter().zip(cursors.iter()) {
            if cursor < list.len() && list[cursor] <= min {
                min = list[cursor];
                found = true;
            }
        }
        if !found {
            return merged;
        }

        merged.push(min);
        for (list, cursor) in lists.iter().zip(cursors.iter_mut()) {
            if *cursor < list.len() && list[*cursor] == min {
                *cursor += 1;
            }
        }
    }
}
