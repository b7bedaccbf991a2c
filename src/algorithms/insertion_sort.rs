use core::cmp::Ordering;
use crate::{positional_list::PositionalList, util::own_position};

/// Sorts a positional list in ascending order with insertion sort.
///
/// The sort is stable, runs in place and takes quadratic time in the worst case. Elements are moved by deleting and reinserting them, so positions of moved elements are invalidated.
///
/// # Example
/// ```rust
/// use positree::{algorithms::insertion_sort, PositionalList};
///
/// let mut list: PositionalList<_> = vec![57, 55, 70, 48, 52, 28].into_iter().collect();
/// insertion_sort(&mut list);
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), [28, 48, 52, 55, 57, 70]);
/// ```
#[inline]
pub fn insertion_sort<T: Ord>(list: &mut PositionalList<T>) {
    insertion_sort_by(list, T::cmp)
}

/// Sorts a positional list with insertion sort, using `compare` to order the elements.
///
/// An element is only moved in front of elements which compare strictly greater, so elements which compare equal keep their relative order.
pub fn insertion_sort_by<T, F>(list: &mut PositionalList<T>, mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut marker = match list.first() {
        Some(first) => first,
        None => return,
    };
    // Everything up to and including the marker is sorted
    while let Some(pivot) = own_position(list.after(marker)) {
        let pivot_value = own_position(list.get(pivot));
        if compare(pivot_value, own_position(list.get(marker))) != Ordering::Less {
            marker = pivot;
            continue;
        }
        let mut walk = marker;
        while let Some(prev) = own_position(list.before(walk)) {
            if compare(own_position(list.get(prev)), pivot_value) != Ordering::Greater {
                break;
            }
            walk = prev;
        }
        let value = own_position(list.delete(pivot));
        own_position(list.add_before(walk, value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorts() {
        let mut list: PositionalList<_> = vec![57, 55, 70, 48, 52, 28, 18, 60, 44, 8].into_iter().collect();
        insertion_sort(&mut list);
        assert_eq!(
            list.iter().copied().collect::<Vec<_>>(),
            [8, 18, 28, 44, 48, 52, 55, 57, 60, 70],
        );
        let mut empty = PositionalList::<u8>::new();
        insertion_sort(&mut empty);
        assert!(empty.is_empty());
    }

    #[test]
    fn is_stable() {
        let mut list: PositionalList<_> = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd'), (0, 'e')]
            .into_iter()
            .collect();
        insertion_sort_by(&mut list, |a, b| a.0.cmp(&b.0));
        assert_eq!(
            list.iter().map(|&(_, tag)| tag).collect::<String>(),
            "ebdac",
        );
    }
}
