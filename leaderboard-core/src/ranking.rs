//! Ranking order and the heap sort used for every ranked listing.

use std::cmp::Ordering;

use crate::array::{ArrayError, DynamicArray};
use crate::registry::Player;

/// Returns `true` if `a` ranks strictly ahead of `b`.
///
/// Players with a recorded best come before players without one. Among
/// scored players the higher best wins; remaining ties, including two
/// unscored players, go to the lexicographically smaller name.
pub fn better(a: &Player, b: &Player) -> bool {
    match (a.best(), b.best()) {
        (Some(x), Some(y)) if x != y => x > y,
        (Some(_), None) => true,
        (None, Some(_)) => false,
        _ => a.name() < b.name(),
    }
}

/// [`better`] expressed as an [`Ordering`], `Less` meaning "ranks first".
pub fn rank_order(a: &Player, b: &Player) -> Ordering {
    if better(a, b) {
        Ordering::Less
    } else if better(b, a) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

/// Sort `players` in place so the best-ranked player comes first.
pub fn heap_sort(players: &mut DynamicArray<&Player>) -> Result<(), ArrayError> {
    heap_sort_by(players, |a, b| better(a, b))
}

/// In-place heap sort where `greater(a, b)` means `a` belongs earlier in
/// the final order.
///
/// A max-heap under `greater` is built and drained to the back, which
/// leaves the array in reverse rank order; a final reversal puts the
/// highest-ranked item at index 0.
pub fn heap_sort_by<T, F>(items: &mut DynamicArray<T>, greater: F) -> Result<(), ArrayError>
where
    F: Fn(&T, &T) -> bool,
{
    let n = items.length();

    for start in (0..n / 2).rev() {
        sift_down(items, start, n, &greater)?;
    }

    for end in (1..n).rev() {
        items.swap(0, end)?;
        sift_down(items, 0, end, &greater)?;
    }

    let (mut i, mut j) = (0, n.saturating_sub(1));
    while i < j {
        items.swap(i, j)?;
        i += 1;
        j -= 1;
    }
    Ok(())
}

fn sift_down<T, F>(
    items: &mut DynamicArray<T>,
    start: usize,
    size: usize,
    greater: &F,
) -> Result<(), ArrayError>
where
    F: Fn(&T, &T) -> bool,
{
    let mut root = start;
    loop {
        let left = 2 * root + 1;
        let right = left + 1;
        let mut largest = root;

        if left < size && greater(items.get(left)?, items.get(largest)?) {
            largest = left;
        }
        if right < size && greater(items.get(right)?, items.get(largest)?) {
            largest = right;
        }
        if largest == root {
            return Ok(());
        }
        items.swap(root, largest)?;
        root = largest;
    }
}
