use super::*;
use crate::Error;

fn drain<Q: PriorityQueue<u32, &'static str>>(queue: &mut Q) -> Vec<(u32, &'static str)> {
    let mut out = Vec::new();
    while let Ok(entry) = queue.remove_min() {
        out.push(entry);
    }
    out
}

fn fill<Q: PriorityQueue<u32, &'static str>>(queue: &mut Q) {
    for &(key, value) in &[(3, "three"), (1, "one"), (1, "ONE"), (5, "five"), (2, "two")] {
        queue.insert(key, value);
    }
}

#[test]
fn unsorted() {
    let mut queue = UnsortedPriorityQueue::new();
    fill(&mut queue);
    assert_eq!(queue.len(), 5);
    assert_eq!(queue.min(), Ok((&1, &"one")));
    assert_eq!(
        queue.iter().map(|(k, _)| *k).collect::<Vec<_>>(),
        [3, 1, 1, 5, 2],
    );
    assert_eq!(
        drain(&mut queue),
        [(1, "one"), (1, "ONE"), (2, "two"), (3, "three"), (5, "five")],
    );
    assert!(queue.is_empty());
}

#[test]
fn sorted() {
    let mut queue = SortedPriorityQueue::new();
    fill(&mut queue);
    assert_eq!(queue.len(), 5);
    assert_eq!(
        queue.iter().map(|(k, _)| *k).collect::<Vec<_>>(),
        [1, 1, 2, 3, 5],
    );
    assert_eq!(queue.min(), Ok((&1, &"one")));
    assert_eq!(
        drain(&mut queue),
        [(1, "one"), (1, "ONE"), (2, "two"), (3, "three"), (5, "five")],
    );
}

#[test]
fn empty_queues_fail_loudly() {
    let mut unsorted = UnsortedPriorityQueue::<u32, ()>::default();
    assert_eq!(unsorted.min(), Err(Error::Empty));
    assert_eq!(unsorted.remove_min(), Err(Error::Empty));
    let mut sorted = SortedPriorityQueue::<u32, ()>::default();
    assert_eq!(sorted.min(), Err(Error::Empty));
    assert_eq!(sorted.remove_min(), Err(Error::Empty));
}
