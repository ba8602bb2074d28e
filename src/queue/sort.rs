use std::ptr::NonNull;

use super::{Element, Link};

/// Sorts the chain starting at `head` and returns the new first link.
///
/// # Safety
/// `head` must start a `None`-terminated chain of live elements that nothing else
/// reads or writes for the duration of the call.
pub(super) unsafe fn merge_sort(head: Link) -> Link {
    let Some(first) = head else {
        return None;
    };
    if (*first.as_ptr()).next.is_none() {
        return head;
    }
    let second_half = split_after_midpoint(first);
    let left = merge_sort(head);
    let right = merge_sort(second_half);
    merge(left, right)
}

/// Cuts the chain after its `ceil(n / 2)`-th element and returns the detached rest.
///
/// `slow` moves one link for every two `fast` moves, so no length pass is needed.
unsafe fn split_after_midpoint(first: NonNull<Element>) -> Link {
    let mut slow = first;
    let mut fast = (*first.as_ptr()).next;
    while let Some(runner) = fast {
        let Some(after) = (*runner.as_ptr()).next else {
            break;
        };
        match (*slow.as_ptr()).next {
            Some(next) => slow = next,
            None => break,
        }
        fast = (*after.as_ptr()).next;
    }
    (*slow.as_ptr()).next.take()
}

/// Merges two sorted chains by relinking. Ties take from `left`, which keeps the sort
/// stable.
unsafe fn merge(mut left: Link, mut right: Link) -> Link {
    let mut head: Link = None;
    let mut last: Link = None;
    loop {
        let (l, r) = match (left, right) {
            (Some(l), Some(r)) => (l, r),
            (rest, None) | (None, rest) => {
                append(&mut head, last, rest);
                return head;
            }
        };
        let taken = if (*l.as_ptr()).value <= (*r.as_ptr()).value {
            left = (*l.as_ptr()).next;
            l
        } else {
            right = (*r.as_ptr()).next;
            r
        };
        append(&mut head, last, Some(taken));
        last = Some(taken);
    }
}

unsafe fn append(head: &mut Link, last: Link, link: Link) {
    match last {
        Some(last) => (*last.as_ptr()).next = link,
        None => *head = link,
    }
}

/// Follows `next` from `head` to the final element.
pub(super) unsafe fn last(head: Link) -> Link {
    let mut cursor = head?;
    while let Some(next) = (*cursor.as_ptr()).next {
        cursor = next;
    }
    Some(cursor)
}

#[cfg(test)]
mod test {
    use std::ptr::NonNull;

    use super::{super::test::assert_invariants, split_after_midpoint};
    use crate::queue::{Element, StringQueue};

    fn queue_of(values: &[&str]) -> StringQueue {
        let mut queue = StringQueue::new();
        for value in values {
            queue.insert_tail(value).unwrap();
        }
        queue
    }

    fn elements(queue: &StringQueue) -> Vec<NonNull<Element>> {
        let mut out = Vec::new();
        let mut cursor = queue.head;
        while let Some(element) = cursor {
            out.push(element);
            cursor = unsafe { element.as_ref() }.next;
        }
        out
    }

    #[test]
    fn split_point_is_ceiling_of_half() {
        for len in 2..10usize {
            let values: Vec<String> = (0..len).map(|i| i.to_string()).collect();
            let refs: Vec<&str> = values.iter().map(String::as_str).collect();
            let queue = queue_of(&refs);
            let nodes = elements(&queue);
            let first = queue.head.unwrap();
            let rest = unsafe { split_after_midpoint(first) };
            assert_eq!(rest, Some(nodes[len.div_ceil(2)]), "len {len}");
            // Rejoin so the queue frees every element on drop.
            unsafe { (*nodes[len.div_ceil(2) - 1].as_ptr()).next = rest };
            assert_invariants(&queue);
        }
    }

    #[test]
    fn sort_is_stable_for_equal_values() {
        let mut queue = queue_of(&["b", "a", "b", "a", "b"]);
        let before = elements(&queue);
        queue.sort();
        assert_invariants(&queue);
        let after = elements(&queue);
        assert_eq!(
            after,
            [before[1], before[3], before[0], before[2], before[4]]
        );
    }

    #[test]
    fn sort_relinks_without_moving_payloads() {
        let mut queue = queue_of(&["pear", "fig", "kiwi"]);
        let mut before: Vec<(String, *const u8)> = queue
            .iter()
            .map(|value| (value.to_owned(), value.as_ptr()))
            .collect();
        queue.sort();
        before.sort();
        let after: Vec<(String, *const u8)> = queue
            .iter()
            .map(|value| (value.to_owned(), value.as_ptr()))
            .collect();
        assert_eq!(before, after);
    }

    #[test]
    fn sort_is_idempotent() {
        let mut queue = queue_of(&["c", "a", "d", "b", "a"]);
        queue.sort();
        let once = elements(&queue);
        queue.sort();
        assert_eq!(elements(&queue), once);
        assert_eq!(queue.iter().collect::<Vec<_>>(), ["a", "a", "b", "c", "d"]);
    }

    #[test]
    fn byte_order_matches_strcmp() {
        let mut queue = queue_of(&["b", "B", "ab", "a", "", "é", "z"]);
        queue.sort();
        assert_invariants(&queue);
        assert_eq!(
            queue.iter().collect::<Vec<_>>(),
            ["", "B", "a", "ab", "b", "z", "é"]
        );
    }
}
