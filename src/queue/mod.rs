//! A singly linked queue of owned strings.
//!
//! Every element is owned by exactly one holder: the queue owns the head, and each
//! element owns its successor through `next`. The `tail` link is the only extra
//! reference and is never used to free anything.

pub(crate) mod alloc;
mod sort;

use std::{fmt, iter::FusedIterator, marker::PhantomData, ptr::NonNull};

use crate::error::QueueError;

use self::alloc::{try_box, try_copy_str};

type Link = Option<NonNull<Element>>;

struct Element {
    value: String,
    next: Link,
}

pub struct StringQueue {
    head: Link,
    tail: Link,
    len: usize,
    _owns: PhantomData<Box<Element>>,
}

impl StringQueue {
    pub const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
            _owns: PhantomData,
        }
    }

    fn allocate(value: &str, next: Link) -> Result<NonNull<Element>, QueueError> {
        let value = try_copy_str(value)?;
        // The payload copy is dropped if the element allocation fails.
        let element = try_box(Element { value, next }, "element")?;
        Ok(NonNull::from(Box::leak(element)))
    }

    /// Inserts a copy of `value` before the current head in O(1).
    ///
    /// On allocation failure the queue is left untouched.
    pub fn insert_head(&mut self, value: &str) -> Result<(), QueueError> {
        let element = Self::allocate(value, self.head)?;
        if self.tail.is_none() {
            self.tail = Some(element);
        }
        self.head = Some(element);
        self.len += 1;
        Ok(())
    }

    /// Inserts a copy of `value` after the current tail in O(1).
    ///
    /// On allocation failure the queue is left untouched.
    pub fn insert_tail(&mut self, value: &str) -> Result<(), QueueError> {
        let element = Self::allocate(value, None)?;
        match self.tail {
            // SAFETY: tail is a live element of this queue and we hold &mut self.
            Some(tail) => unsafe { (*tail.as_ptr()).next = Some(element) },
            None => self.head = Some(element),
        }
        self.tail = Some(element);
        self.len += 1;
        Ok(())
    }

    /// Detaches the head element and hands its payload to the caller.
    pub fn remove_head(&mut self) -> Option<String> {
        let head = self.head?;
        // SAFETY: head was produced by `allocate` and is owned by this queue. After it
        // is unlinked below no other link refers to it.
        let element = unsafe { Box::from_raw(head.as_ptr()) };
        let Element { value, next } = *element;
        self.head = next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        Some(value)
    }

    /// Removes the head element, copying its string into `buf` when one is given.
    ///
    /// At most `buf.len() - 1` bytes are copied and the rest of the buffer is zeroed, so
    /// the result is always NUL-terminated. A longer string is truncated silently.
    /// Returns `false` without touching anything when the queue is empty.
    pub fn remove_head_into(&mut self, buf: Option<&mut [u8]>) -> bool {
        let Some(value) = self.remove_head() else {
            return false;
        };
        if let Some(buf) = buf {
            copy_truncated(&value, buf);
        }
        true
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn peek_head(&self) -> Option<&str> {
        // SAFETY: live elements stay valid for as long as &self is held.
        self.head
            .map(|head| unsafe { (*head.as_ptr()).value.as_str() })
    }

    pub fn peek_tail(&self) -> Option<&str> {
        // SAFETY: as above.
        self.tail
            .map(|tail| unsafe { (*tail.as_ptr()).value.as_str() })
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head,
            remaining: self.len,
            _queue: PhantomData,
        }
    }

    /// Reverses the link direction in place. No element or payload is allocated,
    /// copied or freed.
    pub fn reverse(&mut self) {
        if self.len < 2 {
            return;
        }
        let mut reversed: Link = None;
        let mut cursor = self.head;
        while let Some(element) = cursor {
            // SAFETY: every element reachable from head is live and owned by us.
            unsafe {
                cursor = (*element.as_ptr()).next;
                (*element.as_ptr()).next = reversed;
            }
            reversed = Some(element);
        }
        self.tail = self.head;
        self.head = reversed;
    }

    /// Stable merge sort into non-decreasing byte-wise order, by relinking only.
    pub fn sort(&mut self) {
        // Empty and single-element queues both have head == tail.
        if self.head == self.tail {
            return;
        }
        // SAFETY: the chain from head is well formed and exclusively ours.
        unsafe {
            self.head = sort::merge_sort(self.head);
            self.tail = sort::last(self.head);
        }
    }

    /// Releases every element, leaving an empty queue.
    pub fn clear(&mut self) {
        while self.remove_head().is_some() {}
    }
}

impl Default for StringQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for StringQueue {
    fn drop(&mut self) {
        self.clear();
    }
}

impl fmt::Debug for StringQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a StringQueue {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over a queue, head to tail.
pub struct Iter<'q> {
    next: Link,
    remaining: usize,
    _queue: PhantomData<&'q StringQueue>,
}

impl<'q> Iterator for Iter<'q> {
    type Item = &'q str;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.next?;
        // SAFETY: the queue is borrowed for 'q, so no element can be freed or relinked.
        let element = unsafe { &*element.as_ptr() };
        self.next = element.next;
        self.remaining -= 1;
        Some(element.value.as_str())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

/// Copies as much of `value` as fits in `buf` while leaving room for a terminating
/// zero byte, and zero-fills the remainder. Returns the number of bytes copied.
pub fn copy_truncated(value: &str, buf: &mut [u8]) -> usize {
    let Some(room) = buf.len().checked_sub(1) else {
        return 0;
    };
    let copied = value.len().min(room);
    buf[..copied].copy_from_slice(&value.as_bytes()[..copied]);
    buf[copied..].fill(0);
    copied
}
