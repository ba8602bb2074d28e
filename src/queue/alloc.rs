use std::{
    alloc::{self, Layout},
    ptr::NonNull,
};

use crate::error::QueueError;

/// Moves `value` into a new heap allocation, reporting exhaustion instead of aborting.
pub(crate) fn try_box<T>(value: T, what: &'static str) -> Result<Box<T>, QueueError> {
    let layout = Layout::new::<T>();
    if layout.size() == 0 {
        return Ok(Box::new(value));
    }
    // SAFETY: layout has a non-zero size.
    let raw = unsafe { alloc::alloc(layout) } as *mut T;
    let Some(ptr) = NonNull::new(raw) else {
        return Err(QueueError::AllocationFailure {
            what,
            size: layout.size(),
        });
    };
    // SAFETY: ptr is freshly allocated with the layout of T, which is exactly what
    // Box expects to free.
    unsafe {
        ptr.as_ptr().write(value);
        Ok(Box::from_raw(ptr.as_ptr()))
    }
}

/// Copies `s` into storage owned by the caller, never aliasing the input.
pub(crate) fn try_copy_str(s: &str) -> Result<String, QueueError> {
    let mut copy = String::new();
    copy.try_reserve_exact(s.len())
        .map_err(|_| QueueError::AllocationFailure {
            what: "payload",
            size: s.len(),
        })?;
    copy.push_str(s);
    Ok(copy)
}

#[cfg(test)]
mod test {
    use super::{try_box, try_copy_str};

    #[test]
    fn copy_is_a_distinct_allocation() {
        let original = String::from("banana");
        let copy = try_copy_str(&original).unwrap();
        assert_eq!(copy, original);
        assert_ne!(copy.as_ptr(), original.as_ptr());
    }

    #[test]
    fn boxes_zero_sized_values() {
        assert!(try_box((), "unit").is_ok());
        let boxed = try_box(405u64, "word").unwrap();
        assert_eq!(*boxed, 405);
    }
}
