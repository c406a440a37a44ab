//! Raw owned buffer: allocation, reallocation, and release.
//!
//! [`RawBuf`] is the vector's allocator adapter. It owns one contiguous
//! heap allocation of `cap` element slots and nothing else — it never
//! reads or drops elements, so it can be reasoned about purely in terms
//! of bytes. All `unsafe` allocator calls in the crate live here.
//!
//! Growth preserves the prefix in place: an existing block is resized with
//! `realloc`, so the allocator may extend it without copying. Every grow
//! or shrink invalidates raw pointers previously derived from the buffer.
//!
//! Zero-sized element types never allocate. Their capacity reports
//! `usize::MAX` so the `len <= cap` invariant holds for any length, and
//! the pointer stays dangling (well-aligned, never dereferenced as a
//! real allocation).

use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::mem;
use std::ptr::NonNull;

use crate::error::VecError;

/// Exclusively owned heap storage for `cap` slots of `T`.
///
/// Invariant: `cap == 0` (or `T` zero-sized) exactly when no allocation
/// exists, in which case `ptr` is dangling. Slot initialisation is the
/// caller's business; `RawBuf` tracks capacity only.
pub(crate) struct RawBuf<T> {
    /// Pointer to the allocation. `NonNull` is covariant over `T` and
    /// null-pointer optimised; dangling when nothing is allocated.
    ptr: NonNull<T>,
    /// Size of the current allocation in element slots.
    cap: usize,
    /// Tells the drop checker this type may own values of `T`.
    _owns: PhantomData<T>,
}

unsafe impl<T: Send> Send for RawBuf<T> {}
unsafe impl<T: Sync> Sync for RawBuf<T> {}

impl<T> RawBuf<T> {
    /// The unallocated state: dangling pointer, zero capacity
    /// (`usize::MAX` for zero-sized `T`, which never allocates).
    pub(crate) const fn empty() -> Self {
        let cap = if mem::size_of::<T>() == 0 { usize::MAX } else { 0 };
        Self {
            ptr: NonNull::dangling(),
            cap,
            _owns: PhantomData,
        }
    }

    /// Allocate storage for exactly `cap` slots, eagerly.
    ///
    /// `cap == 0` and zero-sized `T` make no allocator call and return
    /// the empty state.
    ///
    /// # Panics
    ///
    /// Panics if `cap * size_of::<T>()` exceeds `isize::MAX` bytes.
    ///
    /// # Aborts
    ///
    /// Aborts via `handle_alloc_error` if the allocator refuses.
    pub(crate) fn with_capacity(cap: usize) -> Self {
        let layout = match Layout::array::<T>(cap) {
            Ok(layout) => layout,
            Err(_) => panic!("capacity overflow"),
        };
        if layout.size() == 0 {
            return Self::empty();
        }

        let raw = unsafe { alloc::alloc(layout) };
        let ptr = match NonNull::new(raw.cast::<T>()) {
            Some(ptr) => ptr,
            None => alloc::handle_alloc_error(layout),
        };
        Self {
            ptr,
            cap,
            _owns: PhantomData,
        }
    }

    /// Pointer to the first slot. Dangling (but well-aligned) when
    /// nothing is allocated; invalidated by any grow/shrink/release.
    #[inline]
    pub(crate) const fn ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Current capacity in element slots.
    #[inline]
    pub(crate) const fn cap(&self) -> usize {
        self.cap
    }

    /// Grow the allocation to exactly `new_cap` slots, preserving the
    /// first `min(cap, new_cap)` slots' bytes at the same offsets.
    ///
    /// No-op for zero-sized `T`. Callers pass `new_cap >= cap`; the
    /// buffer never shrinks through this path.
    ///
    /// # Panics / Aborts
    ///
    /// Panics on capacity overflow, aborts on allocator failure, as
    /// [`RawBuf::with_capacity`].
    pub(crate) fn grow_to(&mut self, new_cap: usize) {
        if mem::size_of::<T>() == 0 {
            return;
        }
        debug_assert!(new_cap >= self.cap, "grow_to must not shrink");

        let new_layout = match Layout::array::<T>(new_cap) {
            Ok(layout) => layout,
            Err(_) => panic!("capacity overflow"),
        };
        let raw = unsafe { self.realloc_raw(new_layout) };
        self.ptr = match NonNull::new(raw.cast::<T>()) {
            Some(ptr) => ptr,
            None => alloc::handle_alloc_error(new_layout),
        };
        self.cap = new_cap;
    }

    /// Fallible variant of [`RawBuf::grow_to`].
    ///
    /// On failure the existing allocation (and every slot in it) is left
    /// untouched: a failed `realloc` keeps the old block alive, and the
    /// pointer/capacity fields are only updated on success.
    pub(crate) fn try_grow_to(&mut self, new_cap: usize) -> Result<(), VecError> {
        if mem::size_of::<T>() == 0 || new_cap <= self.cap {
            return Ok(());
        }

        let Ok(new_layout) = Layout::array::<T>(new_cap) else {
            return Err(VecError::AllocationFailed {
                bytes: mem::size_of::<T>().saturating_mul(new_cap),
            });
        };
        let raw = unsafe { self.realloc_raw(new_layout) };
        match NonNull::new(raw.cast::<T>()) {
            Some(ptr) => {
                self.ptr = ptr;
                self.cap = new_cap;
                Ok(())
            }
            None => Err(VecError::AllocationFailed {
                bytes: new_layout.size(),
            }),
        }
    }

    /// Shrink the allocation to exactly `new_cap` slots.
    ///
    /// `new_cap == 0` releases the buffer entirely, restoring the empty
    /// state. Callers pass `new_cap <= cap` and must have vacated every
    /// slot at or past `new_cap`.
    pub(crate) fn shrink_to(&mut self, new_cap: usize) {
        debug_assert!(new_cap <= self.cap, "shrink_to must not grow");
        if mem::size_of::<T>() == 0 || new_cap == self.cap {
            return;
        }
        if new_cap == 0 {
            self.release();
            return;
        }

        let new_layout =
            Layout::array::<T>(new_cap).expect("shrunk layout fits inside the live one");
        let raw = unsafe { self.realloc_raw(new_layout) };
        self.ptr = match NonNull::new(raw.cast::<T>()) {
            Some(ptr) => ptr,
            None => alloc::handle_alloc_error(new_layout),
        };
        self.cap = new_cap;
    }

    /// Release any allocation and reset to the empty state.
    pub(crate) fn release(&mut self) {
        if self.cap != 0 && mem::size_of::<T>() != 0 {
            let layout = Layout::array::<T>(self.cap).expect("live buffer has a valid layout");
            unsafe {
                alloc::dealloc(self.ptr.as_ptr().cast::<u8>(), layout);
            }
        }
        self.ptr = NonNull::dangling();
        self.cap = if mem::size_of::<T>() == 0 { usize::MAX } else { 0 };
    }

    /// Resize the underlying block to `new_layout`, allocating fresh when
    /// nothing is allocated yet. Returns the raw (possibly null) pointer;
    /// the caller decides between abort and error. On `realloc` failure
    /// the old block remains valid and owned.
    ///
    /// # Safety
    ///
    /// `new_layout` must be a valid non-zero-size array layout for `T`,
    /// and `T` must not be zero-sized.
    unsafe fn realloc_raw(&mut self, new_layout: Layout) -> *mut u8 {
        if self.cap == 0 {
            alloc::alloc(new_layout)
        } else {
            let old_layout =
                Layout::array::<T>(self.cap).expect("live buffer has a valid layout");
            alloc::realloc(self.ptr.as_ptr().cast::<u8>(), old_layout, new_layout.size())
        }
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        if self.cap != 0 && mem::size_of::<T>() != 0 {
            let layout = Layout::array::<T>(self.cap).expect("live buffer has a valid layout");
            unsafe {
                alloc::dealloc(self.ptr.as_ptr().cast::<u8>(), layout);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_state_has_no_allocation() {
        let buf = RawBuf::<u64>::empty();
        assert_eq!(buf.cap(), 0);
    }

    #[test]
    fn with_capacity_zero_is_empty() {
        let buf = RawBuf::<u64>::with_capacity(0);
        assert_eq!(buf.cap(), 0);
    }

    #[test]
    fn with_capacity_allocates_exactly() {
        let buf = RawBuf::<u32>::with_capacity(8);
        assert_eq!(buf.cap(), 8);
    }

    #[test]
    fn grow_preserves_prefix() {
        let mut buf = RawBuf::<u32>::with_capacity(4);
        unsafe {
            for i in 0..4 {
                buf.ptr().add(i).write(i as u32 * 10);
            }
        }
        buf.grow_to(16);
        assert_eq!(buf.cap(), 16);
        unsafe {
            for i in 0..4 {
                assert_eq!(buf.ptr().add(i).read(), i as u32 * 10);
            }
        }
    }

    #[test]
    fn grow_from_empty_allocates() {
        let mut buf = RawBuf::<u8>::empty();
        buf.grow_to(32);
        assert_eq!(buf.cap(), 32);
    }

    #[test]
    fn shrink_preserves_kept_slots() {
        let mut buf = RawBuf::<u16>::with_capacity(10);
        unsafe {
            for i in 0..10 {
                buf.ptr().add(i).write(i as u16);
            }
        }
        buf.shrink_to(3);
        assert_eq!(buf.cap(), 3);
        unsafe {
            for i in 0..3 {
                assert_eq!(buf.ptr().add(i).read(), i as u16);
            }
        }
    }

    #[test]
    fn shrink_to_zero_releases() {
        let mut buf = RawBuf::<u16>::with_capacity(10);
        buf.shrink_to(0);
        assert_eq!(buf.cap(), 0);
    }

    #[test]
    fn try_grow_succeeds_on_reasonable_request() {
        let mut buf = RawBuf::<u64>::with_capacity(2);
        assert_eq!(buf.try_grow_to(64), Ok(()));
        assert_eq!(buf.cap(), 64);
    }

    #[test]
    fn try_grow_rejects_overflowing_request() {
        let mut buf = RawBuf::<u64>::empty();
        let result = buf.try_grow_to(usize::MAX);
        assert!(matches!(result, Err(VecError::AllocationFailed { .. })));
        // Failed growth leaves the buffer untouched.
        assert_eq!(buf.cap(), 0);
    }

    #[test]
    fn try_grow_to_smaller_is_noop() {
        let mut buf = RawBuf::<u64>::with_capacity(8);
        assert_eq!(buf.try_grow_to(4), Ok(()));
        assert_eq!(buf.cap(), 8);
    }

    #[test]
    fn zst_never_allocates() {
        let mut buf = RawBuf::<()>::with_capacity(100);
        assert_eq!(buf.cap(), usize::MAX);
        buf.grow_to(usize::MAX);
        assert_eq!(buf.cap(), usize::MAX);
        buf.release();
        assert_eq!(buf.cap(), usize::MAX);
    }
}
