//! Merge sort. Recursive divide-and-conquer: split the slice in half, sort
//! each run, then merge the runs through per-step scratch buffers back into
//! the caller's slice. Scratch allocation is fallible and surfaces through
//! the `try_` entry points. Ties between the two runs drain the right run
//! first, so equal elements do not keep their original order and the sort is
//! advertised as unstable. O(n log n) time, O(n) auxiliary space.

use std::cmp::Ordering;
use std::collections::TryReserveError;
use std::mem;

use crate::elem;

sort_impl!("merge_unstable");

/// Sorts `v`.
///
/// Panics if a scratch buffer cannot be allocated; use [`try_sort`] to handle
/// that case.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    if let Err(err) = try_sort(v) {
        scratch_alloc_failed(err);
    }
}

/// Sorts `v` with a comparator.
///
/// Panics if a scratch buffer cannot be allocated; use [`try_sort_by`] to
/// handle that case.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if let Err(err) = try_sort_by(v, compare) {
        scratch_alloc_failed(err);
    }
}

/// Sorts `v`, reporting scratch buffer allocation failure.
///
/// On `Err` the slice holds an unspecified permutation of its original
/// elements.
#[inline]
pub fn try_sort<T>(v: &mut [T]) -> Result<(), TryReserveError>
where
    T: Ord,
{
    try_sort_by(v, |a, b| a.cmp(b))
}

/// Sorts `v` with a comparator, reporting scratch buffer allocation failure.
///
/// On `Err` the slice holds an unspecified permutation of its original
/// elements.
pub fn try_sort_by<T, F>(v: &mut [T], mut compare: F) -> Result<(), TryReserveError>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if mem::size_of::<T>() == 0 {
        // Sorting has no meaningful behavior on zero-sized types, and the
        // pointer-bump merge below cannot make progress on width zero.
        return Ok(());
    }

    merge_sort(v, &mut |a, b| compare(a, b) == Ordering::Less)
}

fn merge_sort<T, F>(v: &mut [T], is_less: &mut F) -> Result<(), TryReserveError>
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return Ok(());
    }

    // The left run takes the extra element on odd lengths.
    let mid = len - len / 2;

    let (left, right) = v.split_at_mut(mid);
    merge_sort(left, is_less)?;
    merge_sort(right, is_less)?;

    merge(v, mid, is_less)
}

/// Merges the sorted runs `v[..mid]` and `v[mid..]`.
///
/// Both runs are moved out into scratch storage sized exactly to the run,
/// then merged back front to front. The left element is taken only when it
/// strictly precedes the right one; ties take from the right run.
fn merge<T, F>(v: &mut [T], mid: usize, is_less: &mut F) -> Result<(), TryReserveError>
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    debug_assert!(mid > 0 && mid < len);

    let left_len = mid;
    let right_len = len - mid;

    // Each merge step allocates its own pair of scratch buffers. A single
    // buffer shared across the recursion would halve allocator traffic, at
    // the cost of holding the full-length scratch alive for the whole sort.
    let mut left_buf: Vec<T> = Vec::new();
    left_buf.try_reserve_exact(left_len)?;
    let mut right_buf: Vec<T> = Vec::new();
    right_buf.try_reserve_exact(right_len)?;

    // The scratch vectors keep length zero throughout, so they only ever
    // free raw capacity. Ownership of the moved-out elements is tracked by
    // `writeback`: dropping it moves every unconsumed scratch element back
    // into the hole in `v`. That one mechanism performs the remainder copy
    // on normal exit and restores the element multiset if `is_less` panics
    // mid-merge.
    unsafe {
        let v_ptr = v.as_mut_ptr();
        elem::copy(v_ptr, left_buf.as_mut_ptr(), left_len);
        elem::copy(v_ptr.add(mid), right_buf.as_mut_ptr(), right_len);

        let mut writeback = Writeback {
            left: left_buf.as_ptr(),
            left_end: left_buf.as_ptr().add(left_len),
            right: right_buf.as_ptr(),
            right_end: right_buf.as_ptr().add(right_len),
            dest: v_ptr,
        };

        while writeback.left < writeback.left_end && writeback.right < writeback.right_end {
            if is_less(&*writeback.left, &*writeback.right) {
                elem::copy(writeback.left, writeback.dest, 1);
                writeback.left = writeback.left.add(1);
            } else {
                elem::copy(writeback.right, writeback.dest, 1);
                writeback.right = writeback.right.add(1);
            }
            writeback.dest = writeback.dest.add(1);
        }

        // Dropping `writeback` moves the remainder of the unexhausted run
        // back in run order.
    }

    Ok(())
}

/// Unconsumed parts of the two scratch runs during a merge. On drop, moves
/// what is left back into the hole in the output slice, left run first.
struct Writeback<T> {
    left: *const T,
    left_end: *const T,
    right: *const T,
    right_end: *const T,
    dest: *mut T,
}

impl<T> Drop for Writeback<T> {
    fn drop(&mut self) {
        // After a completed merge at most one run is non-empty; after a
        // comparator panic both may be.
        unsafe {
            let left_rest = self.left_end.offset_from(self.left) as usize;
            elem::copy(self.left, self.dest, left_rest);
            self.dest = self.dest.add(left_rest);

            let right_rest = self.right_end.offset_from(self.right) as usize;
            elem::copy(self.right, self.dest, right_rest);
        }
    }
}

#[cold]
#[inline(never)]
fn scratch_alloc_failed(err: TryReserveError) -> ! {
    panic!("merge sort scratch buffer allocation failed: {err}");
}
