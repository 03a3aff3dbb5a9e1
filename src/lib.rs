//! Classic comparison sorts over generic slices.
//!
//! Each algorithm lives in its own module and exposes the same pair of entry
//! points: `sort` for `T: Ord` and `sort_by` for a caller-supplied comparison
//! function. [`merge`] additionally exposes `try_sort`/`try_sort_by`, which
//! report scratch buffer allocation failure instead of aborting.

macro_rules! sort_impl {
    ($name:expr) => {
        /// Handle for the test and bench harnesses.
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
}

mod elem;

pub mod bubble;
pub mod insertion;
pub mod merge;
