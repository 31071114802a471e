use crate::{Step, maybe_grow};
use ndarray::{ArrayView1, ArrayViewMut1};

/// Sorts `v` using quicksort with Lomuto partitioning, which is *O*(*n*^2) worst-case.
///
/// The last element of every range is its pivot, hence already sorted input hits the worst case
/// and recurses *n* deep. Emits one [`Step::Partition`] per partitioned range.
pub fn quick_sort<T, F, S>(mut v: ArrayViewMut1<'_, T>, is_less: &mut F, step: &mut S)
where
	F: FnMut(&T, &T) -> bool,
	S: FnMut(Step, ArrayView1<'_, T>),
{
	let len = v.len();
	recurse(&mut v, 0, len, is_less, step);
}

/// Sorts `v[lo..hi]` recursively.
fn recurse<T, F, S>(
	v: &mut ArrayViewMut1<'_, T>,
	lo: usize,
	hi: usize,
	is_less: &mut F,
	step: &mut S,
) where
	F: FnMut(&T, &T) -> bool,
	S: FnMut(Step, ArrayView1<'_, T>),
{
	if hi - lo < 2 {
		return;
	}
	let mid = partition(v, lo, hi, is_less);
	step(Step::Partition, v.view());
	maybe_grow(|| recurse(v, lo, mid, is_less, step));
	maybe_grow(|| recurse(v, mid + 1, hi, is_less, step));
}

/// Partitions `v[lo..hi]` around its last element and returns the pivot's final index.
///
/// Elements less than the pivot end up left of it, all others right of it.
fn partition<T, F>(v: &mut ArrayViewMut1<'_, T>, lo: usize, hi: usize, is_less: &mut F) -> usize
where
	F: FnMut(&T, &T) -> bool,
{
	let pivot = hi - 1;
	let mut mid = lo;
	for j in lo..pivot {
		if is_less(&v[j], &v[pivot]) {
			v.swap(mid, j);
			mid += 1;
		}
	}
	v.swap(mid, pivot);
	mid
}

#[cfg(test)]
mod test {
	use super::{partition, quick_sort};
	use crate::{Step, permutation, sequence::is_permutation};
	use ndarray::{Array1, arr1};
	use quickcheck_macros::quickcheck;

	#[quickcheck]
	fn sorted(xs: Vec<u32>) {
		let mut sorted = xs.clone();
		sorted.sort_unstable();
		let sorted = Array1::from_vec(sorted);
		let mut array = Array1::from_vec(xs);
		quick_sort(array.view_mut(), &mut u32::lt, &mut |_, _| ());
		assert_eq!(array, sorted);
	}

	#[quickcheck]
	fn permutation_at_every_step(len: u8, seed: u64) {
		let mut array = permutation(len as usize, seed);
		quick_sort(array.view_mut(), &mut u32::lt, &mut |s, v| {
			assert_eq!(s, Step::Partition);
			assert!(is_permutation(v));
		});
		assert_eq!(array, Array1::from_iter(1..=len as u32));
	}

	#[test]
	fn pair() {
		let mut array = arr1(&[2, 1]);
		let mut steps = Vec::new();
		quick_sort(array.view_mut(), &mut u32::lt, &mut |s, v| {
			steps.push((s, v.to_vec()));
		});
		assert_eq!(steps, [(Step::Partition, vec![1, 2])]);
	}

	#[test]
	fn pivot_index() {
		let mut array = arr1(&[2, 1]);
		assert_eq!(partition(&mut array.view_mut(), 0, 2, &mut u32::lt), 0);
		assert_eq!(array, arr1(&[1, 2]));

		let mut array = arr1(&[5, 1, 4, 2, 3]);
		assert_eq!(partition(&mut array.view_mut(), 0, 5, &mut u32::lt), 2);
		assert_eq!(array, arr1(&[1, 2, 3, 5, 4]));
	}

	#[cfg(feature = "stacker")]
	#[test]
	fn deep_recursion_on_sorted_input() {
		let mut array = Array1::from_iter(1..=10_000u32);
		let mut partitions = 0;
		quick_sort(array.view_mut(), &mut u32::lt, &mut |_, _| partitions += 1);
		assert_eq!(partitions, 9_999);
		assert_eq!(array, Array1::from_iter(1..=10_000u32));
	}
}
