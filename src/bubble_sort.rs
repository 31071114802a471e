use crate::Step;
use ndarray::{ArrayView1, ArrayViewMut1};

/// Sorts `v` using bubble sort, which is *O*(*n*^2) worst-case.
///
/// Emits [`Step::Swap`] after every exchange of adjacent elements and [`Step::Pass`] after every
/// outer pass.
pub fn bubble_sort<T, F, S>(mut v: ArrayViewMut1<'_, T>, is_less: &mut F, step: &mut S)
where
	F: FnMut(&T, &T) -> bool,
	S: FnMut(Step, ArrayView1<'_, T>),
{
	let len = v.len();
	for i in 0..len.saturating_sub(1) {
		// After pass `i`, the greatest `i + 1` elements are in place.
		for j in 0..len - i - 1 {
			if is_less(&v[j + 1], &v[j]) {
				v.swap(j, j + 1);
				step(Step::Swap, v.view());
			}
		}
		step(Step::Pass, v.view());
	}
}

#[cfg(test)]
mod test {
	use super::bubble_sort;
	use crate::{Step, permutation, sequence::is_permutation};
	use ndarray::{Array1, arr1};
	use quickcheck_macros::quickcheck;

	#[quickcheck]
	fn sorted(xs: Vec<u32>) {
		let mut sorted = xs.clone();
		sorted.sort_unstable();
		let sorted = Array1::from_vec(sorted);
		let mut array = Array1::from_vec(xs);
		bubble_sort(array.view_mut(), &mut u32::lt, &mut |_, _| ());
		assert_eq!(array, sorted);
	}

	#[quickcheck]
	fn permutation_at_every_step(len: u8, seed: u64) {
		let mut array = permutation(len as usize, seed);
		bubble_sort(array.view_mut(), &mut u32::lt, &mut |_, v| {
			assert!(is_permutation(v));
		});
		assert_eq!(array, Array1::from_iter(1..=len as u32));
	}

	#[test]
	fn swaps_of_three() {
		let mut array = arr1(&[3, 1, 2]);
		let mut swaps = Vec::new();
		bubble_sort(array.view_mut(), &mut u32::lt, &mut |s, v| {
			if s == Step::Swap {
				swaps.push(v.to_vec());
			}
		});
		assert_eq!(swaps, [vec![1, 3, 2], vec![1, 2, 3]]);
		assert_eq!(array, arr1(&[1, 2, 3]));
	}

	#[quickcheck]
	fn sorted_input_never_swaps(len: u8) {
		let mut array = Array1::from_iter(1..=len as u32);
		let mut passes = 0;
		bubble_sort(array.view_mut(), &mut u32::lt, &mut |s, _| {
			assert_eq!(s, Step::Pass);
			passes += 1;
		});
		assert_eq!(passes, (len as usize).saturating_sub(1));
		assert_eq!(array, Array1::from_iter(1..=len as u32));
	}
}
