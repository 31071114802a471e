use crate::{Step, maybe_grow};
use ndarray::{ArrayView1, ArrayViewMut1};

/// How often merge sort reports progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum MergeSteps {
	/// One [`Step::Merge`] per completed merge of a sub-range.
	#[default]
	PerMerge,
	/// Additionally one [`Step::Write`] whenever an element of the right run is moved into place.
	PerWrite,
}

/// Sorts `v` using top-down merge sort.
///
/// This sort is stable (i.e., does not reorder equal elements). Runs are merged in place by
/// rotation, so every snapshot handed to `step` is a permutation of the input. This makes merging
/// *O*(*n*^2) worst-case, which is irrelevant at animation speed.
pub fn merge_sort<T, F, S>(
	mut v: ArrayViewMut1<'_, T>,
	granularity: MergeSteps,
	is_less: &mut F,
	step: &mut S,
) where
	F: FnMut(&T, &T) -> bool,
	S: FnMut(Step, ArrayView1<'_, T>),
{
	let len = v.len();
	recurse(&mut v, 0, len, granularity, is_less, step);
}

/// Sorts `v[lo..hi]` recursively.
fn recurse<T, F, S>(
	v: &mut ArrayViewMut1<'_, T>,
	lo: usize,
	hi: usize,
	granularity: MergeSteps,
	is_less: &mut F,
	step: &mut S,
) where
	F: FnMut(&T, &T) -> bool,
	S: FnMut(Step, ArrayView1<'_, T>),
{
	if hi - lo < 2 {
		return;
	}
	let mid = lo + (hi - lo) / 2;
	maybe_grow(|| recurse(v, lo, mid, granularity, is_less, step));
	maybe_grow(|| recurse(v, mid, hi, granularity, is_less, step));
	merge(v, lo, mid, hi, granularity, is_less, step);
	step(Step::Merge, v.view());
}

/// Merges non-decreasing runs `v[lo..mid]` and `v[mid..hi]` into `v[lo..hi]`.
fn merge<T, F, S>(
	v: &mut ArrayViewMut1<'_, T>,
	lo: usize,
	mid: usize,
	hi: usize,
	granularity: MergeSteps,
	is_less: &mut F,
	step: &mut S,
) where
	F: FnMut(&T, &T) -> bool,
	S: FnMut(Step, ArrayView1<'_, T>),
{
	// `v[lo..left]` is merged, `v[left..right]` is what remains of the left run.
	let mut left = lo;
	let mut right = mid;
	while left < right && right < hi {
		// If equal, prefer the left run to maintain stability.
		if is_less(&v[right], &v[left]) {
			// Rotate `v[left..=right]` by one, moving the head of the right run to `left`.
			for k in (left..right).rev() {
				v.swap(k, k + 1);
			}
			right += 1;
			if granularity == MergeSteps::PerWrite {
				step(Step::Write, v.view());
			}
		}
		left += 1;
	}
}

#[cfg(test)]
mod test {
	use super::{MergeSteps, merge_sort};
	use crate::{Step, permutation, sequence::is_permutation};
	use core::cmp::Ordering;
	use ndarray::{Array1, arr1};
	use quickcheck_macros::quickcheck;

	#[derive(Debug, Clone, Copy)]
	struct Item {
		index: usize,
		value: u32,
	}

	impl Eq for Item {}

	impl PartialEq for Item {
		fn eq(&self, other: &Self) -> bool {
			self.value == other.value
		}
	}

	impl Ord for Item {
		fn cmp(&self, other: &Self) -> Ordering {
			self.value.cmp(&other.value)
		}
	}

	impl PartialOrd for Item {
		fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
			Some(self.cmp(other))
		}
	}

	impl From<(usize, u32)> for Item {
		fn from((index, value): (usize, u32)) -> Self {
			Self { index, value }
		}
	}

	#[quickcheck]
	fn stably_sorted(xs: Vec<u32>) {
		let xs = xs
			.into_iter()
			.enumerate()
			.map(Item::from)
			.collect::<Vec<Item>>();
		let mut sorted = xs.clone();
		sorted.sort();
		let mut array = Array1::from_vec(xs);
		merge_sort(
			array.view_mut(),
			MergeSteps::PerWrite,
			&mut Item::lt,
			&mut |_, _| (),
		);
		for (a, s) in array.iter().zip(&sorted) {
			assert_eq!(a.index, s.index);
			assert_eq!(a.value, s.value);
		}
	}

	#[quickcheck]
	fn permutation_at_every_step(len: u8, seed: u64) {
		let mut array = permutation(len as usize, seed);
		merge_sort(
			array.view_mut(),
			MergeSteps::PerWrite,
			&mut u32::lt,
			&mut |_, v| assert!(is_permutation(v)),
		);
		assert_eq!(array, Array1::from_iter(1..=len as u32));
	}

	#[quickcheck]
	fn one_step_per_merge(len: u8, seed: u64) {
		let mut array = permutation(len as usize, seed);
		let mut merges = 0;
		merge_sort(
			array.view_mut(),
			MergeSteps::PerMerge,
			&mut u32::lt,
			&mut |s, _| {
				assert_eq!(s, Step::Merge);
				merges += 1;
			},
		);
		// A binary tree with `len` leaves has `len - 1` inner nodes.
		assert_eq!(merges, (len as usize).saturating_sub(1));
	}

	#[test]
	fn writes_of_four() {
		let mut array = arr1(&[4, 3, 2, 1]);
		let mut steps = Vec::new();
		merge_sort(
			array.view_mut(),
			MergeSteps::PerWrite,
			&mut u32::lt,
			&mut |s, v| steps.push((s, v.to_vec())),
		);
		assert_eq!(
			steps,
			[
				(Step::Write, vec![3, 4, 2, 1]),
				(Step::Merge, vec![3, 4, 2, 1]),
				(Step::Write, vec![3, 4, 1, 2]),
				(Step::Merge, vec![3, 4, 1, 2]),
				(Step::Write, vec![1, 3, 4, 2]),
				(Step::Write, vec![1, 2, 3, 4]),
				(Step::Merge, vec![1, 2, 3, 4]),
			]
		);
	}
}
