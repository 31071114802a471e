use crate::Step;
use ndarray::{ArrayView1, ArrayViewMut1};

/// Sorts `v` using insertion sort, which is *O*(*n*^2) worst-case.
///
/// The key is moved left by one adjacent exchange per [`Step::Shift`], so every snapshot handed to
/// `step` is a permutation of the input. Each placement emits [`Step::Insert`].
pub fn insertion_sort<T, F, S>(mut v: ArrayViewMut1<'_, T>, is_less: &mut F, step: &mut S)
where
	F: FnMut(&T, &T) -> bool,
	S: FnMut(Step, ArrayView1<'_, T>),
{
	for i in 1..v.len() {
		let mut j = i;
		// Shift the key left while it is smaller than its left neighbour.
		while j > 0 && is_less(&v[j], &v[j - 1]) {
			v.swap(j - 1, j);
			j -= 1;
			step(Step::Shift, v.view());
		}
		step(Step::Insert, v.view());
	}
}
