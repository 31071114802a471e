use crate::Step;
use ndarray::{ArrayView1, ArrayViewMut1};

/// Sorts `v` using selection sort, which is *O*(*n*^2) in all cases.
///
/// Emits exactly one step per outer iteration: [`Step::Swap`] when the minimum of the unsorted
/// suffix had to be exchanged into place, [`Step::Pass`] when it already was.
pub fn selection_sort<T, F, S>(mut v: ArrayViewMut1<'_, T>, is_less: &mut F, step: &mut S)
where
	F: FnMut(&T, &T) -> bool,
	S: FnMut(Step, ArrayView1<'_, T>),
{
	let len = v.len();
	for i in 0..len {
		let mut min = i;
		for j in i + 1..len {
			if is_less(&v[j], &v[min]) {
				min = j;
			}
		}
		if min == i {
			step(Step::Pass, v.view());
		} else {
			v.swap(i, min);
			step(Step::Swap, v.view());
		}
	}
}
