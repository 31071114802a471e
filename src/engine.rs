use crate::{
	Algorithm, Error, Result, Step, bubble_sort::bubble_sort, insertion_sort::insertion_sort,
	merge_sort::{MergeSteps, merge_sort},
	quick_sort::quick_sort, selection_sort::selection_sort,
};
use core::time::Duration;
use log::{debug, trace};
use ndarray::{ArrayView1, ArrayViewMut1};
use std::{thread, time::Instant};

/// Counters of a finished run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
	/// Number of emitted steps.
	pub steps: usize,
	/// Number of steps that moved elements, see [`Step::moves`].
	pub moves: usize,
	/// Wall time of the run including pacing delays.
	pub elapsed: Duration,
}

impl RunStats {
	fn record(&mut self, step: Step) {
		self.steps += 1;
		self.moves += usize::from(step.moves());
	}
}

/// Runs an [`Algorithm`] step by step, pausing after every step.
///
/// The engine knows nothing about rendering. Whoever runs it hands in a callback which receives
/// every [`Step`] along with a view of the whole array.
///
/// # Examples
///
/// ```
/// use sortvis::{Algorithm, SortEngine, Step, ndarray::arr1};
///
/// let mut v = arr1(&[3, 1, 2]);
/// let mut swaps = Vec::new();
///
/// let stats = SortEngine::unpaced()
/// 	.run(v.view_mut(), Algorithm::Bubble, |step, v| {
/// 		if step == Step::Swap {
/// 			swaps.push(v.to_vec());
/// 		}
/// 	})
/// 	.unwrap();
///
/// assert_eq!(swaps, [vec![1, 3, 2], vec![1, 2, 3]]);
/// assert_eq!(v, arr1(&[1, 2, 3]));
/// assert_eq!(stats.moves, 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortEngine {
	pacing: Duration,
	merge_steps: MergeSteps,
}

impl Default for SortEngine {
	fn default() -> Self {
		Self::new(Self::DEFAULT_PACING)
	}
}

impl SortEngine {
	/// Pause after every step unless configured otherwise.
	pub const DEFAULT_PACING: Duration = Duration::from_millis(10);

	/// Creates an engine pausing for `pacing` after every step.
	#[must_use]
	pub const fn new(pacing: Duration) -> Self {
		Self {
			pacing,
			merge_steps: MergeSteps::PerMerge,
		}
	}
	/// Creates an engine which never pauses.
	#[must_use]
	pub const fn unpaced() -> Self {
		Self::new(Duration::ZERO)
	}
	/// Sets how often merge sort reports progress.
	#[must_use]
	pub const fn with_merge_steps(mut self, merge_steps: MergeSteps) -> Self {
		self.merge_steps = merge_steps;
		self
	}

	/// Pause after every step.
	#[must_use]
	pub const fn pacing(&self) -> Duration {
		self.pacing
	}
	/// How often merge sort reports progress.
	#[must_use]
	pub const fn merge_steps(&self) -> MergeSteps {
		self.merge_steps
	}

	/// Sorts `v` with `algorithm`, calling `on_step` and then pausing after every step.
	///
	/// The run cannot be interrupted. It returns once `v` is sorted.
	///
	/// # Errors
	///
	/// Returns [`Error::EmptySequence`] if `v` is empty.
	pub fn run<A, F>(
		&self,
		mut v: ArrayViewMut1<'_, A>,
		algorithm: Algorithm,
		mut on_step: F,
	) -> Result<RunStats>
	where
		A: Ord,
		F: FnMut(Step, ArrayView1<'_, A>),
	{
		if v.is_empty() {
			return Err(Error::EmptySequence);
		}
		debug!("{algorithm} sort of {} elements started", v.len());
		let started = Instant::now();
		let mut stats = RunStats::default();
		let pacing = self.pacing;
		let mut step = |step: Step, view: ArrayView1<'_, A>| {
			stats.record(step);
			trace!("step {}: {step:?}", stats.steps);
			on_step(step, view);
			if !pacing.is_zero() {
				thread::sleep(pacing);
			}
		};
		let is_less = &mut A::lt;
		match algorithm {
			Algorithm::Insertion => insertion_sort(v.view_mut(), is_less, &mut step),
			Algorithm::Bubble => bubble_sort(v.view_mut(), is_less, &mut step),
			Algorithm::Selection => selection_sort(v.view_mut(), is_less, &mut step),
			Algorithm::Merge => merge_sort(v.view_mut(), self.merge_steps, is_less, &mut step),
			Algorithm::Quick => quick_sort(v.view_mut(), is_less, &mut step),
		}
		stats.elapsed = started.elapsed();
		debug!(
			"{algorithm} sort finished after {} steps ({} moves) in {:?}",
			stats.steps, stats.moves, stats.elapsed
		);
		Ok(stats)
	}
}

#[cfg(test)]
mod test {
	use super::SortEngine;
	use crate::{Algorithm, Error, MergeSteps, Step, permutation, sequence::is_permutation};
	use core::time::Duration;
	use ndarray::{Array1, arr1};
	use quickcheck_macros::quickcheck;

	#[quickcheck]
	fn every_algorithm_sorts(len: u8, seed: u64) {
		let len = usize::from(len) + 1;
		for algorithm in Algorithm::ALL {
			for merge_steps in [MergeSteps::PerMerge, MergeSteps::PerWrite] {
				let engine = SortEngine::unpaced().with_merge_steps(merge_steps);
				let mut array = permutation(len, seed);
				let mut steps = 0;
				let stats = engine
					.run(array.view_mut(), algorithm, |_, v| {
						assert!(is_permutation(v), "{algorithm} lost a value");
						steps += 1;
					})
					.unwrap();
				assert_eq!(stats.steps, steps);
				assert_eq!(array, Array1::from_iter(1..=len as u32), "{algorithm}");
			}
		}
	}

	#[test]
	fn sorted_input_is_left_alone() {
		for algorithm in Algorithm::ALL {
			let mut array = Array1::from_iter(1..=16u32);
			let stats = SortEngine::unpaced()
				.run(array.view_mut(), algorithm, |_, v| {
					assert_eq!(v, Array1::from_iter(1..=16u32));
				})
				.unwrap();
			assert_eq!(array, Array1::from_iter(1..=16u32));
			if matches!(algorithm, Algorithm::Bubble | Algorithm::Selection) {
				assert_eq!(stats.moves, 0, "{algorithm}");
			}
		}
	}

	#[test]
	fn bubble_of_three() {
		let mut array = arr1(&[3, 1, 2]);
		let mut steps = Vec::new();
		SortEngine::unpaced()
			.run(array.view_mut(), Algorithm::Bubble, |s, v| {
				steps.push((s, v.to_vec()))
			})
			.unwrap();
		assert_eq!(
			steps,
			[
				(Step::Swap, vec![1, 3, 2]),
				(Step::Swap, vec![1, 2, 3]),
				(Step::Pass, vec![1, 2, 3]),
				(Step::Pass, vec![1, 2, 3]),
			]
		);
		assert_eq!(array, arr1(&[1, 2, 3]));
	}

	#[test]
	fn quick_of_two() {
		let mut array = arr1(&[2, 1]);
		let stats = SortEngine::unpaced()
			.run(array.view_mut(), Algorithm::Quick, |s, v| {
				assert_eq!(s, Step::Partition);
				assert_eq!(v, arr1(&[1, 2]));
			})
			.unwrap();
		assert_eq!(stats.steps, 1);
		assert_eq!(array, arr1(&[1, 2]));
	}

	#[test]
	fn empty() {
		let mut array = Array1::<u32>::zeros(0);
		let result = SortEngine::default().run(array.view_mut(), Algorithm::Merge, |_, _| ());
		assert!(matches!(result, Err(Error::EmptySequence)));
	}

	#[test]
	fn pacing() {
		assert_eq!(SortEngine::default().pacing(), SortEngine::DEFAULT_PACING);
		assert_eq!(SortEngine::unpaced().pacing(), Duration::ZERO);
		let engine =
			SortEngine::new(Duration::from_millis(3)).with_merge_steps(MergeSteps::PerWrite);
		assert_eq!(engine.pacing(), Duration::from_millis(3));
		assert_eq!(engine.merge_steps(), MergeSteps::PerWrite);
	}

	#[test]
	fn paced() {
		let engine = SortEngine::new(Duration::from_millis(2));
		let mut array = arr1(&[2, 1]);
		let stats = engine
			.run(array.view_mut(), Algorithm::Selection, |_, _| ())
			.unwrap();
		assert_eq!(stats.steps, 2);
		assert!(stats.elapsed >= Duration::from_millis(4));
	}
}
