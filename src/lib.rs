//! Step-by-step animation of classic comparison sorts ([insertion], [bubble], [selection],
//! [merge], [quick]) on views into 1-dimensional [`ndarray`] arrays.
//!
//! Every algorithm mutates the array in place and reports each visible unit of progress as a
//! [`Step`] together with a view of the *whole* array, so a renderer can redraw all bars after
//! every swap, shift, merge, or partition. Snapshots are always a permutation of the input, no
//! value is ever duplicated or lost in between.
//!
//! # Example
//!
//! ```
//! use sortvis::{Algorithm, SortEngine, Step, ndarray::arr1};
//!
//! let mut v = arr1(&[2, 1]);
//! let mut partitions = Vec::new();
//!
//! SortEngine::unpaced()
//! 	.run(v.view_mut(), Algorithm::Quick, |step, v| {
//! 		assert_eq!(step, Step::Partition);
//! 		partitions.push(v.to_vec());
//! 	})
//! 	.unwrap();
//!
//! assert_eq!(partitions, [vec![1, 2]]);
//! ```
//!
//! # Current Implementation
//!
//! | Algorithm | Steps                                           | Stable | Time (worst)   |
//! |-----------|-------------------------------------------------|--------|----------------|
//! | Insertion | [`Shift`] per exchange, [`Insert`] per key      | yes    | *O*(*n*^2)     |
//! | Bubble    | [`Swap`] per exchange, [`Pass`] per pass        | yes    | *O*(*n*^2)     |
//! | Selection | [`Swap`] or [`Pass`] per position               | no     | *O*(*n*^2)     |
//! | Merge     | [`Merge`] per merge, optionally [`Write`]s      | yes    | *O*(*n*^2)     |
//! | Quick     | [`Partition`] per range (Lomuto, last as pivot) | no     | *O*(*n*^2)     |
//!
//! Merge sort merges in place by rotation to keep every snapshot a permutation, hence its
//! quadratic worst case.
//!
//! [insertion]: https://en.wikipedia.org/wiki/Insertion_sort
//! [bubble]: https://en.wikipedia.org/wiki/Bubble_sort
//! [selection]: https://en.wikipedia.org/wiki/Selection_sort
//! [merge]: https://en.wikipedia.org/wiki/Merge_sort
//! [quick]: https://en.wikipedia.org/wiki/Quicksort
//!
//! [`Shift`]: Step::Shift
//! [`Insert`]: Step::Insert
//! [`Swap`]: Step::Swap
//! [`Pass`]: Step::Pass
//! [`Merge`]: Step::Merge
//! [`Write`]: Step::Write
//! [`Partition`]: Step::Partition
//!
//! # Features
//!
//!   * `stacker` for growing the stack on demand. Quicksort recurses *n* deep on sorted input.
//!     Enabled by `default`.
//!   * `tui` for the terminal front-end and the `sortvis` binary. Enabled by `default`.

#![deny(
	missing_docs,
	rustdoc::broken_intra_doc_links,
	rustdoc::missing_crate_level_docs
)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod bubble_sort;
mod color;
mod controller;
mod engine;
mod error;
mod insertion_sort;
mod merge_sort;
mod quick_sort;
mod selection_sort;
mod sequence;

#[cfg(feature = "tui")]
pub mod tui;

pub use crate::{
	color::{Rgb, bar_color},
	controller::{Command, Controller, Outcome, RunState},
	engine::{RunStats, SortEngine},
	error::{Error, Result},
	merge_sort::MergeSteps,
	sequence::{Sequence, bounds, is_permutation},
};
use core::{fmt, str::FromStr};

pub use ndarray;

/// Sorting algorithm to animate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Algorithm {
	/// Insertion sort.
	#[default]
	Insertion,
	/// Bubble sort.
	Bubble,
	/// Selection sort.
	Selection,
	/// Top-down merge sort.
	Merge,
	/// Quicksort with Lomuto partitioning.
	Quick,
}

impl Algorithm {
	/// All algorithms in key-binding order.
	pub const ALL: [Self; 5] = [
		Self::Insertion,
		Self::Selection,
		Self::Bubble,
		Self::Merge,
		Self::Quick,
	];

	/// Lower-case name.
	#[must_use]
	pub const fn name(self) -> &'static str {
		match self {
			Self::Insertion => "insertion",
			Self::Bubble => "bubble",
			Self::Selection => "selection",
			Self::Merge => "merge",
			Self::Quick => "quick",
		}
	}
	/// Key selecting this algorithm, the initial of its name.
	#[must_use]
	pub const fn key(self) -> char {
		match self {
			Self::Insertion => 'i',
			Self::Bubble => 'b',
			Self::Selection => 's',
			Self::Merge => 'm',
			Self::Quick => 'q',
		}
	}
	/// Algorithm selected by `key`, case-insensitive.
	#[must_use]
	pub fn from_key(key: char) -> Option<Self> {
		let key = key.to_ascii_lowercase();
		Self::ALL.into_iter().find(|algorithm| algorithm.key() == key)
	}
}

impl fmt::Display for Algorithm {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// Parses `quick`, `quick_sort`, `quick-sort`, `quicksort` and so forth, case-insensitive.
impl FromStr for Algorithm {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		let name = s.trim().to_ascii_lowercase();
		let name = name
			.strip_suffix("sort")
			.map_or(name.as_str(), |name| name.trim_end_matches(['_', '-', ' ']));
		Self::ALL
			.into_iter()
			.find(|algorithm| algorithm.name() == name)
			.ok_or_else(|| Error::UnknownAlgorithm(s.to_owned()))
	}
}

/// Kind of visible progress reported by a running sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
	/// Insertion sort moved the key one position left.
	Shift,
	/// Insertion sort placed its key.
	Insert,
	/// Two elements were exchanged.
	Swap,
	/// An outer pass ended, or selection sort found a minimum already in place.
	Pass,
	/// Merge sort moved an element of the right run into place.
	Write,
	/// Merge sort completed merging a sub-range.
	Merge,
	/// Quicksort partitioned a range around its pivot.
	Partition,
}

impl Step {
	/// Whether elements were moved right before this step.
	#[must_use]
	pub const fn moves(self) -> bool {
		matches!(self, Self::Shift | Self::Swap | Self::Write)
	}
}

/// Calls `callback` on a stack with enough room for another level of recursion.
#[inline]
fn maybe_grow<R, F>(callback: F) -> R
where
	F: FnOnce() -> R,
{
	#[cfg(feature = "stacker")]
	{
		// Grow by 1 MiB whenever less than 64 KiB are left.
		stacker::maybe_grow(64 * 1024, 1024 * 1024, callback)
	}
	#[cfg(not(feature = "stacker"))]
	{
		callback()
	}
}

/// Permutation of `1..=len` shuffled by a seeded generator.
#[cfg(test)]
fn permutation(len: usize, seed: u64) -> ndarray::Array1<u32> {
	use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

	let mut values = (1..=u32::try_from(len).unwrap()).collect::<Vec<u32>>();
	values.shuffle(&mut StdRng::seed_from_u64(seed));
	ndarray::Array1::from_vec(values)
}

#[cfg(test)]
mod test {
	use super::{Algorithm, Error};
	use quickcheck_macros::quickcheck;

	#[test]
	fn parse() {
		for (name, algorithm) in [
			("insertion", Algorithm::Insertion),
			("Bubble", Algorithm::Bubble),
			("selection_sort", Algorithm::Selection),
			("merge-sort", Algorithm::Merge),
			("QuickSort", Algorithm::Quick),
			(" quick sort ", Algorithm::Quick),
		] {
			assert_eq!(name.parse::<Algorithm>().unwrap(), algorithm, "{name}");
		}
	}

	#[test]
	fn parse_unknown() {
		for name in ["", "sort", "heap", "bogo_sort"] {
			let result = name.parse::<Algorithm>();
			assert!(
				matches!(&result, Err(Error::UnknownAlgorithm(n)) if n == name),
				"{name}"
			);
		}
	}

	#[test]
	fn keys() {
		for algorithm in Algorithm::ALL {
			assert_eq!(Algorithm::from_key(algorithm.key()), Some(algorithm));
			assert_eq!(
				Algorithm::from_key(algorithm.key().to_ascii_uppercase()),
				Some(algorithm)
			);
		}
		assert_eq!(Algorithm::from_key('x'), None);
	}

	#[quickcheck]
	fn name_round_trip(index: usize) {
		let algorithm = Algorithm::ALL[index % Algorithm::ALL.len()];
		assert_eq!(algorithm.to_string().parse::<Algorithm>().unwrap(), algorithm);
	}
}
