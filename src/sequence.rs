use crate::{Error, Result};
use core::fmt;
use ndarray::{Array1, ArrayView1, ArrayViewMut1};
use rand::{Rng, seq::SliceRandom};

/// Whether `v` holds each of `1..=v.len()` exactly once.
#[must_use]
pub fn is_permutation(v: ArrayView1<'_, u32>) -> bool {
	let mut seen = vec![false; v.len()];
	v.iter().all(|&value| {
		let Some(slot) = (value as usize)
			.checked_sub(1)
			.and_then(|index| seen.get_mut(index))
		else {
			return false;
		};
		!core::mem::replace(slot, true)
	})
}

/// Least and greatest value of `v`, if any.
#[must_use]
pub fn bounds(v: ArrayView1<'_, u32>) -> Option<(u32, u32)> {
	v.iter().fold(None, |bounds, &value| match bounds {
		None => Some((value, value)),
		Some((min, max)) => Some((min.min(value), max.max(value))),
	})
}

/// Permutation of `1..=N` being animated.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sequence {
	values: Array1<u32>,
}

impl Sequence {
	/// Creates `1..=len` in ascending order.
	#[must_use]
	pub fn ordered(len: u32) -> Self {
		Self {
			values: (1..=len).collect(),
		}
	}
	/// Creates `1..=len` shuffled uniformly at random.
	///
	/// # Errors
	///
	/// Returns [`Error::EmptySequence`] if `len` is zero and [`Error::TooLong`] if `len` exceeds
	/// [`u32::MAX`].
	pub fn shuffled<R>(len: usize, rng: &mut R) -> Result<Self>
	where
		R: Rng + ?Sized,
	{
		if len == 0 {
			return Err(Error::EmptySequence);
		}
		let max = u32::try_from(len).map_err(|_| Error::TooLong(len))?;
		let mut values = (1..=max).collect::<Vec<u32>>();
		values.shuffle(rng);
		Ok(Self::from(values))
	}

	/// Number of values.
	#[must_use]
	pub fn len(&self) -> usize {
		self.values.len()
	}
	/// Whether there are no values.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}
	/// Least and greatest value, if any.
	#[must_use]
	pub fn bounds(&self) -> Option<(u32, u32)> {
		bounds(self.view())
	}
	/// Whether this holds each of `1..=N` exactly once.
	#[must_use]
	pub fn is_permutation(&self) -> bool {
		is_permutation(self.view())
	}
	/// Whether values are non-decreasing.
	#[must_use]
	pub fn is_sorted(&self) -> bool {
		self.values
			.iter()
			.zip(self.values.iter().skip(1))
			.all(|(a, b)| a <= b)
	}

	/// Read-only view for rendering.
	#[must_use]
	pub fn view(&self) -> ArrayView1<'_, u32> {
		self.values.view()
	}
	/// Mutable view for sorting.
	pub fn view_mut(&mut self) -> ArrayViewMut1<'_, u32> {
		self.values.view_mut()
	}
	/// Copies the values into a vector.
	#[must_use]
	pub fn to_vec(&self) -> Vec<u32> {
		self.values.to_vec()
	}

	/// Sorts ascending in one go, without any steps.
	pub fn sort_ascending(&mut self) {
		let mut values = self.to_vec();
		values.sort_unstable();
		self.values = Array1::from_vec(values);
	}
	/// Sorts descending in one go, without any steps.
	pub fn sort_descending(&mut self) {
		let mut values = self.to_vec();
		values.sort_unstable_by(|a, b| b.cmp(a));
		self.values = Array1::from_vec(values);
	}
}

impl From<Vec<u32>> for Sequence {
	fn from(values: Vec<u32>) -> Self {
		Self {
			values: Array1::from_vec(values),
		}
	}
}

/// Formats as `[3, 1, 2]`.
impl fmt::Display for Sequence {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("[")?;
		for (i, value) in self.values.iter().enumerate() {
			if i > 0 {
				f.write_str(", ")?;
			}
			write!(f, "{value}")?;
		}
		f.write_str("]")
	}
}
