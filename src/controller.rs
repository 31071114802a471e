use crate::{Algorithm, Result, RunStats, Sequence, SortEngine, Step};
use log::{info, warn};
use ndarray::ArrayView1;
use rand::{SeedableRng, rngs::StdRng};

/// Whether commands other than [`Command::Reset`] are accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RunState {
	/// Waiting for a sort to be started.
	#[default]
	Idle,
	/// A sort was started. Stays so after the sort finished until the next reset.
	Sorting,
}

/// User intent, independent of how it was entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
	/// Reshuffle and return to [`RunState::Idle`].
	Reset,
	/// Run the selected algorithm.
	Start,
	/// Select an algorithm and run it.
	Pick(Algorithm),
	/// Sort ascending in one go.
	Ascending,
	/// Sort descending in one go.
	Descending,
}

/// What applying a [`Command`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
	/// The sequence or labels changed and want to be redrawn.
	Redraw,
	/// A sort ran to completion.
	Sorted(RunStats),
	/// The command was locked out by [`RunState::Sorting`].
	Ignored,
}

/// State of the visualizer: the sequence, its labels, the selected algorithm, and the lockout.
#[derive(Debug)]
pub struct Controller {
	sequence: Sequence,
	initial: String,
	sorted: Option<String>,
	state: RunState,
	selected: Algorithm,
	rng: StdRng,
}

impl Controller {
	/// Creates a controller with `len` shuffled values, seeded by the operating system.
	///
	/// # Errors
	///
	/// Returns [`Error::EmptySequence`](crate::Error::EmptySequence) if `len` is zero and
	/// [`Error::TooLong`](crate::Error::TooLong) if `len` exceeds [`u32::MAX`].
	pub fn new(len: usize, selected: Algorithm) -> Result<Self> {
		Self::with_rng(len, selected, StdRng::from_os_rng())
	}
	/// Creates a controller with `len` values shuffled by a generator seeded with `seed`.
	///
	/// # Errors
	///
	/// Returns [`Error::EmptySequence`](crate::Error::EmptySequence) if `len` is zero and
	/// [`Error::TooLong`](crate::Error::TooLong) if `len` exceeds [`u32::MAX`].
	pub fn with_seed(len: usize, selected: Algorithm, seed: u64) -> Result<Self> {
		Self::with_rng(len, selected, StdRng::seed_from_u64(seed))
	}
	fn with_rng(len: usize, selected: Algorithm, mut rng: StdRng) -> Result<Self> {
		let sequence = Sequence::shuffled(len, &mut rng)?;
		Ok(Self {
			initial: sequence.to_string(),
			sequence,
			sorted: None,
			state: RunState::Idle,
			selected,
			rng,
		})
	}

	/// Values as currently ordered.
	#[must_use]
	pub fn sequence(&self) -> &Sequence {
		&self.sequence
	}
	/// Number of values.
	#[must_use]
	pub fn size(&self) -> usize {
		self.sequence.len()
	}
	/// Whether commands are locked out.
	#[must_use]
	pub fn state(&self) -> RunState {
		self.state
	}
	/// Algorithm run by [`Command::Start`].
	#[must_use]
	pub fn selected(&self) -> Algorithm {
		self.selected
	}
	/// Sequence as of the last reset or shortcut sort, formatted as `[3, 1, 2]`.
	#[must_use]
	pub fn initial_label(&self) -> &str {
		&self.initial
	}
	/// Sequence as of the last completed sort, if any since the last reset.
	#[must_use]
	pub fn sorted_label(&self) -> Option<&str> {
		self.sorted.as_deref()
	}

	/// Applies `command`, running sorts on `engine` and reporting their steps to `on_step`.
	///
	/// Sorts run to completion before this returns. Everything but [`Command::Reset`] is
	/// [`Outcome::Ignored`] once a sort has been started.
	///
	/// # Errors
	///
	/// Forwards errors of [`SortEngine::run`].
	pub fn apply<F>(&mut self, command: Command, engine: &SortEngine, on_step: F) -> Result<Outcome>
	where
		F: FnMut(Step, ArrayView1<'_, u32>),
	{
		if command != Command::Reset && self.state == RunState::Sorting {
			warn!("{command:?} ignored until reset");
			return Ok(Outcome::Ignored);
		}
		match command {
			Command::Reset => {
				self.reset()?;
				Ok(Outcome::Redraw)
			}
			Command::Start => self.sort(engine, on_step),
			Command::Pick(algorithm) => {
				info!("{algorithm} sort selected");
				self.selected = algorithm;
				self.sort(engine, on_step)
			}
			Command::Ascending => {
				self.sequence.sort_ascending();
				self.initial = self.sequence.to_string();
				Ok(Outcome::Redraw)
			}
			Command::Descending => {
				self.sequence.sort_descending();
				self.initial = self.sequence.to_string();
				Ok(Outcome::Redraw)
			}
		}
	}

	fn reset(&mut self) -> Result<()> {
		self.sequence = Sequence::shuffled(self.sequence.len(), &mut self.rng)?;
		self.initial = self.sequence.to_string();
		self.sorted = None;
		self.state = RunState::Idle;
		info!("reset to {} shuffled values", self.sequence.len());
		Ok(())
	}

	fn sort<F>(&mut self, engine: &SortEngine, on_step: F) -> Result<Outcome>
	where
		F: FnMut(Step, ArrayView1<'_, u32>),
	{
		self.state = RunState::Sorting;
		info!("{} sort started", self.selected);
		let stats = engine.run(self.sequence.view_mut(), self.selected, on_step)?;
		self.sorted = Some(self.sequence.to_string());
		info!(
			"{} sort finished after {} steps",
			self.selected, stats.steps
		);
		Ok(Outcome::Sorted(stats))
	}
}
