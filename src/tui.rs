//! Terminal front-end built on [ratatui](https://github.com/ratatui/ratatui).
//!
//! Keys map to [`Command`]s via [`input`], [`render`] draws labels and bars, and [`App`] ties both
//! to a [`Controller`] in a blocking event loop. Sorts run on the event loop itself: keys pressed
//! while a sort runs are handled once it finished.

use crate::{
	Algorithm, Command, Controller, Outcome, Result, Rgb, RunState, SortEngine, bar_color, bounds,
};
use log::{debug, info};
use ndarray::ArrayView1;
use ratatui::{
	Frame, Terminal,
	backend::Backend,
	crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
	layout::{Alignment, Constraint, Layout},
	style::{Color, Style, Stylize},
	widgets::{Bar, BarChart, BarGroup, Block, Paragraph, Wrap},
};

/// Key bindings as shown above the bars.
pub const HELP: &str = "R : Reset | Space : Start Sorting | A : Ascending | D : Descending | \
	I : Insertion Sort | S : Selection Sort | B : Bubble Sort | M : Merge Sort | Q : QuickSort | \
	Esc : Quit";

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
	/// Apply a command.
	Command(Command),
	/// Leave the event loop.
	Quit,
}

/// Maps a key press to its [`Input`], ignoring releases and unbound keys.
///
/// Letters are case-insensitive.
#[must_use]
pub fn input(key: KeyEvent) -> Option<Input> {
	if key.kind != KeyEventKind::Press {
		return None;
	}
	let command = match key.code {
		KeyCode::Esc => return Some(Input::Quit),
		KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
			return Some(Input::Quit);
		}
		KeyCode::Char(' ') => Command::Start,
		KeyCode::Char(c) => match c.to_ascii_lowercase() {
			'r' => Command::Reset,
			'a' => Command::Ascending,
			'd' => Command::Descending,
			c => Command::Pick(Algorithm::from_key(c)?),
		},
		_ => return None,
	};
	Some(Input::Command(command))
}

/// Labels drawn above the bars, detached from the [`Controller`] so they can be drawn while it
/// is busy sorting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
	size: usize,
	algorithm: Algorithm,
	state: RunState,
	initial: String,
	sorted: Option<String>,
}

impl Panel {
	/// Captures the labels of `controller`.
	#[must_use]
	pub fn new(controller: &Controller) -> Self {
		Self {
			size: controller.size(),
			algorithm: controller.selected(),
			state: controller.state(),
			initial: controller.initial_label().to_owned(),
			sorted: controller.sorted_label().map(str::to_owned),
		}
	}
	/// Shows `algorithm` as running.
	#[must_use]
	pub fn running(mut self, algorithm: Algorithm) -> Self {
		self.algorithm = algorithm;
		self.state = RunState::Sorting;
		self
	}
}

/// Number of lines `text` wraps into at `width`, at least one and at most `max`.
fn lines(text: &str, width: u16, max: u16) -> u16 {
	let len = u16::try_from(text.chars().count()).unwrap_or(u16::MAX);
	len.div_ceil(width.max(1)).clamp(1, max)
}

/// Draws `panel` and one bar per value, colored from green (least) to red (greatest).
///
/// If the chart is narrower than there are values, adjacent values share a column.
pub fn render(frame: &mut Frame, panel: &Panel, values: ArrayView1<'_, u32>) {
	let area = frame.area();
	frame.render_widget(Block::new().style(Style::new().bg(Color::Black)), area);

	let initial = format!("Initial Array: {}", panel.initial);
	let sorted = panel
		.sorted
		.as_ref()
		.map(|sorted| format!("Sorted Array: {sorted}"))
		.unwrap_or_default();
	let [help, heading, status, initial_area, sorted_area, chart] = Layout::vertical([
		Constraint::Length(lines(HELP, area.width, 3)),
		Constraint::Length(2),
		Constraint::Length(1),
		Constraint::Length(lines(&initial, area.width, 4)),
		Constraint::Length(lines(&sorted, area.width, 4)),
		Constraint::Min(3),
	])
	.areas(area);

	let text = |text: String| Paragraph::new(text).white().wrap(Wrap { trim: true });
	frame.render_widget(text(HELP.to_owned()).gray(), help);
	frame.render_widget(
		Paragraph::new("Sorting Visualizer")
			.white()
			.bold()
			.alignment(Alignment::Center),
		heading,
	);
	let state = match panel.state {
		RunState::Idle => "idle",
		RunState::Sorting => "sorting",
	};
	frame.render_widget(
		text(format!(
			"Size of Array: {} | Algorithm: {} sort | {state}",
			panel.size, panel.algorithm
		)),
		status,
	);
	frame.render_widget(text(initial), initial_area);
	frame.render_widget(text(sorted), sorted_area);

	let block = Block::bordered().border_style(Style::new().dark_gray());
	let inner = block.inner(chart);
	let (min, max) = bounds(values).unwrap_or_default();
	let bars = columns(values, usize::from(inner.width))
		.into_iter()
		.map(|value| {
			let Rgb { r, g, b } = bar_color(min, max, value);
			Bar::default()
				.value(u64::from(value))
				.text_value(String::new())
				.style(Style::new().fg(Color::Rgb(r, g, b)))
		})
		.collect::<Vec<Bar>>();
	let count = u16::try_from(bars.len()).unwrap_or(u16::MAX).max(1);
	frame.render_widget(
		BarChart::default()
			.block(block)
			.data(BarGroup::default().bars(&bars))
			.bar_width((inner.width / count).max(1))
			.bar_gap(0)
			.max(u64::from(max)),
		chart,
	);
}

/// Heights of at most `width` columns, one per value or the greatest of each run of adjacent
/// values when there are more values than columns.
fn columns(values: ArrayView1<'_, u32>, width: usize) -> Vec<u32> {
	let values = values.to_vec();
	if values.len() <= width {
		return values;
	}
	values
		.chunks(values.len().div_ceil(width.max(1)))
		.filter_map(|chunk| chunk.iter().max().copied())
		.collect()
}

/// Event loop driving a [`Controller`].
#[derive(Debug)]
pub struct App {
	controller: Controller,
	engine: SortEngine,
}

impl App {
	/// Creates an app running sorts of `controller` on `engine`.
	#[must_use]
	pub fn new(controller: Controller, engine: SortEngine) -> Self {
		Self { controller, engine }
	}

	/// Draws and handles key presses until [`Input::Quit`].
	///
	/// # Errors
	///
	/// Returns [`Error::Terminal`](crate::Error::Terminal) if reading keys or drawing fails.
	pub fn run<B>(&mut self, terminal: &mut Terminal<B>) -> Result<()>
	where
		B: Backend,
	{
		info!(
			"{} values, {} sort selected, pausing {:?} per step",
			self.controller.size(),
			self.controller.selected(),
			self.engine.pacing()
		);
		loop {
			let panel = Panel::new(&self.controller);
			let values = self.controller.sequence().view();
			terminal.draw(|frame| render(frame, &panel, values))?;
			let Event::Key(key) = event::read()? else {
				continue;
			};
			match input(key) {
				Some(Input::Quit) => return Ok(()),
				Some(Input::Command(command)) => self.dispatch(terminal, command)?,
				None => debug!("unbound key {:?}", key.code),
			}
		}
	}

	/// Applies `command`, redrawing after every step of a sort.
	fn dispatch<B>(&mut self, terminal: &mut Terminal<B>, command: Command) -> Result<()>
	where
		B: Backend,
	{
		let algorithm = match command {
			Command::Pick(algorithm) => algorithm,
			_ => self.controller.selected(),
		};
		let panel = Panel::new(&self.controller).running(algorithm);
		let mut failure = None;
		let outcome = self.controller.apply(command, &self.engine, |_, values| {
			if failure.is_none() {
				failure = terminal
					.draw(|frame| render(frame, &panel, values))
					.err();
			}
		})?;
		if let Some(error) = failure {
			return Err(error.into());
		}
		if let Outcome::Sorted(stats) = outcome {
			info!(
				"{algorithm} sort took {} steps ({} moves) in {:?}",
				stats.steps, stats.moves, stats.elapsed
			);
		}
		Ok(())
	}
}
