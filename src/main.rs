use clap::Parser;
use core::time::Duration;
use env_logger::{Builder, Target};
use log::{LevelFilter, error};
use sortvis::{
	Algorithm, Command, Controller, MergeSteps, Outcome, Result, Sequence, SortEngine,
	tui::App,
};
use std::{fs::File, path::PathBuf, process::ExitCode};

/// Animates classic comparison sorts as colored bars in the terminal.
#[derive(Debug, Parser)]
#[command(name = "sortvis", version, about)]
struct Args {
	/// Number of values to sort
	#[arg(
		long,
		short = 'n',
		env = "SORTVIS_SIZE",
		default_value_t = 50,
		value_parser = clap::value_parser!(u32).range(1..=10_000)
	)]
	size: u32,
	/// Pause after every step in milliseconds
	#[arg(long, env = "SORTVIS_DELAY_MS", default_value_t = 10)]
	delay_ms: u64,
	/// Seed for reproducible shuffles
	#[arg(long, env = "SORTVIS_SEED")]
	seed: Option<u64>,
	/// Algorithm started by Space (insertion, bubble, selection, merge, quick)
	#[arg(long, short, env = "SORTVIS_ALGORITHM", default_value = "insertion")]
	algorithm: Algorithm,
	/// Report every element written by merge sort instead of once per merge
	#[arg(long)]
	per_write_merge: bool,
	/// Sort once without the terminal UI and print the result
	#[arg(long)]
	headless: bool,
	/// Print every step when running headless
	#[arg(long, requires = "headless")]
	trace_steps: bool,
	/// Write logs to this file
	#[arg(long, env = "SORTVIS_LOG_FILE")]
	log_file: Option<PathBuf>,
}

impl Args {
	fn engine(&self) -> SortEngine {
		let merge_steps = if self.per_write_merge {
			MergeSteps::PerWrite
		} else {
			MergeSteps::PerMerge
		};
		SortEngine::new(Duration::from_millis(self.delay_ms)).with_merge_steps(merge_steps)
	}

	fn controller(&self) -> Result<Controller> {
		let size = self.size as usize;
		match self.seed {
			Some(seed) => Controller::with_seed(size, self.algorithm, seed),
			None => Controller::new(size, self.algorithm),
		}
	}
}

/// Logs go to `--log-file` if given. Otherwise the terminal UI logs nothing as the screen is
/// taken, while headless runs log warnings to stderr. `RUST_LOG` overrides the level.
fn init_logging(args: &Args) -> Result<()> {
	let mut builder = Builder::new();
	match &args.log_file {
		Some(path) => {
			let file = File::create(path)?;
			builder
				.filter_level(LevelFilter::Info)
				.parse_default_env()
				.target(Target::Pipe(Box::new(file)));
		}
		None if args.headless => {
			builder.filter_level(LevelFilter::Warn).parse_default_env();
		}
		None => {
			builder.filter_level(LevelFilter::Off);
		}
	}
	builder.init();
	Ok(())
}

fn headless(args: &Args) -> Result<()> {
	let mut controller = args.controller()?;
	let engine = SortEngine::unpaced().with_merge_steps(args.engine().merge_steps());
	println!("Size of Array: {}", controller.size());
	println!("Initial Array: {}", controller.initial_label());
	let outcome = controller.apply(Command::Start, &engine, |step, values| {
		if args.trace_steps {
			println!("{step:?}: {}", Sequence::from(values.to_vec()));
		}
	})?;
	if let Some(sorted) = controller.sorted_label() {
		println!("Sorted Array: {sorted}");
	}
	if let Outcome::Sorted(stats) = outcome {
		println!(
			"{} sort: {} steps, {} moves",
			controller.selected(),
			stats.steps,
			stats.moves
		);
	}
	Ok(())
}

fn interactive(args: &Args) -> Result<()> {
	let mut app = App::new(args.controller()?, args.engine());
	let mut terminal = ratatui::try_init()?;
	let result = app.run(&mut terminal);
	ratatui::restore();
	result
}

fn main() -> ExitCode {
	let args = Args::parse();
	if let Err(err) = init_logging(&args) {
		eprintln!("sortvis: cannot set up logging: {err}");
		return ExitCode::FAILURE;
	}
	let result = if args.headless {
		headless(&args)
	} else {
		interactive(&args)
	};
	match result {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			error!("{err}");
			eprintln!("sortvis: {err}");
			ExitCode::FAILURE
		}
	}
}
