// Copyright © 2024 Stephan Kunz

//! Commandline tool for `chronos`

// region:		--- modules
use chronos::prelude::*;
use clap::{Parser, Subcommand};
use std::time::Duration;
use tokio::sync::oneshot;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
// endregion:	--- modules

// region:		--- Cli
#[derive(Debug, Parser)]
#[clap(version, about, long_about = None)]
struct ChronosctlArgs {
	/// Configuration file to use instead of `chronos.json5`
	#[arg(short, long)]
	config: Option<String>,

	#[clap(subcommand)]
	command: ChronosctlCommand,
}
// endregion:	--- Cli

// region:		--- Commands
#[derive(Debug, Subcommand)]
enum ChronosctlCommand {
	/// Run a chronometer and report the partial time of each lap
	Stopwatch {
		/// Total running time in seconds
		#[arg(short, long, default_value_t = 5)]
		seconds: u64,
		/// Number of laps to report
		#[arg(short, long, default_value_t = 5)]
		laps: u32,
	},
	/// Count down and report when the time is out
	Countdown {
		/// Length of the countdown in seconds
		#[arg(short, long)]
		seconds: u64,
		/// Polling interval in milliseconds, overrides the configuration
		#[arg(short, long)]
		poll_ms: Option<u64>,
	},
	/// Measure repeated calls of a sleeping function
	Measure {
		/// Number of calls
		#[arg(short, long, default_value_t = 3)]
		calls: u32,
		/// Sleeping time of each call in milliseconds
		#[arg(short, long, default_value_t = 200)]
		millis: u64,
	},
}
// endregion:	--- Commands

async fn stopwatch(seconds: u64, laps: u32) {
	let lap = Duration::from_secs(seconds) / laps.max(1);
	let mut chronometer = Chronometer::new();
	{
		let running = chronometer.scoped();
		for count in 1..=laps.max(1) {
			tokio::time::sleep(lap).await;
			println!("lap {count}: {:.3}s", running.partial_secs());
		}
	}
	println!("total: {:.3}s", chronometer.partial_secs());
}

async fn countdown(config: &Config, seconds: u64, poll_ms: Option<u64>) -> Result<()> {
	let (tx, mut rx) = oneshot::channel();
	let mut tx = Some(tx);
	let mut builder = Timer::builder(Duration::from_secs(seconds))
		.config(config.timer())
		.callback(move || {
			println!("time out!");
			if let Some(tx) = tx.take() {
				let _ = tx.send(());
			}
			Ok(())
		});
	if let Some(poll_ms) = poll_ms {
		builder = builder.poll_interval(Duration::from_millis(poll_ms));
	}
	let timer = builder.build()?;

	timer.start()?;
	let mut ticker = tokio::time::interval(Duration::from_secs(1));
	loop {
		tokio::select! {
			_ = &mut rx => break,
			_ = ticker.tick() => println!("time left: {:.1}s", timer.time_left().as_secs_f64()),
			_ = tokio::signal::ctrl_c() => {
				timer.stop();
				warn!("interrupted with {:.1}s left", timer.time_left().as_secs_f64());
				break;
			}
		}
	}
	Ok(())
}

/// blocks the calling thread, run it via `spawn_blocking`
fn measure(options: InstrumentOptions, calls: u32, millis: u64) {
	let mut sleepy = instrument(
		"sleep",
		options,
		|millis: u64| std::thread::sleep(Duration::from_millis(millis)),
	);
	for _ in 0..calls {
		sleepy.call(millis);
	}
	println!(
		"{} calls took {:.3}s",
		sleepy.calls(),
		sleepy.total().as_secs_f64()
	);
}

#[tokio::main]
async fn main() -> Result<()> {
	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
		)
		.init();

	let args = ChronosctlArgs::parse();
	let config = match &args.config {
		Some(filename) => Config::from_file(filename)?,
		None => Config::load(),
	};
	info!("using {:?}", config);

	match args.command {
		ChronosctlCommand::Stopwatch { seconds, laps } => stopwatch(seconds, laps).await,
		ChronosctlCommand::Countdown { seconds, poll_ms } => {
			countdown(&config, seconds, poll_ms).await?;
		}
		ChronosctlCommand::Measure { calls, millis } => {
			let options = InstrumentOptions::from(config.instrument());
			tokio::task::spawn_blocking(move || measure(options, calls, millis)).await?;
		}
	}
	Ok(())
}
