// Copyright © 2024 Stephan Kunz

//! Countdown scenarios on paused tokio time

use chronos::prelude::*;
use std::{
	sync::{
		atomic::{AtomicUsize, Ordering},
		Arc,
	},
	time::Duration,
};
use tokio::time::sleep;

fn counting_timer(secs: u64) -> Result<(Arc<AtomicUsize>, Timer)> {
	let counter = Arc::new(AtomicUsize::new(0));
	let count = counter.clone();
	let timer = Timer::builder(Duration::from_secs(secs))
		.poll_interval(Duration::from_millis(300))
		.callback(move || {
			count.fetch_add(1, Ordering::SeqCst);
			Ok(())
		})
		.build()?;
	Ok((counter, timer))
}

#[tokio::test(start_paused = true)]
async fn expires_once_after_duration() -> Result<()> {
	let (counter, timer) = counting_timer(1)?;
	timer.start()?;
	assert!(timer.is_running());
	sleep(Duration::from_millis(1500)).await;

	assert!(!timer.is_running());
	assert!(timer.is_expired());
	assert_eq!(counter.load(Ordering::SeqCst), 1);
	assert_eq!(timer.time_left(), Duration::ZERO);

	sleep(Duration::from_secs(5)).await;
	assert_eq!(counter.load(Ordering::SeqCst), 1);
	Ok(())
}

#[tokio::test(start_paused = true)]
async fn stopped_countdown_keeps_time_left() -> Result<()> {
	let (counter, timer) = counting_timer(5)?;
	timer.start()?;
	sleep(Duration::from_secs(2)).await;
	timer.stop();
	sleep(Duration::from_secs(10)).await;

	assert!(!timer.is_running());
	assert!(!timer.is_expired());
	assert_eq!(timer.time_left(), Duration::from_secs(3));
	assert_eq!(counter.load(Ordering::SeqCst), 0);
	Ok(())
}

#[tokio::test(start_paused = true)]
async fn resume_continues_countdown() -> Result<()> {
	let (counter, timer) = counting_timer(2)?;
	timer.start()?;
	sleep(Duration::from_secs(1)).await;
	timer.stop();
	sleep(Duration::from_secs(5)).await;
	timer.start()?;
	sleep(Duration::from_millis(500)).await;
	assert_eq!(counter.load(Ordering::SeqCst), 0);
	sleep(Duration::from_secs(1)).await;
	assert_eq!(counter.load(Ordering::SeqCst), 1);
	Ok(())
}

#[tokio::test(start_paused = true)]
async fn reset_rearms_full_countdown() -> Result<()> {
	let (counter, timer) = counting_timer(1)?;
	timer.start()?;
	sleep(Duration::from_millis(1500)).await;
	assert_eq!(counter.load(Ordering::SeqCst), 1);

	timer.reset();
	assert!(!timer.is_expired());
	assert_eq!(timer.time_left(), Duration::from_secs(1));
	timer.start()?;
	sleep(Duration::from_millis(500)).await;
	assert_eq!(counter.load(Ordering::SeqCst), 1);
	sleep(Duration::from_secs(1)).await;
	assert_eq!(counter.load(Ordering::SeqCst), 2);
	Ok(())
}

#[tokio::test(start_paused = true)]
async fn start_rearms_expired_timer() -> Result<()> {
	let (counter, timer) = counting_timer(1)?;
	timer.start()?;
	sleep(Duration::from_millis(1500)).await;
	assert!(timer.is_expired());

	timer.start()?;
	assert!(!timer.is_expired());
	assert!(timer.is_running());
	assert_eq!(timer.time_left(), Duration::from_secs(1));
	sleep(Duration::from_millis(1500)).await;
	assert_eq!(counter.load(Ordering::SeqCst), 2);
	Ok(())
}

#[tokio::test(start_paused = true)]
async fn time_left_never_increases() -> Result<()> {
	let (_, timer) = counting_timer(2)?;
	timer.start()?;
	let mut previous = timer.time_left();
	for _ in 0..10 {
		sleep(Duration::from_millis(250)).await;
		let current = timer.time_left();
		assert!(current <= previous);
		previous = current;
	}
	assert_eq!(previous, Duration::ZERO);
	Ok(())
}

#[tokio::test(start_paused = true)]
async fn stopped_timer_never_fires() -> Result<()> {
	let (counter, timer) = counting_timer(1)?;
	timer.start()?;
	sleep(Duration::from_millis(900)).await;
	timer.stop();
	sleep(Duration::from_secs(60)).await;
	assert_eq!(counter.load(Ordering::SeqCst), 0);
	assert!(!timer.is_expired());
	Ok(())
}

#[tokio::test(start_paused = true)]
async fn dropped_timer_never_fires() -> Result<()> {
	let (counter, timer) = counting_timer(1)?;
	timer.start()?;
	sleep(Duration::from_millis(400)).await;
	drop(timer);
	sleep(Duration::from_secs(5)).await;
	assert_eq!(counter.load(Ordering::SeqCst), 0);
	Ok(())
}

#[tokio::test(start_paused = true)]
async fn failing_callback_still_expires() -> Result<()> {
	let timer = Timer::with_callback(Duration::from_secs(1), || {
		Err("callback went wrong".into())
	})?;
	timer.start()?;
	sleep(Duration::from_millis(1500)).await;
	assert!(timer.is_expired());
	assert!(!timer.is_running());
	Ok(())
}

#[tokio::test(start_paused = true)]
async fn callback_may_restart_timer() -> Result<()> {
	let counter = Arc::new(AtomicUsize::new(0));
	let count = counter.clone();
	let timer: Arc<std::sync::OnceLock<Timer>> = Arc::new(std::sync::OnceLock::new());
	let inner = timer.clone();
	let built = Timer::with_callback(Duration::from_secs(1), move || {
		if count.fetch_add(1, Ordering::SeqCst) == 0 {
			if let Some(timer) = inner.get() {
				timer.start()?;
			}
		}
		Ok(())
	})?;
	assert!(timer.set(built).is_ok());
	let Some(timer) = timer.get() else {
		return Err("timer not set".into());
	};

	timer.start()?;
	sleep(Duration::from_secs(4)).await;
	assert_eq!(counter.load(Ordering::SeqCst), 2);
	assert!(timer.is_expired());
	Ok(())
}

#[tokio::test(start_paused = true)]
async fn guard_pauses_countdown() -> Result<()> {
	let (counter, timer) = counting_timer(5)?;
	{
		let running = timer.scoped()?;
		assert!(running.is_running());
		sleep(Duration::from_secs(1)).await;
	}
	assert!(!timer.is_running());
	sleep(Duration::from_secs(10)).await;
	assert_eq!(timer.time_left(), Duration::from_secs(4));
	assert_eq!(counter.load(Ordering::SeqCst), 0);
	Ok(())
}

#[test]
fn runs_on_given_runtime() -> Result<()> {
	let runtime = tokio::runtime::Builder::new_multi_thread()
		.worker_threads(1)
		.enable_time()
		.build()?;
	let counter = Arc::new(AtomicUsize::new(0));
	let count = counter.clone();
	let timer = Timer::builder(Duration::from_millis(50))
		.poll_interval(Duration::from_millis(10))
		.runtime(runtime.handle().clone())
		.callback(move || {
			count.fetch_add(1, Ordering::SeqCst);
			Ok(())
		})
		.build()?;

	timer.start()?;
	std::thread::sleep(Duration::from_millis(500));
	assert!(timer.is_expired());
	assert_eq!(counter.load(Ordering::SeqCst), 1);
	Ok(())
}
