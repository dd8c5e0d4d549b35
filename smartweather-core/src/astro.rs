//! Sunrise/sunset timing: local wall-clock rendering across timezones and a
//! live countdown driven by a one-second refresh timer.
//!
//! Two different time axes are in play and must not be mixed:
//! - Local wall-clock display shifts the event timestamp by the city's UTC
//!   offset and formats the shifted instant as UTC. "UTC + offset" numerically
//!   equals local civil time, no timezone database needed.
//! - Countdown math compares the unshifted event timestamp with the unshifted
//!   current instant. Both are absolute moments on the same axis; adding the
//!   offset here would skew the countdown by exactly the offset.

use chrono::{DateTime, Utc};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

pub const CLOCK_PLACEHOLDER: &str = "--:--:--";
pub const NOT_AVAILABLE: &str = "N/A";
pub const ALREADY_PASSED: &str = "Already passed";

/// Wall-clock reading of `event` for an observer at `utc_offset_secs`,
/// rendered as `HH:MM:SS`. Absent events render as a placeholder.
pub fn local_clock_time(event: Option<i64>, utc_offset_secs: i64) -> String {
    let Some(ts) = event else {
        return CLOCK_PLACEHOLDER.to_string();
    };

    ts.checked_add(utc_offset_secs)
        .and_then(|shifted| DateTime::<Utc>::from_timestamp(shifted, 0))
        .map(|dt| dt.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| CLOCK_PLACEHOLDER.to_string())
}

/// Countdown to `event` evaluated at an explicit `now` in epoch milliseconds.
///
/// Renders whole hours with no day roll-over: an event 30 hours away reads
/// "30h ...", not "1d 6h ...".
pub fn countdown_at(event: Option<i64>, now_ms: i64) -> String {
    let Some(ts) = event else {
        return NOT_AVAILABLE.to_string();
    };

    let diff_ms = ts.saturating_mul(1000).saturating_sub(now_ms);
    if diff_ms <= 0 {
        return ALREADY_PASSED.to_string();
    }

    let total_secs = diff_ms / 1000;
    let hours = total_secs / 3600;
    let mins = (total_secs % 3600) / 60;
    let secs = total_secs % 60;

    format!("{hours}h {mins}m {secs}s")
}

/// Countdown to `event` relative to the real current instant.
pub fn countdown_to(event: Option<i64>) -> String {
    countdown_at(event, Utc::now().timestamp_millis())
}

/// Rendered countdowns for the tracked sunrise/sunset pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SunCountdown {
    pub sunrise: String,
    pub sunset: String,
}

impl SunCountdown {
    fn now(sunrise: Option<i64>, sunset: Option<i64>) -> Self {
        Self {
            sunrise: countdown_to(sunrise),
            sunset: countdown_to(sunset),
        }
    }
}

/// Once-per-second refresh of both countdowns.
///
/// The ticker uniquely owns its timer task and aborts it on drop, so replacing
/// the ticker when a new snapshot supplies new event timestamps cancels the
/// prior timer; stale timers never accumulate across re-renders.
#[derive(Debug)]
pub struct CountdownTicker {
    rx: watch::Receiver<SunCountdown>,
    task: JoinHandle<()>,
}

impl CountdownTicker {
    /// Start ticking for an event pair. The channel is seeded with an initial
    /// reading so subscribers see a value before the first tick.
    pub fn start(sunrise: Option<i64>, sunset: Option<i64>) -> Self {
        let (tx, rx) = watch::channel(SunCountdown::now(sunrise, sunset));

        let task = tokio::spawn(async move {
            let mut tick = tokio::time::interval(Duration::from_secs(1));
            tick.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first tick completes immediately and is already covered by
            // the seeded value.
            tick.tick().await;

            loop {
                tick.tick().await;
                if tx.send(SunCountdown::now(sunrise, sunset)).is_err() {
                    break;
                }
            }
        });

        Self { rx, task }
    }

    pub fn subscribe(&self) -> watch::Receiver<SunCountdown> {
        self.rx.clone()
    }
}

impl Drop for CountdownTicker {
    fn drop(&mut self) {
        self.task.abort();
    }
}
