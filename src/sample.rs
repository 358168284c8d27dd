//! Sample activity data generator
//!
//! Produces synthetic daily activity records for the `--sample-data` mode,
//! dates counting backward from today. Values are drawn from a non-seeded
//! random source; reproducibility across runs is not a goal.

use chrono::{Duration, Local, NaiveDate};
use rand::Rng;
use serde::Serialize;

/// Rough estimate: 1 step ≈ 0.8 m, expressed in kilometres.
pub const KM_PER_STEP: f64 = 0.0008;

/// Number of history days sent with a sample predictions request.
pub const DEFAULT_HISTORY_DAYS: usize = 14;

/// One day of synthetic activity metrics.
#[derive(Debug, Clone, Serialize)]
pub struct ActivityRecord {
    pub date: String,
    pub steps: u32,
    pub active_minutes: u32,
    pub distance: f64,
}

/// Distance in km for a step count, rounded to 2 decimals.
pub fn distance_for_steps(steps: u32) -> f64 {
    (f64::from(steps) * KM_PER_STEP * 100.0).round() / 100.0
}

/// Lazily generate `days` records, newest first, ending at today.
pub fn activity_history(days: usize) -> impl Iterator<Item = ActivityRecord> {
    history_from(Local::now().date_naive(), days)
}

fn history_from(today: NaiveDate, days: usize) -> impl Iterator<Item = ActivityRecord> {
    (0..days as i64).map(move |offset| {
        let mut rng = rand::thread_rng();
        let steps: u32 = rng.gen_range(5000..=15000);
        let active_minutes: u32 = rng.gen_range(20..=60);

        ActivityRecord {
            date: (today - Duration::days(offset)).format("%Y-%m-%d").to_string(),
            steps,
            active_minutes,
            distance: distance_for_steps(steps),
        }
    })
}
