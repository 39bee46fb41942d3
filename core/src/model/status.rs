use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::week::Week;

/// Progress classification against the plan. Purely cosmetic: the
/// presentation layer maps these to colors, nothing else reads them.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Ahead,
    OnTrack,
    Behind,
    NoPlan,
}

/// Classification thresholds. `tolerance` scales the prorated plan below
/// which an employee counts as Behind; 1.0 means any shortfall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatusConfig {
    pub tolerance: f64,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self { tolerance: 1.0 }
    }
}

pub fn elapsed_weeks(weeks: &[Week], today: NaiveDate) -> usize {
    weeks.iter().filter(|w| w.start <= today).count()
}

/// Share of the plan expected by `today`. A month fully in the past expects
/// the whole plan; a running month scales it by the weeks that have started.
pub fn prorated_plan(plan: f64, weeks: &[Week], today: NaiveDate) -> f64 {
    let last_day = match weeks.last() {
        Some(week) => week.end,
        None => return plan,
    };
    if today > last_day {
        return plan;
    }
    plan * elapsed_weeks(weeks, today) as f64 / weeks.len() as f64
}

pub fn classify(
    actual: f64,
    plan: f64,
    weeks: &[Week],
    today: NaiveDate,
    config: StatusConfig,
) -> Status {
    if plan <= 0.0 {
        return Status::NoPlan;
    }
    let expected = prorated_plan(plan, weeks, today);
    if expected == 0.0 {
        // Nothing has come due yet.
        return Status::OnTrack;
    }
    if actual >= expected {
        Status::Ahead
    } else if actual < expected * config.tolerance {
        Status::Behind
    } else {
        Status::OnTrack
    }
}
