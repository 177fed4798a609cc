use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Start of the simulated season calendar.
const SEASON_START: (i32, u32, u32) = (2025, 8, 1);

/// Global simulation clock. One tick is one week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationContext {
    /// 1-based week number.
    pub week: u32,
    pub date: NaiveDate,
}

impl SimulationContext {
    pub fn new() -> Self {
        let (year, month, day) = SEASON_START;
        SimulationContext {
            week: 1,
            // Statically valid calendar date.
            date: NaiveDate::from_ymd_opt(year, month, day).unwrap(),
        }
    }

    pub fn advance_week(&mut self) {
        self.week += 1;
        self.date = self.date + Duration::weeks(1);
    }
}

impl Default for SimulationContext {
    fn default() -> Self {
        SimulationContext::new()
    }
}
