use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One roster entry: the monthly plan plus the figures recorded against it,
/// keyed by week index.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Employee {
    pub name: String,
    pub plan: f64,
    #[serde(default)]
    pub actuals: HashMap<u32, f64>,
    #[serde(default)]
    pub profits: HashMap<u32, f64>,
}

impl Employee {
    pub fn new(name: String, plan: f64) -> Self {
        Self {
            name,
            plan,
            actuals: HashMap::new(),
            profits: HashMap::new(),
        }
    }

    /// A copy for the next month: same name and plan, no recorded figures.
    pub fn carried_forward(&self) -> Self {
        Self::new(self.name.clone(), self.plan)
    }

    pub fn weekly_actual(&self, week: u32) -> f64 {
        self.actuals.get(&week).copied().unwrap_or(0.0)
    }

    pub fn weekly_profit(&self, week: u32) -> f64 {
        self.profits.get(&week).copied().unwrap_or(0.0)
    }
}
