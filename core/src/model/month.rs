use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::StoreResult;
use crate::model::employee::Employee;
use crate::model::week::Week;
use crate::time;

/// Key of a tracked month.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthId {
    pub year: i32,
    pub month: u32,
}

impl MonthId {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// The month immediately after this one.
    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }
}

impl fmt::Display for MonthId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// A tracked month: derived weeks plus the employee roster. Weeks are never
/// hand-edited; they always come from `Week::for_month`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Month {
    pub year: i32,
    pub month: u32,
    pub name: String,
    pub weeks: Vec<Week>,
    pub employees: Vec<Employee>,
}

impl Month {
    pub fn new(year: i32, month: u32) -> StoreResult<Self> {
        let weeks = Week::for_month(year, month)?;
        let name = time::month_label(year, month).unwrap_or_default();
        Ok(Self {
            year,
            month,
            name,
            weeks,
            employees: Vec::new(),
        })
    }

    pub fn id(&self) -> MonthId {
        MonthId {
            year: self.year,
            month: self.month,
        }
    }

    pub fn week(&self, index: u32) -> Option<&Week> {
        self.weeks.iter().find(|w| w.index == index)
    }

    pub fn employee(&self, name: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.name == name)
    }

    pub fn employee_mut(&mut self, name: &str) -> Option<&mut Employee> {
        self.employees.iter_mut().find(|e| e.name == name)
    }
}
