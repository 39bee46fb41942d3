use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::month::{Month, MonthId};
use crate::model::status::{self, Status, StatusConfig};
use crate::model::week::Week;

/// One rendered row: an employee's weekly cells plus the derived figures
/// the presentation layer shows next to them.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EmployeeRow {
    pub name: String,
    pub plan: f64,
    pub weekly: Vec<f64>,
    pub weekly_profit: Vec<f64>,
    pub total: f64,
    pub status: Status,
}

/// Everything a month view needs, flattened: rows sorted by name plus the
/// month-level totals of the plan panel.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MonthOverview {
    pub id: MonthId,
    pub name: String,
    pub weeks: Vec<Week>,
    pub rows: Vec<EmployeeRow>,
    pub total_planned: f64,
    pub total_actual: f64,
}

impl MonthOverview {
    pub fn from_month(month: &Month, config: StatusConfig, today: NaiveDate) -> Self {
        let mut rows: Vec<EmployeeRow> = month
            .employees
            .iter()
            .map(|employee| {
                let weekly: Vec<f64> = month
                    .weeks
                    .iter()
                    .map(|w| employee.weekly_actual(w.index))
                    .collect();
                let weekly_profit: Vec<f64> = month
                    .weeks
                    .iter()
                    .map(|w| employee.weekly_profit(w.index))
                    .collect();
                let total: f64 = weekly.iter().sum();
                let status = status::classify(total, employee.plan, &month.weeks, today, config);
                EmployeeRow {
                    name: employee.name.clone(),
                    plan: employee.plan,
                    weekly,
                    weekly_profit,
                    total,
                    status,
                }
            })
            .collect();
        rows.sort_by(|a, b| a.name.cmp(&b.name));

        let total_planned = rows.iter().map(|r| r.plan).sum();
        let total_actual = rows.iter().map(|r| r.total).sum();

        MonthOverview {
            id: month.id(),
            name: month.name.clone(),
            weeks: month.weeks.clone(),
            rows,
            total_planned,
            total_actual,
        }
    }
}
