use chrono::{Local, NaiveDate};

use crate::error::{StoreError, StoreResult};
use crate::model::employee::Employee;
use crate::model::month::{Month, MonthId};
use crate::model::status::{self, Status, StatusConfig};
use crate::model::week::Week;
use crate::repository::PlanRepository;
use crate::service::dto::MonthOverview;
use crate::time;

/// The monthly plan store: months, rosters, weekly figures, and everything
/// derived from them. Mutations are load, validate, change, save; a failed
/// validation returns before the save, so persisted state never changes on
/// error.
pub struct PlanStore<R: PlanRepository> {
    repo: R,
    config: StatusConfig,
}

impl<R: PlanRepository> PlanStore<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            config: StatusConfig::default(),
        }
    }

    pub fn with_config(repo: R, config: StatusConfig) -> Self {
        Self { repo, config }
    }

    /// Creates the month if it does not exist yet. Calling it again for the
    /// same month leaves the stored data untouched.
    pub fn create_month(&self, year: i32, month: u32) -> StoreResult<MonthId> {
        let mut months = self.repo.load()?;
        let id = MonthId::new(year, month);
        if months.iter().any(|m| m.id() == id) {
            return Ok(id);
        }
        months.push(Month::new(year, month)?);
        months.sort_by_key(|m| m.id());
        self.repo.save(&months)?;
        Ok(id)
    }

    /// Carries the source roster (names and plans, never recorded figures)
    /// into the target month, creating it if needed. Employees already in
    /// the target are left untouched, so re-running is harmless.
    pub fn bootstrap_month(
        &self,
        source: MonthId,
        target_year: i32,
        target_month: u32,
    ) -> StoreResult<MonthId> {
        let mut months = self.repo.load()?;
        let roster: Vec<Employee> = match months.iter().find(|m| m.id() == source) {
            Some(month) => month.employees.iter().map(Employee::carried_forward).collect(),
            None => return Err(StoreError::MonthNotFound(source)),
        };

        let target_id = MonthId::new(target_year, target_month);
        if !months.iter().any(|m| m.id() == target_id) {
            months.push(Month::new(target_year, target_month)?);
            months.sort_by_key(|m| m.id());
        }

        let target = find_month_mut(&mut months, target_id)?;
        for employee in roster {
            if target.employee(&employee.name).is_none() {
                target.employees.push(employee);
            }
        }
        self.repo.save(&months)?;
        Ok(target_id)
    }

    /// The dashboard's "Add New Month" button: bootstrap into the month
    /// after the latest tracked one, or start with the current calendar
    /// month on an empty store.
    pub fn add_next_month(&self) -> StoreResult<MonthId> {
        let months = self.repo.load()?;
        match months.iter().map(|m| m.id()).max() {
            Some(latest) => {
                let next = latest.next();
                self.bootstrap_month(latest, next.year, next.month)
            }
            None => {
                let id = time::current_month();
                self.create_month(id.year, id.month)
            }
        }
    }

    pub fn ensure_current_month(&self) -> StoreResult<MonthId> {
        let id = time::current_month();
        self.create_month(id.year, id.month)
    }

    pub fn add_employee(&self, id: MonthId, name: &str, plan: f64) -> StoreResult<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::EmptyName);
        }
        validate_plan(plan)?;
        let mut months = self.repo.load()?;
        let month = find_month_mut(&mut months, id)?;
        if month.employee(name).is_some() {
            return Err(StoreError::DuplicateEmployee {
                name: name.to_string(),
                month: id,
            });
        }
        month.employees.push(Employee::new(name.to_string(), plan));
        self.repo.save(&months)
    }

    /// Removes the employee from this month only; every other month keeps
    /// its roster.
    pub fn remove_employee(&self, id: MonthId, name: &str) -> StoreResult<()> {
        let mut months = self.repo.load()?;
        let month = find_month_mut(&mut months, id)?;
        let before = month.employees.len();
        month.employees.retain(|e| e.name != name);
        if month.employees.len() == before {
            return Err(StoreError::EmployeeNotFound {
                name: name.to_string(),
                month: id,
            });
        }
        self.repo.save(&months)
    }

    pub fn set_plan(&self, id: MonthId, name: &str, plan: f64) -> StoreResult<()> {
        validate_plan(plan)?;
        let mut months = self.repo.load()?;
        let month = find_month_mut(&mut months, id)?;
        let employee = find_employee_mut(month, name)?;
        employee.plan = plan;
        self.repo.save(&months)
    }

    /// Sets or overwrites the weekly entry. Negative values are permitted
    /// (corrections); NaN and infinities are not.
    pub fn record_actual(&self, id: MonthId, name: &str, week: u32, value: f64) -> StoreResult<()> {
        if !value.is_finite() {
            return Err(StoreError::NonFiniteValue { value });
        }
        let mut months = self.repo.load()?;
        let month = find_month_mut(&mut months, id)?;
        if month.week(week).is_none() {
            return Err(StoreError::WeekNotFound { index: week, month: id });
        }
        let employee = find_employee_mut(month, name)?;
        employee.actuals.insert(week, value);
        self.repo.save(&months)
    }

    /// The optional per-week current-profit figure. Tracked alongside the
    /// actuals but never part of totals or status.
    pub fn record_profit(&self, id: MonthId, name: &str, week: u32, value: f64) -> StoreResult<()> {
        if !value.is_finite() {
            return Err(StoreError::NonFiniteValue { value });
        }
        let mut months = self.repo.load()?;
        let month = find_month_mut(&mut months, id)?;
        if month.week(week).is_none() {
            return Err(StoreError::WeekNotFound { index: week, month: id });
        }
        let employee = find_employee_mut(month, name)?;
        employee.profits.insert(week, value);
        self.repo.save(&months)
    }

    pub fn list_months(&self) -> StoreResult<Vec<MonthId>> {
        let mut ids: Vec<MonthId> = self.repo.load()?.iter().map(|m| m.id()).collect();
        ids.sort();
        Ok(ids)
    }

    pub fn list_employees(&self, id: MonthId) -> StoreResult<Vec<String>> {
        let months = self.repo.load()?;
        let month = find_month(&months, id)?;
        let mut names: Vec<String> = month.employees.iter().map(|e| e.name.clone()).collect();
        names.sort();
        Ok(names)
    }

    pub fn weeks(&self, id: MonthId) -> StoreResult<Vec<Week>> {
        let months = self.repo.load()?;
        Ok(find_month(&months, id)?.weeks.clone())
    }

    pub fn weekly_total(&self, id: MonthId, name: &str, week: u32) -> StoreResult<f64> {
        let months = self.repo.load()?;
        let month = find_month(&months, id)?;
        if month.week(week).is_none() {
            return Err(StoreError::WeekNotFound { index: week, month: id });
        }
        let employee = find_employee(month, name)?;
        Ok(employee.weekly_actual(week))
    }

    pub fn weekly_profit(&self, id: MonthId, name: &str, week: u32) -> StoreResult<f64> {
        let months = self.repo.load()?;
        let month = find_month(&months, id)?;
        if month.week(week).is_none() {
            return Err(StoreError::WeekNotFound { index: week, month: id });
        }
        let employee = find_employee(month, name)?;
        Ok(employee.weekly_profit(week))
    }

    pub fn monthly_total(&self, id: MonthId, name: &str) -> StoreResult<f64> {
        let months = self.repo.load()?;
        let month = find_month(&months, id)?;
        let employee = find_employee(month, name)?;
        Ok(month.weeks.iter().map(|w| employee.weekly_actual(w.index)).sum())
    }

    pub fn status(&self, id: MonthId, name: &str) -> StoreResult<Status> {
        self.status_as_of(id, name, Local::now().date_naive())
    }

    /// Clock-injected form of `status`.
    pub fn status_as_of(&self, id: MonthId, name: &str, today: NaiveDate) -> StoreResult<Status> {
        let months = self.repo.load()?;
        let month = find_month(&months, id)?;
        let employee = find_employee(month, name)?;
        let actual: f64 = month.weeks.iter().map(|w| employee.weekly_actual(w.index)).sum();
        Ok(status::classify(
            actual,
            employee.plan,
            &month.weeks,
            today,
            self.config,
        ))
    }

    pub fn month_overview(&self, id: MonthId) -> StoreResult<MonthOverview> {
        self.month_overview_as_of(id, Local::now().date_naive())
    }

    pub fn month_overview_as_of(&self, id: MonthId, today: NaiveDate) -> StoreResult<MonthOverview> {
        let months = self.repo.load()?;
        let month = find_month(&months, id)?;
        Ok(MonthOverview::from_month(month, self.config, today))
    }
}

// Standalone lookup helpers shared by the operations above.

fn find_month(months: &[Month], id: MonthId) -> StoreResult<&Month> {
    months
        .iter()
        .find(|m| m.id() == id)
        .ok_or(StoreError::MonthNotFound(id))
}

fn find_month_mut(months: &mut [Month], id: MonthId) -> StoreResult<&mut Month> {
    months
        .iter_mut()
        .find(|m| m.id() == id)
        .ok_or(StoreError::MonthNotFound(id))
}

fn find_employee<'a>(month: &'a Month, name: &str) -> StoreResult<&'a Employee> {
    month.employee(name).ok_or_else(|| StoreError::EmployeeNotFound {
        name: name.to_string(),
        month: month.id(),
    })
}

fn find_employee_mut<'a>(month: &'a mut Month, name: &str) -> StoreResult<&'a mut Employee> {
    let id = month.id();
    month.employee_mut(name).ok_or_else(|| StoreError::EmployeeNotFound {
        name: name.to_string(),
        month: id,
    })
}

fn validate_plan(plan: f64) -> StoreResult<()> {
    if !plan.is_finite() || plan < 0.0 {
        return Err(StoreError::InvalidPlan { value: plan });
    }
    Ok(())
}
