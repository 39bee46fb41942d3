use thiserror::Error;

use crate::model::month::MonthId;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{year}-{month:02} is not a valid calendar month")]
    InvalidMonth { year: i32, month: u32 },
    #[error("value {value} is not a finite number")]
    NonFiniteValue { value: f64 },
    #[error("plan {value} must be a finite, non-negative number")]
    InvalidPlan { value: f64 },
    #[error("employee name must not be empty")]
    EmptyName,
    #[error("employee {name} already exists in {month}")]
    DuplicateEmployee { name: String, month: MonthId },
    #[error("month {0} not found")]
    MonthNotFound(MonthId),
    #[error("employee {name} not found in {month}")]
    EmployeeNotFound { name: String, month: MonthId },
    #[error("week {index} does not exist in {month}")]
    WeekNotFound { index: u32, month: MonthId },
    #[error("could not determine home directory")]
    NoHomeDir,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
