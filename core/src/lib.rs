pub mod error;
pub mod model;
pub mod repository;
pub mod service;
pub mod time;

pub use error::{StoreError, StoreResult};
pub use model::employee::Employee;
pub use model::month::{Month, MonthId};
pub use model::status::{Status, StatusConfig};
pub use model::week::Week;
pub use repository::{FilePlanRepository, PlanRepository};
pub use service::dto::{EmployeeRow, MonthOverview};
pub use service::plan_store::PlanStore;
pub use time::parse_month;
