use crate::error::StoreResult;
use crate::model::month::Month;

/// Persistence boundary for the whole data set. Every mutating store
/// operation is a load, an in-memory change, then a save.
pub trait PlanRepository {
    fn load(&self) -> StoreResult<Vec<Month>>;
    fn save(&self, months: &[Month]) -> StoreResult<()>;
}
