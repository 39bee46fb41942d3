#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use chrono::NaiveDate;

    use crate::error::{StoreError, StoreResult};
    use crate::model::month::{Month, MonthId};
    use crate::model::status::{Status, StatusConfig};
    use crate::repository::PlanRepository;
    use crate::service::plan_store::PlanStore;
    use crate::time;

    struct MockPlanRepository {
        months: RefCell<Vec<Month>>,
    }

    impl MockPlanRepository {
        fn new() -> Self {
            Self {
                months: RefCell::new(Vec::new()),
            }
        }
    }

    impl PlanRepository for MockPlanRepository {
        fn load(&self) -> StoreResult<Vec<Month>> {
            Ok(self.months.borrow().clone())
        }

        fn save(&self, months: &[Month]) -> StoreResult<()> {
            *self.months.borrow_mut() = months.to_vec();
            Ok(())
        }
    }

    fn store() -> PlanStore<MockPlanRepository> {
        PlanStore::new(MockPlanRepository::new())
    }

    const JAN: MonthId = MonthId { year: 2024, month: 1 };
    const FEB: MonthId = MonthId { year: 2024, month: 2 };

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn create_month_is_idempotent() {
        let store = store();
        store.create_month(2024, 1).unwrap();
        store.add_employee(JAN, "Alice", 1000.0).unwrap();
        let weeks_before = store.weeks(JAN).unwrap();

        store.create_month(2024, 1).unwrap();

        assert_eq!(store.weeks(JAN).unwrap(), weeks_before);
        assert_eq!(store.list_employees(JAN).unwrap(), vec!["Alice"]);
        assert_eq!(store.list_months().unwrap(), vec![JAN]);
    }

    #[test]
    fn create_month_rejects_invalid_months() {
        let store = store();
        assert!(matches!(
            store.create_month(2024, 13),
            Err(StoreError::InvalidMonth { .. })
        ));
        assert!(store.list_months().unwrap().is_empty());
    }

    #[test]
    fn bootstrap_copies_roster_and_plan_but_not_actuals() {
        let store = store();
        store.create_month(2024, 1).unwrap();
        store.add_employee(JAN, "Alice", 1000.0).unwrap();
        store.record_actual(JAN, "Alice", 1, 250.0).unwrap();
        store.record_profit(JAN, "Alice", 1, 80.0).unwrap();

        store.bootstrap_month(JAN, 2024, 2).unwrap();

        assert_eq!(store.list_employees(FEB).unwrap(), vec!["Alice"]);
        assert_eq!(store.monthly_total(FEB, "Alice").unwrap(), 0.0);
        assert_eq!(store.weekly_profit(FEB, "Alice", 1).unwrap(), 0.0);
        // Source figures survive.
        assert_eq!(store.monthly_total(JAN, "Alice").unwrap(), 250.0);

        let overview = store.month_overview_as_of(FEB, date(2024, 3, 5)).unwrap();
        assert_eq!(overview.rows[0].plan, 1000.0);
    }

    #[test]
    fn bootstrap_is_idempotent_and_non_destructive() {
        let store = store();
        store.create_month(2024, 1).unwrap();
        store.add_employee(JAN, "Alice", 1000.0).unwrap();

        store.bootstrap_month(JAN, 2024, 2).unwrap();
        store.set_plan(FEB, "Alice", 1200.0).unwrap();
        store.record_actual(FEB, "Alice", 1, 99.0).unwrap();
        store.bootstrap_month(JAN, 2024, 2).unwrap();

        // No duplicate, and the existing target employee is untouched.
        assert_eq!(store.list_employees(FEB).unwrap(), vec!["Alice"]);
        assert_eq!(store.monthly_total(FEB, "Alice").unwrap(), 99.0);
        let overview = store.month_overview_as_of(FEB, date(2024, 3, 5)).unwrap();
        assert_eq!(overview.rows[0].plan, 1200.0);
    }

    #[test]
    fn bootstrap_requires_the_source_month() {
        let store = store();
        assert!(matches!(
            store.bootstrap_month(JAN, 2024, 2),
            Err(StoreError::MonthNotFound(_))
        ));
    }

    #[test]
    fn remove_employee_affects_one_month_only() {
        let store = store();
        store.create_month(2024, 1).unwrap();
        store.add_employee(JAN, "Alice", 1000.0).unwrap();
        store.add_employee(JAN, "Bob", 500.0).unwrap();
        store.bootstrap_month(JAN, 2024, 2).unwrap();

        store.remove_employee(FEB, "Bob").unwrap();

        assert_eq!(store.list_employees(FEB).unwrap(), vec!["Alice"]);
        assert_eq!(store.list_employees(JAN).unwrap(), vec!["Alice", "Bob"]);
    }

    #[test]
    fn remove_unknown_employee_is_not_found() {
        let store = store();
        store.create_month(2024, 1).unwrap();
        assert!(matches!(
            store.remove_employee(JAN, "Nobody"),
            Err(StoreError::EmployeeNotFound { .. })
        ));
    }

    #[test]
    fn monthly_total_sums_weekly_entries() {
        let store = store();
        store.create_month(2024, 1).unwrap();
        store.add_employee(JAN, "Alice", 1000.0).unwrap();
        store.record_actual(JAN, "Alice", 1, 250.0).unwrap();
        store.record_actual(JAN, "Alice", 2, 300.0).unwrap();

        assert_eq!(store.monthly_total(JAN, "Alice").unwrap(), 550.0);
        assert_eq!(store.weekly_total(JAN, "Alice", 1).unwrap(), 250.0);
        // Unset weeks read as zero.
        assert_eq!(store.weekly_total(JAN, "Alice", 3).unwrap(), 0.0);

        let weeks = store.weeks(JAN).unwrap();
        let summed: f64 = weeks
            .iter()
            .map(|w| store.weekly_total(JAN, "Alice", w.index).unwrap())
            .sum();
        assert_eq!(summed, store.monthly_total(JAN, "Alice").unwrap());
    }

    #[test]
    fn record_actual_overwrites_and_allows_negatives() {
        let store = store();
        store.create_month(2024, 1).unwrap();
        store.add_employee(JAN, "Alice", 1000.0).unwrap();
        store.record_actual(JAN, "Alice", 1, 250.0).unwrap();
        store.record_actual(JAN, "Alice", 1, -25.0).unwrap();

        assert_eq!(store.weekly_total(JAN, "Alice", 1).unwrap(), -25.0);
    }

    #[test]
    fn non_finite_values_are_rejected_and_change_nothing() {
        let store = store();
        store.create_month(2024, 1).unwrap();
        store.add_employee(JAN, "Alice", 1000.0).unwrap();
        store.record_actual(JAN, "Alice", 1, 250.0).unwrap();

        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                store.record_actual(JAN, "Alice", 1, bad),
                Err(StoreError::NonFiniteValue { .. })
            ));
            assert!(matches!(
                store.record_profit(JAN, "Alice", 1, bad),
                Err(StoreError::NonFiniteValue { .. })
            ));
        }
        assert_eq!(store.monthly_total(JAN, "Alice").unwrap(), 250.0);
    }

    #[test]
    fn record_actual_validates_employee_and_week() {
        let store = store();
        store.create_month(2024, 1).unwrap();
        store.add_employee(JAN, "Alice", 1000.0).unwrap();

        assert!(matches!(
            store.record_actual(JAN, "Nobody", 1, 10.0),
            Err(StoreError::EmployeeNotFound { .. })
        ));
        assert!(matches!(
            store.record_actual(JAN, "Alice", 9, 10.0),
            Err(StoreError::WeekNotFound { index: 9, .. })
        ));
        assert!(matches!(
            store.record_actual(FEB, "Alice", 1, 10.0),
            Err(StoreError::MonthNotFound(_))
        ));
    }

    #[test]
    fn add_employee_validates_name_and_plan() {
        let store = store();
        store.create_month(2024, 1).unwrap();
        store.add_employee(JAN, "Alice", 1000.0).unwrap();

        assert!(matches!(
            store.add_employee(JAN, "  ", 0.0),
            Err(StoreError::EmptyName)
        ));
        assert!(matches!(
            store.add_employee(JAN, "Alice", 500.0),
            Err(StoreError::DuplicateEmployee { .. })
        ));
        assert!(matches!(
            store.add_employee(JAN, "Bob", -1.0),
            Err(StoreError::InvalidPlan { .. })
        ));
        assert!(matches!(
            store.add_employee(JAN, "Bob", f64::NAN),
            Err(StoreError::InvalidPlan { .. })
        ));
        assert_eq!(store.list_employees(JAN).unwrap(), vec!["Alice"]);
    }

    #[test]
    fn set_plan_upserts_the_target() {
        let store = store();
        store.create_month(2024, 1).unwrap();
        store.add_employee(JAN, "Alice", 0.0).unwrap();
        store.set_plan(JAN, "Alice", 1500.0).unwrap();

        let overview = store.month_overview_as_of(JAN, date(2024, 1, 1)).unwrap();
        assert_eq!(overview.rows[0].plan, 1500.0);
        assert!(matches!(
            store.set_plan(JAN, "Nobody", 100.0),
            Err(StoreError::EmployeeNotFound { .. })
        ));
    }

    #[test]
    fn status_prorates_the_running_month() {
        let store = store();
        store.create_month(2024, 2).unwrap();
        store.add_employee(FEB, "Alice", 1000.0).unwrap();
        store.record_actual(FEB, "Alice", 1, 300.0).unwrap();
        store.record_actual(FEB, "Alice", 2, 300.0).unwrap();

        // Feb 15, 2024: 3 of 5 weeks started, 600 expected.
        let mid = date(2024, 2, 15);
        assert_eq!(store.status_as_of(FEB, "Alice", mid).unwrap(), Status::Ahead);

        store.record_actual(FEB, "Alice", 2, 250.0).unwrap();
        assert_eq!(store.status_as_of(FEB, "Alice", mid).unwrap(), Status::Behind);

        // Fully past: the whole plan counts.
        let after = date(2024, 3, 5);
        assert_eq!(store.status_as_of(FEB, "Alice", after).unwrap(), Status::Behind);
        store.record_actual(FEB, "Alice", 3, 450.0).unwrap();
        assert_eq!(store.status_as_of(FEB, "Alice", after).unwrap(), Status::Ahead);
    }

    #[test]
    fn status_tolerance_is_configurable() {
        let store = PlanStore::with_config(
            MockPlanRepository::new(),
            StatusConfig { tolerance: 0.9 },
        );
        store.create_month(2024, 2).unwrap();
        store.add_employee(FEB, "Alice", 1000.0).unwrap();
        store.record_actual(FEB, "Alice", 1, 550.0).unwrap();

        // 550 against 600 expected: inside the 10% band.
        let mid = date(2024, 2, 15);
        assert_eq!(store.status_as_of(FEB, "Alice", mid).unwrap(), Status::OnTrack);
    }

    #[test]
    fn status_handles_no_plan_and_future_months() {
        let store = store();
        store.create_month(2024, 2).unwrap();
        store.add_employee(FEB, "Alice", 0.0).unwrap();
        store.add_employee(FEB, "Bob", 800.0).unwrap();

        let before = date(2024, 1, 10);
        assert_eq!(store.status_as_of(FEB, "Alice", before).unwrap(), Status::NoPlan);
        assert_eq!(store.status_as_of(FEB, "Bob", before).unwrap(), Status::OnTrack);
    }

    #[test]
    fn add_next_month_chains_across_the_year_boundary() {
        let store = store();
        store.create_month(2024, 12).unwrap();
        let dec = MonthId { year: 2024, month: 12 };
        store.add_employee(dec, "Alice", 1000.0).unwrap();

        let next = store.add_next_month().unwrap();

        assert_eq!(next, MonthId { year: 2025, month: 1 });
        assert_eq!(store.list_employees(next).unwrap(), vec!["Alice"]);
        assert_eq!(store.monthly_total(next, "Alice").unwrap(), 0.0);
    }

    #[test]
    fn add_next_month_starts_with_the_current_month() {
        let store = store();
        let id = store.add_next_month().unwrap();
        assert_eq!(id, time::current_month());
        assert_eq!(store.list_months().unwrap(), vec![id]);
    }

    #[test]
    fn list_months_is_sorted_ascending() {
        let store = store();
        store.create_month(2024, 3).unwrap();
        store.create_month(2023, 11).unwrap();
        store.create_month(2024, 1).unwrap();

        let ids: Vec<String> = store
            .list_months()
            .unwrap()
            .iter()
            .map(|id| id.to_string())
            .collect();
        assert_eq!(ids, vec!["2023-11", "2024-01", "2024-03"]);
    }
}
