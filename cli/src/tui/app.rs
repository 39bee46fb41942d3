use dispatchtrack_core::{EmployeeRow, FilePlanRepository, MonthId, MonthOverview, PlanStore};
use ratatui::widgets::TableState;

pub struct App {
    pub store: PlanStore<FilePlanRepository>,
    pub months: Vec<MonthId>,
    pub current_month_index: usize,
    pub overview: Option<MonthOverview>,
    pub state: TableState,
}

impl App {
    pub fn new(store: PlanStore<FilePlanRepository>) -> App {
        let mut app = App {
            store,
            months: Vec::new(),
            current_month_index: 0,
            overview: None,
            state: TableState::default(),
        };
        // Start on the latest month, like the dashboard.
        app.months = app.store.list_months().unwrap_or_default();
        app.current_month_index = app.months.len().saturating_sub(1);
        app.reload();
        app
    }

    pub fn reload(&mut self) {
        self.months = self.store.list_months().unwrap_or_default();
        if self.months.is_empty() {
            self.current_month_index = 0;
            self.overview = None;
            self.state.select(None);
            return;
        }
        if self.current_month_index >= self.months.len() {
            self.current_month_index = self.months.len() - 1;
        }
        self.overview = self
            .store
            .month_overview(self.months[self.current_month_index])
            .ok();

        let rows = self.overview.as_ref().map(|o| o.rows.len()).unwrap_or(0);
        if rows == 0 {
            self.state.select(None);
        } else {
            let i = self.state.selected().unwrap_or(0).min(rows - 1);
            self.state.select(Some(i));
        }
    }

    pub fn next_month(&mut self) {
        if !self.months.is_empty() && self.current_month_index < self.months.len() - 1 {
            self.current_month_index += 1;
            self.reload();
        }
    }

    pub fn previous_month(&mut self) {
        if self.current_month_index > 0 {
            self.current_month_index -= 1;
            self.reload();
        }
    }

    pub fn next(&mut self) {
        let rows = self.row_count();
        if rows == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => {
                if i >= rows - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn previous(&mut self) {
        let rows = self.row_count();
        if rows == 0 {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => {
                if i == 0 {
                    rows - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn add_month(&mut self) {
        if self.store.add_next_month().is_ok() {
            self.months = self.store.list_months().unwrap_or_default();
            self.current_month_index = self.months.len().saturating_sub(1);
            self.reload();
        }
    }

    pub fn selected_row(&self) -> Option<&EmployeeRow> {
        let overview = self.overview.as_ref()?;
        overview.rows.get(self.state.selected()?)
    }

    fn row_count(&self) -> usize {
        self.overview.as_ref().map(|o| o.rows.len()).unwrap_or(0)
    }
}
