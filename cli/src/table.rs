use chrono::Local;
use dispatchtrack_core::{MonthOverview, Status};
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct WeekCellRow {
    #[tabled(rename = "Employee")]
    name: String,
    #[tabled(rename = "Actual")]
    actual: String,
    #[tabled(rename = "Profit")]
    profit: String,
}

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Employee")]
    name: String,
    #[tabled(rename = "Plan")]
    plan: String,
    #[tabled(rename = "Total")]
    total: String,
    #[tabled(rename = "Status")]
    status: String,
}

pub fn render_month(overview: &MonthOverview) {
    println!("\n\x1b[1;36m{}\x1b[0m", overview.name);

    if overview.rows.is_empty() {
        println!("No employees in this month yet.");
        return;
    }

    let today = Local::now().date_naive();
    for (wi, week) in overview.weeks.iter().enumerate() {
        let marker = if week.contains(today) { " (this week)" } else { "" };
        println!("\n\x1b[1mWeek {}: {}{}\x1b[0m", week.index, week.label(), marker);

        let rows: Vec<WeekCellRow> = overview
            .rows
            .iter()
            .map(|row| WeekCellRow {
                name: row.name.clone(),
                actual: format!("{:.2}", row.weekly[wi]),
                profit: format!("{:.2}", row.weekly_profit[wi]),
            })
            .collect();
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{}", table);
    }

    println!("\n\x1b[1mMonthly plan\x1b[0m");
    let rows: Vec<SummaryRow> = overview
        .rows
        .iter()
        .map(|row| SummaryRow {
            name: row.name.clone(),
            plan: format!("{:.2}", row.plan),
            total: format!("{:.2}", row.total),
            status: status_cell(row.status),
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);

    println!(
        "Total planned: {:.2}   Total actual: {:.2}",
        overview.total_planned, overview.total_actual
    );
}

fn status_cell(status: Status) -> String {
    match status {
        Status::Ahead => "\x1b[32mAhead\x1b[0m".to_string(),
        Status::OnTrack => "\x1b[33mOn Track\x1b[0m".to_string(),
        Status::Behind => "\x1b[31mBehind\x1b[0m".to_string(),
        Status::NoPlan => "\x1b[90mNo Plan\x1b[0m".to_string(),
    }
}
