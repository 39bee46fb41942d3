use dispatchtrack_core::Status;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Row, Table, Wrap},
    Frame,
};

use crate::tui::app::App;

pub fn draw(f: &mut Frame, app: &mut App) {
    let size = f.area();

    // Header and Main Content Split
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(0)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Content
            Constraint::Length(1), // Footer/Help
        ])
        .split(size);

    let title = match app.overview.as_ref() {
        Some(overview) => format!("DISPATCH TRACKER - {}", overview.name),
        None => "DISPATCH TRACKER".to_string(),
    };
    let header = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_type(BorderType::Rounded));
    f.render_widget(header, main_chunks[0]);

    // Split Content into Left (Roster) and Right (Detail)
    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(main_chunks[1]);

    draw_roster(f, app, content_chunks[0]);
    draw_detail_view(f, app, content_chunks[1]);

    // Footer
    let footer = Paragraph::new("h/l: Month | j/k: Employee | a: Add month | r: Reload | q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(footer, main_chunks[2]);
}

fn draw_roster(f: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Roster ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let Some(overview) = app.overview.as_ref() else {
        let empty = Paragraph::new("No months yet. Press 'a' to add the current month.")
            .block(block)
            .wrap(Wrap { trim: true });
        f.render_widget(empty, area);
        return;
    };

    let rows: Vec<Row> = overview
        .rows
        .iter()
        .map(|row| {
            Row::new(vec![
                Span::styled(row.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(format!("{:.2}", row.plan)),
                Span::raw(format!("{:.2}", row.total)),
                Span::styled(status_text(row.status), status_style(row.status)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Min(12),    // Employee
            Constraint::Length(10), // Plan
            Constraint::Length(10), // Total
            Constraint::Length(9),  // Status
        ],
    )
    .header(Row::new(vec!["Employee", "Plan", "Total", "Status"]).style(Style::default().fg(Color::Yellow)))
    .block(block)
    .row_highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
    .highlight_symbol(">> ");

    f.render_stateful_widget(table, area, &mut app.state);
}

fn draw_detail_view(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Detail ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let Some(overview) = app.overview.as_ref() else {
        f.render_widget(block, area);
        return;
    };

    let mut lines = Vec::new();
    if let Some(row) = app.selected_row() {
        lines.push(Line::from(vec![
            Span::styled("Employee: ", Style::default().fg(Color::Blue)),
            Span::styled(row.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Plan: ", Style::default().fg(Color::Blue)),
            Span::raw(format!("{:.2}", row.plan)),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Total: ", Style::default().fg(Color::Blue)),
            Span::raw(format!("{:.2}", row.total)),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Status: ", Style::default().fg(Color::Blue)),
            Span::styled(status_text(row.status), status_style(row.status)),
        ]));
        lines.push(Line::from(""));

        for (i, week) in overview.weeks.iter().enumerate() {
            lines.push(Line::from(Span::styled(
                format!("Week {} ({})", week.index, week.label()),
                Style::default().fg(Color::Blue),
            )));
            lines.push(Line::from(format!(
                "  actual {:>10.2}   profit {:>10.2}",
                row.weekly[i], row.weekly_profit[i]
            )));
        }
    } else {
        lines.push(Line::from(Span::styled(
            "Month totals",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(format!("Planned: {:.2}", overview.total_planned)));
        lines.push(Line::from(format!("Actual:  {:.2}", overview.total_actual)));
    }

    let detail = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
    f.render_widget(detail, area);
}

fn status_text(status: Status) -> &'static str {
    match status {
        Status::Ahead => "Ahead",
        Status::OnTrack => "On Track",
        Status::Behind => "Behind",
        Status::NoPlan => "No Plan",
    }
}

fn status_style(status: Status) -> Style {
    match status {
        Status::Ahead => Style::default().fg(Color::Green),
        Status::OnTrack => Style::default().fg(Color::Yellow),
        Status::Behind => Style::default().fg(Color::Red),
        Status::NoPlan => Style::default().fg(Color::DarkGray),
    }
}
