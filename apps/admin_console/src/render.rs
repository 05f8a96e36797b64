use std::fmt::Write as _;

use chrono::{Datelike, NaiveDate};
use program_core::{CalendarCell, CalendarView, CellKind, SubscriptionSummary};
use shared::{
    domain::{Asset, Program, SortDirection, SortField},
    error::AdminError,
    events::AdminEvent,
};

use crate::commands::Reply;

const PROGRAM_COLUMNS: [(&str, Option<SortField>); 5] = [
    ("Program", Some(SortField::Name)),
    ("Start Date", Some(SortField::StartDate)),
    ("Asset Identifier", None),
    ("Description", None),
    ("Bounty Eligibility", None),
];

pub fn reply_text(reply: &Reply) -> String {
    match reply {
        Reply::Event(event) => event_text(event),
        Reply::Subscription(summary) => subscription_text(summary),
        Reply::Calendar(view) => calendar_text(view),
        Reply::Quit => String::new(),
    }
}

pub fn reply_json(reply: &Reply) -> serde_json::Result<String> {
    match reply {
        Reply::Event(event) => serde_json::to_string(event),
        Reply::Subscription(summary) => serde_json::to_string(summary),
        Reply::Calendar(view) => serde_json::to_string(view),
        Reply::Quit => Ok(String::new()),
    }
}

pub fn error_text(error: &AdminError) -> String {
    format!("error: {}", error.message)
}

pub fn error_json(error: &AdminError) -> serde_json::Result<String> {
    serde_json::to_string(&AdminEvent::Error(error.clone()))
}

fn event_text(event: &AdminEvent) -> String {
    match event {
        AdminEvent::ProgramsListed {
            sort_field,
            sort_direction,
            programs,
        } => program_table(programs, *sort_field, *sort_direction),
        AdminEvent::ProgramCreated { program } => {
            format!("created program {} ({})", program.id, program.name)
        }
        AdminEvent::ProgramDeleted {
            program_id,
            removed: true,
        } => format!("deleted program {program_id}"),
        AdminEvent::ProgramDeleted { program_id, .. } => {
            format!("no program {program_id}; nothing deleted")
        }
        AdminEvent::ProgramDetails { program } => program_details(program),
        AdminEvent::SortChanged { field, direction } => {
            format!("sorted by {field} {}", direction_label(*direction))
        }
        AdminEvent::FormOpened => "create-program form open".to_string(),
        AdminEvent::FormCancelled { discarded_assets } => {
            format!("form closed; {discarded_assets} asset(s) discarded")
        }
        AdminEvent::FormUpdated {
            website_error: Some(message),
        } => format!("website: {message}"),
        AdminEvent::FormUpdated { .. } => "ok".to_string(),
        AdminEvent::AssetAdded { asset } => {
            format!("added asset {} [{}]", asset.identifier, asset.id)
        }
        AdminEvent::AssetRemoved {
            asset_id,
            removed: true,
        } => format!("removed asset {asset_id}"),
        AdminEvent::AssetRemoved { asset_id, .. } => format!("no asset {asset_id}"),
        AdminEvent::AssetsListed { assets } => asset_table(assets),
        AdminEvent::Error(error) => error_text(error),
    }
}

fn direction_label(direction: SortDirection) -> &'static str {
    match direction {
        SortDirection::Asc => "ascending",
        SortDirection::Desc => "descending",
    }
}

/// Sortable headers get a chevron; it points up while that column is
/// sorted descending.
pub fn program_table(
    programs: &[Program],
    sort_field: Option<SortField>,
    sort_direction: SortDirection,
) -> String {
    let headers: Vec<String> = PROGRAM_COLUMNS
        .iter()
        .map(|(title, field)| match field {
            Some(field) if sort_field == Some(*field) && sort_direction == SortDirection::Desc => {
                format!("{title} ^")
            }
            Some(_) => format!("{title} v"),
            None => title.to_string(),
        })
        .chain(std::iter::once("Id".to_string()))
        .collect();

    let rows: Vec<Vec<String>> = programs
        .iter()
        .map(|program| {
            vec![
                program.name.clone(),
                program.start_date_label(),
                program.asset_identifier.clone(),
                program.description.clone(),
                program.bounty_eligibility.label().to_string(),
                program.id.to_string(),
            ]
        })
        .collect();

    format!("All programs\n{}", layout(&headers, &rows))
}

pub fn asset_table(assets: &[Asset]) -> String {
    if assets.is_empty() {
        return "no assets added".to_string();
    }
    let headers: Vec<String> = ["Type", "Asset Identifier", "Description", "Bounty", "Id"]
        .iter()
        .map(|h| h.to_string())
        .collect();
    let rows: Vec<Vec<String>> = assets
        .iter()
        .map(|asset| {
            vec![
                asset.asset_type.as_str().to_string(),
                asset.identifier.clone(),
                asset.description.clone(),
                asset.bounty_eligibility.label().to_string(),
                asset.id.to_string(),
            ]
        })
        .collect();
    layout(&headers, &rows)
}

fn program_details(program: &Program) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "id:                 {}", program.id);
    let _ = writeln!(out, "name:               {}", program.name);
    let _ = writeln!(out, "start date:         {}", program.start_date_label());
    let _ = writeln!(out, "asset identifier:   {}", program.asset_identifier);
    let _ = writeln!(out, "description:        {}", program.description);
    let _ = write!(
        out,
        "bounty eligibility: {}",
        program.bounty_eligibility.label()
    );
    out
}

pub fn subscription_text(summary: &SubscriptionSummary) -> String {
    let mut out = format!("{}  {}", summary.name, summary.ends_label());
    for (label, value) in summary.figures() {
        let _ = write!(out, " | {label}: {value}");
    }
    out
}

/// Month grid with Monday-first weeks. Days outside the month are wrapped
/// in parentheses and the selected day in brackets.
pub fn calendar_text(view: &CalendarView) -> String {
    let title = NaiveDate::from_ymd_opt(view.year, view.month, 1).map_or_else(
        || format!("{}-{:02}", view.year, view.month),
        |first| first.format("%B %Y").to_string(),
    );
    let weekdays: Vec<String> = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"]
        .iter()
        .map(|day| format!(" {day} "))
        .collect();

    let mut out = format!("{title}  [{}]\n{}", view.label, weekdays.join(" ").trim_end());
    for week in view.cells.chunks(7) {
        let cells: Vec<String> = week.iter().map(calendar_cell).collect();
        let _ = write!(out, "\n{}", cells.join(" ").trim_end());
    }
    out
}

fn calendar_cell(cell: &CalendarCell) -> String {
    let day = cell.date.day();
    match (cell.selected, cell.kind) {
        (true, _) => format!("[{day:>2}]"),
        (false, CellKind::Current) => format!(" {day:>2} "),
        (false, CellKind::Previous | CellKind::Next) => format!("({day:>2})"),
    }
}

fn layout(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, headers, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_row(&mut out, &rule, &widths);
    for row in rows {
        push_row(&mut out, row, &widths);
    }
    out.truncate(out.trim_end().len());
    out
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    let _ = writeln!(out, "{}", line.join("  ").trim_end());
}
