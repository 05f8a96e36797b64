//! Console commands and how they drive an [`AdminSession`].

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use program_core::{AdminSession, CalendarView, SessionError, SubscriptionSummary};
use shared::{
    domain::{parse_start_date, AssetId, AssetType, BountyEligibility, ProgramId, SortField},
    error::{AdminError, ErrorCode, FormField},
    events::AdminEvent,
};
use thiserror::Error;

#[derive(Parser, Debug)]
#[command(no_binary_name = true, name = "admin", about = "Bounty program admin commands")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show the program table in its current sort order.
    List,
    /// Sort by a column; repeating the same column flips the direction.
    Sort { field: SortField },
    View {
        #[arg(allow_hyphen_values = true)]
        id: String,
    },
    Edit {
        #[arg(allow_hyphen_values = true)]
        id: String,
    },
    Delete {
        #[arg(allow_hyphen_values = true)]
        id: String,
    },
    /// Open the create-program form.
    New,
    Name {
        #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },
    /// Pick a start date in one step, as `YYYY-MM-DD` or `Nov02, 2023`.
    Date {
        #[arg(value_parser = parse_start_date)]
        date: NaiveDate,
    },
    /// Open the start-date picker, optionally on another month.
    Calendar {
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,
        #[arg(long)]
        year: Option<i32>,
    },
    /// Select a day of the month shown by the picker.
    Pick { day: u32 },
    /// Commit the picked day as the start date.
    DateOk,
    DateCancel,
    Website {
        #[arg(default_value = "", allow_hyphen_values = true)]
        url: String,
    },
    Twitter {
        #[arg(default_value = "", allow_hyphen_values = true)]
        handle: String,
    },
    AssetType { asset_type: AssetType },
    AssetId {
        #[arg(allow_hyphen_values = true)]
        identifier: String,
    },
    AssetDesc {
        #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        words: Vec<String>,
    },
    Eligibility { eligibility: BountyEligibility },
    AddAsset,
    RemoveAsset {
        #[arg(allow_hyphen_values = true)]
        id: String,
    },
    Assets,
    Submit,
    Cancel,
    Subscription,
    #[command(alias = "exit")]
    Quit,
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("unbalanced quotes")]
    UnbalancedQuotes,
    #[error(transparent)]
    Clap(#[from] clap::Error),
}

/// Splits `line` shell-style, so quoted values keep their spaces, and parses
/// it as one command.
pub fn parse_line(line: &str) -> Result<Command, ParseError> {
    let words = shlex::split(line).ok_or(ParseError::UnbalancedQuotes)?;
    Ok(CommandLine::try_parse_from(words)?.command)
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("program '{0}' not found")]
    ProgramNotFound(ProgramId),
    #[error("{year}-{month:02} has no day {day}")]
    DayOutOfRange { day: u32, month: u32, year: i32 },
    #[error("no date selected")]
    NoDateSelected,
    #[error(transparent)]
    Session(#[from] SessionError),
}

impl From<&CommandError> for AdminError {
    fn from(value: &CommandError) -> Self {
        match value {
            CommandError::ProgramNotFound(_) => {
                AdminError::new(ErrorCode::NotFound, value.to_string())
            }
            CommandError::DayOutOfRange { .. } => {
                AdminError::new(ErrorCode::InvalidCommand, value.to_string())
            }
            CommandError::NoDateSelected => AdminError::for_field(
                ErrorCode::MissingField,
                FormField::StartDate,
                value.to_string(),
            ),
            CommandError::Session(err) => err.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Event(AdminEvent),
    Subscription(SubscriptionSummary),
    Calendar(CalendarView),
    Quit,
}

pub fn execute(session: &mut AdminSession, command: Command) -> Result<Reply, CommandError> {
    let event = match command {
        Command::List => programs_listed(session),
        Command::Sort { field } => {
            let state = session.sort_by(field);
            AdminEvent::SortChanged {
                field,
                direction: state.direction(),
            }
        }
        Command::View { id } => {
            let program_id = ProgramId::from(id);
            let program = session
                .view_program(&program_id)
                .cloned()
                .ok_or(CommandError::ProgramNotFound(program_id))?;
            AdminEvent::ProgramDetails { program }
        }
        Command::Edit { id } => {
            let program_id = ProgramId::from(id);
            if !session.edit_program(&program_id) {
                return Err(CommandError::ProgramNotFound(program_id));
            }
            let program = session
                .view_program(&program_id)
                .cloned()
                .ok_or(CommandError::ProgramNotFound(program_id))?;
            AdminEvent::ProgramDetails { program }
        }
        Command::Delete { id } => {
            let program_id = ProgramId::from(id);
            let removed = session.delete_program(&program_id);
            AdminEvent::ProgramDeleted {
                program_id,
                removed,
            }
        }
        Command::New => {
            session.open_form();
            AdminEvent::FormOpened
        }
        Command::Name { words } => update_form(session, |form| form.set_name(words.join(" ")))?,
        Command::Date { date } => update_form(session, |form| {
            form.open_date_picker(today()).select(date);
            form.confirm_start_date();
        })?,
        Command::Calendar { month, year } => {
            let picker = session.form_mut()?.open_date_picker(today());
            if let Some(year) = year {
                picker.set_view_year(year);
            }
            if let Some(month) = month {
                picker.set_view_month(month);
            }
            return Ok(Reply::Calendar(picker.calendar_view()));
        }
        Command::Pick { day } => {
            let picker = session.form_mut()?.open_date_picker(today());
            if !picker.select_day(day) {
                return Err(CommandError::DayOutOfRange {
                    day,
                    month: picker.view_month(),
                    year: picker.view_year(),
                });
            }
            return Ok(Reply::Calendar(picker.calendar_view()));
        }
        Command::DateOk => {
            let form = session.form_mut()?;
            form.confirm_start_date().ok_or(CommandError::NoDateSelected)?;
            AdminEvent::FormUpdated {
                website_error: form.website_error().map(str::to_string),
            }
        }
        Command::DateCancel => update_form(session, |form| form.cancel_date_picker())?,
        Command::Website { url } => update_form(session, |form| form.set_website(url))?,
        Command::Twitter { handle } => update_form(session, |form| form.set_twitter(handle))?,
        Command::AssetType { asset_type } => update_form(session, |form| {
            form.draft_mut().asset_type = Some(asset_type);
        })?,
        Command::AssetId { identifier } => update_form(session, |form| {
            form.draft_mut().identifier = identifier;
        })?,
        Command::AssetDesc { words } => update_form(session, |form| {
            form.draft_mut().description = words.join(" ");
        })?,
        Command::Eligibility { eligibility } => update_form(session, |form| {
            form.draft_mut().bounty_eligibility = Some(eligibility);
        })?,
        Command::AddAsset => {
            let form = session.form_mut()?;
            let asset = form.add_asset().map_err(SessionError::from)?.clone();
            AdminEvent::AssetAdded { asset }
        }
        Command::RemoveAsset { id } => {
            let asset_id = AssetId::from(id);
            let removed = session.form_mut()?.remove_asset(&asset_id);
            AdminEvent::AssetRemoved { asset_id, removed }
        }
        Command::Assets => AdminEvent::AssetsListed {
            assets: session.form_mut()?.assets().to_vec(),
        },
        Command::Submit => AdminEvent::ProgramCreated {
            program: session.submit_form()?,
        },
        Command::Cancel => AdminEvent::FormCancelled {
            discarded_assets: session.cancel_form(),
        },
        Command::Subscription => return Ok(Reply::Subscription(session.subscription().clone())),
        Command::Quit => return Ok(Reply::Quit),
    };
    Ok(Reply::Event(event))
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn programs_listed(session: &AdminSession) -> AdminEvent {
    let state = session.programs().sort_state();
    AdminEvent::ProgramsListed {
        sort_field: state.field(),
        sort_direction: state.direction(),
        programs: session.list().into_iter().cloned().collect(),
    }
}

fn update_form(
    session: &mut AdminSession,
    apply: impl FnOnce(&mut program_core::ProgramForm),
) -> Result<AdminEvent, CommandError> {
    let form = session.form_mut()?;
    apply(form);
    Ok(AdminEvent::FormUpdated {
        website_error: form.website_error().map(str::to_string),
    })
}

#[cfg(test)]
#[path = "tests/commands_tests.rs"]
mod tests;
