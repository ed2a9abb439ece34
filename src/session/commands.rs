//! One-shot commands run against a [`Session`] from the command line.

use std::io::Write;

use super::{Action, Notice, Screen, Session, SessionError};
use crate::models::Outcome;

/// A single non-interactive request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Record { outcome: Outcome, opponent: String },
    Results { json: bool },
    Clear,
    Roster,
}

fn accept(notice: Option<Notice>) -> Result<Option<Notice>, SessionError> {
    match notice {
        Some(Notice::Error(msg)) => Err(SessionError::Rejected(msg)),
        other => Ok(other),
    }
}

/// Run `request`, writing its output to `out`.
///
/// Validation notices become [`SessionError::Rejected`].
pub fn execute<W: Write>(
    session: &mut Session,
    request: Request,
    mut out: W,
) -> Result<(), SessionError> {
    match request {
        Request::Record { outcome, opponent } => {
            session.update(Action::SelectOutcome(outcome))?;
            accept(session.update(Action::SelectOpponent(opponent))?)?;
            if let Some(notice) = accept(session.update(Action::Submit)?)? {
                writeln!(out, "{}", notice)?;
            }
        }
        Request::Results { json } => {
            session.update(Action::ViewResults)?;
            match session.screen() {
                Screen::Results(summary) if json => {
                    let text = serde_json::to_string_pretty(summary)
                        .map_err(|e| SessionError::Io(e.into()))?;
                    writeln!(out, "{}", text)?;
                }
                _ => write!(out, "{}", session.render())?,
            }
        }
        Request::Clear => {
            let notice = session.clear_log()?;
            writeln!(out, "{}", notice)?;
        }
        Request::Roster => {
            for (i, fighter) in session.roster().fighters.iter().enumerate() {
                writeln!(out, "{}. {}", i + 1, fighter)?;
            }
        }
    }

    Ok(())
}
