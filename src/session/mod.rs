//! Presentation state for the tracker.
//!
//! A [`Session`] owns the form selections and the active screen. Every user
//! interaction is an [`Action`] passed to [`Session::update`], which runs to
//! completion before the next one is handled.

pub mod commands;
pub mod console;

use thiserror::Error;
use tracing::{debug, info};

use crate::calculate;
use crate::models::{Outcome, ResultSummary, Roster};
use crate::storage::{ResultLog, StorageError};

pub const SELECT_PLACEHOLDER: &str = "Select a Fighter";
pub const MSG_MISSING_SELECTION: &str = "Please select win/loss and a fighter.";
pub const MSG_SAVED: &str = "Result saved successfully!";
pub const MSG_CLEARED: &str = "Results cleared successfully!";

/// Errors that end a session. Validation problems are not errors; they are
/// reported as [`Notice::Error`].
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Console IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A one-shot command was refused with a validation notice
    #[error("{0}")]
    Rejected(String),
}

/// The screen currently shown. Exactly one is active at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Main,
    Results(ResultSummary),
}

/// Selections on the main screen. `None` means nothing picked yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Form {
    pub outcome: Option<Outcome>,
    pub opponent: Option<String>,
}

impl Form {
    fn reset(&mut self) {
        *self = Form::default();
    }
}

/// A user interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SelectOutcome(Outcome),
    /// Pick an opponent by roster name or 1-based roster number
    SelectOpponent(String),
    Submit,
    ViewResults,
    ClearResults,
    Return,
}

/// A message shown to the user after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Error(String),
    Info(String),
}

impl Notice {
    fn error(msg: impl Into<String>) -> Option<Self> {
        Some(Notice::Error(msg.into()))
    }

    fn info(msg: impl Into<String>) -> Option<Self> {
        Some(Notice::Info(msg.into()))
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Notice::Error(msg) => write!(f, "Error: {}", msg),
            Notice::Info(msg) => write!(f, "{}", msg),
        }
    }
}

pub struct Session {
    log: ResultLog,
    roster: Roster,
    form: Form,
    screen: Screen,
}

impl Session {
    pub fn new(log: ResultLog, roster: Roster) -> Self {
        Self {
            log,
            roster,
            form: Form::default(),
            screen: Screen::Main,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn log(&self) -> &ResultLog {
        &self.log
    }

    /// Apply one action. Storage failures are returned as errors; everything
    /// else the user should see comes back as a notice.
    pub fn update(&mut self, action: Action) -> Result<Option<Notice>, SessionError> {
        debug!("Session action: {:?}", action);

        let on_main = matches!(self.screen, Screen::Main);

        match (on_main, action) {
            (true, Action::SelectOutcome(outcome)) => {
                self.form.outcome = Some(outcome);
                Ok(None)
            }
            (true, Action::SelectOpponent(input)) => match self.roster.resolve(&input) {
                Some(name) => {
                    self.form.opponent = Some(name.to_string());
                    Ok(None)
                }
                None => Ok(Notice::error(format!(
                    "Unknown fighter: {}. Choose one of: {}",
                    input.trim(),
                    self.roster.fighters.join(", ")
                ))),
            },
            (true, Action::Submit) => self.submit(),
            (true, Action::ViewResults) => {
                let records = self.log.read_all()?;
                let summary = calculate::summarize(&records);
                info!("Showing results for {} records", records.len());
                self.screen = Screen::Results(summary);
                Ok(None)
            }
            (false, Action::ClearResults) => {
                self.log.clear()?;
                self.screen = Screen::Results(ResultSummary::empty());
                Ok(Notice::info(MSG_CLEARED))
            }
            (false, Action::Return) => {
                self.screen = Screen::Main;
                Ok(None)
            }
            (true, action) => Ok(Notice::error(format!(
                "{} is only available on the results screen",
                action_name(&action)
            ))),
            (false, action) => Ok(Notice::error(format!(
                "{} is only available on the main screen",
                action_name(&action)
            ))),
        }
    }

    fn submit(&mut self) -> Result<Option<Notice>, SessionError> {
        let (Some(outcome), Some(opponent)) = (self.form.outcome, self.form.opponent.as_deref())
        else {
            return Ok(Notice::error(MSG_MISSING_SELECTION));
        };

        self.log.append(outcome, opponent)?;
        info!("Recorded {} against {}", outcome, opponent);
        self.form.reset();
        Ok(Notice::info(MSG_SAVED))
    }

    /// Truncate the log without reading it first, from any screen.
    ///
    /// A results screen that is showing falls back to the empty summary.
    pub fn clear_log(&mut self) -> Result<Notice, SessionError> {
        self.log.clear()?;
        if let Screen::Results(_) = self.screen {
            self.screen = Screen::Results(ResultSummary::empty());
        }
        Ok(Notice::Info(MSG_CLEARED.to_string()))
    }

    /// Text for the active screen.
    pub fn render(&self) -> String {
        match &self.screen {
            Screen::Main => render_main(&self.form, &self.roster),
            Screen::Results(summary) => render_results(summary),
        }
    }
}

fn action_name(action: &Action) -> &'static str {
    match action {
        Action::SelectOutcome(_) => "Selecting an outcome",
        Action::SelectOpponent(_) => "Selecting a fighter",
        Action::Submit => "Submit",
        Action::ViewResults => "View Results",
        Action::ClearResults => "Clear Results",
        Action::Return => "Return",
    }
}

fn render_main(form: &Form, roster: &Roster) -> String {
    let mark = |o: Outcome| if form.outcome == Some(o) { "(x)" } else { "( )" };
    let fighters = roster
        .fighters
        .iter()
        .enumerate()
        .map(|(i, f)| format!("{}. {}", i + 1, f))
        .collect::<Vec<_>>()
        .join("  ");

    format!(
        "Did You Win or Lose?\n  {} Win  {} Loss\n\
         Which Fighter Did You Fight Against?\n  [{}]\n  {}\n",
        mark(Outcome::Win),
        mark(Outcome::Loss),
        form.opponent.as_deref().unwrap_or(SELECT_PLACEHOLDER),
        fighters
    )
}

fn render_results(summary: &ResultSummary) -> String {
    format!(
        "Most Losses Against: {}\nMost Wins Against: {}\n",
        summary.most_losses, summary.most_wins
    )
}
