//! Line-oriented terminal front end for a [`Session`].

use std::io::{BufRead, Write};

use super::{Action, Notice, Session, SessionError};
use crate::models::Outcome;

pub const HELP: &str = "\
Commands:
  win | loss              pick the match outcome
  fighter <name|number>   pick the opponent
  submit                  save the selected result
  results                 show the results screen
  clear                   clear all results (results screen)
  return                  back to the main screen (results screen)
  help                    show this help
  quit                    leave
";

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Act(Action),
    Help,
    Quit,
    Unknown(String),
}

/// Parse one line of user input.
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "fighter" | "f" | "vs" if !rest.is_empty() => {
            Command::Act(Action::SelectOpponent(rest.to_string()))
        }
        "submit" | "s" => Command::Act(Action::Submit),
        "results" | "r" | "view" => Command::Act(Action::ViewResults),
        "clear" => Command::Act(Action::ClearResults),
        "return" | "back" => Command::Act(Action::Return),
        "help" | "h" | "?" => Command::Help,
        "quit" | "q" | "exit" => Command::Quit,
        _ => match line.parse::<Outcome>() {
            Ok(outcome) => Command::Act(Action::SelectOutcome(outcome)),
            Err(_) => Command::Unknown(line.to_string()),
        },
    };

    Some(command)
}

/// Drive `session` from `input` until EOF or `quit`.
pub fn run<R, W>(session: &mut Session, input: R, mut output: W) -> Result<(), SessionError>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{}", session.render())?;
    writeln!(output, "Type 'help' for commands.")?;

    for line in input.lines() {
        let line = line?;
        let Some(command) = parse_command(&line) else {
            continue;
        };

        match command {
            Command::Act(action) => {
                // A rejected submit keeps the screen as it was.
                let redraw = !matches!(action, Action::Submit);
                let notice = session.update(action)?;
                if let Some(notice) = &notice {
                    writeln!(output, "{}", notice)?;
                }
                if redraw || matches!(notice, Some(Notice::Info(_))) {
                    write!(output, "{}", session.render())?;
                }
            }
            Command::Help => write!(output, "{}", HELP)?,
            Command::Quit => break,
            Command::Unknown(text) => {
                writeln!(output, "Unknown command: {}. Type 'help' for commands.", text)?
            }
        }
        output.flush()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MatchRecord, Roster};
    use crate::storage::ResultLog;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_parse_command() {
        assert_eq!(
            parse_command("win"),
            Some(Command::Act(Action::SelectOutcome(Outcome::Win)))
        );
        assert_eq!(
            parse_command(" Loss "),
            Some(Command::Act(Action::SelectOutcome(Outcome::Loss)))
        );
        assert_eq!(
            parse_command("fighter Chun-Li"),
            Some(Command::Act(Action::SelectOpponent("Chun-Li".to_string())))
        );
        assert_eq!(
            parse_command("f 2"),
            Some(Command::Act(Action::SelectOpponent("2".to_string())))
        );
        assert_eq!(parse_command("submit"), Some(Command::Act(Action::Submit)));
        assert_eq!(
            parse_command("RESULTS"),
            Some(Command::Act(Action::ViewResults))
        );
        assert_eq!(parse_command("quit"), Some(Command::Quit));
        assert_eq!(parse_command("   "), None);
        assert_eq!(
            parse_command("fighter"),
            Some(Command::Unknown("fighter".to_string()))
        );
        assert_eq!(
            parse_command("dance"),
            Some(Command::Unknown("dance".to_string()))
        );
    }

    #[test]
    fn test_run_full_session() {
        let temp_dir = TempDir::new().unwrap();
        let log = ResultLog::new(temp_dir.path().join("results.csv"));
        let mut session = Session::new(log.clone(), Roster::default());

        let script = "\
submit
win
fighter ryu
submit
loss
f 4
submit
results
return
quit
win
";
        let mut out = Vec::new();
        run(&mut session, script.as_bytes(), &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.contains("Error: Please select win/loss and a fighter."));
        assert_eq!(out.matches("Result saved successfully!").count(), 2);
        assert!(out.contains("Most Losses Against: Guile"));
        assert!(out.contains("Most Wins Against: Ryu"));
        assert_eq!(
            log.read_all().unwrap(),
            vec![MatchRecord::win("Ryu"), MatchRecord::loss("Guile")]
        );
        // Input after quit is ignored.
        assert_eq!(session.form().outcome, None);
    }

    #[test]
    fn test_run_clear_from_results() {
        let temp_dir = TempDir::new().unwrap();
        let log = ResultLog::new(temp_dir.path().join("results.csv"));
        log.append(Outcome::Win, "Ken").unwrap();
        let mut session = Session::new(log.clone(), Roster::default());

        let mut out = Vec::new();
        run(&mut session, "results\nclear\n".as_bytes(), &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.contains("Most Wins Against: Ken"));
        assert!(out.contains("Results cleared successfully!"));
        assert!(out.contains("Most Wins Against: No Current Data"));
        assert!(log.read_all().unwrap().is_empty());
    }
}
