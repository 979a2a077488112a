//! Stdin commands of the terminal dashboard

use std::str::FromStr;
use thiserror::Error;

use crate::window::{Preset, WindowInputs};

/// Help text listing every command
pub const HELP: &str = "\
Commands:
  24h | 7d | 30d           show the last day / week / month
  reset                    back to the default window
  window <start> <end>     edit the window inputs (YYYY-MM-DDTHH:MM)
  apply                    load statistics for the window inputs
  help                     show this help
  quit                     stop polling and exit";

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Set the window from a preset and load it
    Preset(Preset),
    /// Replace the window inputs without loading
    Window(WindowInputs),
    Apply,
    Help,
    Quit,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command: {0}. Type 'help' for a list of commands")]
    Unknown(String),

    #[error("Usage: window <start> <end>")]
    WindowUsage,
}

impl Command {
    /// Parse one line; blank lines yield `None`
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let mut words = line.split_whitespace();
        let Some(head) = words.next() else {
            return Ok(None);
        };

        let command = match head.to_lowercase().as_str() {
            "window" => {
                let (Some(start), Some(end), None) = (words.next(), words.next(), words.next())
                else {
                    return Err(CommandError::WindowUsage);
                };
                Command::Window(WindowInputs::new(start, end))
            }
            "apply" => Command::Apply,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => Preset::from_str(other)
                .map(Command::Preset)
                .map_err(|_| CommandError::Unknown(head.to_string()))?,
        };

        Ok(Some(command))
    }
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Command::parse(s)?.ok_or_else(|| CommandError::Unknown(String::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        assert_eq!(
            Command::parse("7d").unwrap(),
            Some(Command::Preset(Preset::Last7Days))
        );
        assert_eq!(
            Command::parse("  RESET ").unwrap(),
            Some(Command::Preset(Preset::Reset))
        );
        assert_eq!(
            "30d".parse::<Command>().unwrap(),
            Command::Preset(Preset::Last30Days)
        );
    }

    #[test]
    fn test_window() {
        assert_eq!(
            Command::parse("window 2024-01-01T00:00 2024-01-02T00:00").unwrap(),
            Some(Command::Window(WindowInputs::new(
                "2024-01-01T00:00",
                "2024-01-02T00:00"
            )))
        );
        assert_eq!(
            Command::parse("window 2024-01-01T00:00"),
            Err(CommandError::WindowUsage)
        );
        assert_eq!(
            Command::parse("window a b c"),
            Err(CommandError::WindowUsage)
        );
    }

    #[test]
    fn test_blank_and_unknown() {
        assert_eq!(Command::parse("   ").unwrap(), None);
        assert_eq!(Command::parse("quit").unwrap(), Some(Command::Quit));
        assert_eq!(
            Command::parse("refresh"),
            Err(CommandError::Unknown("refresh".to_string()))
        );
    }
}
