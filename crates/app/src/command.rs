use thiserror::Error;
use tracker_core::view::port::SearchForm;

/// One line of input from the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Search form submission
    Submit(SearchForm),
    /// Theme checkbox change
    Theme(bool),
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("expected `SYMBOL RANGE`, got {0:?}")]
    Usage(String),
    #[error("unknown command `{0}`")]
    Unknown(String),
    #[error("`:dark` takes `on` or `off`")]
    Theme,
}

/// # Summary
/// Parse one input line.
///
/// # Logic
/// 1. Blank lines yield `None`.
/// 2. Lines starting with `:` are control commands (`:dark on|off`, `:quit`).
/// 3. Anything else is `SYMBOL RANGE`. The range is passed through as typed
///    so the dashboard can reject it the way the form would.
pub fn parse_command(line: &str) -> Result<Option<Command>, CommandError> {
    let mut words = line.split_whitespace();
    let Some(first) = words.next() else {
        return Ok(None);
    };
    let rest: Vec<&str> = words.collect();

    if let Some(name) = first.strip_prefix(':') {
        return match (name, rest.as_slice()) {
            ("quit" | "q", []) => Ok(Some(Command::Quit)),
            ("dark", ["on"]) => Ok(Some(Command::Theme(true))),
            ("dark", ["off"]) => Ok(Some(Command::Theme(false))),
            ("dark", _) => Err(CommandError::Theme),
            _ => Err(CommandError::Unknown(first.to_string())),
        };
    }

    match rest.as_slice() {
        [range] => Ok(Some(Command::Submit(SearchForm::new(first, *range)))),
        _ => Err(CommandError::Usage(line.trim().to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_line() {
        assert_eq!(
            parse_command("  AAPL 1d ").unwrap(),
            Some(Command::Submit(SearchForm::new("AAPL", "1d")))
        );
    }

    #[test]
    fn test_range_is_not_validated_here() {
        assert_eq!(
            parse_command("AAPL 2d").unwrap(),
            Some(Command::Submit(SearchForm::new("AAPL", "2d")))
        );
    }

    #[test]
    fn test_control_commands() {
        assert_eq!(parse_command(":quit").unwrap(), Some(Command::Quit));
        assert_eq!(parse_command(":dark on").unwrap(), Some(Command::Theme(true)));
        assert_eq!(parse_command(":dark off").unwrap(), Some(Command::Theme(false)));
        assert_eq!(parse_command("   ").unwrap(), None);
    }

    #[test]
    fn test_bad_lines() {
        assert_eq!(
            parse_command("AAPL"),
            Err(CommandError::Usage("AAPL".to_string()))
        );
        assert_eq!(
            parse_command("AAPL 1d extra"),
            Err(CommandError::Usage("AAPL 1d extra".to_string()))
        );
        assert_eq!(parse_command(":dark maybe"), Err(CommandError::Theme));
        assert_eq!(
            parse_command(":reload"),
            Err(CommandError::Unknown(":reload".to_string()))
        );
    }
}
