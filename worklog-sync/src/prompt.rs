//! Terminal implementation of the confirmation prompt.

use std::io::{self, BufRead, Write};

use worklog_core::contract::ConfirmationProvider;

/// Asks on stdout and reads the answer from stdin.
/// `y` and `yes` (any case) confirm; anything else, including EOF, declines.
pub struct TerminalConfirmation;

pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

impl ConfirmationProvider for TerminalConfirmation {
    fn confirm(&self, prompt: &str) -> io::Result<bool> {
        let mut stdout = io::stdout().lock();
        write!(stdout, "{prompt} (y/N) ")?;
        stdout.flush()?;

        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        Ok(is_yes(&answer))
    }
}

#[cfg(test)]
mod tests {
    use super::is_yes;

    #[test]
    fn accepts_yes_variants_only() {
        assert!(is_yes("y\n"));
        assert!(is_yes("YES"));
        assert!(is_yes(" Yes \r\n"));
        assert!(!is_yes(""));
        assert!(!is_yes("n"));
        assert!(!is_yes("yep"));
    }
}
