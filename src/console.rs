//! Prompt collaborators for the turn loop.

use std::io::{self, BufRead, Write};

/// Question asked after every live turn.
pub const HIT_QUESTION: &str = "Do you hit ? (Enter / Others) ";

/// Asks the user a question and returns the answer line.
///
/// An empty answer means "continue"; anything else declines. Closures work
/// as prompts, which is how tests script answers:
///
/// ```
/// use twentyone::Prompt;
///
/// let mut always_hit = |_: &str| -> std::io::Result<String> { Ok(String::new()) };
/// assert_eq!(always_hit.ask("Hit?").unwrap(), "");
/// ```
pub trait Prompt {
    /// Asks `question` and returns the answer without its line terminator.
    ///
    /// # Errors
    ///
    /// Returns an error if the answer cannot be read. A closed input stream is
    /// reported as [`io::ErrorKind::UnexpectedEof`].
    fn ask(&mut self, question: &str) -> io::Result<String>;
}

impl<F: FnMut(&str) -> io::Result<String>> Prompt for F {
    fn ask(&mut self, question: &str) -> io::Result<String> {
        self(question)
    }
}

/// Prompt on the process terminal.
///
/// Stdin is locked for exactly one line per question and released before
/// `ask` returns.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdinPrompt;

impl Prompt for StdinPrompt {
    fn ask(&mut self, question: &str) -> io::Result<String> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(question.as_bytes())?;
        stdout.flush()?;
        drop(stdout);

        let mut input = String::new();
        if io::stdin().lock().read_line(&mut input)? == 0 {
            return Err(io::ErrorKind::UnexpectedEof.into());
        }

        Ok(strip_line_ending(&input).to_string())
    }
}

fn strip_line_ending(line: &str) -> &str {
    line.strip_suffix('\n')
        .map_or(line, |line| line.strip_suffix('\r').unwrap_or(line))
}
