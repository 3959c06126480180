use std::collections::VecDeque;
use std::io::{self, Write};
use std::time::Duration;

/// Synchronous prompt-in, line-out interface used by every interactive flow
pub trait Console {
    /// Print one line of output
    fn show(&mut self, text: &str);

    /// Print `prompt` and read one trimmed line of input
    fn read_line(&mut self, prompt: &str) -> io::Result<String>;

    /// Read a secret without echo, exactly as typed apart from the line ending
    fn read_secret(&mut self, prompt: &str) -> io::Result<String>;

    /// Cosmetic delay between outputs
    fn pause(&mut self, duration: Duration);
}

/// Remove a single trailing `\n` or `\r\n`, leaving every other character intact
pub fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Read one line from stdin exactly as typed, minus the line ending
///
/// Returns `UnexpectedEof` once stdin is closed so callers never spin on empty input.
pub fn read_raw_line() -> io::Result<String> {
    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "standard input closed",
        ));
    }
    Ok(strip_line_ending(&input).to_string())
}

/// Helper function to read a trimmed line from stdin
pub fn read_line() -> io::Result<String> {
    read_raw_line().map(|line| line.trim().to_string())
}

/// Console backed by the process terminal
pub struct TerminalConsole {
    hide_secrets: bool,
}

impl TerminalConsole {
    pub fn new(hide_secrets: bool) -> Self {
        Self { hide_secrets }
    }
}

impl Console for TerminalConsole {
    fn show(&mut self, text: &str) {
        println!("{}", text);
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        print!("{}", prompt);
        io::stdout().flush()?;
        read_line()
    }

    fn read_secret(&mut self, prompt: &str) -> io::Result<String> {
        // Secrets are never trimmed, spaces are part of the password
        if self.hide_secrets {
            rpassword::prompt_password(prompt).map(|secret| strip_line_ending(&secret).to_string())
        } else {
            print!("{}", prompt);
            io::stdout().flush()?;
            read_raw_line()
        }
    }

    fn pause(&mut self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}

/// Console that replays canned input and records everything shown
///
/// Prompts are recorded in the transcript alongside output lines. Pauses are
/// recorded instead of slept.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    pub transcript: Vec<String>,
    pub pauses: Vec<Duration>,
}

impl ScriptedConsole {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
            pauses: Vec::new(),
        }
    }

    /// Number of scripted answers not yet consumed
    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }

    /// True if any transcript line contains `needle`
    pub fn saw(&self, needle: &str) -> bool {
        self.transcript.iter().any(|line| line.contains(needle))
    }

    fn next_input(&mut self, prompt: &str) -> io::Result<String> {
        self.transcript.push(prompt.to_string());
        self.inputs.pop_front().ok_or_else(|| {
            io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted")
        })
    }

    /// Count transcript lines containing `needle`
    pub fn count(&self, needle: &str) -> usize {
        self.transcript
            .iter()
            .filter(|line| line.contains(needle))
            .count()
    }
}

impl Console for ScriptedConsole {
    fn show(&mut self, text: &str) {
        self.transcript.push(text.to_string());
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<String> {
        self.next_input(prompt).map(|line| line.trim().to_string())
    }

    fn read_secret(&mut self, prompt: &str) -> io::Result<String> {
        self.next_input(prompt)
            .map(|line| strip_line_ending(&line).to_string())
    }

    fn pause(&mut self, duration: Duration) {
        self.pauses.push(duration);
    }
}

/// Ask a yes/no question until the answer is exactly `yes` or `no` (case-insensitive)
pub fn ask_yes_no<C: Console + ?Sized>(console: &mut C, question: &str) -> io::Result<bool> {
    let prompt = format!("{} (yes/no): ", question);
    loop {
        let response = console.read_line(&prompt)?.to_lowercase();
        match response.as_str() {
            "yes" => return Ok(true),
            "no" => return Ok(false),
            _ => console.show("Invalid response. Please answer with 'yes' or 'no'."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yes_no_accepts_both_answers() {
        let mut console = ScriptedConsole::new(["yes", "NO"]);
        assert!(ask_yes_no(&mut console, "Is it raining?").unwrap());
        assert!(!ask_yes_no(&mut console, "Is it snowing?").unwrap());
        assert_eq!(console.remaining(), 0);
    }

    #[test]
    fn test_yes_no_reprompts_on_invalid_input() {
        let mut console = ScriptedConsole::new(["maybe", "y", "  Yes  "]);
        assert!(ask_yes_no(&mut console, "Is it raining?").unwrap());

        assert_eq!(
            console.count("Invalid response. Please answer with 'yes' or 'no'."),
            2
        );
        assert_eq!(console.count("Is it raining? (yes/no): "), 3);
    }

    #[test]
    fn test_exhausted_script_reports_eof() {
        let mut console = ScriptedConsole::new(Vec::<String>::new());
        let err = ask_yes_no(&mut console, "Anything?").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn test_secrets_keep_surrounding_whitespace() {
        let mut console = ScriptedConsole::new(["  menu  ", " P@ss w0rd \r\n", "\tAbc1!   "]);
        assert_eq!(console.read_line("Choice: ").unwrap(), "menu");
        assert_eq!(console.read_secret("Password: ").unwrap(), " P@ss w0rd ");
        assert_eq!(console.read_secret("Password: ").unwrap(), "\tAbc1!   ");
    }

    #[test]
    fn test_strip_line_ending_only_touches_newline() {
        assert_eq!(strip_line_ending("abc \n"), "abc ");
        assert_eq!(strip_line_ending("abc\r\n"), "abc");
        assert_eq!(strip_line_ending(" abc "), " abc ");
        assert_eq!(strip_line_ending("abc\n\n"), "abc\n");
    }

    #[test]
    fn test_pauses_are_recorded_not_slept() {
        let mut console = ScriptedConsole::default();
        console.pause(Duration::from_secs(60));
        assert_eq!(console.pauses, vec![Duration::from_secs(60)]);
    }
}
