//! Line-based terminal prompts.

use std::io::{self, BufRead, Write};

/// Reads answers from `input` and writes prompts and output to `output`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Prints `text` as-is.
    ///
    /// # Errors
    /// Returns error if the output cannot be written.
    pub fn say(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()
    }

    /// Asks for one line; the answer is trimmed.
    ///
    /// # Errors
    /// Returns `UnexpectedEof` when input ends before an answer.
    pub fn ask(&mut self, label: &str) -> io::Result<String> {
        write!(self.output, "{label}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed",
            ));
        }
        Ok(line.trim().to_string())
    }

    /// Like [`ask`](Self::ask), keeping `current` on an empty answer.
    ///
    /// # Errors
    /// Returns `UnexpectedEof` when input ends before an answer.
    pub fn ask_with_default(&mut self, label: &str, current: &str) -> io::Result<String> {
        let answer = if current.is_empty() {
            self.ask(label)?
        } else {
            self.ask(&format!("{label} [{current}]"))?
        };
        Ok(if answer.is_empty() {
            current.to_string()
        } else {
            answer
        })
    }

    /// Asks a yes/no question until the answer is one of them.
    ///
    /// # Errors
    /// Returns `UnexpectedEof` when input ends before an answer.
    pub fn confirm(&mut self, label: &str, current: bool) -> io::Result<bool> {
        let hint = if current { "Y/n" } else { "y/N" };
        loop {
            let answer = self.ask(&format!("{label} ({hint})"))?;
            match answer.to_ascii_lowercase().as_str() {
                "" => return Ok(current),
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.say("Please answer y or n.\n")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_ask_trims_answer() {
        let mut p = prompter("  jane@example.com \n");
        assert_eq!(p.ask("Email").unwrap(), "jane@example.com");
        assert_eq!(String::from_utf8(p.into_output()).unwrap(), "Email: ");
    }

    #[test]
    fn test_default_kept_on_empty_answer() {
        let mut p = prompter("\nHalifax\n");
        assert_eq!(p.ask_with_default("City", "Toronto").unwrap(), "Toronto");
        assert_eq!(p.ask_with_default("City", "Toronto").unwrap(), "Halifax");
    }

    #[test]
    fn test_confirm_repeats_until_valid() {
        let mut p = prompter("maybe\nyes\n");
        assert!(p.confirm("Agree", false).unwrap());
        let output = String::from_utf8(p.into_output()).unwrap();
        assert!(output.contains("Please answer y or n."));
    }

    #[test]
    fn test_eof_is_an_error() {
        let mut p = prompter("");
        let err = p.ask("Email").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
