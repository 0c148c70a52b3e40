use crate::error::{QuizError, Result};
use std::collections::VecDeque;
use std::io::BufRead;

/// Source of typed answers, one line at a time.
pub trait AnswerSource {
    /// Block until a full line is available. `Ok(None)` means end of input.
    fn next_line(&mut self) -> Result<Option<String>>;

    /// Like [`AnswerSource::next_line`], but end of input ends the session.
    fn require_line(&mut self) -> Result<String> {
        self.next_line()?.ok_or(QuizError::InputClosed)
    }
}

/// Production source over any buffered reader, typically a locked stdin.
pub struct LineSource<R: BufRead> {
    reader: R,
}

impl<R: BufRead> LineSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> AnswerSource for LineSource<R> {
    fn next_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }
}

/// Test source replaying a fixed script of lines
pub struct ScriptedSource {
    lines: VecDeque<String>,
}

impl ScriptedSource {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl AnswerSource for ScriptedSource {
    fn next_line(&mut self) -> Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}
