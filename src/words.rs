use crate::assets;
use crate::error::{QuizError, Result};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Path reported for the word list compiled into the binary.
pub const SAMPLE_PATH: &str = "words/english_to_korean.csv";

/// One quiz item.
///
/// Source lines are laid out as `answer<delimiter>prompt`: the first field is
/// what the user must type, the second is what is shown.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordPair {
    pub prompt: String,
    pub answer: String,
}

impl WordPair {
    pub fn new(prompt: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            answer: answer.into(),
        }
    }
}

impl fmt::Display for WordPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.prompt, self.answer)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Comma,
    VerticalBar,
}

impl Delimiter {
    pub fn as_char(self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::VerticalBar => '|',
        }
    }
}

/// Where a word list comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    File(PathBuf),
    Sample,
}

impl WordSource {
    /// Name shown in progress messages and the summary.
    pub fn label(&self) -> String {
        match self {
            WordSource::File(path) => path.display().to_string(),
            WordSource::Sample => SAMPLE_PATH.to_string(),
        }
    }

    pub fn load(&self, delimiter: Delimiter) -> Result<Vec<WordPair>> {
        match self {
            WordSource::File(path) => load_words(path, delimiter),
            WordSource::Sample => load_sample(delimiter),
        }
    }
}

/// Split a single record into a pair. Only the first delimiter splits, so the
/// prompt may itself contain delimiter characters.
pub fn parse_line(line: &str, delimiter: Delimiter) -> Option<WordPair> {
    line.split_once(delimiter.as_char())
        .map(|(answer, prompt)| WordPair::new(prompt, answer))
}

/// Parse a whole word list. `origin` is only used for error messages.
pub fn parse_words(text: &str, delimiter: Delimiter, origin: &Path) -> Result<Vec<WordPair>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let pairs = text
        .lines()
        .enumerate()
        .map(|(idx, line)| {
            parse_line(line, delimiter).ok_or_else(|| QuizError::DataFormat {
                origin: origin.to_path_buf(),
                line: idx + 1,
                delimiter: delimiter.as_char(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    if pairs.is_empty() {
        return Err(QuizError::EmptyWordList {
            path: origin.to_path_buf(),
        });
    }

    Ok(pairs)
}

pub fn load_words(path: &Path, delimiter: Delimiter) -> Result<Vec<WordPair>> {
    let text = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => QuizError::NotFound {
            path: path.to_path_buf(),
        },
        _ => QuizError::Read {
            path: path.to_path_buf(),
            source,
        },
    })?;

    parse_words(&text, delimiter, path)
}

pub fn load_sample(delimiter: Delimiter) -> Result<Vec<WordPair>> {
    let origin = Path::new(SAMPLE_PATH);
    let text = assets::text(SAMPLE_PATH).ok_or_else(|| QuizError::NotFound {
        path: origin.to_path_buf(),
    })?;

    parse_words(text, delimiter, origin)
}
