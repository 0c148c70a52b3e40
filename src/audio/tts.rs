//! Text-to-speech with an on-disk cache
//!
//! Each distinct text is synthesized once into `<cache dir>/<name>.wav` and
//! reused on later runs. Lookup is by exact, case-sensitive text.

use crate::error::{QuizError, Result};
use log::{debug, info};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Renders text to a WAV file.
pub trait Synthesizer {
    fn synthesize(&self, text: &str, out: &Path) -> Result<()>;
}

/// Synthesizer driving the espeak-ng command line
#[derive(Debug, Clone)]
pub struct EspeakSynthesizer {
    program: String,
    voice: String,
}

impl EspeakSynthesizer {
    pub fn new(program: impl Into<String>, voice: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            voice: voice.into(),
        }
    }
}

impl Synthesizer for EspeakSynthesizer {
    fn synthesize(&self, text: &str, out: &Path) -> Result<()> {
        debug!("Synthesizing {:?} with {} ({})", text, self.program, self.voice);

        let mut child = Command::new(&self.program)
            .arg("-v")
            .arg(&self.voice)
            .arg("-w")
            .arg(out)
            .arg("--stdin")
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| QuizError::Synthesis(format!("failed to start {}: {e}", self.program)))?;

        // Text goes through stdin so a leading '-' is never read as a flag.
        let sent = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };

        let status = child
            .wait()
            .map_err(|e| QuizError::Synthesis(format!("{} did not finish: {e}", self.program)))?;

        sent.map_err(|e| QuizError::Synthesis(format!("failed to send text: {e}")))?;
        if status.success() {
            Ok(())
        } else {
            Err(QuizError::Synthesis(format!(
                "{} exited with {status}",
                self.program
            )))
        }
    }
}

/// Memoizes synthesized audio as one file per unique text.
#[derive(Debug, Clone)]
pub struct TtsCache<S: Synthesizer> {
    dir: PathBuf,
    synth: S,
}

impl<S: Synthesizer> TtsCache<S> {
    pub fn new(dir: impl Into<PathBuf>, synth: S) -> Self {
        Self {
            dir: dir.into(),
            synth,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Where the clip for `text` lives, whether or not it exists yet.
    pub fn path_for(&self, text: &str) -> PathBuf {
        self.dir.join(format!("{}.wav", file_stem(text)))
    }

    /// Return a cached clip for `text`, synthesizing it on first use.
    pub fn synthesize_and_cache(&self, text: &str) -> Result<PathBuf> {
        if !self.dir.exists() {
            info!("Creating '{}'", self.dir.display());
            fs::create_dir_all(&self.dir).map_err(|e| {
                QuizError::Synthesis(format!("cannot create {}: {e}", self.dir.display()))
            })?;
        }

        let path = self.path_for(text);
        if path.exists() {
            debug!("Reusing {}", path.display());
            return Ok(path);
        }

        info!("Creating '{}'", path.display());
        if let Err(e) = self.synth.synthesize(text, &path) {
            // A partial file would otherwise be mistaken for a cache hit.
            let _ = fs::remove_file(&path);
            return Err(e);
        }
        if !path.exists() {
            return Err(QuizError::Synthesis(format!(
                "synthesizer produced no file for {text:?}"
            )));
        }
        Ok(path)
    }
}

/// File name for a text. `%` and path separators are percent-encoded so
/// distinct texts never share a file.
fn file_stem(text: &str) -> String {
    let mut stem = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '%' => stem.push_str("%25"),
            '/' => stem.push_str("%2F"),
            '\\' => stem.push_str("%5C"),
            '\0' => stem.push_str("%00"),
            _ => stem.push(c),
        }
    }
    if stem.is_empty() || stem == "." || stem == ".." {
        stem = stem.replace('.', "%2E");
        stem.insert_str(0, "%");
    }
    stem
}
