//! Clip playback through an external player process
//!
//! The clip is streamed to the player's stdin and the call returns only once
//! the player exits, so playback is blocking from the caller's side.

use crate::error::{QuizError, Result};
use log::debug;
use std::io::Write;
use std::process::{Command, Stdio};

/// Plays a complete audio clip and waits for it to finish.
pub trait Player {
    fn play_and_wait(&self, clip: &[u8]) -> Result<()>;
}

/// Player backed by a command such as `aplay -q -` or `paplay`
#[derive(Debug, Clone)]
pub struct CommandPlayer {
    program: String,
    args: Vec<String>,
}

impl CommandPlayer {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }
}

impl Player for CommandPlayer {
    fn play_and_wait(&self, clip: &[u8]) -> Result<()> {
        debug!("Playing {} bytes with {}", clip.len(), self.program);

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| QuizError::Playback(format!("failed to start {}: {e}", self.program)))?;

        // Dropping stdin closes the pipe so the player sees end of clip.
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(clip),
            None => Ok(()),
        };

        let status = child
            .wait()
            .map_err(|e| QuizError::Playback(format!("{} did not finish: {e}", self.program)))?;

        if !status.success() {
            return Err(QuizError::Playback(format!(
                "{} exited with {status}",
                self.program
            )));
        }
        written.map_err(|e| QuizError::Playback(format!("failed to stream clip: {e}")))
    }
}
