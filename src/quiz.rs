//! The quiz loop
//!
//! Each item goes through: present, optional pre-answer pronunciation, read
//! and confirm an answer, pronunciation, score with a feedback sound. After
//! the last item the final score, a grade sound and the wrong-answer report
//! follow.

use crate::audio::{AudioFeedback, Pronunciation, Sound};
use crate::config::Config;
use crate::error::Result;
use crate::input::AnswerSource;
use crate::report::{render_wrong_answers, write_report};
use crate::session::{Session, SessionConfig};
use crate::words::WordPair;
use log::{info, warn};
use rand::Rng;
use std::io::Write;

/// Drives one session over an input source, a console writer and audio.
pub struct QuizRunner<'a, R, W, A>
where
    R: AnswerSource,
    W: Write,
    A: AudioFeedback + ?Sized,
{
    input: R,
    out: W,
    audio: &'a mut A,
    options: SessionConfig,
    config: &'a Config,
}

impl<'a, R, W, A> QuizRunner<'a, R, W, A>
where
    R: AnswerSource,
    W: Write,
    A: AudioFeedback + ?Sized,
{
    pub fn new(
        input: R,
        out: W,
        audio: &'a mut A,
        options: SessionConfig,
        config: &'a Config,
    ) -> Self {
        Self {
            input,
            out,
            audio,
            options,
            config,
        }
    }

    /// Quiz every item of `session` and return it with all answers recorded.
    pub fn run<G: Rng + ?Sized>(
        &mut self,
        label: &str,
        mut session: Session,
        rng: &mut G,
    ) -> Result<Session> {
        writeln!(self.out, "Start testing with {label}.")?;

        if self.options.shuffle {
            session.shuffle(rng);
        }

        let items = session.items().to_vec();
        for (idx, pair) in items.iter().enumerate() {
            let correct = self.ask(idx, &session, pair)?;
            session.record(pair, correct);
        }

        self.finish(&session)?;
        Ok(session)
    }

    fn ask(&mut self, idx: usize, session: &Session, pair: &WordPair) -> Result<bool> {
        self.present(idx, session, pair)?;

        let pronunciation = self.prepare_pronunciation(&pair.answer);
        if self.options.pronunciation_hint {
            self.pronounce(pronunciation.as_ref());
        }

        let attempt = self.read_confirmed_answer()?;

        self.pronounce(pronunciation.as_ref());

        let correct = attempt == pair.answer;
        if correct {
            writeln!(self.out, "Correct!")?;
        } else {
            writeln!(self.out, "Wrong! The answer was '{}'.", pair.answer)?;
        }
        self.play(Sound::for_answer(correct));

        Ok(correct)
    }

    fn present(&mut self, idx: usize, session: &Session, pair: &WordPair) -> Result<()> {
        let position = idx + 1;
        let total = session.total();

        if self.options.show_hints {
            let hint = pair
                .answer
                .chars()
                .next()
                .map(String::from)
                .unwrap_or_default();
            writeln!(
                self.out,
                "{} (hint: {}) ({}/{}) (Max score: {:.2}, score: {:.2})",
                pair.prompt,
                hint,
                position,
                total,
                session.max_score(),
                session.current_score()
            )?;
        } else {
            writeln!(self.out, "{} ({}/{})", pair.prompt, position, total)?;
        }
        Ok(())
    }

    /// Read lines until one is confirmed. Rejected attempts are not scored.
    fn read_confirmed_answer(&mut self) -> Result<String> {
        loop {
            let line = self.input.require_line()?;
            let attempt = line.trim();

            write!(self.out, "Is your answer '{attempt}'? (y/n) ")?;
            self.out.flush()?;

            let reply = self.input.require_line()?;
            if self.config.is_affirmative(&reply) {
                return Ok(attempt.to_string());
            }
        }
    }

    fn finish(&mut self, session: &Session) -> Result<()> {
        let score = session.score();
        let grade = session.grade();
        writeln!(
            self.out,
            "Your score is {:.2} ({} / {})!",
            score,
            session.correct_count(),
            session.total()
        )?;
        info!("Session graded {grade} ({score:.2})");
        self.play(Sound::for_grade(grade));

        let wrong = session.wrong_answers();
        if !wrong.is_empty() {
            let report = render_wrong_answers(wrong);
            writeln!(self.out, "{report}")?;
            write_report(&self.config.report_path, &report)?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn prepare_pronunciation(&mut self, text: &str) -> Option<Pronunciation> {
        match self.audio.prepare_pronunciation(text) {
            Ok(clip) => Some(clip),
            Err(e) => {
                warn!("Skipping pronunciation of {text:?}: {e}");
                None
            }
        }
    }

    fn pronounce(&mut self, clip: Option<&Pronunciation>) {
        let Some(clip) = clip else {
            return;
        };
        if let Err(e) = self.audio.play_pronunciation(clip) {
            warn!("Skipping pronunciation of {:?}: {e}", clip.text());
        }
    }

    fn play(&mut self, sound: Sound) {
        if let Err(e) = self.audio.play_sound(sound) {
            warn!("Skipping {sound} sound: {e}");
        }
    }
}
