use clap::Parser;
use log::{debug, warn};
use rand::Rng;
use std::{
    io,
    path::{Path, PathBuf},
    process,
};
use vocab_quiz::{
    audio::{create_audio, AudioFeedback},
    config::{Config, ConfigStore, FileConfigStore},
    input::LineSource,
    quiz::QuizRunner,
    report::{SessionOutcome, Summary},
    session::{Session, SessionConfig},
    words::{Delimiter, WordSource},
    Result,
};

/// console vocabulary quiz with spoken pronunciation and wrong-answer reports
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Quizzes you on word pairs from delimited text files. Each line holds `answer,prompt`; the prompt is shown and the answer must be typed exactly. Missed words are written to wrong-answers-report.txt. Put `--` before word lists whose names begin with '-', e.g. `vocab-quiz -- -words.csv`."
)]
pub struct Cli {
    /// split lines on '|' instead of ','
    #[clap(long)]
    vertical_bar: bool,

    /// ask words in file order instead of shuffling them
    #[clap(long)]
    disable_shuffle: bool,

    /// speak the answer before reading input, not only after confirming
    #[clap(long)]
    pronunciation_hint: bool,

    /// disable speech synthesis and feedback sounds
    #[clap(long)]
    no_audio: bool,

    /// hide the first-letter hint and running score bounds
    #[clap(long)]
    no_hint: bool,

    /// settings file to use instead of the per-user config.json
    #[clap(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// log debug diagnostics to stderr
    #[clap(short, long)]
    debug: bool,

    /// word lists to quiz, one session each (default: bundled sample)
    #[clap(value_name = "PATH")]
    paths: Vec<PathBuf>,
}

impl Cli {
    fn delimiter(&self) -> Delimiter {
        if self.vertical_bar {
            Delimiter::VerticalBar
        } else {
            Delimiter::Comma
        }
    }

    fn sources(&self) -> Vec<WordSource> {
        if self.paths.is_empty() {
            return vec![WordSource::Sample];
        }
        self.paths.iter().cloned().map(WordSource::File).collect()
    }

    fn load_config(&self) -> Config {
        let store = self
            .config
            .as_ref()
            .map(FileConfigStore::with_path)
            .unwrap_or_default();
        debug!("Loading config from {}", store.path().display());

        let mut config = store.load();
        if !store.path().exists() {
            if let Err(e) = store.save(&config) {
                warn!("Could not write default config {}: {}", store.path().display(), e);
            }
        }
        if self.no_audio {
            config.audio = false;
        }
        if self.no_hint {
            config.show_hints = false;
        }
        config
    }

    fn session_config(&self, config: &Config) -> SessionConfig {
        SessionConfig {
            shuffle: !self.disable_shuffle,
            pronunciation_hint: self.pronunciation_hint,
            show_hints: config.show_hints,
        }
    }
}

fn init_logging(debug_mode: bool) {
    let default_filter = if debug_mode { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    match run(&cli) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}

/// Run every session and print the summary. Returns whether all sessions
/// were scored.
fn run(cli: &Cli) -> Result<bool> {
    let config = cli.load_config();
    let options = cli.session_config(&config);
    let delimiter = cli.delimiter();
    let mut audio = create_audio(&config);
    let mut rng = rand::thread_rng();

    let mut summary = Summary::new();
    for source in cli.sources() {
        let label = source.label();
        match run_session(
            &source,
            &label,
            delimiter,
            options,
            &config,
            audio.as_mut(),
            &mut rng,
        ) {
            Ok(score) => summary.push(label, SessionOutcome::Scored(score)),
            Err(e) if e.is_session_local() => {
                eprintln!("Error: {e}");
                summary.push(label, SessionOutcome::Failed(e.to_string()));
            }
            Err(e) => return Err(e),
        }
    }

    println!("{}", summary.render());
    Ok(summary.all_scored())
}

fn run_session<G: Rng>(
    source: &WordSource,
    label: &str,
    delimiter: Delimiter,
    options: SessionConfig,
    config: &Config,
    audio: &mut dyn AudioFeedback,
    rng: &mut G,
) -> Result<f64> {
    let pairs = source.load(delimiter)?;
    let session = Session::new(pairs, Path::new(label))?;

    // stdin is held only for the lifetime of this session.
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut runner = QuizRunner::new(
        LineSource::new(stdin.lock()),
        stdout.lock(),
        audio,
        options,
        config,
    );
    let finished = runner.run(label, session, rng)?;
    Ok(finished.score())
}
