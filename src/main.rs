use clap::{Parser, Subcommand};
use std::error::Error;
use std::time::{Duration, SystemTime};
use typemaster::{
    app_dirs::AppDirs,
    corpus::{Category, Difficulty, TestDuration, TextGenerator},
    results::{append_record, TestRecord},
    session::TypingSession,
};

/// typing-test metrics and practice-text generation
#[derive(Parser, Debug)]
#[clap(
    version,
    about,
    long_about = "Generate categorized practice texts of a target length and score finished typing tests with net-WPM, accuracy and error metrics."
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// generate a practice text for a test duration
    Generate {
        /// test duration in seconds
        #[clap(short, long, value_enum, default_value_t = TestDuration::Secs60)]
        duration: TestDuration,

        /// restrict sentences to one category
        #[clap(short, long, value_enum)]
        category: Option<Category>,

        /// restrict sentences to one difficulty
        #[clap(long, value_enum)]
        difficulty: Option<Difficulty>,
    },
    /// score a finished test from its target text, typed input and elapsed time
    Score {
        /// the text that was presented to the user
        #[clap(long)]
        text: String,

        /// the input the user actually typed
        #[clap(long)]
        input: String,

        /// elapsed test time in milliseconds
        #[clap(long)]
        elapsed_ms: u64,

        /// test duration bucket, recorded in the results log
        #[clap(short, long, value_enum, default_value_t = TestDuration::Secs60)]
        duration: TestDuration,

        /// category the text was generated from, recorded in the results log
        #[clap(short, long, value_enum)]
        category: Option<Category>,

        /// difficulty the text was generated from, recorded in the results log
        #[clap(long, value_enum)]
        difficulty: Option<Difficulty>,

        /// append the result to the results log
        #[clap(long)]
        log: bool,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Generate {
            duration,
            category,
            difficulty,
        } => {
            let mut generator = TextGenerator::new();
            println!("{}", generator.generate_test_text(duration, category, difficulty));
        }
        Command::Score {
            text,
            input,
            elapsed_ms,
            duration,
            category,
            difficulty,
            log,
        } => {
            let started = SystemTime::UNIX_EPOCH;
            let ended = started + Duration::from_millis(elapsed_ms);

            let mut session = TypingSession::new(text);
            session.start_at(started);
            session.submit_input_at(&input, ended);
            session.finalize_at(ended);

            println!("wpm: {}", session.wpm);
            println!("accuracy: {}", session.accuracy);
            println!("errors: {}", session.errors);

            if log {
                let record = TestRecord::from_session(&session, duration, category, difficulty);
                let path = AppDirs::results_log_path()
                    .ok_or("unable to resolve the results log path")?;
                append_record(&path, &record)?;
            }
        }
    }

    Ok(())
}
