use clap::{Parser, ValueEnum};
use serde::Serialize;
use solace::{grounded_prompt, fallback_prompt, load_index, match_summary, Match, MatchConfig, Matcher};
use std::io::{self, BufRead};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Look up pre-written counseling answers similar to a question
#[derive(Parser, Debug)]
#[command(name = "solace")]
#[command(about = "Find the closest pre-written answers to a question", long_about = None)]
struct Args {
    /// Question to match; questions are read line by line from stdin when omitted
    query: Option<String>,

    /// Path to the JSON answer database
    #[arg(short, long, default_value = "data/sample_answers.json")]
    corpus: PathBuf,

    /// Maximum number of matches per question
    #[arg(short = 'k', long, default_value_t = solace::DEFAULT_TOP_K)]
    top_k: usize,

    /// Minimum cosine similarity of a match
    #[arg(short, long, default_value_t = solace::DEFAULT_SIMILARITY_THRESHOLD)]
    threshold: f64,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Also print the prompt that would be sent to the answer generator
    #[arg(long)]
    prompt: bool,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Serialize)]
struct Report<'a> {
    query: &'a str,
    matches: &'a [Match<'a>],
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting solace v{}", env!("CARGO_PKG_VERSION"));
    info!("Corpus: {:?}", args.corpus);

    let index = load_index(&args.corpus)?;
    let config = MatchConfig {
        top_k: args.top_k,
        similarity_threshold: args.threshold,
    };
    let matcher = Matcher::with_config(&index, config)?;

    match &args.query {
        Some(query) => answer(&matcher, query, &args)?,
        None => {
            for line in io::stdin().lock().lines() {
                let line = line?;
                let query = line.trim();
                if query.is_empty() {
                    continue;
                }
                if is_exit_command(query) {
                    info!("Exit requested");
                    break;
                }
                answer(&matcher, query, &args)?;
            }
        }
    }

    Ok(())
}

/// Words that end the interactive loop, compared case-insensitively.
const EXIT_COMMANDS: &[&str] = &["quit", "exit", "종료", "q"];

fn is_exit_command(line: &str) -> bool {
    let line = line.trim();
    EXIT_COMMANDS
        .iter()
        .any(|word| line.eq_ignore_ascii_case(word))
}

fn answer(matcher: &Matcher<'_>, query: &str, args: &Args) -> anyhow::Result<()> {
    let matches = matcher.search(query);

    match args.format {
        OutputFormat::Text => {
            println!("Question: {query}");
            println!("{}", match_summary(&matches));
            if let Some(best) = matches.first() {
                let preview: String = best.document.content.chars().take(100).collect();
                println!("\nBest match preview:\n{preview}...");
            }
        }
        OutputFormat::Json => {
            let report = Report {
                query,
                matches: &matches,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    if args.prompt {
        let prompt = if matches.is_empty() {
            fallback_prompt(query)
        } else {
            grounded_prompt(query, &matches)
        };
        println!("\n[system]\n{}\n\n[user]\n{}", prompt.system, prompt.user);
    }
    println!();
    Ok(())
}
