//! Interactive question answering over a reference document.
//!
//! Loads the document named on the command line, builds the retrieval
//! engine once and then answers queries in a readline loop. A missing
//! document is an advisory, not a crash; the session still runs and
//! every query gets the fallback answer.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing_subscriber::EnvFilter;

use concord_core::analyzer::{Lexicon, Normalizer};
use concord_core::source::{load_or_empty, FileSource};
use concord_core::Concord;
use concord_types::RetrieveConfig;

#[derive(Parser)]
#[command(name = "concord", version, about = "Ask questions of a reference document")]
struct Args {
    /// Path to the reference document
    document: PathBuf,

    /// Override the answer given when nothing in the document matches
    #[arg(long)]
    fallback: Option<String>,

    /// Show a few opening sentences of the document as query hints
    #[arg(long)]
    suggestions: bool,

    /// Print the match score and sentence position with each answer
    #[arg(long)]
    scores: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    // A corrupt bundled lexicon means the binary itself is broken;
    // refuse to start.
    let lexicon = Lexicon::load().context("bundled linguistic assets failed to parse")?;
    let normalizer = Normalizer::new(lexicon);

    let source = FileSource::new(&args.document);
    let (document, load_err) = load_or_empty(&source);
    if let Some(err) = load_err {
        eprintln!(
            "{} {err}; every question will get the fallback answer",
            "warning:".yellow().bold()
        );
    }

    let config = match args.fallback {
        Some(message) => RetrieveConfig::with_fallback(message),
        None => RetrieveConfig::default(),
    };
    let mut engine = Concord::from_document_with_config(&document, normalizer, config);

    println!("{} {}", "loaded:".green().bold(), engine.stats());
    if args.suggestions {
        print_suggestions(&engine);
    }
    println!("{}", "Ask a question, or type `exit` to leave.".dimmed());

    let mut editor = DefaultEditor::new().context("failed to start line editor")?;
    let prompt = "ask> ".cyan().bold().to_string();

    loop {
        match editor.readline(&prompt) {
            Ok(line) => match classify(&line) {
                Input::Empty => println!("{}", "Please enter a question.".dimmed()),
                Input::Quit => break,
                Input::Question(question) => {
                    let _ = editor.add_history_entry(question);
                    answer(&mut engine, question, args.scores);
                }
            },
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err).context("line editor failed"),
        }
    }

    let metrics = engine.metrics();
    tracing::info!(
        queries = metrics.queries_executed,
        sentences = metrics.current_sentence_count,
        "session ended"
    );

    Ok(())
}

/// What the loop should do with one line of input.
#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    /// Blank line; nudge the user for a question.
    Empty,
    /// An exit word; end the session.
    Quit,
    /// A question to put to the engine.
    Question(&'a str),
}

fn classify(line: &str) -> Input<'_> {
    let line = line.trim();
    if line.is_empty() {
        Input::Empty
    } else if matches!(line, "exit" | "quit") {
        Input::Quit
    } else {
        Input::Question(line)
    }
}

/// Answers one question, optionally with the score attached.
fn answer(engine: &mut Concord, question: &str, show_scores: bool) {
    if !show_scores {
        println!("{}", engine.retrieve(question));
        return;
    }

    match engine.best_match(question) {
        Some(m) => {
            if let Some(sentence) = engine.original(m.sentence_id) {
                println!("{sentence}");
            }
            println!("{}", format!("({m})").dimmed());
        }
        None => println!("{}", engine.config().fallback_message),
    }
}

/// Prints the opening sentences of the corpus as hints for what the
/// document can answer.
fn print_suggestions(engine: &Concord) {
    if engine.is_empty() {
        return;
    }

    println!("{}", "The document opens with:".dimmed());
    for id in 0..3 {
        if let Some(sentence) = engine.original(id) {
            println!("  {}", sentence.dimmed());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_ask_for_a_question() {
        assert_eq!(classify(""), Input::Empty);
        assert_eq!(classify("   \t"), Input::Empty);
    }

    #[test]
    fn exit_words_quit() {
        assert_eq!(classify("exit"), Input::Quit);
        assert_eq!(classify("quit"), Input::Quit);
        assert_eq!(classify("  exit  "), Input::Quit);
    }

    #[test]
    fn anything_else_is_a_question() {
        assert_eq!(classify("Are cats great?"), Input::Question("Are cats great?"));
        assert_eq!(classify(" exit the building? "), Input::Question("exit the building?"));
    }
}
