use std::{
    io::{self, BufRead, Write},
    path::Path,
};

use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

pub mod cli;

use cli::{Cli, Command};
use dashqa::{
    AnswerMatcher,
    ChatSession,
    KnowledgeSource,
    catalog::QUICK_QUESTIONS,
    error,
    session::Role,
};

fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if let Ok(env) = std::env::var("DASHQA_LOG") {
        EnvFilter::new(env)
    } else if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn main() -> error::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let knowledge = cli.knowledge.as_deref();
    match cli.command {
        Command::Ask(args) => {
            cmd_ask(&load_matcher(knowledge)?, &args)?;
        }
        Command::Chat => {
            cmd_chat(&load_matcher(knowledge)?)?;
        }
        Command::Quick(args) => {
            cmd_quick(&load_matcher(knowledge)?, &args)?;
        }
        Command::Catalog(args) => {
            cmd_catalog(&load_matcher(knowledge)?, &args)?;
        }
        Command::Completions(args) => args.generate(),
    }

    Ok(())
}

fn load_matcher(knowledge: Option<&Path>) -> error::Result<AnswerMatcher> {
    let source = KnowledgeSource::resolve(knowledge)?;
    tracing::debug!(%source, "resolved knowledge source");
    Ok(AnswerMatcher::new(source.load()?))
}

#[derive(Serialize)]
struct AskOutput<'a> {
    query: &'a str,
    matched: bool,
    answer: &'a str,
}

fn cmd_ask(matcher: &AnswerMatcher, args: &cli::AskArgs) -> error::Result<()> {
    let result = matcher.answer(&args.query);

    if args.json {
        let output = AskOutput {
            query: &args.query,
            matched: result.is_answered(),
            answer: result.text(),
        };
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{}", result.text());
    }
    Ok(())
}

fn cmd_chat(matcher: &AnswerMatcher) -> error::Result<()> {
    let mut session = ChatSession::new();
    let mut stdout = io::stdout().lock();

    eprintln!(
        "Ask about tourist arrivals, countries, years (2003-2012), growth \
         rates, or forecasts. Commands: /quick [n], /history, /clear, /quit"
    );

    for line in io::stdin().lock().lines() {
        let line = line?;

        match line.trim() {
            "/quit" | "/exit" => break,
            "/clear" => {
                session.clear();
                writeln!(stdout, "Chat cleared.")?;
            }
            "/history" => print_history(&mut stdout, &session)?,
            "/quick" => print_quick_questions(&mut stdout)?,
            command if command.starts_with("/quick ") => {
                let number = command["/quick ".len()..].trim();
                let index = number
                    .parse()
                    .map_err(|_| error::Error::NotFound {
                        kind: "quick question",
                        name: number.to_string(),
                    })
                    .and_then(quick_index);
                match index {
                    Ok(index) => {
                        let reply = session.ask_quick(matcher, index)?;
                        writeln!(stdout, "{reply}")?;
                    }
                    Err(e) => eprintln!("{e}"),
                }
            }
            _ => {
                if let Some(reply) = session.ask(matcher, &line) {
                    writeln!(stdout, "{reply}")?;
                }
            }
        }
        stdout.flush()?;
    }

    Ok(())
}

fn print_history(
    out: &mut impl Write,
    session: &ChatSession,
) -> error::Result<()> {
    if session.is_empty() {
        writeln!(out, "No messages yet.")?;
        return Ok(());
    }
    for message in session.history() {
        let speaker = match message.role {
            Role::User => "you",
            Role::Assistant => "assistant",
        };
        writeln!(out, "{speaker}: {}", message.content)?;
    }
    Ok(())
}

fn print_quick_questions(out: &mut impl Write) -> error::Result<()> {
    for (i, quick) in QUICK_QUESTIONS.iter().enumerate() {
        writeln!(out, "{}. {}: {}", i + 1, quick.label, quick.question)?;
    }
    Ok(())
}

/// Convert a 1-based quick question number into an index.
fn quick_index(number: usize) -> error::Result<usize> {
    number
        .checked_sub(1)
        .filter(|&index| index < QUICK_QUESTIONS.len())
        .ok_or_else(|| error::Error::NotFound {
            kind: "quick question",
            name: number.to_string(),
        })
}

fn cmd_quick(
    matcher: &AnswerMatcher,
    args: &cli::QuickArgs,
) -> error::Result<()> {
    match args.number {
        None => print_quick_questions(&mut io::stdout().lock()),
        Some(number) => {
            let quick = &QUICK_QUESTIONS[quick_index(number)?];
            println!("{}", matcher.answer(quick.question).text());
            Ok(())
        }
    }
}

fn cmd_catalog(
    matcher: &AnswerMatcher,
    args: &cli::CatalogArgs,
) -> error::Result<()> {
    let entries = matcher.knowledge().entries();

    if args.json {
        println!("{}", serde_json::to_string_pretty(entries)?);
    } else {
        for (i, entry) in entries.iter().enumerate() {
            println!("{:>3}. {}", i + 1, entry.question);
            println!("     {}", entry.answer);
        }
        println!("\n{} question(s)", entries.len());
    }
    Ok(())
}
