use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

#[derive(Debug, Parser)]
#[command(
    name = "dashqa",
    about = "Ask questions about the tourism dashboard data"
)]
pub struct Cli {
    /// Read the knowledge base from this JSON file instead of the default
    #[arg(long, global = true)]
    pub knowledge: Option<PathBuf>,

    /// Increase log verbosity (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Answer a single question
    Ask(AskArgs),
    /// Start an interactive chat session on stdin
    Chat,
    /// List the quick questions, or ask one of them
    Quick(QuickArgs),
    /// List the questions in the knowledge base
    Catalog(CatalogArgs),
    /// Generate shell completions
    #[command(hide = true)]
    Completions(CompletionsArgs),
}

// -- Ask --

#[derive(Debug, Parser)]
pub struct AskArgs {
    /// The question to answer
    pub query: String,

    /// Output the answer as JSON
    #[arg(long)]
    pub json: bool,
}

// -- Quick --

#[derive(Debug, Parser)]
pub struct QuickArgs {
    /// Quick question number (1-based); omit to list them
    pub number: Option<usize>,
}

// -- Catalog --

#[derive(Debug, Parser)]
pub struct CatalogArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

// -- Completions --

#[derive(Debug, Parser)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsArgs {
    /// Generate shell completions and print to stdout.
    pub fn generate(&self) {
        let mut cmd = Cli::command();
        clap_complete::generate(
            self.shell,
            &mut cmd,
            "dashqa",
            &mut std::io::stdout(),
        );
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::*;

    #[test]
    fn parse_ask_defaults() {
        let cli = Cli::parse_from(["dashqa", "ask", "how many years"]);
        match cli.command {
            Command::Ask(args) => {
                assert_eq!(args.query, "how many years");
                assert!(!args.json);
            }
            _ => panic!("expected ask command"),
        }
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
        assert!(cli.knowledge.is_none());
    }

    #[test]
    fn parse_global_knowledge_after_subcommand() {
        let cli = Cli::parse_from([
            "dashqa",
            "catalog",
            "--json",
            "--knowledge",
            "qa.json",
        ]);
        assert_eq!(cli.knowledge, Some(PathBuf::from("qa.json")));
        assert!(matches!(
            cli.command,
            Command::Catalog(CatalogArgs { json: true })
        ));
    }

    #[test]
    fn parse_quick_number() {
        let cli = Cli::parse_from(["dashqa", "quick", "2"]);
        assert!(matches!(
            cli.command,
            Command::Quick(QuickArgs { number: Some(2) })
        ));
    }

    #[test]
    fn parse_quiet_flag() {
        let cli = Cli::parse_from(["dashqa", "chat", "--quiet"]);
        assert!(cli.quiet);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        let result = Cli::try_parse_from(["dashqa", "-q", "-v", "chat"]);
        assert!(result.is_err());
    }

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }
}
