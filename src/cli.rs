use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;

use crate::bootstrap::{self, Runtime};
use crate::community::{self, OutputFormat};
use crate::config::{self, AppConfig};
use crate::session;
use crate::sources;

/// Community idea intake for the InnoAgent Hub demo.
#[derive(Debug, Parser)]
#[command(name = "innohub", version)]
pub struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file (defaults to ~/.innoagent-hub/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Normalize community issues into ideas and print them
    Community {
        /// JSON file with an array of issues, instead of the configured sources
        #[arg(long)]
        issues: Option<PathBuf>,
        /// Print ideas as a JSON array
        #[arg(long)]
        json: bool,
    },
    /// Load a session graph and show example community prompts
    Demo {
        #[arg(long)]
        session: Option<PathBuf>,
    },
    /// Show the resolved environment and project paths
    Env,
}

pub async fn run(cli: Cli) -> Result<()> {
    let config = config::load_config(cli.config.as_deref())?;
    let runtime = bootstrap::bootstrap(&config)?;

    match cli.command {
        Command::Community { issues, json } => {
            handle_community(&config, &runtime, issues, json).await
        }
        Command::Demo { session } => {
            let path = session.unwrap_or_else(|| runtime.default_session_file());
            session::run_demo(&path, &mut io::stdout().lock())
        }
        Command::Env => {
            print_env(&runtime);
            Ok(())
        }
    }
}

async fn handle_community(
    config: &AppConfig,
    runtime: &Runtime,
    issues: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let sources = sources::create_sources(config, issues.as_deref(), &runtime.project_root);
    let format = if json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    community::run_community(&sources, format, &mut io::stdout().lock()).await
}

fn print_env(runtime: &Runtime) {
    println!("env:          {}", runtime.env);
    println!("project root: {}", runtime.project_root.display());
    println!("agents:       {}", runtime.src_dir().display());
    println!("demos:        {}", runtime.demos_dir().display());
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("innohub").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_community_defaults() {
        let cli = parse(&["community"]);
        assert!(!cli.verbose);
        match cli.command {
            Command::Community { issues, json } => {
                assert_eq!(issues, None);
                assert!(!json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parse_community_with_file_and_json() {
        let cli = parse(&["community", "--issues", "saved.json", "--json"]);
        match cli.command {
            Command::Community { issues, json } => {
                assert_eq!(issues, Some(PathBuf::from("saved.json")));
                assert!(json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn global_flags_work_after_subcommand() {
        let cli = parse(&["demo", "--verbose", "--config", "hub.toml"]);
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("hub.toml")));
        assert!(matches!(cli.command, Command::Demo { session: None }));
    }

    #[test]
    fn missing_subcommand_fails() {
        assert!(Cli::try_parse_from(["innohub"]).is_err());
    }

    #[test]
    fn unknown_subcommand_fails() {
        assert!(Cli::try_parse_from(["innohub", "schedule"]).is_err());
    }
}
