use crate::config::{RunOptions, SEED_ENV};
use crate::types::StudentStatus;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// degreefit - find the degree program that fits you
#[derive(Parser, Debug)]
#[command(name = "degreefit")]
#[command(about = "A Likert-scale survey that ranks degree programs by fit")]
#[command(version)]
pub struct Cli {
    /// Write logs to this file (the interactive survey is silent otherwise)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Take the survey in the terminal (default)
    Survey(SurveyArgs),
    /// Print the statements asked for a student status
    Questions {
        /// Student status: Undergraduate or Graduate
        #[arg(short, long, value_parser = StudentStatus::parse)]
        status: StudentStatus,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Score a JSON response file and print the ranked programs
    Score {
        /// Student status: Undergraduate or Graduate
        #[arg(short, long, value_parser = StudentStatus::parse)]
        status: StudentStatus,
        /// Path to the response file
        #[arg(short, long)]
        responses: PathBuf,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct SurveyArgs {
    /// Preselect the student status on the welcome screen
    #[arg(short, long, value_parser = StudentStatus::parse)]
    pub status: Option<StudentStatus>,

    /// Seed for reproducible question order
    #[arg(long, env = SEED_ENV)]
    pub seed: Option<u64>,

    /// Ask questions in catalog order
    #[arg(long)]
    pub no_shuffle: bool,
}

impl SurveyArgs {
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            status: self.status,
            shuffle: !self.no_shuffle,
            seed: self.seed,
        }
    }
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Whether this invocation opens the TUI
    pub fn is_interactive(&self) -> bool {
        matches!(self.command, None | Some(Commands::Survey(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_command_is_interactive() {
        let cli = Cli::try_parse_from(["degreefit"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.is_interactive());
    }

    #[test]
    fn test_survey_options() {
        let cli = Cli::try_parse_from([
            "degreefit", "survey", "--status", "Graduate", "--seed", "5", "--no-shuffle",
        ])
        .unwrap();
        let Some(Commands::Survey(args)) = cli.command else {
            panic!("expected survey command");
        };
        let opts = args.run_options();
        assert_eq!(opts.status, Some(StudentStatus::Graduate));
        assert_eq!(opts.seed, Some(5));
        assert!(!opts.shuffle);
    }

    #[test]
    fn test_invalid_status_rejected() {
        assert!(Cli::try_parse_from(["degreefit", "questions", "--status", "PhD"]).is_err());
        assert!(Cli::try_parse_from([
            "degreefit", "score", "--status", "PhD", "--responses", "r.json"
        ])
        .is_err());
    }

    #[test]
    fn test_score_command() {
        let cli = Cli::try_parse_from([
            "degreefit", "-v", "score", "-s", "Undergraduate", "-r", "answers.json", "--json",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 1);
        assert!(!cli.is_interactive());
        match cli.command {
            Some(Commands::Score { status, responses, json }) => {
                assert_eq!(status, StudentStatus::Undergraduate);
                assert_eq!(responses, PathBuf::from("answers.json"));
                assert!(json);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
