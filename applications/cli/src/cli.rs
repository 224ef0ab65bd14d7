/// Command line definition
use crate::error::CliError;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "tagsort", version)]
#[command(about = "Reorganize audio files into Artist/Album/Track by their tags", long_about = None)]
pub struct Cli {
    /// Directory to organize
    pub root: PathBuf,

    /// Be verbose
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the move plan without moving anything
    #[arg(long)]
    pub dry_run: bool,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// What the command line asks for
#[derive(Debug)]
pub enum Invocation {
    /// Organize a directory
    Run(Cli),
    /// Print help or version text and exit successfully
    Print(String),
}

/// Parse a command line, classifying failures as argument errors
pub fn parse_args<I, T>(args: I) -> Result<Invocation, CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Ok(Invocation::Run(cli)),
        // help and version are "errors" that go to stdout
        Err(e) if !e.use_stderr() => Ok(Invocation::Print(e.render().to_string())),
        Err(e) => {
            let rendered = e.render().to_string();
            let message = rendered.trim_end().trim_start_matches("error: ");
            Err(CliError::Arguments(message.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EXIT_ARGUMENTS;

    fn run_cli(args: &[&str]) -> Cli {
        match parse_args(args.iter().copied()).unwrap() {
            Invocation::Run(cli) => cli,
            other => panic!("expected a run, got {:?}", other),
        }
    }

    #[test]
    fn test_single_positional() {
        let cli = run_cli(&["tagsort", "/music"]);
        assert_eq!(cli.root, PathBuf::from("/music"));
        assert!(!cli.verbose);
        assert!(!cli.dry_run);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_flags() {
        let cli = run_cli(&["tagsort", "--verbose", "--dry-run", "-c", "my.toml", "/music"]);
        assert!(cli.verbose);
        assert!(cli.dry_run);
        assert_eq!(cli.config, Some(PathBuf::from("my.toml")));

        assert!(run_cli(&["tagsort", "/music", "-v"]).verbose);
    }

    #[test]
    fn test_missing_positional_is_argument_error() {
        let err = parse_args(["tagsort"]).unwrap_err();
        assert!(matches!(err, CliError::Arguments(_)));
        assert_eq!(err.exit_code(), EXIT_ARGUMENTS);
    }

    #[test]
    fn test_extra_positional_is_argument_error() {
        let err = parse_args(["tagsort", "/a", "/b"]).unwrap_err();
        assert!(matches!(err, CliError::Arguments(_)));
    }

    #[test]
    fn test_unknown_flag_is_argument_error() {
        let err = parse_args(["tagsort", "--frobnicate", "/a"]).unwrap_err();
        assert!(matches!(err, CliError::Arguments(_)));
        assert!(err.to_string().starts_with("ArgumentsError: "));
    }

    #[test]
    fn test_help_is_printed() {
        match parse_args(["tagsort", "--help"]).unwrap() {
            Invocation::Print(text) => assert!(text.contains("--verbose")),
            other => panic!("expected help text, got {:?}", other),
        }
    }
}
