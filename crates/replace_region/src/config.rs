// crates/replace_region/src/config.rs

use anyhow::{bail, Result};
use clap::{value_parser, Arg, ArgAction, ArgGroup, ArgMatches, Command};
use std::path::PathBuf;

/// Environment fallback for `--start`.
pub const START_MARKER_ENV: &str = "REPLACE_REGION_START";
/// Environment fallback for `--end`.
pub const END_MARKER_ENV: &str = "REPLACE_REGION_END";
/// When set (to anything), forces dry-run mode.
pub const DRY_RUN_ENV: &str = "REPLACE_REGION_DRY_RUN";

/// Where the replacement text comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReplacementSource {
    Inline(String),
    File(PathBuf),
}

/// Runtime configuration composed from CLI + environment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub file: PathBuf,
    pub start_marker: String,
    pub end_marker: String,
    /// None == only extract and print the region.
    pub replacement: Option<ReplacementSource>,
    /// Turn `\n`, `\t` and `\\` in inline replacement text into real characters.
    pub unescape: bool,
    /// Defaults to `file` when absent.
    pub output: Option<PathBuf>,
    pub dry_run: bool,
    pub verbose: bool,
}

impl AppConfig {
    /// Builds the config from parsed arguments, reading fallbacks from the
    /// process environment.
    pub fn from_matches(matches: &ArgMatches) -> Result<Self> {
        Self::from_matches_with_env(matches, |key| std::env::var(key).ok())
    }

    /// Same as `from_matches`, with the environment supplied by `env`.
    pub fn from_matches_with_env<F>(matches: &ArgMatches, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = matches
            .get_one::<PathBuf>("file")
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("No input file given"))?;

        let start_marker = match matches
            .get_one::<String>("start")
            .cloned()
            .or_else(|| env(START_MARKER_ENV))
        {
            Some(marker) => marker,
            None => bail!("No start marker given (use --start or set {})", START_MARKER_ENV),
        };
        let end_marker = match matches
            .get_one::<String>("end")
            .cloned()
            .or_else(|| env(END_MARKER_ENV))
        {
            Some(marker) => marker,
            None => bail!("No end marker given (use --end or set {})", END_MARKER_ENV),
        };
        if start_marker.is_empty() || end_marker.is_empty() {
            bail!("Markers must not be empty");
        }

        let replacement = if let Some(text) = matches.get_one::<String>("replacement") {
            Some(ReplacementSource::Inline(text.clone()))
        } else {
            matches
                .get_one::<PathBuf>("replacement_file")
                .map(|path| ReplacementSource::File(path.clone()))
        };

        let unescape = matches.get_flag("unescape");
        if unescape && !matches!(replacement, Some(ReplacementSource::Inline(_))) {
            bail!("--unescape only applies to --replacement text");
        }

        Ok(AppConfig {
            file,
            start_marker,
            end_marker,
            replacement,
            unescape,
            output: matches.get_one::<PathBuf>("output").cloned(),
            dry_run: matches.get_flag("dry_run") || env(DRY_RUN_ENV).is_some(),
            verbose: matches.get_flag("verbose"),
        })
    }

    /// The file that receives the rewritten text.
    pub fn target(&self) -> &PathBuf {
        self.output.as_ref().unwrap_or(&self.file)
    }
}

/// Command-line definition for the `replace_region` binary.
pub fn build_cli() -> Command {
    Command::new("replace_region")
        .version("0.1.0")
        .about("Extracts the text between two markers in a file and optionally replaces it")
        .arg(
            Arg::new("file")
                .help("File to search")
                .required(true)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("start")
                .long("start")
                .num_args(1)
                .help("Start marker; the region begins with it"),
        )
        .arg(
            Arg::new("end")
                .long("end")
                .num_args(1)
                .help("End marker; the region stops right before it"),
        )
        .arg(
            Arg::new("replacement")
                .long("replacement")
                .num_args(1)
                .allow_hyphen_values(true)
                .help("Text to put in place of the region"),
        )
        .arg(
            Arg::new("replacement_file")
                .long("replacement-file")
                .num_args(1)
                .value_parser(value_parser!(PathBuf))
                .help("Read the replacement text from this file"),
        )
        .group(
            ArgGroup::new("replacement_source")
                .args(["replacement", "replacement_file"])
                .multiple(false),
        )
        .arg(
            Arg::new("unescape")
                .long("unescape")
                .help("Interpret \\n, \\t and \\\\ in --replacement")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .num_args(1)
                .value_parser(value_parser!(PathBuf))
                .help("Write the result here instead of over FILE"),
        )
        .arg(
            Arg::new("dry_run")
                .long("dry-run")
                .help("Print the rewritten text instead of writing it")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose logging")
                .action(ArgAction::SetTrue),
        )
}
