//! Command line argument parsing for hangul-augment using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::noise::Transform;

/// Sentence used by `demo` when none is given.
pub const DEMO_SENTENCE: &str = "안녕하세요 저는 파이썬을 공부합니다.";

/// hangul-augment - synthetic spelling errors for Hangul text
#[derive(Parser, Debug, Clone)]
#[command(name = "hangul-augment")]
#[command(about = "Generate noisy/clean sentence pairs by corrupting Hangul syllables")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct AugmentArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl AugmentArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Augment a CSV dataset
    Augment(AugmentDatasetArgs),

    /// Show one sample of every transform on a sentence
    Demo(DemoArgs),

    /// Show the jamo decomposition of every character
    Decompose(DecomposeArgs),
}

/// Arguments for augmenting a dataset
#[derive(Parser, Debug, Clone)]
pub struct AugmentDatasetArgs {
    /// JSON configuration file; flags below override its values
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Source CSV with `ID` and `output` columns
    #[arg(short, long, value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Destination CSV
    #[arg(short, long, value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Seed for reproducible runs
    #[arg(short, long, env = "HANGUL_AUGMENT_SEED")]
    pub seed: Option<u64>,

    /// Do not prefix the output with a UTF-8 byte order mark
    #[arg(long)]
    pub no_bom: bool,

    /// Transforms to apply, in output order (default: all)
    #[arg(short, long, value_delimiter = ',')]
    pub transforms: Vec<Transform>,
}

/// Arguments for the demo
#[derive(Parser, Debug, Clone)]
pub struct DemoArgs {
    /// Sentence to corrupt
    #[arg(value_name = "SENTENCE", default_value = DEMO_SENTENCE)]
    pub sentence: String,

    /// Seed for reproducible output
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Number of samples per transform
    #[arg(short = 'n', long, default_value = "1")]
    pub samples: usize,
}

/// Arguments for decomposition
#[derive(Parser, Debug, Clone)]
pub struct DecomposeArgs {
    /// Text to decompose
    #[arg(value_name = "TEXT")]
    pub text: String,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_augment() {
        let args = AugmentArgs::parse_from([
            "hangul-augment",
            "augment",
            "--input",
            "in.csv",
            "--seed",
            "7",
            "--transforms",
            "drop-coda,compound",
            "-vv",
        ]);
        assert_eq!(args.verbosity(), 2);
        match args.command {
            Command::Augment(augment) => {
                assert_eq!(augment.input, Some(PathBuf::from("in.csv")));
                assert_eq!(augment.seed, Some(7));
                assert_eq!(
                    augment.transforms,
                    vec![Transform::DropCoda, Transform::Compound]
                );
                assert!(!augment.no_bom);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_demo_defaults() {
        let args = AugmentArgs::parse_from(["hangul-augment", "-q", "demo"]);
        assert_eq!(args.verbosity(), 0);
        match args.command {
            Command::Demo(demo) => {
                assert_eq!(demo.sentence, DEMO_SENTENCE);
                assert_eq!(demo.samples, 1);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
