//! Command implementations for the hangul-augment CLI.

use log::debug;

use crate::augment;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::AugmentConfig;
use crate::error::Result;
use crate::noise::{ErrorInjector, Transform};
use crate::syllable::decompose;

/// Execute a CLI command.
pub fn execute_command(args: AugmentArgs) -> Result<()> {
    match &args.command {
        Command::Augment(augment_args) => augment_dataset(augment_args, &args),
        Command::Demo(demo_args) => run_demo(demo_args, &args),
        Command::Decompose(decompose_args) => decompose_text(decompose_args, &args),
    }
}

/// Build the run configuration: config file (or defaults), then flag overrides.
pub fn resolve_config(args: &AugmentDatasetArgs) -> Result<AugmentConfig> {
    let mut config = match &args.config {
        Some(path) => {
            debug!("Loading configuration from: {}", path.display());
            AugmentConfig::load(path)?
        }
        None => AugmentConfig::default(),
    };

    if let Some(input) = &args.input {
        config.input_path = input.clone();
    }
    if let Some(output) = &args.output {
        config.output_path = output.clone();
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if args.no_bom {
        config.write_bom = false;
    }
    if !args.transforms.is_empty() {
        config.transforms = args.transforms.clone();
    }

    config.validate()?;
    Ok(config)
}

/// Augment a dataset file.
fn augment_dataset(args: &AugmentDatasetArgs, cli_args: &AugmentArgs) -> Result<()> {
    let config = resolve_config(args)?;

    if cli_args.verbosity() > 1 {
        println!("Reading from: {}", config.input_path.display());
        println!("Writing to: {}", config.output_path.display());
    }

    let summary = augment::run(&config)?;
    output_result("Augmentation complete", &summary, cli_args)
}

/// Print samples of every transform on one sentence.
fn run_demo(args: &DemoArgs, cli_args: &AugmentArgs) -> Result<()> {
    let result = demo_samples(args);
    output_result("Transform samples", &result, cli_args)
}

/// Apply every transform `args.samples` times, in `Transform::ALL` order.
pub fn demo_samples(args: &DemoArgs) -> DemoResult {
    let mut injector = match args.seed {
        Some(seed) => ErrorInjector::seeded(seed),
        None => ErrorInjector::from_os_rng(),
    };

    let mut samples = Vec::with_capacity(Transform::ALL.len() * args.samples);
    for transform in Transform::ALL {
        for _ in 0..args.samples {
            samples.push(DemoSample {
                transform: transform.to_string(),
                error: injector.apply(transform, &args.sentence),
            });
        }
    }

    DemoResult {
        original: args.sentence.clone(),
        seed: args.seed,
        samples,
    }
}

/// Print the jamo decomposition of every character.
fn decompose_text(args: &DecomposeArgs, cli_args: &AugmentArgs) -> Result<()> {
    let result = DecompositionResult {
        text: args.text.clone(),
        characters: args.text.chars().map(decompose_char).collect(),
    };
    output_result("Decomposition", &result, cli_args)
}

fn decompose_char(ch: char) -> CharDecomposition {
    let syllable = decompose(ch);
    CharDecomposition {
        character: ch.to_string(),
        codepoint: format!("U+{:04X}", ch as u32),
        indices: syllable.map(|s| [s.onset, s.nucleus, s.coda]),
        jamo: syllable.map(|s| s.jamo().concat()),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::Parser;

    use super::*;

    fn dataset_args() -> AugmentDatasetArgs {
        AugmentDatasetArgs {
            config: None,
            input: None,
            output: None,
            seed: None,
            no_bom: false,
            transforms: Vec::new(),
        }
    }

    #[test]
    fn test_resolve_config_defaults() {
        let config = resolve_config(&dataset_args()).unwrap();
        assert_eq!(config, AugmentConfig::default());
    }

    #[test]
    fn test_resolve_config_overrides() {
        let args = AugmentDatasetArgs {
            input: Some(PathBuf::from("a.csv")),
            output: Some(PathBuf::from("b.csv")),
            seed: Some(3),
            no_bom: true,
            transforms: vec![Transform::ReplaceNucleus],
            ..dataset_args()
        };
        let config = resolve_config(&args).unwrap();
        assert_eq!(config.input_path, PathBuf::from("a.csv"));
        assert_eq!(config.output_path, PathBuf::from("b.csv"));
        assert_eq!(config.seed, Some(3));
        assert!(!config.write_bom);
        assert_eq!(config.transforms, vec![Transform::ReplaceNucleus]);
    }

    #[test]
    fn test_resolve_config_rejects_reordered_transforms() {
        let args = AugmentDatasetArgs {
            transforms: vec![Transform::Compound, Transform::DropCoda],
            ..dataset_args()
        };
        assert!(resolve_config(&args).is_err());
    }

    #[test]
    fn test_demo_samples_seeded() {
        let args = DemoArgs {
            sentence: DEMO_SENTENCE.to_string(),
            seed: Some(42),
            samples: 2,
        };
        let result = demo_samples(&args);
        assert_eq!(result.original, DEMO_SENTENCE);
        assert_eq!(result.seed, Some(42));
        assert_eq!(result.samples.len(), Transform::ALL.len() * 2);

        let names: Vec<&str> = result.samples.iter().map(|s| s.transform.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "drop-coda",
                "drop-coda",
                "replace-onset",
                "replace-onset",
                "replace-coda",
                "replace-coda",
                "replace-nucleus",
                "replace-nucleus",
                "compound",
                "compound",
            ]
        );
        for sample in &result.samples {
            // compound may undo its own first edit
            if sample.transform != "compound" {
                assert_ne!(sample.error, DEMO_SENTENCE);
            }
            assert_eq!(sample.error.chars().count(), DEMO_SENTENCE.chars().count());
        }

        let again = demo_samples(&args);
        let errors: Vec<&str> = result.samples.iter().map(|s| s.error.as_str()).collect();
        let repeated: Vec<&str> = again.samples.iter().map(|s| s.error.as_str()).collect();
        assert_eq!(errors, repeated);
    }

    #[test]
    fn test_run_demo_json() {
        let cli_args = AugmentArgs::parse_from([
            "hangul-augment",
            "--format",
            "json",
            "demo",
            "--seed",
            "7",
            "안녕",
        ]);
        match &cli_args.command {
            Command::Demo(demo_args) => run_demo(demo_args, &cli_args).unwrap(),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_decompose_char() {
        let decomposed = decompose_char('안');
        assert_eq!(decomposed.codepoint, "U+C548");
        assert_eq!(decomposed.indices, Some([11, 0, 4]));
        assert_eq!(decomposed.jamo.as_deref(), Some("ㅇㅏㄴ"));

        let punct = decompose_char('?');
        assert_eq!(punct.indices, None);
        assert_eq!(punct.jamo, None);
    }
}
