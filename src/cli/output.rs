//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{AugmentArgs, OutputFormat};
use crate::error::Result;

/// One sample produced by the demo command.
#[derive(Debug, Serialize, Deserialize)]
pub struct DemoSample {
    pub transform: String,
    pub error: String,
}

/// Result structure for the demo command.
#[derive(Debug, Serialize, Deserialize)]
pub struct DemoResult {
    pub original: String,
    pub seed: Option<u64>,
    pub samples: Vec<DemoSample>,
}

/// Decomposition of a single character.
#[derive(Debug, Serialize, Deserialize)]
pub struct CharDecomposition {
    pub character: String,
    pub codepoint: String,
    /// `[onset, nucleus, coda]` indices, absent for non-syllables.
    pub indices: Option<[usize; 3]>,
    /// Jamo spelled out, absent for non-syllables.
    pub jamo: Option<String>,
}

/// Result structure for the decompose command.
#[derive(Debug, Serialize, Deserialize)]
pub struct DecompositionResult {
    pub text: String,
    pub characters: Vec<CharDecomposition>,
}

/// Output a result in the format selected on the command line.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &AugmentArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &AugmentArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;
    for line in human_lines(&value, 0) {
        println!("{line}");
    }
    Ok(())
}

/// Render a JSON value as indented `key: value` lines.
fn human_lines(value: &serde_json::Value, indent: usize) -> Vec<String> {
    let spaces = "  ".repeat(indent);
    let mut lines = Vec::new();

    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                match val {
                    serde_json::Value::Object(_) => {
                        lines.push(format!("{spaces}{key}:"));
                        lines.extend(human_lines(val, indent + 1));
                    }
                    serde_json::Value::Array(arr) if arr.iter().any(|item| item.is_object()) => {
                        lines.push(format!("{spaces}{key}:"));
                        lines.extend(human_lines(val, indent + 1));
                    }
                    _ => lines.push(format!("{spaces}{key}: {}", format_value(val))),
                }
            }
        }
        serde_json::Value::Array(arr) => {
            for item in arr {
                match item {
                    serde_json::Value::Object(_) | serde_json::Value::Array(_) => {
                        lines.push(format!("{spaces}-"));
                        lines.extend(human_lines(item, indent + 1));
                    }
                    _ => lines.push(format!("{spaces}- {}", format_value(item))),
                }
            }
        }
        _ => lines.push(format!("{spaces}{}", format_value(value))),
    }

    lines
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &AugmentArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format a scalar JSON value for display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(_) => "[object]".to_string(),
        serde_json::Value::Null => "-".to_string(),
    }
}
