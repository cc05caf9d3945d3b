//! Output formatting for CLI commands.

use crate::cli::args::{LancetArgs, OutputFormat};
use crate::error::Result;
use crate::processor::ProcessedText;

/// Output a processing result based on the selected format.
pub fn output_result(result: &ProcessedText, args: &LancetArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => {
            print!("{}", format_human(result));
            Ok(())
        }
        OutputFormat::Json => {
            println!("{}", format_json(result, args.pretty)?);
            Ok(())
        }
    }
}

/// Render a result as JSON.
pub fn format_json(result: &ProcessedText, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    Ok(json)
}

/// Render a result for reading in a terminal.
pub fn format_human(result: &ProcessedText) -> String {
    let mut out = String::new();

    out.push_str("Filtered text:\n");
    out.push_str(&format!("  {}\n", result.filtered_text));

    push_list(&mut out, "Abusive words", &result.abusive_words);
    push_list(&mut out, "Grammar errors", &result.grammar_errors);
    push_list(&mut out, "Repetitive words", &result.repetitive_words);

    out
}

fn push_list(out: &mut String, title: &str, items: &[String]) {
    out.push('\n');
    out.push_str(&format!("{title} ({}):\n", items.len()));
    if items.is_empty() {
        out.push_str("  (none)\n");
    }
    for item in items {
        out.push_str(&format!("  - {item}\n"));
    }
}
