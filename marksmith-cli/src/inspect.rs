//! Pass-by-pass view of the transformer
//!
//! `marksmith inspect` runs the pipeline over a document and prints the text
//! as it stood after each pass. It is a debugging aid for working out which
//! rule produced (or mangled) a piece of output.
//!
//! ## Output
//!
//! - `text`: one `== <pass> ==` heading per pass followed by the text
//! - `json`: an array of `{ "pass": ..., "text": ... }` objects
//!
//! When a single pass is requested only that snapshot is printed; in text mode
//! without its heading. `skip_unchanged` drops passes that left the text as it
//! was.

use marksmith::{normalize_line_endings, trace, Pass, PassSnapshot};
use marksmith_config::InspectOutput;

/// Settings for one inspection run.
#[derive(Debug, Clone, Copy)]
pub struct InspectOptions {
    pub only: Option<Pass>,
    pub skip_unchanged: bool,
    pub output: InspectOutput,
}

/// Render the inspection report for `source`.
pub fn inspect(source: &str, options: InspectOptions) -> Result<String, serde_json::Error> {
    let snapshots = select(source, trace(source), &options);

    match (options.output, options.only) {
        (InspectOutput::Json, Some(_)) => match snapshots.first() {
            Some(snapshot) => serde_json::to_string_pretty(snapshot),
            None => Ok("null".to_string()),
        },
        (InspectOutput::Json, None) => serde_json::to_string_pretty(&snapshots),
        (InspectOutput::Text, Some(_)) => Ok(snapshots
            .first()
            .map(|snapshot| snapshot.text.clone())
            .unwrap_or_default()),
        (InspectOutput::Text, None) => Ok(render_text(&snapshots)),
    }
}

fn select(
    source: &str,
    snapshots: Vec<PassSnapshot>,
    options: &InspectOptions,
) -> Vec<PassSnapshot> {
    let mut previous = normalize_line_endings(source).into_owned();
    let mut selected = Vec::new();
    for snapshot in snapshots {
        let unchanged = snapshot.text == previous;
        previous.clone_from(&snapshot.text);

        if let Some(only) = options.only {
            if snapshot.pass == only {
                selected.push(snapshot);
                break;
            }
            continue;
        }
        if options.skip_unchanged && unchanged {
            continue;
        }
        selected.push(snapshot);
    }
    selected
}

fn render_text(snapshots: &[PassSnapshot]) -> String {
    let mut out = String::new();
    for snapshot in snapshots {
        out.push_str(&format!("== {} ==\n", snapshot.pass));
        out.push_str(&snapshot.text);
        out.push_str("\n\n");
    }
    out
}
