// Barren area sources: single specs, an interactive line source, JSON files.

use std::io::{BufRead, Write};

use crate::core::{BarrenRectangle, Result};

pub const PROMPT: &str = "Enter barren area: ";

/// Ends interactive entry, like an empty line does.
const DONE_TOKEN: &str = "done";

pub fn parse_barren_area(spec: &str) -> Result<BarrenRectangle> {
    spec.parse()
}

/// Prompts for barren areas until an empty line, `done`, or end of input.
pub fn read_interactive<R: BufRead, W: Write>(mut reader: R, mut writer: W) -> Result<Vec<String>> {
    let mut specs = Vec::new();
    let mut line = String::new();
    loop {
        write!(writer, "{}", PROMPT)?;
        writer.flush()?;

        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        let entry = line.trim_end_matches(['\r', '\n']);
        if entry.trim().is_empty() || entry.trim() == DONE_TOKEN {
            break;
        }
        specs.push(entry.to_string());
    }
    Ok(specs)
}

/// Loads a JSON array of barren area specs, e.g. `["0 292 399 307"]`.
pub fn load_rectangle_file(path: &str) -> anyhow::Result<Vec<String>> {
    let content = std::fs::read_to_string(path)?;
    let specs: Vec<String> = serde_json::from_str(&content)?;
    Ok(specs)
}
