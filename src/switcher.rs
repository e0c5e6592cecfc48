//! Rewriting of the generated block inside the version switcher script.

use crate::error::{DocVersionsError, Result};

pub const DEFAULT_START_MARKER: &str = "// version_info: start";
pub const DEFAULT_END_MARKER: &str = "// version_info: end";

/// Marker lines delimiting the generated block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    pub start: String,
    pub end: String,
}

impl Default for Markers {
    fn default() -> Self {
        Markers {
            start: DEFAULT_START_MARKER.to_string(),
            end: DEFAULT_END_MARKER.to_string(),
        }
    }
}

/// Render the generated block: one line declaring `latestStable` and
/// `availableVersions`, newline-terminated.
pub fn render_block(latest_stable: &str, versions_json: &str) -> String {
    format!(
        "const latestStable=\"{}\";const availableVersions={};\n",
        latest_stable, versions_json
    )
}

/// Replace everything between the marker lines with `block`.
///
/// Marker lines are matched whole, ignoring the line terminator. All bytes
/// outside the block, markers included, are kept as they are.
pub fn splice_block(template: &str, markers: &Markers, block: &str) -> Result<String> {
    let lines: Vec<&str> = template.split_inclusive('\n').collect();
    let is_marker = |line: &str, marker: &str| line.trim_end_matches(['\n', '\r']) == marker;

    let start = lines
        .iter()
        .position(|line| is_marker(line, &markers.start))
        .ok_or_else(|| {
            DocVersionsError::template(format!("Missing opening '{}'", markers.start))
        })?;

    let end = lines
        .iter()
        .skip(start + 1)
        .position(|line| is_marker(line, &markers.end))
        .map(|offset| start + 1 + offset)
        .ok_or_else(|| {
            if lines.iter().any(|line| is_marker(line, &markers.end)) {
                DocVersionsError::template(format!(
                    "Closing '{}' appears before opening '{}'",
                    markers.end, markers.start
                ))
            } else {
                DocVersionsError::template(format!("Missing closing '{}'", markers.end))
            }
        })?;

    let mut output = String::with_capacity(template.len() + block.len());
    for line in &lines[..=start] {
        output.push_str(line);
    }
    output.push_str(block);
    for line in &lines[end..] {
        output.push_str(line);
    }
    Ok(output)
}
