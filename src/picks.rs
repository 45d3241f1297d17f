//! Pick event input.
//!
//! One display-space click per line, written `x,y` or `x y`. Blank lines and
//! lines starting with `#` are skipped.

use pickprobe_designer::PickEvent;
use std::io::BufRead;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PickParseError {
    #[error("line {line}: expected two coordinates, got '{text}'")]
    Malformed { line: usize, text: String },

    #[error("line {line}: coordinates must be finite, got '{text}'")]
    NotFinite { line: usize, text: String },

    #[error("failed to read picks: {0}")]
    Io(#[from] std::io::Error),
}

/// Parses one line. `None` for blank and comment lines.
pub fn parse_pick_line(line_no: usize, line: &str) -> Option<Result<PickEvent, PickParseError>> {
    let text = line.trim();
    if text.is_empty() || text.starts_with('#') {
        return None;
    }

    let malformed = || PickParseError::Malformed {
        line: line_no,
        text: text.to_string(),
    };

    let mut parts = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty());
    let parsed = match (parts.next(), parts.next(), parts.next()) {
        (Some(x), Some(y), None) => match (x.parse::<f64>(), y.parse::<f64>()) {
            (Ok(x), Ok(y)) => Ok((x, y)),
            _ => Err(malformed()),
        },
        _ => Err(malformed()),
    };

    Some(parsed.and_then(|(x, y)| {
        if x.is_finite() && y.is_finite() {
            Ok(PickEvent::new(x, y))
        } else {
            Err(PickParseError::NotFinite {
                line: line_no,
                text: text.to_string(),
            })
        }
    }))
}

/// Reads every pick from `reader`, in order.
pub fn read_picks<R: BufRead>(reader: R) -> Result<Vec<PickEvent>, PickParseError> {
    let mut events = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if let Some(event) = parse_pick_line(i + 1, &line) {
            events.push(event?);
        }
    }
    Ok(events)
}
