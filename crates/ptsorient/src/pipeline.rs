//! One-file pipeline: winding test + text stages + rendering.
//!
//! Flow
//! - The winding is decided from *all* coordinate records in file order,
//!   before and independent of any text stage.
//! - Text path: decimate → normalize precision → global dedup → render.
//! - Stage flags are returned by value and collected into `PipelineFlags`.

use std::borrow::Cow;

use crate::cfg::Config;
use crate::orient::{orientation, Winding};
use crate::record::load_points;
use crate::text::{decimate, dedup_global, normalize_line};

/// Header written above a reversed (clockwise input) body.
pub const CW_HEADER: &str = "#CW. Done reversal";
/// Header written above an unchanged (counter-clockwise input) body.
pub const CCW_HEADER: &str = "#CCW. No reversal needed";

/// What the text stages did over a run. Each flag is set once any line
/// triggered it and never cleared.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PipelineFlags {
    pub duplicates_removed: bool,
    pub precision_adjusted: bool,
}

/// Result of processing one file.
#[derive(Clone, Debug, PartialEq)]
pub struct Outcome {
    pub winding: Winding,
    /// Body lines in output order (already reversed for clockwise input).
    pub lines: Vec<String>,
    /// Full output text, `None` when the winding is indeterminate.
    pub rendered: Option<String>,
    /// Lines the decimator looked at (emitted + swallowed).
    pub considered: usize,
    pub flags: PipelineFlags,
}

impl Outcome {
    /// Lines that survived decimation and dedup.
    #[inline]
    pub fn retained(&self) -> usize {
        self.lines.len()
    }
}

/// Order the body for `winding` and prepend the header.
///
/// Clockwise bodies are reversed. Returns `None` for an indeterminate
/// winding, in which case nothing must be written.
pub fn render<S: AsRef<str>>(winding: Winding, lines: &[S]) -> Option<String> {
    let header = match winding {
        Winding::Clockwise => CW_HEADER,
        Winding::CounterClockwise => CCW_HEADER,
        Winding::Indeterminate => return None,
    };
    let mut out = String::with_capacity(header.len() + 1 + lines.len() * 32);
    out.push_str(header);
    out.push('\n');
    let mut push = |l: &S| {
        out.push_str(l.as_ref());
        out.push('\n');
    };
    if winding == Winding::Clockwise {
        lines.iter().rev().for_each(&mut push);
    } else {
        lines.iter().for_each(&mut push);
    }
    Some(out)
}

/// Run the whole pipeline over the text of one file.
pub fn process_text(text: &str, cfg: &Config) -> Outcome {
    let winding = orientation(&load_points(text.lines()));

    let emitted = decimate(text.lines(), cfg.minimize);
    let mut precision_adjusted = false;
    let mut normalized: Vec<Cow<'_, str>> = Vec::with_capacity(emitted.records.len());
    for record in &emitted.records {
        let (line, adjusted) = normalize_line(record, cfg.precision);
        precision_adjusted |= adjusted;
        normalized.push(line);
    }

    let (unique, duplicates_removed) = dedup_global(normalized);
    let flags = PipelineFlags {
        duplicates_removed,
        precision_adjusted,
    };

    let rendered = render(winding, &unique[..]);
    let mut lines: Vec<String> = unique.into_iter().map(Cow::into_owned).collect();
    if winding == Winding::Clockwise {
        lines.reverse();
    }
    tracing::debug!(
        %winding,
        records = emitted.records.len(),
        retained = lines.len(),
        considered = emitted.considered,
        ?flags,
        "processed"
    );
    Outcome {
        winding,
        considered: emitted.considered,
        lines,
        rendered,
        flags,
    }
}
