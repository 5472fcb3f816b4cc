use ptsorient::api::{Outcome, Winding};
use serde::{Serialize, Serializer};
use std::path::Path;

fn winding_label<S: Serializer>(w: &Winding, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(w.label())
}

/// Per-file report printed on stdout, as text or JSON.
#[derive(Debug, Serialize)]
pub struct Summary {
    pub file: String,
    #[serde(serialize_with = "winding_label")]
    pub winding: Winding,
    /// Written artifact, absent when the winding is indeterminate.
    pub output: Option<String>,
    pub retained: usize,
    pub considered: usize,
    pub duplicates_removed: bool,
    pub precision_adjusted: bool,
    pub reversed: bool,
}

impl Summary {
    pub fn new(file: &str, outcome: &Outcome, output: Option<&Path>) -> Self {
        Self {
            file: file.to_string(),
            winding: outcome.winding,
            output: output.map(|p| p.to_string_lossy().into_owned()),
            retained: outcome.retained(),
            considered: outcome.considered,
            duplicates_removed: outcome.flags.duplicates_removed,
            precision_adjusted: outcome.flags.precision_adjusted,
            reversed: outcome.winding == Winding::Clockwise,
        }
    }

    /// ` >>     loop.txt - CW - 12/14 Points - Removing Duplicates, Reversing points`
    pub fn line(&self) -> String {
        let action = match self.winding {
            Winding::Clockwise => "Reversing points",
            Winding::CounterClockwise => "No reversal needed",
            Winding::Indeterminate => {
                return format!(" >>     {} - Direction is unknown. No Output file", self.file);
            }
        };
        let mut steps = String::new();
        if self.duplicates_removed {
            steps.push_str("Removing Duplicates, ");
        }
        if self.precision_adjusted {
            steps.push_str("Adjusting Precision, ");
        }
        format!(
            " >>     {} - {} - {}/{} Points - {}{}",
            self.file,
            self.winding.label(),
            self.retained,
            self.considered,
            steps,
            action
        )
    }

    pub fn json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
