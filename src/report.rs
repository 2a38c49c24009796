//! Report assembly and plain-text rendering helpers.
//!
//! This module turns a snapshot into the human-readable multi-section report
//! and formats the per-step hint lines shared by the TUI and text mode.

use time::OffsetDateTime;

use crate::model::{Disposition, ReviewSnapshot, DISPOSITION_HEADING};

/// Assemble the combined report: all four payloads under their headings,
/// plus the disposition section once one has been chosen. None while any
/// step is incomplete — the output stays locked.
pub fn render_report(snapshot: &ReviewSnapshot, disposition: Option<Disposition>) -> Option<String> {
    if !snapshot.is_complete() {
        return None;
    }

    let mut sections: Vec<String> = snapshot
        .steps
        .iter()
        .map(|s| format!("{}\n{}", s.step.heading(), s.payload))
        .collect();
    if let Some(d) = disposition {
        sections.push(format!("{}\n{}", DISPOSITION_HEADING, d.sentence()));
    }
    Some(sections.join("\n\n"))
}

/// "Required: …" hint for a step, or None once every label is satisfied.
pub fn requirements_hint(missing: &[String]) -> Option<String> {
    if missing.is_empty() {
        return None;
    }
    Some(format!("Required: {}", missing.join(", ")))
}

/// Default filename for a saved report, stamped with the current UTC time.
pub fn save_file_name() -> String {
    let stamp = OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "now".into());
    format!(
        "claim-review-{}.txt",
        stamp.replace(':', "-").replace('T', "_")
    )
}
