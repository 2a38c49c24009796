//! Fixed requirement-label sets per step and the missing-label computation.
//!
//! A label counts as satisfied when its text (minus any trailing `:`
//! qualifier) literally appears in the step payload. Containment is a plain
//! substring test: some labels (`Scenario`, `Dispute reason`) never appear in
//! their payloads and keep rendering as required even on a completed step.

use crate::model::Step;

const INITIAL_ASSESSMENT: [&str; 5] = [
    "Scenario",
    "Duplicate claim",
    "Merchant credit",
    "Customer withdrew claim",
    "Pre Review Claim Status",
];

const RELEVANT_FINDINGS: [&str; 11] = [
    "Dispute reason",
    "60 Day Liability",
    "Greater than two years",
    "Elderly abuse",
    "FPF indicator",
    "Customer since",
    "Open Date",
    "YTD",
    "NSF",
    "Date of Birth",
    "Claims filed in 12mos",
];

const CLAIM_DECISION: [&str; 1] = ["Claim Decision"];
const SPECIFIC_ACTION: [&str; 1] = ["Specific Action"];

pub(crate) fn labels(step: Step) -> &'static [&'static str] {
    match step {
        Step::InitialAssessment => &INITIAL_ASSESSMENT,
        Step::RelevantFindings => &RELEVANT_FINDINGS,
        Step::ClaimDecision => &CLAIM_DECISION,
        Step::SpecificAction => &SPECIFIC_ACTION,
    }
}

/// Labels not yet satisfied by the payload; all labels while it is empty.
pub(crate) fn missing(step: Step, payload: &str) -> Vec<String> {
    let labels = labels(step);
    if payload.is_empty() {
        return labels.iter().map(|l| l.to_string()).collect();
    }
    labels
        .iter()
        .copied()
        .filter(|&label| {
            let prefix = label.split(':').next().unwrap_or(label);
            !payload.contains(prefix)
        })
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_payload_requires_everything() {
        let m = missing(Step::InitialAssessment, "");
        assert_eq!(m.len(), INITIAL_ASSESSMENT.len());
        assert_eq!(m[0], "Scenario");
    }

    #[test]
    fn satisfied_labels_drop_out() {
        let payload = "Claim set up as Foo\n\
                       Duplicate claim: N\n\
                       Merchant credit: N\n\
                       Customer withdrew claim: N\n\
                       Pre Review Claim Status: Open";
        // "Scenario" never appears literally in the payload; the other four do.
        assert_eq!(missing(Step::InitialAssessment, payload), vec!["Scenario"]);
    }

    #[test]
    fn dispute_reason_label_never_satisfied() {
        let payload = "Customer called in to dispute transaction(s) as fraud\n\
                       60 Day Liability: N";
        let m = missing(Step::RelevantFindings, payload);
        assert!(m.contains(&"Dispute reason".to_string()));
        assert!(!m.contains(&"60 Day Liability".to_string()));
    }

    #[test]
    fn containment_is_case_sensitive() {
        // Fuzzy containment compares the literal label text.
        let m = missing(Step::ClaimDecision, "claim decision made");
        assert_eq!(m, vec!["Claim Decision"]);
    }
}
