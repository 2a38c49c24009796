//! Field extraction for the four report steps.
//!
//! All rules are compiled once and run case-insensitively. Line fields are
//! anchored to a single input line; value fields capture the first
//! non-whitespace token after the label. First match wins throughout.

use anyhow::{Context, Result};
use regex::{Regex, RegexBuilder};

use crate::model::Step;

/// A labelled `<label>: <token>` field rule.
struct FieldRule {
    label: &'static str,
    re: Regex,
}

pub(crate) struct ExtractRules {
    scenario: Regex,
    pre_review_status: Regex,
    assessment_flags: Vec<FieldRule>,
    dispute_reason: Regex,
    findings_flags: Vec<FieldRule>,
    findings_fields: Vec<FieldRule>,
    claim_decision: Regex,
    specific_action: Regex,
}

const ASSESSMENT_FLAGS: [&str; 3] = ["Duplicate claim", "Merchant credit", "Customer withdrew claim"];
const FINDINGS_FLAGS: [&str; 4] = [
    "60 Day Liability",
    "Greater than two years",
    "Elderly abuse",
    "FPF indicator",
];
const FINDINGS_FIELDS: [&str; 6] = [
    "Customer since",
    "Open Date",
    "YTD",
    "NSF",
    "Date of Birth",
    "Claims filed in 12mos",
];

/// Compile a case-insensitive rule matching `<label>: <rest of line>`.
fn line_rule(label: &str) -> Result<Regex> {
    let pattern = format!(r"^\s*{}\s*:(.+)$", regex::escape(label));
    RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .multi_line(true)
        .build()
        .with_context(|| format!("compile line rule for {:?}", label))
}

/// Compile a case-insensitive rule capturing the first token after `<label>:`.
fn field_rule(label: &'static str) -> Result<FieldRule> {
    let pattern = format!(r"{}\s*:\s*(\S+)", regex::escape(label));
    let re = RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .with_context(|| format!("compile field rule for {:?}", label))?;
    Ok(FieldRule { label, re })
}

fn field_rules(labels: &[&'static str]) -> Result<Vec<FieldRule>> {
    labels.iter().map(|&l| field_rule(l)).collect()
}

impl ExtractRules {
    pub(crate) fn compile() -> Result<Self> {
        Ok(Self {
            scenario: line_rule("Scenario")?,
            pre_review_status: line_rule("Pre Review Claim Status")?,
            assessment_flags: field_rules(&ASSESSMENT_FLAGS)?,
            dispute_reason: dispute_reason_rule()?,
            findings_flags: field_rules(&FINDINGS_FLAGS)?,
            findings_fields: field_rules(&FINDINGS_FIELDS)?,
            claim_decision: line_rule("Claim Decision")?,
            specific_action: line_rule("Specific Action")?,
        })
    }
}

/// The Step 2 anchor is a sentence rather than a `label:` pair, so it gets
/// its own pattern: the `(s)` is literal and the reason follows `as`.
fn dispute_reason_rule() -> Result<Regex> {
    RegexBuilder::new(r"^\s*Customer called in to dispute transaction\(s\) as\s+(.+)$")
        .case_insensitive(true)
        .multi_line(true)
        .build()
        .context("compile dispute reason rule")
}

/// First-match capture of a line rule, trimmed; None when absent or blank.
fn line_value(re: &Regex, input: &str) -> Option<String> {
    re.captures(input)
        .map(|c| c[1].trim().to_string())
        .filter(|v| !v.is_empty())
}

/// First-match token for a field rule; empty string when absent.
fn field_value(rule: &FieldRule, input: &str) -> String {
    rule.re
        .captures(input)
        .map(|c| c[1].to_string())
        .unwrap_or_default()
}

/// Y iff the field is present and its token is exactly `Y` (any case).
fn flag_value(rule: &FieldRule, input: &str) -> &'static str {
    if field_value(rule, input).eq_ignore_ascii_case("y") {
        "Y"
    } else {
        "N"
    }
}

/// Run the extractor for one step. Empty string means "not started".
pub(crate) fn step_payload(rules: &ExtractRules, step: Step, input: &str) -> String {
    match step {
        Step::InitialAssessment => initial_assessment(rules, input),
        Step::RelevantFindings => relevant_findings(rules, input),
        Step::ClaimDecision => line_value(&rules.claim_decision, input).unwrap_or_default(),
        Step::SpecificAction => line_value(&rules.specific_action, input).unwrap_or_default(),
    }
}

/// Step 1 needs both the scenario and the pre-review status before any
/// payload is produced; the three flags default to N.
fn initial_assessment(rules: &ExtractRules, input: &str) -> String {
    let scenario = line_value(&rules.scenario, input);
    let status = line_value(&rules.pre_review_status, input);
    let (Some(scenario), Some(status)) = (scenario, status) else {
        return String::new();
    };

    let mut lines = vec![format!("Claim set up as {}", scenario)];
    for rule in &rules.assessment_flags {
        lines.push(format!("{}: {}", rule.label, flag_value(rule, input)));
    }
    lines.push(format!("Pre Review Claim Status: {}", status));
    lines.join("\n")
}

/// Step 2 is anchored on the dispute sentence; flags default to N and value
/// fields to the empty string when absent.
fn relevant_findings(rules: &ExtractRules, input: &str) -> String {
    let Some(reason) = line_value(&rules.dispute_reason, input) else {
        return String::new();
    };

    let mut lines = vec![format!(
        "Customer called in to dispute transaction(s) as {}",
        reason
    )];
    for rule in &rules.findings_flags {
        lines.push(format!("{}: {}", rule.label, flag_value(rule, input)));
    }
    for rule in &rules.findings_fields {
        lines.push(format!("{}: {}", rule.label, field_value(rule, input)));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> ExtractRules {
        ExtractRules::compile().expect("static rules compile")
    }

    #[test]
    fn assessment_requires_both_anchors() {
        let r = rules();
        assert_eq!(
            step_payload(&r, Step::InitialAssessment, "Scenario: ATM Dispute"),
            ""
        );
        assert_eq!(
            step_payload(&r, Step::InitialAssessment, "Pre Review Claim Status: Open"),
            ""
        );
        assert_eq!(step_payload(&r, Step::InitialAssessment, ""), "");
    }

    #[test]
    fn assessment_flags_default_to_n() {
        let r = rules();
        let payload = step_payload(
            &r,
            Step::InitialAssessment,
            "Scenario: Foo\nPre Review Claim Status: Bar",
        );
        assert_eq!(
            payload,
            "Claim set up as Foo\n\
             Duplicate claim: N\n\
             Merchant credit: N\n\
             Customer withdrew claim: N\n\
             Pre Review Claim Status: Bar"
        );
    }

    #[test]
    fn assessment_flags_are_case_insensitive_and_exact() {
        let r = rules();
        let payload = step_payload(
            &r,
            Step::InitialAssessment,
            "scenario: Foo\nduplicate claim: y\nMerchant credit: Yes\npre review claim status: Open",
        );
        assert!(payload.contains("Duplicate claim: Y"));
        // "Yes" is not exactly Y.
        assert!(payload.contains("Merchant credit: N"));
    }

    #[test]
    fn findings_requires_dispute_anchor() {
        let r = rules();
        // Sub-fields alone do not start the step.
        let input = "60 Day Liability: Y\nCustomer since: 2019\nYTD: 120.50";
        assert_eq!(step_payload(&r, Step::RelevantFindings, input), "");
    }

    #[test]
    fn findings_captures_flags_and_fields() {
        let r = rules();
        let input = "Customer called in to dispute transaction(s) as unauthorized\n\
                     Elderly abuse: Y\n\
                     Customer since: 2019\n\
                     Claims filed in 12mos: 2";
        let payload = step_payload(&r, Step::RelevantFindings, input);
        assert!(payload.starts_with("Customer called in to dispute transaction(s) as unauthorized"));
        assert!(payload.contains("60 Day Liability: N"));
        assert!(payload.contains("Elderly abuse: Y"));
        assert!(payload.contains("Customer since: 2019"));
        assert!(payload.contains("Claims filed in 12mos: 2"));
        // Absent value fields render as empty.
        assert!(payload.contains("Open Date: \n"));
    }

    #[test]
    fn decision_payload_is_trimmed_remainder() {
        let r = rules();
        assert_eq!(
            step_payload(&r, Step::ClaimDecision, "Claim Decision:   Approve refund  "),
            "Approve refund"
        );
        // No space after the colon is fine.
        assert_eq!(
            step_payload(&r, Step::ClaimDecision, "claim decision:Deny"),
            "Deny"
        );
        // Whitespace-only remainder leaves the step incomplete.
        assert_eq!(step_payload(&r, Step::ClaimDecision, "Claim Decision:   "), "");
        assert_eq!(step_payload(&r, Step::ClaimDecision, "nothing here"), "");
    }

    #[test]
    fn action_payload_is_trimmed_remainder() {
        let r = rules();
        assert_eq!(
            step_payload(&r, Step::SpecificAction, "Specific Action: Credited account"),
            "Credited account"
        );
    }

    #[test]
    fn first_match_wins() {
        let r = rules();
        let input = "Claim Decision: first\nClaim Decision: second";
        assert_eq!(step_payload(&r, Step::ClaimDecision, input), "first");
    }

    #[test]
    fn extraction_is_idempotent() {
        let r = rules();
        let input = "Scenario: ATM Dispute\nPre Review Claim Status: Open\nDuplicate claim: Y";
        let a = step_payload(&r, Step::InitialAssessment, input);
        let b = step_payload(&r, Step::InitialAssessment, input);
        assert_eq!(a, b);
    }
}
