use serde::{Deserialize, Serialize};

/// One of the four derived sections of the claim-review report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Step {
    InitialAssessment,
    RelevantFindings,
    ClaimDecision,
    SpecificAction,
}

impl Step {
    pub const ALL: [Step; 4] = [
        Step::InitialAssessment,
        Step::RelevantFindings,
        Step::ClaimDecision,
        Step::SpecificAction,
    ];

    /// Section heading used in step panels and in the assembled report.
    pub fn heading(self) -> &'static str {
        match self {
            Step::InitialAssessment => "Step 1: Initial Assessment",
            Step::RelevantFindings => "Step 2: Relevant Findings in Research",
            Step::ClaimDecision => "Step 3: Claim Decision",
            Step::SpecificAction => "Step 4: Specific Action Taken to Resolve Claim",
        }
    }
}

/// Heading for the manually resolved disposition section.
pub const DISPOSITION_HEADING: &str = "Step 5: Next Steps in Claim Review Process";

/// Derived state of a single step for the current input text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepStatus {
    pub step: Step,
    /// Formatted payload; empty means the step has not been started.
    pub payload: String,
    /// Requirement labels not yet found in the payload (all labels while the
    /// payload is empty).
    pub missing: Vec<String>,
}

impl StepStatus {
    pub fn complete(&self) -> bool {
        !self.payload.is_empty()
    }
}

/// Completion gate state, recomputed on every input change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GateState {
    /// n of 4 steps have a non-empty payload.
    Incomplete(usize),
    Complete,
}

/// Full assessment of one input text: the four step statuses plus the gate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewSnapshot {
    pub steps: Vec<StepStatus>,
}

impl ReviewSnapshot {
    pub fn completed_steps(&self) -> usize {
        self.steps.iter().filter(|s| s.complete()).count()
    }

    pub fn gate(&self) -> GateState {
        let n = self.completed_steps();
        if n == Step::ALL.len() {
            GateState::Complete
        } else {
            GateState::Incomplete(n)
        }
    }

    pub fn is_complete(&self) -> bool {
        self.gate() == GateState::Complete
    }
}

/// The two mutually exclusive Step 5 choices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Disposition {
    CloseNow,
    FinalizeByFrd,
}

impl Disposition {
    /// The literal sentence recorded in the report.
    pub fn sentence(self) -> &'static str {
        match self {
            Disposition::CloseNow => "Claim will now be closed.",
            Disposition::FinalizeByFrd => "Claim will be finalized on or before FRD.",
        }
    }
}

/// Status-line text for the current gate state.
pub fn gate_status(gate: GateState) -> String {
    match gate {
        GateState::Complete => "Analysis complete! Insights ready for exploration.".to_string(),
        GateState::Incomplete(n) => {
            format!("Processing Step {} of 4. Keep refining your input!", n)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(step: Step, payload: &str) -> StepStatus {
        StepStatus {
            step,
            payload: payload.to_string(),
            missing: Vec::new(),
        }
    }

    #[test]
    fn gate_counts_nonempty_payloads() {
        let snap = ReviewSnapshot {
            steps: vec![
                status(Step::InitialAssessment, "a"),
                status(Step::RelevantFindings, ""),
                status(Step::ClaimDecision, "c"),
                status(Step::SpecificAction, ""),
            ],
        };
        assert_eq!(snap.gate(), GateState::Incomplete(2));
        assert!(!snap.is_complete());
    }

    #[test]
    fn gate_complete_at_four() {
        let snap = ReviewSnapshot {
            steps: Step::ALL.iter().map(|&s| status(s, "x")).collect(),
        };
        assert_eq!(snap.gate(), GateState::Complete);
        assert!(snap.is_complete());
    }

    #[test]
    fn gate_status_text() {
        assert_eq!(
            gate_status(GateState::Incomplete(3)),
            "Processing Step 3 of 4. Keep refining your input!"
        );
        assert!(gate_status(GateState::Complete).starts_with("Analysis complete!"));
    }
}
