mod extract;
mod requirements;

use anyhow::Result;

use crate::model::{ReviewSnapshot, Step, StepStatus};

/// Pure assessment engine: compiled extraction rules, no state.
pub struct ReviewEngine {
    rules: extract::ExtractRules,
}

impl ReviewEngine {
    pub fn new() -> Result<Self> {
        Ok(Self {
            rules: extract::ExtractRules::compile()?,
        })
    }

    /// Assess the full input text. Pure and idempotent; every caller runs
    /// this on each input change, with no caching in between.
    pub fn assess(&self, input: &str) -> ReviewSnapshot {
        let steps = Step::ALL
            .iter()
            .map(|&step| {
                let payload = extract::step_payload(&self.rules, step, input);
                let missing = requirements::missing(step, &payload);
                StepStatus {
                    step,
                    payload,
                    missing,
                }
            })
            .collect();
        ReviewSnapshot { steps }
    }
}
