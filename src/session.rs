//! Application state and pure transition methods.
//!
//! UI event handlers stay thin: they call one of these methods and then
//! render. Every edit re-assesses the full input; a regression out of the
//! complete state discards the one-shot disposition choice.

use anyhow::Result;

use crate::engine::ReviewEngine;
use crate::logstore::LogStore;
use crate::model::{Disposition, GateState, ReviewSnapshot};
use crate::report;

pub struct Session {
    engine: ReviewEngine,
    input: String,
    snapshot: ReviewSnapshot,
    disposition: Option<Disposition>,
    log: LogStore,
}

impl Session {
    pub fn new() -> Result<Self> {
        let engine = ReviewEngine::new()?;
        let snapshot = engine.assess("");
        Ok(Self {
            engine,
            input: String::new(),
            snapshot,
            disposition: None,
            log: LogStore::default(),
        })
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn snapshot(&self) -> &ReviewSnapshot {
        &self.snapshot
    }

    pub fn gate(&self) -> GateState {
        self.snapshot.gate()
    }

    pub fn disposition(&self) -> Option<Disposition> {
        self.disposition
    }

    pub fn log(&self) -> &LogStore {
        &self.log
    }

    /// Replace the whole input text (file preload, paste).
    pub fn set_input(&mut self, text: String) {
        self.input = text;
        self.reassess();
    }

    pub fn insert_char(&mut self, c: char) {
        self.input.push(c);
        self.reassess();
    }

    pub fn insert_newline(&mut self) {
        self.input.push('\n');
        self.reassess();
    }

    pub fn backspace(&mut self) {
        self.input.pop();
        self.reassess();
    }

    /// Reset the input and relock the output. The log history survives.
    pub fn clear_input(&mut self) {
        self.input.clear();
        self.reassess();
    }

    /// The current summary text: the report plus any chosen disposition.
    /// None while the gate is incomplete.
    pub fn summary(&self) -> Option<String> {
        report::render_report(&self.snapshot, self.disposition)
    }

    /// Record the Step 5 choice. One-shot per completion period: returns
    /// false when the gate is incomplete or a choice was already made.
    pub fn choose_disposition(&mut self, d: Disposition) -> bool {
        if !self.snapshot.is_complete() || self.disposition.is_some() {
            return false;
        }
        self.disposition = Some(d);
        true
    }

    /// Append the current summary to the log. No-op while locked; returns
    /// whether an entry was added.
    pub fn log_summary(&mut self) -> bool {
        match self.summary() {
            Some(text) => self.log.append(&text),
            None => false,
        }
    }

    fn reassess(&mut self) {
        self.snapshot = self.engine.assess(&self.input);
        // The disposition step only exists while all four steps are
        // complete; dropping out recreates it fresh next time.
        if !self.snapshot.is_complete() {
            self.disposition = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMPLETE_INPUT: &str = "Scenario: ATM Dispute\n\
        Pre Review Claim Status: Open\n\
        Customer called in to dispute transaction(s) as unauthorized\n\
        Claim Decision: Refund issued\n\
        Specific Action: Credited account";

    #[test]
    fn disposition_requires_complete_gate() {
        let mut session = Session::new().expect("session");
        session.set_input("Claim Decision: Deny".into());
        assert!(!session.choose_disposition(Disposition::CloseNow));
        assert_eq!(session.disposition(), None);
    }

    #[test]
    fn disposition_is_one_shot() {
        let mut session = Session::new().expect("session");
        session.set_input(COMPLETE_INPUT.into());
        assert!(session.choose_disposition(Disposition::CloseNow));
        assert!(!session.choose_disposition(Disposition::FinalizeByFrd));
        assert_eq!(session.disposition(), Some(Disposition::CloseNow));
        let summary = session.summary().expect("unlocked");
        assert!(summary.contains("Claim will now be closed."));
    }

    #[test]
    fn regression_discards_disposition() {
        let mut session = Session::new().expect("session");
        session.set_input(COMPLETE_INPUT.into());
        assert!(session.choose_disposition(Disposition::FinalizeByFrd));

        // Deleting characters breaks the last step and drops the choice.
        session.set_input(COMPLETE_INPUT.replace("Specific Action:", "Action:"));
        assert_eq!(session.disposition(), None);
        assert_eq!(session.summary(), None);

        // Returning to complete offers a fresh choice.
        session.set_input(COMPLETE_INPUT.into());
        assert_eq!(session.disposition(), None);
        assert!(session.choose_disposition(Disposition::CloseNow));
    }

    #[test]
    fn logging_locked_summary_is_noop() {
        let mut session = Session::new().expect("session");
        session.set_input("Scenario: Foo".into());
        assert!(!session.log_summary());
        assert!(session.log().is_empty());
    }

    #[test]
    fn clear_keeps_log_history() {
        let mut session = Session::new().expect("session");
        session.set_input(COMPLETE_INPUT.into());
        assert!(session.log_summary());
        session.clear_input();
        assert_eq!(session.input(), "");
        assert_eq!(session.summary(), None);
        assert_eq!(session.log().len(), 1);
    }
}
