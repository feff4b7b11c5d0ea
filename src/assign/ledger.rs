use std::collections::HashMap;

/// Hours accumulated per member during one assignment run.
///
/// Kept separate from `TeamMember` so assigning tasks never mutates the
/// roster. A ledger is created fresh per run and thrown away with it.
#[derive(Debug, Default)]
pub struct WorkloadLedger {
    hours: HashMap<String, f64>,
}

impl WorkloadLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hours(&self, member_name: &str) -> f64 {
        self.hours.get(member_name).copied().unwrap_or(0.0)
    }

    pub fn add(&mut self, member_name: &str, hours: f64) {
        *self.hours.entry(member_name.to_string()).or_insert(0.0) += hours;
    }
}
