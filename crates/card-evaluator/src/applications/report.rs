use chrono::{DateTime, Utc};
use serde::Serialize;

use super::evaluation::{ApplicationDecision, ApplicationEvaluator, EvaluationError};
use super::fraud::FraudLookup;
use super::intake::IntakeRecord;
use super::validator::FrequentFlyerNumberValidator;

#[derive(Debug, Clone, Serialize)]
pub struct BatchEntry {
    pub reference: String,
    pub decision: ApplicationDecision,
    pub decision_label: &'static str,
    pub rule_label: &'static str,
    pub rationale: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DecisionTally {
    pub decision: ApplicationDecision,
    pub decision_label: &'static str,
    pub count: usize,
}

/// Decisions for a batch of applications evaluated by one evaluator.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub evaluated_at: DateTime<Utc>,
    pub entries: Vec<BatchEntry>,
    pub tallies: Vec<DecisionTally>,
    pub lookups_performed: u64,
}

impl BatchReport {
    /// Evaluates records in order. The first evaluation error aborts the batch.
    pub fn build<V, F>(
        evaluator: &mut ApplicationEvaluator<V, F>,
        records: &[IntakeRecord],
    ) -> Result<Self, EvaluationError>
    where
        V: FrequentFlyerNumberValidator,
        F: FraudLookup,
    {
        let mut entries = Vec::with_capacity(records.len());
        for record in records {
            let outcome = evaluator.assess(&record.application)?;
            entries.push(BatchEntry {
                reference: record.reference.clone(),
                decision: outcome.decision,
                decision_label: outcome.decision.label(),
                rule_label: outcome.rule.label(),
                rationale: outcome.summary,
            });
        }

        let tallies = ApplicationDecision::ALL
            .into_iter()
            .map(|decision| DecisionTally {
                decision,
                decision_label: decision.label(),
                count: entries
                    .iter()
                    .filter(|entry| entry.decision == decision)
                    .count(),
            })
            .collect();

        Ok(Self {
            evaluated_at: Utc::now(),
            entries,
            tallies,
            lookups_performed: evaluator.lookup_count(),
        })
    }

    pub fn count(&self, decision: ApplicationDecision) -> usize {
        self.tallies
            .iter()
            .find(|tally| tally.decision == decision)
            .map(|tally| tally.count)
            .unwrap_or(0)
    }
}
