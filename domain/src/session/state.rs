//! Session-scoped conversation and cost state

use super::entities::Message;
use crate::core::error::DomainError;
use rust_decimal::Decimal;

/// Mutable state for one interactive session (Entity)
///
/// Owns the ordered transcript and the ordered cost ledger. The transcript
/// starts with the seed system message; both sequences grow by append only.
/// No in-place mutation or per-entry deletion exists — the sole wholesale
/// mutation is [`reset`](SessionState::reset).
#[derive(Debug, Clone)]
pub struct SessionState {
    transcript: Vec<Message>,
    costs: Vec<Decimal>,
}

impl SessionState {
    /// Create a session seeded with a system message and an empty ledger.
    pub fn new(seed: Message) -> Self {
        Self {
            transcript: vec![seed],
            costs: Vec::new(),
        }
    }

    /// Reseed the transcript and empty the ledger. Always succeeds,
    /// regardless of prior state.
    pub fn reset(&mut self, seed: Message) {
        self.transcript.clear();
        self.transcript.push(seed);
        self.costs.clear();
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    pub fn costs(&self) -> &[Decimal] {
        &self.costs
    }

    /// Append one message to the transcript.
    ///
    /// Consecutive same-role messages are permitted; callers must not rely
    /// on strict role alternation.
    pub fn append_message(&mut self, message: Message) {
        self.transcript.push(message);
    }

    /// Append one per-call cost to the ledger.
    ///
    /// Negative amounts are rejected and leave the ledger unchanged.
    pub fn append_cost(&mut self, cost: Decimal) -> Result<(), DomainError> {
        if cost < Decimal::ZERO {
            return Err(DomainError::InvalidCost(cost));
        }
        self.costs.push(cost);
        Ok(())
    }

    /// Append a completed exchange: the new turns plus exactly one ledger
    /// entry. The cost is validated before the transcript is touched, so a
    /// rejected cost leaves both sequences unchanged.
    pub fn record_exchange(
        &mut self,
        messages: Vec<Message>,
        cost: Decimal,
    ) -> Result<(), DomainError> {
        if cost < Decimal::ZERO {
            return Err(DomainError::InvalidCost(cost));
        }
        self.transcript.extend(messages);
        self.costs.push(cost);
        Ok(())
    }

    /// Exact decimal sum of the ledger, zero when empty.
    pub fn total_cost(&self) -> Decimal {
        self.costs.iter().fold(Decimal::ZERO, |total, cost| total + *cost)
    }
}
