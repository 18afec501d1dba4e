//! Session registry trait

use super::entities::Message;
use crate::core::error::DomainError;
use rust_decimal::Decimal;

/// Keyed access to per-session state
///
/// Each interactive session owns an independent transcript and ledger;
/// implementations must isolate sessions by id rather than sharing a single
/// process-wide store. Access within one session is strictly sequential
/// (one request completes before the next is issued), so implementations
/// only need per-operation atomicity. The in-memory implementation lives in
/// the infrastructure layer.
pub trait SessionRegistry: Send + Sync {
    /// Seed a session with a system message if it does not exist yet.
    /// Idempotent: calling again for a known session is a no-op.
    fn initialize(&self, session_id: &str, seed: Message);

    /// Unconditionally reseed the session's transcript and empty its
    /// ledger. Creates the session when it does not exist.
    fn reset(&self, session_id: &str, seed: Message);

    /// Atomically append a completed exchange (new turns plus exactly one
    /// ledger entry). Fails without any mutation when the cost is negative
    /// or the session is unknown.
    fn record_exchange(
        &self,
        session_id: &str,
        messages: Vec<Message>,
        cost: Decimal,
    ) -> Result<(), DomainError>;

    /// Snapshot of the transcript in chronological order; empty for an
    /// unknown session.
    fn transcript(&self, session_id: &str) -> Vec<Message>;

    /// Snapshot of the cost ledger in call-completion order; empty for an
    /// unknown session.
    fn costs(&self, session_id: &str) -> Vec<Decimal>;

    /// Exact decimal sum of the ledger, zero for an unknown session.
    fn total_cost(&self, session_id: &str) -> Decimal;
}
