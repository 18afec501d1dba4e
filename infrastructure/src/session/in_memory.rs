//! In-memory session registry
//!
//! Process-local storage keyed by session id. Nothing survives a restart;
//! the store's lifecycle is the interactive session's lifecycle.

use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use yoyaku_domain::{DomainError, Message, SessionRegistry, SessionState};

/// Registry holding one independent [`SessionState`] per session id.
///
/// The map-level lock is held only for the duration of a single operation.
/// Access within one session is strictly sequential, so this is enough for
/// the per-call atomicity the registry contract requires.
#[derive(Default)]
pub struct InMemorySessionRegistry {
    sessions: RwLock<HashMap<String, SessionState>>,
}

impl InMemorySessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    // Poisoning can only happen if a panic unwound mid-operation; the state
    // is still structurally valid, so recover rather than propagate.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, SessionState>> {
        self.sessions.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, SessionState>> {
        self.sessions.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl SessionRegistry for InMemorySessionRegistry {
    fn initialize(&self, session_id: &str, seed: Message) {
        self.write()
            .entry(session_id.to_string())
            .or_insert_with(|| SessionState::new(seed));
    }

    fn reset(&self, session_id: &str, seed: Message) {
        let mut sessions = self.write();
        match sessions.get_mut(session_id) {
            Some(state) => state.reset(seed),
            None => {
                sessions.insert(session_id.to_string(), SessionState::new(seed));
            }
        }
    }

    fn record_exchange(
        &self,
        session_id: &str,
        messages: Vec<Message>,
        cost: Decimal,
    ) -> Result<(), DomainError> {
        let mut sessions = self.write();
        let state = sessions
            .get_mut(session_id)
            .ok_or_else(|| DomainError::UnknownSession(session_id.to_string()))?;
        state.record_exchange(messages, cost)
    }

    fn transcript(&self, session_id: &str) -> Vec<Message> {
        self.read()
            .get(session_id)
            .map(|state| state.transcript().to_vec())
            .unwrap_or_default()
    }

    fn costs(&self, session_id: &str) -> Vec<Decimal> {
        self.read()
            .get(session_id)
            .map(|state| state.costs().to_vec())
            .unwrap_or_default()
    }

    fn total_cost(&self, session_id: &str) -> Decimal {
        self.read()
            .get(session_id)
            .map(|state| state.total_cost())
            .unwrap_or(Decimal::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_initialize_is_idempotent() {
        let registry = InMemorySessionRegistry::new();
        registry.initialize("a", Message::system("first"));
        registry
            .record_exchange("a", vec![Message::user("u")], dec!(0.001))
            .unwrap();

        // Second initialize must not reseed
        registry.initialize("a", Message::system("second"));
        assert_eq!(registry.transcript("a").len(), 2);
        assert_eq!(registry.transcript("a")[0], Message::system("first"));
        assert_eq!(registry.costs("a"), vec![dec!(0.001)]);
    }

    #[test]
    fn test_reset_reseeds_regardless_of_prior_state() {
        let registry = InMemorySessionRegistry::new();
        registry.initialize("a", Message::system("seed"));
        for _ in 0..5 {
            registry
                .record_exchange(
                    "a",
                    vec![Message::user("u"), Message::assistant("v")],
                    dec!(0.01),
                )
                .unwrap();
        }

        registry.reset("a", Message::system("fresh"));
        assert_eq!(registry.transcript("a"), vec![Message::system("fresh")]);
        assert!(registry.costs("a").is_empty());
    }

    #[test]
    fn test_reset_creates_missing_session() {
        let registry = InMemorySessionRegistry::new();
        registry.reset("new", Message::system("seed"));
        assert_eq!(registry.transcript("new").len(), 1);
    }

    #[test]
    fn test_sessions_are_isolated() {
        let registry = InMemorySessionRegistry::new();
        registry.initialize("a", Message::system("seed"));
        registry.initialize("b", Message::system("seed"));

        registry
            .record_exchange("a", vec![Message::user("only in a")], dec!(0.5))
            .unwrap();

        assert_eq!(registry.transcript("a").len(), 2);
        assert_eq!(registry.transcript("b").len(), 1);
        assert_eq!(registry.total_cost("a"), dec!(0.5));
        assert_eq!(registry.total_cost("b"), Decimal::ZERO);
    }

    #[test]
    fn test_record_on_unknown_session_fails() {
        let registry = InMemorySessionRegistry::new();
        let result = registry.record_exchange("ghost", vec![Message::user("u")], dec!(0.1));
        assert!(matches!(result, Err(DomainError::UnknownSession(_))));
    }

    #[test]
    fn test_unknown_session_reads_are_empty() {
        let registry = InMemorySessionRegistry::new();
        assert!(registry.transcript("ghost").is_empty());
        assert!(registry.costs("ghost").is_empty());
        assert_eq!(registry.total_cost("ghost"), Decimal::ZERO);
    }

    #[test]
    fn test_negative_cost_rejected_through_registry() {
        let registry = InMemorySessionRegistry::new();
        registry.initialize("a", Message::system("seed"));
        let result = registry.record_exchange("a", vec![Message::user("u")], dec!(-0.001));
        assert!(matches!(result, Err(DomainError::InvalidCost(_))));
        assert_eq!(registry.transcript("a").len(), 1);
        assert!(registry.costs("a").is_empty());
    }
}
