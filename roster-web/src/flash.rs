//! One-shot alert hand-off across redirects.
//!
//! A handler that redirects after a mutation stores its alerts under a
//! fresh token and puts the token in the redirect URL. The next page load
//! takes (and removes) them.

use std::{
    collections::HashMap,
    sync::RwLock,
    time::{Duration, Instant},
};

use roster_core::Alert;
use uuid::Uuid;

/// Tokens that were never redeemed are dropped after this long.
pub const FLASH_TTL: Duration = Duration::from_secs(300);

/// Upper bound on unredeemed tokens; the oldest is evicted past it.
pub const FLASH_CAPACITY: usize = 1024;

#[derive(Debug)]
struct FlashEntry {
    alerts: Vec<Alert>,
    created_at: Instant,
}

/// Thread-safe registry of pending alerts keyed by flash token.
#[derive(Debug)]
pub struct AlertStore {
    entries: RwLock<HashMap<Uuid, FlashEntry>>,
    ttl: Duration,
    capacity: usize,
}

impl AlertStore {
    /// Create an empty store with the default TTL.
    #[must_use]
    pub fn new() -> Self {
        Self::with_ttl(FLASH_TTL)
    }

    /// Create an empty store whose entries expire after `ttl`.
    #[must_use]
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
            capacity: FLASH_CAPACITY,
        }
    }

    /// Replace the bound on unredeemed tokens (at least one is kept).
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity.max(1);
        self
    }

    /// Store `alerts` and return the token that redeems them.
    ///
    /// Expired entries are pruned first. When the store is full the oldest
    /// pending entry is evicted.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned (a previous thread panicked
    /// while holding the write lock).
    pub fn push(&self, alerts: Vec<Alert>) -> Uuid {
        let id = Uuid::new_v4();
        let ttl = self.ttl;
        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        let mut entries = self.entries.write().expect("alert store write lock poisoned");
        entries.retain(|_, entry| entry.created_at.elapsed() < ttl);
        while entries.len() >= self.capacity {
            let oldest = entries
                .iter()
                .min_by_key(|(_, entry)| entry.created_at)
                .map(|(token, _)| *token);
            match oldest {
                Some(token) => {
                    entries.remove(&token);
                    tracing::debug!(%token, "alert store full, evicted oldest entry");
                }
                None => break,
            }
        }
        entries.insert(id, FlashEntry { alerts, created_at: Instant::now() });
        id
    }

    /// Remove and return the alerts stored under `id`.
    ///
    /// Unknown or expired tokens yield no alerts.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    pub fn take(&self, id: Uuid) -> Vec<Alert> {
        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        let entry = self
            .entries
            .write()
            .expect("alert store write lock poisoned")
            .remove(&id);
        match entry {
            Some(entry) if entry.created_at.elapsed() < self.ttl => entry.alerts,
            _ => Vec::new(),
        }
    }

    /// Number of tokens not yet redeemed.
    ///
    /// # Panics
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn pending(&self) -> usize {
        #[expect(clippy::expect_used, reason = "lock poisoning is unrecoverable")]
        let entries = self.entries.read().expect("alert store read lock poisoned");
        entries.len()
    }
}

impl Default for AlertStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_store_push_and_take_lifecycle() {
        let store = AlertStore::new();
        let id = store.push(vec![Alert::success("Aluno cadastrado com sucesso.")]);
        assert_eq!(store.pending(), 1);

        let alerts = store.take(id);
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].message, "Aluno cadastrado com sucesso.");

        assert!(store.take(id).is_empty(), "a token can only be redeemed once");
        assert_eq!(store.pending(), 0);
    }

    #[test]
    fn alert_store_unknown_token_yields_nothing() {
        let store = AlertStore::new();
        assert!(store.take(Uuid::new_v4()).is_empty());
    }

    #[test]
    fn alert_store_expired_entries_are_pruned_and_not_returned() {
        let store = AlertStore::with_ttl(Duration::ZERO);
        let stale = store.push(vec![Alert::danger("old")]);
        assert!(store.take(stale).is_empty(), "expired token must not yield alerts");

        store.push(vec![Alert::danger("a")]);
        store.push(vec![Alert::danger("b")]);
        assert_eq!(store.pending(), 1, "push must prune entries older than the TTL");
    }

    #[test]
    fn alert_store_is_bounded_and_evicts_oldest() {
        let store = AlertStore::new().with_capacity(2);
        let first = store.push(vec![Alert::danger("1")]);
        std::thread::sleep(Duration::from_millis(2));
        let second = store.push(vec![Alert::danger("2")]);
        std::thread::sleep(Duration::from_millis(2));
        let third = store.push(vec![Alert::danger("3")]);

        assert_eq!(store.pending(), 2);
        assert!(store.take(first).is_empty(), "oldest entry must be evicted");
        assert_eq!(store.take(second)[0].message, "2");
        assert_eq!(store.take(third)[0].message, "3");
    }

    #[test]
    fn alert_store_default_capacity_holds_under_flood() {
        let store = AlertStore::new();
        for _ in 0..FLASH_CAPACITY + 50 {
            store.push(vec![Alert::danger("Erro ao excluir aluno: Erro 404 - Not Found")]);
        }
        assert_eq!(store.pending(), FLASH_CAPACITY);
    }
}
