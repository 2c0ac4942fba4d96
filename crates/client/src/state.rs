//! Snapshot of the backend collections.

use mostrador_core::{CashClosure, MenuItem, Order, StoreConfig, Transaction, Waiter};

/// The latest wholesale snapshot of every backend collection, plus the
/// connectivity flag the platform layer toggles.
///
/// Owned and passed explicitly through callers - there is no process-wide
/// singleton. The backend stays authoritative: refreshes replace whole
/// collections, they never merge.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub menu_items: Vec<MenuItem>,
    pub orders: Vec<Order>,
    pub transactions: Vec<Transaction>,
    pub waiters: Vec<Waiter>,
    pub cash_closures: Vec<CashClosure>,
    pub config: StoreConfig,
    /// Last connectivity notification from the platform. Informational
    /// only: in-flight requests are never aborted or queued on change.
    pub connected: bool,
}

impl AppState {
    /// Record a platform connectivity notification.
    pub fn set_connected(&mut self, connected: bool) {
        if self.connected != connected {
            tracing::info!(connected, "connectivity changed");
        }
        self.connected = connected;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty_and_offline() {
        let state = AppState::default();
        assert!(state.menu_items.is_empty());
        assert!(!state.connected);
        assert_eq!(state.config, StoreConfig::empty());
    }

    #[test]
    fn test_connectivity_flag_toggles() {
        let mut state = AppState::default();
        state.set_connected(true);
        assert!(state.connected);
        state.set_connected(false);
        assert!(!state.connected);
    }
}
