//! Startup orchestration: initial load, idempotent seeding, migration.
//!
//! Collections are fetched one after another; nothing here depends on
//! fetch order, sequential is just the simplest correct thing.

use mostrador_core::{CashClosure, MenuItem, StoreConfig, Waiter, ids};
use serde_json::Value;
use tracing::{info, instrument, warn};

use crate::api::{ApiClient, Table};
use crate::error::ApiError;
use crate::state::AppState;

/// Fetch every collection into a fresh [`AppState`].
///
/// Required collections fail fast. The cash-closures collection predates
/// some deployments, so its absence or failure is downgraded to an empty
/// list. Config is a singleton: the first element of its collection, or
/// an empty object when there is none.
///
/// # Errors
///
/// Propagates the first [`ApiError::Fetch`] from a required collection.
#[instrument(skip(client))]
pub async fn load_initial_data(client: &ApiClient) -> Result<AppState, ApiError> {
    let menu_items = client.get_all(Table::MenuItems).await?;
    let orders = client.get_all(Table::Orders).await?;
    let transactions = client.get_all(Table::Transactions).await?;
    let waiters = client.get_all(Table::Waiters).await?;

    let cash_closures = match client.get_all(Table::CashClosures).await {
        Ok(cash_closures) => cash_closures,
        Err(err) => {
            warn!(error = %err, "cash closures unavailable, continuing with none");
            Vec::new()
        }
    };

    let config = client
        .get_all::<StoreConfig>(Table::Config)
        .await?
        .into_iter()
        .next()
        .unwrap_or_else(StoreConfig::empty);

    Ok(AppState {
        menu_items,
        orders,
        transactions,
        waiters,
        cash_closures,
        config,
        connected: true,
    })
}

/// Seed example data on a fresh backend and migrate legacy records
/// otherwise.
///
/// Safe to call on every startup: once the data is in shape, no write is
/// issued at all. The menu rewrite persists the full collection in one
/// bulk save, and only when at least one record changed.
///
/// # Errors
///
/// Propagates [`ApiError::Save`] when a seed or migration write fails
/// after exhausting its retries.
#[instrument(skip(client, state))]
pub async fn initialize_default_data(
    client: &ApiClient,
    state: &mut AppState,
) -> Result<(), ApiError> {
    if state.menu_items.is_empty() {
        let menu_items = default_menu_items();
        client.save(Table::MenuItems, &menu_items).await?;
        info!(count = menu_items.len(), "seeded example menu");
        state.menu_items = menu_items;
    } else {
        let mut changed = false;
        state.menu_items = std::mem::take(&mut state.menu_items)
            .into_iter()
            .map(|item| {
                let outcome = item.normalized();
                changed |= outcome.changed;
                outcome.item
            })
            .collect();

        if changed {
            client.save(Table::MenuItems, &state.menu_items).await?;
            info!(count = state.menu_items.len(), "rewrote menu after field migration");
        }
    }

    if state.waiters.is_empty() {
        let waiters = default_waiters();
        client.save(Table::Waiters, &waiters).await?;
        info!(count = waiters.len(), "seeded default waiters");
        state.waiters = waiters;
    }

    Ok(())
}

/// Passthrough fetch of the cash-closures collection.
///
/// # Errors
///
/// Returns [`ApiError::Fetch`] when the collection is unreachable.
#[instrument(skip(client))]
pub async fn load_cash_closures(client: &ApiClient) -> Result<Vec<CashClosure>, ApiError> {
    client.get_all(Table::CashClosures).await
}

/// Example menu installed on a fresh backend, already in canonical shape.
fn default_menu_items() -> Vec<MenuItem> {
    vec![
        menu_item(
            "Billetera de cuero",
            "Billetera artesanal cosida a mano",
            38_000,
            75_000,
            "Cuero",
        ),
        menu_item(
            "Cinturón de cuero",
            "Cinturón con hebilla metálica",
            30_000,
            62_000,
            "Cuero",
        ),
        menu_item(
            "Bolso tejido",
            "Bolso de trapillo en punto alto",
            26_000,
            58_000,
            "Tejidos Crochet",
        ),
        menu_item(
            "Amigurumi gato",
            "Figura tejida a crochet",
            12_000,
            28_000,
            "Tejidos Crochet",
        ),
    ]
}

fn menu_item(name: &str, description: &str, cost: i64, price: i64, category: &str) -> MenuItem {
    MenuItem {
        id: ids::generate_id(),
        name: name.to_string(),
        description: description.to_string(),
        cost: Some(cost),
        price,
        category: category.to_string(),
        image: None,
        images: Some(Value::Array(Vec::new())),
        available: true,
    }
}

/// Default floor staff for a fresh install.
fn default_waiters() -> Vec<Waiter> {
    vec![
        Waiter {
            id: ids::generate_id(),
            name: "Mariana".to_string(),
            active: true,
        },
        Waiter {
            id: ids::generate_id(),
            name: "Andrés".to_string(),
            active: true,
        },
    ]
}
