//! Entity records mirrored from the backend.
//!
//! Every record here is a wholesale mirror of server-side state; nothing
//! is owned exclusively by this layer. Menu items carry their own
//! field-level migration; the remaining collections are opaque.

mod menu_item;
mod records;
mod waiter;

pub use menu_item::{MenuItem, Normalization};
pub use records::{CashClosure, Order, StoreConfig, Transaction};
pub use waiter::Waiter;
