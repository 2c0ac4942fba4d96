//! Menu item records and their field-level migration.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

/// Legacy category labels mapped to their canonical names.
const CATEGORY_RENAMES: &[(&str, &str)] = &[("Cuero Artesanal", "Cuero")];

/// Categories mentioning trapillo (any casing) collapse into this one.
const TRAPILLO_CANONICAL: &str = "Tejidos Crochet";

/// A sellable item on the menu.
///
/// The optional fields reflect record shapes still present on the backend:
/// records created before cost tracking have no `cost`, and older records
/// carry a single `image` instead of an `images` list. [`MenuItem::normalized`]
/// brings any record up to the current shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Missing on pre-cost-tracking records; migration defaults it to 0.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<i64>,
    pub price: i64,
    pub category: String,
    /// Legacy single-image field, folded into `images` by migration and
    /// never written back.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Lenient on input: the backend has been seen holding non-array
    /// values here. Migration guarantees an array of strings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Value>,
    #[serde(default = "default_available")]
    pub available: bool,
}

const fn default_available() -> bool {
    true
}

/// Result of running the field-level migration over one record.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalization {
    /// The record in its current canonical shape.
    pub item: MenuItem,
    /// Whether migration had to touch anything.
    pub changed: bool,
}

impl MenuItem {
    /// Field-level migration to the current record shape.
    ///
    /// Defaults a missing `cost` to 0, folds the legacy `image` field into
    /// `images`, forces `images` into a well-formed list of strings, and
    /// renames legacy category labels. Pure and idempotent: a normalized
    /// record comes back with `changed == false`.
    #[must_use]
    pub fn normalized(self) -> Normalization {
        let mut item = self;
        let mut changed = false;

        if item.cost.is_none() {
            item.cost = Some(0);
            changed = true;
        }

        // Fold the legacy single-image field into the list. When both are
        // present the list wins; the legacy field is dropped either way.
        if let Some(image) = item.image.take() {
            if item.images.is_none() {
                item.images = Some(Value::Array(vec![Value::String(image)]));
            }
            changed = true;
        }

        let entries = match item.images.take() {
            Some(Value::Array(entries)) => {
                let strings: Vec<Value> =
                    entries.iter().filter(|entry| entry.is_string()).cloned().collect();
                if strings.len() != entries.len() {
                    warn!(id = %item.id, "dropped non-string entries from images list");
                    changed = true;
                }
                strings
            }
            Some(other) => {
                // Resetting discards whatever was stored; leave a trace of it.
                warn!(id = %item.id, discarded = %other, "non-array images value reset to empty list");
                changed = true;
                Vec::new()
            }
            None => {
                changed = true;
                Vec::new()
            }
        };
        item.images = Some(Value::Array(entries));

        if let Some(canonical) = canonical_category(&item.category) {
            item.category = canonical.to_string();
            changed = true;
        }

        Normalization { item, changed }
    }
}

/// The canonical name a legacy category must be renamed to, if any.
fn canonical_category(category: &str) -> Option<&'static str> {
    if category.to_lowercase().contains("trapillo") {
        return Some(TRAPILLO_CANONICAL);
    }
    CATEGORY_RENAMES
        .iter()
        .find(|(legacy, _)| *legacy == category)
        .map(|(_, canonical)| *canonical)
}
