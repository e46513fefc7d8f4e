use jot_core::entities::Item;
use serde::Serialize;

/// An item after an edit, and whether the edit changed anything.
#[derive(Debug, Serialize)]
pub struct ItemChange {
    pub item: Item,
    pub changed: bool,
}
