//! Entity structs for Jotter domain objects.
//!
//! `Item` maps to one row of the `items` table. `Subtask` values are stored
//! inside that row as a JSON array. All structs derive `Serialize`,
//! `Deserialize`, and `JsonSchema` for JSON output and schema validation.

mod item;
mod session;
mod subtask;

pub use item::Item;
pub use session::SessionContext;
pub use subtask::Subtask;
