/*!
 * Local persistence for mealmatch.
 *
 * SQLite-backed storage used by the translation cache and the daily menu.
 * The connection wrapper provides async-safe access via spawn_blocking;
 * the schema module owns table creation and versioning.
 */

pub mod connection;
pub mod schema;

pub use connection::{StoreConnection, StoreStats};
