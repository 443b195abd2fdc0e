//! Row factories for bank tests.
//!
//! Each table has a `*Factory` for overriding columns and a `create_*` shortcut that
//! inserts a row with defaults. `helpers` combines them, e.g. `create_funded_user`
//! inserts a user, their Discord link and a wallet holding the given balance.

pub mod helpers;
pub mod ledger_entry;
pub mod social_account;
pub mod user;
pub mod wallet;

pub use helpers::{create_funded_user, create_linked_user};
pub use social_account::create_discord_link;
pub use user::create_user;
pub use wallet::create_wallet;
