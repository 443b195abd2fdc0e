//! SeaORM entity definitions for the bank schema.

pub mod prelude;

pub mod ledger_entry;
pub mod social_account;
pub mod user;
pub mod wallet;
