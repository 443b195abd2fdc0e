pub use super::ledger_entry::Entity as LedgerEntry;
pub use super::social_account::Entity as SocialAccount;
pub use super::user::Entity as User;
pub use super::wallet::Entity as Wallet;
