use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A ledger row carries a kind this build does not know about.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Unknown ledger entry kind '{kind}' on entry {entry_id}")]
    UnknownEntryKind {
        /// Id of the offending ledger entry
        entry_id: i32,
        /// The stored kind value
        kind: String,
    },

    /// A wallet expected to exist (just created, or about to be updated) is missing.
    #[error("Wallet for user {0} is missing")]
    WalletMissing(i32),
}
