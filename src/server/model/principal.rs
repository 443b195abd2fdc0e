//! Authenticated callers and the operations they may invoke.

/// Who is making a request.
///
/// Produced once per request by `AuthGuard` and passed explicitly to every bank
/// operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Principal {
    /// Logged-in end user with a linked Discord account.
    User(i32),
    /// The game server, authenticated with the shared API key. Acts only on
    /// accounts it names explicitly.
    Service,
}

/// Trust tier of a `Principal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    User,
    Service,
}

impl Principal {
    pub fn tier(&self) -> Tier {
        match self {
            Self::User(_) => Tier::User,
            Self::Service => Tier::Service,
        }
    }
}

/// Ledger operations exposed by the bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    GetBalance,
    ListTransactions,
    Deposit,
    Withdraw,
    TransferByUser,
    TransferByService,
    LinkStatus,
}

impl Operation {
    /// Tiers allowed to invoke this operation.
    pub fn allowed_tiers(&self) -> &'static [Tier] {
        match self {
            Self::GetBalance => &[Tier::User, Tier::Service],
            Self::ListTransactions | Self::TransferByUser => &[Tier::User],
            Self::Deposit | Self::Withdraw | Self::TransferByService | Self::LinkStatus => {
                &[Tier::Service]
            }
        }
    }
}
