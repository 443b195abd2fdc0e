use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Balance of the calling user's wallet.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct BalanceDto {
    pub balance: i64,
    /// Time of the last balance change; absent while the wallet has never been used.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Balance of a wallet looked up by Discord id.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct ServiceBalanceDto {
    pub discord_id: String,
    pub balance: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct LedgerEntryDto {
    pub id: i32,
    pub amount: i64,
    /// `DEPOSIT`, `WITHDRAW` or `TRANSFER`
    pub transaction_type: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct PaginatedLedgerEntriesDto {
    pub entries: Vec<LedgerEntryDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

/// Transfer initiated by a logged-in user.
///
/// Either `to_discord_id` or `to_username` must be provided; the Discord id wins
/// when both are.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct TransferDto {
    pub to_discord_id: Option<String>,
    pub to_username: Option<String>,
    pub amount: i64,
}

/// Deposit or withdrawal requested by the game server.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct ServiceAdjustDto {
    pub discord_id: String,
    pub amount: i64,
}

/// Transfer between two Discord-linked accounts requested by the game server.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct ServiceTransferDto {
    pub from_discord_id: String,
    pub to_discord_id: String,
    pub amount: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct NewBalanceDto {
    pub status: String,
    pub new_balance: i64,
}

impl NewBalanceDto {
    pub fn ok(new_balance: i64) -> Self {
        Self {
            status: "ok".to_string(),
            new_balance,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct LinkStatusDto {
    pub discord_id: String,
    pub exists: bool,
}
