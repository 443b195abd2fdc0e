use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        bank::{BalanceDto, NewBalanceDto, PaginatedLedgerEntriesDto, TransferDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{bank::GetEntriesParam, identity::UserTransferParam},
        service::bank::BankService,
        state::AppState,
    },
};

/// Tag for grouping user bank endpoints in OpenAPI documentation
pub static BANK_TAG: &str = "bank";

#[derive(Deserialize)]
pub struct PaginationParams {
    #[serde(default)]
    pub page: u64,
    #[serde(default = "default_entries")]
    pub entries: u64,
}

fn default_entries() -> u64 {
    50
}

/// Get the current user's balance.
///
/// A user who has never received or sent anything gets a zero balance and no
/// `updated_at`; reading does not create a wallet.
///
/// # Access Control
/// - Logged-in user with a linked Discord account
///
/// # Returns
/// - `200 OK` - Current balance
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Discord account not linked
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/bank/balance",
    tag = BANK_TAG,
    responses(
        (status = 200, description = "Current balance", body = BalanceDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Discord account not linked", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_balance(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &session, &state.service_key)
        .authenticate(&headers)
        .await?;

    let account = BankService::new(&state.db, state.limits)
        .get_balance(&principal, None)
        .await?;

    Ok((StatusCode::OK, Json(account.into_dto())))
}

/// Get the current user's transaction history, newest first.
///
/// # Access Control
/// - Logged-in user with a linked Discord account
///
/// # Arguments
/// - `params` - Pagination: `page` (default 0) and `entries` (default 50, at most 100)
///
/// # Returns
/// - `200 OK` - One page of ledger entries
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Discord account not linked, or called with the service key
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/bank/transactions",
    tag = BANK_TAG,
    params(
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Entries per page (default: 50, max: 100)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved transactions", body = PaginatedLedgerEntriesDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Discord account not linked", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_transactions(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &session, &state.service_key)
        .authenticate(&headers)
        .await?;

    let param = GetEntriesParam {
        page: params.page,
        per_page: params.entries,
    };

    let entries = BankService::new(&state.db, state.limits)
        .list_transactions(&principal, param)
        .await?;

    Ok((StatusCode::OK, Json(entries.into_dto())))
}

/// Send money to another user.
///
/// The recipient is named by Discord id or username; the Discord id wins when both
/// are given.
///
/// # Access Control
/// - Logged-in user with a linked Discord account
///
/// # Returns
/// - `200 OK` - Sender's new balance
/// - `400 Bad Request` - Missing recipient, invalid amount, self-transfer or insufficient funds
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Discord account not linked
/// - `404 Not Found` - Recipient does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/bank/transfer",
    tag = BANK_TAG,
    request_body = TransferDto,
    responses(
        (status = 200, description = "Transfer completed", body = NewBalanceDto),
        (status = 400, description = "Invalid transfer", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Discord account not linked", body = ErrorDto),
        (status = 404, description = "Recipient not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn transfer(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Json(payload): Json<TransferDto>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &session, &state.service_key)
        .authenticate(&headers)
        .await?;

    let param = UserTransferParam::from_dto(payload)?;

    let account = BankService::new(&state.db, state.limits)
        .transfer_by_user(&principal, param)
        .await?;

    Ok((StatusCode::OK, Json(NewBalanceDto::ok(account.balance))))
}
