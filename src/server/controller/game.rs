//! Game server endpoints.
//!
//! All handlers here expect `Authorization: Bearer <BANK_SERVICE_API_KEY>` and act only
//! on the Discord ids named in the request.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        bank::{
            LinkStatusDto, NewBalanceDto, ServiceAdjustDto, ServiceBalanceDto, ServiceTransferDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::identity::AccountRef,
        service::bank::BankService,
        state::AppState,
    },
};

/// Tag for grouping game server endpoints in OpenAPI documentation
pub static GAME_TAG: &str = "game";

/// Check whether a Discord id is linked to an account.
///
/// # Returns
/// - `200 OK` - Link status
/// - `401 Unauthorized` - Missing or invalid service key
/// - `403 Forbidden` - Called by a user session
#[utoipa::path(
    get,
    path = "/api/bank/service/users/{discord_id}",
    tag = GAME_TAG,
    params(
        ("discord_id" = String, Path, description = "Discord user ID")
    ),
    responses(
        (status = 200, description = "Link status", body = LinkStatusDto),
        (status = 401, description = "Invalid API key", body = ErrorDto),
        (status = 403, description = "Service key required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("service_key" = []))
)]
pub async fn get_link_status(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Path(discord_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &session, &state.service_key)
        .authenticate(&headers)
        .await?;

    let exists = BankService::new(&state.db, state.limits)
        .link_status(&principal, &discord_id)
        .await?;

    Ok((StatusCode::OK, Json(LinkStatusDto { discord_id, exists })))
}

/// Get the balance of a Discord-linked account.
///
/// # Returns
/// - `200 OK` - Balance (zero for an account that has never been used)
/// - `401 Unauthorized` - Missing or invalid service key
/// - `404 Not Found` - Discord id not linked to any account
#[utoipa::path(
    get,
    path = "/api/bank/service/balance/{discord_id}",
    operation_id = "service_get_balance",
    tag = GAME_TAG,
    params(
        ("discord_id" = String, Path, description = "Discord user ID")
    ),
    responses(
        (status = 200, description = "Current balance", body = ServiceBalanceDto),
        (status = 401, description = "Invalid API key", body = ErrorDto),
        (status = 403, description = "Service key required", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("service_key" = []))
)]
pub async fn get_balance(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Path(discord_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &session, &state.service_key)
        .authenticate(&headers)
        .await?;

    let account = BankService::new(&state.db, state.limits)
        .get_balance(&principal, Some(&AccountRef::discord(discord_id.as_str())))
        .await?;

    Ok((
        StatusCode::OK,
        Json(ServiceBalanceDto {
            discord_id,
            balance: account.balance,
        }),
    ))
}

/// Credit a Discord-linked account.
///
/// # Returns
/// - `200 OK` - New balance
/// - `400 Bad Request` - Invalid amount or balance limit exceeded
/// - `401 Unauthorized` - Missing or invalid service key
/// - `404 Not Found` - Discord id not linked to any account
#[utoipa::path(
    post,
    path = "/api/bank/service/deposit",
    tag = GAME_TAG,
    request_body = ServiceAdjustDto,
    responses(
        (status = 200, description = "Deposit applied", body = NewBalanceDto),
        (status = 400, description = "Invalid amount", body = ErrorDto),
        (status = 401, description = "Invalid API key", body = ErrorDto),
        (status = 403, description = "Service key required", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("service_key" = []))
)]
pub async fn deposit(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Json(payload): Json<ServiceAdjustDto>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &session, &state.service_key)
        .authenticate(&headers)
        .await?;

    let account = BankService::new(&state.db, state.limits)
        .deposit(&principal, &AccountRef::discord(payload.discord_id), payload.amount)
        .await?;

    Ok((StatusCode::OK, Json(NewBalanceDto::ok(account.balance))))
}

/// Debit a Discord-linked account.
///
/// # Returns
/// - `200 OK` - New balance
/// - `400 Bad Request` - Invalid amount or insufficient funds
/// - `401 Unauthorized` - Missing or invalid service key
/// - `404 Not Found` - Discord id not linked to any account
#[utoipa::path(
    post,
    path = "/api/bank/service/withdraw",
    tag = GAME_TAG,
    request_body = ServiceAdjustDto,
    responses(
        (status = 200, description = "Withdrawal applied", body = NewBalanceDto),
        (status = 400, description = "Invalid amount or insufficient funds", body = ErrorDto),
        (status = 401, description = "Invalid API key", body = ErrorDto),
        (status = 403, description = "Service key required", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("service_key" = []))
)]
pub async fn withdraw(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Json(payload): Json<ServiceAdjustDto>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &session, &state.service_key)
        .authenticate(&headers)
        .await?;

    let account = BankService::new(&state.db, state.limits)
        .withdraw(&principal, &AccountRef::discord(payload.discord_id), payload.amount)
        .await?;

    Ok((StatusCode::OK, Json(NewBalanceDto::ok(account.balance))))
}

/// Move money between two Discord-linked accounts.
///
/// # Returns
/// - `200 OK` - Sender's new balance
/// - `400 Bad Request` - Invalid amount, self-transfer or insufficient funds
/// - `401 Unauthorized` - Missing or invalid service key
/// - `404 Not Found` - Either Discord id not linked to any account
#[utoipa::path(
    post,
    path = "/api/bank/service/transfer",
    operation_id = "service_transfer",
    tag = GAME_TAG,
    request_body = ServiceTransferDto,
    responses(
        (status = 200, description = "Transfer completed", body = NewBalanceDto),
        (status = 400, description = "Invalid transfer", body = ErrorDto),
        (status = 401, description = "Invalid API key", body = ErrorDto),
        (status = 403, description = "Service key required", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("service_key" = []))
)]
pub async fn transfer(
    State(state): State<AppState>,
    session: Session,
    headers: HeaderMap,
    Json(payload): Json<ServiceTransferDto>,
) -> Result<impl IntoResponse, AppError> {
    let principal = AuthGuard::new(&state.db, &session, &state.service_key)
        .authenticate(&headers)
        .await?;

    let account = BankService::new(&state.db, state.limits)
        .transfer_by_service(
            &principal,
            &AccountRef::discord(payload.from_discord_id),
            &AccountRef::discord(payload.to_discord_id),
            payload.amount,
        )
        .await?;

    Ok((StatusCode::OK, Json(NewBalanceDto::ok(account.balance))))
}
