use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{api::ErrorDto, bank},
    server::{
        controller::{bank as bank_controller, game},
        middleware::activity::track_activity,
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        bank_controller::get_balance,
        bank_controller::get_transactions,
        bank_controller::transfer,
        game::get_link_status,
        game::get_balance,
        game::deposit,
        game::withdraw,
        game::transfer,
    ),
    components(schemas(
        ErrorDto,
        bank::BalanceDto,
        bank::ServiceBalanceDto,
        bank::LedgerEntryDto,
        bank::PaginatedLedgerEntriesDto,
        bank::TransferDto,
        bank::ServiceAdjustDto,
        bank::ServiceTransferDto,
        bank::NewBalanceDto,
        bank::LinkStatusDto,
    )),
    modifiers(&ServiceKeyAddon),
    tags(
        (name = "bank", description = "Balance, history and transfers for logged-in users"),
        (name = "game", description = "Game server operations authenticated with the service key")
    )
)]
pub struct ApiDoc;

struct ServiceKeyAddon;

impl Modify for ServiceKeyAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "service_key",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
            );
        }
    }
}

pub fn router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/api/bank/balance", get(bank_controller::get_balance))
        .route("/api/bank/transactions", get(bank_controller::get_transactions))
        .route("/api/bank/transfer", post(bank_controller::transfer))
        .route(
            "/api/bank/service/users/{discord_id}",
            get(game::get_link_status),
        )
        .route(
            "/api/bank/service/balance/{discord_id}",
            get(game::get_balance),
        )
        .route("/api/bank/service/deposit", post(game::deposit))
        .route("/api/bank/service/withdraw", post(game::withdraw))
        .route("/api/bank/service/transfer", post(game::transfer))
        .layer(from_fn_with_state(state, track_activity))
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
}
