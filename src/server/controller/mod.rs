//! HTTP request handlers.
//!
//! Handlers authenticate the caller with `AuthGuard`, convert DTOs into domain
//! parameters, call `BankService`, and convert the result back into a DTO.
//!
//! - `bank` - Endpoints for logged-in users
//! - `game` - Endpoints for the game server, authenticated with the service key

pub mod bank;
pub mod game;
