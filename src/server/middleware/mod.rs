//! Request authentication and per-request bookkeeping.
//!
//! - `auth` - Turns a request's bearer key or session into a `Principal`
//! - `session` - Typed access to the session keys written at login
//! - `activity` - Best-effort `last_seen_at` tracking for logged-in users

pub mod activity;
pub mod auth;
pub mod session;
