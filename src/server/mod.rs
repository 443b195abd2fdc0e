//! Bank service backend.
//!
//! This module contains the complete backend: API endpoints, the ledger business
//! logic, data access, and infrastructure. It uses Axum as the web framework and
//! SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Access checks, identity resolution and the transfer engine
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models, principals and operation parameters
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Caller authentication, sessions and activity tracking
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, service key, limits)
//! - **Startup** (`startup`) - Initialization of database, sessions, and CORS
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Middleware** `AuthGuard` turns the bearer key or session into a `Principal`
//! 3. **Controller** converts DTOs to params and calls `BankService`
//! 4. **Service** checks the principal with `AccessGate`, resolves accounts, and runs
//!    the balance change in one database transaction
//! 5. **Data** queries database, converts entities to domain models
//! 6. **Controller** converts the domain model to a DTO and returns the response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
