//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Access**: Checking which caller tier may run which ledger operation
//! - **Resolution**: Mapping external references to internal accounts
//! - **Business Logic**: Validating amounts, funds and transfer parties
//! - **Transaction Management**: Running every balance change in one atomic unit

pub mod access;
pub mod bank;
pub mod identity;
