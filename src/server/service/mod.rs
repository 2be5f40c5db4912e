//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Enforcing roster capacity rules
//! - **Orchestration**: Coordinating repository calls inside transactions
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Concurrency**: Holding the roster locks around capacity-sensitive writes

pub mod player;
pub mod roster;
