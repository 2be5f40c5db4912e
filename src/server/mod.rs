//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the squad roster,
//! including API endpoints, capacity enforcement, data access, and infrastructure.
//! The backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Roster rules and transaction orchestration
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models, roster limits and operation parameters
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, roster lock, limits)
//! - **Startup** (`startup`) - Database bootstrap and CORS setup
//! - **Router** (`router`) - Axum route configuration
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** validates fields while converting DTOs to params, calls service
//! 3. **Service** takes the roster locks, opens a transaction, checks capacity
//! 4. **Data** queries database, converts entities to domain models
//! 5. **Service** commits and returns domain model to controller
//! 6. **Controller** converts domain model to DTO, returns HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
