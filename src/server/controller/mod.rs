//! HTTP request handlers.
//!
//! Controllers extract request data, convert DTOs to parameters (where field
//! validation happens), call the service layer and convert domain models back to DTOs.

pub mod player;
pub mod status;
