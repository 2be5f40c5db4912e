//! Database repository layer.
//!
//! Repositories handle database operations (CRUD) using SeaORM entity models internally
//! and return domain models to keep the data layer separate from business logic.

pub mod player;

#[cfg(test)]
mod test;
