use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Field-level validation failures keyed by JSON field path.
///
/// Paths use the request's camelCase names (`personalData.name`); records of a
/// batch are prefixed with their index (`[2].physical.height`).
#[derive(Error, Debug, Default, Clone, PartialEq, Eq)]
#[error("Validation error")]
pub struct ValidationErrors {
    errors: BTreeMap<String, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.insert(field.into(), message.into());
    }

    /// Moves every error of `other` into `self` under `prefix`.
    pub fn merge_prefixed(&mut self, prefix: &str, other: ValidationErrors) {
        for (field, message) in other.errors {
            self.errors.insert(format!("{}.{}", prefix, field), message);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Consumes the collection, yielding messages keyed by field path.
    pub fn into_map(self) -> BTreeMap<String, String> {
        self.errors
    }
}

impl IntoResponse for ValidationErrors {
    fn into_response(self) -> Response {
        let message = self.to_string();
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                message,
                errors: Some(self.into_map()),
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_prefixed_keeps_nested_paths() {
        let mut record = ValidationErrors::new();
        record.add("physical.height", "height must be at least 1 m");

        let mut batch = ValidationErrors::new();
        batch.merge_prefixed("[2]", record);

        let map = batch.into_map();
        assert_eq!(map.len(), 1);
        assert_eq!(
            map.get("[2].physical.height").map(String::as_str),
            Some("height must be at least 1 m")
        );
    }
}
