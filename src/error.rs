//! Crate error type

use crate::sim::EntityId;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Polygon with fewer than 3 vertices or a zero-length edge
    #[error("invalid polygon: {reason}")]
    InvalidPolygon { reason: String },
    /// Normalizing a zero vector, or dividing by a zero component
    #[error("division by zero")]
    DivisionByZero,
    #[error("entity {0:?} not found in any layer")]
    EntityNotFound(EntityId),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid_polygon(reason: impl Into<String>) -> Self {
        Self::InvalidPolygon {
            reason: reason.into(),
        }
    }

    /// Geometry errors come from malformed entity state, not from the environment
    pub fn is_geometry(&self) -> bool {
        matches!(self, Error::InvalidPolygon { .. } | Error::DivisionByZero)
    }
}
