//! Quote API response models.
//!
//! Both endpoints answer with the same envelope: an optional `data` array
//! and an optional structured `error`.

use serde::Deserialize;

use crate::models::ErrorResponse;

/// Response wrapper shared by the search and quote endpoints
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub data: Option<Vec<T>>,
    pub error: Option<ErrorResponse>,
}
