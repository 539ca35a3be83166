//! Client-side interface to the meeting transcription service.

pub mod client;
pub mod error;
pub mod types;

pub use client::{mime_type_for_extension, ApiClient, DEFAULT_API_URL};
pub use error::{ApiError, ApiResult};
pub use types::{Meeting, SearchMatch, SearchResponse, ServiceInfo};
