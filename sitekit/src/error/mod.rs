//! Layered error types.
//!
//! Each failure family has its own enum; [`SdkError`] aggregates them so verb
//! methods can return a single error type while callers still match on the
//! specific layer that failed.

mod auth_error;
mod sdk_error;
mod serialization_error;
mod service_error;
mod template_error;
mod transport_error;

pub use auth_error::AuthError;
pub use sdk_error::SdkError;
pub use serialization_error::SerializationError;
pub use service_error::{ServiceError, ServiceErrorDetail, UnknownServiceError};
pub use template_error::TemplateError;
pub use transport_error::TransportError;
