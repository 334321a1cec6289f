//! Convenient re-exports for writing service descriptions.
//!
//! ```
//! use sitekit_define::prelude::*;
//!
//! let op = Operation::new(RestMethod::Get, ResponseKind::model("Site"));
//! assert_eq!(op.method, RestMethod::Get);
//! ```

pub use crate::auth::AuthStrategy;
pub use crate::query::{QueryKind, QueryOption};
pub use crate::request::{Deprecation, Operation, RequestBody};
pub use crate::resource::{FunctionArgument, Navigation, NavigationKind, Resource};
pub use crate::response::ResponseKind;
pub use crate::schema::{EnumType, ModelKind, ModelType, Property, PropertyType};
pub use crate::types::{ErrorMapping, RestMethod, ServiceDescription, ServiceModule};
