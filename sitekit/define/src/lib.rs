//! Description primitives for sitekit request-builder services.
//!
//! A [`ServiceDescription`] lists the resources (one per URL template), the
//! models they exchange, and the error map. `sitekit-gen` turns a description
//! into a crate of typed request builders that run on the `sitekit` runtime.
//!
//! ## Examples
//!
//! ```
//! use sitekit_define::prelude::*;
//!
//! let service = ServiceDescription::new("Sites", "SitesServiceClient", "https://graph.microsoft.com/v1.0")
//!     .auth(AuthStrategy::BearerToken { scopes: vec![] }, &["SITES_ACCESS_TOKEN"])
//!     .resource(
//!         Resource::new("SiteItem", "sites", "{+baseurl}/sites/{site%2Did}{?%24expand,%24select}")
//!             .operation(Operation::new(RestMethod::Get, ResponseKind::model("Site")).queries(QueryOption::item())),
//!     )
//!     .model(ModelType::entity("Site").odata_type("#microsoft.graph.site"))
//!     .error_mapping("XXX", "ODataError");
//!
//! assert_eq!(service.error_mappings.len(), 1);
//! ```

mod auth;
pub mod prelude;
mod query;
mod request;
mod resource;
mod response;
mod schema;
mod types;

pub use auth::AuthStrategy;
pub use query::{QueryKind, QueryOption};
pub use request::{Deprecation, Operation, RequestBody};
pub use resource::{FunctionArgument, Navigation, NavigationKind, Resource};
pub use response::ResponseKind;
pub use schema::{EnumType, ModelKind, ModelType, Property, PropertyType};
pub use types::{ErrorMapping, RestMethod, ServiceDescription, ServiceModule};
