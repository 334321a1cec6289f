//! Sitekit Runtime
//!
//! Runtime support for generated OData request-builder clients. Generated
//! crates (such as `sitekit-sites`) describe *where* and *what*; this crate
//! does the work of turning a builder chain into an HTTP call and the
//! response back into typed values.
//!
//! ## Core Types
//!
//! ### Requests
//!
//! - [`template`] - RFC 6570 URL template expansion (`{+x}`, `{x}`, `{?a,b}`, `{&a}`)
//! - [`RequestInformation`] - Method, template, bindings, headers, body and options for one call
//! - [`RequestConfiguration`] - Per-verb headers, options and typed query parameters
//! - [`HeaderBag`] / [`RequestOptions`] - Case-insensitive multi-value headers and middleware options
//!
//! ### Dispatch
//!
//! - [`RequestAdapter`] - The dispatch contract builders call into
//! - [`ReqwestAdapter`] - The `reqwest` implementation, with auth, middleware and tracing
//! - [`RequestContext`] - Cancellation and deadlines for one call
//! - [`ErrorMappings`] - Status-keyed error factories (`"404"`, `"4XX"`, `"XXX"`)
//!
//! ### Builders and models
//!
//! - [`BaseRequestBuilder`] / [`RequestBuilder`] - Shared builder state and navigation
//! - [`Parsable`] - The model contract, satisfied by any serde model
//! - [`CodecRegistry`] - Content-type keyed codecs (JSON, text, form)
//!
//! ## Examples
//!
//! ```
//! use sitekit::{HttpMethod, PathParameters, RequestInformation};
//!
//! let info = RequestInformation::new(
//!     HttpMethod::Get,
//!     "{+baseurl}/sites/{site%2Did}",
//!     PathParameters::new()
//!         .with("baseurl", "https://graph.microsoft.com/v1.0")
//!         .with("site%2Did", "contoso.sharepoint.com"),
//! );
//! assert_eq!(
//!     info.resolve_url().unwrap(),
//!     "https://graph.microsoft.com/v1.0/sites/contoso.sharepoint.com"
//! );
//! ```

pub mod adapter;
pub mod builder;
pub mod error;
pub mod error_mapping;
pub mod headers;
pub mod method;
pub mod options;
pub mod parameters;
pub mod request_information;
pub mod serialization;
pub mod template;

pub use adapter::{
    AccessTokenProvider, AllowedHostsValidator, AnonymousAuthenticationProvider,
    ApiKeyAuthenticationProvider, ApiKeyLocation, AuthenticationProvider,
    BaseBearerTokenAuthenticationProvider, DEFAULT_BASE_URL, EnvTokenProvider,
    HeadersInspectionHandler, HeadersInspectionOption, Middleware, Next, RequestAdapter,
    RequestAdapterExt, RequestContext, ReqwestAdapter, ReqwestAdapterBuilder, StaticTokenProvider,
    UserAgentHandler, UserAgentOption,
};
pub use builder::{BaseRequestBuilder, RequestBuilder, RequestTarget};
pub use error::{
    AuthError, SdkError, SerializationError, ServiceError, ServiceErrorDetail, TemplateError,
    TransportError, UnknownServiceError,
};
pub use error_mapping::{ErrorFactory, ErrorMappings};
pub use headers::HeaderBag;
pub use method::HttpMethod;
pub use options::{RequestOption, RequestOptions};
pub use parameters::{
    BASE_URL_KEY, NoQueryParameters, PathParameters, QueryMap, QueryParameters, QueryValue,
    RAW_URL_KEY, ToQueryValue,
};
pub use request_information::{RequestConfiguration, RequestInformation};
pub use serialization::{
    AdditionalData, AdditionalDataHolder, Codec, CodecRegistry, FormCodec, JsonCodec,
    ODATA_TYPE_KEY, Parsable, ParseNode, Primitive, PrimitiveType, PrimitiveValue, TextCodec,
    discriminator_value, normalize_content_type, parse_iso_duration,
};

pub use tokio_util::sync::CancellationToken;
