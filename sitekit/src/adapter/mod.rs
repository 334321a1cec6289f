//! The request adapter contract and its reqwest implementation.
//!
//! Builders never talk to HTTP directly: they hand a [`RequestInformation`] to
//! a shared [`RequestAdapter`], which resolves the URL, authenticates, runs the
//! middleware chain, maps failures through an [`ErrorMappings`] table and
//! decodes the body.

mod auth;
mod context;
mod middleware;
mod reqwest_adapter;

pub use auth::{
    AccessTokenProvider, AllowedHostsValidator, AnonymousAuthenticationProvider,
    ApiKeyAuthenticationProvider, ApiKeyLocation, AuthenticationProvider,
    BaseBearerTokenAuthenticationProvider, EnvTokenProvider, StaticTokenProvider,
};
pub use context::RequestContext;
pub use middleware::{
    HeadersInspectionHandler, HeadersInspectionOption, Middleware, Next, UserAgentHandler,
    UserAgentOption,
};
pub use reqwest_adapter::{DEFAULT_BASE_URL, ReqwestAdapter, ReqwestAdapterBuilder};

use std::fmt;
use std::future::Future;

use async_trait::async_trait;

use crate::error::{SdkError, SerializationError};
use crate::error_mapping::ErrorMappings;
use crate::request_information::RequestInformation;
use crate::serialization::{CodecRegistry, Parsable, ParseNode, Primitive, PrimitiveType, PrimitiveValue};

/// Dispatches prepared requests on behalf of request builders.
///
/// Implementations must be safe to share across concurrent callers; one
/// adapter serves every builder rooted at the same client.
#[async_trait]
pub trait RequestAdapter: Send + Sync + fmt::Debug {
    /// The service root written into the `baseurl` path parameter.
    fn base_url(&self) -> &str;

    /// Codecs used for request bodies and response decoding.
    fn codecs(&self) -> &CodecRegistry;

    /// Dispatches and decodes the response body into a parse node.
    ///
    /// Returns `None` for 204 responses and empty bodies.
    async fn send_for_node(
        &self,
        ctx: &RequestContext,
        info: RequestInformation,
        errors: &ErrorMappings,
    ) -> Result<Option<ParseNode>, SdkError>;

    /// Dispatches and decodes a scalar response.
    async fn send_primitive_value(
        &self,
        ctx: &RequestContext,
        info: RequestInformation,
        ty: PrimitiveType,
        errors: &ErrorMappings,
    ) -> Result<Option<PrimitiveValue>, SdkError>;

    /// Dispatches and ignores the response body.
    async fn send_no_content(
        &self,
        ctx: &RequestContext,
        info: RequestInformation,
        errors: &ErrorMappings,
    ) -> Result<(), SdkError>;
}

/// Typed helpers layered over [`RequestAdapter`], available on every adapter
/// including `dyn RequestAdapter`.
pub trait RequestAdapterExt: RequestAdapter {
    /// Dispatches and decodes the body as a model.
    fn send<'a, T: Parsable>(
        &'a self,
        ctx: &'a RequestContext,
        info: RequestInformation,
        errors: &'a ErrorMappings,
    ) -> impl Future<Output = Result<Option<T>, SdkError>> + Send + 'a {
        async move {
            match self.send_for_node(ctx, info, errors).await? {
                Some(node) => Ok(Some(node.get_object_value::<T>()?)),
                None => Ok(None),
            }
        }
    }

    /// Dispatches and decodes a top-level array of models.
    fn send_collection<'a, T: Parsable>(
        &'a self,
        ctx: &'a RequestContext,
        info: RequestInformation,
        errors: &'a ErrorMappings,
    ) -> impl Future<Output = Result<Option<Vec<T>>, SdkError>> + Send + 'a {
        async move {
            match self.send_for_node(ctx, info, errors).await? {
                Some(node) => Ok(Some(node.get_collection_of_object_values::<T>()?)),
                None => Ok(None),
            }
        }
    }

    /// Dispatches and decodes a statically typed scalar.
    fn send_primitive<'a, P: Primitive>(
        &'a self,
        ctx: &'a RequestContext,
        info: RequestInformation,
        errors: &'a ErrorMappings,
    ) -> impl Future<Output = Result<Option<P>, SdkError>> + Send + 'a {
        async move {
            let Some(value) = self.send_primitive_value(ctx, info, P::TYPE, errors).await? else {
                return Ok(None);
            };
            let actual = value.primitive_type();
            P::from_value(value)
                .map(Some)
                .ok_or_else(|| SerializationError::unexpected(P::TYPE, actual.to_string()).into())
        }
    }
}

impl<A: RequestAdapter + ?Sized> RequestAdapterExt for A {}
