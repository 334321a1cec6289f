//! Operations exposed by a resource.

use crate::query::QueryOption;
use crate::response::ResponseKind;
use crate::RestMethod;

/// Payload an operation sends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestBody {
    /// A model serialized as JSON.
    Model(String),
    /// Raw bytes sent as `application/octet-stream`.
    Stream,
}

/// Marks an operation as deprecated in favour of another generated method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deprecation {
    /// Name of the generated method callers should use instead.
    pub replacement: String,
    /// Date or version the deprecation took effect.
    pub since: Option<String>,
    pub note: Option<String>,
}

/// A single HTTP verb on a resource.
///
/// ## Examples
///
/// ```
/// use sitekit_define::{Operation, RequestBody, ResponseKind, RestMethod};
///
/// let patch = Operation::new(RestMethod::Patch, ResponseKind::model("Site"))
///     .body(RequestBody::Model("Site".into()))
///     .describe("Update entity in sites");
///
/// assert_eq!(patch.method_name(), "patch");
/// assert!(patch.query.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    pub method: RestMethod,
    /// Overrides the generated method name (defaults to the lowercase verb).
    pub method_name: Option<String>,
    pub description: String,
    pub request: Option<RequestBody>,
    pub response: ResponseKind,
    /// Accept header value; defaults per response kind when unset.
    pub accept: Option<String>,
    pub query: Vec<QueryOption>,
    pub deprecation: Option<Deprecation>,
}

impl Operation {
    pub fn new(method: RestMethod, response: ResponseKind) -> Self {
        Self {
            method,
            method_name: None,
            description: String::new(),
            request: None,
            response,
            accept: None,
            query: Vec::new(),
            deprecation: None,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.method_name = Some(name.into());
        self
    }

    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn body(mut self, body: RequestBody) -> Self {
        self.request = Some(body);
        self
    }

    pub fn accept(mut self, accept: impl Into<String>) -> Self {
        self.accept = Some(accept.into());
        self
    }

    pub fn query(mut self, option: QueryOption) -> Self {
        self.query.push(option);
        self
    }

    pub fn queries(mut self, options: impl IntoIterator<Item = QueryOption>) -> Self {
        self.query.extend(options);
        self
    }

    pub fn deprecated(mut self, replacement: impl Into<String>, since: Option<&str>) -> Self {
        self.deprecation = Some(Deprecation {
            replacement: replacement.into(),
            since: since.map(str::to_string),
            note: None,
        });
        self
    }

    /// Generated async method name.
    pub fn method_name(&self) -> String {
        self.method_name
            .clone()
            .unwrap_or_else(|| self.method.verb().to_string())
    }

    /// Accept header value sent with the request.
    pub fn accept_header(&self) -> &str {
        if let Some(accept) = &self.accept {
            return accept;
        }
        match &self.response {
            ResponseKind::Primitive(_) => "text/plain;q=0.9",
            ResponseKind::Bytes => "application/octet-stream, application/json",
            ResponseKind::Model(_) | ResponseKind::Empty => "application/json",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::PropertyType;

    #[test]
    fn accept_defaults_follow_response_kind() {
        let count = Operation::new(RestMethod::Get, ResponseKind::Primitive(PropertyType::Int32));
        assert_eq!(count.accept_header(), "text/plain;q=0.9");

        let content = Operation::new(RestMethod::Get, ResponseKind::Bytes);
        assert_eq!(content.accept_header(), "application/octet-stream, application/json");

        let delete = Operation::new(RestMethod::Delete, ResponseKind::Empty);
        assert_eq!(delete.accept_header(), "application/json");
    }

    #[test]
    fn method_name_override() {
        let op = Operation::new(RestMethod::Get, ResponseKind::model("DeltaGetResponse"))
            .named("get_as_delta_get_response");
        assert_eq!(op.method_name(), "get_as_delta_get_response");
    }
}
