//! Generation of the `odataerrors` module.
//!
//! The module holds the OData error envelope (`ODataError`, `MainError`,
//! `ErrorDetails`, `InnerError`), a factory that decodes it into a
//! [`sitekit::ServiceError`], and the `ERROR_MAPPINGS` table every
//! generated operation passes to the adapter.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use sitekit_define::ServiceDescription;

use crate::naming::snake_case;

/// The only error envelope the generator knows how to decode.
pub const ODATA_ERROR: &str = "ODataError";

/// Name of the factory function decoding `error_type`.
pub fn factory_name(error_type: &str) -> String {
    format!("create_{}_from_discriminator_value", snake_case(error_type))
}

/// Generates the complete `odataerrors.rs` module.
pub fn generate_error_module(service: &ServiceDescription) -> TokenStream {
    let entries = service.error_mappings.iter().map(|mapping| {
        let key = &mapping.status_key;
        let factory = format_ident!("{}", factory_name(&mapping.error_type));
        quote! { (#key, #factory) }
    });
    let factory = format_ident!("{}", factory_name(ODATA_ERROR));
    let holders = ["ODataError", "MainError", "ErrorDetails", "InnerError"]
        .into_iter()
        .map(additional_data_holder);

    quote! {
        //! The OData error envelope and the error map shared by every operation.

        use serde::{Deserialize, Serialize};
        use sitekit::{
            AdditionalData, AdditionalDataHolder, ErrorMappings, ParseNode, SerializationError,
            ServiceError, ServiceErrorDetail,
        };

        /// Error map applied to every operation of the service.
        pub static ERROR_MAPPINGS: ErrorMappings = ErrorMappings::new(&[ #(#entries),* ]);

        /// Decodes an OData error payload into a typed service error.
        pub fn #factory(node: &ParseNode) -> Result<ServiceError, SerializationError> {
            let error: ODataError = node.get_object_value()?;
            Ok(error.into_service_error())
        }

        /// The top-level OData error payload.
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        pub struct ODataError {
            #[serde(skip_serializing_if = "Option::is_none")]
            pub error: Option<MainError>,
            #[serde(flatten)]
            pub additional_data: AdditionalData,
        }

        impl ODataError {
            /// Converts the payload into the runtime's service error.
            pub fn into_service_error(self) -> ServiceError {
                let Some(main) = self.error else {
                    return ServiceError::default();
                };
                let details = main
                    .details
                    .unwrap_or_default()
                    .into_iter()
                    .map(|detail| ServiceErrorDetail {
                        code: detail.code.unwrap_or_default(),
                        message: detail.message.unwrap_or_default(),
                        target: detail.target,
                    })
                    .collect();
                let inner = main
                    .inner_error
                    .and_then(|inner| serde_json::to_value(inner).ok());
                ServiceError {
                    code: main.code.unwrap_or_default(),
                    message: main.message.unwrap_or_default(),
                    target: main.target,
                    details,
                    inner,
                    ..ServiceError::default()
                }
            }
        }

        /// The `error` object of an OData error payload.
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        pub struct MainError {
            #[serde(skip_serializing_if = "Option::is_none")]
            pub code: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub message: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub target: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub details: Option<Vec<ErrorDetails>>,
            #[serde(rename = "innerError", skip_serializing_if = "Option::is_none")]
            pub inner_error: Option<InnerError>,
            #[serde(flatten)]
            pub additional_data: AdditionalData,
        }

        /// One entry of `error.details`.
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        pub struct ErrorDetails {
            #[serde(skip_serializing_if = "Option::is_none")]
            pub code: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub message: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub target: Option<String>,
            #[serde(flatten)]
            pub additional_data: AdditionalData,
        }

        /// Diagnostic information attached to `error.innerError`.
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        pub struct InnerError {
            #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
            pub odata_type: Option<String>,
            #[serde(rename = "client-request-id", skip_serializing_if = "Option::is_none")]
            pub client_request_id: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            pub date: Option<chrono::DateTime<chrono::FixedOffset>>,
            #[serde(rename = "request-id", skip_serializing_if = "Option::is_none")]
            pub request_id: Option<String>,
            #[serde(flatten)]
            pub additional_data: AdditionalData,
        }

        #(#holders)*
    }
}

fn additional_data_holder(name: &str) -> TokenStream {
    let name = format_ident!("{}", name);
    quote! {
        impl AdditionalDataHolder for #name {
            fn additional_data(&self) -> &AdditionalData {
                &self.additional_data
            }

            fn additional_data_mut(&mut self) -> &mut AdditionalData {
                &mut self.additional_data
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{make_service, render};

    #[test]
    fn factory_name_is_snake_case() {
        assert_eq!(factory_name("ODataError"), "create_odata_error_from_discriminator_value");
    }

    #[test]
    fn error_map_lists_every_key() {
        let service = make_service().error_mapping("404", "ODataError");
        let code = render(&generate_error_module(&service));

        assert!(code.contains("(\"XXX\", create_odata_error_from_discriminator_value)"));
        assert!(code.contains("(\"404\", create_odata_error_from_discriminator_value)"));
        assert!(code.contains("pub static ERROR_MAPPINGS: ErrorMappings"));
    }

    #[test]
    fn envelope_types_are_generated() {
        let code = render(&generate_error_module(&make_service()));

        assert!(code.contains("pub struct ODataError"));
        assert!(code.contains("rename = \"innerError\""));
        assert!(code.contains("rename = \"client-request-id\""));
        assert!(code.contains("impl AdditionalDataHolder for InnerError"));
        assert!(code.contains("pub fn into_service_error(self) -> ServiceError"));
    }
}
