// This code was automatically generated by sitekit-gen. Do not edit manually.

//! The OData error envelope and the error map shared by every operation.

use serde::{Deserialize, Serialize};
use sitekit::{
    AdditionalData, AdditionalDataHolder, ErrorMappings, ParseNode, SerializationError, ServiceError,
    ServiceErrorDetail,
};

/// Error map applied to every operation of the service.
pub static ERROR_MAPPINGS: ErrorMappings =
    ErrorMappings::new(&[("XXX", create_odata_error_from_discriminator_value)]);

/// Decodes an OData error payload into a typed service error.
pub fn create_odata_error_from_discriminator_value(
    node: &ParseNode,
) -> Result<ServiceError, SerializationError> {
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

impl AdditionalDataHolder for ODataError {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
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

impl AdditionalDataHolder for MainError {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
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

impl AdditionalDataHolder for ErrorDetails {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
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

impl AdditionalDataHolder for InnerError {
    fn additional_data(&self) -> &AdditionalData {
        &self.additional_data
    }

    fn additional_data_mut(&mut self) -> &mut AdditionalData {
        &mut self.additional_data
    }
}
