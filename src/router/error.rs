//! Error types for router communication.

use thiserror::Error;

use crate::device::DecodeError;

/// Error type for HTTP operations.
///
/// Describes what went wrong at the transport level.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network connection failed.
    ///
    /// This includes DNS resolution failures, connection refused,
    /// and other network-level errors.
    #[error("Connection error: {0}")]
    Connection(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Request timed out.
    #[error("Request timed out")]
    Timeout,

    /// The router endpoint URL is invalid.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

/// Error type for SOAP envelope decoding.
#[derive(Debug, Error)]
pub enum EnvelopeError {
    /// The response body is not well-formed XML.
    #[error("Malformed XML: {0}")]
    Xml(#[from] quick_xml::Error),

    /// A required element was absent from the response body.
    #[error("Missing element <{0}> in response")]
    MissingElement(&'static str),

    /// The response code element did not hold an integer.
    #[error("Invalid response code {value:?}")]
    InvalidResponseCode {
        /// The offending element text
        value: String,
    },
}

/// Error type for router operations.
///
/// Every failure of a login or device fetch is reported as one of these.
/// None are retried by this crate.
#[derive(Debug, Error)]
pub enum RouterError {
    /// The request could not be delivered or the response not received.
    #[error("Transport error: {0}")]
    Transport(#[from] HttpError),

    /// The router rejected the login.
    #[error("Unable to login, got status code {code}")]
    AuthFailed {
        /// The router's response code
        code: i64,
    },

    /// The router refused to list attached devices.
    #[error("Unable to get devices, got status code {code}")]
    FetchFailed {
        /// The router's response code
        code: i64,
    },

    /// The response envelope could not be decoded.
    #[error("Failed to decode response: {0}")]
    Envelope(#[from] EnvelopeError),

    /// The device list inside the response could not be decoded.
    #[error(transparent)]
    Records(#[from] DecodeError),

    /// The request body could not be rendered.
    #[error("Failed to render request: {0}")]
    Template(String),
}
