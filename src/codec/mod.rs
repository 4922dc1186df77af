//! Serialization codecs for protocol bindings

pub mod json;

pub use json::JsonCodec;

use crate::{
    protocol::{error::DelegationError, operation::A2AOperation},
    service::response::A2AResponse,
};
use bytes::Bytes;

/// Codec trait for encoding and decoding A2A protocol messages
pub trait Codec: Send + Sync {
    /// Serialize an A2A operation to bytes for transport
    ///
    /// Operations without a body encode to empty bytes.
    fn encode_request(&self, operation: &A2AOperation) -> Result<Bytes, DelegationError>;

    /// Deserialize a success response body for the given operation
    ///
    /// A body that does not decode into the expected shape is a
    /// `DelegationError::MalformedResponse`.
    fn decode_response(
        &self,
        body: &[u8],
        operation: &A2AOperation,
    ) -> Result<A2AResponse, DelegationError>;

    /// The MIME type (e.g., "application/json")
    fn content_type(&self) -> &str;
}
