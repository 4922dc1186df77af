//! Tower Service implementations

pub mod core;
pub mod request;
pub mod response;

pub use core::A2AProtocolService;
pub use request::{A2ARequest, RequestContext, DEFAULT_CALL_TIMEOUT};
pub use response::A2AResponse;
