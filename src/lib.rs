//! Rust client library for the Mailwire transactional-email API.
//!
//! Public API layers:
//! - [`MailwireClient`]: root entry point; hands out resource handles and
//!   sends email through the configured host.
//! - [`resources`]: typed resource handles mirroring the API's URL tree.
//! - [`types`]: wire data shapes with exact field names.
//! - [`Error`]: unified error type used by all operations.
//!
//! Underneath sits a small command pipeline: every operation builds a
//! [`Command`] (method, URL, optional body, response strategy) and executes
//! it through a pluggable [`Transport`]. Validation runs before anything
//! touches the network, and a handle that performed a delete refuses all
//! further use locally.

mod client;
mod command;
mod config;
mod error;
mod request;
mod resource;
mod response;
mod transport;
mod urls;
mod validation;

pub mod resources;
pub mod types;
pub mod wire_enum;

/// Root client for the Mailwire API.
pub use client::MailwireClient;
/// Command pipeline: one HTTP interaction and its factory.
pub use command::{Command, CommandFactory};
/// Credentials and host selection.
pub use config::{
    ClientConfig, DEFAULT_API_HOST, DEFAULT_BULK_HOST, DEFAULT_SANDBOX_HOST, DEFAULT_SEND_HOST,
};
/// Error type returned by all client operations.
pub use error::Error;
/// Outgoing request construction.
pub use request::RequestFactory;
/// Shared resource base with the per-handle lifecycle guard.
pub use resource::ResourceBase;
/// Response interpretation strategies.
pub use response::{JsonHandler, ResponseHandler, StatusHandler, TextHandler};
/// HTTP-sending abstraction and its production implementation.
pub use transport::{ReqwestTransport, Transport, TransportResponse};
/// Pure URL composition helpers.
pub use urls::{append_segments, set_query_parameter};
/// Request validation result and trait.
pub use validation::{Validate, ValidationResult};
/// String-backed wire enumeration support.
pub use wire_enum::WireEnum;

#[cfg(test)]
mod testing;
