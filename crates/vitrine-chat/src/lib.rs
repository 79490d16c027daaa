//! Chat gateway collaborating with the artifact store.
//!
//! The gateway decides when an artifact should exist for an incoming chat
//! message, creates it through the store's HTTP interface before the reply
//! is returned, and relays text plus artifact links back to the caller over
//! HTTP or the socket channel.

pub mod client;
pub mod gateway;
pub mod protocol;
pub mod responder;

pub use client::{ArtifactClient, ClientError, CreatedArtifact};
pub use gateway::{ChatGateway, GatewayConfig, GatewayError};
pub use protocol::{ClientMessage, ServerMessage};
pub use responder::{respond, ChatReply};
