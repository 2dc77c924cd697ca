//! Language-client host interface.
//!
//! The host owns spawning the server, JSON-RPC framing and lifecycle. This
//! crate only hands it a [`ServerDefinition`].

pub mod registry;

pub use registry::{LanguageClientHost, ServerDefinition, ServerRegistry, DEFAULT_INIT_TIMEOUT};
