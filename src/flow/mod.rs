//! Flow — client for the remote hosted inference endpoint.
//!
//! DESIGN
//! ======
//! The controller only sees the [`FlowChat`] trait. [`LangflowClient`] is the
//! production implementation; tests substitute mocks.

pub mod langflow;
pub mod types;

pub use langflow::LangflowClient;
pub use types::{FlowChat, FlowError, RunRequest};
