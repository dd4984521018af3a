//! Conversation controller and its state.
//!
//! DESIGN
//! ======
//! `state` holds the data (history, submission flag) and its mutation
//! methods; `controller` wires that state to a flow client and a view.

pub mod controller;
pub mod state;

pub use controller::{ChatController, ChatView};
pub use state::{Conversation, Message, Role, SubmissionState};
