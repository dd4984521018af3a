//! # flowchat
//!
//! Terminal chat client for a hosted flow (inference) endpoint. Each
//! submitted line becomes one run request; the JSON reply is rendered as
//! titled sections of numbered items with bullet points.
//!
//! - `chat`: conversation state and the controller event loop
//! - `render`: JSON to sections, plus text and HTML layouts
//! - `flow`: the HTTP client for the run endpoint
//! - `config`: endpoint settings from the environment
//! - `term`: the interactive terminal view

pub mod chat;
pub mod config;
pub mod flow;
pub mod render;
pub mod term;
