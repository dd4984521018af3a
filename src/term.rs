//! Terminal front end — the single-screen chat surface.
//!
//! SYSTEM CONTEXT
//! ==============
//! Implements [`ChatView`] on top of stdout. New messages are appended below
//! the previous ones, so the newest message is always the last thing on
//! screen. While a request is pending a spinner replaces the prompt and
//! typed lines are dropped by the controller.

use std::io::{self, BufRead, Write};
use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::mpsc;
use tracing::warn;

use crate::chat::{ChatView, Message, Role, SubmissionState};
use crate::render::{render_payload, text::to_text};

pub const TITLE: &str = "AI Chat Interface";
pub const EMPTY_HINT: &str = "Start a conversation to see structured responses";
pub const INPUT_PLACEHOLDER: &str = "Type your message...";
pub const PENDING_LABEL: &str = "Processing...";

const STDIN_BUFFER: usize = 16;

pub struct TerminalView {
    printed: usize,
    show_user: bool,
    interactive: bool,
    spinner: Option<ProgressBar>,
}

impl TerminalView {
    /// View for an interactive session: echoes every message and shows a
    /// prompt when idle.
    #[must_use]
    pub fn interactive() -> Self {
        Self { printed: 0, show_user: true, interactive: true, spinner: None }
    }

    /// View for one-shot use: prints assistant replies only, no prompt.
    #[must_use]
    pub fn one_shot() -> Self {
        Self { printed: 0, show_user: false, interactive: false, spinner: None }
    }

    pub fn print_banner(&self) {
        println!();
        println!("  {}", style(TITLE).bold());
        println!("  {}", style(EMPTY_HINT).dim());
        println!("  {}", style(format!("{INPUT_PLACEHOLDER} (Enter to send, Ctrl+D to quit)")).dim());
        println!();
        prompt();
    }

    fn emit(&self, text: &str) {
        match &self.spinner {
            Some(spinner) => spinner.suspend(|| println!("{text}")),
            None => println!("{text}"),
        }
    }

    fn start_spinner(&mut self) {
        let spinner = ProgressBar::new_spinner();
        if let Ok(spinner_style) = ProgressStyle::default_spinner().template("  {spinner:.cyan} {msg}") {
            spinner.set_style(spinner_style);
        }
        spinner.set_message(PENDING_LABEL);
        spinner.enable_steady_tick(Duration::from_millis(80));
        self.spinner = Some(spinner);
    }

    fn stop_spinner(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }
}

impl ChatView for TerminalView {
    fn history_changed(&mut self, messages: &[Message]) {
        let start = self.printed.min(messages.len());
        for message in &messages[start..] {
            if message.role() == Role::User && !self.show_user {
                continue;
            }
            self.emit(&format_message(message));
        }
        self.printed = messages.len();
    }

    fn submission_state_changed(&mut self, state: SubmissionState) {
        match state {
            SubmissionState::Pending => self.start_spinner(),
            SubmissionState::Idle => {
                self.stop_spinner();
                if self.interactive {
                    prompt();
                }
            }
        }
    }

    fn submission_rejected(&mut self, text: &str) {
        if !text.trim().is_empty() {
            self.emit(&format!("  {}", style("Still processing; message not sent.").yellow()));
        } else if self.interactive && self.spinner.is_none() {
            prompt();
        }
    }
}

impl Drop for TerminalView {
    fn drop(&mut self) {
        self.stop_spinner();
    }
}

fn prompt() {
    print!("{} ", style(">").cyan().bold());
    let _ = io::stdout().flush();
}

/// Terminal layout of one message: user text verbatim, assistant payloads
/// through the renderer, failures in red.
#[must_use]
pub fn format_message(message: &Message) -> String {
    match message.role() {
        Role::User => format!("\n  {} {}", style("You >").green().bold(), message.display_text()),
        Role::Assistant if message.is_error() => {
            format!("\n  {}", style(message.display_text()).red())
        }
        Role::Assistant => {
            let body = to_text(&render_payload(message.raw_payload()));
            let mut out = format!("\n  {}", style("Assistant").cyan().bold());
            for line in body.lines() {
                out.push_str("\n  ");
                out.push_str(line);
            }
            out.push('\n');
            out
        }
    }
}

/// Forward stdin lines into a channel from a plain thread.
///
/// A blocking read cannot be cancelled, so it lives outside the runtime and
/// never holds up shutdown. The channel closes at end of input.
#[must_use]
pub fn spawn_stdin_lines() -> mpsc::Receiver<String> {
    let (tx, rx) = mpsc::channel(STDIN_BUFFER);
    std::thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if tx.blocking_send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    warn!(error = %e, "term: stdin read failed");
                    break;
                }
            }
        }
    });
    rx
}

#[cfg(test)]
#[path = "term_test.rs"]
mod tests;
