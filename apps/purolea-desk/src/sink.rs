//! # Print Surface Sink
//!
//! Delivers rendered quotes to whatever surface displays them (a print
//! preview window, a webview tab) through a channel.
//!
//! ```text
//!  export_quote ──► ChannelSink::present ──► mpsc ──► print window
//!                          │
//!                          └── receiver gone (window blocked/closed)
//!                              → PresentOutcome::Unavailable
//! ```

use std::sync::mpsc::{self, Receiver, Sender};

use purolea_core::{DocumentSink, PresentOutcome};

/// A [`DocumentSink`] backed by an mpsc channel.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    sender: Sender<String>,
}

impl ChannelSink {
    /// Creates a sink and the receiver the display surface reads from.
    pub fn channel() -> (Self, Receiver<String>) {
        let (sender, receiver) = mpsc::channel();
        (ChannelSink { sender }, receiver)
    }
}

impl DocumentSink for ChannelSink {
    fn present(&mut self, document: &str) -> PresentOutcome {
        match self.sender.send(document.to_string()) {
            Ok(()) => PresentOutcome::Presented,
            Err(_) => PresentOutcome::Unavailable,
        }
    }
}
