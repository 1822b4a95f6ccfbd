//! Background delivery of contact messages.
//!
//! This module handles spawning a background thread to POST a contact
//! message to the relay and reporting the outcome via a message channel,
//! so the UI event loop never blocks on the network.

use std::sync::mpsc::{channel, Receiver};
use std::thread;

use serde::Deserialize;

use super::classify::{classify_failure, transport_failure, FailureReport};
use super::form::ContactMessage;

/// Send status tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendStatus {
    /// No request started
    Idle,
    /// Request in flight
    Sending,
    /// Relay accepted the message
    Sent,
    /// Relay rejected the message or the request failed
    Failed,
}

/// Outcome of a single send attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendResult {
    /// The relay accepted the message.
    Delivered {
        /// Relay's confirmation line.
        message: String,
    },
    /// The relay answered with a non-2xx status.
    Rejected {
        /// Classified failure, ready for display.
        report: FailureReport,
    },
    /// The request never completed.
    TransportFailed {
        /// Classified failure, ready for display.
        report: FailureReport,
    },
}

/// Relay reply body, for both success and failure shapes.
#[derive(Debug, Deserialize, Default)]
struct RelayReply {
    message: Option<String>,
    error: Option<String>,
    details: Option<String>,
}

/// Send state for tracking the background request.
pub struct SendState {
    /// Current send status
    pub status: SendStatus,
    /// Message channel receiver
    receiver: Option<Receiver<SendResult>>,
}

impl SendState {
    /// Creates a new idle send state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            status: SendStatus::Idle,
            receiver: None,
        }
    }

    /// Returns true if a request is in flight.
    #[must_use]
    pub fn is_sending(&self) -> bool {
        self.status == SendStatus::Sending
    }

    /// Polls the message channel for a completed request.
    ///
    /// Returns the result once, when the background thread finishes.
    pub fn poll(&mut self) -> Option<SendResult> {
        let receiver = self.receiver.as_ref()?;
        match receiver.try_recv() {
            Ok(result) => {
                self.receiver = None;
                self.status = match result {
                    SendResult::Delivered { .. } => SendStatus::Sent,
                    SendResult::Rejected { .. } | SendResult::TransportFailed { .. } => {
                        SendStatus::Failed
                    }
                };
                Some(result)
            }
            Err(std::sync::mpsc::TryRecvError::Empty) => None,
            Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                // Thread died without reporting
                self.receiver = None;
                self.status = SendStatus::Failed;
                Some(SendResult::TransportFailed {
                    report: transport_failure("worker exited unexpectedly"),
                })
            }
        }
    }

    /// Starts a send in a background thread.
    ///
    /// Ignored while a request is already in flight.
    pub fn start_send(&mut self, url: &str, message: ContactMessage) {
        if self.is_sending() {
            return;
        }

        let (sender, receiver) = channel();
        self.receiver = Some(receiver);
        self.status = SendStatus::Sending;

        let url = url.to_string();
        thread::spawn(move || {
            let result = post_message(&url, &message);
            let _ = sender.send(result);
        });
    }
}

impl Default for SendState {
    fn default() -> Self {
        Self::new()
    }
}

/// Posts the message to the relay and classifies the response.
fn post_message(url: &str, message: &ContactMessage) -> SendResult {
    // No client timeout: the form stays in "Sending..." until the
    // transport resolves or fails on its own.
    let client = match reqwest::blocking::Client::builder().timeout(None).build() {
        Ok(client) => client,
        Err(e) => {
            return SendResult::TransportFailed {
                report: transport_failure(&e.to_string()),
            }
        }
    };

    let response = match client.post(url).json(message).send() {
        Ok(response) => response,
        Err(e) => {
            return SendResult::TransportFailed {
                report: transport_failure(&e.to_string()),
            }
        }
    };

    let status = response.status().as_u16();
    let reply: RelayReply = response.json().unwrap_or_default();

    if (200..300).contains(&status) {
        SendResult::Delivered {
            message: reply
                .message
                .unwrap_or_else(|| "Message sent successfully!".to_string()),
        }
    } else {
        SendResult::Rejected {
            report: classify_failure(status, reply.error.as_deref(), reply.details.as_deref()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn sample_message() -> ContactMessage {
        ContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello".to_string(),
        }
    }

    #[test]
    fn test_send_state_new() {
        let state = SendState::new();
        assert_eq!(state.status, SendStatus::Idle);
        assert!(!state.is_sending());
    }

    #[test]
    fn test_poll_without_request_yields_nothing() {
        let mut state = SendState::new();
        assert!(state.poll().is_none());
        assert_eq!(state.status, SendStatus::Idle);
    }

    #[test]
    fn test_poll_transitions_to_sent_on_delivery() {
        let mut state = SendState::new();
        let (sender, receiver) = channel();
        state.receiver = Some(receiver);
        state.status = SendStatus::Sending;

        sender
            .send(SendResult::Delivered {
                message: "Message sent successfully!".to_string(),
            })
            .unwrap();

        let result = state.poll().unwrap();
        assert!(matches!(result, SendResult::Delivered { .. }));
        assert_eq!(state.status, SendStatus::Sent);
        // A finished request reports exactly once.
        assert!(state.poll().is_none());
    }

    #[test]
    fn test_poll_transitions_to_failed_on_rejection() {
        let mut state = SendState::new();
        let (sender, receiver) = channel();
        state.receiver = Some(receiver);
        state.status = SendStatus::Sending;

        sender
            .send(SendResult::Rejected {
                report: classify_failure(400, Some("Missing required fields"), None),
            })
            .unwrap();

        assert!(state.poll().is_some());
        assert_eq!(state.status, SendStatus::Failed);
    }

    #[test]
    fn test_poll_empty_channel_keeps_sending() {
        let mut state = SendState::new();
        let (sender, receiver) = channel::<SendResult>();
        state.receiver = Some(receiver);
        state.status = SendStatus::Sending;

        assert!(state.poll().is_none());
        assert!(state.is_sending());
        drop(sender);
    }

    #[test]
    fn test_dropped_worker_reports_failure() {
        let mut state = SendState::new();
        let (sender, receiver) = channel::<SendResult>();
        state.receiver = Some(receiver);
        state.status = SendStatus::Sending;
        drop(sender);

        let result = state.poll().unwrap();
        assert!(matches!(result, SendResult::TransportFailed { .. }));
        assert_eq!(state.status, SendStatus::Failed);
    }

    #[test]
    fn test_start_send_ignored_while_in_flight() {
        let mut state = SendState::new();
        state.status = SendStatus::Sending;
        state.start_send("http://127.0.0.1:1/api/send-email", sample_message());
        // Would have replaced the receiver if accepted.
        assert!(state.receiver.is_none());
    }

    #[test]
    fn test_slow_relay_keeps_request_in_flight() {
        // A server that accepts the connection and never answers must
        // not surface a client-side timeout.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            let conn = listener.accept();
            thread::sleep(Duration::from_millis(800));
            drop(conn);
        });

        let mut state = SendState::new();
        state.start_send(&format!("http://{addr}/api/send-email"), sample_message());

        thread::sleep(Duration::from_millis(300));
        assert!(state.poll().is_none());
        assert!(state.is_sending());
    }

    #[test]
    fn test_transport_failure_against_closed_port() {
        let mut state = SendState::new();
        state.start_send("http://127.0.0.1:9/api/send-email", sample_message());
        assert!(state.is_sending());

        let start = std::time::Instant::now();
        loop {
            if let Some(result) = state.poll() {
                assert!(matches!(result, SendResult::TransportFailed { .. }));
                break;
            }
            assert!(start.elapsed() < Duration::from_secs(30), "no result");
            thread::sleep(Duration::from_millis(20));
        }
        assert_eq!(state.status, SendStatus::Failed);
    }
}
