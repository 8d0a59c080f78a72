//! Simplified event streaming Relay implementation
//!
//! Relay provides type-safe event streaming for Actor+Relay architecture
//! using simple unbounded channels instead of complex custom Stream implementation.

use futures::channel::mpsc::{unbounded, UnboundedSender, UnboundedReceiver};

/// Type-safe event streaming relay for Actor+Relay architecture.
///
/// Relays provide reliable message passing from UI components to Actors
/// using simple unbounded channels.
///
/// # Event-Source Naming Convention
///
/// All relays MUST follow `{source}_{event}_relay` naming pattern:
/// - `login_submitted_relay` - User submitted the login form
/// - `notification_added_relay` - A new notification was produced
/// - `logout_requested_relay` - User clicked the logout control
///
/// # Examples
///
/// ```rust
/// use crate::dataflow::{Relay, relay};
///
/// // Create relay with subscription stream
/// let (notification_read_relay, mut stream) = relay::<String>();
///
/// // Emit events from UI
/// notification_read_relay.send("notification_3".to_string());
///
/// // Process events in Actor
/// while let Some(id) = stream.next().await {
///     println!("Mark as read: {id}");
/// }
/// ```
#[derive(Clone, Debug)]
pub struct Relay<T>
where
    T: Clone + Send + Sync + 'static,
{
    sender: UnboundedSender<T>,
}

/// Error type for Relay operations
#[derive(Debug, Clone)]
pub enum RelayError {
    /// The channel has been closed (receiver dropped)
    ChannelClosed,
}

impl<T> Relay<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Create a new Relay with an associated receiver stream.
    ///
    /// Returns a tuple of (Relay, UnboundedReceiver) following Rust's
    /// channel patterns. Use the `relay()` function for more convenient creation.
    pub fn new() -> (Self, UnboundedReceiver<T>) {
        let (sender, receiver) = unbounded();
        (Relay { sender }, receiver)
    }

    /// Send an event through the relay.
    ///
    /// If the receiver has been dropped, the event is silently discarded.
    /// Use `try_send()` if you need to handle send failures.
    pub fn send(&self, value: T) {
        // Ignore send errors - events are dropped if no subscriber exists
        let _ = self.sender.unbounded_send(value);
    }

    /// Try to send an event through the relay with explicit error handling.
    ///
    /// Returns an error if the channel has been closed (receiver dropped).
    #[allow(dead_code)]
    pub fn try_send(&self, value: T) -> Result<(), RelayError> {
        self.sender
            .unbounded_send(value)
            .map_err(|_| RelayError::ChannelClosed)
    }
}

impl<T> Default for Relay<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Create a new Relay with a receiver that is immediately dropped.
    ///
    /// This creates a "disconnected" relay where events are silently discarded.
    /// Useful for optional relays in structs that may not have event handlers,
    /// like a notification action that nothing listens to yet.
    fn default() -> Self {
        let (relay, _receiver) = Self::new();
        relay
    }
}

/// Creates a new Relay with an associated receiver stream.
///
/// This is the idiomatic way to create a Relay for use with Actors,
/// following Rust's channel pattern conventions.
///
/// # Examples
///
/// ```rust
/// use crate::dataflow::relay;
/// use futures::StreamExt;
///
/// let (all_read_relay, mut all_read_stream) = relay::<()>();
///
/// while let Some(()) = all_read_stream.next().await {
///     // mark every entry read
/// }
/// ```
pub fn relay<T>() -> (Relay<T>, UnboundedReceiver<T>)
where
    T: Clone + Send + Sync + 'static,
{
    Relay::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    #[tokio::test]
    async fn test_relay_basic_functionality() {
        let (relay, mut receiver) = Relay::new();

        relay.send("login_submitted".to_string());

        let received = receiver.next().await;
        assert_eq!(received, Some("login_submitted".to_string()));
    }

    #[tokio::test]
    async fn test_relay_try_send() {
        let (relay, mut receiver) = Relay::new();

        // Should succeed while receiver exists
        assert!(relay.try_send("event".to_string()).is_ok());
        assert_eq!(receiver.next().await, Some("event".to_string()));

        // Drop receiver
        drop(receiver);

        // Should fail after receiver dropped
        assert!(relay.try_send("fail".to_string()).is_err());
    }

    #[tokio::test]
    async fn test_relay_function() {
        let (relay, mut stream) = relay::<String>();

        relay.send("via_function".to_string());

        assert_eq!(stream.next().await, Some("via_function".to_string()));
    }
}
