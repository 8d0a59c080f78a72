//! Single-value Actor implementation for reactive state management
//!
//! Actor provides controlled state management with sequential message processing.
//! It owns a Mutable<T> and processes events from Relays to update state safely.

use zoon::{Mutable, Signal, Task, TaskHandle};
use std::future::Future;
use std::sync::Arc;

/// Single-value reactive state container for Actor+Relay architecture.
///
/// Actor controls all mutations to a piece of state through sequential
/// message processing. It prevents race conditions and provides traceability
/// for all state changes. Overlapping operations (a second login submitted
/// while one is in flight) queue behind each other instead of racing.
///
/// # Core Principles
///
/// - **Single Point of Mutation**: Only the Actor can modify its state
/// - **Sequential Processing**: Events are processed one at a time in order
/// - **Reactive Signals**: UI can bind to state changes through signals
/// - **No Direct Access**: No .get() methods - use signals for all access
///
/// # Examples
///
/// ```rust
/// use crate::dataflow::{Actor, relay};
/// use futures::{select, StreamExt};
///
/// let (logout_requested_relay, mut logout_stream) = relay();
/// let (error_cleared_relay, mut error_cleared_stream) = relay();
///
/// let session = Actor::new(SessionState::default(), async move |state| {
///     loop {
///         select! {
///             Some(()) = logout_stream.next() => {
///                 state.update_mut(|s| s.user = None);
///             }
///             Some(()) = error_cleared_stream.next() => {
///                 state.update_mut(|s| s.error = None);
///             }
///         }
///     }
/// });
///
/// // Emit events
/// logout_requested_relay.send(());
///
/// // Bind to UI
/// session.signal() // Always returns current state reactively
/// ```
#[derive(Clone, Debug)]
pub struct Actor<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub(crate) state: Mutable<T>,
    #[allow(dead_code)]
    task_handle: Arc<TaskHandle>,
    #[cfg(debug_assertions)]
    #[allow(dead_code)]
    creation_location: &'static std::panic::Location<'static>,
}

impl<T> Actor<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Create a new Actor with initial state and event processing loop.
    ///
    /// The processor function should contain a loop that uses `select!`
    /// to handle multiple event streams sequentially. The processor task
    /// is droppable: when the last Actor clone goes away the loop is
    /// cancelled, so timers inside it never fire against dead state.
    #[track_caller]
    pub fn new<F, Fut>(initial_state: T, processor: F) -> Self
    where
        F: FnOnce(Mutable<T>) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let state = Mutable::new(initial_state);

        // Start the async processor task with droppable handle
        let task_handle = Arc::new(Task::start_droppable(processor(state.clone())));

        Self {
            state,
            task_handle,
            #[cfg(debug_assertions)]
            creation_location: std::panic::Location::caller(),
        }
    }

    /// Get a reactive signal for this Actor's state.
    ///
    /// This is the ONLY way to access Actor state. No direct .get() methods
    /// are provided to maintain architectural principles.
    pub fn signal(&self) -> impl Signal<Item = T> + use<T> {
        self.state.signal_cloned()
    }

    /// Get a reactive signal with a reference to avoid cloning.
    ///
    /// Use this to derive a small value from a larger state, like reading
    /// only `is_loading` out of the session state.
    pub fn signal_ref<U, F>(&self, f: F) -> impl Signal<Item = U> + use<T, U, F>
    where
        U: PartialEq + Send + Sync + 'static,
        F: Fn(&T) -> U + Send + Sync + 'static,
    {
        self.state.signal_ref(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataflow::relay;
    use futures::{select, StreamExt};

    #[tokio::test]
    async fn test_actor_basic_functionality() {
        let (unread_relay, mut unread_stream) = relay();

        let unread_count = Actor::new(0usize, async move |state| {
            while let Some(amount) = unread_stream.next().await {
                state.update_mut(|current| *current += amount);
            }
        });

        // Wait a moment for the processor to start
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        unread_relay.send(5);
        unread_relay.send(3);

        // Wait for processing
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        // Check final state through signal
        let final_value = unread_count.signal().to_stream().next().await.unwrap();
        assert_eq!(final_value, 8);
    }

    #[tokio::test]
    async fn test_actor_multiple_streams() {
        let (added_relay, mut added_stream) = relay();
        let (read_relay, mut read_stream) = relay();

        let unread_count = Actor::new(10usize, async move |state| {
            loop {
                select! {
                    amount = added_stream.next() => {
                        if let Some(amount) = amount {
                            state.update_mut(|current| *current += amount);
                        }
                    }
                    amount = read_stream.next() => {
                        if let Some(amount) = amount {
                            state.update_mut(|current| *current = current.saturating_sub(amount));
                        }
                    }
                }
            }
        });

        // Wait for processor to start
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        added_relay.send(5usize);
        read_relay.send(3usize);

        // Wait for processing
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        let final_value = unread_count.signal().to_stream().next().await.unwrap();
        assert_eq!(final_value, 12); // 10 + 5 - 3
    }

    #[tokio::test]
    async fn test_actor_state_handle_operations() {
        let (event_relay, mut event_stream) = relay();

        let actor = Actor::new("draft".to_string(), async move |state| {
            while let Some(operation) = event_stream.next().await {
                match operation.as_str() {
                    "uppercase" => {
                        let current = state.get_cloned();
                        state.set(current.to_uppercase());
                    }
                    "clear" => state.set_neq(String::new()),
                    value => state.update_mut(|s| s.push_str(value)),
                }
            }
        });

        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        event_relay.send("_title".to_string());
        event_relay.send("uppercase".to_string());

        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        let final_value = actor.signal().to_stream().next().await.unwrap();
        assert_eq!(final_value, "DRAFT_TITLE");
    }
}
