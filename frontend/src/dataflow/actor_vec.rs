//! Reactive collection Actor implementation
//!
//! ActorVec provides controlled collection management with sequential message processing.
//! It wraps MutableVec<T> and processes events from Relays to update collections safely.

use zoon::{MutableVec, Signal, Task, SignalVecExt, SignalExt, MutableVecExt};
use futures::stream::Stream;
use std::future::Future;

/// Reactive collection container for Actor+Relay architecture.
///
/// ActorVec controls all mutations to a collection through sequential
/// message processing. It prevents race conditions and provides efficient
/// reactive updates through VecDiff signals.
///
/// # Core Principles
///
/// - **Sequential Processing**: Collection updates processed one at a time
/// - **VecDiff Signals**: Efficient UI updates with only changed items
/// - **Event-Driven**: All changes come through Relay events
/// - **No Direct Access**: Use signals and streams for all access
///
/// # Examples
///
/// ```rust
/// use crate::dataflow::{ActorVec, relay};
/// use futures::{select, StreamExt};
///
/// let (notification_added_relay, mut added_stream) = relay();
/// let (notifications_cleared_relay, mut cleared_stream) = relay();
///
/// let notifications = ActorVec::new(vec![], async move |items| {
///     loop {
///         select! {
///             Some(entry) = added_stream.next() => {
///                 // Newest-first ordering
///                 items.insert_cloned(0, entry);
///             }
///             Some(()) = cleared_stream.next() => {
///                 items.clear();
///             }
///         }
///     }
/// });
///
/// // Bind to UI with efficient VecDiff updates
/// notifications.signal_vec()
/// ```
#[derive(Clone, Debug)]
pub struct ActorVec<T>
where
    T: Clone + Send + Sync + 'static,
{
    vec: MutableVec<T>,
    #[cfg(debug_assertions)]
    #[allow(dead_code)]
    creation_location: &'static std::panic::Location<'static>,
}

impl<T> ActorVec<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Create a new ActorVec with initial items and event processing loop.
    ///
    /// The processor function should contain a loop that uses `select!`
    /// to handle multiple event streams and update the collection.
    #[track_caller]
    pub fn new<F, Fut>(initial_items: Vec<T>, processor: F) -> Self
    where
        F: FnOnce(ActorVecHandle<T>) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let vec = MutableVec::new_with_values(initial_items);
        let vec_handle = ActorVecHandle {
            mutable_vec: vec.clone(),
        };

        // Start the async processor task
        Task::start(processor(vec_handle));

        Self {
            vec,
            #[cfg(debug_assertions)]
            creation_location: std::panic::Location::caller(),
        }
    }

    /// Get a signal for the entire collection.
    ///
    /// Returns a signal that emits the full collection whenever it changes.
    /// Use `signal_vec()` for more efficient VecDiff updates.
    pub fn signal(&self) -> impl Signal<Item = Vec<T>> + use<T> {
        self.vec.signal_vec_cloned().to_signal_cloned()
    }

    /// Get an efficient VecDiff signal for reactive UI updates.
    ///
    /// This is the preferred way to bind collections to UI as it only
    /// emits changes (additions, removals, updates) rather than the full
    /// collection on every change.
    pub fn signal_vec(&self) -> impl zoon::SignalVec<Item = T> + use<T> {
        self.vec.signal_vec_cloned()
    }

    /// Get a signal with a reference to avoid cloning.
    ///
    /// Use when you need to compute derived values from the collection,
    /// like the unread count, without cloning every entry.
    pub fn signal_ref<U, F>(&self, f: F) -> impl Signal<Item = U> + use<T, U, F>
    where
        U: PartialEq + Send + Sync + Copy + 'static,
        F: Fn(&Vec<T>) -> U + Send + Sync + 'static,
    {
        self.vec.signal_vec_cloned()
            .to_signal_cloned()
            .map(move |vec| f(&vec))
            .dedupe()
    }

    /// Convert to a stream for async processing.
    ///
    /// Returns a stream that emits the full collection on every change.
    /// Useful for testing and async processing scenarios.
    pub fn to_stream(&self) -> impl Stream<Item = Vec<T>> + use<T> {
        self.signal().to_stream()
    }
}

/// Handle for updating ActorVec from within the processor function.
///
/// This handle provides controlled access to the underlying MutableVec<T>
/// for collection updates. It's only available within the ActorVec's processor.
pub struct ActorVecHandle<T>
where
    T: Clone + Send + Sync + 'static,
{
    mutable_vec: MutableVec<T>,
}

impl<T> ActorVecHandle<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Add an item to the end of the collection.
    ///
    /// Triggers a VecDiff::Push signal for efficient UI updates.
    pub fn push_cloned(&self, item: T) {
        self.mutable_vec.lock_mut().push_cloned(item);
    }

    /// Insert an item at a specific index.
    ///
    /// Panics if the index is out of bounds. Triggers a VecDiff::InsertAt
    /// signal for the UI. Index 0 gives newest-first ordering.
    pub fn insert_cloned(&self, index: usize, item: T) {
        self.mutable_vec.lock_mut().insert_cloned(index, item);
    }

    /// Remove all items that do not match a predicate.
    ///
    /// Returns the number of items removed. More efficient than removing
    /// items one by one as it minimizes signal emissions.
    pub fn retain<F>(&self, mut f: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let mut vec_guard = self.mutable_vec.lock_mut();
        let initial_len = vec_guard.len();
        vec_guard.retain(|item| f(item));
        initial_len - vec_guard.len()
    }

    /// Update the collection using a closure.
    ///
    /// The closure receives a mutable reference to the underlying MutableVec
    /// and can perform multiple operations efficiently, like flipping the
    /// `read` flag on every entry.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut zoon::MutableVecLockMut<T>),
    {
        self.mutable_vec.update_mut(f)
    }

    /// Clear all items from the collection.
    ///
    /// Triggers a VecDiff::Clear signal for the UI.
    pub fn clear(&self) {
        self.mutable_vec.lock_mut().clear();
    }

    /// Check if the collection is empty.
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.mutable_vec.lock_ref().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataflow::relay;
    use futures::{select, StreamExt};

    #[tokio::test]
    async fn test_actor_vec_prepend_ordering() {
        let (added_relay, mut added_stream) = relay();
        let (cleared_relay, mut cleared_stream) = relay();

        let items = ActorVec::new(vec![], async move |items_handle| {
            loop {
                select! {
                    item = added_stream.next() => {
                        if let Some(item) = item {
                            items_handle.insert_cloned(0, item);
                        }
                    }
                    cleared = cleared_stream.next() => {
                        if let Some(()) = cleared {
                            items_handle.clear();
                        }
                    }
                }
            }
        });

        // Wait for processor to start
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        added_relay.send("a".to_string());
        added_relay.send("b".to_string());
        added_relay.send("c".to_string());

        // Wait for processing
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        let current_items = items.to_stream().next().await.unwrap();
        assert_eq!(current_items, vec!["c", "b", "a"]);

        cleared_relay.send(());

        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        let final_items = items.to_stream().next().await.unwrap();
        assert!(final_items.is_empty());
    }

    #[tokio::test]
    async fn test_actor_vec_handle_operations() {
        let (operation_relay, mut operation_stream) = relay();

        let items = ActorVec::new(vec![1, 2, 3], async move |items_handle| {
            while let Some(op) = operation_stream.next().await {
                match op.as_str() {
                    "clear" => items_handle.clear(),
                    "promote_last" => items_handle.update(|items| {
                        let last_index = items.len() - 1;
                        let item = items.remove(last_index);
                        items.insert_cloned(0, item);
                    }),
                    _ => {}
                }
            }
        });

        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        operation_relay.send("promote_last".to_string());
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        let promoted = items.to_stream().next().await.unwrap();
        assert_eq!(promoted, vec![3, 1, 2]);

        operation_relay.send("clear".to_string());
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        let cleared = items.to_stream().next().await.unwrap();
        assert!(cleared.is_empty());
    }

    #[tokio::test]
    async fn test_actor_vec_retain_functionality() {
        let (filter_relay, mut filter_stream) = relay();

        let items = ActorVec::new(vec![1, 2, 3, 4, 5], async move |items_handle| {
            while let Some(threshold) = filter_stream.next().await {
                items_handle.retain(|&item| item > threshold);
            }
        });

        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        filter_relay.send(3); // Keep only items > 3
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        let filtered = items.to_stream().next().await.unwrap();
        assert_eq!(filtered, vec![4, 5]);
    }
}
