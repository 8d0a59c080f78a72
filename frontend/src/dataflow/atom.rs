//! Local UI state Atom helper
//!
//! Atom provides a convenient wrapper for simple local UI state while maintaining
//! the Actor+Relay architecture internally. It's designed for local component state
//! like form fields, menu open/closed, the current page.

use crate::dataflow::{Actor, relay, Relay};
use futures::StreamExt;
use zoon::Signal;

/// Internal update type for Atom operations
#[derive(Clone, Debug)]
enum AtomUpdate<T> {
    Set(T),
    SetNeq(T),
}

/// Convenient wrapper for local UI state using Actor+Relay internally.
///
/// Atom provides a simple interface for local component state while
/// maintaining architectural consistency. Use Atom for truly local UI
/// state like:
/// - Form field text (email, password, artist name)
/// - Menu or dialog open/closed
/// - The currently displayed page
///
/// Domain state (session, notifications) belongs in domain Actors instead.
///
/// # Examples
///
/// ```rust
/// use crate::dataflow::Atom;
///
/// let email = Atom::new(String::new());
/// let menu_open = Atom::new(false);
///
/// email.set("mara@example.com".to_string());
/// menu_open.toggle();
///
/// // Bind to UI reactively
/// email.signal() // Signal<Item = String>
/// ```
#[derive(Clone, Debug)]
pub struct Atom<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// The underlying Actor that manages state
    actor: Actor<T>,
    /// Relay for sending updates to the Actor
    setter: Relay<AtomUpdate<T>>,
}

impl<T> Atom<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Create a new Atom with an initial value.
    pub fn new(initial: T) -> Self
    where
        T: PartialEq,
    {
        let (setter, mut setter_stream) = relay();

        let actor = Actor::new(initial, async move |state| {
            while let Some(update) = setter_stream.next().await {
                match update {
                    AtomUpdate::Set(new_value) => {
                        state.set(new_value);
                    }
                    AtomUpdate::SetNeq(new_value) => {
                        state.set_neq(new_value);
                    }
                }
            }
        });

        Self { actor, setter }
    }

    /// Update the Atom's value.
    ///
    /// The update is processed asynchronously and triggers reactive signals.
    pub fn set(&self, value: T) {
        self.setter.send(AtomUpdate::Set(value));
    }

    /// Update the Atom's value only if it differs from the current value.
    ///
    /// Prevents unnecessary signal emissions and re-renders when the value
    /// hasn't actually changed.
    pub fn set_neq(&self, value: T)
    where
        T: PartialEq,
    {
        self.setter.send(AtomUpdate::SetNeq(value));
    }

    /// Get a reactive signal for this Atom's value.
    ///
    /// This is the primary way to access Atom state. The signal emits
    /// the current value and all future updates.
    pub fn signal(&self) -> impl Signal<Item = T> + use<T> {
        self.actor.signal()
    }

    /// Get current value (for event handlers only)
    ///
    /// Provides immediate access to the current value for use in event
    /// handlers, like reading form fields on submit, where signal-based
    /// access isn't practical.
    ///
    /// **Use sparingly** - prefer signal-based access when possible.
    pub fn get_cloned(&self) -> T {
        self.actor.state.lock_ref().clone()
    }
}

/// Boolean-specific methods for Atom<bool>
impl Atom<bool> {
    /// Toggle the boolean value of this Atom.
    ///
    /// Reads the current value in the handler, so two rapid toggles may
    /// observe the same starting value. Fine for menu buttons.
    pub fn toggle(&self) {
        let current = *self.actor.state.lock_ref();
        self.setter.send(AtomUpdate::Set(!current));
    }
}

impl<T> Default for Atom<T>
where
    T: Clone + Send + Sync + Default + PartialEq + 'static,
{
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;
    use zoon::SignalExt;

    #[tokio::test]
    async fn test_atom_basic_functionality() {
        let atom = Atom::new("hello".to_string());

        // Check initial value
        let initial_value = atom.signal().to_stream().next().await.unwrap();
        assert_eq!(initial_value, "hello");

        // Update value
        atom.set("world".to_string());
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        let updated_value = atom.signal().to_stream().next().await.unwrap();
        assert_eq!(updated_value, "world");
    }

    #[tokio::test]
    async fn test_atom_default() {
        let default_string: Atom<String> = Atom::default();
        let default_bool: Atom<bool> = Atom::default();

        let string_val = default_string.signal().to_stream().next().await.unwrap();
        let bool_val = default_bool.signal().to_stream().next().await.unwrap();

        assert_eq!(string_val, "");
        assert!(!bool_val);
    }

    #[tokio::test]
    async fn test_atom_toggle() {
        let flag = Atom::new(false);

        flag.toggle();
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;
        assert!(flag.signal().to_stream().next().await.unwrap());

        flag.toggle();
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;
        assert!(!flag.signal().to_stream().next().await.unwrap());
    }
}
