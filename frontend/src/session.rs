//! Session Actor+Relay Domain
//!
//! Owns the authenticated-user identity and the login/register/logout
//! operations. The gateway (network) and key/value store (persistence)
//! collaborators are injected at construction; the actor is the single
//! point of mutation, so overlapping submissions serialize instead of
//! racing.

use futures::{StreamExt, select};
use shared::{Credentials, RegistrationProfile, UserProfile};
use zoon::*;

use crate::auth_gateway::AuthGateway;
use crate::dataflow::{Actor, Relay, relay};
use crate::local_store::KeyValueStore;

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "soundrise_token";
/// Storage key for the serialized user record. Travels with the token.
pub const USER_KEY: &str = "soundrise_user";

/// Authentication state owned by the session actor.
///
/// Invariant: authenticated ⇔ `user.is_some()`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<UserProfile>,
    /// True during an in-flight login/register call or the initial restore.
    pub is_loading: bool,
    /// Last operation failure, cleared explicitly or on the next attempt.
    pub error: Option<String>,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Session domain with proper Actor+Relay architecture.
#[derive(Clone)]
pub struct Session {
    state: Actor<SessionState>,
    pub login_submitted_relay: Relay<Credentials>,
    pub register_submitted_relay: Relay<RegistrationProfile>,
    pub logout_requested_relay: Relay<()>,
    pub error_cleared_relay: Relay<()>,
}

impl Session {
    /// Build the session domain around injected collaborators.
    ///
    /// The persisted session is restored best-effort before any event is
    /// processed; a malformed record is discarded together with the token
    /// and the session starts logged out.
    pub fn new<G, S>(gateway: G, store: S) -> Self
    where
        G: AuthGateway,
        S: KeyValueStore + Send + Sync + 'static,
    {
        let (login_submitted_relay, mut login_submitted_stream) = relay::<Credentials>();
        let (register_submitted_relay, mut register_submitted_stream) =
            relay::<RegistrationProfile>();
        let (logout_requested_relay, mut logout_requested_stream) = relay::<()>();
        let (error_cleared_relay, mut error_cleared_stream) = relay::<()>();

        let initial = SessionState {
            user: None,
            is_loading: true,
            error: None,
        };

        let state = Actor::new(initial, async move |state| {
            let restored = restore_persisted_session(&store);
            state.update_mut(|s| {
                s.user = restored;
                s.is_loading = false;
            });

            loop {
                select! {
                    credentials = login_submitted_stream.next() => {
                        if let Some(credentials) = credentials {
                            state.update_mut(|s| {
                                s.is_loading = true;
                                s.error = None;
                            });
                            let outcome = gateway.login(credentials).await;
                            apply_auth_outcome(&state, &store, outcome);
                        }
                    }
                    profile = register_submitted_stream.next() => {
                        if let Some(profile) = profile {
                            state.update_mut(|s| {
                                s.is_loading = true;
                                s.error = None;
                            });
                            let outcome = gateway.register(profile).await;
                            apply_auth_outcome(&state, &store, outcome);
                        }
                    }
                    logout = logout_requested_stream.next() => {
                        if let Some(()) = logout {
                            // The session ends locally no matter what the
                            // backend says about it.
                            if let Err(error) = gateway.logout().await {
                                zoon::eprintln!("Logout request failed: {error}");
                            }
                            store.remove(TOKEN_KEY);
                            store.remove(USER_KEY);
                            state.update_mut(|s| s.user = None);
                        }
                    }
                    cleared = error_cleared_stream.next() => {
                        if let Some(()) = cleared {
                            state.update_mut(|s| s.error = None);
                        }
                    }
                }
            }
        });

        Session {
            state,
            login_submitted_relay,
            register_submitted_relay,
            logout_requested_relay,
            error_cleared_relay,
        }
    }

    pub fn state_signal(&self) -> impl Signal<Item = SessionState> + use<> {
        self.state.signal()
    }

    pub fn user_signal(&self) -> impl Signal<Item = Option<UserProfile>> + use<> {
        self.state.signal_ref(|s| s.user.clone())
    }

    pub fn is_authenticated_signal(&self) -> impl Signal<Item = bool> + use<> {
        self.state.signal_ref(|s| s.is_authenticated())
    }

    pub fn is_loading_signal(&self) -> impl Signal<Item = bool> + use<> {
        self.state.signal_ref(|s| s.is_loading)
    }

    pub fn error_signal(&self) -> impl Signal<Item = Option<String>> + use<> {
        self.state.signal_ref(|s| s.error.clone())
    }
}

/// Read the persisted token + user record. Both keys must be present and
/// the record must parse; anything else resolves to logged-out, and a
/// half-written or malformed pair is removed so the next visit starts
/// clean.
fn restore_persisted_session<S: KeyValueStore>(store: &S) -> Option<UserProfile> {
    match (store.get(TOKEN_KEY), store.get(USER_KEY)) {
        (Some(_token), Some(user_json)) => match serde_json::from_str::<UserProfile>(&user_json) {
            Ok(user) => Some(user),
            Err(error) => {
                zoon::eprintln!("Discarding unreadable persisted session: {error}");
                store.remove(TOKEN_KEY);
                store.remove(USER_KEY);
                None
            }
        },
        (None, None) => None,
        _ => {
            // Token and user record travel together; an unpaired key is
            // left over from an interrupted write.
            store.remove(TOKEN_KEY);
            store.remove(USER_KEY);
            None
        }
    }
}

fn apply_auth_outcome<S: KeyValueStore>(
    state: &Mutable<SessionState>,
    store: &S,
    outcome: Result<shared::AuthSession, String>,
) {
    match outcome {
        Ok(auth) => {
            store.insert(TOKEN_KEY, &auth.token);
            match serde_json::to_string(&auth.user) {
                Ok(user_json) => store.insert(USER_KEY, &user_json),
                Err(error) => zoon::eprintln!("Failed to serialize user record: {error}"),
            }
            state.update_mut(|s| {
                s.user = Some(auth.user);
                s.is_loading = false;
            });
        }
        Err(message) => {
            state.update_mut(|s| {
                s.error = Some(message);
                s.is_loading = false;
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::local_store::MemoryStore;
    use shared::{AuthSession, Plan};
    use std::future::Future;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn sample_user() -> UserProfile {
        UserProfile {
            id: "1".into(),
            email: "a@b.com".into(),
            name: "A".into(),
            artist_name: "A".into(),
            avatar: None,
            plan: Plan::Free,
            verified: false,
            joined_at: "2025-01-01".into(),
        }
    }

    /// Gateway scripted per operation; also counts logout calls.
    #[derive(Clone)]
    struct ScriptedGateway {
        login_result: Result<AuthSession, String>,
        logout_result: Result<(), String>,
        logout_calls: Arc<AtomicUsize>,
    }

    impl ScriptedGateway {
        fn succeeding() -> Self {
            ScriptedGateway {
                login_result: Ok(AuthSession {
                    token: "t1".into(),
                    user: sample_user(),
                }),
                logout_result: Ok(()),
                logout_calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn failing(message: &str) -> Self {
            ScriptedGateway {
                login_result: Err(message.to_string()),
                logout_result: Err(message.to_string()),
                logout_calls: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    impl AuthGateway for ScriptedGateway {
        fn login(
            &self,
            _credentials: Credentials,
        ) -> impl Future<Output = Result<AuthSession, String>> + Send {
            let result = self.login_result.clone();
            async move { result }
        }

        fn register(
            &self,
            _profile: RegistrationProfile,
        ) -> impl Future<Output = Result<AuthSession, String>> + Send {
            let result = self.login_result.clone();
            async move { result }
        }

        fn logout(&self) -> impl Future<Output = Result<(), String>> + Send {
            let result = self.logout_result.clone();
            let calls = self.logout_calls.clone();
            async move {
                calls.fetch_add(1, Ordering::SeqCst);
                result
            }
        }
    }

    async fn settle() {
        tokio::time::sleep(tokio::time::Duration::from_millis(20)).await;
    }

    async fn current_state(session: &Session) -> SessionState {
        session.state_signal().to_stream().next().await.unwrap()
    }

    #[tokio::test]
    async fn successful_login_stores_session() {
        let store = MemoryStore::default();
        let session = Session::new(ScriptedGateway::succeeding(), store.clone());
        settle().await;

        session.login_submitted_relay.send(Credentials {
            email: "a@b.com".into(),
            password: "pw".into(),
        });
        settle().await;

        let state = current_state(&session).await;
        assert!(state.is_authenticated());
        assert_eq!(state.user.as_ref().unwrap().id, "1");
        assert_eq!(state.error, None);
        assert!(!state.is_loading);

        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("t1"));
        let persisted: UserProfile =
            serde_json::from_str(&store.get(USER_KEY).unwrap()).unwrap();
        assert_eq!(persisted, sample_user());
    }

    #[tokio::test]
    async fn failed_login_surfaces_error_and_stays_logged_out() {
        let store = MemoryStore::default();
        let session = Session::new(ScriptedGateway::failing("Invalid credentials"), store.clone());
        settle().await;

        session.login_submitted_relay.send(Credentials {
            email: "a@b.com".into(),
            password: "wrong".into(),
        });
        settle().await;

        let state = current_state(&session).await;
        assert!(!state.is_authenticated());
        assert_eq!(state.error.as_deref(), Some("Invalid credentials"));
        assert!(!state.is_loading);
        assert!(store.get(TOKEN_KEY).is_none());

        session.error_cleared_relay.send(());
        settle().await;
        assert_eq!(current_state(&session).await.error, None);
    }

    #[tokio::test]
    async fn logout_clears_session_even_when_gateway_rejects() {
        let store = MemoryStore::default();
        store.insert(TOKEN_KEY, "t1");
        store.insert(USER_KEY, &serde_json::to_string(&sample_user()).unwrap());

        let gateway = ScriptedGateway::failing("backend down");
        let logout_calls = gateway.logout_calls.clone();
        let session = Session::new(gateway, store.clone());
        settle().await;
        assert!(current_state(&session).await.is_authenticated());

        session.logout_requested_relay.send(());
        settle().await;

        let state = current_state(&session).await;
        assert!(!state.is_authenticated());
        assert_eq!(logout_calls.load(Ordering::SeqCst), 1);
        // Persisted credentials go away with the session
        assert!(store.get(TOKEN_KEY).is_none());
        assert!(store.get(USER_KEY).is_none());
    }

    #[tokio::test]
    async fn unparsable_persisted_record_resolves_to_logged_out() {
        let store = MemoryStore::default();
        store.insert(TOKEN_KEY, "t1");
        store.insert(USER_KEY, "{not json");

        let session = Session::new(ScriptedGateway::succeeding(), store.clone());
        settle().await;

        let state = current_state(&session).await;
        assert!(!state.is_authenticated());
        assert!(!state.is_loading);
        assert!(store.get(TOKEN_KEY).is_none());
        assert!(store.get(USER_KEY).is_none());
    }

    #[tokio::test]
    async fn valid_persisted_record_restores_session() {
        let store = MemoryStore::default();
        store.insert(TOKEN_KEY, "t1");
        store.insert(USER_KEY, &serde_json::to_string(&sample_user()).unwrap());

        let session = Session::new(ScriptedGateway::succeeding(), store.clone());
        settle().await;

        let state = current_state(&session).await;
        assert_eq!(state.user, Some(sample_user()));
        assert!(!state.is_loading);
    }
}
