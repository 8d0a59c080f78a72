//! AuthGateway seam for backend authentication calls
//!
//! The session domain never talks HTTP directly; it drives this trait.
//! The browser implementation posts JSON to the account API, tests inject
//! scripted gateways instead.

use std::future::Future;

use shared::{AuthSession, Credentials, RegistrationProfile};

/// Remote authentication operations.
///
/// Failures surface as human-readable strings. Futures are `Send` so
/// gateway calls can be awaited inside Actor processors; browser-side
/// request futures are not `Send`, so [`ApiGateway`] runs them in a
/// local task and hands the result back over a channel.
pub trait AuthGateway: Send + Sync + 'static {
    fn login(
        &self,
        credentials: Credentials,
    ) -> impl Future<Output = Result<AuthSession, String>> + Send;

    fn register(
        &self,
        profile: RegistrationProfile,
    ) -> impl Future<Output = Result<AuthSession, String>> + Send;

    fn logout(&self) -> impl Future<Output = Result<(), String>> + Send;
}

/// Gateway backed by the account API.
pub struct ApiGateway;

mod web {
    use super::*;
    use futures::channel::oneshot;
    use serde::Serialize;
    use serde::de::DeserializeOwned;
    use zoon::Task;

    const LOGIN_URL: &str = "/api/auth/login";
    const REGISTER_URL: &str = "/api/auth/register";
    const LOGOUT_URL: &str = "/api/auth/logout";

    /// Run a browser request future on a local task and await the result
    /// from a Send context. The request future holds JS values and cannot
    /// cross the Send bound itself.
    fn via_local_task<T, F>(request: F) -> impl Future<Output = Result<T, String>> + Send
    where
        T: Send + 'static,
        F: Future<Output = Result<T, String>> + 'static,
    {
        let (sender, receiver) = oneshot::channel();
        Task::start(async move {
            let _ = sender.send(request.await);
        });
        async move {
            receiver
                .await
                .unwrap_or_else(|_| Err("Request cancelled".to_string()))
        }
    }

    async fn post_json<B, T>(url: &str, body: &B) -> Result<T, String>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let response = gloo_net::http::Request::post(url)
            .json(body)
            .map_err(|e| format!("Request build error: {e}"))?
            .send()
            .await
            .map_err(|e| format!("Request error: {e}"))?;

        if !response.ok() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(format!("HTTP error {status}: {error_text}"));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| format!("Parse error: {e}"))
    }

    impl AuthGateway for ApiGateway {
        fn login(
            &self,
            credentials: Credentials,
        ) -> impl Future<Output = Result<AuthSession, String>> + Send {
            via_local_task(async move { post_json(LOGIN_URL, &credentials).await })
        }

        fn register(
            &self,
            profile: RegistrationProfile,
        ) -> impl Future<Output = Result<AuthSession, String>> + Send {
            via_local_task(async move { post_json(REGISTER_URL, &profile).await })
        }

        fn logout(&self) -> impl Future<Output = Result<(), String>> + Send {
            via_local_task(async move {
                let response = gloo_net::http::Request::post(LOGOUT_URL)
                    .send()
                    .await
                    .map_err(|e| format!("Request error: {e}"))?;

                if !response.ok() {
                    return Err(format!("HTTP error: {}", response.status()));
                }
                Ok(())
            })
        }
    }
}
