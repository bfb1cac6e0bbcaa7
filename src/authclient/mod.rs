pub use navigator::{BrowserNavigator, Navigator};
pub use types::User;

mod navigator;
mod types;

#[cfg(test)]
pub use navigator::MockNavigator;

use crate::config::ClientConfig;

const ME_PATH: &str = "/auth/me";
const LOGIN_PATH: &str = "/auth/discord/login";
const LOGOUT_PATH: &str = "/auth/logout";
const SESSION_COOKIE: &str = "auth_token";

/// Backend session endpoints.
pub trait AuthClient {
    /// The user behind the current session cookie. `Ok(None)` means the
    /// backend answered with a non-success status, i.e. there is no session.
    fn get_current_user(
        &self,
    ) -> impl std::future::Future<Output = Result<Option<User>, anyhow::Error>> + Send;

    /// Ends the session. Any HTTP response counts as success.
    fn logout(&self) -> impl std::future::Future<Output = Result<(), anyhow::Error>> + Send;

    /// Where the browser goes to start the OAuth login.
    fn login_url(&self) -> String;
}

pub struct AuthEndpoints {
    me: String,
    login: String,
    logout: String,
}

impl AuthEndpoints {
    pub fn from_config(config: &ClientConfig) -> Self {
        Self {
            me: config.endpoint(ME_PATH),
            login: config.endpoint(LOGIN_PATH),
            logout: config.endpoint(LOGOUT_PATH),
        }
    }
}

impl Default for AuthEndpoints {
    fn default() -> Self {
        Self::from_config(&ClientConfig::default())
    }
}

pub struct AuthReqwestClient {
    endpoints: AuthEndpoints,
    client: reqwest::Client,
    session_token: Option<String>,
}

impl AuthReqwestClient {
    pub fn new(config: &ClientConfig) -> Result<Self, anyhow::Error> {
        AuthReqwestClient::new_with_endpoints(AuthEndpoints::from_config(config), None)
    }

    /// Sends `token` as the backend's `auth_token` session cookie. The login
    /// callback sets that cookie in the browser, so a native client has to be
    /// handed the token explicitly.
    pub fn new_with_token(config: &ClientConfig, token: &str) -> Result<Self, anyhow::Error> {
        AuthReqwestClient::new_with_endpoints(AuthEndpoints::from_config(config), Some(token))
    }

    /// Without a token the inner cookie jar is the only session carrier.
    pub fn new_with_endpoints(
        endpoints: AuthEndpoints,
        session_token: Option<&str>,
    ) -> Result<Self, anyhow::Error> {
        Ok(Self {
            endpoints,
            client: reqwest::Client::builder().cookie_store(true).build()?,
            session_token: session_token.map(str::to_string),
        })
    }

    async fn perform_request(
        &self,
        method: reqwest::Method,
        url: &str,
    ) -> Result<reqwest::Response, reqwest::Error> {
        let mut request = self.client.request(method, url);
        if let Some(token) = &self.session_token {
            request = request.header(
                reqwest::header::COOKIE,
                format!("{SESSION_COOKIE}={token}"),
            );
        }
        request.send().await
    }
}

impl AuthClient for AuthReqwestClient {
    async fn get_current_user(&self) -> Result<Option<User>, anyhow::Error> {
        let response = self
            .perform_request(reqwest::Method::GET, &self.endpoints.me)
            .await?;

        if !response.status().is_success() {
            log::debug!("{} answered {}", self.endpoints.me, response.status());
            return Ok(None);
        }

        Ok(Some(response.json::<User>().await?))
    }

    async fn logout(&self) -> Result<(), anyhow::Error> {
        let response = self
            .perform_request(reqwest::Method::POST, &self.endpoints.logout)
            .await?;
        log::debug!("{} answered {}", self.endpoints.logout, response.status());
        Ok(())
    }

    fn login_url(&self) -> String {
        self.endpoints.login.clone()
    }
}

#[cfg(test)]
pub struct MockAuthClient {
    pub current_user_ret_val: Result<Option<User>, anyhow::Error>,
    pub logout_ret_val: Result<(), anyhow::Error>,
    pub latency: std::time::Duration,
    pub current_user_calls: std::sync::atomic::AtomicUsize,
    pub logout_calls: std::sync::atomic::AtomicUsize,
}

#[cfg(test)]
impl Default for MockAuthClient {
    fn default() -> Self {
        Self {
            current_user_ret_val: Ok(None),
            logout_ret_val: Ok(()),
            latency: std::time::Duration::ZERO,
            current_user_calls: 0.into(),
            logout_calls: 0.into(),
        }
    }
}

#[cfg(test)]
impl AuthClient for MockAuthClient {
    async fn get_current_user(&self) -> Result<Option<User>, anyhow::Error> {
        self.current_user_calls
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        tokio::time::sleep(self.latency).await;
        self.current_user_ret_val
            .as_ref()
            .map_err(|e| anyhow::anyhow!("mock error {}", e))
            .cloned()
    }

    async fn logout(&self) -> Result<(), anyhow::Error> {
        self.logout_calls
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        tokio::time::sleep(self.latency).await;
        self.logout_ret_val
            .as_ref()
            .map_err(|e| anyhow::anyhow!("mock error {}", e))
            .cloned()
    }

    fn login_url(&self) -> String {
        AuthEndpoints::default().login
    }
}
