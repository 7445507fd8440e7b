//! The tracker session: login lifecycle, authenticated transport, and the
//! generic request/response pipeline every endpoint runs through.

use crate::envelope::{self, Envelope, StatusMode};
use crate::error::{Result, TrackerClientError};
use crate::types::{Identity, TrackerConfig};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};
use url::Url;

const AJAX_PATH: &str = "ajax.php";
const LOGIN_PATH: &str = "login.php";
const LOGOUT_PATH: &str = "logout.php";
const TORRENTS_PATH: &str = "torrents.php";
const LANDING_PATH: &str = "index.php";

#[derive(Debug, Default)]
struct SessionState {
    logged_in: bool,
    identity: Option<Identity>,
}

/// Client for a single Gazelle tracker instance.
///
/// The client owns the cookie-backed HTTP transport and the identity derived
/// from logging in. All endpoint methods are defined in the domain modules
/// (`account`, `forum`, `search`, ...) and funnel through [`Self::ajax`].
///
/// # Example
///
/// ```ignore
/// use gazelle_client::{GazelleClient, TrackerConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = GazelleClient::new(TrackerConfig::new("https://tracker.example.com"))?;
///     client.login("user", "password").await?;
///
///     let account = client.account().await?;
///     println!("Ratio: {}", account.user_stats.ratio);
///
///     let results = client.search_torrents("pink floyd", &[]).await?;
///     println!("Found {} groups", results.results.len());
///
///     client.logout().await;
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct GazelleClient {
    http: Client,
    base: Url,
    status_mode: StatusMode,
    state: RwLock<SessionState>,
}

impl GazelleClient {
    /// Create a new client with the given configuration.
    ///
    /// The transport is created with a fresh in-memory cookie store; session
    /// cookies live only for the lifetime of the client.
    pub fn new(config: TrackerConfig) -> Result<Self> {
        if config.url.is_empty() {
            return Err(TrackerClientError::InvalidUrl("URL cannot be empty".into()));
        }

        let url = config.url.trim_end_matches('/').to_string();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(TrackerClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let base = Url::parse(&url).map_err(|e| TrackerClientError::InvalidUrl(e.to_string()))?;

        let http = Client::builder()
            .cookie_store(true)
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("gazelle-client/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(TrackerClientError::TransportInit)?;

        Ok(Self {
            http,
            base,
            status_mode: config.status_mode,
            state: RwLock::new(SessionState::default()),
        })
    }

    /// The normalized tracker base URL.
    pub fn base_url(&self) -> &str {
        self.base.as_str()
    }

    /// Whether a login has succeeded on this client.
    pub async fn is_logged_in(&self) -> bool {
        self.state.read().await.logged_in
    }

    /// The identity populated by the most recent login, if any.
    pub async fn identity(&self) -> Option<Identity> {
        self.state.read().await.identity.clone()
    }

    /// Login with username and password.
    ///
    /// The tracker signals success only through the post-redirect location of
    /// the login POST: landing anywhere other than the index page means the
    /// credentials were rejected. On success one `action=index` call is made
    /// to populate the session identity, so a login is two requests.
    pub async fn login(&self, username: &str, password: &str) -> Result<()> {
        let url = envelope::resolve_url(&self.base, LOGIN_PATH, &[]);
        debug!(url = %url, username = %username, "Logging in");

        let response = self
            .http
            .post(url)
            .form(&[("username", username), ("password", password)])
            .send()
            .await?;

        let landing = envelope::resolve_url(&self.base, LANDING_PATH, &[]);
        if response.url().path() != landing.path() {
            let location = response.url().to_string();
            warn!(location = %location, "Login did not land on the index page");
            return Err(TrackerClientError::LoginFailed { location });
        }

        self.state.write().await.logged_in = true;

        let account = self.account().await?;
        let identity = Identity {
            username: account.username,
            auth_key: account.auth_key,
            pass_key: account.pass_key,
        };
        info!(username = %identity.username, "Logged in");
        self.state.write().await.identity = Some(identity);

        Ok(())
    }

    /// Log out of the tracker.
    ///
    /// Best-effort: the session state is cleared whether or not the logout
    /// request reaches the server.
    pub async fn logout(&self) {
        let auth = self
            .state
            .read()
            .await
            .identity
            .as_ref()
            .map(|identity| identity.auth_key.clone())
            .unwrap_or_default();

        let url = envelope::resolve_url(&self.base, LOGOUT_PATH, &[("auth".to_string(), auth)]);
        debug!(url = %url, "Logging out");

        if let Err(error) = self.http.get(url).send().await {
            warn!(error = %error, "Logout request failed, clearing session anyway");
        }

        let mut state = self.state.write().await;
        state.logged_in = false;
        state.identity = None;
        info!("Logged out");
    }

    /// Issue an authenticated GET and return the raw response body.
    ///
    /// Fails with [`TrackerClientError::NotLoggedIn`] without touching the
    /// network when no login has succeeded.
    pub(crate) async fn get_bytes(&self, url: Url) -> Result<Vec<u8>> {
        if !self.state.read().await.logged_in {
            return Err(TrackerClientError::NotLoggedIn);
        }

        debug!(url = %url, "GET");
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(TrackerClientError::ServerError {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.bytes().await?.to_vec())
    }

    /// The generic pipeline behind every `ajax.php` operation: build the
    /// action query, resolve the URL, fetch, decode the envelope, validate
    /// its status, and hand back the payload.
    ///
    /// With [`StatusMode::Strict`] (the default) a non-success envelope
    /// aborts the call with [`TrackerClientError::Api`]; with
    /// [`StatusMode::Loose`] the failure is logged and the zero/partial
    /// payload is returned for the caller to inspect.
    pub async fn ajax<T>(&self, action: &str, params: &[(&str, String)]) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        let pairs = envelope::build_query(action, params);
        let url = envelope::resolve_url(&self.base, AJAX_PATH, &pairs);
        let body = self.get_bytes(url).await?;

        let Envelope {
            status,
            error,
            response,
        } = envelope::decode::<Envelope<T>>(&body)?;

        if status != "success" {
            let message = error.unwrap_or(status);
            match self.status_mode {
                StatusMode::Strict => {
                    return Err(TrackerClientError::Api {
                        action: action.to_string(),
                        message,
                    });
                }
                StatusMode::Loose => {
                    warn!(action = %action, error = %message, "Tracker reported failure, returning partial payload");
                }
            }
        }

        Ok(response)
    }

    /// Variant of [`Self::ajax`] for the rare endpoint that answers with a
    /// bare JSON value instead of the `{status, error, response}` envelope.
    pub(crate) async fn ajax_unwrapped<T>(&self, action: &str, params: &[(&str, String)]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let pairs = envelope::build_query(action, params);
        let url = envelope::resolve_url(&self.base, AJAX_PATH, &pairs);
        let body = self.get_bytes(url).await?;
        envelope::decode(&body)
    }

    /// Build the download URL for a torrent, embedding the session's auth and
    /// pass keys. Performs no network I/O.
    ///
    /// Fails with [`TrackerClientError::NotLoggedIn`] when no identity is
    /// available, rather than embedding empty credentials.
    pub async fn download_url(&self, torrent_id: i64) -> Result<Url> {
        let state = self.state.read().await;
        let identity = state
            .identity
            .as_ref()
            .ok_or(TrackerClientError::NotLoggedIn)?;

        let pairs = [
            ("action".to_string(), "download".to_string()),
            ("id".to_string(), torrent_id.to_string()),
            ("authkey".to_string(), identity.auth_key.clone()),
            ("torrent_pass".to_string(), identity.pass_key.clone()),
        ];
        Ok(envelope::resolve_url(&self.base, TORRENTS_PATH, &pairs))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_urls_accepted() {
        assert!(GazelleClient::new(TrackerConfig::new("https://tracker.example.com")).is_ok());
        assert!(GazelleClient::new(TrackerConfig::new("http://localhost:8080")).is_ok());
    }

    #[test]
    fn empty_url_rejected() {
        let result = GazelleClient::new(TrackerConfig::new(""));
        match result.unwrap_err() {
            TrackerClientError::InvalidUrl(msg) => assert!(msg.contains("empty")),
            e => panic!("expected InvalidUrl, got: {e:?}"),
        }
    }

    #[test]
    fn url_without_scheme_rejected() {
        let result = GazelleClient::new(TrackerConfig::new("tracker.example.com"));
        match result.unwrap_err() {
            TrackerClientError::InvalidUrl(msg) => {
                assert!(msg.contains("http://") || msg.contains("https://"));
            }
            e => panic!("expected InvalidUrl, got: {e:?}"),
        }
    }

    #[test]
    fn trailing_slashes_normalized() {
        let client = GazelleClient::new(TrackerConfig::new("https://tracker.example.com///"))
            .expect("valid url");
        assert_eq!(client.base_url(), "https://tracker.example.com/");
    }
}
