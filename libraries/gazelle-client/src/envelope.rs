//! The JSON envelope and query plumbing shared by every `ajax.php` operation.

use crate::error::{Result, TrackerClientError};
use serde::Deserialize;
use url::Url;

/// How an envelope whose status is not `"success"` is surfaced to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusMode {
    /// A failed status aborts the call with [`TrackerClientError::Api`].
    #[default]
    Strict,
    /// A failed status is logged and the (possibly zero-valued) payload is
    /// returned anyway. Compatibility shim for callers that inspect the
    /// envelope status themselves.
    Loose,
}

/// The `{status, error, response}` wrapper every tracker endpoint returns.
///
/// `response` is only meaningful when `status == "success"`.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub status: String,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub response: T,
}

impl<T> Envelope<T> {
    /// Whether the tracker reported the call as successful.
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

/// Build the final query pairs for an action call.
///
/// Caller-supplied `action` pairs are dropped before the real action is
/// appended, so the encoded query always carries exactly one `action` key.
/// Pairs are sorted by key for a stable encoding.
pub(crate) fn build_query(action: &str, params: &[(&str, String)]) -> Vec<(String, String)> {
    let mut pairs: Vec<(String, String)> = params
        .iter()
        .filter(|(key, _)| *key != "action")
        .map(|(key, value)| ((*key).to_string(), value.clone()))
        .collect();
    pairs.push(("action".to_string(), action.to_string()));
    pairs.sort_by(|a, b| a.0.cmp(&b.0));
    pairs
}

/// Resolve a full request URL: the base with its path replaced by the fixed
/// endpoint path and the encoded query attached.
pub(crate) fn resolve_url(base: &Url, path: &str, pairs: &[(String, String)]) -> Url {
    let mut url = base.clone();
    url.set_path(path);
    if pairs.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut()
            .clear()
            .extend_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    }
    url
}

/// Decode a response body, keeping the raw body around on failure.
pub(crate) fn decode<T: serde::de::DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    serde_json::from_slice(bytes).map_err(|e| TrackerClientError::Decode {
        message: e.to_string(),
        body: String::from_utf8_lossy(bytes).into_owned(),
    })
}

/// Copy extra caller params into the owned form the pipeline works with.
pub(crate) fn owned_params<'a>(params: &[(&'a str, &str)]) -> Vec<(&'a str, String)> {
    params
        .iter()
        .map(|(key, value)| (*key, (*value).to_string()))
        .collect()
}
