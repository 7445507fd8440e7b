//! Private messages (`action=inbox`).

use crate::client::GazelleClient;
use crate::envelope::owned_params;
use crate::error::Result;
use serde::Deserialize;

/// One page of the mailbox listing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MailboxResponse {
    pub current_page: i64,
    pub pages: i64,
    pub messages: Vec<MailboxMessage>,
}

/// A conversation summary as listed in the mailbox.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MailboxMessage {
    pub conv_id: i64,
    pub subject: String,
    pub unread: bool,
    pub sticky: bool,
    #[serde(rename = "forwardedID")]
    pub forwarded_id: i64,
    pub forwarded_name: String,
    pub sender_id: i64,
    pub username: String,
    pub donor: bool,
    pub warned: bool,
    pub enabled: bool,
    pub date: String,
}

/// A full conversation thread.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConversationResponse {
    pub conv_id: i64,
    pub subject: String,
    pub sticky: bool,
    pub messages: Vec<ConversationMessage>,
}

/// One message inside a conversation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConversationMessage {
    pub message_id: i64,
    pub sender_id: i64,
    pub sender_name: String,
    pub sent_date: String,
    pub bb_body: String,
    pub body: String,
}

impl GazelleClient {
    /// List the mailbox. Accepts extra params such as `page` or
    /// `type=sentbox`.
    pub async fn mailbox(&self, params: &[(&str, &str)]) -> Result<MailboxResponse> {
        self.ajax("inbox", &owned_params(params)).await
    }

    /// Fetch a single conversation with its full message bodies.
    pub async fn conversation(&self, id: i64) -> Result<ConversationResponse> {
        self.ajax(
            "inbox",
            &[("type", "viewconv".to_string()), ("id", id.to_string())],
        )
        .await
    }
}
