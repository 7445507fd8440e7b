//! Forum browsing (`action=forum` with `type=main` / `viewforum` /
//! `viewthread`).

use crate::client::GazelleClient;
use crate::envelope::owned_params;
use crate::error::Result;
use serde::Deserialize;

/// The forum front page: every category with its forums.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ForumCategoriesResponse {
    pub categories: Vec<ForumCategory>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ForumCategory {
    #[serde(rename = "categoryID")]
    pub category_id: i64,
    pub category_name: String,
    pub forums: Vec<ForumSummary>,
}

/// One forum as listed on the front page.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ForumSummary {
    pub forum_id: i64,
    pub forum_name: String,
    pub forum_description: String,
    pub num_topics: i64,
    pub num_posts: i64,
    pub last_post_id: i64,
    pub last_author_id: i64,
    pub last_author_name: String,
    pub last_topic_id: i64,
    pub last_time: String,
    pub specific_rules: Vec<ForumRule>,
    pub last_topic: String,
    pub read: bool,
    pub locked: bool,
    pub sticky: bool,
}

/// A rules thread pinned to a forum.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ForumRule {
    pub thread_id: i64,
    pub thread: String,
}

/// One page of a forum's thread listing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ForumResponse {
    pub forum_name: String,
    pub specific_rules: Vec<ForumRule>,
    pub current_page: i64,
    pub pages: i64,
    pub threads: Vec<ForumThreadSummary>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ForumThreadSummary {
    pub topic_id: i64,
    pub title: String,
    pub author_id: i64,
    pub author_name: String,
    pub locked: bool,
    pub sticky: bool,
    pub post_count: i64,
    #[serde(rename = "lastID")]
    pub last_id: i64,
    pub last_time: String,
    pub last_author_id: i64,
    pub last_author_name: String,
    pub last_read_page: i64,
    pub last_read_post_id: i64,
    pub read: bool,
}

/// One page of a thread with full post bodies.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThreadResponse {
    pub forum_id: i64,
    pub forum_name: String,
    pub thread_id: i64,
    pub thread_title: String,
    pub subscribed: bool,
    pub locked: bool,
    pub sticky: bool,
    pub current_page: i64,
    pub pages: i64,
    pub poll: Option<ThreadPoll>,
    pub posts: Vec<ForumPost>,
}

/// A poll attached to a thread.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThreadPoll {
    pub closed: bool,
    pub featured: String,
    pub question: String,
    pub max_votes: i64,
    pub total_votes: i64,
    pub voted: bool,
    pub answers: Vec<PollAnswer>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PollAnswer {
    pub answer: String,
    pub ratio: f64,
    pub percent: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ForumPost {
    pub post_id: i64,
    pub added_time: String,
    pub bb_body: String,
    pub body: String,
    pub edited_user_id: i64,
    pub edited_time: String,
    pub edited_username: String,
    pub author: PostAuthor,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PostAuthor {
    pub author_id: i64,
    pub author_name: String,
    pub paranoia: i64,
    pub artist: bool,
    pub donor: bool,
    pub warned: bool,
    pub avatar: String,
    pub enabled: bool,
    pub user_title: String,
}

impl GazelleClient {
    /// Fetch the forum category overview.
    pub async fn forum_categories(&self) -> Result<ForumCategoriesResponse> {
        self.ajax("forum", &[("type", "main".to_string())]).await
    }

    /// List a forum's threads. Accepts `page` as an extra param.
    pub async fn forum(&self, forum_id: i64, params: &[(&str, &str)]) -> Result<ForumResponse> {
        let mut query = owned_params(params);
        query.push(("type", "viewforum".to_string()));
        query.push(("forumid", forum_id.to_string()));
        self.ajax("forum", &query).await
    }

    /// Fetch a thread's posts. Accepts `page`, `postid`, or `updatelastread`
    /// as extra params.
    pub async fn thread(&self, thread_id: i64, params: &[(&str, &str)]) -> Result<ThreadResponse> {
        let mut query = owned_params(params);
        query.push(("type", "viewthread".to_string()));
        query.push(("threadid", thread_id.to_string()));
        self.ajax("forum", &query).await
    }
}
