//! Request event types
//!
//! One `RequestEvent` is written by the linking bot every time it answers a
//! request with a mod link. This crate only ever reads them.

use serde::{Deserialize, Serialize};

/// The mod that was linked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModRecord {
    /// Display name of the mod
    pub title: String,
    /// Canonical link to the mod page
    pub url: String,
    /// Display name of the mod author
    pub author: String,
    /// Link to the author's profile
    #[serde(default)]
    pub author_url: String,
}

/// An immutable record of one mod-linking request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestEvent {
    /// Permalink of the post that triggered the link
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub requesting_post_url: String,

    /// User who asked for the link
    pub requesting_redditor: String,

    /// The linked mod
    #[serde(rename = "mod")]
    pub mod_info: ModRecord,
}

impl RequestEvent {
    /// Create an event for `requester` linking the given mod
    pub fn new(requester: impl Into<String>, mod_info: ModRecord) -> Self {
        Self {
            requesting_post_url: String::new(),
            requesting_redditor: requester.into(),
            mod_info,
        }
    }

    /// Set the permalink of the requesting post
    pub fn with_post_url(mut self, url: impl Into<String>) -> Self {
        self.requesting_post_url = url.into();
        self
    }

    /// Serialize event to JSON string (for JSONL)
    pub fn to_json_line(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize event from JSON string
    pub fn from_json_line(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }

    /// Deserialize event from raw line bytes; invalid UTF-8 is a parse error
    pub fn from_json_slice(line: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(line)
    }
}

impl ModRecord {
    /// Create a mod record; the author profile link starts empty
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            author: author.into(),
            author_url: String::new(),
        }
    }

    /// Set the author's profile link
    pub fn with_author_url(mut self, url: impl Into<String>) -> Self {
        self.author_url = url.into();
        self
    }
}
