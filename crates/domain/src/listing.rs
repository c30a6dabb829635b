use serde::{Deserialize, Serialize};
use serde_with::{VecSkipError, serde_as};

use crate::non_empty;

/// The `{ items, nextPageToken, pageInfo }` envelope shared by all list endpoints.
///
/// Items that fail to decode are dropped instead of failing the whole page.
#[serde_as]
#[derive(Debug, Clone, Deserialize)]
#[serde(
    rename_all = "camelCase",
    bound(deserialize = "T: Deserialize<'de>")
)]
pub struct ListResponse<T> {
    #[serde_as(as = "VecSkipError<_>")]
    #[serde(default)]
    pub items: Vec<T>,
    #[serde(default)]
    pub next_page_token: Option<String>,
    #[serde(default)]
    pub page_info: Option<PageInfo>,
}

impl<T> Default for ListResponse<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_page_token: None,
            page_info: None,
        }
    }
}

impl<T> ListResponse<T> {
    pub fn total_results(&self) -> u64 {
        self.page_info
            .as_ref()
            .map(|info| info.total_results)
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageInfo {
    pub total_results: u64,
    pub results_per_page: u64,
}

/// Item of a `search` response. Only the identifier is used.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    pub id: SearchResultId,
}

impl SearchResult {
    pub fn video_id(&self) -> Option<&str> {
        non_empty(self.id.video_id.as_ref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchResultId {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
}

/// Item of a `playlistItems` response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaylistItem {
    pub snippet: PlaylistItemSnippet,
}

impl PlaylistItem {
    pub fn video_id(&self) -> Option<&str> {
        non_empty(self.snippet.resource_id.video_id.as_ref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlaylistItemSnippet {
    pub resource_id: ResourceId,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResourceId {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
}
