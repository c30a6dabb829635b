use serde::{Deserialize, Serialize};

use crate::{Thumbnails, non_empty, parse_count};

/// Represents a channel resource
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub snippet: ChannelSnippet,
    #[serde(default)]
    pub statistics: ChannelStatistics,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branding_settings: Option<BrandingSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_details: Option<ChannelContentDetails>,
}

impl Channel {
    /// Identifier of the playlist holding every upload of this channel.
    pub fn uploads_playlist_id(&self) -> Option<&str> {
        self.content_details
            .as_ref()
            .and_then(|details| non_empty(details.related_playlists.uploads.as_ref()))
    }

    pub fn banner_url(&self) -> Option<&str> {
        self.branding_settings
            .as_ref()
            .and_then(|branding| branding.image.as_ref())
            .and_then(|image| non_empty(image.banner_external_url.as_ref()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelSnippet {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub thumbnails: Thumbnails,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChannelStatistics {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscriber_count: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_count: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_count: Option<String>,
}

impl ChannelStatistics {
    pub fn subscribers(&self) -> u64 {
        parse_count(self.subscriber_count.as_deref())
    }

    pub fn videos(&self) -> u64 {
        parse_count(self.video_count.as_deref())
    }

    pub fn views(&self) -> u64 {
        parse_count(self.view_count.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandingSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<BrandingImage>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BrandingImage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner_external_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChannelContentDetails {
    pub related_playlists: RelatedPlaylists,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelatedPlaylists {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploads: Option<String>,
}
