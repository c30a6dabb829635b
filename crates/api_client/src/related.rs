//! Related-video resolution.
//!
//! The provider's `relatedToVideoId` search is unreliable, so resolution
//! walks an ordered chain of progressively weaker signals and stops at the
//! first stage that yields anything besides the seed itself:
//!
//! | Stage          | Candidates                                  |
//! |----------------|---------------------------------------------|
//! | `Related`      | related search, then batched details        |
//! | `SameChannel`  | uploads of the seed's channel (capped)      |
//! | `SameCategory` | most popular videos in the seed's category  |
//! | `Trending`     | the regional chart, always terminal         |
//!
//! A failed fetch counts as zero candidates. The seed's own details are
//! looked up at most once, and only if the `Related` stage came up empty.
//!
//! [`advance`] holds the decision logic and does no I/O;
//! [`YouTubeClient::fetch_related_videos`] feeds it.

use domain::{Video, VideoPage};
use strum::Display;
use tracing::{debug, info};

use crate::client::YouTubeClient;
use crate::transport::Transport;

/// Upper bound on related results taken from the seed's channel, and the
/// page size of the category stage.
pub const RELATED_LIMIT: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "snake_case")]
pub enum RelatedStage {
    Related,
    SameChannel,
    SameCategory,
    Trending,
}

impl RelatedStage {
    pub const FIRST: RelatedStage = RelatedStage::Related;

    pub fn next(self) -> Option<RelatedStage> {
        match self {
            RelatedStage::Related => Some(RelatedStage::SameChannel),
            RelatedStage::SameChannel => Some(RelatedStage::SameCategory),
            RelatedStage::SameCategory => Some(RelatedStage::Trending),
            RelatedStage::Trending => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    Next(RelatedStage),
    Resolved(VideoPage),
}

/// Decides what follows `stage` given the candidates it fetched.
///
/// Drops the seed, videos without an id and repeated ids. A non-empty
/// remainder resolves with the stage's continuation token; otherwise the
/// chain moves on, except at the terminal stage which resolves regardless.
pub fn advance(stage: RelatedStage, seed_id: &str, candidates: Option<VideoPage>) -> Transition {
    let VideoPage {
        videos,
        next_page_token,
    } = candidates.unwrap_or_default();

    let mut kept: Vec<Video> = Vec::with_capacity(videos.len());
    for video in videos {
        if video.id.is_empty() || video.id == seed_id || kept.iter().any(|k| k.id == video.id) {
            continue;
        }
        kept.push(video);
    }
    if stage == RelatedStage::SameChannel {
        kept.truncate(RELATED_LIMIT);
    }

    match stage.next() {
        Some(next) if kept.is_empty() => Transition::Next(next),
        _ => Transition::Resolved(VideoPage::new(kept, next_page_token)),
    }
}

impl<T: Transport> YouTubeClient<T> {
    /// Videos related to `video_id`, never including it. Falls back from
    /// related search to the same channel, the same category and finally
    /// the trending chart.
    pub async fn fetch_related_videos(&self, video_id: &str) -> VideoPage {
        let seed_id = video_id.trim();
        if seed_id.is_empty() {
            return VideoPage::default();
        }

        let mut seed = SeedDetails::default();
        let mut stage = RelatedStage::FIRST;
        loop {
            let candidates = match stage {
                RelatedStage::Related => self.related_candidates(seed_id).await,
                RelatedStage::SameChannel => match seed.get(self, seed_id).await.channel_id {
                    Some(channel_id) => Some(self.fetch_channel_videos(&channel_id, None).await),
                    None => None,
                },
                RelatedStage::SameCategory => match seed.get(self, seed_id).await.category_id {
                    Some(category_id) => {
                        self.fetch_popular_in_category(Some(&category_id), RELATED_LIMIT as u32, None)
                            .await
                    }
                    None => None,
                },
                RelatedStage::Trending => Some(self.fetch_trending_videos().await),
            };

            match advance(stage, seed_id, candidates) {
                Transition::Next(next) => {
                    debug!(seed_id, %stage, %next, "no related candidates, falling back");
                    stage = next;
                }
                Transition::Resolved(page) => {
                    info!(seed_id, %stage, count = page.len(), "resolved related videos");
                    return page;
                }
            }
        }
    }
}

/// What the fallback stages need to know about the seed.
#[derive(Debug, Clone, Default)]
struct SeedKeys {
    channel_id: Option<String>,
    category_id: Option<String>,
}

/// Seed lookup, performed on first use only.
#[derive(Default)]
struct SeedDetails(Option<SeedKeys>);

impl SeedDetails {
    async fn get<T: Transport>(&mut self, client: &YouTubeClient<T>, seed_id: &str) -> SeedKeys {
        if let Some(keys) = &self.0 {
            return keys.clone();
        }
        let keys = match client.fetch_video_details(seed_id).await {
            Some(video) => SeedKeys {
                channel_id: video.channel_id().map(str::to_string),
                category_id: video.category_id().map(str::to_string),
            },
            None => SeedKeys::default(),
        };
        debug!(seed_id, ?keys, "looked up seed video");
        self.0 = Some(keys.clone());
        keys
    }
}
