use chrono::{DateTime, Duration, SecondsFormat, TimeZone, Utc};
use domain::{
    BrandingImage, BrandingSettings, Channel, ChannelContentDetails, ChannelSnippet,
    ChannelStatistics, CommentSnippet, CommentThread, CommentThreadSnippet, ContentDetails,
    RelatedPlaylists, Thumbnail, Thumbnails, TopLevelComment, Video, VideoSnippet,
    VideoStatistics,
};
use fake::Fake;
use fake::faker::lorem::en::{Paragraph, Sentence};
use fake::faker::name::en::Name;

use crate::{InMemoryRepository, Repository};

pub(crate) const CHANNEL_1_UPLOADS: &str = "UU-channel-1";
const CHANNEL_2_UPLOADS: &str = "UU-channel-2";

/// Channels that generated videos are spread over.
const GENERATED_OWNERS: &[(&str, &str)] = &[("channel-1", "Mock Channel"), ("channel-2", "Second Channel")];
const GENERATED_CATEGORIES: &[&str] = &["10", "17", "20", "25", "26", "27"];

struct VideoFixture {
    id: &'static str,
    channel: Option<(&'static str, &'static str)>,
    title: &'static str,
    category_id: Option<&'static str>,
    duration: &'static str,
    views: u64,
    days_after_epoch: i64,
}

const VIDEOS: &[VideoFixture] = &[
    VideoFixture {
        id: "video-1",
        channel: Some(("channel-1", "Mock Channel")),
        title: "Lo-fi beats to code to",
        category_id: Some("10"),
        duration: "PT3M25S",
        views: 1_500_000,
        days_after_epoch: 0,
    },
    VideoFixture {
        id: "video-2",
        channel: Some(("channel-1", "Mock Channel")),
        title: "Studio talk show episode 12",
        category_id: Some("10"),
        duration: "PT1H2M3S",
        views: 820_000,
        days_after_epoch: 31,
    },
    VideoFixture {
        id: "video-3",
        channel: Some(("channel-1", "Mock Channel")),
        title: "Learning Rust in ten minutes",
        category_id: Some("27"),
        duration: "PT10M",
        views: 240_000,
        days_after_epoch: 59,
    },
    VideoFixture {
        id: "video-4",
        channel: Some(("channel-1", "Mock Channel")),
        title: "Controller unboxing and speedrun",
        category_id: Some("20"),
        duration: "PT45S",
        views: 90_000,
        days_after_epoch: 90,
    },
    VideoFixture {
        id: "video-5",
        channel: Some(("channel-2", "Second Channel")),
        title: "Official movie trailer soundtrack",
        category_id: Some("10"),
        duration: "PT2M30S",
        views: 3_200_000,
        days_after_epoch: 120,
    },
    VideoFixture {
        id: "video-6",
        channel: Some(("channel-3", "Live Channel")),
        title: "24/7 gaming live stream",
        category_id: Some("20"),
        duration: "P0D",
        views: 12_000,
        days_after_epoch: 150,
    },
    VideoFixture {
        id: "video-7",
        channel: None,
        title: "Untitled upload",
        category_id: None,
        duration: "PT1M",
        views: 10,
        days_after_epoch: 180,
    },
];

fn epoch() -> DateTime<Utc> {
    // Fixed point in time for consistent dummy data
    Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0)
        .single()
        .expect("Fixed datetime should be valid")
}

fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn thumbnails(id: &str) -> Thumbnails {
    let thumbnail = |size: &str, width: u32, height: u32| Thumbnail {
        url: format!("https://i.ytimg.test/vi/{id}/{size}.jpg"),
        width: Some(width),
        height: Some(height),
    };
    Thumbnails {
        default: Some(thumbnail("default", 120, 90)),
        medium: Some(thumbnail("mqdefault", 320, 180)),
        high: Some(thumbnail("hqdefault", 480, 360)),
    }
}

#[allow(clippy::too_many_arguments)]
fn video(
    id: String,
    channel: Option<(&str, &str)>,
    title: String,
    description: String,
    category_id: Option<&str>,
    duration: &str,
    views: u64,
    published_at: DateTime<Utc>,
) -> Video {
    let (channel_id, channel_title) = channel.unwrap_or_default();
    Video {
        snippet: VideoSnippet {
            title,
            description,
            thumbnails: thumbnails(&id),
            channel_title: channel_title.to_string(),
            channel_id: channel_id.to_string(),
            published_at: timestamp(published_at),
            category_id: category_id.map(str::to_string),
        },
        content_details: Some(ContentDetails {
            duration: duration.to_string(),
        }),
        statistics: VideoStatistics {
            view_count: Some(views.to_string()),
            like_count: Some((views / 20).to_string()),
            comment_count: Some((views / 400).to_string()),
        },
        id,
    }
}

fn channel(id: &str, title: &str, uploads: Option<&str>, subscribers: u64) -> Channel {
    Channel {
        id: id.to_string(),
        snippet: ChannelSnippet {
            title: title.to_string(),
            description: Some(format!("{title} on the mock provider")),
            thumbnails: thumbnails(id),
        },
        statistics: ChannelStatistics {
            subscriber_count: Some(subscribers.to_string()),
            video_count: None,
            view_count: Some((subscribers * 40).to_string()),
        },
        branding_settings: Some(BrandingSettings {
            image: Some(BrandingImage {
                banner_external_url: Some(format!("https://yt3.ggpht.test/{id}/banner")),
            }),
        }),
        content_details: Some(ChannelContentDetails {
            related_playlists: RelatedPlaylists {
                uploads: uploads.map(str::to_string),
            },
        }),
    }
}

fn comment(id: String, author: String, text: String, likes: u64, replies: u64, at: DateTime<Utc>) -> CommentThread {
    CommentThread {
        id,
        snippet: CommentThreadSnippet {
            top_level_comment: TopLevelComment {
                snippet: CommentSnippet {
                    author_profile_image_url: format!(
                        "https://yt3.ggpht.test/avatar/{}.jpg",
                        author.to_lowercase().replace(' ', "-")
                    ),
                    author_display_name: author,
                    text_display: text,
                    like_count: likes,
                    published_at: timestamp(at),
                },
            },
            total_reply_count: replies,
        },
    }
}

/// Deterministic catalog the stub serves by default.
pub(crate) fn populate(repo: &InMemoryRepository) {
    let epoch = epoch();

    repo.add_channel(channel("channel-1", "Mock Channel", Some(CHANNEL_1_UPLOADS), 125_000));
    repo.add_channel(channel("channel-2", "Second Channel", Some(CHANNEL_2_UPLOADS), 48_000));
    repo.add_channel(channel("channel-3", "Live Channel", None, 7_300));

    for fixture in VIDEOS {
        repo.add_video(video(
            fixture.id.to_string(),
            fixture.channel,
            fixture.title.to_string(),
            format!("{} on the mock provider", fixture.title),
            fixture.category_id,
            fixture.duration,
            fixture.views,
            epoch + Duration::days(fixture.days_after_epoch),
        ));
    }
    repo.set_live("video-6", true);

    repo.add_related("video-1", "video-2");
    repo.add_related("video-1", "video-3");

    let authors = ["Ana Lima", "Ravi Kumar", "Jo Park"];
    for (i, author) in authors.iter().enumerate() {
        let i = i as u64;
        repo.add_comment_thread(
            "video-1",
            comment(
                format!("comment-thread-{i}"),
                author.to_string(),
                format!("Great mix, comment {i}"),
                10 - i * 3,
                i,
                epoch + Duration::hours(i as i64 + 1),
            ),
        );
    }
}

/// Extra random videos spread across the fixture channels, with a few
/// comments each.
pub(crate) fn populate_generated(repo: &InMemoryRepository, count: usize) {
    let epoch = epoch();
    let offset = repo.get_videos().len();

    for n in 0..count {
        let id = format!("generated-{}", offset + n);
        let owner = GENERATED_OWNERS[n % GENERATED_OWNERS.len()];
        let category = GENERATED_CATEGORIES[n % GENERATED_CATEGORIES.len()];
        let minutes: u32 = (1..90).fake();
        let seconds: u32 = (0..60).fake();
        let views: u64 = (100..5_000_000).fake();
        let days: i64 = (0..365).fake();

        let title: String = Sentence(3..8).fake();
        let description: String = Paragraph(1..3).fake();
        repo.add_video(video(
            id.clone(),
            Some(owner),
            title.trim_end_matches('.').to_string(),
            description,
            Some(category),
            &format!("PT{minutes}M{seconds}S"),
            views,
            epoch + Duration::days(days),
        ));

        let comments: usize = (0..4).fake();
        for c in 0..comments {
            let author: String = Name().fake();
            let text: String = Sentence(4..12).fake();
            repo.add_comment_thread(
                &id,
                comment(
                    format!("{id}-thread-{c}"),
                    author,
                    text,
                    (0..500).fake(),
                    (0..20).fake(),
                    epoch + Duration::days(days) + Duration::minutes((1..600).fake()),
                ),
            );
        }
    }
}
