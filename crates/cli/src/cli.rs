use api_client::{Collection, Feed};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ytfeed")]
#[command(about = "Fetch YouTube feeds, videos, comments and channels as JSON")]
#[command(version)]
#[command(after_help = "Configuration is read from the environment:
  YOUTUBE_API_KEY        API key (required)
  YOUTUBE_API_BASE_URL   Provider base URL (default https://www.googleapis.com/youtube/v3)
  YOUTUBE_REGION_CODE    Region for charts (default IN)
  RUST_LOG               Log filter, e.g. api_client=debug")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Print compact JSON instead of pretty JSON
    #[arg(long, global = true)]
    pub compact: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Most popular videos in the configured region
    Popular {
        #[arg(long)]
        page_token: Option<String>,
    },

    /// A named feed: home, trending or a category (music, gaming, news, sports, learning, fashion)
    Feed {
        #[arg(value_parser = parse_feed)]
        name: Feed,
        #[arg(long)]
        page_token: Option<String>,
        #[arg(long)]
        max_results: Option<u32>,
    },

    /// Trending videos
    Trending,

    /// Search videos by free text
    Search {
        query: String,
        #[arg(long)]
        page_token: Option<String>,
    },

    /// Details of a single video
    Video { id: String },

    /// Videos related to a video, with fallbacks
    Related { id: String },

    /// Top-level comments of a video
    Comments {
        id: String,
        #[arg(long)]
        page_token: Option<String>,
    },

    /// Comment count of a video
    CommentCount { id: String },

    /// Channel header with its first page of uploads
    Channel { id: String },

    /// Uploads of a channel
    ChannelVideos {
        id: String,
        #[arg(long)]
        page_token: Option<String>,
    },

    /// Curated collection: podcasts, trailers, live or shopping
    Collection {
        #[arg(value_parser = parse_collection)]
        name: Collection,
        #[arg(long)]
        page_token: Option<String>,
    },
}

fn parse_feed(name: &str) -> Result<Feed, String> {
    Ok(Feed::parse(name))
}

fn parse_collection(name: &str) -> Result<Collection, String> {
    name.parse()
        .map_err(|_| format!("unknown collection '{name}' (expected podcasts, trailers, live or shopping)"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use api_client::VideoCategory;

    #[test]
    fn test_parse_feed_command() {
        let cli = Cli::try_parse_from(["ytfeed", "feed", "Gaming", "--max-results", "5"]).unwrap();
        match cli.command {
            Commands::Feed {
                name, max_results, ..
            } => {
                assert_eq!(name, Feed::Category(VideoCategory::Gaming));
                assert_eq!(max_results, Some(5));
            }
            _ => panic!("expected feed command"),
        }
    }

    #[test]
    fn test_parse_collection_command() {
        let cli = Cli::try_parse_from(["ytfeed", "collection", "trailers"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Collection {
                name: Collection::MovieTrailers,
                ..
            }
        ));
        assert!(Cli::try_parse_from(["ytfeed", "collection", "shorts"]).is_err());
    }

    #[test]
    fn test_kebab_case_subcommands() {
        let cli = Cli::try_parse_from(["ytfeed", "comment-count", "abc", "--compact"]).unwrap();
        assert!(cli.compact);
        assert!(matches!(cli.command, Commands::CommentCount { ref id } if id == "abc"));
    }
}
