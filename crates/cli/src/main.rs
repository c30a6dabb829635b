use std::process;

use api_client::{ApiConfig, FeedOptions, YouTubeClient};
use clap::Parser;
use serde::Serialize;
use serde_json::json;

mod cli;

use cli::{Cli, Commands};

#[derive(Debug, thiserror::Error)]
enum CommandError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
}

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ytfeed=info,api_client=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Load environment variables
    dotenvy::dotenv().ok();

    let config = match ApiConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("configuration error: {err}");
            process::exit(2);
        }
    };
    tracing::debug!(?config, "loaded configuration");
    let client = YouTubeClient::new(config);

    if let Err(err) = run(&client, cli.command, cli.compact).await {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

async fn run(client: &YouTubeClient, command: Commands, compact: bool) -> Result<(), CommandError> {
    match command {
        Commands::Popular { page_token } => {
            print_json(&client.fetch_popular_videos(page_token.as_deref()).await, compact)
        }
        Commands::Feed {
            name,
            page_token,
            max_results,
        } => {
            let options = FeedOptions {
                page_token,
                max_results,
            };
            print_json(&client.fetch_videos(name, &options).await, compact)
        }
        Commands::Trending => print_json(&client.fetch_trending_videos().await, compact),
        Commands::Search { query, page_token } => {
            print_json(&client.search_videos(&query, page_token.as_deref()).await, compact)
        }
        Commands::Video { id } => {
            let video = client
                .fetch_video_details(&id)
                .await
                .ok_or_else(|| CommandError::NotFound(format!("video {id}")))?;
            print_json(&video, compact)
        }
        Commands::Related { id } => print_json(&client.fetch_related_videos(&id).await, compact),
        Commands::Comments { id, page_token } => {
            print_json(&client.fetch_video_comments(&id, page_token.as_deref()).await, compact)
        }
        Commands::CommentCount { id } => {
            let count = client.fetch_video_comment_count(&id).await;
            print_json(&json!({ "videoId": id, "commentCount": count }), compact)
        }
        Commands::Channel { id } => {
            let page = client
                .fetch_channel_page(&id)
                .await
                .ok_or_else(|| CommandError::NotFound(format!("channel {id}")))?;
            print_json(&page, compact)
        }
        Commands::ChannelVideos { id, page_token } => {
            print_json(&client.fetch_channel_videos(&id, page_token.as_deref()).await, compact)
        }
        Commands::Collection { name, page_token } => {
            print_json(&client.fetch_collection(name, page_token.as_deref()).await, compact)
        }
    }
}

fn print_json<T: Serialize>(value: &T, compact: bool) -> Result<(), CommandError> {
    let output = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    println!("{output}");
    Ok(())
}
