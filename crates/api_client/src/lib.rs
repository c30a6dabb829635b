//! Client for the YouTube Data API v3.
//!
//! [`YouTubeClient`] wraps a [`Transport`] and an [`ApiConfig`]. Every
//! fetcher returns plain data: provider failures are logged and collapse to
//! an empty page or `None`, so callers only ever render "no data".
//!
//! The related-video lookup walks an ordered fallback chain, see
//! [`related`].

mod channels;
mod client;
mod comments;
pub mod config;
pub mod error;
pub mod related;
pub mod request;
mod search;
pub mod transport;
mod videos;

#[cfg(test)]
mod testing;

pub use client::{Fetched, YouTubeClient};
pub use config::ApiConfig;
pub use error::{ConfigError, FetchError, TransportError};
pub use search::Collection;
pub use transport::{HttpTransport, RawResponse, Transport};
pub use videos::{Feed, FeedOptions};

pub use domain;
pub use formatting::VideoCategory;
