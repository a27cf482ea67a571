//! Feed factory for dependency injection.
//!
//! This module provides utilities for creating feed instances based on
//! runtime configuration.

use std::str::FromStr;
use std::sync::Arc;

use super::error::{FeedError, FeedResult};
use super::feed::ReadingFeed;
use super::feeds::{JsonFileFeed, LocalFeed, MockFeed};
use crate::config::FeedSettings;

/// Feed type configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedType {
    /// Fixed demo farm
    Mock,
    /// In-memory feed, starts empty
    Local,
    /// JSON document on disk
    JsonFile,
}

impl FromStr for FeedType {
    type Err = String;

    /// Parse feed type from string.
    ///
    /// # Arguments
    /// * `s` - String representation ("mock", "local", "json", "file")
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mock" => Ok(Self::Mock),
            "local" => Ok(Self::Local),
            "json" | "file" => Ok(Self::JsonFile),
            _ => Err(format!("Unknown feed type: {}", s)),
        }
    }
}

/// Feed factory for creating feed instances.
///
/// # Example
/// ```
/// use coop_dashboard::config::FeedSettings;
/// use coop_dashboard::store::FeedFactory;
///
/// let feed = FeedFactory::create(&FeedSettings::default()).unwrap();
/// assert_eq!(feed.name(), "mock");
/// ```
pub struct FeedFactory;

impl FeedFactory {
    /// Create a feed instance from settings.
    ///
    /// # Returns
    /// * `Ok(Arc<dyn ReadingFeed>)` - Shared feed instance
    /// * `Err(FeedError)` - If the type is unknown or a required setting is missing
    pub fn create(settings: &FeedSettings) -> FeedResult<Arc<dyn ReadingFeed>> {
        let feed_type = FeedType::from_str(&settings.feed_type).map_err(|e| {
            FeedError::configuration(e).with_operation("create_feed")
        })?;

        match feed_type {
            FeedType::Mock => Ok(Self::create_mock()),
            FeedType::Local => Ok(Self::create_local()),
            FeedType::JsonFile => {
                let path = settings.path.as_ref().ok_or_else(|| {
                    FeedError::configuration("JSON feed requires 'feed.path' setting")
                        .with_operation("create_feed")
                })?;
                Ok(Arc::new(JsonFileFeed::new(path)))
            }
        }
    }

    /// Create the fixed demo feed.
    pub fn create_mock() -> Arc<dyn ReadingFeed> {
        Arc::new(MockFeed::new())
    }

    /// Create an empty in-memory feed.
    pub fn create_local() -> Arc<dyn ReadingFeed> {
        Arc::new(LocalFeed::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_feed_type_from_str() {
        assert_eq!(FeedType::from_str("mock").unwrap(), FeedType::Mock);
        assert_eq!(FeedType::from_str("LOCAL").unwrap(), FeedType::Local);
        assert_eq!(FeedType::from_str("json").unwrap(), FeedType::JsonFile);
        assert_eq!(FeedType::from_str("file").unwrap(), FeedType::JsonFile);
        assert!(FeedType::from_str("mqtt").is_err());
    }

    #[test]
    fn test_create_json_requires_path() {
        let settings = FeedSettings {
            feed_type: "json".to_string(),
            path: None,
            ..FeedSettings::default()
        };
        let err = FeedFactory::create(&settings).err().unwrap();
        assert!(matches!(err, FeedError::Configuration { .. }));
    }

    #[test]
    fn test_create_json_with_path() {
        let settings = FeedSettings {
            feed_type: "json".to_string(),
            path: Some(PathBuf::from("data/farm.json")),
            ..FeedSettings::default()
        };
        let feed = FeedFactory::create(&settings).unwrap();
        assert_eq!(feed.name(), "json:data/farm.json");
    }

    #[test]
    fn test_create_unknown_type() {
        let settings = FeedSettings {
            feed_type: "carrier-pigeon".to_string(),
            ..FeedSettings::default()
        };
        assert!(FeedFactory::create(&settings).is_err());
    }
}
