//! Reading store and its upstream feeds.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Services (threshold evaluation, projections)           │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │ Arc<Snapshot>
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  ReadingStore - current snapshot + DataStatus           │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │ refresh()
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  ReadingFeed trait - external data collaborator         │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌───────────────┼────────────────┐
//!     │               │                │
//!  MockFeed       LocalFeed      JsonFileFeed
//! ```
//!
//! The store never mutates a snapshot in place; a refresh swaps in a new one
//! or, on failure, leaves the last known snapshot in place and degrades
//! [`DataStatus`].

pub mod error;
pub mod factory;
pub mod feed;
pub mod feeds;
pub mod snapshot;

pub use error::{ErrorContext, FeedError, FeedResult};
pub use factory::{FeedFactory, FeedType};
pub use feed::ReadingFeed;
pub use feeds::{FarmDocument, JsonFileFeed, LocalFeed, MockFeed};
pub use snapshot::{DataStatus, ReadingStore, Snapshot, StoreView};
