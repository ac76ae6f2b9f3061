//! Applies backend change feed events to the cached snapshots owned by
//! one signed-in client.

mod cache;
mod error;
mod feed;
mod synchronizer;

pub use cache::SnapshotCache;
pub use error::{SyncError, SyncResult};
pub use feed::{ChangeFeed, FeedSubscription};
pub use synchronizer::Synchronizer;
