//! # WordVote Queue
//!
//! Pending-file queue backends for WordVote.
//!
//! A queue backend accepts **opaque payloads** under a caller-chosen entry
//! name and makes each one visible to consumers exactly once, fully written.
//! Backends do not interpret payloads and never read back or delete what
//! they publish; draining the queue belongs to an external consumer.
//!
//! ## Directory layout
//!
//! ```text
//! <queue_dir>/
//! ├─ t<name>   # staging: being written, never read by consumers
//! └─ s<name>   # visible: complete, safe to read in full
//! ```
//!
//! ## Available Backends
//!
//! - [`DirectoryQueue`] - Write-then-rename publication into a directory
//! - [`InMemoryQueue`] - For testing
//!
//! ## Example
//!
//! ```rust
//! use wordvote_queue::{InMemoryQueue, QueueBackend};
//!
//! let queue = InMemoryQueue::new();
//! queue.publish("abc123", b"1700000000 10.0.0.1 3 42 cat").unwrap();
//! assert_eq!(queue.len(), 1);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod backend;
mod directory;
mod error;
mod memory;

pub use backend::{validate_entry_name, QueueBackend};
pub use directory::{DirectoryQueue, STAGING_PREFIX, VISIBLE_PREFIX};
pub use error::{QueueError, QueueResult};
pub use memory::InMemoryQueue;
