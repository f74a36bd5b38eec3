//! # Core types for relist
//!
//! Small, host-agnostic building blocks shared by the list engine and its
//! tooling:
//!
//! - `Vec2`, `Size`, `Rect`: plain geometry in local (content) coordinates.
//! - `Signal<T>`: observable value; hosts publish scroll offsets through it.
//! - `Dispose`: run-at-most-once cleanup for subscriptions.
//! - `ListError`: everything the list reports back to its host.
//!
//! ## Signals
//!
//! ```rust
//! use relist_core::*;
//!
//! let offset = signal(Vec2::ZERO);
//! let guard = subscription(&offset, |o| log::debug!("scrolled to {o:?}"));
//! offset.set(Vec2::new(0.0, 120.0));
//! guard.run(); // unsubscribes; running it again is a no-op
//! assert_eq!(offset.subscriber_count(), 0);
//! ```

pub mod effects;
pub mod error;
pub mod geometry;
pub mod prelude;
pub mod signal;
pub mod tests;

pub use effects::*;
pub use error::*;
pub use geometry::*;
pub use signal::*;
