//! User storage for the user API.
//!
//! This crate provides the storage abstraction for user records. The only
//! shipped backend is an in-memory store; the [`UserStore`] trait is the
//! seam where a persistent backend would plug in.

mod entities;
mod error;
mod memory;
mod store;

pub use entities::*;
pub use error::*;
pub use memory::*;
pub use store::*;
