//! Pbxlink - idempotent Firebase plist registration for Xcode projects
//!
//! Ensures `GoogleService-Info.plist` is referenced by the `Runner` group
//! and copied by the `Runner` target's Resources build phase, then saves
//! the project file. Safe to run repeatedly: a second run performs no
//! structural change and leaves the file byte-identical.
//!
//! # Example
//!
//! ```rust,no_run
//! use pbxlink::Patcher;
//!
//! fn main() -> pbxlink::Result<()> {
//!     let report = Patcher::new().run()?;
//!     println!("changed: {}", report.changed);
//!     Ok(())
//! }
//! ```

mod error;
mod patch;
mod plist;
mod project;

pub use error::{Error, Result};
pub use patch::{
    Decision, PatchReport, Patcher, PatcherBuilder, DEFAULT_GROUP, DEFAULT_PROJECT_PATH,
    DEFAULT_RESOURCE_PATH, DEFAULT_TARGET,
};
pub use project::{ObjectId, Project};
