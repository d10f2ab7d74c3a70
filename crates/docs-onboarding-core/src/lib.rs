//! Onboarding option model for documentation pages.
//!
//! Owns the closed option registry, checkbox selection state with dependency
//! propagation, and the visibility plan that shows or hides tagged content
//! blocks for the current selection.

pub mod code_context;
pub mod error;
pub mod page_manifest;
pub mod registry;
pub mod selection;
pub mod session;
pub mod visibility;

pub use code_context::*;
pub use error::*;
pub use page_manifest::*;
pub use registry::*;
pub use selection::*;
pub use session::*;
pub use visibility::*;
