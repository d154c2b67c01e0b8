//! Core types for the navtk navigation toolkit.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! identifiers, index ranges, bounding boxes and build-time check switch
//! shared by every other navtk crate, plus the cooperative
//! [`CancelFlag`] observed by long-running bake passes.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bounds;
pub mod cancel;
pub mod check;
pub mod error;
pub mod id;
pub mod span;

pub use bounds::Bounds;
pub use cancel::CancelFlag;
pub use check::CHECKS_ENABLED;
pub use error::CoreError;
pub use id::{AreaId, AreaKind, Layer, RegionId};
pub use span::Span;
