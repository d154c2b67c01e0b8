//! Errors from baking navigation areas.

use std::error::Error;
use std::fmt;

use navtk_baked::BakedDataError;
use navtk_core::{CoreError, RegionId};

/// Errors that can occur while baking an area.
#[derive(Clone, Debug, PartialEq)]
pub enum BakeError {
    /// A [`BakeConfig`](crate::BakeConfig) field is out of range.
    InvalidConfig {
        /// Which field and why.
        reason: String,
    },
    /// The source mesh is malformed.
    InvalidMesh {
        /// What is wrong.
        reason: String,
    },
    /// A third region claimed a triangle already shared by two regions.
    TooManyRegions {
        /// Index of the triangle in the source mesh.
        triangle: usize,
        /// The region that was rejected.
        region: RegionId,
    },
    /// The bake observed its cancellation flag.
    Cancelled,
    /// An index range grew past what the baked format can address.
    Core(CoreError),
    /// The assembled area failed validation.
    Data(BakedDataError),
}

impl fmt::Display for BakeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig { reason } => write!(f, "invalid bake config: {reason}"),
            Self::InvalidMesh { reason } => write!(f, "invalid source mesh: {reason}"),
            Self::TooManyRegions { triangle, region } => {
                write!(
                    f,
                    "triangle {triangle} already borders two regions, cannot add region {region}"
                )
            }
            Self::Cancelled => write!(f, "bake cancelled"),
            Self::Core(e) => write!(f, "{e}"),
            Self::Data(e) => write!(f, "baked data rejected: {e}"),
        }
    }
}

impl Error for BakeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Core(e) => Some(e),
            Self::Data(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CoreError> for BakeError {
    fn from(e: CoreError) -> Self {
        Self::Core(e)
    }
}

impl From<BakedDataError> for BakeError {
    fn from(e: BakedDataError) -> Self {
        Self::Data(e)
    }
}
