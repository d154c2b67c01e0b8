//! Strongly-typed identifiers for baked navigation data.

use std::fmt;

/// Identifies a baked navigation area (a volume or a surface).
///
/// Area ids are assigned by the bake pipeline and are unique across every
/// loaded area, volumes and surfaces alike. External links name their
/// destination area by this id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AreaId(pub i32);

impl fmt::Display for AreaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for AreaId {
    fn from(v: i32) -> Self {
        Self(v)
    }
}

/// Identifies a region within one area.
///
/// Region ids come from the caller's region assignment and need not be
/// dense; baked areas keep a separate region *index* for array access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RegionId(pub i32);

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for RegionId {
    fn from(v: i32) -> Self {
        Self(v)
    }
}

/// Layer tag attached to a baked area, used by queries to filter areas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Layer(pub u32);

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The two kinds of baked area.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AreaKind {
    /// A 3D region bounded by triangulated faces and bound planes.
    Volume,
    /// A 2D walkable patch of a mesh with per-region up vectors.
    Surface,
}

impl fmt::Display for AreaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Volume => write!(f, "volume"),
            Self::Surface => write!(f, "surface"),
        }
    }
}
