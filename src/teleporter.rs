use glam::IVec2;
use sark_grids::GridPoint;

/// A point on the map that can be teleported from.
///
/// Departing from a teleporter costs [Teleporter::energy], regardless of
/// where the jump lands. Two teleporters are connected if they lie within the
/// search's maximum range of each other.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Teleporter {
    energy: u32,
    position: IVec2,
}

impl Teleporter {
    pub fn new(energy: u32, xy: impl GridPoint) -> Self {
        Self {
            energy,
            position: xy.to_ivec2(),
        }
    }

    /// Energy spent when departing from this teleporter.
    pub fn energy(&self) -> u32 {
        self.energy
    }

    pub fn position(&self) -> IVec2 {
        self.position
    }

    pub fn x(&self) -> i32 {
        self.position.x
    }

    pub fn y(&self) -> i32 {
        self.position.y
    }

    /// Squared euclidean distance to another teleporter.
    ///
    /// Saturates at `u64::MAX` for points at opposite corners of the `i32`
    /// plane.
    #[inline]
    pub fn distance_squared(&self, other: &Teleporter) -> u64 {
        let dx = (self.position.x as i64 - other.position.x as i64).unsigned_abs();
        let dy = (self.position.y as i64 - other.position.y as i64).unsigned_abs();
        (dx * dx).saturating_add(dy * dy)
    }

    /// Whether `other` can be reached in a single jump of at most `max_range`.
    #[inline]
    pub fn in_range(&self, other: &Teleporter, max_range: u32) -> bool {
        let max_range = max_range as u64;
        self.distance_squared(other) <= max_range * max_range
    }
}
