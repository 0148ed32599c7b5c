//! Integer grid coordinates and their canonical `"x,z"` key encoding.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::{CELL_SIZE, MAX_LINE_CELLS};

/// One discrete cell on the ground plane.
///
/// `x` runs along the world X axis and `z` along the world Z axis; the ground
/// plane is Y-up, so there is no vertical component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    pub x: i32,
    pub z: i32,
}

impl Coordinate {
    pub const ORIGIN: Coordinate = Coordinate { x: 0, z: 0 };

    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Snap a ground-plane hit to the nearest cell. Halves round towards
    /// positive infinity, so `-2.5` lands on `-2` and `2.5` on `3`.
    pub fn from_world(world_x: f32, world_z: f32) -> Self {
        let x = (world_x / CELL_SIZE + 0.5).floor() as i32;
        let z = (world_z / CELL_SIZE + 0.5).floor() as i32;
        Self { x, z }
    }

    /// World-space centre of this cell.
    pub fn to_world(self) -> (f32, f32) {
        (self.x as f32 * CELL_SIZE, self.z as f32 * CELL_SIZE)
    }

    /// The cardinal neighbours, in +x, -x, +z, -z order. Neighbours that
    /// would leave the `i32` range are skipped.
    pub fn neighbors4(self) -> impl Iterator<Item = Coordinate> {
        [
            self.x.checked_add(1).map(|x| Coordinate::new(x, self.z)),
            self.x.checked_sub(1).map(|x| Coordinate::new(x, self.z)),
            self.z.checked_add(1).map(|z| Coordinate::new(self.x, z)),
            self.z.checked_sub(1).map(|z| Coordinate::new(self.x, z)),
        ]
        .into_iter()
        .flatten()
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, z): (i32, i32)) -> Self {
        Self { x, z }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.z)
    }
}

/// A string that is not a valid `"x,z"` cell key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCoordinateError {
    pub input: String,
}

impl fmt::Display for ParseCoordinateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid cell key '{}', expected \"x,z\"", self.input)
    }
}

impl std::error::Error for ParseCoordinateError {}

impl FromStr for Coordinate {
    type Err = ParseCoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseCoordinateError {
            input: s.to_string(),
        };
        let (x, z) = s.split_once(',').ok_or_else(err)?;
        let x = x.trim().parse::<i32>().map_err(|_| err())?;
        let z = z.trim().parse::<i32>().map_err(|_| err())?;
        Ok(Self { x, z })
    }
}

/// Inclusive rectangle of cells the grid accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridBounds {
    pub min: Coordinate,
    pub max: Coordinate,
}

impl GridBounds {
    /// Square bounds `-half_extent..=half_extent` on both axes.
    pub const fn centered(half_extent: i32) -> Self {
        Self {
            min: Coordinate::new(-half_extent, -half_extent),
            max: Coordinate::new(half_extent, half_extent),
        }
    }

    #[inline]
    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.x >= self.min.x && coord.x <= self.max.x && coord.z >= self.min.z && coord.z <= self.max.z
    }
}

/// Bresenham line rasterization from `from` towards `to`, both ends included.
///
/// Stops after `MAX_LINE_CELLS` cells, so very long lines are truncated at
/// the `from` end. Steps are computed in `i64`; every emitted cell lies
/// between the two endpoints and so fits back into `i32`.
pub fn line_cells(from: Coordinate, to: Coordinate) -> Vec<Coordinate> {
    let (x0, z0) = (i64::from(from.x), i64::from(from.z));
    let (x1, z1) = (i64::from(to.x), i64::from(to.z));
    let dx = (x1 - x0).abs();
    let dz = -(z1 - z0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sz = if z0 < z1 { 1 } else { -1 };
    let mut err = dx + dz;
    let (mut cx, mut cz) = (x0, z0);

    let span = usize::try_from(dx.max(-dz)).unwrap_or(usize::MAX);
    let mut cells = Vec::with_capacity(span.saturating_add(1).min(MAX_LINE_CELLS));
    while cells.len() < MAX_LINE_CELLS {
        cells.push(Coordinate::new(cx as i32, cz as i32));
        if cx == x1 && cz == z1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dz {
            err += dz;
            cx += sx;
        }
        if e2 <= dx {
            err += dx;
            cz += sz;
        }
    }
    cells
}
