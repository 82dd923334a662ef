//! Coordinate mapping between linear router indices and per-dimension
//! coordinates.
//!
//! Coordinates are ordered `[x, y, z]`, lowest dimension first:
//!
//! - 1-D (ring): `[i]`
//! - 2-D: `[i % x_length, i / x_length]`, that is `[column, row]`, with
//!   `x_length` being the row width
//! - 3-D: `[column, row, plane]` where `plane = i / (x_length * y_length)` and
//!   the column and row follow the 2-D rule on `i % (x_length * y_length)`

use serde::Serialize;

/// Router coordinates, lowest dimension first
pub type Coords = Vec<usize>;

/// Side lengths of a validated Cartesian router space.
///
/// Only obtainable through [`Shape::dims`](super::types::Shape::dims), so the
/// product of the sides always equals the router count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dims {
    sides: Vec<usize>,
    size: usize,
}

impl Dims {
    pub(crate) fn new(sides: &[usize]) -> Dims {
        Dims {
            sides: sides.to_vec(),
            size: sides.iter().product(),
        }
    }

    pub fn sides(&self) -> &[usize] {
        &self.sides
    }

    /// Number of dimensions
    pub fn rank(&self) -> usize {
        self.sides.len()
    }

    pub fn num_routers(&self) -> usize {
        self.size
    }

    /// Length of dimension `axis`, if the space has that many dimensions
    pub fn side(&self, axis: usize) -> Option<usize> {
        self.sides.get(axis).copied()
    }

    pub fn index_to_coords(&self, mut index: usize) -> Coords {
        debug_assert!(index < self.size, "router index {} outside of {} routers", index, self.size);
        let mut coords = Vec::with_capacity(self.sides.len());
        for side in &self.sides {
            coords.push(index % side);
            index /= side;
        }
        coords
    }

    pub fn coords_to_index(&self, coords: &[usize]) -> usize {
        debug_assert_eq!(coords.len(), self.sides.len());
        let mut index = 0;
        let mut stride = 1;
        for (coord, side) in coords.iter().zip(&self.sides) {
            debug_assert!(coord < side, "coordinate {} outside of side {}", coord, side);
            index += coord * stride;
            stride *= side;
        }
        index
    }
}
