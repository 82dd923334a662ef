//! Directional neighbor computation and internal link generation.
//!
//! Every direction moves one step along a single dimension, wrapping around
//! at both ends:
//!
//! - East/West (and Right/Left on a ring): dimension x, within the row
//! - North/South: dimension y, within the z-plane
//! - Up/Down: dimension z, across planes

use log::{debug, warn};

use super::coords::Dims;
use super::types::{Direction, InternalLink};

/// Dimension a direction moves along and whether it moves forward.
///
/// `None` when a `rank`-dimensional router space has no such port: rings
/// only have Right/Left, tori have North/South/East/West and only 3-D tori
/// have Up/Down.
fn axis_of(direction: Direction, rank: usize) -> Option<(usize, bool)> {
    let step = match (direction, rank) {
        (Direction::Right, 1) => (0, true),
        (Direction::Left, 1) => (0, false),
        (Direction::East, 2 | 3) => (0, true),
        (Direction::West, 2 | 3) => (0, false),
        (Direction::North, 2 | 3) => (1, true),
        (Direction::South, 2 | 3) => (1, false),
        (Direction::Up, 3) => (2, true),
        (Direction::Down, 3) => (2, false),
        _ => return None,
    };
    Some(step)
}

/// Whether routers of `dims` have a `direction` port
pub fn has_port(direction: Direction, dims: &Dims) -> bool {
    axis_of(direction, dims.rank()).is_some()
}

/// Index of the router reached from `index` through its `direction` port.
///
/// Returns `None` if `index` is not a router of `dims` or if the topology
/// has no `direction` port (`Up` on a 2-D torus, `Right` on any torus).
pub fn neighbor(index: usize, direction: Direction, dims: &Dims) -> Option<usize> {
    if index >= dims.num_routers() {
        return None;
    }
    let (axis, forward) = axis_of(direction, dims.rank())?;
    let side = dims.side(axis)?;

    let mut coords = dims.index_to_coords(index);
    coords[axis] = if forward {
        (coords[axis] + 1) % side
    } else {
        (coords[axis] + side - 1) % side
    };
    Some(dims.coords_to_index(&coords))
}

/// Generate one full pass of internal links for `direction`, one per router.
///
/// Link ids are taken from `next_link_id`, which is advanced past the pass.
/// A direction `dims` has no port for yields no links and consumes no ids.
pub fn generate_direction_links(
    direction: Direction,
    dims: &Dims,
    latency: u32,
    next_link_id: &mut usize,
) -> Vec<InternalLink> {
    if !has_port(direction, dims) {
        warn!("{}-D topology has no {} port, skipping pass", dims.rank(), direction);
        return Vec::new();
    }

    let first_id = *next_link_id;
    let links: Vec<InternalLink> = (0..dims.num_routers())
        .filter_map(|src_router| {
            let dst_router = neighbor(src_router, direction, dims)?;
            let link = InternalLink {
                link_id: *next_link_id,
                src_router,
                dst_router,
                src_outport: direction,
                dst_inport: direction.opposite(),
                latency,
            };
            *next_link_id += 1;
            Some(link)
        })
        .collect();

    debug!("{} outport: links {}..{}", direction, first_id, *next_link_id);
    links
}
