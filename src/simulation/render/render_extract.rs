use std::slice;

use crate::domain::force::ForceSnapshot;
use crate::domain::square::Square;

use super::WorldCore;

/// Lazy `(x, y, size)` view over the squares, in storage order.
///
/// Borrowing the world keeps it read-only for as long as the view lives.
#[derive(Clone)]
pub struct SquareProps<'a> {
    inner: slice::Iter<'a, Square>,
}

impl<'a> Iterator for SquareProps<'a> {
    type Item = (f32, f32, f32);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|s| {
            let pos = s.position();
            (pos.x, pos.y, s.size())
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for SquareProps<'_> {}

pub(super) fn square_props(world: &WorldCore) -> SquareProps<'_> {
    SquareProps { inner: world.squares.iter() }
}

pub(super) fn square_props_flat(world: &WorldCore) -> Vec<f32> {
    square_props(world)
        .flat_map(|(x, y, size)| [x, y, size])
        .collect()
}

pub(super) fn global_forces(world: &WorldCore) -> Vec<ForceSnapshot> {
    world.forces.iter().map(|f| f.snapshot()).collect()
}

pub(super) fn global_forces_json(world: &WorldCore) -> String {
    serde_json::to_string(&global_forces(world)).unwrap_or_else(|e| {
        log::warn!("failed to serialize force snapshots: {e}");
        "[]".to_string()
    })
}

pub(super) fn extract_square_props(world: &mut WorldCore) -> usize {
    let WorldCore { squares, props_buffer, .. } = world;
    props_buffer.clear();
    props_buffer.reserve(squares.len() * 3);
    for s in squares.iter() {
        let pos = s.position();
        props_buffer.extend_from_slice(&[pos.x, pos.y, s.size()]);
    }
    props_buffer.len()
}
