use crate::core::error::{EngineError, EngineResult};
use crate::domain::force::Force;
use crate::domain::square::Square;

use super::WorldCore;

pub(super) fn add_force(world: &mut WorldCore, force: Force) -> EngineResult<usize> {
    if let Some(bad) = [force.x(), force.y()].into_iter().find(|v| !v.is_finite()) {
        log::debug!("rejected force `{}`: component {bad} is not finite", force.name());
        return Err(EngineError::InvalidNumber { input: bad.to_string() });
    }
    world.forces.push(force);
    Ok(world.forces.len() - 1)
}

pub(super) fn add_square(
    world: &mut WorldCore,
    name: &str,
    is_static: bool,
    x: f32,
    y: f32,
    size: f32,
    mass: f32,
) -> EngineResult<usize> {
    let square = Square::new(name, is_static, x, y, size, mass).map_err(|e| {
        log::debug!("rejected square `{name}`: {e}");
        e
    })?;

    if world.reject_overlapping_spawns && world.squares.iter().any(|s| s.overlaps(x, y, size)) {
        log::debug!("rejected square `{name}` at ({x}, {y}): overlaps an existing square");
        return Err(EngineError::SpawnOverlap { x, y });
    }

    world.squares.push(square);
    Ok(world.squares.len() - 1)
}

pub(super) fn change_force_title(world: &mut WorldCore, index: usize, value: &str) -> EngineResult<()> {
    force_mut(world, index)?.set_name(value);
    Ok(())
}

pub(super) fn change_force_x(world: &mut WorldCore, index: usize, value: &str) -> EngineResult<()> {
    let force = force_mut(world, index)?;
    force.set_x(parse_component(value)?);
    Ok(())
}

pub(super) fn change_force_y(world: &mut WorldCore, index: usize, value: &str) -> EngineResult<()> {
    let force = force_mut(world, index)?;
    force.set_y(parse_component(value)?);
    Ok(())
}

fn force_mut(world: &mut WorldCore, index: usize) -> EngineResult<&mut Force> {
    let count = world.forces.len();
    world.forces.get_mut(index).ok_or_else(|| {
        log::debug!("force index {index} out of range (count: {count})");
        EngineError::IndexOutOfRange { index, count }
    })
}

/// Parse text-field input. Empty, partial ("-", "1e") or non-finite input is rejected.
fn parse_component(value: &str) -> EngineResult<f32> {
    match value.trim().parse::<f32>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => {
            log::debug!("ignoring non-numeric force input `{value}`");
            Err(EngineError::InvalidNumber { input: value.to_string() })
        }
    }
}
