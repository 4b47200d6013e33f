//! Ray picking: a bounded fixed-increment march over an occupancy function,
//! then face selection by nearest valid line/plane intersection.
#![forbid(unsafe_code)]

use relay_blocks::{BlockKind, BlockRegistry, Cell, Direction};
use relay_geom::Vec3;

/// Degenerate-denominator cutoff for plane tests and direction normalization.
const EPS: f32 = 1e-8;

/// March tuning. Both values are deliberate gameplay constants, not derived.
#[derive(Clone, Copy, Debug)]
pub struct PickConfig {
    /// Maximum march steps before giving up.
    pub step_count: u32,
    /// World units advanced per step.
    pub step_len: f32,
}

impl Default for PickConfig {
    fn default() -> Self {
        Self {
            step_count: 150,
            step_len: 1.0 / 25.0,
        }
    }
}

/// One face of a hit cell, named by the plane it lies in as seen from
/// outside the cell.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum HitFace {
    TopXz,
    BottomXz,
    BackZy,
    FrontZy,
    BackXy,
    FrontXy,
}

impl HitFace {
    /// Grid step from the hit cell to the neighbor outside this face.
    #[inline]
    pub fn step(self) -> (i32, i32, i32) {
        match self {
            HitFace::TopXz => (0, 1, 0),
            HitFace::BottomXz => (0, -1, 0),
            HitFace::BackZy => (1, 0, 0),
            HitFace::FrontZy => (-1, 0, 0),
            HitFace::BackXy => (0, 0, 1),
            HitFace::FrontXy => (0, 0, -1),
        }
    }

    /// Facing a block placed against this face receives: pointing back
    /// through the face it was placed on.
    #[inline]
    pub fn placement_facing(self) -> Direction {
        match self {
            HitFace::TopXz => Direction::PosY,
            HitFace::BottomXz => Direction::NegY,
            HitFace::BackZy => Direction::PosX,
            HitFace::FrontZy => Direction::NegX,
            HitFace::BackXy => Direction::PosZ,
            HitFace::FrontXy => Direction::NegZ,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PickHit {
    pub cell: Cell,
    pub face: HitFace,
}

/// Casts from `origin` along `dir` and returns the first occupied cell plus
/// the struck face. `None` when the budget runs out, the direction is
/// degenerate, or no face intersection is valid.
pub fn cast<F>(origin: Vec3, dir: Vec3, cfg: &PickConfig, is_occupied: F) -> Option<PickHit>
where
    F: Fn(i32, i32, i32) -> bool,
{
    if dir.length() < EPS {
        return None;
    }
    let step = dir.normalized() * cfg.step_len;

    let mut p = origin;
    let mut cell: Option<Cell> = None;
    for _ in 0..cfg.step_count {
        p += step;
        let (x, y, z) = p.floor_cell();
        if is_occupied(x, y, z) {
            cell = Some((x, y, z));
            break;
        }
    }
    let cell = cell?;
    let face = select_face(cell, origin, dir)?;
    Some(PickHit { cell, face })
}

/// `cast` against a registry's occupancy.
pub fn cast_world(reg: &BlockRegistry, origin: Vec3, dir: Vec3, cfg: &PickConfig) -> Option<PickHit> {
    cast(origin, dir, cfg, |x, y, z| reg.exists((x, y, z)))
}

/// Inserts `kind` one cell out along the struck face, facing back through
/// it. False when that cell is already taken.
pub fn place_block(reg: &mut BlockRegistry, hit: PickHit, kind: BlockKind) -> bool {
    let (dx, dy, dz) = hit.face.step();
    let cell = (hit.cell.0 + dx, hit.cell.1 + dy, hit.cell.2 + dz);
    let placed = reg.insert_facing(cell, kind, hit.face.placement_facing());
    if placed {
        log::info!(target: "events", "BlockPlaced {:?} at {:?} facing {:?}", kind, cell, hit.face.placement_facing());
    }
    placed
}

/// Removes the hit block. False when the cell was already empty.
pub fn remove_block(reg: &mut BlockRegistry, hit: PickHit) -> bool {
    let removed = reg.remove(hit.cell);
    if removed {
        log::info!(target: "events", "BlockRemoved at {:?}", hit.cell);
    }
    removed
}

#[derive(Copy, Clone)]
enum Axis {
    X,
    Y,
    Z,
}

/// Parametric intersection with an axis-aligned plane. Parallel rays and
/// vanishing denominators yield no intersection rather than an error.
fn plane_hit(origin: Vec3, dir: Vec3, axis: Axis, plane: f32) -> Option<Vec3> {
    let (o, d) = match axis {
        Axis::X => (origin.x, dir.x),
        Axis::Y => (origin.y, dir.y),
        Axis::Z => (origin.z, dir.z),
    };
    if d.abs() < EPS {
        return None;
    }
    let t = (plane - o) / d;
    if !t.is_finite() {
        return None;
    }
    Some(origin + dir * t)
}

fn select_face(cell: Cell, origin: Vec3, dir: Vec3) -> Option<HitFace> {
    let lo = Vec3::new(cell.0 as f32, cell.1 as f32, cell.2 as f32);
    let hi = lo + Vec3::new(1.0, 1.0, 1.0);
    let candidates = [
        (HitFace::TopXz, Axis::Y, hi.y),
        (HitFace::BottomXz, Axis::Y, lo.y),
        (HitFace::BackZy, Axis::X, hi.x),
        (HitFace::FrontZy, Axis::X, lo.x),
        (HitFace::BackXy, Axis::Z, hi.z),
        (HitFace::FrontXy, Axis::Z, lo.z),
    ];

    let mut best: Option<(HitFace, f32)> = None;
    for (face, axis, plane) in candidates {
        let Some(hit) = plane_hit(origin, dir, axis, plane) else {
            continue;
        };
        let in_bounds = match axis {
            Axis::X => {
                hit.y >= lo.y && hit.y <= hi.y && hit.z >= lo.z && hit.z <= hi.z
            }
            Axis::Y => {
                hit.x >= lo.x && hit.x <= hi.x && hit.z >= lo.z && hit.z <= hi.z
            }
            Axis::Z => {
                hit.x >= lo.x && hit.x <= hi.x && hit.y >= lo.y && hit.y <= hi.y
            }
        };
        if !in_bounds {
            continue;
        }
        let dist = origin.distance(hit);
        if best.is_none_or(|(_, d)| dist < d) {
            best = Some((face, dist));
        }
    }
    best.map(|(face, _)| face)
}
