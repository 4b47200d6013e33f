//! Swept-AABB collision: one corrected axis per call, chosen by overlap
//! plane, with a small standoff buffer so resting contact never jitters.
#![forbid(unsafe_code)]

use relay_geom::{Aabb, Vec3};

/// Default standoff between a stopped box and the obstacle face.
pub const DEFAULT_BUFFER: f32 = 0.001;

/// Unit box for the block occupying a grid cell.
#[inline]
pub fn cell_aabb(cell: (i32, i32, i32)) -> Aabb {
    let min = Vec3::new(cell.0 as f32, cell.1 as f32, cell.2 as f32);
    Aabb::new(min, min + Vec3::new(1.0, 1.0, 1.0))
}

#[inline]
fn spans_overlap(a_min: f32, a_max: f32, b_min: f32, b_max: f32) -> bool {
    a_max > b_min && a_min < b_max
}

/// Clamps one axis of `a` against `b`'s near face when the next step would
/// cross it, zeroing that velocity component. Returns whether it fired.
fn clamp_axis(
    a_min: &mut f32,
    a_max: &mut f32,
    b_min: f32,
    b_max: f32,
    v: &mut f32,
    buffer: f32,
) -> bool {
    let size = *a_max - *a_min;
    if *a_max < b_min && *a_max + *v > b_min {
        *a_max = b_min - buffer;
        *a_min = *a_max - size;
        *v = 0.0;
        return true;
    }
    if *a_min > b_max && *a_min + *v < b_max {
        *a_min = b_max + buffer;
        *a_max = *a_min + size;
        *v = 0.0;
        return true;
    }
    false
}

/// Resolves `a` moving by `vel` against a stationary `b`.
///
/// Plane priority is fixed: an XY overlap resolves along Z, else an XZ
/// overlap resolves along Y, else a YZ overlap resolves along X. At most one
/// axis is corrected per call; a corner approach overlapping two planes is
/// resolved on the priority axis only. Returns whether a correction fired.
pub fn resolve(a: &mut Aabb, b: &Aabb, vel: &mut Vec3, buffer: f32) -> bool {
    let x = spans_overlap(a.min.x, a.max.x, b.min.x, b.max.x);
    let y = spans_overlap(a.min.y, a.max.y, b.min.y, b.max.y);
    let z = spans_overlap(a.min.z, a.max.z, b.min.z, b.max.z);

    if x && y {
        clamp_axis(&mut a.min.z, &mut a.max.z, b.min.z, b.max.z, &mut vel.z, buffer)
    } else if x && z {
        clamp_axis(&mut a.min.y, &mut a.max.y, b.min.y, b.max.y, &mut vel.y, buffer)
    } else if y && z {
        clamp_axis(&mut a.min.x, &mut a.max.x, b.min.x, b.max.x, &mut vel.x, buffer)
    } else {
        false
    }
}

/// Resolves `a` against every obstacle in turn (the per-frame world pass).
pub fn resolve_all<I>(a: &mut Aabb, vel: &mut Vec3, obstacles: I, buffer: f32) -> u32
where
    I: IntoIterator<Item = Aabb>,
{
    let mut corrected = 0;
    for b in obstacles {
        if resolve(a, &b, vel, buffer) {
            corrected += 1;
        }
    }
    corrected
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_at(x: f32, y: f32, z: f32) -> Aabb {
        let min = Vec3::new(x, y, z);
        Aabb::new(min, min + Vec3::new(1.0, 1.0, 1.0))
    }

    #[test]
    fn approach_from_below_in_z_is_stopped() {
        // Same XY footprint, closing the Z gap faster than it is wide.
        let mut a = unit_at(0.0, 0.0, 0.0);
        let b = unit_at(0.0, 0.0, 1.5);
        let mut vel = Vec3::new(0.0, 0.0, 0.9);
        assert!(resolve(&mut a, &b, &mut vel, DEFAULT_BUFFER));
        assert_eq!(vel.z, 0.0);
        assert!((a.max.z - (b.min.z - DEFAULT_BUFFER)).abs() < 1e-6);
        // The box kept its extent.
        assert!((a.max.z - a.min.z - 1.0).abs() < 1e-6);
    }

    #[test]
    fn approach_from_above_in_z_is_stopped() {
        let mut a = unit_at(0.0, 0.0, 3.0);
        let b = unit_at(0.0, 0.0, 1.5);
        let mut vel = Vec3::new(0.0, 0.0, -0.9);
        assert!(resolve(&mut a, &b, &mut vel, DEFAULT_BUFFER));
        assert_eq!(vel.z, 0.0);
        assert!((a.min.z - (b.max.z + DEFAULT_BUFFER)).abs() < 1e-6);
    }

    #[test]
    fn falling_onto_a_block_is_stopped_in_y() {
        // XZ footprints overlap, Y gap closing: the floor case.
        let mut a = unit_at(0.2, 2.0, 0.2);
        let b = unit_at(0.0, 0.0, 0.0);
        let mut vel = Vec3::new(0.0, -1.5, 0.0);
        assert!(resolve(&mut a, &b, &mut vel, DEFAULT_BUFFER));
        assert_eq!(vel.y, 0.0);
        assert!((a.min.y - (b.max.y + DEFAULT_BUFFER)).abs() < 1e-6);
    }

    #[test]
    fn sideways_approach_is_stopped_in_x() {
        let mut a = unit_at(2.5, 0.0, 0.0);
        let b = unit_at(0.0, 0.0, 0.0);
        let mut vel = Vec3::new(-1.8, 0.0, 0.0);
        assert!(resolve(&mut a, &b, &mut vel, DEFAULT_BUFFER));
        assert_eq!(vel.x, 0.0);
        assert!((a.min.x - (b.max.x + DEFAULT_BUFFER)).abs() < 1e-6);
    }

    #[test]
    fn separated_boxes_are_untouched() {
        let mut a = unit_at(0.0, 0.0, 0.0);
        let b = unit_at(5.0, 5.0, 5.0);
        let before = a;
        let mut vel = Vec3::new(0.3, 0.3, 0.3);
        assert!(!resolve(&mut a, &b, &mut vel, DEFAULT_BUFFER));
        assert_eq!(a, before);
        assert_eq!(vel, Vec3::new(0.3, 0.3, 0.3));
    }

    #[test]
    fn receding_motion_is_untouched() {
        let mut a = unit_at(0.0, 0.0, 0.0);
        let b = unit_at(0.0, 0.0, 1.5);
        let mut vel = Vec3::new(0.0, 0.0, -0.9);
        assert!(!resolve(&mut a, &b, &mut vel, DEFAULT_BUFFER));
        assert_eq!(vel.z, -0.9);
    }

    #[test]
    fn xy_plane_takes_priority_over_xz() {
        // Overlapping in X, Y and Z at once: the XY branch wins, and since
        // the boxes already interpenetrate in Z, nothing fires. The Y axis
        // is deliberately not considered. Preserved corner-case behavior.
        let mut a = unit_at(0.5, 0.5, 0.5);
        let b = unit_at(0.0, 0.0, 0.0);
        let before = a;
        let mut vel = Vec3::new(0.0, 0.9, 0.9);
        assert!(!resolve(&mut a, &b, &mut vel, DEFAULT_BUFFER));
        assert_eq!(a, before);
        assert_eq!(vel, Vec3::new(0.0, 0.9, 0.9));
    }

    #[test]
    fn diagonal_corner_approach_corrects_one_axis_only() {
        // Overlap in X and Z only; approaching in both Y and X. The XZ
        // branch resolves Y and X keeps its speed.
        let mut a = unit_at(0.2, 2.0, 0.2);
        let b = unit_at(0.0, 0.0, 0.0);
        let mut vel = Vec3::new(0.5, -1.5, 0.0);
        assert!(resolve(&mut a, &b, &mut vel, DEFAULT_BUFFER));
        assert_eq!(vel.y, 0.0);
        assert_eq!(vel.x, 0.5);
    }

    #[test]
    fn world_pass_stops_on_any_obstacle() {
        let mut a = unit_at(0.2, 2.0, 0.2);
        let mut vel = Vec3::new(0.0, -1.5, 0.0);
        let obstacles = [(5, 5, 5), (0, 0, 0), (-3, 0, 0)];
        let corrected = resolve_all(
            &mut a,
            &mut vel,
            obstacles.into_iter().map(cell_aabb),
            DEFAULT_BUFFER,
        );
        assert_eq!(corrected, 1);
        assert_eq!(vel.y, 0.0);
    }

    #[test]
    fn cell_aabb_is_the_unit_box_at_the_cell() {
        let b = cell_aabb((-2, 3, 0));
        assert_eq!(b.min, Vec3::new(-2.0, 3.0, 0.0));
        assert_eq!(b.max, Vec3::new(-1.0, 4.0, 1.0));
    }
}
