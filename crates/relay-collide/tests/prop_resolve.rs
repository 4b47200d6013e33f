use proptest::prelude::*;
use relay_collide::{DEFAULT_BUFFER, resolve};
use relay_geom::{Aabb, Vec3};

fn arb_vec3(range: std::ops::Range<f32>) -> impl Strategy<Value = Vec3> {
    (range.clone(), range.clone(), range).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

fn arb_box() -> impl Strategy<Value = Aabb> {
    (arb_vec3(-4.0..4.0), arb_vec3(0.1..2.0))
        .prop_map(|(min, size)| Aabb::new(min, min + size))
}

proptest! {
    // Resolution may translate the moving box but never resizes it.
    #[test]
    fn extent_is_preserved(a in arb_box(), b in arb_box(), v in arb_vec3(-3.0..3.0)) {
        let mut moved = a;
        let mut vel = v;
        resolve(&mut moved, &b, &mut vel, DEFAULT_BUFFER);
        let e0 = a.max - a.min;
        let e1 = moved.max - moved.min;
        prop_assert!((e0 - e1).length() < 1e-4);
    }

    // At most one velocity component changes, and a changed one is zeroed.
    #[test]
    fn at_most_one_axis_corrected(a in arb_box(), b in arb_box(), v in arb_vec3(-3.0..3.0)) {
        let mut moved = a;
        let mut vel = v;
        let fired = resolve(&mut moved, &b, &mut vel, DEFAULT_BUFFER);
        let changed = [
            (vel.x != v.x, vel.x),
            (vel.y != v.y, vel.y),
            (vel.z != v.z, vel.z),
        ];
        let n = changed.iter().filter(|(c, _)| *c).count();
        prop_assert!(n <= 1);
        prop_assert_eq!(fired, n == 1);
        for (c, now) in changed {
            if c {
                prop_assert_eq!(now, 0.0);
            }
        }
    }

    // A fired correction leaves the boxes separated on the corrected axis.
    #[test]
    fn correction_separates_the_boxes(a in arb_box(), b in arb_box(), v in arb_vec3(-3.0..3.0)) {
        let mut moved = a;
        let mut vel = v;
        if resolve(&mut moved, &b, &mut vel, DEFAULT_BUFFER) {
            let apart_x = moved.max.x <= b.min.x || moved.min.x >= b.max.x;
            let apart_y = moved.max.y <= b.min.y || moved.min.y >= b.max.y;
            let apart_z = moved.max.z <= b.min.z || moved.min.z >= b.max.z;
            prop_assert!(apart_x || apart_y || apart_z);
        }
    }
}
