use proptest::prelude::*;
use relay_geom::Vec3;
use relay_mesh::{MeshBuf, Vertex};

fn arb_vertex() -> impl Strategy<Value = Vertex> {
    (-100.0f32..100.0, -100.0f32..100.0, -100.0f32..100.0).prop_map(|(x, y, z)| Vertex {
        pos: Vec3::new(x, y, z),
        color: [0.5, 0.5, 0.5],
        uv: [0.0, 0.0],
    })
}

fn arb_chunk() -> impl Strategy<Value = (Vec<Vertex>, Vec3)> {
    (
        proptest::collection::vec(arb_vertex(), 3..30),
        (-8.0f32..8.0, -8.0f32..8.0, -8.0f32..8.0).prop_map(|(x, y, z)| Vec3::new(x, y, z)),
    )
}

proptest! {
    // However many chunks get appended, every index stays inside the vertex
    // array and relative triangle order inside each chunk is preserved.
    #[test]
    fn appended_indices_always_valid(chunks in proptest::collection::vec(arb_chunk(), 1..12)) {
        let mut buf = MeshBuf::new();
        let mut expected_vertices = 0usize;
        for (verts, offset) in &chunks {
            let idx: Vec<u32> = (0..verts.len() as u32).collect();
            let base = buf.vertex_count() as u32;
            buf.append_offset(verts, &idx, *offset);
            expected_vertices += verts.len();
            // This chunk's indices came out shifted by its base, in order.
            let tail = &buf.indices[buf.index_count() - idx.len()..];
            for (k, &i) in tail.iter().enumerate() {
                prop_assert_eq!(i, base + k as u32);
            }
        }
        prop_assert_eq!(buf.vertex_count(), expected_vertices);
        for &i in &buf.indices {
            prop_assert!((i as usize) < buf.vertex_count());
        }
    }
}
