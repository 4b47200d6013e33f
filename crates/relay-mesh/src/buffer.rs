//! Aggregate vertex/index buffers handed to the render backend.

use relay_geom::Vec3;

/// Interleaved vertex layout the backend consumes as-is.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vertex {
    pub pos: Vec3,
    pub color: [f32; 3],
    pub uv: [f32; 2],
}

/// Whole-world mesh, rebuilt wholesale. Capacity survives rebuilds.
#[derive(Default, Clone)]
pub struct MeshBuf {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl MeshBuf {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears both arrays but retains capacity for the next rebuild.
    #[inline]
    pub fn clear_keep_capacity(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Appends a variant's geometry at a world offset: positions shifted by
    /// `offset`, indices shifted by the running vertex count. Triangle order
    /// and winding are untouched.
    pub fn append_offset(&mut self, vertices: &[Vertex], indices: &[u32], offset: Vec3) {
        let base = self.vertices.len() as u32;
        self.vertices.extend(vertices.iter().map(|v| Vertex {
            pos: v.pos + offset,
            ..*v
        }));
        self.indices.extend(indices.iter().map(|i| base + i));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vert(x: f32, y: f32, z: f32) -> Vertex {
        Vertex {
            pos: Vec3::new(x, y, z),
            color: [1.0, 0.0, 0.0],
            uv: [0.0, 0.0],
        }
    }

    #[test]
    fn append_shifts_positions_and_indices() {
        let mut buf = MeshBuf::new();
        let verts = [vert(0.0, 0.0, 0.0), vert(1.0, 0.0, 0.0), vert(0.0, 1.0, 0.0)];
        let idx = [0u32, 1, 2];
        buf.append_offset(&verts, &idx, Vec3::ZERO);
        buf.append_offset(&verts, &idx, Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(buf.vertex_count(), 6);
        assert_eq!(buf.indices, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(buf.vertices[3].pos, Vec3::new(2.0, 0.0, 0.0));
        // Color and uv ride along unchanged.
        assert_eq!(buf.vertices[3].color, [1.0, 0.0, 0.0]);
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut buf = MeshBuf::new();
        let verts = [vert(0.0, 0.0, 0.0); 3];
        buf.append_offset(&verts, &[0, 1, 2], Vec3::ZERO);
        let cap = buf.vertices.capacity();
        buf.clear_keep_capacity();
        assert!(buf.is_empty());
        assert_eq!(buf.vertices.capacity(), cap);
    }
}
