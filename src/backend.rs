//! Stand-in render backend: records upload statistics.
//!
//! A real device backend slots in behind the same trait; nothing upstream
//! knows the difference.

use relay_mesh::{MeshBuf, RenderBackend};

#[derive(Default, Debug)]
pub struct StatsBackend {
    pub uploads: u64,
    pub vertices: usize,
    pub indices: usize,
}

impl RenderBackend for StatsBackend {
    fn upload(&mut self, mesh: &MeshBuf) {
        self.uploads += 1;
        self.vertices = mesh.vertex_count();
        self.indices = mesh.index_count();
        log::debug!(
            target: "render",
            "upload #{}: {} vertices, {} indices",
            self.uploads,
            self.vertices,
            self.indices
        );
    }
}
