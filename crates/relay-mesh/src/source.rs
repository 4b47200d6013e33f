//! Boundary trait for mesh assets: a path in, triangles out.

use std::path::Path;

use relay_geom::Vec3;
use thiserror::Error;

/// One triangle of positions; texcoords and normals are not required here.
pub type Triangle = [Vec3; 3];

#[derive(Debug, Error)]
pub enum MeshSourceError {
    #[error("mesh asset '{path}' could not be read: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("mesh asset '{path}' is malformed: {reason}")]
    Malformed { path: String, reason: String },
    #[error("no mesh asset available for '{path}'")]
    Missing { path: String },
}

/// Supplies base geometry for primitives. Implementations live outside this
/// crate (model-file parsing is not a meshing concern).
pub trait MeshSource {
    fn load_triangles(&self, path: &Path) -> Result<Vec<Triangle>, MeshSourceError>;
}
