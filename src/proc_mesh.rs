//! Procedural stand-in for the model loader.
//!
//! Primitives are keyed by the file stem of the requested path and built
//! from boxes in code. A model-file loader implementing [`MeshSource`] can
//! replace this without touching the engine crates.

use std::path::Path;

use relay_geom::Vec3;
use relay_mesh::{MeshSource, MeshSourceError, Triangle};

pub struct BuiltinMeshSource;

impl MeshSource for BuiltinMeshSource {
    fn load_triangles(&self, path: &Path) -> Result<Vec<Triangle>, MeshSourceError> {
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| MeshSourceError::Malformed {
                path: path.display().to_string(),
                reason: "path has no file stem".to_string(),
            })?;
        match stem {
            // Connector stub reaching from the cell center to the +X face.
            "wire" => Ok(box_triangles(
                Vec3::new(0.4, 0.4, 0.4),
                Vec3::new(1.0, 0.6, 0.6),
            )),
            // Small hub for an unconnected wire.
            "wire_center" => Ok(box_triangles(
                Vec3::new(0.35, 0.35, 0.35),
                Vec3::new(0.65, 0.65, 0.65),
            )),
            // Gates share a body plus a nose so the facing reads at a glance.
            "inverter" | "and_gate" | "or_gate" | "xor_gate" => {
                let mut tris = box_triangles(Vec3::new(0.1, 0.1, 0.1), Vec3::new(0.9, 0.9, 0.9));
                tris.extend(box_triangles(
                    Vec3::new(0.9, 0.35, 0.35),
                    Vec3::new(1.0, 0.65, 0.65),
                ));
                Ok(tris)
            }
            _ => Err(MeshSourceError::Missing {
                path: path.display().to_string(),
            }),
        }
    }
}

/// Twelve triangles covering a box, CCW wound facing outward.
fn box_triangles(min: Vec3, max: Vec3) -> Vec<Triangle> {
    let (x0, y0, z0) = (min.x, min.y, min.z);
    let (x1, y1, z1) = (max.x, max.y, max.z);
    let quads: [[Vec3; 4]; 6] = [
        // +X
        [
            Vec3::new(x1, y0, z0),
            Vec3::new(x1, y1, z0),
            Vec3::new(x1, y1, z1),
            Vec3::new(x1, y0, z1),
        ],
        // -X
        [
            Vec3::new(x0, y0, z0),
            Vec3::new(x0, y0, z1),
            Vec3::new(x0, y1, z1),
            Vec3::new(x0, y1, z0),
        ],
        // +Y
        [
            Vec3::new(x0, y1, z0),
            Vec3::new(x0, y1, z1),
            Vec3::new(x1, y1, z1),
            Vec3::new(x1, y1, z0),
        ],
        // -Y
        [
            Vec3::new(x0, y0, z0),
            Vec3::new(x1, y0, z0),
            Vec3::new(x1, y0, z1),
            Vec3::new(x0, y0, z1),
        ],
        // +Z
        [
            Vec3::new(x0, y0, z1),
            Vec3::new(x1, y0, z1),
            Vec3::new(x1, y1, z1),
            Vec3::new(x0, y1, z1),
        ],
        // -Z
        [
            Vec3::new(x0, y0, z0),
            Vec3::new(x0, y1, z0),
            Vec3::new(x1, y1, z0),
            Vec3::new(x1, y0, z0),
        ],
    ];
    let mut tris = Vec::with_capacity(12);
    for [a, b, c, d] in quads {
        tris.push([a, b, c]);
        tris.push([a, c, d]);
    }
    tris
}
