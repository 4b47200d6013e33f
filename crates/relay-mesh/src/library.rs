//! Primitive library: one base mesh per primitive name, six pre-rotated
//! orientation variants derived once at load time.

use std::f32::consts::PI;
use std::path::Path;

use hashbrown::HashMap;
use relay_blocks::Direction;
use relay_geom::Vec3;
use thiserror::Error;

use crate::buffer::Vertex;
use crate::source::{MeshSource, MeshSourceError};

#[derive(Debug, Error)]
pub enum LibraryError {
    #[error(transparent)]
    Source(#[from] MeshSourceError),
    #[error("mesh asset for '{0}' contains no triangles")]
    EmptyMesh(String),
}

/// Six orientation variants of one primitive. All variants share one index
/// list; only the vertex positions differ.
pub struct Primitive {
    verts: [Vec<Vertex>; 6],
    indices: Vec<u32>,
}

impl Primitive {
    /// Vertex/index slices for the given orientation.
    #[inline]
    pub fn variant(&self, dir: Direction) -> (&[Vertex], &[u32]) {
        (&self.verts[dir.index()], &self.indices)
    }
}

// (orientation, yaw angle about +Y) pairs derived from the +X base.
const YAW_VARIANTS: [(Direction, f32); 3] = [
    (Direction::NegX, PI),
    (Direction::PosZ, 1.5 * PI),
    (Direction::NegZ, 0.5 * PI),
];
// (orientation, roll angle about +Z) pairs for the vertical facings.
const ROLL_VARIANTS: [(Direction, f32); 2] = [
    (Direction::PosY, 0.5 * PI),
    (Direction::NegY, 1.5 * PI),
];

/// Immutable store of primitives keyed by name. Built once at startup; the
/// mesh builder only reads from it.
pub struct PrimitiveLibrary {
    primitives: HashMap<String, Primitive>,
    rng: fastrand::Rng,
    tint_spread: f32,
}

impl PrimitiveLibrary {
    /// `tint_spread` is the per-channel color deviation; `seed` fixes the
    /// jitter sequence so rebuilt worlds are reproducible.
    pub fn new(seed: u64, tint_spread: f32) -> Self {
        Self {
            primitives: HashMap::new(),
            rng: fastrand::Rng::with_seed(seed),
            tint_spread,
        }
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.primitives.contains_key(name)
    }

    /// Looks up one orientation variant of a loaded primitive.
    #[inline]
    pub fn variant(&self, name: &str, dir: Direction) -> Option<(&[Vertex], &[u32])> {
        self.primitives.get(name).map(|p| p.variant(dir))
    }

    /// Loads a primitive's base mesh and derives its orientation variants.
    ///
    /// The base mesh spans [0,1]^3 and faces +X. It is re-centered before
    /// rotation and shifted back afterwards, so every variant spans [0,1]^3
    /// for a block at the origin. Failure leaves the library unchanged.
    pub fn load(
        &mut self,
        name: &str,
        path: &Path,
        tint: [f32; 3],
        source: &dyn MeshSource,
    ) -> Result<(), LibraryError> {
        let tris = source.load_triangles(path)?;
        if tris.is_empty() {
            return Err(LibraryError::EmptyMesh(name.to_string()));
        }

        // Corners become vertices; the jittered tint keeps flat-shaded faces
        // from reading as a single silhouette.
        let mut base: Vec<Vertex> = Vec::with_capacity(tris.len() * 3);
        for tri in &tris {
            for &p in tri {
                base.push(Vertex {
                    pos: p - Vec3::HALF,
                    color: self.jitter(tint),
                    uv: [0.0, 0.0],
                });
            }
        }
        let indices: Vec<u32> = (0..base.len() as u32).collect();

        let mut verts: [Vec<Vertex>; 6] = Default::default();
        for (dir, angle) in YAW_VARIANTS {
            verts[dir.index()] = spin(&base, |p| p.rotate_y(angle));
        }
        for (dir, angle) in ROLL_VARIANTS {
            verts[dir.index()] = spin(&base, |p| p.rotate_z(angle));
        }
        verts[Direction::PosX.index()] = spin(&base, |p| p);

        log::debug!(
            target: "mesh",
            "loaded primitive '{}' from {}: {} triangles",
            name,
            path.display(),
            tris.len()
        );
        self.primitives
            .insert(name.to_string(), Primitive { verts, indices });
        Ok(())
    }

    fn jitter(&mut self, tint: [f32; 3]) -> [f32; 3] {
        let mut c = tint;
        for ch in &mut c {
            *ch += self.tint_spread * (2.0 * self.rng.f32() - 1.0);
        }
        c
    }
}

fn spin(base: &[Vertex], rot: impl Fn(Vec3) -> Vec3) -> Vec<Vertex> {
    base.iter()
        .map(|v| Vertex {
            pos: rot(v.pos) + Vec3::HALF,
            ..*v
        })
        .collect()
}
