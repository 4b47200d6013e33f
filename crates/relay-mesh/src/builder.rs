//! Whole-world mesh assembly from the registry and the primitive library.

use relay_blocks::{BlockKind, BlockRegistry, Direction};
use relay_geom::Vec3;

use crate::buffer::MeshBuf;
use crate::library::PrimitiveLibrary;

/// Primitive used for a wire with no connected neighbors.
pub const WIRE_CENTER: &str = "wire_center";

/// Receives the rebuilt buffers. The device side (upload, draw) lives behind
/// this trait.
pub trait RenderBackend {
    fn upload(&mut self, mesh: &MeshBuf);
}

/// Regenerates the world mesh from scratch into `out`.
///
/// Wires grow one connector stub per occupied axis neighbor, oriented toward
/// that neighbor, or a single center piece when isolated. Gates emit one
/// variant chosen by the opposite of their stored facing, so the front face
/// looks back along the facing axis.
pub fn rebuild(reg: &BlockRegistry, lib: &PrimitiveLibrary, out: &mut MeshBuf) {
    out.clear_keep_capacity();
    for ((x, y, z), block) in reg.iter() {
        let offset = Vec3::new(x as f32, y as f32, z as f32);
        match block.kind {
            BlockKind::Wire => {
                let mut connected = false;
                for dir in Direction::ALL {
                    let (dx, dy, dz) = dir.delta();
                    if reg.exists((x + dx, y + dy, z + dz)) {
                        append_variant(out, lib, BlockKind::Wire.name(), dir, offset);
                        connected = true;
                    }
                }
                if !connected {
                    append_variant(out, lib, WIRE_CENTER, Direction::PosX, offset);
                }
            }
            kind => append_variant(out, lib, kind.name(), block.facing.opposite(), offset),
        }
    }
    log::debug!(
        target: "mesh",
        "rebuilt world mesh: {} blocks -> {} vertices, {} indices",
        reg.len(),
        out.vertex_count(),
        out.index_count()
    );
}

fn append_variant(
    out: &mut MeshBuf,
    lib: &PrimitiveLibrary,
    name: &str,
    dir: Direction,
    offset: Vec3,
) {
    match lib.variant(name, dir) {
        Some((verts, idx)) => out.append_offset(verts, idx, offset),
        // Load-set validation at startup makes this unreachable in the binary.
        None => log::warn!(target: "mesh", "no primitive '{}' loaded; block skipped", name),
    }
}
