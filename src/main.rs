//! relay: a logic-block voxel workspace.
//!
//! The binary wires the engine crates to stand-in boundaries (procedural
//! mesh source, stats render backend) and runs a scripted session: seed a
//! small circuit, edit it through the picker, walk the camera into it.

mod app;
mod assets;
mod backend;
mod camera;
mod config;
mod input;
mod intent;
mod proc_mesh;

use std::error::Error;
use std::time::{Duration, Instant};

use clap::Parser;

use relay_blocks::{BlockCatalog, BlockKind, BlockRegistry, Direction};
use relay_mesh::{PrimitiveLibrary, WIRE_CENTER};

use crate::app::App;
use crate::backend::StatsBackend;
use crate::config::EngineConfig;
use crate::input::InputSnapshot;
use crate::proc_mesh::BuiltinMeshSource;

#[derive(Parser, Debug)]
#[command(name = "relay", about = "Logic-block voxel workspace demo")]
struct Args {
    /// Assets root (defaults to RELAY_ASSETS or a nearby directory with assets/)
    #[arg(long)]
    assets: Option<String>,
    /// Frames to simulate before exiting
    #[arg(long, default_value_t = 240)]
    frames: u32,
    /// Config file (defaults to <assets>/assets/relay.toml)
    #[arg(long)]
    config: Option<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let assets_root = assets::resolve_assets_root(args.assets.clone());
    log::info!("assets root: {}", assets_root.display());

    let config_path = args
        .config
        .as_ref()
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|| assets::config_path(&assets_root));
    let cfg = EngineConfig::load(&config_path)?;

    // Primitive geometry is mandatory: any load failure aborts startup.
    let catalog = BlockCatalog::from_path(assets::catalog_path(&assets_root))?;
    let source = BuiltinMeshSource;
    let mut library = PrimitiveLibrary::new(cfg.mesh.seed, cfg.mesh.tint_spread);
    for def in catalog.iter() {
        library.load(
            &def.name,
            &assets::model_path(&assets_root, &def.model),
            def.tint,
            &source,
        )?;
    }
    for name in BlockKind::ALL.iter().map(|k| k.name()).chain([WIRE_CENTER]) {
        if !library.contains(name) {
            return Err(format!("catalog is missing primitive '{name}'").into());
        }
    }
    log::info!("loaded {} primitives", library.len());

    let mut app = App::new(cfg, library);
    seed_world(&mut app.registry);
    log::info!("seeded world with {} blocks", app.registry.len());

    let mut backend = StatsBackend::default();
    let frame_budget = Duration::from_secs_f32(1.0 / app.cfg.frame.target_fps as f32);
    let dt = frame_budget.as_secs_f32();

    for frame in 0..args.frames {
        let started = Instant::now();
        let snapshot = demo_script(frame);
        app.step(&snapshot, dt, &mut backend);
        let elapsed = started.elapsed();
        if elapsed < frame_budget {
            std::thread::sleep(frame_budget - elapsed);
        } else {
            log::warn!(
                target: "frame",
                "frame {} over budget ({:?}); {} blocks",
                frame,
                elapsed,
                app.registry.len()
            );
        }
    }

    log::info!(
        "done: {} frames, {} blocks, {} uploads, last mesh {} vertices / {} indices",
        args.frames,
        app.registry.len(),
        backend.uploads,
        backend.vertices,
        backend.indices
    );
    Ok(())
}

/// Starter circuit in front of the spawn point: an inverter feeding a wire
/// run into a gate, plus a side tap so the wire stubs branch.
fn seed_world(reg: &mut BlockRegistry) {
    reg.insert_facing((0, 0, 1), BlockKind::Inverter, Direction::NegZ);
    for z in 2..5 {
        reg.insert((0, 0, z), BlockKind::Wire);
    }
    reg.insert((1, 0, 3), BlockKind::Wire);
    reg.insert_facing((0, 0, 5), BlockKind::AndGate, Direction::PosZ);
}

/// Deterministic input feed standing in for the window event loop.
fn demo_script(frame: u32) -> InputSnapshot {
    let mut s = InputSnapshot::default();
    match frame {
        0 => s.select = Some(BlockKind::Wire),
        // Held across two frames: the latch must fire only once.
        10 | 11 => s.place_held = true,
        40 => s.place_held = true,
        70 => s.select = Some(BlockKind::Inverter),
        80 => s.place_held = true,
        120 => s.remove_held = true,
        _ => {}
    }
    if (140..200).contains(&frame) {
        s.forward = 1.0;
        s.run = frame >= 170;
    }
    if (200..240).contains(&frame) {
        s.yaw_delta = 0.02;
        s.ascend = 0.4;
    }
    s
}
