//! Frame-stepped application state.
//!
//! One `step` per frame, in a fixed order: intents from the input snapshot,
//! pick-driven edits, mesh rebuild when the world changed, movement with the
//! collision pass, then buffer handoff to the render backend.

use relay_blocks::{BlockKind, BlockRegistry};
use relay_collide::{cell_aabb, resolve_all};
use relay_geom::Vec3;
use relay_mesh::{MeshBuf, PrimitiveLibrary, RenderBackend, rebuild};
use relay_pick::{cast_world, place_block, remove_block};

use crate::camera::Camera;
use crate::config::EngineConfig;
use crate::input::{EdgeLatch, InputSnapshot};
use crate::intent::{Intent, log_intent};

pub struct App {
    pub cfg: EngineConfig,
    pub registry: BlockRegistry,
    pub library: PrimitiveLibrary,
    pub mesh: MeshBuf,
    pub cam: Camera,
    pub selected: BlockKind,
    pub frame: u64,
    place_latch: EdgeLatch,
    remove_latch: EdgeLatch,
}

impl App {
    pub fn new(cfg: EngineConfig, library: PrimitiveLibrary) -> Self {
        let [x, y, z] = cfg.camera.spawn;
        Self {
            cfg,
            registry: BlockRegistry::new(),
            library,
            mesh: MeshBuf::new(),
            cam: Camera::new(Vec3::new(x, y, z)),
            selected: BlockKind::Wire,
            frame: 0,
            place_latch: EdgeLatch::default(),
            remove_latch: EdgeLatch::default(),
        }
    }

    /// Advances one frame. The render backend only hears from us when the
    /// world mesh was rebuilt this frame.
    pub fn step(&mut self, input: &InputSnapshot, dt: f32, backend: &mut dyn RenderBackend) {
        self.frame += 1;
        let intents = self.gather_intents(input);
        for intent in &intents {
            log_intent(self.frame, intent);
        }

        let mut movement = (0.0f32, 0.0f32, 0.0f32, false);
        for intent in intents {
            match intent {
                Intent::Look { yaw, pitch } => self.cam.look(yaw, pitch),
                Intent::SelectKind(kind) => self.selected = kind,
                Intent::PlaceRequested(kind) => {
                    let pick_cfg = self.cfg.pick.to_pick_config();
                    if let Some(hit) = cast_world(
                        &self.registry,
                        self.cam.eye_position(),
                        self.cam.forward(),
                        &pick_cfg,
                    ) {
                        place_block(&mut self.registry, hit, kind);
                    }
                }
                Intent::RemoveRequested => {
                    let pick_cfg = self.cfg.pick.to_pick_config();
                    if let Some(hit) = cast_world(
                        &self.registry,
                        self.cam.eye_position(),
                        self.cam.forward(),
                        &pick_cfg,
                    ) {
                        remove_block(&mut self.registry, hit);
                    }
                }
                Intent::Move {
                    forward,
                    strafe,
                    ascend,
                    run,
                } => movement = (forward, strafe, ascend, run),
            }
        }

        let rebuilt = self.registry.needs_rebuild();
        if rebuilt {
            let rev = self.registry.rev();
            rebuild(&self.registry, &self.library, &mut self.mesh);
            self.registry.mark_built(rev);
        }

        let (forward, strafe, ascend, run) = movement;
        self.integrate(forward, strafe, ascend, run, dt);

        if rebuilt {
            backend.upload(&self.mesh);
        }
    }

    /// Derives this frame's intents. Selection applies immediately so a
    /// same-frame place uses the new kind; triggers go through edge latches.
    fn gather_intents(&mut self, input: &InputSnapshot) -> Vec<Intent> {
        let mut intents = Vec::with_capacity(5);
        if input.yaw_delta != 0.0 || input.pitch_delta != 0.0 {
            intents.push(Intent::Look {
                yaw: input.yaw_delta,
                pitch: input.pitch_delta,
            });
        }
        if let Some(kind) = input.select {
            self.selected = kind;
            intents.push(Intent::SelectKind(kind));
        }
        if self.remove_latch.fire(input.remove_held) {
            intents.push(Intent::RemoveRequested);
        }
        if self.place_latch.fire(input.place_held) {
            intents.push(Intent::PlaceRequested(self.selected));
        }
        intents.push(Intent::Move {
            forward: input.forward,
            strafe: input.strafe,
            ascend: input.ascend,
            run: input.run,
        });
        intents
    }

    /// Velocity integration with the world collision pass: damp, steer,
    /// resolve against every placed block's unit box, then move.
    fn integrate(&mut self, forward: f32, strafe: f32, ascend: f32, run: bool, dt: f32) {
        let cam_cfg = &self.cfg.camera;
        let speed = cam_cfg.speed * if run { cam_cfg.run_mult } else { 1.0 };

        let f = self.cam.forward();
        let flat = Vec3::new(f.x, 0.0, f.z).normalized();
        let r = self.cam.right();
        let mut wish = flat * forward + Vec3::new(r.x, 0.0, r.z) * strafe;
        if wish.length() > 0.0 {
            wish = wish.normalized();
        }

        self.cam.vel.x *= cam_cfg.damping;
        self.cam.vel.z *= cam_cfg.damping;
        self.cam.vel += wish * (speed * dt);
        self.cam.vel.y = ascend * speed * dt;

        let buffer = self.cfg.collide.buffer;
        resolve_all(
            &mut self.cam.body,
            &mut self.cam.vel,
            self.registry.iter().map(|(c, _)| cell_aabb(c)),
            buffer,
        );
        self.cam.body = self.cam.body.shifted(self.cam.vel);
    }
}
