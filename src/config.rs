//! Engine tunables, loaded from `assets/relay.toml` with full defaults.

use std::error::Error;
use std::path::Path;

use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct EngineConfig {
    pub pick: PickCfg,
    pub collide: CollideCfg,
    pub mesh: MeshCfg,
    pub frame: FrameCfg,
    pub camera: CameraCfg,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct PickCfg {
    pub step_count: u32,
    pub step_len: f32,
}

impl Default for PickCfg {
    fn default() -> Self {
        Self {
            step_count: 150,
            step_len: 1.0 / 25.0,
        }
    }
}

impl PickCfg {
    pub fn to_pick_config(&self) -> relay_pick::PickConfig {
        relay_pick::PickConfig {
            step_count: self.step_count,
            step_len: self.step_len,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct CollideCfg {
    pub buffer: f32,
}

impl Default for CollideCfg {
    fn default() -> Self {
        Self {
            buffer: relay_collide::DEFAULT_BUFFER,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct MeshCfg {
    pub tint_spread: f32,
    pub seed: u64,
}

impl Default for MeshCfg {
    fn default() -> Self {
        Self {
            tint_spread: 0.2,
            seed: 0x52454c41,
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct FrameCfg {
    pub target_fps: u32,
}

impl Default for FrameCfg {
    fn default() -> Self {
        Self { target_fps: 60 }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct CameraCfg {
    /// Eye spawn position.
    pub spawn: [f32; 3],
    /// Walk speed, units per second.
    pub speed: f32,
    /// Speed multiplier while the run modifier is held.
    pub run_mult: f32,
    /// Per-frame horizontal velocity damping factor.
    pub damping: f32,
}

impl Default for CameraCfg {
    fn default() -> Self {
        Self {
            spawn: [0.5, 0.5, -4.0],
            speed: 1.2,
            run_mult: 5.0,
            damping: 0.35,
        }
    }
}

impl EngineConfig {
    /// Missing file falls back to defaults; a present-but-malformed file is
    /// an error so a typo never silently reverts a tunable.
    pub fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        match std::fs::read_to_string(path) {
            Ok(text) => {
                let cfg = toml::from_str(&text)?;
                Ok(cfg)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("no config at {}; using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }
}
