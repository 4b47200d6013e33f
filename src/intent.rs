//! Input-derived intents, logged under the `events` target.

use relay_blocks::BlockKind;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Intent {
    Look { yaw: f32, pitch: f32 },
    Move { forward: f32, strafe: f32, ascend: f32, run: bool },
    SelectKind(BlockKind),
    PlaceRequested(BlockKind),
    RemoveRequested,
}

pub fn log_intent(frame: u64, intent: &Intent) {
    match intent {
        Intent::Look { yaw, pitch } => {
            log::trace!(target: "events", "[frame {}] Look yaw={:.3} pitch={:.3}", frame, yaw, pitch);
        }
        Intent::Move {
            forward,
            strafe,
            ascend,
            run,
        } => {
            log::trace!(
                target: "events",
                "[frame {}] Move fwd={:.2} strafe={:.2} ascend={:.2} run={}",
                frame,
                forward,
                strafe,
                ascend,
                run
            );
        }
        Intent::SelectKind(kind) => {
            log::info!(target: "events", "[frame {}] SelectKind {:?}", frame, kind);
        }
        Intent::PlaceRequested(kind) => {
            log::info!(target: "events", "[frame {}] PlaceRequested {:?}", frame, kind);
        }
        Intent::RemoveRequested => {
            log::info!(target: "events", "[frame {}] RemoveRequested", frame);
        }
    }
}
