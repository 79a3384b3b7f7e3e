//! Periodic renderers
//!
//! Every renderer looks each surface up before writing it. A missing surface
//! skips that one write only; the rest of the renderer carries on. Rendering
//! twice with the same inputs leaves the same surface content.

pub mod clock;
pub mod world;
pub mod calendar;
pub mod weather;

pub use clock::*;
pub use world::*;
pub use calendar::*;
pub use weather::*;

use kiosk_core::{SurfaceId, SurfaceTree, SurfaceUpdate};

/// Which surfaces a render pass wrote and which it skipped
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderReport {
    pub written: Vec<SurfaceId>,
    pub skipped: Vec<SurfaceId>,
}

impl RenderReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write one surface if it exists
    pub fn write(&mut self, tree: &mut dyn SurfaceTree, id: SurfaceId, update: SurfaceUpdate) {
        if !tree.contains(id) {
            tracing::debug!("surface {} not present, skipped", id);
            self.skipped.push(id);
            return;
        }

        match tree.write(id, update) {
            Ok(()) => self.written.push(id),
            Err(e) => {
                tracing::debug!("surface {} skipped: {}", id, e);
                self.skipped.push(id);
            }
        }
    }

    /// Every addressed surface was written
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }

    pub fn merge(&mut self, other: RenderReport) {
        self.written.extend(other.written);
        self.skipped.extend(other.skipped);
    }
}
