//! Surfaces shared between the driver task and the terminal

use std::sync::Arc;

use parking_lot::Mutex;

use kiosk_core::{
    KioskResult, MemoryBoard, ScrollSurface, SurfaceId, SurfaceTree, SurfaceUpdate,
    VirtualViewport,
};

/// A `MemoryBoard` the UI can read while the driver writes to it
#[derive(Clone, Default)]
pub struct SharedBoard {
    inner: Arc<Mutex<MemoryBoard>>,
}

impl SharedBoard {
    pub fn new(board: MemoryBoard) -> Self {
        Self {
            inner: Arc::new(Mutex::new(board)),
        }
    }

    /// Copy of the current content
    pub fn snapshot(&self) -> MemoryBoard {
        self.inner.lock().clone()
    }
}

impl SurfaceTree for SharedBoard {
    fn contains(&self, id: SurfaceId) -> bool {
        self.inner.lock().contains(id)
    }

    fn write(&mut self, id: SurfaceId, update: SurfaceUpdate) -> KioskResult<()> {
        self.inner.lock().write(id, update)
    }
}

/// Viewport handle the UI can query for the scroll position
#[derive(Clone)]
pub struct SharedViewport {
    inner: Arc<Mutex<VirtualViewport>>,
}

impl SharedViewport {
    pub fn new(page_height: f64, pages: u32) -> Self {
        Self {
            inner: Arc::new(Mutex::new(VirtualViewport::new(page_height, pages))),
        }
    }

    /// (offset, current page, page count)
    pub fn position(&self) -> (f64, u32, u32) {
        let viewport = self.inner.lock();
        (viewport.offset(), viewport.current_page(), viewport.pages())
    }
}

impl ScrollSurface for SharedViewport {
    fn offset(&self) -> f64 {
        self.inner.lock().offset()
    }

    fn set_offset(&mut self, offset: f64) {
        self.inner.lock().set_offset(offset);
    }

    fn page_height(&self) -> f64 {
        self.inner.lock().page_height()
    }
}
