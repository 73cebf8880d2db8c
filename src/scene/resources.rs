//! Render resources with explicit disposal.
//!
//! GPU-side buffers outlive ordinary drops in a renderer, so geometry and materials live
//! behind a [`Handle`] that can be disposed on purpose. Clones share the payload; once
//! any clone disposes it, every clone sees it as gone.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

static NEXT_RESOURCE_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identifier of a render resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceId(u64);

impl ResourceId {
    fn next() -> Self {
        ResourceId(NEXT_RESOURCE_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

struct Slot<T> {
    id: ResourceId,
    payload: Mutex<Option<Arc<T>>>,
}

/// Shared, explicitly disposable resource.
pub struct Handle<T> {
    slot: Arc<Slot<T>>,
}

impl<T> Clone for Handle<T> {
    fn clone(&self) -> Self {
        Handle { slot: Arc::clone(&self.slot) }
    }
}

impl<T> fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handle")
            .field("id", &self.slot.id)
            .field("disposed", &self.is_disposed())
            .finish()
    }
}

impl<T> Handle<T> {
    pub fn new(payload: T) -> Self {
        Handle {
            slot: Arc::new(Slot {
                id: ResourceId::next(),
                payload: Mutex::new(Some(Arc::new(payload))),
            }),
        }
    }

    pub fn id(&self) -> ResourceId {
        self.slot.id
    }

    /// The payload, or `None` once disposed.
    pub fn get(&self) -> Option<Arc<T>> {
        self.slot
            .payload
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Release the payload now. Returns `false` if it was already disposed.
    pub fn dispose(&self) -> bool {
        let released = self
            .slot
            .payload
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
            .is_some();
        if released {
            log::trace!("disposed resource {}", self.slot.id);
        }
        released
    }

    pub fn is_disposed(&self) -> bool {
        self.slot
            .payload
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_none()
    }
}

/// Physically based surface description.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    /// `0xRRGGBB`
    pub color: u32,
    pub metalness: f32,
    pub roughness: f32,
}

impl Material {
    pub const fn new(color: u32, metalness: f32, roughness: f32) -> Self {
        Material { color, metalness, roughness }
    }

    /// Polished gold used for every trophy part.
    pub const fn gold() -> Self {
        Material::new(0xffd700, 0.8, 0.2)
    }

    /// Blue satin used for engraved text.
    pub const fn text() -> Self {
        Material::new(0x2196f3, 0.3, 0.4)
    }

    /// Colour as linear-ish `[r, g, b]` in `0.0..=1.0`.
    pub fn rgb(&self) -> [f32; 3] {
        let channel = |shift: u32| ((self.color >> shift) & 0xff) as f32 / 255.0;
        [channel(16), channel(8), channel(0)]
    }
}
