//! Scene registry
//!
//! Owned mapping from scene id to its renderable context. The registry is
//! plain single-threaded state held by the frame driver; all mutation happens
//! between ticks on the same cooperative queue.

use crate::particles::ParticleGroup;
use crate::render::{SurfaceHandle, SurfaceSize};
use crate::scene::{Camera, SceneGraph};
use std::collections::HashMap;

/// One registered renderable context
#[derive(Debug)]
pub struct SceneEntry {
    /// Scene graph to draw
    pub graph: SceneGraph,
    /// Camera to draw it with
    pub camera: Camera,
    /// Output surface, absent when surface creation failed at registration.
    /// Surfaceless entries still animate but are skipped by the draw pass.
    pub surface: Option<SurfaceHandle>,
    /// Declared surface sizing, used to decide who follows viewport resizes
    pub size: SurfaceSize,
    /// Particle group attached to this scene, if any
    pub particles: Option<ParticleGroup>,
}

/// Mapping from scene id to scene entry
///
/// Ids are caller-chosen strings with no format constraint. Re-registration
/// under an existing id silently replaces the previous entry.
#[derive(Debug, Default)]
pub struct SceneRegistry {
    entries: HashMap<String, SceneEntry>,
}

impl SceneRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the entry for `id`, returning the displaced entry
    pub fn insert(&mut self, id: impl Into<String>, entry: SceneEntry) -> Option<SceneEntry> {
        self.entries.insert(id.into(), entry)
    }

    /// Look up an entry
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&SceneEntry> {
        self.entries.get(id)
    }

    /// Look up an entry mutably
    pub fn get_mut(&mut self, id: &str) -> Option<&mut SceneEntry> {
        self.entries.get_mut(id)
    }

    /// Iterate entries in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &SceneEntry)> {
        self.entries.iter().map(|(id, entry)| (id.as_str(), entry))
    }

    /// Iterate entries mutably in arbitrary order
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut SceneEntry)> {
        self.entries
            .iter_mut()
            .map(|(id, entry)| (id.as_str(), entry))
    }

    /// Drain all entries, leaving the registry empty
    pub fn drain(&mut self) -> impl Iterator<Item = (String, SceneEntry)> + '_ {
        self.entries.drain()
    }

    /// Number of registered scenes
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Camera;

    fn entry() -> SceneEntry {
        SceneEntry {
            graph: SceneGraph::new(),
            camera: Camera::perspective(75.0, 1.0),
            surface: None,
            size: SurfaceSize::Viewport,
            particles: None,
        }
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut registry = SceneRegistry::new();
        assert!(registry.is_empty());

        registry.insert("logo", entry());
        assert_eq!(registry.len(), 1);
        assert!(registry.get("logo").is_some());
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn test_reregistration_replaces() {
        let mut registry = SceneRegistry::new();
        registry.insert("logo", entry());

        let mut replacement = entry();
        replacement.camera.set_aspect(2.0);
        let displaced = registry.insert("logo", replacement);

        assert!(displaced.is_some());
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("logo").unwrap().camera.aspect, 2.0);
    }
}
