//! Authoritative scene: flat instance storage, mesh interning,
//! per-frame draw list assembly.
//!
//! A [`Scene`] owns placed [`SceneInstance`]s in insertion order. Each
//! instance pairs a mesh handle with a world [`Transform`], a
//! [`Blend`] class, and a visibility flag. [`Scene::frame_draws`]
//! turns the visible instances into the frame's draw lists, ordering
//! the translucent ones back-to-front.

mod draws;
mod transform;

use glam::Vec3;
use rustc_hash::FxHashMap;

pub use draws::{DrawCall, FrameDraws};
pub use transform::Transform;

// ---------------------------------------------------------------------------
// Meshes
// ---------------------------------------------------------------------------

/// Handle to a mesh registered in a [`MeshRegistry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshId(u32);

impl MeshId {
    /// Raw index for callers keying GPU-side tables by mesh.
    #[must_use]
    pub fn index(self) -> u32 {
        self.0
    }
}

/// Interns mesh names to stable handles.
///
/// The registry never stores geometry. It only maps the caller's mesh
/// names to dense ids, so instances stay small and comparisons stay
/// cheap.
#[derive(Debug, Default)]
pub struct MeshRegistry {
    ids: FxHashMap<String, MeshId>,
    names: Vec<String>,
}

impl MeshRegistry {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id for `name`, registering it on first sight. Ids
    /// are dense and assigned in first-seen order.
    pub fn intern(&mut self, name: &str) -> MeshId {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }
        let id = MeshId(u32::try_from(self.names.len()).unwrap_or(u32::MAX));
        self.names.push(name.to_owned());
        let _ = self.ids.insert(name.to_owned(), id);
        id
    }

    /// Id for an already-registered name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<MeshId> {
        self.ids.get(name).copied()
    }

    /// Name a handle was registered under.
    #[must_use]
    pub fn name(&self, id: MeshId) -> Option<&str> {
        self.names.get(id.0 as usize).map(String::as_str)
    }

    /// Number of registered meshes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether no meshes are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Instances
// ---------------------------------------------------------------------------

/// How an instance's fragments combine with what is already drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Blend {
    /// Depth-tested and drawn in insertion order.
    #[default]
    Opaque,
    /// Alpha-blended and drawn back-to-front after every opaque draw.
    Translucent,
}

/// One placed mesh in the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneInstance {
    /// Mesh to draw.
    pub mesh: MeshId,
    /// World placement.
    pub transform: Transform,
    /// Blend class deciding which draw list the instance joins.
    pub blend: Blend,
    /// Hidden instances are skipped entirely when assembling draws.
    pub visible: bool,
    id: u32,
}

impl SceneInstance {
    /// Scene-unique id assigned at insertion.
    #[must_use]
    pub fn id(&self) -> u32 {
        self.id
    }
}

// ---------------------------------------------------------------------------
// Scene
// ---------------------------------------------------------------------------

/// The authoritative scene. Owns all instances in a flat list.
pub struct Scene {
    /// Instances in insertion order.
    instances: Vec<SceneInstance>,
    next_id: u32,
}

impl Scene {
    /// Empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self {
            instances: Vec::new(),
            next_id: 0,
        }
    }

    /// Adds an instance and returns its assigned id. Ids are unique for
    /// the lifetime of the scene and never reused after removal.
    pub fn add(
        &mut self,
        mesh: MeshId,
        transform: Transform,
        blend: Blend,
    ) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        self.instances.push(SceneInstance {
            mesh,
            transform,
            blend,
            visible: true,
            id,
        });
        id
    }

    /// Removes an instance by id. Returns the removed instance, if any.
    pub fn remove(&mut self, id: u32) -> Option<SceneInstance> {
        let idx = self.instances.iter().position(|i| i.id == id)?;
        Some(self.instances.remove(idx))
    }

    /// Read access to an instance.
    #[must_use]
    pub fn instance(&self, id: u32) -> Option<&SceneInstance> {
        self.instances.iter().find(|i| i.id == id)
    }

    /// Write access to an instance.
    pub fn instance_mut(&mut self, id: u32) -> Option<&mut SceneInstance> {
        self.instances.iter_mut().find(|i| i.id == id)
    }

    /// Read access to all instances (insertion order).
    #[must_use]
    pub fn instances(&self) -> &[SceneInstance] {
        &self.instances
    }

    /// Number of instances, hidden ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Whether the scene holds no instances.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// Shows or hides an instance. Unknown ids are ignored.
    pub fn set_visible(&mut self, id: u32, visible: bool) {
        if let Some(instance) = self.instance_mut(id) {
            instance.visible = visible;
        }
    }

    /// Removes all instances. Previously assigned ids stay retired.
    pub fn clear(&mut self) {
        self.instances.clear();
    }

    /// World anchors of all visible instances, for camera fitting.
    #[must_use]
    pub fn visible_anchors(&self) -> Vec<Vec3> {
        self.instances
            .iter()
            .filter(|i| i.visible)
            .map(|i| i.transform.anchor())
            .collect()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
