//! Per-frame draw list assembly.

use glam::{Mat4, Vec3};

use super::{Blend, MeshId, Scene};
use crate::error::LagoonError;
use crate::transparency::{self, TranslucentInstance};

/// One mesh submission with its resolved model matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawCall {
    /// Mesh to draw.
    pub mesh: MeshId,
    /// World transform of this instance.
    pub model: Mat4,
}

/// Draw lists for one frame, ready for submission.
///
/// Render `opaque` first with depth writes on, then `translucent` in
/// the given order with blending on.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FrameDraws {
    /// Depth-tested draws in scene insertion order.
    pub opaque: Vec<DrawCall>,
    /// Alpha-blended draws, farthest from the viewer first.
    pub translucent: Vec<DrawCall>,
}

impl FrameDraws {
    /// Total number of draws across both lists.
    #[must_use]
    pub fn len(&self) -> usize {
        self.opaque.len() + self.translucent.len()
    }

    /// Whether the frame draws nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.opaque.is_empty() && self.translucent.is_empty()
    }
}

impl Scene {
    /// Assembles this frame's draw lists for a viewer at `viewer`.
    ///
    /// Hidden instances are skipped. Opaque draws keep insertion
    /// order; translucent draws come back sorted back-to-front by
    /// their transform anchors.
    ///
    /// # Errors
    ///
    /// Returns [`LagoonError::InvalidGeometry`] if the viewer position
    /// or any visible translucent anchor is NaN or infinite. The
    /// reported anchor index counts visible translucent instances in
    /// insertion order.
    pub fn frame_draws(&self, viewer: Vec3) -> Result<FrameDraws, LagoonError> {
        let mut opaque = Vec::new();
        let mut translucent = Vec::new();
        for instance in self.instances().iter().filter(|i| i.visible) {
            let call = DrawCall {
                mesh: instance.mesh,
                model: instance.transform.matrix(),
            };
            match instance.blend {
                Blend::Opaque => opaque.push(call),
                Blend::Translucent => translucent.push(
                    TranslucentInstance::new(instance.transform.anchor(), call),
                ),
            }
        }
        let translucent = transparency::back_to_front(viewer, translucent)?;
        Ok(FrameDraws {
            opaque,
            translucent,
        })
    }
}

#[cfg(test)]
mod tests {
    use glam::Quat;

    use super::*;
    use crate::error::InvalidGeometry;
    use crate::scene::{MeshRegistry, Transform};

    fn at(x: f32, y: f32, z: f32) -> Transform {
        Transform::from_translation(Vec3::new(x, y, z))
    }

    #[test]
    fn opaque_draws_keep_insertion_order() {
        let mut registry = MeshRegistry::new();
        let cube = registry.intern("cube");
        let floor = registry.intern("floor");
        let mut scene = Scene::new();
        let _ = scene.add(cube, at(0.0, 0.0, -30.0), Blend::Opaque);
        let _ = scene.add(floor, at(0.0, 0.0, -1.0), Blend::Opaque);
        let _ = scene.add(cube, at(0.0, 0.0, -90.0), Blend::Opaque);

        let draws = scene.frame_draws(Vec3::ZERO).unwrap();
        assert!(draws.translucent.is_empty());
        let meshes: Vec<MeshId> =
            draws.opaque.iter().map(|d| d.mesh).collect();
        assert_eq!(meshes, vec![cube, floor, cube]);
    }

    #[test]
    fn translucent_draws_come_back_farthest_first() {
        let mut registry = MeshRegistry::new();
        let window = registry.intern("window");
        let mut scene = Scene::new();
        let _ = scene.add(window, at(0.0, 0.0, 10.0), Blend::Translucent);
        let _ = scene.add(window, at(0.0, 0.0, 5.0), Blend::Translucent);
        let _ = scene.add(window, at(0.0, 0.0, 20.0), Blend::Translucent);

        let draws = scene.frame_draws(Vec3::ZERO).unwrap();
        let depths: Vec<f32> = draws
            .translucent
            .iter()
            .map(|d| d.model.w_axis.z)
            .collect();
        assert_eq!(depths, vec![20.0, 10.0, 5.0]);
    }

    #[test]
    fn hidden_instances_never_reach_the_draw_lists() {
        let mut registry = MeshRegistry::new();
        let window = registry.intern("window");
        let mut scene = Scene::new();
        let near = scene.add(window, at(0.0, 0.0, 1.0), Blend::Translucent);
        let _ = scene.add(window, at(0.0, 0.0, 2.0), Blend::Opaque);
        scene.set_visible(near, false);

        let draws = scene.frame_draws(Vec3::ZERO).unwrap();
        assert!(draws.translucent.is_empty());
        assert_eq!(draws.opaque.len(), 1);
        assert_eq!(draws.len(), 1);
        assert!(!draws.is_empty());
    }

    #[test]
    fn rotation_and_scale_do_not_move_the_sort_anchor() {
        let mut registry = MeshRegistry::new();
        let window = registry.intern("window");
        let mut scene = Scene::new();
        let spun = at(0.0, 0.0, 8.0)
            .with_rotation(Quat::from_rotation_y(2.4))
            .with_uniform_scale(20.0);
        let _ = scene.add(window, spun, Blend::Translucent);
        let _ = scene.add(window, at(0.0, 0.0, 9.0), Blend::Translucent);

        let draws = scene.frame_draws(Vec3::ZERO).unwrap();
        // The scaled instance is huge, but its anchor is nearer.
        assert!((draws.translucent[0].model.w_axis.z - 9.0).abs() < 1e-6);
    }

    #[test]
    fn bad_translucent_anchor_reports_its_visible_index() {
        let mut registry = MeshRegistry::new();
        let window = registry.intern("window");
        let mut scene = Scene::new();
        let _ = scene.add(window, at(0.0, 0.0, 1.0), Blend::Opaque);
        let hidden = scene.add(window, at(0.0, 0.0, 2.0), Blend::Translucent);
        let _ = scene.add(window, at(0.0, 0.0, 3.0), Blend::Translucent);
        let _ = scene.add(window, at(f32::NAN, 0.0, 4.0), Blend::Translucent);
        scene.set_visible(hidden, false);

        // The NaN instance is the second *visible* translucent one.
        let result = scene.frame_draws(Vec3::ZERO);
        assert!(matches!(
            result,
            Err(LagoonError::InvalidGeometry(InvalidGeometry::Anchor {
                index: 1
            }))
        ));
    }

    #[test]
    fn empty_scene_yields_empty_draws() {
        let scene = Scene::new();
        let draws = scene.frame_draws(Vec3::new(3.0, 2.0, 1.0)).unwrap();
        assert!(draws.is_empty());
        assert_eq!(draws.len(), 0);
    }
}
