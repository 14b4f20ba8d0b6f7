//! Back-to-front ordering for translucent draw submission.
//!
//! A forward renderer with conventional alpha blending must draw
//! translucent geometry farthest-first so that each blend reads the
//! colors of everything behind it. This module ranks instances by
//! squared distance from the viewer (monotonic with true distance, no
//! square root) and sorts them descending with a stable sort, so
//! equidistant instances keep their submission order and identical
//! input produces identical output every frame.

use glam::Vec3;

use crate::error::{InvalidGeometry, LagoonError};

/// One translucent drawable queued for a single frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TranslucentInstance<P> {
    /// Representative world-space point used for distance ranking,
    /// typically the instance's origin or centroid.
    pub anchor: Vec3,
    /// Draw data carried through the sort untouched.
    pub payload: P,
}

impl<P> TranslucentInstance<P> {
    /// Pairs an anchor point with the draw payload it ranks.
    #[must_use]
    pub fn new(anchor: Vec3, payload: P) -> Self {
        Self { anchor, payload }
    }
}

/// Orders translucent instances back-to-front relative to `viewer` and
/// returns their payloads in submission order.
///
/// Instances farther from the viewer come first; equidistant instances
/// keep their input order. The output is always a permutation of the
/// input payloads.
///
/// # Errors
///
/// Returns [`LagoonError::InvalidGeometry`] if the viewer position or
/// any anchor has a NaN or infinite component. Validation runs before
/// any ordering work, so a failed call never yields a partial result.
pub fn back_to_front<P>(
    viewer: Vec3,
    instances: Vec<TranslucentInstance<P>>,
) -> Result<Vec<P>, LagoonError> {
    if !viewer.is_finite() {
        return Err(InvalidGeometry::Viewer.into());
    }

    let mut ranked = Vec::with_capacity(instances.len());
    for (index, instance) in instances.into_iter().enumerate() {
        if !instance.anchor.is_finite() {
            return Err(InvalidGeometry::Anchor { index }.into());
        }
        let key = viewer.distance_squared(instance.anchor);
        ranked.push((key, instance.payload));
    }

    // Stable sort keeps equal keys in input order. Keys are finite
    // here, so total_cmp agrees with the usual f32 ordering.
    ranked.sort_by(|a, b| b.0.total_cmp(&a.0));
    log::trace!("ordered {} translucent draws back-to-front", ranked.len());

    Ok(ranked.into_iter().map(|(_, payload)| payload).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inst(x: f32, y: f32, z: f32, payload: &str) -> TranslucentInstance<&str> {
        TranslucentInstance::new(Vec3::new(x, y, z), payload)
    }

    #[test]
    fn orders_farthest_first() {
        let ordered = back_to_front(
            Vec3::ZERO,
            vec![
                inst(0.0, 0.0, 10.0, "A"),
                inst(0.0, 0.0, 5.0, "B"),
                inst(0.0, 0.0, 20.0, "C"),
            ],
        )
        .unwrap();
        assert_eq!(ordered, vec!["C", "A", "B"]);
    }

    #[test]
    fn equidistant_instances_keep_input_order() {
        // Both anchors sit exactly 5 units from the origin.
        let ordered = back_to_front(
            Vec3::ZERO,
            vec![inst(3.0, 4.0, 0.0, "X"), inst(4.0, 3.0, 0.0, "Y")],
        )
        .unwrap();
        assert_eq!(ordered, vec!["X", "Y"]);
    }

    #[test]
    fn output_is_permutation_of_input() {
        let instances = vec![
            inst(1.0, 0.0, 0.0, "glass"),
            inst(0.0, 9.0, 0.0, "water"),
            inst(0.0, 9.0, 0.0, "water"),
            inst(-4.0, 2.0, 7.0, "smoke"),
        ];
        let mut ordered =
            back_to_front(Vec3::new(0.5, 0.5, 0.5), instances).unwrap();
        ordered.sort_unstable();
        assert_eq!(ordered, vec!["glass", "smoke", "water", "water"]);
    }

    #[test]
    fn distances_never_increase_along_output() {
        let viewer = Vec3::new(2.0, -1.0, 3.0);
        // Includes an anchor coincident with the viewer; it must come
        // last.
        let anchors = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(8.0, 1.0, -2.0),
            Vec3::new(2.0, -1.0, 3.0),
            Vec3::new(-6.0, 4.0, 9.0),
            Vec3::new(2.0, -1.0, 2.5),
        ];
        let instances = anchors
            .iter()
            .enumerate()
            .map(|(i, &anchor)| TranslucentInstance::new(anchor, i))
            .collect();
        let ordered = back_to_front(viewer, instances).unwrap();
        for pair in ordered.windows(2) {
            let earlier = viewer.distance_squared(anchors[pair[0]]);
            let later = viewer.distance_squared(anchors[pair[1]]);
            assert!(earlier >= later, "output order regressed: {pair:?}");
        }
        assert_eq!(*ordered.last().unwrap(), 2);
    }

    #[test]
    fn identical_input_gives_identical_output() {
        let instances = vec![
            inst(1.0, 1.0, 1.0, "a"),
            inst(-1.0, -1.0, -1.0, "b"),
            inst(1.0, -1.0, 1.0, "c"),
            inst(-1.0, 1.0, -1.0, "d"),
        ];
        let viewer = Vec3::new(0.25, 0.0, 0.0);
        let first = back_to_front(viewer, instances.clone()).unwrap();
        let second = back_to_front(viewer, instances).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let ordered =
            back_to_front::<&str>(Vec3::new(1.0, 2.0, 3.0), Vec::new())
                .unwrap();
        assert!(ordered.is_empty());
    }

    #[test]
    fn non_finite_anchor_reports_its_index() {
        let result = back_to_front(
            Vec3::ZERO,
            vec![
                inst(0.0, 0.0, 1.0, "ok"),
                inst(f32::NAN, 0.0, 0.0, "bad"),
                inst(0.0, 0.0, 2.0, "ok"),
            ],
        );
        match result {
            Err(LagoonError::InvalidGeometry(InvalidGeometry::Anchor {
                index,
            })) => assert_eq!(index, 1),
            other => panic!("expected anchor error, got {other:?}"),
        }
    }

    #[test]
    fn infinite_anchor_is_rejected() {
        let result = back_to_front(
            Vec3::ZERO,
            vec![inst(0.0, f32::INFINITY, 0.0, "bad")],
        );
        assert!(matches!(
            result,
            Err(LagoonError::InvalidGeometry(InvalidGeometry::Anchor {
                index: 0
            }))
        ));
    }

    #[test]
    fn non_finite_viewer_is_rejected() {
        let result = back_to_front(
            Vec3::new(0.0, f32::NAN, 0.0),
            vec![inst(0.0, 0.0, 1.0, "ok")],
        );
        assert!(matches!(
            result,
            Err(LagoonError::InvalidGeometry(InvalidGeometry::Viewer))
        ));
    }

    #[test]
    fn viewer_is_validated_even_without_instances() {
        let result = back_to_front::<u32>(
            Vec3::new(f32::INFINITY, 0.0, 0.0),
            Vec::new(),
        );
        assert!(matches!(
            result,
            Err(LagoonError::InvalidGeometry(InvalidGeometry::Viewer))
        ));
    }

    #[test]
    fn squared_distance_ranks_like_true_distance() {
        // 3-4-5 triangle: anchor at distance 5 must come after one at 6.
        let ordered = back_to_front(
            Vec3::ZERO,
            vec![inst(3.0, 4.0, 0.0, "near"), inst(6.0, 0.0, 0.0, "far")],
        )
        .unwrap();
        assert_eq!(ordered, vec!["far", "near"]);
    }
}
