use arpose_core::Pose;
use log::trace;
use std::collections::HashMap;
use std::hash::Hash;

/// Applies a deadband filter to one tracked pose.
///
/// The squared distance between the old and new positions is compared against
/// `pos_threshold` (linear units, squared internally) and the shortest-arc
/// angle between the old and new rotations against `rot_threshold` (degrees).
/// A component whose change stays below its threshold is held at the old
/// value exactly; a component whose change exceeds it takes the new
/// measurement unmodified. Position and rotation are filtered independently,
/// so one may update while the other is held.
pub fn filter_pose(old: &Pose, new: &Pose, pos_threshold: f64, rot_threshold: f64) -> Pose {
    let mut filtered = *new;
    let pos_change2 = (new.position - old.position).norm_squared();
    if pos_change2 < pos_threshold * pos_threshold {
        trace!(
            "holding position, squared change {} under threshold",
            pos_change2
        );
        filtered.position = old.position;
    }
    let rot_change = old.rotation.angle_to(&new.rotation).to_degrees();
    if rot_change < rot_threshold {
        trace!("holding rotation, change of {} degrees under threshold", rot_change);
        filtered.rotation = old.rotation;
    }
    filtered
}

/// Applies [`filter_pose`] across a keyed collection of tracked poses, one
/// entry per detected marker.
///
/// Keys present in both maps are filtered pairwise against their prior. Keys
/// present only in `new` (markers that just appeared) pass through
/// unfiltered, since there is no prior to compare against. Keys present only
/// in `old` (markers that disappeared) are dropped. No iteration order is
/// guaranteed between entries.
pub fn filter_poses<K>(
    old: &HashMap<K, Pose>,
    mut new: HashMap<K, Pose>,
    pos_threshold: f64,
    rot_threshold: f64,
) -> HashMap<K, Pose>
where
    K: Eq + Hash,
{
    for (key, pose) in new.iter_mut() {
        if let Some(prior) = old.get(key) {
            *pose = filter_pose(prior, pose, pos_threshold, rot_threshold);
        }
    }
    new
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{UnitQuaternion, Vector3};

    fn pose_at(x: f64) -> Pose {
        Pose::new(Vector3::new(x, 0.0, 0.0), UnitQuaternion::identity())
    }

    fn pose_yawed(degrees: f64) -> Pose {
        Pose::new(
            Vector3::zeros(),
            UnitQuaternion::from_axis_angle(&Vector3::y_axis(), degrees.to_radians()),
        )
    }

    #[test]
    fn position_under_threshold_is_held_exactly() {
        let filtered = filter_pose(&pose_at(0.0), &pose_at(0.001), 0.01, 2.0);
        assert_eq!(filtered.position, Vector3::zeros());
    }

    #[test]
    fn position_over_threshold_passes_through_exactly() {
        let filtered = filter_pose(&pose_at(0.0), &pose_at(0.02), 0.01, 2.0);
        assert_eq!(filtered.position, Vector3::new(0.02, 0.0, 0.0));
    }

    #[test]
    fn rotation_under_threshold_is_held_exactly() {
        let filtered = filter_pose(&pose_yawed(0.0), &pose_yawed(1.0), 0.01, 2.0);
        assert_eq!(filtered.rotation, UnitQuaternion::identity());
    }

    #[test]
    fn rotation_over_threshold_passes_through_exactly() {
        let new = pose_yawed(5.0);
        let filtered = filter_pose(&pose_yawed(0.0), &new, 0.01, 2.0);
        assert_eq!(filtered.rotation, new.rotation);
    }

    #[test]
    fn position_and_rotation_filter_independently() {
        // Position moves past its threshold while rotation stays inside its own.
        let old = pose_at(0.0);
        let new = Pose::new(
            Vector3::new(0.05, 0.0, 0.0),
            pose_yawed(1.0).rotation,
        );
        let filtered = filter_pose(&old, &new, 0.01, 2.0);
        assert_eq!(filtered.position, new.position);
        assert_eq!(filtered.rotation, old.rotation);

        // And the other way around.
        let new = Pose::new(Vector3::new(0.001, 0.0, 0.0), pose_yawed(10.0).rotation);
        let filtered = filter_pose(&old, &new, 0.01, 2.0);
        assert_eq!(filtered.position, old.position);
        assert_eq!(filtered.rotation, new.rotation);
    }

    #[test]
    fn keyed_filter_follows_key_presence() {
        let mut old = HashMap::new();
        old.insert("a", pose_at(0.0));
        old.insert("c", pose_at(9.0));
        let mut new = HashMap::new();
        new.insert("a", pose_at(0.001));
        new.insert("b", pose_at(5.0));

        let filtered = filter_poses(&old, new, 0.01, 2.0);
        // Common key filtered against its prior.
        assert_eq!(filtered["a"].position, Vector3::zeros());
        // Newly appeared key passes through with no prior.
        assert_eq!(filtered["b"].position, Vector3::new(5.0, 0.0, 0.0));
        // Disappeared key is not carried forward.
        assert!(!filtered.contains_key("c"));
        assert_eq!(filtered.len(), 2);
    }
}
