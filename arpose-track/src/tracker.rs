use crate::{filter_pose, filter_poses};
use arpose_core::Pose;
use log::debug;
use std::collections::HashMap;
use std::hash::Hash;

/// Retains the previous accepted pose of a single tracked entity (a camera,
/// or the one marker an application follows) and filters each new estimate
/// against it.
///
/// The tracker is owned by the caller's frame-update routine. The first
/// update after construction or [`reset`](Self::reset) has no prior and
/// passes through unfiltered.
#[derive(Debug, Clone)]
pub struct PoseTracker {
    pos_threshold: f64,
    rot_threshold: f64,
    enabled: bool,
    prior: Option<Pose>,
}

impl PoseTracker {
    /// Creates a tracker with the given deadband thresholds: `pos_threshold`
    /// in the position's linear unit, `rot_threshold` in degrees.
    pub fn new(pos_threshold: f64, rot_threshold: f64) -> Self {
        Self {
            pos_threshold,
            rot_threshold,
            enabled: true,
            prior: None,
        }
    }

    /// Turns the deadband stage on or off. While disabled, updates pass
    /// through but still replace the retained prior, so re-enabling filters
    /// against the latest pose rather than a stale one.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Filters `new` against the retained prior, retains the accepted pose
    /// as the next prior, and returns it.
    pub fn update(&mut self, new: Pose) -> Pose {
        let accepted = match self.prior {
            Some(ref prior) if self.enabled => {
                filter_pose(prior, &new, self.pos_threshold, self.rot_threshold)
            }
            _ => new,
        };
        self.prior = Some(accepted);
        accepted
    }

    /// Drops the retained prior. The next update passes through unfiltered,
    /// which is the right thing when tracking is lost and reacquired.
    pub fn reset(&mut self) {
        debug!("pose tracker reset");
        self.prior = None;
    }
}

/// Retains the previous accepted pose per marker identity and filters each
/// frame's detections against them.
///
/// Markers absent from an update are dropped from the retained map, so a
/// marker that leaves the frame and returns is treated as newly appeared and
/// passes through unfiltered on its first detection back.
#[derive(Debug, Clone)]
pub struct MarkerTracker<K> {
    pos_threshold: f64,
    rot_threshold: f64,
    enabled: bool,
    priors: HashMap<K, Pose>,
}

impl<K> MarkerTracker<K>
where
    K: Eq + Hash + Clone,
{
    /// Creates a tracker with the given deadband thresholds: `pos_threshold`
    /// in the position's linear unit, `rot_threshold` in degrees.
    pub fn new(pos_threshold: f64, rot_threshold: f64) -> Self {
        Self {
            pos_threshold,
            rot_threshold,
            enabled: true,
            priors: HashMap::new(),
        }
    }

    /// Turns the deadband stage on or off. While disabled, updates pass
    /// through but still replace the retained priors.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Filters this frame's detections against the retained priors, retains
    /// the accepted poses as the next priors, and returns them.
    pub fn update(&mut self, new: HashMap<K, Pose>) -> HashMap<K, Pose> {
        let accepted = if self.enabled {
            filter_poses(&self.priors, new, self.pos_threshold, self.rot_threshold)
        } else {
            new
        };
        self.priors = accepted.clone();
        accepted
    }

    /// Drops all retained priors, e.g. when detection restarts.
    pub fn reset(&mut self) {
        debug!("marker tracker reset, dropping {} priors", self.priors.len());
        self.priors.clear();
    }
}
