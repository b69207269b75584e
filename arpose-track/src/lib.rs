//! # AR Pose Track
//!
//! Frame-to-frame filtering of the poses `arpose-core` converts.
//!
//! Vision pose estimates jitter: even with the camera and marker perfectly
//! still, `solvePnP`-style solvers return slightly different answers every
//! frame, and a rendered object glued to the raw estimate visibly shivers.
//! The filters here suppress that jitter with a deadband: changes below a
//! position/rotation threshold are rejected and the previous pose is held
//! exactly, while changes above it pass through unmodified. There is no
//! interpolation, so a real motion never lags behind the measurement.
//!
//! [`filter_pose`] and [`filter_poses`] are the pure filtering steps.
//! [`PoseTracker`] and [`MarkerTracker`] own the retained prior pose(s) for
//! callers that drive one update per rendering frame.
//!
//! Everything here is synchronous, allocation-light, and meant to be owned by
//! the host application's frame-update routine; when detection is
//! parallelized across markers, give each marker its own tracker rather than
//! sharing one.

mod filter;
mod tracker;

pub use arpose_core::{ConvertOptions, Pose};
pub use filter::*;
pub use tracker::*;
