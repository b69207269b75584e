//! # AR Pose Core
//!
//! This library converts marker and camera poses estimated by a computer vision
//! pipeline into transforms usable by a rendering engine.
//!
//! Vision pose solvers (PnP, marker boards) report a pose as a Rodrigues rotation
//! vector and a translation vector in a right-handed coordinate convention.
//! Rendering engines typically consume a 4×4 homogeneous transform in a
//! left-handed convention. The types here cover the full path between the two:
//!
//! * [`RotationVector`] — the Rodrigues axis-angle form and its exponential map.
//! * [`Pose`] — a position/orientation pair in the vision convention.
//! * [`Pose::to_matrix`] with [`ConvertOptions`] — the handedness-aware
//!   conversion to a rendering transform.
//! * [`decompose`] — extraction of translation, rotation, and scale back out of
//!   an arbitrary affine transform.
//! * [`projection_from_intrinsics`] — an off-center projection matrix built
//!   from pinhole calibration intrinsics, so a virtual camera can match the
//!   physical one.
//!
//! The crate is designed to work with `#![no_std]`, even without an allocator.
//! `libm` is used (indirectly through [`num-traits`]) for all math algorithms
//! that aren't present in `std`. Per-frame filtering of these poses lives in
//! the `arpose-track` crate, which retains state across frames.

#![no_std]

mod pose;
mod projection;
mod transform;

pub use nalgebra;
pub use pose::*;
pub use projection::*;
pub use transform::*;
