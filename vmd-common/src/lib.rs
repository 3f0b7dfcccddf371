//! VMD camera motion format
//!
//! Binary layout of the motion files read by MikuMikuDance-compatible
//! animation tools, restricted to what a camera-only motion needs:
//!
//! - [`camera_motion`] - header, 61-byte camera keyframe, text slots, writer
//! - [`serialization`] - common trait for fixed-size records

pub mod camera_motion;
mod serialization;

pub use camera_motion::*;
pub use serialization::BinarySerializable;
