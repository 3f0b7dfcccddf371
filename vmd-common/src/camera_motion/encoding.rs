//! Whole-file encoding and decoding

use std::io::{self, Write};

use crate::serialization::BinarySerializable;

use super::header::{SECTION_COUNT_SIZE, VmdHeader};
use super::types::{BONE_FRAME_SIZE, CAMERA_FRAME_SIZE, CameraFrame, MORPH_FRAME_SIZE};

/// Number of u32 section counts in a camera motion file
/// (bone, morph, camera, light, shadow, IK)
const SECTION_COUNTS: usize = 6;

/// Size of a camera motion file holding `frame_count` camera frames
pub fn camera_motion_size(frame_count: usize) -> usize {
    VmdHeader::SIZE + SECTION_COUNTS * SECTION_COUNT_SIZE + frame_count * CAMERA_FRAME_SIZE
}

/// Write a complete camera motion file.
///
/// The header, section counts and frame records are streamed to `w` in file
/// order. Frames are written in the order given; no sorting by frame time
/// happens here. Every section other than the camera section is written empty.
pub fn write_camera_motion<W: Write>(w: &mut W, frames: &[CameraFrame]) -> io::Result<()> {
    w.write_all(&VmdHeader::camera().to_bytes())?;
    w.write_all(&0u32.to_le_bytes())?; // bone frames
    w.write_all(&0u32.to_le_bytes())?; // morph frames

    w.write_all(&(frames.len() as u32).to_le_bytes())?;
    for frame in frames {
        w.write_all(&frame.to_bytes())?;
    }

    w.write_all(&0u32.to_le_bytes())?; // light frames
    w.write_all(&0u32.to_le_bytes())?; // self-shadow frames
    w.write_all(&0u32.to_le_bytes())?; // IK frames
    Ok(())
}

/// Encode camera frames into a complete motion file held in memory
pub fn encode_camera_frames(frames: &[CameraFrame]) -> Vec<u8> {
    let mut out = Vec::with_capacity(camera_motion_size(frames.len()));
    // Writing into a Vec<u8> never fails
    let _ = write_camera_motion(&mut out, frames);
    out
}

/// Camera section of a decoded motion file
#[derive(Debug, Clone, PartialEq)]
pub struct CameraMotion {
    pub header: VmdHeader,
    pub frames: Vec<CameraFrame>,
}

impl CameraMotion {
    /// Parse the header and camera frames of a motion file.
    ///
    /// Bone and morph sections are skipped. The light, self-shadow and IK
    /// sections after the camera frames are not read, as older files omit
    /// them. Returns `None` if the data ends inside a section.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        let header = VmdHeader::from_bytes(bytes)?;
        let mut offset = VmdHeader::SIZE;

        let bone_count = read_count(bytes, &mut offset)?;
        offset = offset.checked_add(bone_count.checked_mul(BONE_FRAME_SIZE)?)?;

        let morph_count = read_count(bytes, &mut offset)?;
        offset = offset.checked_add(morph_count.checked_mul(MORPH_FRAME_SIZE)?)?;

        let camera_count = read_count(bytes, &mut offset)?;
        let end = offset.checked_add(camera_count.checked_mul(CAMERA_FRAME_SIZE)?)?;
        let frames = read_records(bytes.get(offset..end)?)?;

        Some(Self { header, frames })
    }
}

/// Parse a section made only of fixed-size records
fn read_records<R: BinarySerializable>(section: &[u8]) -> Option<Vec<R>> {
    section.chunks_exact(R::SIZE).map(R::deserialize).collect()
}

fn read_count(bytes: &[u8], offset: &mut usize) -> Option<usize> {
    let field = bytes.get(*offset..*offset + SECTION_COUNT_SIZE)?;
    *offset += SECTION_COUNT_SIZE;
    Some(u32::from_le_bytes([field[0], field[1], field[2], field[3]]) as usize)
}
