//! VMD camera motion binary format (.vmd)
//!
//! Camera-only motion file. All integers and floats are little-endian.
//!
//! # Layout
//! ```text
//! 0x00: signature [u8; 30]       - "Vocaloid Motion Data 0002", zero-padded
//! 0x1E: model_name [u8; 20]      - Shift_JIS "カメラ・照明", zero-padded
//! 0x32: bone_frame_count u32     - always 0
//! 0x36: morph_frame_count u32    - always 0
//! 0x3A: camera_frame_count u32   - N
//! 0x3E: camera frames            - N × 61 bytes
//!       light_frame_count u32    - always 0
//!       shadow_frame_count u32   - always 0
//!       ik_frame_count u32       - always 0
//! ```
//!
//! Camera frame (61 bytes):
//! ```text
//! 0x00: frame_time u32           - frame index at 30 fps
//! 0x04: distance f32             - negative when looking toward the target
//! 0x08: target [f32; 3]          - look-at position
//! 0x14: rotation [f32; 3]        - radians, x/y/z (Y-X-Z order, left-handed)
//! 0x20: curve [u8; 24]           - interpolation control points, 12 (start, end) pairs
//! 0x38: view_angle u32           - degrees
//! 0x3C: orthographic u8          - 0 = perspective, 1 = orthographic
//! ```

mod encoding;
mod header;
mod text;
mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use encoding::{CameraMotion, camera_motion_size, encode_camera_frames, write_camera_motion};
pub use header::{SECTION_COUNT_SIZE, VmdHeader};
pub use text::{
    CAMERA_MODEL_NAME, MODEL_NAME_SIZE, SIGNATURE_SIZE, VMD_SIGNATURE, decode_fixed_text,
    encode_ascii_fixed,
};
pub use types::{
    BONE_FRAME_SIZE, CAMERA_FRAME_SIZE, CURVE_LEN, CameraFrame, DEFAULT_CURVE_END,
    DEFAULT_CURVE_START, MORPH_FRAME_SIZE, create_default_camera_curve,
};
