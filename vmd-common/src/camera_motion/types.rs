//! Camera keyframe record

/// Size of one encoded camera frame in bytes
pub const CAMERA_FRAME_SIZE: usize = 61;

/// Size of one bone frame in bytes (skipped when reading)
pub const BONE_FRAME_SIZE: usize = 111;

/// Size of one morph frame in bytes (skipped when reading)
pub const MORPH_FRAME_SIZE: usize = 23;

/// Number of interpolation control bytes per camera frame
pub const CURVE_LEN: usize = 24;

/// Start control point of the linear curve (0-127 scale)
pub const DEFAULT_CURVE_START: u8 = 20;

/// End control point of the linear curve (0-127 scale)
pub const DEFAULT_CURVE_END: u8 = 107;

/// Linear interpolation curve: 12 pairs of (20, 107)
pub fn create_default_camera_curve() -> [u8; CURVE_LEN] {
    let mut curve = [0u8; CURVE_LEN];
    for pair in curve.chunks_exact_mut(2) {
        pair[0] = DEFAULT_CURVE_START;
        pair[1] = DEFAULT_CURVE_END;
    }
    curve
}

/// One camera keyframe (61 bytes encoded)
///
/// Values are already in the target convention: left-handed, Y-X-Z Euler
/// angles in radians, view angle in whole degrees.
///
/// Note: Not packed - we use explicit byte serialization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraFrame {
    /// Frame index at 30 fps
    pub frame_time: u32,
    /// Signed distance from the target (negative = in front of it)
    pub distance: f32,
    /// Look-at position
    pub target: [f32; 3],
    /// Euler rotation [x, y, z] in radians
    pub rotation: [f32; 3],
    /// Interpolation control points
    pub curve: [u8; CURVE_LEN],
    /// Vertical field of view in degrees
    pub view_angle: u32,
    /// Orthographic projection instead of perspective
    pub orthographic: bool,
}

impl Default for CameraFrame {
    /// Frame 0 at the origin with the linear curve and a 30° view angle
    fn default() -> Self {
        Self {
            frame_time: 0,
            distance: 0.0,
            target: [0.0; 3],
            rotation: [0.0; 3],
            curve: create_default_camera_curve(),
            view_angle: 30,
            orthographic: false,
        }
    }
}

impl CameraFrame {
    pub const SIZE: usize = CAMERA_FRAME_SIZE;

    /// Write to raw bytes (61 bytes)
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut bytes = [0u8; Self::SIZE];
        bytes[0..4].copy_from_slice(&self.frame_time.to_le_bytes());
        bytes[4..8].copy_from_slice(&self.distance.to_le_bytes());
        for (i, v) in self.target.iter().enumerate() {
            bytes[8 + i * 4..12 + i * 4].copy_from_slice(&v.to_le_bytes());
        }
        for (i, v) in self.rotation.iter().enumerate() {
            bytes[20 + i * 4..24 + i * 4].copy_from_slice(&v.to_le_bytes());
        }
        bytes[32..56].copy_from_slice(&self.curve);
        bytes[56..60].copy_from_slice(&self.view_angle.to_le_bytes());
        bytes[60] = self.orthographic as u8;
        bytes
    }

    /// Read from raw bytes
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < Self::SIZE {
            return None;
        }
        let f32_at = |at: usize| {
            f32::from_le_bytes([bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]])
        };
        let mut curve = [0u8; CURVE_LEN];
        curve.copy_from_slice(&bytes[32..56]);
        Some(Self {
            frame_time: u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
            distance: f32_at(4),
            target: [f32_at(8), f32_at(12), f32_at(16)],
            rotation: [f32_at(20), f32_at(24), f32_at(28)],
            curve,
            view_angle: u32::from_le_bytes([bytes[56], bytes[57], bytes[58], bytes[59]]),
            orthographic: bytes[60] != 0,
        })
    }
}
