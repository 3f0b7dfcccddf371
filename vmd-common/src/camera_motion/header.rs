//! Motion file header

use super::text::{
    CAMERA_MODEL_NAME, MODEL_NAME_SIZE, SIGNATURE_SIZE, VMD_SIGNATURE, decode_fixed_text,
    encode_ascii_fixed,
};

/// Size of each section count field (u32)
pub const SECTION_COUNT_SIZE: usize = 4;

/// Motion file header (50 bytes): signature and model name slots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VmdHeader {
    pub signature: [u8; SIGNATURE_SIZE],
    pub model_name: [u8; MODEL_NAME_SIZE],
}

impl Default for VmdHeader {
    fn default() -> Self {
        Self::camera()
    }
}

impl VmdHeader {
    pub const SIZE: usize = SIGNATURE_SIZE + MODEL_NAME_SIZE;

    /// Header of a camera/light motion
    pub fn camera() -> Self {
        Self {
            signature: encode_ascii_fixed(VMD_SIGNATURE),
            model_name: CAMERA_MODEL_NAME,
        }
    }

    /// Write header to bytes
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut bytes = [0u8; Self::SIZE];
        bytes[..SIGNATURE_SIZE].copy_from_slice(&self.signature);
        bytes[SIGNATURE_SIZE..].copy_from_slice(&self.model_name);
        bytes
    }

    /// Read header from bytes
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < Self::SIZE {
            return None;
        }
        let mut signature = [0u8; SIGNATURE_SIZE];
        signature.copy_from_slice(&bytes[..SIGNATURE_SIZE]);
        let mut model_name = [0u8; MODEL_NAME_SIZE];
        model_name.copy_from_slice(&bytes[SIGNATURE_SIZE..Self::SIZE]);
        Some(Self {
            signature,
            model_name,
        })
    }

    /// Signature text without its zero padding
    pub fn signature_text(&self) -> String {
        decode_fixed_text(&self.signature)
    }

    /// Validate header
    pub fn validate(&self) -> bool {
        self.signature_text() == VMD_SIGNATURE
    }

    /// Whether the model name marks a camera/light motion
    pub fn is_camera_motion(&self) -> bool {
        self.model_name == CAMERA_MODEL_NAME
    }
}
