//! Binary serialization trait for fixed-size records.
//!
//! The motion header and camera frame implement `BinarySerializable` so
//! generic code can treat them uniformly, while each type keeps its own
//! `to_bytes()` returning a fixed-size array.

/// Trait for fixed-size binary records.
///
/// Uses `Vec<u8>` for the return type because associated const generics in
/// return types (`[u8; Self::SIZE]`) are not yet stable in Rust.
///
/// # Example
///
/// ```
/// use vmd_common::{BinarySerializable, CameraFrame};
///
/// let frame = CameraFrame::default();
/// let bytes = frame.serialize();
/// let parsed = CameraFrame::deserialize(&bytes).unwrap();
/// assert_eq!(parsed, frame);
/// ```
pub trait BinarySerializable: Sized {
    /// Size of the serialized record in bytes.
    const SIZE: usize;

    /// Serialize to bytes.
    fn serialize(&self) -> Vec<u8>;

    /// Deserialize from bytes.
    ///
    /// Returns `None` if the byte slice is too short.
    fn deserialize(bytes: &[u8]) -> Option<Self>;
}

impl BinarySerializable for crate::VmdHeader {
    const SIZE: usize = Self::SIZE;

    fn serialize(&self) -> Vec<u8> {
        self.to_bytes().to_vec()
    }

    fn deserialize(bytes: &[u8]) -> Option<Self> {
        Self::from_bytes(bytes)
    }
}

impl BinarySerializable for crate::CameraFrame {
    const SIZE: usize = Self::SIZE;

    fn serialize(&self) -> Vec<u8> {
        self.to_bytes().to_vec()
    }

    fn deserialize(bytes: &[u8]) -> Option<Self> {
        Self::from_bytes(bytes)
    }
}
