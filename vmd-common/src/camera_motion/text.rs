//! Fixed-width text slots

/// Size of the signature slot in bytes
pub const SIGNATURE_SIZE: usize = 30;

/// Size of the model name slot in bytes
pub const MODEL_NAME_SIZE: usize = 20;

/// Signature identifying the second-generation motion format
pub const VMD_SIGNATURE: &str = "Vocaloid Motion Data 0002";

/// "カメラ・照明" (camera/light) in Shift_JIS, zero-padded to the slot size.
///
/// Readers treat a motion carrying this model name as a camera motion.
pub const CAMERA_MODEL_NAME: [u8; MODEL_NAME_SIZE] = [
    0x83, 0x4A, // カ
    0x83, 0x81, // メ
    0x83, 0x89, // ラ
    0x81, 0x45, // ・
    0x8F, 0xC6, // 照
    0x96, 0xBE, // 明
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// Encode text into an `N`-byte ASCII slot.
///
/// Each UTF-16 code unit is masked to its low 7 bits, so non-ASCII input is
/// silently mangled rather than rejected. Text shorter than the slot is
/// zero-padded; longer text is truncated.
pub fn encode_ascii_fixed<const N: usize>(text: &str) -> [u8; N] {
    let mut bytes = [0u8; N];
    for (slot, unit) in bytes.iter_mut().zip(text.encode_utf16()) {
        *slot = (unit & 0x7F) as u8;
    }
    bytes
}

/// Decode a zero-padded text slot up to the first NUL byte.
///
/// Bytes outside ASCII are replaced, which is enough to read back signatures.
pub fn decode_fixed_text(bytes: &[u8]) -> String {
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..end]).into_owned()
}
