//! Tests for camera motion format

use super::*;

fn sample_frame() -> CameraFrame {
    CameraFrame {
        frame_time: 42,
        distance: -50.0,
        target: [1.0, 2.0, 3.0],
        rotation: [0.25, -0.5, 0.125],
        curve: create_default_camera_curve(),
        view_angle: 90,
        orthographic: false,
    }
}

// ========================================================================
// Text Slot Tests
// ========================================================================

#[test]
fn test_signature_slot_is_zero_padded() {
    let slot: [u8; SIGNATURE_SIZE] = encode_ascii_fixed(VMD_SIGNATURE);
    assert_eq!(&slot[..25], VMD_SIGNATURE.as_bytes());
    assert!(slot[25..].iter().all(|&b| b == 0));
}

#[test]
fn test_long_text_is_truncated() {
    let slot: [u8; 4] = encode_ascii_fixed("camera");
    assert_eq!(&slot, b"came");
}

#[test]
fn test_non_ascii_is_masked_to_seven_bits() {
    // U+00E9 & 0x7F = 0x69 ('i'), U+65E5 & 0x7F = 0x65 ('e')
    let slot: [u8; 4] = encode_ascii_fixed("é日");
    assert_eq!(slot, [0x69, 0x65, 0x00, 0x00]);
}

#[test]
fn test_decode_stops_at_nul() {
    assert_eq!(decode_fixed_text(b"abc\0def"), "abc");
    assert_eq!(decode_fixed_text(b"full"), "full");
}

#[test]
fn test_camera_model_name_bytes() {
    assert_eq!(
        &CAMERA_MODEL_NAME[..12],
        &[0x83, 0x4A, 0x83, 0x81, 0x83, 0x89, 0x81, 0x45, 0x8F, 0xC6, 0x96, 0xBE]
    );
    assert!(CAMERA_MODEL_NAME[12..].iter().all(|&b| b == 0));
}

// ========================================================================
// Header Tests
// ========================================================================

#[test]
fn test_header_layout() {
    let bytes = VmdHeader::camera().to_bytes();
    assert_eq!(bytes.len(), 50);
    assert_eq!(&bytes[..25], b"Vocaloid Motion Data 0002");
    assert_eq!(&bytes[30..50], &CAMERA_MODEL_NAME);
}

#[test]
fn test_header_validation() {
    let header = VmdHeader::camera();
    assert!(header.validate());
    assert!(header.is_camera_motion());

    let mut bad = header;
    bad.signature[0] = b'X';
    assert!(!bad.validate());
}

#[test]
fn test_header_from_short_bytes() {
    assert!(VmdHeader::from_bytes(&[0u8; 20]).is_none());
}

// ========================================================================
// Curve Tests
// ========================================================================

#[test]
fn test_default_curve_alternates() {
    let curve = create_default_camera_curve();
    assert_eq!(curve.len(), 24);
    for pair in curve.chunks_exact(2) {
        assert_eq!(pair, &[20, 107]);
    }
}

// ========================================================================
// Camera Frame Tests
// ========================================================================

#[test]
fn test_camera_frame_field_offsets() {
    let bytes = sample_frame().to_bytes();
    assert_eq!(bytes.len(), CAMERA_FRAME_SIZE);
    assert_eq!(&bytes[0..4], &42u32.to_le_bytes());
    assert_eq!(&bytes[4..8], &(-50.0f32).to_le_bytes());
    assert_eq!(&bytes[8..12], &1.0f32.to_le_bytes());
    assert_eq!(&bytes[16..20], &3.0f32.to_le_bytes());
    assert_eq!(&bytes[20..24], &0.25f32.to_le_bytes());
    assert_eq!(&bytes[28..32], &0.125f32.to_le_bytes());
    assert_eq!(bytes[32], 20);
    assert_eq!(bytes[33], 107);
    assert_eq!(bytes[55], 107);
    assert_eq!(&bytes[56..60], &90u32.to_le_bytes());
    assert_eq!(bytes[60], 0);
}

#[test]
fn test_orthographic_flag_byte() {
    let frame = CameraFrame {
        orthographic: true,
        ..sample_frame()
    };
    let bytes = frame.to_bytes();
    assert_eq!(bytes[60], 1);
    assert!(CameraFrame::from_bytes(&bytes).unwrap().orthographic);
}

#[test]
fn test_camera_frame_from_bytes() {
    let frame = sample_frame();
    let parsed = CameraFrame::from_bytes(&frame.to_bytes()).unwrap();
    assert_eq!(parsed, frame);
}

// ========================================================================
// File Encoding Tests
// ========================================================================

#[test]
fn test_file_size() {
    assert_eq!(camera_motion_size(0), 74);
    assert_eq!(camera_motion_size(1), 135);
    assert_eq!(camera_motion_size(3), 30 + 20 + 24 + 61 * 3);

    for n in [0usize, 1, 2, 7] {
        let frames = vec![sample_frame(); n];
        assert_eq!(encode_camera_frames(&frames).len(), camera_motion_size(n));
    }
}

#[test]
fn test_single_frame_file_layout() {
    let bytes = encode_camera_frames(&[CameraFrame::default()]);
    assert_eq!(bytes.len(), 135);
    // Bone and morph counts
    assert_eq!(&bytes[50..54], &[0, 0, 0, 0]);
    assert_eq!(&bytes[54..58], &[0, 0, 0, 0]);
    // Camera frame count
    assert_eq!(&bytes[58..62], &1u32.to_le_bytes());
    // Frame record follows directly
    assert_eq!(&bytes[62..123], &CameraFrame::default().to_bytes());
    // Light, self-shadow and IK counts
    assert!(bytes[123..135].iter().all(|&b| b == 0));
}

#[test]
fn test_frames_written_in_given_order() {
    let late = CameraFrame {
        frame_time: 60,
        ..sample_frame()
    };
    let early = CameraFrame {
        frame_time: 0,
        ..sample_frame()
    };
    let bytes = encode_camera_frames(&[late, early]);
    assert_eq!(&bytes[62..66], &60u32.to_le_bytes());
    assert_eq!(&bytes[123..127], &0u32.to_le_bytes());
}

#[test]
fn test_encoding_is_deterministic() {
    let frames = [sample_frame(), CameraFrame::default()];
    assert_eq!(encode_camera_frames(&frames), encode_camera_frames(&frames));
}

#[test]
fn test_write_camera_motion_matches_encode() {
    let frames = [sample_frame()];
    let mut out = Vec::new();
    write_camera_motion(&mut out, &frames).unwrap();
    assert_eq!(out, encode_camera_frames(&frames));
}

/// Records each `write` call so the streaming order can be checked
#[derive(Default)]
struct ChunkRecorder {
    chunks: Vec<usize>,
}

impl std::io::Write for ChunkRecorder {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.chunks.push(buf.len());
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_write_camera_motion_streams_records() {
    let mut recorder = ChunkRecorder::default();
    write_camera_motion(&mut recorder, &[sample_frame(), sample_frame()]).unwrap();
    assert_eq!(
        recorder.chunks,
        vec![
            VmdHeader::SIZE,
            SECTION_COUNT_SIZE,
            SECTION_COUNT_SIZE,
            SECTION_COUNT_SIZE,
            CAMERA_FRAME_SIZE,
            CAMERA_FRAME_SIZE,
            SECTION_COUNT_SIZE,
            SECTION_COUNT_SIZE,
            SECTION_COUNT_SIZE,
        ]
    );
}

#[test]
fn test_write_camera_motion_propagates_writer_error() {
    // Room for the header and section counts but not the frame
    let mut buffer = [0u8; 70];
    let mut cursor = std::io::Cursor::new(&mut buffer[..]);
    let err = write_camera_motion(&mut cursor, &[sample_frame()]).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::WriteZero);
    assert_eq!(&buffer[..30], &VmdHeader::camera().signature);
}

// ========================================================================
// Decoding Tests
// ========================================================================

#[test]
fn test_decode_recovers_signature_and_count() {
    let frames = vec![sample_frame(); 4];
    let motion = CameraMotion::from_bytes(&encode_camera_frames(&frames)).unwrap();
    assert_eq!(motion.header.signature_text(), VMD_SIGNATURE);
    assert!(motion.header.is_camera_motion());
    assert_eq!(motion.frames.len(), 4);
    assert_eq!(motion.frames[0], sample_frame());
}

#[test]
fn test_decode_skips_bone_and_morph_sections() {
    let mut bytes = VmdHeader::camera().to_bytes().to_vec();
    bytes.extend_from_slice(&1u32.to_le_bytes());
    bytes.extend_from_slice(&[0xAA; BONE_FRAME_SIZE]);
    bytes.extend_from_slice(&2u32.to_le_bytes());
    bytes.extend_from_slice(&[0xBB; MORPH_FRAME_SIZE * 2]);
    bytes.extend_from_slice(&1u32.to_le_bytes());
    bytes.extend_from_slice(&sample_frame().to_bytes());

    let motion = CameraMotion::from_bytes(&bytes).unwrap();
    assert_eq!(motion.frames, vec![sample_frame()]);
}

#[test]
fn test_decode_truncated_file() {
    let bytes = encode_camera_frames(&[sample_frame(), sample_frame()]);
    // Cut inside the second frame
    assert!(CameraMotion::from_bytes(&bytes[..100]).is_none());
    // Cut inside the section counts
    assert!(CameraMotion::from_bytes(&bytes[..56]).is_none());
}
