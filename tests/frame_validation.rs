//! Validation tests: the per-type rules of RFC 7540 Sections 4-6 as
//! enforced by the read path, and the severity attached to each error.

use bytes::{BufMut, Bytes, BytesMut};
use h2wire::codec::{FrameCodec, FrameReader};
use h2wire::error::Error;
use h2wire::frames::{FrameFlags, FrameType};
use h2wire::settings::{Settings, SettingsBuilder};

fn decode(bytes: Bytes) -> Result<h2wire::frames::Frame, Error> {
    FrameCodec::decode(&mut FrameReader::new(bytes), &Settings::default_settings())
}

fn raw_frame(
    frame_type: FrameType,
    flags: u8,
    stream_id: u32,
    payload: &[u8],
) -> Bytes {
    let mut buf = BytesMut::new();
    buf.put_slice(&FrameCodec::encode_header(
        frame_type,
        FrameFlags::from_u8(flags),
        stream_id,
        payload.len(),
    ));
    buf.put_slice(payload);
    buf.freeze()
}

// ---- stream-id discipline: zero required ------------------------------

#[test]
fn settings_on_nonzero_stream_rejected() {
    let err = decode(raw_frame(FrameType::Settings, 0, 3, &[])).unwrap_err();
    assert!(matches!(err, Error::Protocol { .. }));
    assert!(err.is_connection_error());
}

#[test]
fn ping_on_nonzero_stream_rejected() {
    let err = decode(raw_frame(FrameType::Ping, 0, 3, &[0; 8])).unwrap_err();
    assert!(matches!(err, Error::Protocol { .. }));
}

#[test]
fn goaway_on_nonzero_stream_rejected() {
    let err = decode(raw_frame(FrameType::Goaway, 0, 3, &[0; 8])).unwrap_err();
    assert!(matches!(err, Error::Protocol { .. }));
}

// ---- stream-id discipline: non-zero required --------------------------

#[test]
fn data_on_stream_zero_rejected() {
    let err = decode(raw_frame(FrameType::Data, 0, 0, b"x")).unwrap_err();
    assert!(matches!(err, Error::Protocol { .. }));
}

#[test]
fn headers_on_stream_zero_rejected() {
    let err = decode(raw_frame(FrameType::Headers, 0x4, 0, b"\x82")).unwrap_err();
    assert!(matches!(err, Error::Protocol { .. }));
}

#[test]
fn priority_on_stream_zero_rejected() {
    let err = decode(raw_frame(FrameType::Priority, 0, 0, &[0, 0, 0, 1, 16])).unwrap_err();
    assert!(matches!(err, Error::Protocol { .. }));
}

#[test]
fn rst_stream_on_stream_zero_rejected() {
    let err = decode(raw_frame(FrameType::RstStream, 0, 0, &[0, 0, 0, 8])).unwrap_err();
    assert!(matches!(err, Error::Protocol { .. }));
}

#[test]
fn push_promise_on_stream_zero_rejected() {
    let err =
        decode(raw_frame(FrameType::PushPromise, 0x4, 0, &[0, 0, 0, 2, 0x82])).unwrap_err();
    assert!(matches!(err, Error::Protocol { .. }));
}

#[test]
fn continuation_on_stream_zero_rejected() {
    let err = decode(raw_frame(FrameType::Continuation, 0x4, 0, b"\x82")).unwrap_err();
    assert!(matches!(err, Error::Protocol { .. }));
}

// ---- fixed-length enforcement -----------------------------------------

#[test]
fn ping_wrong_length_is_frame_size_error() {
    for bad in [0usize, 7, 9, 16] {
        let err = decode(raw_frame(FrameType::Ping, 0, 0, &vec![0u8; bad])).unwrap_err();
        assert!(
            matches!(err, Error::FrameSize { .. }),
            "PING length {bad}: {err}"
        );
    }
}

#[test]
fn window_update_wrong_length_is_frame_size_error() {
    for bad in [0usize, 3, 5] {
        let err =
            decode(raw_frame(FrameType::WindowUpdate, 0, 1, &vec![0u8; bad])).unwrap_err();
        assert!(
            matches!(err, Error::FrameSize { .. }),
            "WINDOW_UPDATE length {bad}: {err}"
        );
    }
}

#[test]
fn rst_stream_wrong_length_is_frame_size_error() {
    let err = decode(raw_frame(FrameType::RstStream, 0, 1, &[0, 0, 0])).unwrap_err();
    assert!(matches!(err, Error::FrameSize { .. }));
    assert!(err.is_connection_error());
}

#[test]
fn priority_wrong_length_is_stream_level() {
    let err = decode(raw_frame(FrameType::Priority, 0, 1, &[0, 0, 0, 1])).unwrap_err();
    assert!(matches!(err, Error::FrameSize { .. }));
    assert!(!err.is_connection_error());
}

#[test]
fn goaway_too_short_rejected() {
    let err = decode(raw_frame(FrameType::Goaway, 0, 0, &[0, 0, 0, 0, 0])).unwrap_err();
    assert!(matches!(err, Error::FrameSize { .. }));
}

// ---- padding ----------------------------------------------------------

#[test]
fn data_padding_equal_to_payload_rejected() {
    // payload length 4: pad byte + "abc"; pad length claims 4 (== total)
    let err = decode(raw_frame(FrameType::Data, 0x8, 1, &[4, b'a', b'b', b'c'])).unwrap_err();
    assert!(matches!(err, Error::Protocol { .. }));
    assert!(err.is_connection_error());
}

#[test]
fn data_padding_consuming_all_content_allowed() {
    // pad length 3 leaves exactly zero content bytes: legal
    let frame = decode(raw_frame(FrameType::Data, 0x8, 1, &[3, 0, 0, 0])).unwrap();
    match frame {
        h2wire::frames::Frame::Data(data) => {
            assert_eq!(data.data.len(), 0);
            assert_eq!(data.padding, Some(3));
        }
        other => panic!("expected DATA, got {other}"),
    }
}

#[test]
fn headers_padding_overflowing_after_priority_rejected() {
    // length 7 = pad byte + 5 priority bytes + 1 content; pad claims 2
    let mut payload = vec![2u8];
    payload.extend_from_slice(&[0, 0, 0, 1, 16]);
    payload.push(0x82);
    let err = decode(raw_frame(FrameType::Headers, 0x8 | 0x20, 3, &payload)).unwrap_err();
    assert!(matches!(err, Error::Protocol { .. }));
}

#[test]
fn push_promise_padding_overflow_rejected() {
    // length 6 = pad byte + 4 promised-id bytes + 1 block byte; pad claims 9
    let err = decode(raw_frame(
        FrameType::PushPromise,
        0x8 | 0x4,
        1,
        &[9, 0, 0, 0, 2, 0x82],
    ))
    .unwrap_err();
    assert!(matches!(err, Error::Protocol { .. }));
}

// ---- SETTINGS ---------------------------------------------------------

#[test]
fn settings_ack_with_payload_rejected() {
    let err = decode(raw_frame(
        FrameType::Settings,
        0x1,
        0,
        &[0, 4, 0, 0, 0, 1],
    ))
    .unwrap_err();
    assert!(matches!(err, Error::FrameSize { .. }));
}

#[test]
fn settings_length_not_multiple_of_six_rejected() {
    let err = decode(raw_frame(FrameType::Settings, 0, 0, &[0, 4, 0, 0])).unwrap_err();
    assert!(matches!(err, Error::FrameSize { .. }));
}

#[test]
fn settings_enable_push_out_of_range_rejected() {
    let err = decode(raw_frame(
        FrameType::Settings,
        0,
        0,
        &[0, 2, 0, 0, 0, 2],
    ))
    .unwrap_err();
    assert!(matches!(err, Error::Protocol { .. }));
}

#[test]
fn settings_initial_window_overflow_is_flow_control_error() {
    let err = decode(raw_frame(
        FrameType::Settings,
        0,
        0,
        &[0, 4, 0x80, 0, 0, 0],
    ))
    .unwrap_err();
    assert!(matches!(err, Error::FlowControl { .. }));
}

#[test]
fn settings_max_frame_size_out_of_range_rejected() {
    // 1024 is below the 16384 floor
    let err = decode(raw_frame(
        FrameType::Settings,
        0,
        0,
        &[0, 5, 0, 0, 4, 0],
    ))
    .unwrap_err();
    assert!(matches!(err, Error::Protocol { .. }));
}

// ---- HEADERS ----------------------------------------------------------

#[test]
fn headers_empty_payload_is_compression_error() {
    let err = decode(raw_frame(FrameType::Headers, 0x4, 1, &[])).unwrap_err();
    assert!(matches!(err, Error::Compression { .. }));
    assert!(err.is_connection_error());
}

#[test]
fn headers_self_dependency_rejected() {
    // PRIORITY flag, stream 5 depending on stream 5
    let payload = [0, 0, 0, 5, 16, 0x82];
    let err = decode(raw_frame(FrameType::Headers, 0x20, 5, &payload)).unwrap_err();
    assert!(matches!(err, Error::Protocol { .. }));
    assert!(!err.is_connection_error());
}

// ---- WINDOW_UPDATE severity -------------------------------------------

#[test]
fn window_update_zero_increment_connection_level() {
    let err = decode(raw_frame(FrameType::WindowUpdate, 0, 0, &[0, 0, 0, 0])).unwrap_err();
    assert!(matches!(err, Error::Protocol { .. }));
    assert!(err.is_connection_error());
}

#[test]
fn window_update_zero_increment_stream_level() {
    let err = decode(raw_frame(FrameType::WindowUpdate, 0, 9, &[0, 0, 0, 0])).unwrap_err();
    assert!(matches!(err, Error::Protocol { .. }));
    assert!(!err.is_connection_error());
}

// ---- max frame size ---------------------------------------------------

#[test]
fn declared_length_above_negotiated_max_rejected() {
    let settings = SettingsBuilder::new().max_frame_size(16_384).build().unwrap();
    let mut buf = BytesMut::new();
    buf.put_slice(&FrameCodec::encode_header(
        FrameType::Data,
        FrameFlags::empty(),
        1,
        16_385,
    ));
    buf.put_bytes(0, 16_385);
    let err = FrameCodec::decode(&mut FrameReader::new(buf.freeze()), &settings).unwrap_err();
    assert!(matches!(err, Error::FrameSize { .. }));
}

#[test]
fn larger_negotiated_max_admits_larger_frames() {
    let settings = SettingsBuilder::new().max_frame_size(32_768).build().unwrap();
    let payload = vec![0u8; 20_000];
    let mut buf = BytesMut::new();
    buf.put_slice(&FrameCodec::encode_header(
        FrameType::Data,
        FrameFlags::empty(),
        1,
        payload.len(),
    ));
    buf.put_slice(&payload);
    assert!(FrameCodec::decode(&mut FrameReader::new(buf.freeze()), &settings).is_ok());
}

// ---- reserved bit -----------------------------------------------------

#[test]
fn reserved_stream_id_bit_ignored_on_read() {
    let mut buf = BytesMut::new();
    buf.put_slice(&FrameCodec::encode_header(
        FrameType::Data,
        FrameFlags::empty(),
        3,
        1,
    ));
    buf.put_u8(b'x');
    let mut wire = buf.freeze().to_vec();
    wire[5] |= 0x80; // set the R bit
    let frame = decode(Bytes::from(wire)).unwrap();
    assert_eq!(frame.stream_id(), 3);
}

#[test]
fn window_update_reserved_increment_bit_masked() {
    let frame = decode(raw_frame(
        FrameType::WindowUpdate,
        0,
        1,
        &[0x80, 0x00, 0x00, 0x07],
    ))
    .unwrap();
    match frame {
        h2wire::frames::Frame::WindowUpdate(update) => assert_eq!(update.size_increment, 7),
        other => panic!("expected WINDOW_UPDATE, got {other}"),
    }
}
