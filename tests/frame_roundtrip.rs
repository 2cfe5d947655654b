//! Round-trip tests for every frame type.
//!
//! Each frame kind is serialized and re-parsed in both a minimal
//! configuration (no optional flags or sub-fields) and a maximal one
//! (padding, priority, debug data where the type allows them); the
//! parsed frame must equal the original on every field, flags included.

use bytes::Bytes;
use h2wire::codec::{FrameCodec, FrameReader};
use h2wire::error::ErrorCode;
use h2wire::frames::*;
use h2wire::settings::{Settings, SettingsBuilder};

fn round_trip(frame: Frame) {
    let encoded = frame.encode();
    let settings = Settings::default_settings();
    let decoded = FrameCodec::decode(&mut FrameReader::new(encoded), &settings)
        .unwrap_or_else(|err| panic!("decode failed for {frame}: {err}"));
    assert_eq!(decoded, frame);
}

#[test]
fn data_minimal() {
    round_trip(Frame::Data(DataFrame::new(
        1,
        Bytes::from_static(b"hello world"),
        false,
    )));
}

#[test]
fn data_maximal() {
    round_trip(Frame::Data(
        DataFrame::new(3, Bytes::from_static(b"body bytes"), true).with_padding(32),
    ));
}

#[test]
fn data_empty_payload() {
    round_trip(Frame::Data(DataFrame::new(5, Bytes::new(), true)));
}

#[test]
fn data_zero_length_padding() {
    // PADDED flag with zero filler is distinct from no padding at all
    round_trip(Frame::Data(
        DataFrame::new(5, Bytes::from_static(b"x"), false).with_padding(0),
    ));
}

#[test]
fn headers_minimal() {
    round_trip(Frame::Headers(HeadersFrame::new(
        1,
        Bytes::from_static(b"\x82\x87\x84"),
        false,
        true,
    )));
}

#[test]
fn headers_maximal() {
    round_trip(Frame::Headers(
        HeadersFrame::new(11, Bytes::from_static(b"\x82\x87\x84\x41\x0a"), true, false)
            .with_priority(PrioritySpec::new(9, true, 220))
            .with_padding(17),
    ));
}

#[test]
fn priority_round_trip() {
    round_trip(Frame::Priority(PriorityFrame::new(
        7,
        PrioritySpec::new(5, false, 16),
    )));
    round_trip(Frame::Priority(PriorityFrame::new(
        9,
        PrioritySpec::new(0, true, 256),
    )));
}

#[test]
fn rst_stream_round_trip() {
    round_trip(Frame::RstStream(RstStreamFrame::new(3, ErrorCode::Cancel)));
    // Undefined error codes must survive untouched
    round_trip(Frame::RstStream(RstStreamFrame::from_raw(3, 0xdead_beef)));
}

#[test]
fn settings_empty() {
    round_trip(Frame::Settings(SettingsFrame::new(Settings::new())));
}

#[test]
fn settings_all_parameters() {
    round_trip(Frame::Settings(SettingsFrame::new(
        SettingsBuilder::new()
            .header_table_size(8192)
            .enable_push(false)
            .max_concurrent_streams(128)
            .initial_window_size(1 << 20)
            .max_frame_size(65_536)
            .max_header_list_size(16_384)
            .build()
            .unwrap(),
    )));
}

#[test]
fn settings_ack() {
    round_trip(Frame::Settings(SettingsFrame::ack()));
}

#[test]
fn push_promise_minimal() {
    round_trip(Frame::PushPromise(PushPromiseFrame::new(
        1,
        2,
        Bytes::from_static(b"\x82\x84"),
        true,
    )));
}

#[test]
fn push_promise_maximal() {
    round_trip(Frame::PushPromise(
        PushPromiseFrame::new(3, 4, Bytes::from_static(b"\x82\x84\x86"), false)
            .with_padding(9),
    ));
}

#[test]
fn ping_round_trip() {
    round_trip(Frame::Ping(PingFrame::new([0xde, 0xad, 0xbe, 0xef, 1, 2, 3, 4])));
    round_trip(Frame::Ping(PingFrame::ack([0; 8])));
    round_trip(Frame::Ping(PingFrame::default()));
}

#[test]
fn goaway_minimal() {
    round_trip(Frame::Goaway(GoawayFrame::new(0, ErrorCode::NoError)));
}

#[test]
fn goaway_maximal() {
    round_trip(Frame::Goaway(
        GoawayFrame::new(101, ErrorCode::InternalError)
            .with_debug_data(Bytes::from_static(b"diagnostic details here")),
    ));
}

#[test]
fn window_update_round_trip() {
    round_trip(Frame::WindowUpdate(WindowUpdateFrame::new(0, 65_535)));
    round_trip(Frame::WindowUpdate(WindowUpdateFrame::new(13, 1)));
    round_trip(Frame::WindowUpdate(WindowUpdateFrame::new(13, 0x7FFF_FFFF)));
}

#[test]
fn continuation_round_trip() {
    round_trip(Frame::Continuation(ContinuationFrame::new(
        15,
        Bytes::from_static(b"\x41\x8c\xf1"),
        true,
    )));
}

#[test]
fn unknown_round_trip() {
    round_trip(Frame::Unknown(UnknownFrame::new(
        0xEE,
        FrameFlags::from_u8(0x5A),
        21,
        Bytes::from_static(b"future frame type payload"),
    )));
}

#[test]
fn headers_flag_byte_composition() {
    // END_STREAM (0x01) | END_HEADERS (0x04) and nothing else
    let frame = Frame::Headers(HeadersFrame::new(
        1,
        Bytes::from_static(b"\x82"),
        true,
        true,
    ));
    let encoded = frame.encode();
    assert_eq!(encoded[4], 0x05);
}

#[test]
fn priority_weight_wire_extremes() {
    let settings = Settings::default_settings();

    // wire weight 0x00 reads as logical weight 1
    let mut wire = vec![0x00, 0x00, 0x05, 0x02, 0x00, 0x00, 0x00, 0x00, 0x03];
    wire.extend_from_slice(&[0x00, 0x00, 0x00, 0x01, 0x00]);
    let frame = FrameCodec::decode(&mut FrameReader::new(Bytes::from(wire)), &settings).unwrap();
    match frame {
        Frame::Priority(priority) => assert_eq!(priority.priority.weight, 1),
        other => panic!("expected PRIORITY, got {other}"),
    }

    // wire weight 0xFF reads as logical weight 256
    let mut wire = vec![0x00, 0x00, 0x05, 0x02, 0x00, 0x00, 0x00, 0x00, 0x03];
    wire.extend_from_slice(&[0x00, 0x00, 0x00, 0x01, 0xFF]);
    let frame = FrameCodec::decode(&mut FrameReader::new(Bytes::from(wire)), &settings).unwrap();
    match frame {
        Frame::Priority(priority) => assert_eq!(priority.priority.weight, 256),
        other => panic!("expected PRIORITY, got {other}"),
    }
}

#[test]
fn data_hello_end_to_end() {
    // Build: DATA, stream 3, "hello", no padding, END_STREAM
    let frame = Frame::Data(DataFrame::new(3, Bytes::from_static(b"hello"), true));
    let encoded = frame.encode();

    assert_eq!(
        &encoded[..],
        &[
            0x00, 0x00, 0x05, // length 5
            0x00, // type DATA
            0x01, // END_STREAM
            0x00, 0x00, 0x00, 0x03, // stream 3
            b'h', b'e', b'l', b'l', b'o',
        ]
    );

    // Re-parse the 14 bytes and check every field
    let settings = Settings::default_settings();
    let decoded = FrameCodec::decode(&mut FrameReader::new(encoded), &settings).unwrap();
    match decoded {
        Frame::Data(data) => {
            assert_eq!(data.stream_id, 3);
            assert_eq!(data.data, Bytes::from_static(b"hello"));
            assert!(data.end_stream);
            assert_eq!(data.padding, None);
            assert_eq!(data.payload_len(), 5);
        }
        other => panic!("expected DATA, got {other}"),
    }
}

#[test]
fn multiple_frames_from_one_buffer() {
    let settings = Settings::default_settings();
    let mut wire = bytes::BytesMut::new();
    let first = Frame::Settings(SettingsFrame::ack());
    let second = Frame::Ping(PingFrame::new([9; 8]));
    let third = Frame::Data(DataFrame::new(1, Bytes::from_static(b"tail"), true));
    wire.extend_from_slice(&first.encode());
    wire.extend_from_slice(&second.encode());
    wire.extend_from_slice(&third.encode());

    let mut reader = FrameReader::new(wire.freeze());
    assert_eq!(FrameCodec::decode(&mut reader, &settings).unwrap(), first);
    assert_eq!(FrameCodec::decode(&mut reader, &settings).unwrap(), second);
    assert_eq!(FrameCodec::decode(&mut reader, &settings).unwrap(), third);
    assert_eq!(reader.remaining(), 0);
}
