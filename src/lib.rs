//! h2wire - HTTP/2 frame-layer codec
//!
//! Bit-exact encoding and decoding of the HTTP/2 frame types defined in
//! RFC 7540 Section 6, with the per-type validation rules of Sections 4
//! through 6 enforced on the read path, plus the HPACK write-path
//! primitives (prefix integers, static-table lookup, Huffman string
//! transform, field-representation builder) from RFC 7541.
//!
//! The codec's job stops at turning byte sequences into well-formed
//! [`Frame`] values and back. Flow-control accounting, stream state
//! machines, dynamic-table header compression and connection
//! multiplexing belong to the caller.
//!
//! # Reading frames
//!
//! ```
//! use h2wire::codec::{FrameCodec, FrameReader};
//! use h2wire::frames::Frame;
//! use h2wire::settings::Settings;
//! use bytes::Bytes;
//!
//! let wire = Bytes::from_static(&[
//!     0x00, 0x00, 0x05, 0x00, 0x01, 0x00, 0x00, 0x00, 0x03, // header
//!     b'h', b'e', b'l', b'l', b'o',
//! ]);
//! let settings = Settings::default_settings();
//! let frame = FrameCodec::decode(&mut FrameReader::new(wire), &settings).unwrap();
//! match frame {
//!     Frame::Data(data) => {
//!         assert_eq!(data.stream_id, 3);
//!         assert!(data.end_stream);
//!         assert_eq!(&data.data[..], b"hello");
//!     }
//!     other => panic!("unexpected frame: {other}"),
//! }
//! ```
//!
//! # Writing frames
//!
//! ```
//! use h2wire::frames::{DataFrame, Frame};
//! use bytes::Bytes;
//!
//! let frame = Frame::Data(DataFrame::new(3, Bytes::from_static(b"hello"), true));
//! let wire = frame.encode();
//! assert_eq!(&wire[..9], &[0x00, 0x00, 0x05, 0x00, 0x01, 0x00, 0x00, 0x00, 0x03]);
//! ```

pub mod codec;
pub mod error;
pub mod frames;
pub mod hpack;
pub mod settings;

pub use codec::{FrameCodec, FrameHeader, FrameReader, FRAME_HEADER_SIZE, MAX_FRAME_PAYLOAD};
pub use error::{Error, ErrorCode, Result};
pub use frames::{Frame, FrameFlags, FrameType};
pub use settings::{Settings, SettingsBuilder, SettingsParameter};

/// Default maximum frame payload size (16384 bytes) before SETTINGS
/// negotiation.
pub const DEFAULT_MAX_FRAME_SIZE: u32 = 16_384;

/// Default initial flow-control window size (65535 bytes).
pub const DEFAULT_INITIAL_WINDOW_SIZE: u32 = 65_535;

/// Default HPACK header table size (4096 bytes).
pub const DEFAULT_HEADER_TABLE_SIZE: u32 = 4_096;

/// Largest stream identifier (2^31 - 1).
pub const MAX_STREAM_ID: u32 = 0x7FFF_FFFF;

/// Stream id 0, reserved for connection-level frames.
pub const CONNECTION_STREAM_ID: u32 = 0;
