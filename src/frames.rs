//! HTTP/2 frame types (RFC 7540 Section 6).
//!
//! Each frame kind owns its payload shape and its validation rules. The
//! kinds are closed over by the [`Frame`] sum type, which gives the codec
//! exactly one implementation point per kind for parsing, validation and
//! serialization. Frames are plain values: a parsed frame is complete by
//! construction, and a frame built for writing carries everything its
//! encoder needs.

use crate::error::{Error, ErrorCode, Result};
use crate::settings::Settings;
use bytes::Bytes;
use std::fmt;

/// HTTP/2 frame types (RFC 7540 Section 6).
///
/// Type bytes outside 0x0..=0x9 map to [`FrameType::Unknown`]; receivers
/// must ignore frames of unknown type rather than reject them, so the
/// conversion from the wire is total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameType {
    /// DATA (0x0) - arbitrary octets, subject to flow control
    Data,
    /// HEADERS (0x1) - opens a stream, carries a header block fragment
    Headers,
    /// PRIORITY (0x2) - sender-advised stream priority
    Priority,
    /// RST_STREAM (0x3) - immediate stream termination
    RstStream,
    /// SETTINGS (0x4) - connection configuration parameters
    Settings,
    /// PUSH_PROMISE (0x5) - announces a server-initiated stream
    PushPromise,
    /// PING (0x6) - liveness / round-trip measurement
    Ping,
    /// GOAWAY (0x7) - initiates connection shutdown
    Goaway,
    /// WINDOW_UPDATE (0x8) - flow-control window increment
    WindowUpdate,
    /// CONTINUATION (0x9) - continues a header block
    Continuation,
    /// Any type byte not defined by RFC 7540, carried for forward
    /// compatibility
    Unknown(u8),
}

impl FrameType {
    /// Wire type byte.
    pub fn as_u8(self) -> u8 {
        match self {
            FrameType::Data => 0x0,
            FrameType::Headers => 0x1,
            FrameType::Priority => 0x2,
            FrameType::RstStream => 0x3,
            FrameType::Settings => 0x4,
            FrameType::PushPromise => 0x5,
            FrameType::Ping => 0x6,
            FrameType::Goaway => 0x7,
            FrameType::WindowUpdate => 0x8,
            FrameType::Continuation => 0x9,
            FrameType::Unknown(byte) => byte,
        }
    }

    /// Map a wire type byte to a frame type. Total: undefined bytes
    /// become [`FrameType::Unknown`].
    pub fn from_u8(byte: u8) -> Self {
        match byte {
            0x0 => FrameType::Data,
            0x1 => FrameType::Headers,
            0x2 => FrameType::Priority,
            0x3 => FrameType::RstStream,
            0x4 => FrameType::Settings,
            0x5 => FrameType::PushPromise,
            0x6 => FrameType::Ping,
            0x7 => FrameType::Goaway,
            0x8 => FrameType::WindowUpdate,
            0x9 => FrameType::Continuation,
            other => FrameType::Unknown(other),
        }
    }

    /// RFC 7540 name of the type.
    pub fn name(&self) -> &'static str {
        match self {
            FrameType::Data => "DATA",
            FrameType::Headers => "HEADERS",
            FrameType::Priority => "PRIORITY",
            FrameType::RstStream => "RST_STREAM",
            FrameType::Settings => "SETTINGS",
            FrameType::PushPromise => "PUSH_PROMISE",
            FrameType::Ping => "PING",
            FrameType::Goaway => "GOAWAY",
            FrameType::WindowUpdate => "WINDOW_UPDATE",
            FrameType::Continuation => "CONTINUATION",
            FrameType::Unknown(_) => "UNKNOWN",
        }
    }
}

impl fmt::Display for FrameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (0x{:x})", self.name(), self.as_u8())
    }
}

/// The flags byte of a frame header.
///
/// Bit positions are shared across types but only the subset meaningful
/// to a given type is ever set by this codec; undefined bits received
/// off the wire are preserved in the raw byte.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameFlags(u8);

impl FrameFlags {
    /// END_STREAM flag (0x1) - DATA and HEADERS
    pub const END_STREAM: u8 = 0x1;

    /// ACK flag (0x1) - SETTINGS and PING
    pub const ACK: u8 = 0x1;

    /// END_HEADERS flag (0x4) - HEADERS, PUSH_PROMISE and CONTINUATION
    pub const END_HEADERS: u8 = 0x4;

    /// PADDED flag (0x8) - DATA, HEADERS and PUSH_PROMISE
    pub const PADDED: u8 = 0x8;

    /// PRIORITY flag (0x20) - HEADERS
    pub const PRIORITY: u8 = 0x20;

    /// No flags set.
    pub fn empty() -> Self {
        FrameFlags(0)
    }

    /// Wrap a raw flags byte.
    pub fn from_u8(flags: u8) -> Self {
        FrameFlags(flags)
    }

    /// Raw flags byte.
    pub fn as_u8(&self) -> u8 {
        self.0
    }

    /// Set the given flag bits.
    pub fn set(&mut self, flag: u8) {
        self.0 |= flag;
    }

    /// Test whether all the given flag bits are set.
    pub fn is_set(&self, flag: u8) -> bool {
        (self.0 & flag) == flag
    }

    pub fn is_end_stream(&self) -> bool {
        self.is_set(Self::END_STREAM)
    }

    pub fn is_ack(&self) -> bool {
        self.is_set(Self::ACK)
    }

    pub fn is_end_headers(&self) -> bool {
        self.is_set(Self::END_HEADERS)
    }

    pub fn is_padded(&self) -> bool {
        self.is_set(Self::PADDED)
    }

    pub fn is_priority(&self) -> bool {
        self.is_set(Self::PRIORITY)
    }
}

/// Priority information carried by PRIORITY frames and by HEADERS frames
/// with the PRIORITY flag (RFC 7540 Section 5.3).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrioritySpec {
    /// The stream this stream depends on (31-bit)
    pub stream_dependency: u32,
    /// Exclusive dependency bit
    pub exclusive: bool,
    /// Logical weight, 1-256. The wire carries weight - 1 in a single
    /// byte; the offset is applied on read and removed on write.
    pub weight: u16,
}

impl PrioritySpec {
    /// Create a priority specification with a logical weight (1-256).
    pub fn new(stream_dependency: u32, exclusive: bool, weight: u16) -> Self {
        PrioritySpec {
            stream_dependency,
            exclusive,
            weight,
        }
    }

    /// The weight byte as it appears on the wire.
    pub fn wire_weight(&self) -> u8 {
        (self.weight.saturating_sub(1)).min(255) as u8
    }

    /// Reconstruct from the wire encoding (weight byte 0-255 maps to
    /// logical weight 1-256).
    pub fn from_wire(stream_dependency: u32, exclusive: bool, wire_weight: u8) -> Self {
        PrioritySpec {
            stream_dependency,
            exclusive,
            weight: u16::from(wire_weight) + 1,
        }
    }

    fn check(&self, stream_id: u32) -> Result<()> {
        if self.stream_dependency == stream_id {
            return Err(Error::stream_protocol(format!(
                "stream {stream_id} cannot depend on itself"
            )));
        }
        if !(1..=256).contains(&self.weight) {
            return Err(Error::protocol(format!(
                "priority weight {} outside 1-256",
                self.weight
            )));
        }
        Ok(())
    }
}

/// DATA frame (RFC 7540 Section 6.1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataFrame {
    pub stream_id: u32,
    pub data: Bytes,
    pub end_stream: bool,
    /// Pad length; `Some(0)` (PADDED with zero filler) is distinct from
    /// `None` (no PADDED flag)
    pub padding: Option<u8>,
}

impl DataFrame {
    pub fn new(stream_id: u32, data: Bytes, end_stream: bool) -> Self {
        DataFrame {
            stream_id,
            data,
            end_stream,
            padding: None,
        }
    }

    pub fn with_padding(mut self, padding: u8) -> Self {
        self.padding = Some(padding);
        self
    }

    pub fn payload_len(&self) -> usize {
        self.data.len() + self.padding.map_or(0, |pad| 1 + pad as usize)
    }

    fn validate(&self, settings: &Settings) -> Result<()> {
        if self.stream_id == 0 {
            return Err(Error::protocol("DATA frame on stream 0"));
        }
        check_max_frame_size(FrameType::Data, self.payload_len(), settings)
    }
}

/// HEADERS frame (RFC 7540 Section 6.2).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadersFrame {
    pub stream_id: u32,
    /// Opaque HPACK-compressed header block bytes
    pub header_block: Bytes,
    pub end_stream: bool,
    pub end_headers: bool,
    pub priority: Option<PrioritySpec>,
    pub padding: Option<u8>,
}

impl HeadersFrame {
    pub fn new(stream_id: u32, header_block: Bytes, end_stream: bool, end_headers: bool) -> Self {
        HeadersFrame {
            stream_id,
            header_block,
            end_stream,
            end_headers,
            priority: None,
            padding: None,
        }
    }

    pub fn with_priority(mut self, priority: PrioritySpec) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_padding(mut self, padding: u8) -> Self {
        self.padding = Some(padding);
        self
    }

    pub fn payload_len(&self) -> usize {
        self.header_block.len()
            + if self.priority.is_some() { 5 } else { 0 }
            + self.padding.map_or(0, |pad| 1 + pad as usize)
    }

    fn validate(&self, settings: &Settings) -> Result<()> {
        if self.stream_id == 0 {
            return Err(Error::protocol("HEADERS frame on stream 0"));
        }
        if self.payload_len() == 0 {
            return Err(Error::compression("HEADERS frame carries no header block"));
        }
        if let Some(priority) = &self.priority {
            priority.check(self.stream_id)?;
        }
        check_max_frame_size(FrameType::Headers, self.payload_len(), settings)
    }
}

/// PRIORITY frame (RFC 7540 Section 6.3). Fixed 5-byte payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityFrame {
    pub stream_id: u32,
    pub priority: PrioritySpec,
}

impl PriorityFrame {
    pub fn new(stream_id: u32, priority: PrioritySpec) -> Self {
        PriorityFrame {
            stream_id,
            priority,
        }
    }

    pub fn payload_len(&self) -> usize {
        5
    }

    fn validate(&self, settings: &Settings) -> Result<()> {
        if self.stream_id == 0 {
            return Err(Error::protocol("PRIORITY frame on stream 0"));
        }
        self.priority.check(self.stream_id)?;
        check_max_frame_size(FrameType::Priority, self.payload_len(), settings)
    }
}

/// RST_STREAM frame (RFC 7540 Section 6.4). Fixed 4-byte payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RstStreamFrame {
    pub stream_id: u32,
    /// Raw error code; codes outside RFC 7540 round-trip untouched
    pub error_code: u32,
}

impl RstStreamFrame {
    pub fn new(stream_id: u32, error_code: ErrorCode) -> Self {
        RstStreamFrame {
            stream_id,
            error_code: error_code.as_u32(),
        }
    }

    pub fn from_raw(stream_id: u32, error_code: u32) -> Self {
        RstStreamFrame {
            stream_id,
            error_code,
        }
    }

    /// The error code, if it is one RFC 7540 defines.
    pub fn known_error_code(&self) -> Option<ErrorCode> {
        ErrorCode::from_u32(self.error_code)
    }

    pub fn payload_len(&self) -> usize {
        4
    }

    fn validate(&self, settings: &Settings) -> Result<()> {
        if self.stream_id == 0 {
            return Err(Error::protocol("RST_STREAM frame on stream 0"));
        }
        check_max_frame_size(FrameType::RstStream, self.payload_len(), settings)
    }
}

/// SETTINGS frame (RFC 7540 Section 6.5). Always stream 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsFrame {
    pub ack: bool,
    pub settings: Settings,
}

impl SettingsFrame {
    pub fn new(settings: Settings) -> Self {
        SettingsFrame {
            ack: false,
            settings,
        }
    }

    /// A SETTINGS acknowledgement; must carry no parameters.
    pub fn ack() -> Self {
        SettingsFrame {
            ack: true,
            settings: Settings::new(),
        }
    }

    pub fn payload_len(&self) -> usize {
        if self.ack {
            0
        } else {
            self.settings.wire_len()
        }
    }

    fn validate(&self, settings: &Settings) -> Result<()> {
        if self.ack && !self.settings.is_empty() {
            return Err(Error::frame_size(
                "SETTINGS frame with ACK flag must have an empty payload",
            ));
        }
        self.settings.validate()?;
        check_max_frame_size(FrameType::Settings, self.payload_len(), settings)
    }
}

/// PUSH_PROMISE frame (RFC 7540 Section 6.6).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushPromiseFrame {
    pub stream_id: u32,
    /// The stream the sender intends to open (31-bit)
    pub promised_stream_id: u32,
    pub header_block: Bytes,
    pub end_headers: bool,
    pub padding: Option<u8>,
}

impl PushPromiseFrame {
    pub fn new(
        stream_id: u32,
        promised_stream_id: u32,
        header_block: Bytes,
        end_headers: bool,
    ) -> Self {
        PushPromiseFrame {
            stream_id,
            promised_stream_id,
            header_block,
            end_headers,
            padding: None,
        }
    }

    pub fn with_padding(mut self, padding: u8) -> Self {
        self.padding = Some(padding);
        self
    }

    pub fn payload_len(&self) -> usize {
        4 + self.header_block.len() + self.padding.map_or(0, |pad| 1 + pad as usize)
    }

    fn validate(&self, settings: &Settings) -> Result<()> {
        if self.stream_id == 0 {
            return Err(Error::protocol("PUSH_PROMISE frame on stream 0"));
        }
        if self.promised_stream_id == 0 {
            return Err(Error::protocol("PUSH_PROMISE promises stream 0"));
        }
        check_max_frame_size(FrameType::PushPromise, self.payload_len(), settings)
    }
}

/// PING frame (RFC 7540 Section 6.7). Always stream 0, always 8 opaque
/// payload bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PingFrame {
    pub ack: bool,
    pub data: [u8; 8],
}

impl PingFrame {
    pub fn new(data: [u8; 8]) -> Self {
        PingFrame { ack: false, data }
    }

    /// Acknowledge a received PING by echoing its opaque payload.
    pub fn ack(data: [u8; 8]) -> Self {
        PingFrame { ack: true, data }
    }

    pub fn payload_len(&self) -> usize {
        8
    }

    fn validate(&self, settings: &Settings) -> Result<()> {
        check_max_frame_size(FrameType::Ping, self.payload_len(), settings)
    }
}

impl Default for PingFrame {
    /// A PING with zero-filled opaque data. The payload content carries
    /// no protocol meaning.
    fn default() -> Self {
        PingFrame::new([0u8; 8])
    }
}

/// GOAWAY frame (RFC 7540 Section 6.8). Always stream 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoawayFrame {
    /// Highest stream id the sender might have acted on (31-bit)
    pub last_stream_id: u32,
    /// Raw error code
    pub error_code: u32,
    /// Optional opaque diagnostic bytes
    pub debug_data: Bytes,
}

impl GoawayFrame {
    pub fn new(last_stream_id: u32, error_code: ErrorCode) -> Self {
        GoawayFrame {
            last_stream_id,
            error_code: error_code.as_u32(),
            debug_data: Bytes::new(),
        }
    }

    pub fn from_raw(last_stream_id: u32, error_code: u32) -> Self {
        GoawayFrame {
            last_stream_id,
            error_code,
            debug_data: Bytes::new(),
        }
    }

    pub fn with_debug_data(mut self, debug_data: Bytes) -> Self {
        self.debug_data = debug_data;
        self
    }

    /// The error code, if it is one RFC 7540 defines.
    pub fn known_error_code(&self) -> Option<ErrorCode> {
        ErrorCode::from_u32(self.error_code)
    }

    pub fn payload_len(&self) -> usize {
        8 + self.debug_data.len()
    }

    fn validate(&self, settings: &Settings) -> Result<()> {
        check_max_frame_size(FrameType::Goaway, self.payload_len(), settings)
    }
}

/// WINDOW_UPDATE frame (RFC 7540 Section 6.9). Fixed 4-byte payload.
/// Stream 0 adjusts the connection-level window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowUpdateFrame {
    pub stream_id: u32,
    /// Window increment, 1 to 2^31-1
    pub size_increment: u32,
}

impl WindowUpdateFrame {
    pub fn new(stream_id: u32, size_increment: u32) -> Self {
        WindowUpdateFrame {
            stream_id,
            size_increment,
        }
    }

    pub fn payload_len(&self) -> usize {
        4
    }

    fn validate(&self, settings: &Settings) -> Result<()> {
        if self.size_increment == 0 {
            // Connection error on stream 0, stream error otherwise
            return Err(if self.stream_id == 0 {
                Error::protocol("WINDOW_UPDATE with zero increment on stream 0")
            } else {
                Error::stream_protocol(format!(
                    "WINDOW_UPDATE with zero increment on stream {}",
                    self.stream_id
                ))
            });
        }
        if self.size_increment > 0x7FFF_FFFF {
            return Err(Error::protocol(format!(
                "WINDOW_UPDATE increment {} exceeds 2^31-1",
                self.size_increment
            )));
        }
        check_max_frame_size(FrameType::WindowUpdate, self.payload_len(), settings)
    }
}

/// CONTINUATION frame (RFC 7540 Section 6.10).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContinuationFrame {
    pub stream_id: u32,
    pub header_block: Bytes,
    pub end_headers: bool,
}

impl ContinuationFrame {
    pub fn new(stream_id: u32, header_block: Bytes, end_headers: bool) -> Self {
        ContinuationFrame {
            stream_id,
            header_block,
            end_headers,
        }
    }

    pub fn payload_len(&self) -> usize {
        self.header_block.len()
    }

    fn validate(&self, settings: &Settings) -> Result<()> {
        if self.stream_id == 0 {
            return Err(Error::protocol("CONTINUATION frame on stream 0"));
        }
        check_max_frame_size(FrameType::Continuation, self.payload_len(), settings)
    }
}

/// A frame of a type RFC 7540 does not define, carried opaquely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFrame {
    pub raw_type: u8,
    pub flags: FrameFlags,
    pub stream_id: u32,
    pub payload: Bytes,
}

impl UnknownFrame {
    pub fn new(raw_type: u8, flags: FrameFlags, stream_id: u32, payload: Bytes) -> Self {
        UnknownFrame {
            raw_type,
            flags,
            stream_id,
            payload,
        }
    }

    pub fn payload_len(&self) -> usize {
        self.payload.len()
    }

    fn validate(&self, settings: &Settings) -> Result<()> {
        check_max_frame_size(FrameType::Unknown(self.raw_type), self.payload_len(), settings)
    }
}

fn check_max_frame_size(frame_type: FrameType, payload_len: usize, settings: &Settings) -> Result<()> {
    let max = settings.get_max_frame_size() as usize;
    if payload_len > max {
        return Err(Error::frame_size(format!(
            "{} payload of {payload_len} bytes exceeds SETTINGS_MAX_FRAME_SIZE {max}",
            frame_type.name()
        )));
    }
    Ok(())
}

/// Any HTTP/2 frame.
///
/// The read path produces these via [`crate::codec::FrameCodec`]; the
/// write path constructs a variant directly and serializes it with
/// [`Frame::encode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    Data(DataFrame),
    Headers(HeadersFrame),
    Priority(PriorityFrame),
    RstStream(RstStreamFrame),
    Settings(SettingsFrame),
    PushPromise(PushPromiseFrame),
    Ping(PingFrame),
    Goaway(GoawayFrame),
    WindowUpdate(WindowUpdateFrame),
    Continuation(ContinuationFrame),
    Unknown(UnknownFrame),
}

impl Frame {
    /// The frame's wire type.
    pub fn frame_type(&self) -> FrameType {
        match self {
            Frame::Data(_) => FrameType::Data,
            Frame::Headers(_) => FrameType::Headers,
            Frame::Priority(_) => FrameType::Priority,
            Frame::RstStream(_) => FrameType::RstStream,
            Frame::Settings(_) => FrameType::Settings,
            Frame::PushPromise(_) => FrameType::PushPromise,
            Frame::Ping(_) => FrameType::Ping,
            Frame::Goaway(_) => FrameType::Goaway,
            Frame::WindowUpdate(_) => FrameType::WindowUpdate,
            Frame::Continuation(_) => FrameType::Continuation,
            Frame::Unknown(frame) => FrameType::Unknown(frame.raw_type),
        }
    }

    /// The stream this frame applies to. SETTINGS, PING and GOAWAY are
    /// connection-level and always report stream 0.
    pub fn stream_id(&self) -> u32 {
        match self {
            Frame::Data(frame) => frame.stream_id,
            Frame::Headers(frame) => frame.stream_id,
            Frame::Priority(frame) => frame.stream_id,
            Frame::RstStream(frame) => frame.stream_id,
            Frame::Settings(_) | Frame::Ping(_) | Frame::Goaway(_) => 0,
            Frame::PushPromise(frame) => frame.stream_id,
            Frame::WindowUpdate(frame) => frame.stream_id,
            Frame::Continuation(frame) => frame.stream_id,
            Frame::Unknown(frame) => frame.stream_id,
        }
    }

    /// The flags byte this frame serializes with, composed from its
    /// boolean fields.
    pub fn flags(&self) -> FrameFlags {
        let mut flags = FrameFlags::empty();
        match self {
            Frame::Data(frame) => {
                if frame.end_stream {
                    flags.set(FrameFlags::END_STREAM);
                }
                if frame.padding.is_some() {
                    flags.set(FrameFlags::PADDED);
                }
            }
            Frame::Headers(frame) => {
                if frame.end_stream {
                    flags.set(FrameFlags::END_STREAM);
                }
                if frame.end_headers {
                    flags.set(FrameFlags::END_HEADERS);
                }
                if frame.padding.is_some() {
                    flags.set(FrameFlags::PADDED);
                }
                if frame.priority.is_some() {
                    flags.set(FrameFlags::PRIORITY);
                }
            }
            Frame::Settings(frame) => {
                if frame.ack {
                    flags.set(FrameFlags::ACK);
                }
            }
            Frame::PushPromise(frame) => {
                if frame.end_headers {
                    flags.set(FrameFlags::END_HEADERS);
                }
                if frame.padding.is_some() {
                    flags.set(FrameFlags::PADDED);
                }
            }
            Frame::Ping(frame) => {
                if frame.ack {
                    flags.set(FrameFlags::ACK);
                }
            }
            Frame::Continuation(frame) => {
                if frame.end_headers {
                    flags.set(FrameFlags::END_HEADERS);
                }
            }
            Frame::Unknown(frame) => return frame.flags,
            Frame::Priority(_)
            | Frame::RstStream(_)
            | Frame::Goaway(_)
            | Frame::WindowUpdate(_) => {}
        }
        flags
    }

    /// Serialized payload length of this frame.
    pub fn payload_len(&self) -> usize {
        match self {
            Frame::Data(frame) => frame.payload_len(),
            Frame::Headers(frame) => frame.payload_len(),
            Frame::Priority(frame) => frame.payload_len(),
            Frame::RstStream(frame) => frame.payload_len(),
            Frame::Settings(frame) => frame.payload_len(),
            Frame::PushPromise(frame) => frame.payload_len(),
            Frame::Ping(frame) => frame.payload_len(),
            Frame::Goaway(frame) => frame.payload_len(),
            Frame::WindowUpdate(frame) => frame.payload_len(),
            Frame::Continuation(frame) => frame.payload_len(),
            Frame::Unknown(frame) => frame.payload_len(),
        }
    }

    /// Check this frame against the per-type rules of RFC 7540 Section 6
    /// and the connection's negotiated maximum frame size.
    ///
    /// The read path calls this on every parsed frame before handing it
    /// to the caller; the write path may call it on hand-built frames.
    pub fn validate(&self, settings: &Settings) -> Result<()> {
        match self {
            Frame::Data(frame) => frame.validate(settings),
            Frame::Headers(frame) => frame.validate(settings),
            Frame::Priority(frame) => frame.validate(settings),
            Frame::RstStream(frame) => frame.validate(settings),
            Frame::Settings(frame) => frame.validate(settings),
            Frame::PushPromise(frame) => frame.validate(settings),
            Frame::Ping(frame) => frame.validate(settings),
            Frame::Goaway(frame) => frame.validate(settings),
            Frame::WindowUpdate(frame) => frame.validate(settings),
            Frame::Continuation(frame) => frame.validate(settings),
            Frame::Unknown(frame) => frame.validate(settings),
        }
    }

    /// Serialize to wire bytes (9-byte header plus payload).
    pub fn encode(&self) -> Bytes {
        crate::codec::FrameCodec::encode(self)
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} stream={} len={} flags=0x{:02x}",
            self.frame_type(),
            self.stream_id(),
            self.payload_len(),
            self.flags().as_u8()
        )?;
        match self {
            Frame::Data(frame) => {
                write!(
                    f,
                    " end_stream={} padding={:?}",
                    frame.end_stream, frame.padding
                )
            }
            Frame::Headers(frame) => {
                write!(
                    f,
                    " end_stream={} end_headers={} priority={:?} padding={:?} block_len={}",
                    frame.end_stream,
                    frame.end_headers,
                    frame.priority,
                    frame.padding,
                    frame.header_block.len()
                )
            }
            Frame::Priority(frame) => {
                write!(
                    f,
                    " dep={} exclusive={} weight={}",
                    frame.priority.stream_dependency, frame.priority.exclusive, frame.priority.weight
                )
            }
            Frame::RstStream(frame) => match frame.known_error_code() {
                Some(code) => write!(f, " error={code}"),
                None => write!(f, " error=0x{:x}", frame.error_code),
            },
            Frame::Settings(frame) => {
                write!(f, " ack={} parameters={}", frame.ack, frame.settings.pairs().len())
            }
            Frame::PushPromise(frame) => {
                write!(
                    f,
                    " promised={} end_headers={} padding={:?} block_len={}",
                    frame.promised_stream_id,
                    frame.end_headers,
                    frame.padding,
                    frame.header_block.len()
                )
            }
            Frame::Ping(frame) => write!(f, " ack={} data={:02x?}", frame.ack, frame.data),
            Frame::Goaway(frame) => {
                write!(
                    f,
                    " last_stream={} error=0x{:x} debug_len={}",
                    frame.last_stream_id,
                    frame.error_code,
                    frame.debug_data.len()
                )
            }
            Frame::WindowUpdate(frame) => write!(f, " increment={}", frame.size_increment),
            Frame::Continuation(frame) => {
                write!(
                    f,
                    " end_headers={} block_len={}",
                    frame.end_headers,
                    frame.header_block.len()
                )
            }
            Frame::Unknown(frame) => write!(f, " raw_type=0x{:x}", frame.raw_type),
        }
    }
}
