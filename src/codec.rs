//! Frame encoding and decoding.
//!
//! The write path turns a [`Frame`] into owned wire bytes; the read path
//! turns a 9-byte header plus a fully buffered payload back into a
//! [`Frame`], enforcing the per-type shape rules of RFC 7540 Section 6 as
//! the bytes are consumed. Incremental streaming parse is out of scope:
//! callers hand the codec complete payloads.

use crate::error::{Error, Result};
use crate::frames::*;
use crate::settings::Settings;
use bytes::{Buf, BufMut, Bytes, BytesMut};
use std::io::{Read, Write};

/// Size of the common frame header (RFC 7540 Section 4.1).
pub const FRAME_HEADER_SIZE: usize = 9;

/// Largest payload length representable in the 24-bit length field.
pub const MAX_FRAME_PAYLOAD: usize = 0x00FF_FFFF;

/// Pull-style reader over a fully buffered frame payload.
///
/// All multi-byte reads are big-endian. Underflow is reported as a frame
/// size error rather than a panic, so a frame whose payload is shorter
/// than its sub-fields claim fails cleanly during parsing.
#[derive(Debug)]
pub struct FrameReader {
    buf: Bytes,
}

impl FrameReader {
    pub fn new(buf: Bytes) -> Self {
        FrameReader { buf }
    }

    /// Bytes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.buf.len()
    }

    fn need(&self, n: usize) -> Result<()> {
        if self.buf.len() < n {
            return Err(Error::frame_size(format!(
                "frame payload truncated: needed {n} more bytes, have {}",
                self.buf.len()
            )));
        }
        Ok(())
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        self.need(1)?;
        Ok(self.buf.get_u8())
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        self.need(2)?;
        Ok(self.buf.get_u16())
    }

    pub fn read_u24(&mut self) -> Result<u32> {
        self.need(3)?;
        Ok(self.buf.get_uint(3) as u32)
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        self.need(4)?;
        Ok(self.buf.get_u32())
    }

    /// Read a 31-bit field, returning the reserved top bit separately.
    pub fn read_u31(&mut self) -> Result<(bool, u32)> {
        let raw = self.read_u32()?;
        Ok((raw & 0x8000_0000 != 0, raw & 0x7FFF_FFFF))
    }

    /// Take the next `n` bytes without copying.
    pub fn read_bytes(&mut self, n: usize) -> Result<Bytes> {
        self.need(n)?;
        Ok(self.buf.split_to(n))
    }

    /// Consume and discard `n` bytes (padding).
    pub fn skip(&mut self, n: usize) -> Result<()> {
        self.need(n)?;
        self.buf.advance(n);
        Ok(())
    }
}

/// The decoded 9-byte common frame header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameHeader {
    /// Payload length (24-bit)
    pub length: u32,
    pub frame_type: FrameType,
    pub flags: FrameFlags,
    /// The R bit atop the stream id. Ignored for semantics, surfaced for
    /// diagnostics; writes always emit it as zero.
    pub reserved: bool,
    /// Stream identifier (31-bit)
    pub stream_id: u32,
}

impl FrameHeader {
    /// Decode a frame header from its 9 wire bytes.
    pub fn parse(bytes: &[u8; FRAME_HEADER_SIZE]) -> Self {
        let length =
            ((bytes[0] as u32) << 16) | ((bytes[1] as u32) << 8) | (bytes[2] as u32);
        let frame_type = FrameType::from_u8(bytes[3]);
        let flags = FrameFlags::from_u8(bytes[4]);
        let reserved = bytes[5] & 0x80 != 0;
        let stream_id = ((bytes[5] as u32 & 0x7F) << 24)
            | ((bytes[6] as u32) << 16)
            | ((bytes[7] as u32) << 8)
            | (bytes[8] as u32);
        FrameHeader {
            length,
            frame_type,
            flags,
            reserved,
            stream_id,
        }
    }

    /// Encode this header to its 9 wire bytes, preserving the reserved
    /// bit as held (zero for every header this codec builds itself).
    pub fn encode(&self) -> [u8; FRAME_HEADER_SIZE] {
        let mut bytes = [0u8; FRAME_HEADER_SIZE];
        bytes[0] = ((self.length >> 16) & 0xFF) as u8;
        bytes[1] = ((self.length >> 8) & 0xFF) as u8;
        bytes[2] = (self.length & 0xFF) as u8;
        bytes[3] = self.frame_type.as_u8();
        bytes[4] = self.flags.as_u8();
        let stream_id = self.stream_id & 0x7FFF_FFFF;
        bytes[5] = ((stream_id >> 24) & 0xFF) as u8;
        if self.reserved {
            bytes[5] |= 0x80;
        }
        bytes[6] = ((stream_id >> 16) & 0xFF) as u8;
        bytes[7] = ((stream_id >> 8) & 0xFF) as u8;
        bytes[8] = (stream_id & 0xFF) as u8;
        bytes
    }
}

/// Frame encoder/decoder.
///
/// Encoding functions return owned, fully formed byte sequences; decoding
/// dispatches the wire type byte to the matching parser and then runs the
/// frame's validation against the connection's settings.
pub struct FrameCodec;

impl FrameCodec {
    /// Assemble a 9-byte frame header for the write path (reserved bit
    /// always zero, per the RFC's sender rules).
    pub fn encode_header(
        frame_type: FrameType,
        flags: FrameFlags,
        stream_id: u32,
        length: usize,
    ) -> [u8; FRAME_HEADER_SIZE] {
        FrameHeader {
            length: length as u32,
            frame_type,
            flags,
            reserved: false,
            stream_id,
        }
        .encode()
    }

    // ---- write path -----------------------------------------------------

    /// Serialize any frame to wire bytes.
    pub fn encode(frame: &Frame) -> Bytes {
        match frame {
            Frame::Data(frame) => Self::encode_data_frame(frame),
            Frame::Headers(frame) => Self::encode_headers_frame(frame),
            Frame::Priority(frame) => Self::encode_priority_frame(frame),
            Frame::RstStream(frame) => Self::encode_rst_stream_frame(frame),
            Frame::Settings(frame) => Self::encode_settings_frame(frame),
            Frame::PushPromise(frame) => Self::encode_push_promise_frame(frame),
            Frame::Ping(frame) => Self::encode_ping_frame(frame),
            Frame::Goaway(frame) => Self::encode_goaway_frame(frame),
            Frame::WindowUpdate(frame) => Self::encode_window_update_frame(frame),
            Frame::Continuation(frame) => Self::encode_continuation_frame(frame),
            Frame::Unknown(frame) => Self::encode_unknown_frame(frame),
        }
    }

    pub fn encode_data_frame(frame: &DataFrame) -> Bytes {
        let mut buf = BytesMut::with_capacity(FRAME_HEADER_SIZE + frame.payload_len());
        let mut flags = FrameFlags::empty();
        if frame.end_stream {
            flags.set(FrameFlags::END_STREAM);
        }
        if frame.padding.is_some() {
            flags.set(FrameFlags::PADDED);
        }

        let header =
            Self::encode_header(FrameType::Data, flags, frame.stream_id, frame.payload_len());
        buf.put_slice(&header);

        if let Some(pad) = frame.padding {
            buf.put_u8(pad);
        }
        buf.put_slice(&frame.data);
        if let Some(pad) = frame.padding {
            buf.put_bytes(0, pad as usize);
        }

        buf.freeze()
    }

    /// Serialize a DATA frame as discrete segments (header+pad-length,
    /// body, padding) so large bodies reach the socket without a copy.
    /// The body segment shares the frame's underlying buffer.
    pub fn encode_data_frame_vectored(frame: &DataFrame) -> Vec<Bytes> {
        let mut flags = FrameFlags::empty();
        if frame.end_stream {
            flags.set(FrameFlags::END_STREAM);
        }
        if frame.padding.is_some() {
            flags.set(FrameFlags::PADDED);
        }

        let header =
            Self::encode_header(FrameType::Data, flags, frame.stream_id, frame.payload_len());
        let mut head = BytesMut::with_capacity(FRAME_HEADER_SIZE + 1);
        head.put_slice(&header);
        if let Some(pad) = frame.padding {
            head.put_u8(pad);
        }

        let mut segments = vec![head.freeze(), frame.data.clone()];
        if let Some(pad) = frame.padding {
            if pad > 0 {
                segments.push(Bytes::from(vec![0u8; pad as usize]));
            }
        }
        segments
    }

    pub fn encode_headers_frame(frame: &HeadersFrame) -> Bytes {
        let mut buf = BytesMut::with_capacity(FRAME_HEADER_SIZE + frame.payload_len());
        let mut flags = FrameFlags::empty();
        if frame.end_stream {
            flags.set(FrameFlags::END_STREAM);
        }
        if frame.end_headers {
            flags.set(FrameFlags::END_HEADERS);
        }
        if frame.priority.is_some() {
            flags.set(FrameFlags::PRIORITY);
        }
        if frame.padding.is_some() {
            flags.set(FrameFlags::PADDED);
        }

        let header = Self::encode_header(
            FrameType::Headers,
            flags,
            frame.stream_id,
            frame.payload_len(),
        );
        buf.put_slice(&header);

        if let Some(pad) = frame.padding {
            buf.put_u8(pad);
        }
        if let Some(priority) = &frame.priority {
            let mut dep = priority.stream_dependency & 0x7FFF_FFFF;
            if priority.exclusive {
                dep |= 0x8000_0000;
            }
            buf.put_u32(dep);
            buf.put_u8(priority.wire_weight());
        }
        buf.put_slice(&frame.header_block);
        if let Some(pad) = frame.padding {
            buf.put_bytes(0, pad as usize);
        }

        buf.freeze()
    }

    pub fn encode_priority_frame(frame: &PriorityFrame) -> Bytes {
        let mut buf = BytesMut::with_capacity(FRAME_HEADER_SIZE + 5);
        let header = Self::encode_header(
            FrameType::Priority,
            FrameFlags::empty(),
            frame.stream_id,
            5,
        );
        buf.put_slice(&header);

        let mut dep = frame.priority.stream_dependency & 0x7FFF_FFFF;
        if frame.priority.exclusive {
            dep |= 0x8000_0000;
        }
        buf.put_u32(dep);
        buf.put_u8(frame.priority.wire_weight());

        buf.freeze()
    }

    pub fn encode_rst_stream_frame(frame: &RstStreamFrame) -> Bytes {
        let mut buf = BytesMut::with_capacity(FRAME_HEADER_SIZE + 4);
        let header = Self::encode_header(
            FrameType::RstStream,
            FrameFlags::empty(),
            frame.stream_id,
            4,
        );
        buf.put_slice(&header);
        buf.put_u32(frame.error_code);
        buf.freeze()
    }

    pub fn encode_settings_frame(frame: &SettingsFrame) -> Bytes {
        let flags = if frame.ack {
            FrameFlags::from_u8(FrameFlags::ACK)
        } else {
            FrameFlags::empty()
        };

        let pairs = if frame.ack {
            Vec::new()
        } else {
            frame.settings.pairs()
        };

        let mut buf = BytesMut::with_capacity(FRAME_HEADER_SIZE + pairs.len() * 6);
        // SETTINGS always travels on stream 0
        let header = Self::encode_header(FrameType::Settings, flags, 0, pairs.len() * 6);
        buf.put_slice(&header);
        for (parameter, value) in pairs {
            buf.put_u16(parameter.as_u16());
            buf.put_u32(value);
        }
        buf.freeze()
    }

    pub fn encode_push_promise_frame(frame: &PushPromiseFrame) -> Bytes {
        let mut buf = BytesMut::with_capacity(FRAME_HEADER_SIZE + frame.payload_len());
        let mut flags = FrameFlags::empty();
        if frame.end_headers {
            flags.set(FrameFlags::END_HEADERS);
        }
        if frame.padding.is_some() {
            flags.set(FrameFlags::PADDED);
        }

        let header = Self::encode_header(
            FrameType::PushPromise,
            flags,
            frame.stream_id,
            frame.payload_len(),
        );
        buf.put_slice(&header);

        if let Some(pad) = frame.padding {
            buf.put_u8(pad);
        }
        buf.put_u32(frame.promised_stream_id & 0x7FFF_FFFF);
        buf.put_slice(&frame.header_block);
        if let Some(pad) = frame.padding {
            buf.put_bytes(0, pad as usize);
        }

        buf.freeze()
    }

    pub fn encode_ping_frame(frame: &PingFrame) -> Bytes {
        let flags = if frame.ack {
            FrameFlags::from_u8(FrameFlags::ACK)
        } else {
            FrameFlags::empty()
        };

        let mut buf = BytesMut::with_capacity(FRAME_HEADER_SIZE + 8);
        // PING always travels on stream 0 with an 8-byte payload
        let header = Self::encode_header(FrameType::Ping, flags, 0, 8);
        buf.put_slice(&header);
        buf.put_slice(&frame.data);
        buf.freeze()
    }

    pub fn encode_goaway_frame(frame: &GoawayFrame) -> Bytes {
        let mut buf = BytesMut::with_capacity(FRAME_HEADER_SIZE + frame.payload_len());
        let header = Self::encode_header(
            FrameType::Goaway,
            FrameFlags::empty(),
            0,
            frame.payload_len(),
        );
        buf.put_slice(&header);
        buf.put_u32(frame.last_stream_id & 0x7FFF_FFFF);
        buf.put_u32(frame.error_code);
        buf.put_slice(&frame.debug_data);
        buf.freeze()
    }

    pub fn encode_window_update_frame(frame: &WindowUpdateFrame) -> Bytes {
        let mut buf = BytesMut::with_capacity(FRAME_HEADER_SIZE + 4);
        let header = Self::encode_header(
            FrameType::WindowUpdate,
            FrameFlags::empty(),
            frame.stream_id,
            4,
        );
        buf.put_slice(&header);
        buf.put_u32(frame.size_increment & 0x7FFF_FFFF);
        buf.freeze()
    }

    pub fn encode_continuation_frame(frame: &ContinuationFrame) -> Bytes {
        let mut buf = BytesMut::with_capacity(FRAME_HEADER_SIZE + frame.payload_len());
        let mut flags = FrameFlags::empty();
        if frame.end_headers {
            flags.set(FrameFlags::END_HEADERS);
        }

        let header = Self::encode_header(
            FrameType::Continuation,
            flags,
            frame.stream_id,
            frame.payload_len(),
        );
        buf.put_slice(&header);
        buf.put_slice(&frame.header_block);
        buf.freeze()
    }

    pub fn encode_unknown_frame(frame: &UnknownFrame) -> Bytes {
        let mut buf = BytesMut::with_capacity(FRAME_HEADER_SIZE + frame.payload.len());
        let header = Self::encode_header(
            FrameType::Unknown(frame.raw_type),
            frame.flags,
            frame.stream_id,
            frame.payload.len(),
        );
        buf.put_slice(&header);
        buf.put_slice(&frame.payload);
        buf.freeze()
    }

    // ---- read path ------------------------------------------------------

    /// Parse a frame payload against its already-decoded header.
    ///
    /// The payload must be exactly `header.length` bytes. This is the
    /// dispatch point mapping the wire type byte to the matching parser;
    /// undefined types come back as [`Frame::Unknown`] rather than an
    /// error. Semantic validation is a separate step ([`Frame::validate`]),
    /// run by [`FrameCodec::decode`].
    pub fn parse(header: &FrameHeader, payload: Bytes) -> Result<Frame> {
        if payload.len() != header.length as usize {
            return Err(Error::frame_size(format!(
                "payload is {} bytes but header declares {}",
                payload.len(),
                header.length
            )));
        }
        let mut reader = FrameReader::new(payload);
        let frame = match header.frame_type {
            FrameType::Data => Frame::Data(Self::parse_data(header, &mut reader)?),
            FrameType::Headers => Frame::Headers(Self::parse_headers(header, &mut reader)?),
            FrameType::Priority => Frame::Priority(Self::parse_priority(header, &mut reader)?),
            FrameType::RstStream => {
                Frame::RstStream(Self::parse_rst_stream(header, &mut reader)?)
            }
            FrameType::Settings => Frame::Settings(Self::parse_settings(header, &mut reader)?),
            FrameType::PushPromise => {
                Frame::PushPromise(Self::parse_push_promise(header, &mut reader)?)
            }
            FrameType::Ping => Frame::Ping(Self::parse_ping(header, &mut reader)?),
            FrameType::Goaway => Frame::Goaway(Self::parse_goaway(header, &mut reader)?),
            FrameType::WindowUpdate => {
                Frame::WindowUpdate(Self::parse_window_update(header, &mut reader)?)
            }
            FrameType::Continuation => {
                Frame::Continuation(Self::parse_continuation(header, &mut reader)?)
            }
            FrameType::Unknown(raw_type) => Frame::Unknown(UnknownFrame::new(
                raw_type,
                header.flags,
                header.stream_id,
                reader.read_bytes(header.length as usize)?,
            )),
        };
        // Every sub-field's byte cost must account for the declared length
        if reader.remaining() != 0 {
            return Err(Error::frame_size(format!(
                "{} payload has {} unconsumed bytes",
                header.frame_type.name(),
                reader.remaining()
            )));
        }
        Ok(frame)
    }

    /// Decode one frame from a buffered byte source: header, payload,
    /// then semantic validation against `settings`. This is the entry
    /// point the connection layer drives.
    pub fn decode(src: &mut FrameReader, settings: &Settings) -> Result<Frame> {
        let header_bytes = src.read_bytes(FRAME_HEADER_SIZE)?;
        let mut fixed = [0u8; FRAME_HEADER_SIZE];
        fixed.copy_from_slice(&header_bytes);
        let header = FrameHeader::parse(&fixed);

        if header.length as usize > settings.get_max_frame_size() as usize {
            return Err(Error::frame_size(format!(
                "declared payload length {} exceeds SETTINGS_MAX_FRAME_SIZE {}",
                header.length,
                settings.get_max_frame_size()
            )));
        }

        let payload = src.read_bytes(header.length as usize)?;
        let frame = Self::parse(&header, payload)?;
        frame.validate(settings)?;
        Ok(frame)
    }

    /// Read one frame from a blocking reader (e.g. a socket wrapper).
    pub fn read_frame<R: Read>(reader: &mut R, settings: &Settings) -> Result<Frame> {
        let mut header_bytes = [0u8; FRAME_HEADER_SIZE];
        reader.read_exact(&mut header_bytes)?;
        let header = FrameHeader::parse(&header_bytes);

        if header.length as usize > settings.get_max_frame_size() as usize {
            return Err(Error::frame_size(format!(
                "declared payload length {} exceeds SETTINGS_MAX_FRAME_SIZE {}",
                header.length,
                settings.get_max_frame_size()
            )));
        }

        let mut payload = vec![0u8; header.length as usize];
        reader.read_exact(&mut payload)?;
        let frame = Self::parse(&header, Bytes::from(payload))?;
        frame.validate(settings)?;
        Ok(frame)
    }

    /// Write one frame to a blocking writer.
    pub fn write_frame<W: Write>(writer: &mut W, frame: &Frame) -> Result<()> {
        writer.write_all(&Self::encode(frame))?;
        writer.flush()?;
        Ok(())
    }

    // ---- per-type parsers -----------------------------------------------

    /// Consume the pad-length byte if PADDED is set, returning the pad
    /// length and the content length left after subtracting padding and
    /// `sub_fields` bytes of fixed sub-fields still to be read.
    fn split_padding(
        header: &FrameHeader,
        reader: &mut FrameReader,
        sub_fields: usize,
    ) -> Result<(Option<u8>, usize)> {
        let padding = if header.flags.is_padded() {
            Some(reader.read_u8()?)
        } else {
            None
        };
        let pad = padding.map_or(0, usize::from);
        let consumed = if padding.is_some() { 1 } else { 0 };
        let Some(available) = (header.length as usize).checked_sub(consumed + sub_fields) else {
            return Err(Error::frame_size(format!(
                "{} payload too short for its sub-fields",
                header.frame_type.name()
            )));
        };
        if pad > available {
            // Padding swallowing the whole payload is a connection error
            return Err(Error::protocol(format!(
                "{} pad length {pad} exceeds remaining payload {available}",
                header.frame_type.name()
            )));
        }
        Ok((padding, available - pad))
    }

    fn parse_data(header: &FrameHeader, reader: &mut FrameReader) -> Result<DataFrame> {
        let (padding, content_len) = Self::split_padding(header, reader, 0)?;
        let data = reader.read_bytes(content_len)?;
        if let Some(pad) = padding {
            reader.skip(pad as usize)?;
        }
        Ok(DataFrame {
            stream_id: header.stream_id,
            data,
            end_stream: header.flags.is_end_stream(),
            padding,
        })
    }

    fn parse_headers(header: &FrameHeader, reader: &mut FrameReader) -> Result<HeadersFrame> {
        let priority_len = if header.flags.is_priority() { 5 } else { 0 };
        let (padding, content_len) = Self::split_padding(header, reader, priority_len)?;

        let priority = if header.flags.is_priority() {
            let (exclusive, stream_dependency) = reader.read_u31()?;
            let wire_weight = reader.read_u8()?;
            Some(PrioritySpec::from_wire(
                stream_dependency,
                exclusive,
                wire_weight,
            ))
        } else {
            None
        };

        let header_block = reader.read_bytes(content_len)?;
        if let Some(pad) = padding {
            reader.skip(pad as usize)?;
        }
        Ok(HeadersFrame {
            stream_id: header.stream_id,
            header_block,
            end_stream: header.flags.is_end_stream(),
            end_headers: header.flags.is_end_headers(),
            priority,
            padding,
        })
    }

    fn parse_priority(header: &FrameHeader, reader: &mut FrameReader) -> Result<PriorityFrame> {
        if header.length != 5 {
            // Wrong-length PRIORITY only poisons its own stream
            return Err(Error::stream_frame_size(format!(
                "PRIORITY payload must be 5 bytes, got {}",
                header.length
            )));
        }
        let (exclusive, stream_dependency) = reader.read_u31()?;
        let wire_weight = reader.read_u8()?;
        Ok(PriorityFrame {
            stream_id: header.stream_id,
            priority: PrioritySpec::from_wire(stream_dependency, exclusive, wire_weight),
        })
    }

    fn parse_rst_stream(header: &FrameHeader, reader: &mut FrameReader) -> Result<RstStreamFrame> {
        if header.length != 4 {
            return Err(Error::frame_size(format!(
                "RST_STREAM payload must be 4 bytes, got {}",
                header.length
            )));
        }
        Ok(RstStreamFrame {
            stream_id: header.stream_id,
            error_code: reader.read_u32()?,
        })
    }

    fn parse_settings(header: &FrameHeader, reader: &mut FrameReader) -> Result<SettingsFrame> {
        if header.stream_id != 0 {
            return Err(Error::protocol(format!(
                "SETTINGS frame on stream {}",
                header.stream_id
            )));
        }
        let ack = header.flags.is_ack();
        if ack && header.length != 0 {
            return Err(Error::frame_size(
                "SETTINGS frame with ACK flag must have an empty payload",
            ));
        }
        if header.length % 6 != 0 {
            return Err(Error::frame_size(format!(
                "SETTINGS payload length {} is not a multiple of 6",
                header.length
            )));
        }

        let mut settings = Settings::new();
        while reader.remaining() > 0 {
            let identifier = reader.read_u16()?;
            let value = reader.read_u32()?;
            settings.apply(identifier, value)?;
        }
        Ok(SettingsFrame { ack, settings })
    }

    fn parse_push_promise(
        header: &FrameHeader,
        reader: &mut FrameReader,
    ) -> Result<PushPromiseFrame> {
        let (padding, content_len) = Self::split_padding(header, reader, 4)?;
        let (_reserved, promised_stream_id) = reader.read_u31()?;
        let header_block = reader.read_bytes(content_len)?;
        if let Some(pad) = padding {
            reader.skip(pad as usize)?;
        }
        Ok(PushPromiseFrame {
            stream_id: header.stream_id,
            promised_stream_id,
            header_block,
            end_headers: header.flags.is_end_headers(),
            padding,
        })
    }

    fn parse_ping(header: &FrameHeader, reader: &mut FrameReader) -> Result<PingFrame> {
        if header.stream_id != 0 {
            return Err(Error::protocol(format!(
                "PING frame on stream {}",
                header.stream_id
            )));
        }
        if header.length != 8 {
            return Err(Error::frame_size(format!(
                "PING payload must be 8 bytes, got {}",
                header.length
            )));
        }
        let bytes = reader.read_bytes(8)?;
        let mut data = [0u8; 8];
        data.copy_from_slice(&bytes);
        Ok(PingFrame {
            ack: header.flags.is_ack(),
            data,
        })
    }

    fn parse_goaway(header: &FrameHeader, reader: &mut FrameReader) -> Result<GoawayFrame> {
        if header.stream_id != 0 {
            return Err(Error::protocol(format!(
                "GOAWAY frame on stream {}",
                header.stream_id
            )));
        }
        if header.length < 8 {
            return Err(Error::frame_size(format!(
                "GOAWAY payload must be at least 8 bytes, got {}",
                header.length
            )));
        }
        let (_reserved, last_stream_id) = reader.read_u31()?;
        let error_code = reader.read_u32()?;
        let debug_data = reader.read_bytes(reader.remaining())?;
        Ok(GoawayFrame {
            last_stream_id,
            error_code,
            debug_data,
        })
    }

    fn parse_window_update(
        header: &FrameHeader,
        reader: &mut FrameReader,
    ) -> Result<WindowUpdateFrame> {
        if header.length != 4 {
            return Err(Error::frame_size(format!(
                "WINDOW_UPDATE payload must be 4 bytes, got {}",
                header.length
            )));
        }
        let (_reserved, size_increment) = reader.read_u31()?;
        Ok(WindowUpdateFrame {
            stream_id: header.stream_id,
            size_increment,
        })
    }

    fn parse_continuation(
        header: &FrameHeader,
        reader: &mut FrameReader,
    ) -> Result<ContinuationFrame> {
        Ok(ContinuationFrame {
            stream_id: header.stream_id,
            header_block: reader.read_bytes(header.length as usize)?,
            end_headers: header.flags.is_end_headers(),
        })
    }
}
