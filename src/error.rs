//! Error types for the frame layer.
//!
//! Parsing and validation surface four families of failure, mirroring the
//! error classes of RFC 7540 Section 7: protocol violations, frame size
//! violations, flow-control violations and header-compression violations.
//! The codec never recovers from any of these; each error propagates
//! unchanged to the connection layer, which decides between a stream reset
//! and connection teardown based on the error's severity.

use std::fmt;

/// Errors raised by frame parsing, validation and the framing I/O helpers.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O failure while reading or writing framed bytes
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Semantic protocol violation (RFC 7540 PROTOCOL_ERROR)
    #[error("protocol error: {message}")]
    Protocol {
        message: String,
        /// true if the whole connection must be torn down, false if only
        /// the affected stream needs to be reset
        connection_error: bool,
    },

    /// Frame length violation (RFC 7540 FRAME_SIZE_ERROR)
    #[error("frame size error: {message}")]
    FrameSize {
        message: String,
        connection_error: bool,
    },

    /// Flow-control window violation (RFC 7540 FLOW_CONTROL_ERROR)
    #[error("flow control error: {message}")]
    FlowControl {
        message: String,
        connection_error: bool,
    },

    /// Header-block violation (RFC 7540 COMPRESSION_ERROR); always fatal
    /// to the connection since the HPACK contexts are out of sync
    #[error("compression error: {message}")]
    Compression { message: String },
}

impl Error {
    /// Connection-level protocol error.
    pub fn protocol(message: impl Into<String>) -> Self {
        Error::Protocol {
            message: message.into(),
            connection_error: true,
        }
    }

    /// Stream-level protocol error; the connection survives.
    pub fn stream_protocol(message: impl Into<String>) -> Self {
        Error::Protocol {
            message: message.into(),
            connection_error: false,
        }
    }

    /// Connection-level frame size error.
    pub fn frame_size(message: impl Into<String>) -> Self {
        Error::FrameSize {
            message: message.into(),
            connection_error: true,
        }
    }

    /// Stream-level frame size error (e.g. a malformed PRIORITY frame).
    pub fn stream_frame_size(message: impl Into<String>) -> Self {
        Error::FrameSize {
            message: message.into(),
            connection_error: false,
        }
    }

    /// Connection-level flow-control error.
    pub fn flow_control(message: impl Into<String>) -> Self {
        Error::FlowControl {
            message: message.into(),
            connection_error: true,
        }
    }

    /// Stream-level flow-control error.
    pub fn stream_flow_control(message: impl Into<String>) -> Self {
        Error::FlowControl {
            message: message.into(),
            connection_error: false,
        }
    }

    /// Connection-level compression error.
    pub fn compression(message: impl Into<String>) -> Self {
        Error::Compression {
            message: message.into(),
        }
    }

    /// Whether the connection layer must terminate the whole connection
    /// rather than reset a single stream.
    pub fn is_connection_error(&self) -> bool {
        match self {
            Error::Io(_) => true,
            Error::Protocol {
                connection_error, ..
            }
            | Error::FrameSize {
                connection_error, ..
            }
            | Error::FlowControl {
                connection_error, ..
            } => *connection_error,
            Error::Compression { .. } => true,
        }
    }

    /// The RFC 7540 error code a peer should see for this error, e.g. in
    /// a RST_STREAM or GOAWAY frame.
    pub fn h2_error_code(&self) -> ErrorCode {
        match self {
            Error::Io(_) => ErrorCode::InternalError,
            Error::Protocol { .. } => ErrorCode::ProtocolError,
            Error::FrameSize { .. } => ErrorCode::FrameSizeError,
            Error::FlowControl { .. } => ErrorCode::FlowControlError,
            Error::Compression { .. } => ErrorCode::CompressionError,
        }
    }
}

/// HTTP/2 error codes as defined in RFC 7540 Section 7.
///
/// These travel on the wire in RST_STREAM and GOAWAY frames. Codes outside
/// this set are legal on the wire (receivers must not reject them), which
/// is why frames store the raw `u32` and convert lazily.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    /// Graceful shutdown
    NoError = 0x0,
    /// Protocol error detected
    ProtocolError = 0x1,
    /// Implementation fault
    InternalError = 0x2,
    /// Flow-control limits exceeded
    FlowControlError = 0x3,
    /// Settings not acknowledged
    SettingsTimeout = 0x4,
    /// Frame received for closed stream
    StreamClosed = 0x5,
    /// Frame size incorrect
    FrameSizeError = 0x6,
    /// Stream not processed
    RefusedStream = 0x7,
    /// Stream cancelled
    Cancel = 0x8,
    /// Compression state not updated
    CompressionError = 0x9,
    /// TCP connection error for CONNECT method
    ConnectError = 0xa,
    /// Processing capacity exceeded
    EnhanceYourCalm = 0xb,
    /// Negotiated TLS parameters not acceptable
    InadequateSecurity = 0xc,
    /// Use HTTP/1.1 for the request
    Http11Required = 0xd,
}

impl ErrorCode {
    /// Wire representation.
    pub fn as_u32(self) -> u32 {
        self as u32
    }

    /// Convert a wire value back to a known code. Returns `None` for
    /// codes this implementation does not define; per RFC 7540 those are
    /// treated as equivalent to INTERNAL_ERROR by callers, not rejected.
    pub fn from_u32(code: u32) -> Option<Self> {
        match code {
            0x0 => Some(ErrorCode::NoError),
            0x1 => Some(ErrorCode::ProtocolError),
            0x2 => Some(ErrorCode::InternalError),
            0x3 => Some(ErrorCode::FlowControlError),
            0x4 => Some(ErrorCode::SettingsTimeout),
            0x5 => Some(ErrorCode::StreamClosed),
            0x6 => Some(ErrorCode::FrameSizeError),
            0x7 => Some(ErrorCode::RefusedStream),
            0x8 => Some(ErrorCode::Cancel),
            0x9 => Some(ErrorCode::CompressionError),
            0xa => Some(ErrorCode::ConnectError),
            0xb => Some(ErrorCode::EnhanceYourCalm),
            0xc => Some(ErrorCode::InadequateSecurity),
            0xd => Some(ErrorCode::Http11Required),
            _ => None,
        }
    }

    /// RFC 7540 name of the code.
    pub fn name(&self) -> &'static str {
        match self {
            ErrorCode::NoError => "NO_ERROR",
            ErrorCode::ProtocolError => "PROTOCOL_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
            ErrorCode::FlowControlError => "FLOW_CONTROL_ERROR",
            ErrorCode::SettingsTimeout => "SETTINGS_TIMEOUT",
            ErrorCode::StreamClosed => "STREAM_CLOSED",
            ErrorCode::FrameSizeError => "FRAME_SIZE_ERROR",
            ErrorCode::RefusedStream => "REFUSED_STREAM",
            ErrorCode::Cancel => "CANCEL",
            ErrorCode::CompressionError => "COMPRESSION_ERROR",
            ErrorCode::ConnectError => "CONNECT_ERROR",
            ErrorCode::EnhanceYourCalm => "ENHANCE_YOUR_CALM",
            ErrorCode::InadequateSecurity => "INADEQUATE_SECURITY",
            ErrorCode::Http11Required => "HTTP_1_1_REQUIRED",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (0x{:x})", self.name(), self.as_u32())
    }
}

/// Result type for frame-layer operations.
pub type Result<T> = std::result::Result<T, Error>;
