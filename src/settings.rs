//! Connection settings carried by SETTINGS frames.
//!
//! RFC 7540 Section 6.5 defines six parameters, each independently
//! present or absent in a given frame. Absence is meaningful (a peer that
//! omits ENABLE_PUSH has not disabled push), so every field is an
//! `Option` and parsing records exactly the identifiers that appeared.

use crate::error::{Error, Result};
use std::fmt;

/// Lower bound a peer may advertise for SETTINGS_MAX_FRAME_SIZE.
pub const MIN_MAX_FRAME_SIZE: u32 = 16_384;

/// Upper bound for SETTINGS_MAX_FRAME_SIZE (2^24 - 1).
pub const MAX_MAX_FRAME_SIZE: u32 = 16_777_215;

/// Upper bound for SETTINGS_INITIAL_WINDOW_SIZE (2^31 - 1).
pub const MAX_INITIAL_WINDOW_SIZE: u32 = 0x7FFF_FFFF;

/// The setting identifiers defined by RFC 7540 Section 6.5.2.
///
/// Identifiers outside this set are legal on the wire and ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum SettingsParameter {
    /// SETTINGS_HEADER_TABLE_SIZE (0x1)
    HeaderTableSize = 0x1,
    /// SETTINGS_ENABLE_PUSH (0x2)
    EnablePush = 0x2,
    /// SETTINGS_MAX_CONCURRENT_STREAMS (0x3)
    MaxConcurrentStreams = 0x3,
    /// SETTINGS_INITIAL_WINDOW_SIZE (0x4)
    InitialWindowSize = 0x4,
    /// SETTINGS_MAX_FRAME_SIZE (0x5)
    MaxFrameSize = 0x5,
    /// SETTINGS_MAX_HEADER_LIST_SIZE (0x6)
    MaxHeaderListSize = 0x6,
}

impl SettingsParameter {
    /// Wire identifier.
    pub fn as_u16(self) -> u16 {
        self as u16
    }

    /// Map a wire identifier to a known parameter.
    pub fn from_u16(value: u16) -> Option<Self> {
        match value {
            0x1 => Some(SettingsParameter::HeaderTableSize),
            0x2 => Some(SettingsParameter::EnablePush),
            0x3 => Some(SettingsParameter::MaxConcurrentStreams),
            0x4 => Some(SettingsParameter::InitialWindowSize),
            0x5 => Some(SettingsParameter::MaxFrameSize),
            0x6 => Some(SettingsParameter::MaxHeaderListSize),
            _ => None,
        }
    }

    /// RFC 7540 name of the parameter.
    pub fn name(&self) -> &'static str {
        match self {
            SettingsParameter::HeaderTableSize => "HEADER_TABLE_SIZE",
            SettingsParameter::EnablePush => "ENABLE_PUSH",
            SettingsParameter::MaxConcurrentStreams => "MAX_CONCURRENT_STREAMS",
            SettingsParameter::InitialWindowSize => "INITIAL_WINDOW_SIZE",
            SettingsParameter::MaxFrameSize => "MAX_FRAME_SIZE",
            SettingsParameter::MaxHeaderListSize => "MAX_HEADER_LIST_SIZE",
        }
    }
}

impl fmt::Display for SettingsParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (0x{:x})", self.name(), self.as_u16())
    }
}

/// A set of HTTP/2 settings, as carried by one SETTINGS frame or as the
/// accumulated state of a connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Header table size (default: 4096)
    pub header_table_size: Option<u32>,

    /// Enable server push (default: true)
    pub enable_push: Option<bool>,

    /// Maximum concurrent streams (default: unlimited)
    pub max_concurrent_streams: Option<u32>,

    /// Initial window size (default: 65535, max 2^31-1)
    pub initial_window_size: Option<u32>,

    /// Maximum frame size (default: 16384, range 16384-16777215)
    pub max_frame_size: Option<u32>,

    /// Maximum header list size (default: unlimited)
    pub max_header_list_size: Option<u32>,
}

impl Settings {
    /// Settings with every parameter absent.
    pub fn new() -> Self {
        Settings {
            header_table_size: None,
            enable_push: None,
            max_concurrent_streams: None,
            initial_window_size: None,
            max_frame_size: None,
            max_header_list_size: None,
        }
    }

    /// Settings carrying the RFC 7540 initial values explicitly.
    pub fn default_settings() -> Self {
        Settings {
            header_table_size: Some(4096),
            enable_push: Some(true),
            max_concurrent_streams: None,
            initial_window_size: Some(65_535),
            max_frame_size: Some(MIN_MAX_FRAME_SIZE),
            max_header_list_size: None,
        }
    }

    /// True if no parameter is present (an ACK frame's settings).
    pub fn is_empty(&self) -> bool {
        self.header_table_size.is_none()
            && self.enable_push.is_none()
            && self.max_concurrent_streams.is_none()
            && self.initial_window_size.is_none()
            && self.max_frame_size.is_none()
            && self.max_header_list_size.is_none()
    }

    /// Header table size, defaulted per RFC 7540.
    pub fn get_header_table_size(&self) -> u32 {
        self.header_table_size.unwrap_or(4096)
    }

    /// Enable push, defaulted per RFC 7540.
    pub fn get_enable_push(&self) -> bool {
        self.enable_push.unwrap_or(true)
    }

    /// Max concurrent streams; `None` means unlimited.
    pub fn get_max_concurrent_streams(&self) -> Option<u32> {
        self.max_concurrent_streams
    }

    /// Initial window size, defaulted per RFC 7540.
    pub fn get_initial_window_size(&self) -> u32 {
        self.initial_window_size.unwrap_or(65_535)
    }

    /// Max frame size, defaulted per RFC 7540. Every frame validation
    /// bounds its payload length by this value.
    pub fn get_max_frame_size(&self) -> u32 {
        self.max_frame_size.unwrap_or(MIN_MAX_FRAME_SIZE)
    }

    /// Max header list size; `None` means unlimited.
    pub fn get_max_header_list_size(&self) -> Option<u32> {
        self.max_header_list_size
    }

    /// Apply one identifier/value pair as read off the wire.
    ///
    /// Unknown identifiers are ignored per RFC 7540 Section 6.5.2. Known
    /// identifiers with out-of-range values fail here, at assignment time:
    /// ENABLE_PUSH and MAX_FRAME_SIZE violations are protocol errors,
    /// INITIAL_WINDOW_SIZE overflow is a flow-control error.
    pub fn apply(&mut self, identifier: u16, value: u32) -> Result<()> {
        let Some(parameter) = SettingsParameter::from_u16(identifier) else {
            return Ok(());
        };
        match parameter {
            SettingsParameter::HeaderTableSize => self.header_table_size = Some(value),
            SettingsParameter::EnablePush => {
                self.enable_push = match value {
                    0 => Some(false),
                    1 => Some(true),
                    other => {
                        return Err(Error::protocol(format!(
                            "ENABLE_PUSH must be 0 or 1, got {other}"
                        )))
                    }
                };
            }
            SettingsParameter::MaxConcurrentStreams => self.max_concurrent_streams = Some(value),
            SettingsParameter::InitialWindowSize => {
                if value > MAX_INITIAL_WINDOW_SIZE {
                    return Err(Error::flow_control(format!(
                        "INITIAL_WINDOW_SIZE {value} exceeds 2^31-1"
                    )));
                }
                self.initial_window_size = Some(value);
            }
            SettingsParameter::MaxFrameSize => {
                if !(MIN_MAX_FRAME_SIZE..=MAX_MAX_FRAME_SIZE).contains(&value) {
                    return Err(Error::protocol(format!(
                        "MAX_FRAME_SIZE {value} outside [{MIN_MAX_FRAME_SIZE}, {MAX_MAX_FRAME_SIZE}]"
                    )));
                }
                self.max_frame_size = Some(value);
            }
            SettingsParameter::MaxHeaderListSize => self.max_header_list_size = Some(value),
        }
        Ok(())
    }

    /// The identifier/value pairs present, in wire order. Each pair costs
    /// 6 bytes when serialized.
    pub fn pairs(&self) -> Vec<(SettingsParameter, u32)> {
        let mut pairs = Vec::new();
        if let Some(v) = self.header_table_size {
            pairs.push((SettingsParameter::HeaderTableSize, v));
        }
        if let Some(v) = self.enable_push {
            pairs.push((SettingsParameter::EnablePush, u32::from(v)));
        }
        if let Some(v) = self.max_concurrent_streams {
            pairs.push((SettingsParameter::MaxConcurrentStreams, v));
        }
        if let Some(v) = self.initial_window_size {
            pairs.push((SettingsParameter::InitialWindowSize, v));
        }
        if let Some(v) = self.max_frame_size {
            pairs.push((SettingsParameter::MaxFrameSize, v));
        }
        if let Some(v) = self.max_header_list_size {
            pairs.push((SettingsParameter::MaxHeaderListSize, v));
        }
        pairs
    }

    /// Serialized payload length of these settings.
    pub fn wire_len(&self) -> usize {
        self.pairs().len() * 6
    }

    /// Check the values currently held, using the same rules as [`apply`].
    ///
    /// [`apply`]: Settings::apply
    pub fn validate(&self) -> Result<()> {
        if let Some(size) = self.initial_window_size {
            if size > MAX_INITIAL_WINDOW_SIZE {
                return Err(Error::flow_control(format!(
                    "INITIAL_WINDOW_SIZE {size} exceeds 2^31-1"
                )));
            }
        }
        if let Some(size) = self.max_frame_size {
            if !(MIN_MAX_FRAME_SIZE..=MAX_MAX_FRAME_SIZE).contains(&size) {
                return Err(Error::protocol(format!(
                    "MAX_FRAME_SIZE {size} outside [{MIN_MAX_FRAME_SIZE}, {MAX_MAX_FRAME_SIZE}]"
                )));
            }
        }
        Ok(())
    }

    /// Overlay another settings set; present values in `other` win.
    pub fn merge(&mut self, other: &Settings) {
        if other.header_table_size.is_some() {
            self.header_table_size = other.header_table_size;
        }
        if other.enable_push.is_some() {
            self.enable_push = other.enable_push;
        }
        if other.max_concurrent_streams.is_some() {
            self.max_concurrent_streams = other.max_concurrent_streams;
        }
        if other.initial_window_size.is_some() {
            self.initial_window_size = other.initial_window_size;
        }
        if other.max_frame_size.is_some() {
            self.max_frame_size = other.max_frame_size;
        }
        if other.max_header_list_size.is_some() {
            self.max_header_list_size = other.max_header_list_size;
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings::new()
    }
}

/// Builder for [`Settings`].
pub struct SettingsBuilder {
    settings: Settings,
}

impl SettingsBuilder {
    pub fn new() -> Self {
        SettingsBuilder {
            settings: Settings::new(),
        }
    }

    pub fn header_table_size(mut self, size: u32) -> Self {
        self.settings.header_table_size = Some(size);
        self
    }

    pub fn enable_push(mut self, enable: bool) -> Self {
        self.settings.enable_push = Some(enable);
        self
    }

    pub fn max_concurrent_streams(mut self, max: u32) -> Self {
        self.settings.max_concurrent_streams = Some(max);
        self
    }

    pub fn initial_window_size(mut self, size: u32) -> Self {
        self.settings.initial_window_size = Some(size);
        self
    }

    pub fn max_frame_size(mut self, size: u32) -> Self {
        self.settings.max_frame_size = Some(size);
        self
    }

    pub fn max_header_list_size(mut self, size: u32) -> Self {
        self.settings.max_header_list_size = Some(size);
        self
    }

    /// Validate and produce the settings.
    pub fn build(self) -> Result<Settings> {
        self.settings.validate()?;
        Ok(self.settings)
    }
}

impl Default for SettingsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_conversion() {
        assert_eq!(SettingsParameter::HeaderTableSize.as_u16(), 0x1);
        assert_eq!(SettingsParameter::MaxHeaderListSize.as_u16(), 0x6);

        assert_eq!(
            SettingsParameter::from_u16(0x4),
            Some(SettingsParameter::InitialWindowSize)
        );
        assert_eq!(SettingsParameter::from_u16(0x7), None);
        assert_eq!(SettingsParameter::from_u16(0xff), None);
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::new();
        assert!(settings.is_empty());
        assert_eq!(settings.get_header_table_size(), 4096);
        assert!(settings.get_enable_push());
        assert_eq!(settings.get_initial_window_size(), 65_535);
        assert_eq!(settings.get_max_frame_size(), 16_384);
        assert_eq!(settings.get_max_concurrent_streams(), None);
    }

    #[test]
    fn test_apply_known_identifiers() {
        let mut settings = Settings::new();
        settings.apply(0x1, 8192).unwrap();
        settings.apply(0x2, 0).unwrap();
        settings.apply(0x3, 100).unwrap();
        settings.apply(0x4, 131_072).unwrap();

        assert_eq!(settings.header_table_size, Some(8192));
        assert_eq!(settings.enable_push, Some(false));
        assert_eq!(settings.max_concurrent_streams, Some(100));
        assert_eq!(settings.initial_window_size, Some(131_072));
    }

    #[test]
    fn test_apply_ignores_unknown_identifiers() {
        let mut settings = Settings::new();
        settings.apply(0x8, 1).unwrap();
        settings.apply(0xabcd, 42).unwrap();
        assert!(settings.is_empty());
    }

    #[test]
    fn test_apply_rejects_bad_enable_push() {
        let mut settings = Settings::new();
        let err = settings.apply(0x2, 2).unwrap_err();
        assert!(matches!(err, Error::Protocol { .. }));
        assert!(err.is_connection_error());
    }

    #[test]
    fn test_apply_rejects_window_overflow() {
        let mut settings = Settings::new();
        let err = settings.apply(0x4, 0x8000_0000).unwrap_err();
        assert!(matches!(err, Error::FlowControl { .. }));
    }

    #[test]
    fn test_apply_rejects_frame_size_out_of_range() {
        let mut settings = Settings::new();
        assert!(matches!(
            settings.apply(0x5, 1024),
            Err(Error::Protocol { .. })
        ));
        assert!(matches!(
            settings.apply(0x5, 16_777_216),
            Err(Error::Protocol { .. })
        ));
        settings.apply(0x5, 16_384).unwrap();
        settings.apply(0x5, 16_777_215).unwrap();
    }

    #[test]
    fn test_pairs_and_wire_len() {
        let settings = SettingsBuilder::new()
            .header_table_size(8192)
            .enable_push(false)
            .initial_window_size(65_535)
            .build()
            .unwrap();

        let pairs = settings.pairs();
        assert_eq!(pairs.len(), 3);
        assert_eq!(settings.wire_len(), 18);
        assert_eq!(pairs[0], (SettingsParameter::HeaderTableSize, 8192));
        assert_eq!(pairs[1], (SettingsParameter::EnablePush, 0));
        assert_eq!(pairs[2], (SettingsParameter::InitialWindowSize, 65_535));
    }

    #[test]
    fn test_builder_validation() {
        assert!(SettingsBuilder::new()
            .initial_window_size(0x7FFF_FFFF)
            .max_frame_size(16_384)
            .build()
            .is_ok());

        assert!(SettingsBuilder::new()
            .initial_window_size(0x8000_0000)
            .build()
            .is_err());

        assert!(SettingsBuilder::new().max_frame_size(1024).build().is_err());
    }

    #[test]
    fn test_merge() {
        let mut base = SettingsBuilder::new()
            .header_table_size(4096)
            .enable_push(true)
            .build()
            .unwrap();

        let update = SettingsBuilder::new()
            .header_table_size(8192)
            .max_concurrent_streams(100)
            .build()
            .unwrap();

        base.merge(&update);

        assert_eq!(base.get_header_table_size(), 8192);
        assert!(base.get_enable_push());
        assert_eq!(base.get_max_concurrent_streams(), Some(100));
    }
}
