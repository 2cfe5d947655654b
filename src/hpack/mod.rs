//! HPACK write-path primitives (RFC 7541).
//!
//! The frame layer carries compressed header blocks opaquely; what it
//! owns is the construction of individual field representations for the
//! HEADERS write path: the prefix-integer encoder, the static-table
//! lookup, the Huffman transform for string literals, and the
//! field-representation grammar of RFC 7541 Section 6. Dynamic-table
//! state (full compression contexts) belongs to the layer above.

pub mod huffman;
pub mod integer;
pub mod static_table;

pub use static_table::{lookup, Lookup};

/// How a literal field names its header: by table index or by spelling
/// the name out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldName {
    /// 1-based index into the static table
    Index(u64),
    /// A literal name, sent as a string
    New(String),
}

/// One HPACK header-field representation (RFC 7541 Section 6).
///
/// `encode` produces the exact wire bytes: the pattern-prefixed index or
/// zero marker, then the name string when new, then the value string.
/// String literals are Huffman-transformed whenever that is shorter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderField {
    /// Section 6.1 - both name and value are a single table index
    Indexed(u64),
    /// Section 6.2.1 - literal, to be added to the decoder's dynamic table
    LiteralWithIndexing { name: FieldName, value: String },
    /// Section 6.2.2 - literal, not added to the dynamic table
    LiteralWithoutIndexing { name: FieldName, value: String },
    /// Section 6.2.3 - literal that intermediaries must never index
    LiteralNeverIndexed { name: FieldName, value: String },
}

impl HeaderField {
    /// Pick the cheapest representation for a (name, value) pair using
    /// the static table: a full match becomes an indexed field (the
    /// joint method+value encoding pseudo-headers get, e.g. `:method`
    /// GET is the single byte 0x82), a name match reuses the name index,
    /// anything else spells the name out. No dynamic-table entries are
    /// assumed on the decoder side.
    pub fn for_pair(name: &str, value: &str) -> Self {
        match static_table::lookup(name, value) {
            Lookup::Full(index) => HeaderField::Indexed(index),
            Lookup::Name(index) => HeaderField::LiteralWithoutIndexing {
                name: FieldName::Index(index),
                value: value.to_string(),
            },
            Lookup::Miss => HeaderField::LiteralWithoutIndexing {
                name: FieldName::New(name.to_ascii_lowercase()),
                value: value.to_string(),
            },
        }
    }

    /// Like [`for_pair`], but marked never-indexed for sensitive values
    /// (authorization tokens, cookies).
    ///
    /// [`for_pair`]: HeaderField::for_pair
    pub fn never_indexed(name: &str, value: &str) -> Self {
        let name = match static_table::lookup(name, value) {
            Lookup::Full(index) | Lookup::Name(index) => FieldName::Index(index),
            Lookup::Miss => FieldName::New(name.to_ascii_lowercase()),
        };
        HeaderField::LiteralNeverIndexed {
            name,
            value: value.to_string(),
        }
    }

    /// Serialize this representation to wire bytes.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::new();
        match self {
            HeaderField::Indexed(index) => {
                integer::encode_into(&mut out, 0x80, 7, *index);
            }
            HeaderField::LiteralWithIndexing { name, value } => {
                Self::encode_name(&mut out, 0x40, 6, name);
                Self::encode_string(&mut out, value.as_bytes());
            }
            HeaderField::LiteralWithoutIndexing { name, value } => {
                Self::encode_name(&mut out, 0x00, 4, name);
                Self::encode_string(&mut out, value.as_bytes());
            }
            HeaderField::LiteralNeverIndexed { name, value } => {
                Self::encode_name(&mut out, 0x10, 4, name);
                Self::encode_string(&mut out, value.as_bytes());
            }
        }
        out
    }

    fn encode_name(out: &mut Vec<u8>, pattern: u8, prefix_bits: u8, name: &FieldName) {
        match name {
            FieldName::Index(index) => {
                integer::encode_into(out, pattern, prefix_bits, *index);
            }
            FieldName::New(name) => {
                // Index 0 marks a literal name
                out.push(pattern);
                Self::encode_string(out, name.as_bytes());
            }
        }
    }

    /// String literal (RFC 7541 Section 5.2): H bit, 7-bit-prefix
    /// length, then the octets, Huffman-transformed when shorter.
    fn encode_string(out: &mut Vec<u8>, data: &[u8]) {
        if huffman::encoded_len(data) < data.len() {
            let encoded = huffman::encode(data);
            integer::encode_into(out, 0x80, 7, encoded.len() as u64);
            out.extend_from_slice(&encoded);
        } else {
            integer::encode_into(out, 0x00, 7, data.len() as u64);
            out.extend_from_slice(data);
        }
    }
}
