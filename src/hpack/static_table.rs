//! The HPACK static table (RFC 7541 Appendix A).
//!
//! 61 fixed header-field entries, indexed 1 through 61 on the wire.
//! The write path consults this table to prefer an index over a literal
//! name, and an indexed representation over any literal when both name
//! and value match. Name comparison is case-insensitive; header names
//! are lowercase on the HTTP/2 wire but callers may hold mixed case.

/// Entries 1..=61, stored zero-based.
pub const STATIC_TABLE: [(&str, &str); 61] = [
    (":authority", ""),
    (":method", "GET"),
    (":method", "POST"),
    (":path", "/"),
    (":path", "/index.html"),
    (":scheme", "http"),
    (":scheme", "https"),
    (":status", "200"),
    (":status", "204"),
    (":status", "206"),
    (":status", "304"),
    (":status", "400"),
    (":status", "404"),
    (":status", "500"),
    ("accept-charset", ""),
    ("accept-encoding", "gzip, deflate"),
    ("accept-language", ""),
    ("accept-ranges", ""),
    ("accept", ""),
    ("access-control-allow-origin", ""),
    ("age", ""),
    ("allow", ""),
    ("authorization", ""),
    ("cache-control", ""),
    ("content-disposition", ""),
    ("content-encoding", ""),
    ("content-language", ""),
    ("content-length", ""),
    ("content-location", ""),
    ("content-range", ""),
    ("content-type", ""),
    ("cookie", ""),
    ("date", ""),
    ("etag", ""),
    ("expect", ""),
    ("expires", ""),
    ("from", ""),
    ("host", ""),
    ("if-match", ""),
    ("if-modified-since", ""),
    ("if-none-match", ""),
    ("if-range", ""),
    ("if-unmodified-since", ""),
    ("last-modified", ""),
    ("link", ""),
    ("location", ""),
    ("max-forwards", ""),
    ("proxy-authenticate", ""),
    ("proxy-authorization", ""),
    ("range", ""),
    ("referer", ""),
    ("refresh", ""),
    ("retry-after", ""),
    ("server", ""),
    ("set-cookie", ""),
    ("strict-transport-security", ""),
    ("transfer-encoding", ""),
    ("user-agent", ""),
    ("vary", ""),
    ("via", ""),
    ("www-authenticate", ""),
];

/// Outcome of a static-table search. Indices are 1-based wire indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// Name and value both match this index.
    Full(u64),
    /// Only the name matches this index (the first such entry).
    Name(u64),
    /// Nothing matches.
    Miss,
}

/// Search the table for a header field.
///
/// Prefers a full name+value match anywhere in the table over a
/// name-only match; among name-only matches the lowest index wins
/// (`:method` maps to 2, not 3).
pub fn lookup(name: &str, value: &str) -> Lookup {
    let mut name_match: Option<u64> = None;
    for (position, (entry_name, entry_value)) in STATIC_TABLE.iter().enumerate() {
        if !entry_name.eq_ignore_ascii_case(name) {
            continue;
        }
        let index = position as u64 + 1;
        if *entry_value == value {
            return Lookup::Full(index);
        }
        name_match.get_or_insert(index);
    }
    match name_match {
        Some(index) => Lookup::Name(index),
        None => Lookup::Miss,
    }
}

/// The entry at a 1-based wire index, if it is a static-table index.
pub fn entry(index: u64) -> Option<(&'static str, &'static str)> {
    if (1..=STATIC_TABLE.len() as u64).contains(&index) {
        Some(STATIC_TABLE[index as usize - 1])
    } else {
        None
    }
}
