//! Bounded request storage.
//!
//! All request data lives in fixed-size buffers sized at compile time, so
//! parsing never allocates. Fields hold at most [`FIELD_CAPACITY`] bytes and
//! the query list at most [`QUERY_CAPACITY`] entries; the parser reports an
//! overflow instead of truncating.

/// Maximum length of the filename and of each query name and value.
pub const FIELD_CAPACITY: usize = 16;

/// Maximum number of query entries per request.
pub const QUERY_CAPACITY: usize = 10;

/// A fixed-capacity text field holding printable ASCII.
///
/// Only the logical prefix up to the stored length is ever exposed, so
/// comparisons are length-aware: a field filled to capacity never compares
/// equal to a shorter name.
///
/// # Example
///
/// ```
/// # use dynhttp::http::request::FieldBuf;
/// let mut field = FieldBuf::new();
/// assert!(field.push(b'a'));
/// assert_eq!(field.as_str(), "a");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldBuf {
    buf: [u8; FIELD_CAPACITY],
    len: u8,
}

impl FieldBuf {
    pub const fn new() -> Self {
        Self {
            buf: [0; FIELD_CAPACITY],
            len: 0,
        }
    }

    /// Appends one byte. Returns `false` if the field is already full.
    pub fn push(&mut self, byte: u8) -> bool {
        if self.is_full() {
            return false;
        }
        self.buf[self.len as usize] = byte;
        self.len += 1;
        true
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len as usize >= FIELD_CAPACITY
    }

    /// The logical content of the field.
    pub fn as_str(&self) -> &str {
        // The parser only stores printable ASCII, so this cannot fail.
        std::str::from_utf8(&self.buf[..self.len as usize]).unwrap_or("")
    }
}

/// One `key=value` pair parsed from the query string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryEntry {
    pub name: FieldBuf,
    pub value: FieldBuf,
}

/// Fixed-capacity, insertion-ordered list of query entries.
///
/// Duplicate keys are kept as separate entries in arrival order.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryList {
    entries: [QueryEntry; QUERY_CAPACITY],
    len: u8,
}

impl QueryList {
    pub const fn new() -> Self {
        Self {
            entries: [QueryEntry {
                name: FieldBuf::new(),
                value: FieldBuf::new(),
            }; QUERY_CAPACITY],
            len: 0,
        }
    }

    /// Appends an entry. Returns `false` if the list is already full.
    pub fn push(&mut self, entry: QueryEntry) -> bool {
        if self.is_full() {
            return false;
        }
        self.entries[self.len as usize] = entry;
        self.len += 1;
        true
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len as usize >= QUERY_CAPACITY
    }

    pub fn entries(&self) -> &[QueryEntry] {
        &self.entries[..self.len as usize]
    }
}

/// A completed GET request: the requested filename and its query entries.
///
/// Owned by the parser for the lifetime of one connection and reset when a
/// new connection is served.
#[derive(Debug, Clone, Copy, Default)]
pub struct Request {
    pub(crate) filename: FieldBuf,
    pub(crate) query: QueryList,
}

impl Request {
    pub const fn new() -> Self {
        Self {
            filename: FieldBuf::new(),
            query: QueryList::new(),
        }
    }

    pub fn filename(&self) -> &str {
        self.filename.as_str()
    }

    pub fn query(&self) -> &QueryList {
        &self.query
    }
}
