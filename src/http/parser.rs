use crate::http::request::{FieldBuf, QueryEntry, Request};

/// The request-line prefix every request must start with.
const METHOD_PREFIX: &[u8] = b"GET /";

/// Terminal parse failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The first five bytes did not match the literal `GET /`.
    BadRequest,
    /// A field or the query list grew past its fixed capacity.
    Overflow,
    /// A byte illegal for the current grammar state.
    WrongChar,
}

/// Result of feeding one byte to the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedOutcome {
    /// More bytes are needed.
    Continue,
    /// The request line is complete; the request can be served.
    Complete,
    /// The request is malformed. Terminal: later bytes are not processed.
    Error(ParseError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    AwaitMethod,
    InFilename,
    InQueryName,
    InQueryValue,
    Done,
    Failed(ParseError),
}

/// Incremental parser for the HTTP/1.0 GET request line.
///
/// Grammar: `"GET /" filename ( '?' name '=' value ( '&' name '=' value )* )? ' '`.
///
/// Bytes are consumed one at a time and accumulated into bounded storage;
/// chunk boundaries are invisible to the grammar. Work per byte is O(1) and
/// nothing is ever re-read.
#[derive(Debug)]
pub struct RequestParser {
    state: State,
    /// Position within the `GET /` literal.
    cursor: usize,
    request: Request,
    name: FieldBuf,
    value: FieldBuf,
}

impl Default for RequestParser {
    fn default() -> Self {
        Self::new()
    }
}

impl RequestParser {
    pub fn new() -> Self {
        Self {
            state: State::AwaitMethod,
            cursor: 0,
            request: Request::new(),
            name: Default::default(),
            value: Default::default(),
        }
    }

    /// Returns the parser to its initial state, discarding accumulated data.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// The parsed request. Meaningful once `feed` has returned
    /// [`FeedOutcome::Complete`].
    pub fn request(&self) -> &Request {
        &self.request
    }

    /// Processes one byte and advances the state machine.
    ///
    /// Bytes outside printable ASCII (0x20..=0x7E) are ignored in every
    /// state. After a terminal outcome the same outcome is returned for any
    /// further byte.
    pub fn feed(&mut self, byte: u8) -> FeedOutcome {
        match self.state {
            State::Done => return FeedOutcome::Complete,
            State::Failed(e) => return FeedOutcome::Error(e),
            _ => {}
        }

        if !(0x20..=0x7E).contains(&byte) {
            return FeedOutcome::Continue;
        }

        match self.state {
            State::AwaitMethod => {
                if byte != METHOD_PREFIX[self.cursor] {
                    return self.fail(ParseError::BadRequest);
                }
                self.cursor += 1;
                if self.cursor == METHOD_PREFIX.len() {
                    self.state = State::InFilename;
                }
                FeedOutcome::Continue
            }

            State::InFilename => match byte {
                b' ' => {
                    self.state = State::Done;
                    FeedOutcome::Complete
                }
                b'?' => {
                    self.state = State::InQueryName;
                    FeedOutcome::Continue
                }
                _ if self.request.filename.is_full() => self.fail(ParseError::Overflow),
                _ if is_filename_byte(byte) => {
                    self.request.filename.push(byte);
                    FeedOutcome::Continue
                }
                _ => self.fail(ParseError::WrongChar),
            },

            State::InQueryName => match byte {
                // An 11th entry overflows as soon as its name begins,
                // whatever the byte is.
                _ if self.request.query.is_full() => self.fail(ParseError::Overflow),
                b'=' => {
                    self.state = State::InQueryValue;
                    FeedOutcome::Continue
                }
                _ if self.name.is_full() => self.fail(ParseError::Overflow),
                _ if is_name_byte(byte) => {
                    self.name.push(byte);
                    FeedOutcome::Continue
                }
                _ => self.fail(ParseError::WrongChar),
            },

            State::InQueryValue => match byte {
                b' ' => {
                    self.finish_entry();
                    self.state = State::Done;
                    FeedOutcome::Complete
                }
                b'&' => {
                    self.finish_entry();
                    self.state = State::InQueryName;
                    FeedOutcome::Continue
                }
                _ if self.value.is_full() => self.fail(ParseError::Overflow),
                // '+' decodes to a literal space.
                b'+' => {
                    self.value.push(b' ');
                    FeedOutcome::Continue
                }
                _ if is_value_byte(byte) => {
                    self.value.push(byte);
                    FeedOutcome::Continue
                }
                _ => self.fail(ParseError::WrongChar),
            },

            State::Done | State::Failed(_) => unreachable!("handled above"),
        }
    }

    fn finish_entry(&mut self) {
        self.request.query.push(QueryEntry {
            name: self.name,
            value: self.value,
        });
        self.name = Default::default();
        self.value = Default::default();
    }

    fn fail(&mut self, error: ParseError) -> FeedOutcome {
        self.state = State::Failed(error);
        FeedOutcome::Error(error)
    }
}

fn is_filename_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'.'
}

fn is_name_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'.' || byte == b'_'
}

fn is_value_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'.' || byte == b'-'
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_all(parser: &mut RequestParser, bytes: &[u8]) -> FeedOutcome {
        let mut last = FeedOutcome::Continue;
        for &b in bytes {
            last = parser.feed(b);
            if last != FeedOutcome::Continue {
                break;
            }
        }
        last
    }

    #[test]
    fn parse_filename_only_request() {
        let mut parser = RequestParser::new();
        let outcome = feed_all(&mut parser, b"GET /index.htm ");

        assert_eq!(outcome, FeedOutcome::Complete);
        assert_eq!(parser.request().filename(), "index.htm");
        assert!(parser.request().query().is_empty());
    }

    #[test]
    fn parse_request_with_query() {
        let mut parser = RequestParser::new();
        let outcome = feed_all(&mut parser, b"GET /testform.htm?a=1&b=two ");

        assert_eq!(outcome, FeedOutcome::Complete);
        assert_eq!(parser.request().filename(), "testform.htm");
        let entries = parser.request().query().entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name.as_str(), "a");
        assert_eq!(entries[0].value.as_str(), "1");
        assert_eq!(entries[1].name.as_str(), "b");
        assert_eq!(entries[1].value.as_str(), "two");
    }
}
