//! Forward-only byte cursor shared by the vector and raster interpreters.
//!
//! Both protocols are scanned one byte at a time with at most one byte of
//! lookahead. The cursor owns no protocol knowledge beyond the numeric
//! argument grammar common to HPGL parameter lists.

use crate::error::{PlotError, Result};

const fn is_blank(b: u8) -> bool {
    matches!(b, b' ' | b'\r' | b'\n')
}

/// Forward-only cursor over an in-memory stream.
pub struct StreamCursor<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> StreamCursor<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Current position in stream
    pub fn tell(&self) -> usize {
        self.pos
    }

    /// Get remaining unread data
    pub fn remaining(&self) -> &'a [u8] {
        &self.data[self.pos..]
    }

    /// Check if at end of data
    pub fn at_end(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// Peek at current byte without advancing
    pub fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    /// Advance position by one
    pub fn advance(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.pos += 1;
        Some(b)
    }

    /// Consume exactly `len` bytes, or nothing if fewer remain.
    pub fn take(&mut self, len: usize) -> Option<&'a [u8]> {
        let end = self.pos.checked_add(len)?;
        let slice = self.data.get(self.pos..end)?;
        self.pos = end;
        Some(slice)
    }

    /// Skip bytes while `pred` holds.
    pub fn skip_while(&mut self, pred: impl Fn(u8) -> bool) {
        while let Some(b) = self.peek() {
            if !pred(b) {
                break;
            }
            self.pos += 1;
        }
    }

    /// Advance to just past the next occurrence of `needle`.
    ///
    /// Returns false (with the cursor at end of data) if it never occurs.
    pub fn skip_past(&mut self, needle: u8) -> bool {
        match self.remaining().iter().position(|&b| b == needle) {
            Some(offset) => {
                self.pos += offset + 1;
                true
            }
            None => {
                self.pos = self.data.len();
                false
            }
        }
    }

    /// Read a parameter list of the form `n[,n]...;`.
    ///
    /// Blanks (space, CR, LF) around values are ignored. The list ends at `;` (consumed)
    /// or at an alphabetic byte that begins the next mnemonic (left in
    /// place). Reaching the end of the stream before either is a
    /// truncation error attributed to `command`.
    pub fn read_params(&mut self, command: &str) -> Result<Vec<f64>> {
        let mut params = Vec::new();
        let mut expect_value = false;

        loop {
            self.skip_while(is_blank);
            let Some(b) = self.peek() else {
                // a bare mnemonic at the very end is still a complete command
                if params.is_empty() && !expect_value {
                    return Ok(params);
                }
                return Err(PlotError::eof(command, self.pos));
            };

            match b {
                b';' if !expect_value => {
                    self.pos += 1;
                    return Ok(params);
                }
                b if b.is_ascii_alphabetic() && !expect_value => return Ok(params),
                b'+' | b'-' | b'.' | b'0'..=b'9' => {
                    params.push(self.read_number(command)?);
                    self.skip_while(is_blank);
                    expect_value = false;
                    match self.peek() {
                        Some(b',') => {
                            self.pos += 1;
                            expect_value = true;
                        }
                        Some(b';') => {}
                        Some(b) if b.is_ascii_alphabetic() => {}
                        // blank-separated values
                        Some(b'+' | b'-' | b'.' | b'0'..=b'9') => {}
                        Some(other) => {
                            return Err(PlotError::malformed(
                                command,
                                self.pos,
                                format!("unexpected byte {:#04x} after value", other),
                            ));
                        }
                        None => return Err(PlotError::eof(command, self.pos)),
                    }
                }
                other => {
                    return Err(PlotError::malformed(
                        command,
                        self.pos,
                        format!("expected number, found byte {:#04x}", other),
                    ));
                }
            }
        }
    }

    /// Parse a single signed decimal number.
    fn read_number(&mut self, command: &str) -> Result<f64> {
        let start = self.pos;
        let mut has_dot = false;
        let mut has_digit = false;

        if matches!(self.peek(), Some(b'+') | Some(b'-')) {
            self.pos += 1;
        }

        while let Some(b) = self.peek() {
            if b.is_ascii_digit() {
                has_digit = true;
                self.pos += 1;
            } else if b == b'.' && !has_dot {
                has_dot = true;
                self.pos += 1;
            } else {
                break;
            }
        }

        let text = std::str::from_utf8(&self.data[start..self.pos]).unwrap_or_default();
        if !has_digit {
            return Err(PlotError::malformed(
                command,
                start,
                format!("invalid number {:?}", text),
            ));
        }
        text.parse::<f64>().map_err(|_| {
            PlotError::malformed(command, start, format!("invalid number {:?}", text))
        })
    }
}

/// Parse an ASCII signed integer argument.
pub fn parse_int(text: &[u8], command: &str, pos: usize) -> Result<i64> {
    std::str::from_utf8(text)
        .ok()
        .and_then(|s| s.parse::<i64>().ok())
        .ok_or_else(|| {
            PlotError::malformed(
                command,
                pos,
                format!("invalid integer {:?}", String::from_utf8_lossy(text)),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_params_semicolon_terminated() {
        let mut cursor = StreamCursor::new(b"100,-200, 3.5;PD");
        let params = cursor.read_params("PA").unwrap();
        assert_eq!(params, vec![100.0, -200.0, 3.5]);
        assert_eq!(cursor.remaining(), b"PD");
    }

    #[test]
    fn test_read_params_blank_separated() {
        let mut cursor = StreamCursor::new(b"10 20\r\n.5  -4;");
        let params = cursor.read_params("PD").unwrap();
        assert_eq!(params, vec![10.0, 20.0, 0.5, -4.0]);
        assert!(cursor.at_end());
    }

    #[test]
    fn test_read_params_stops_at_mnemonic() {
        let mut cursor = StreamCursor::new(b"1,2PD;");
        assert_eq!(cursor.read_params("PA").unwrap(), vec![1.0, 2.0]);
        assert_eq!(cursor.peek(), Some(b'P'));
    }

    #[test]
    fn test_read_params_empty() {
        let mut cursor = StreamCursor::new(b";");
        assert!(cursor.read_params("SC").unwrap().is_empty());
        assert!(cursor.at_end());
    }

    #[test]
    fn test_read_params_truncated() {
        let mut cursor = StreamCursor::new(b"10,20");
        match cursor.read_params("PA") {
            Err(PlotError::UnexpectedEof { command, pos }) => {
                assert_eq!(command, "PA");
                assert_eq!(pos, 5);
            }
            other => panic!("expected truncation, got {:?}", other),
        }
    }

    #[test]
    fn test_read_params_dangling_comma() {
        let mut cursor = StreamCursor::new(b"10,;");
        assert!(matches!(
            cursor.read_params("SR"),
            Err(PlotError::MalformedArgument { pos: 3, .. })
        ));
    }

    #[test]
    fn test_read_params_bare_sign() {
        let mut cursor = StreamCursor::new(b"-;");
        assert!(matches!(
            cursor.read_params("PA"),
            Err(PlotError::MalformedArgument { pos: 0, .. })
        ));
    }

    #[test]
    fn test_take_and_skip_past() {
        let mut cursor = StreamCursor::new(b"abc\x1bdef");
        assert!(cursor.skip_past(0x1b));
        assert_eq!(cursor.take(2), Some(&b"de"[..]));
        assert_eq!(cursor.take(5), None);
        assert_eq!(cursor.tell(), 6);
        assert!(!cursor.skip_past(0x1b));
        assert!(cursor.at_end());
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int(b"-4", "*r#U", 0).unwrap(), -4);
        assert!(parse_int(b"", "*b#M", 7).is_err());
        assert!(parse_int(b"1-2", "*b#M", 7).is_err());
    }
}
