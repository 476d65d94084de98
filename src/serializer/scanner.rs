//! Text scanner
//!
//! Cursor over the roster text with the field readers the format needs.
//! Integer reads skip leading whitespace across lines; grade reads never
//! leave the current line.

/// Forward-only cursor over a roster file's text
pub(super) struct Scanner<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub(super) fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    fn rest(&self) -> &'a str {
        &self.text[self.pos..]
    }

    fn bytes(&self) -> &'a [u8] {
        self.rest().as_bytes()
    }

    /// Skip whitespace, line breaks included
    pub(super) fn skip_whitespace(&mut self) {
        let skipped = self
            .bytes()
            .iter()
            .take_while(|b| b.is_ascii_whitespace())
            .count();
        self.pos += skipped;
    }

    /// Skip whitespace up to, not including, the next line break
    fn skip_inline_whitespace(&mut self) {
        let skipped = self
            .bytes()
            .iter()
            .take_while(|&&b| b != b'\n' && b.is_ascii_whitespace())
            .count();
        self.pos += skipped;
    }

    /// Discard everything up to and including the next line break
    pub(super) fn skip_rest_of_line(&mut self) {
        match self.rest().find('\n') {
            Some(offset) => self.pos += offset + 1,
            None => self.pos = self.text.len(),
        }
    }

    /// Read a signed decimal integer after optional whitespace
    ///
    /// Returns `None` when no digits follow or the value overflows `i64`.
    pub(super) fn read_int(&mut self) -> Option<i64> {
        self.skip_whitespace();
        let bytes = self.bytes();
        let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
        let digits = bytes[sign..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if digits == 0 {
            return None;
        }
        let end = sign + digits;
        let value = self.rest()[..end].parse::<i64>().ok()?;
        self.pos += end;
        Some(value)
    }

    /// Read at most `max_chars` characters, stopping at the end of the line
    ///
    /// A line break that ends the read is consumed and a trailing `\r` is
    /// dropped. When the limit is hit first, the remainder of the line stays
    /// in the stream. Returns `None` only at end of input.
    pub(super) fn read_line(&mut self, max_chars: usize) -> Option<String> {
        let rest = self.rest();
        if rest.is_empty() {
            return None;
        }

        let mut end = rest.len();
        let mut consumed = rest.len();
        for (taken, (offset, ch)) in rest.char_indices().enumerate() {
            if ch == '\n' {
                end = offset;
                consumed = offset + 1;
                break;
            }
            if taken == max_chars {
                end = offset;
                consumed = offset;
                break;
            }
        }

        self.pos += consumed;
        let line = &rest[..end];
        Some(line.strip_suffix('\r').unwrap_or(line).to_string())
    }

    /// Read a floating-point value from the current line
    ///
    /// Accepts an optional sign, digits with an optional fraction, and an
    /// optional exponent. Leaves the cursor untouched past the skipped
    /// whitespace when no number is found.
    pub(super) fn read_float_on_line(&mut self) -> Option<f32> {
        self.skip_inline_whitespace();
        let bytes = self.bytes();

        let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
        let int_digits = count_digits(&bytes[end..]);
        end += int_digits;

        let mut frac_digits = 0;
        if bytes.get(end) == Some(&b'.') {
            frac_digits = count_digits(&bytes[end + 1..]);
            end += 1 + frac_digits;
        }
        if int_digits + frac_digits == 0 {
            return None;
        }

        if matches!(bytes.get(end), Some(b'e' | b'E')) {
            let mut exp_end = end + 1;
            if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
                exp_end += 1;
            }
            let exp_digits = count_digits(&bytes[exp_end.min(bytes.len())..]);
            if exp_digits > 0 {
                end = exp_end + exp_digits;
            }
        }

        let value = self.rest()[..end].parse::<f32>().ok()?;
        self.pos += end;
        Some(value)
    }
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
