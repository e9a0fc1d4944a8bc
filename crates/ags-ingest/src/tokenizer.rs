//! Line splitting and quoted-field extraction.
//!
//! # Tolerance policy
//!
//! Field extraction is deliberately lenient so that malformed files still
//! produce a best-effort document:
//!
//! - Bytes outside double quotes are skipped. A stray separator such as
//!   `"A";"B"` still yields the fields `A` and `B`.
//! - Inside a quoted span, a doubled quote (`""`) is an escaped quote.
//! - A span left open at end of line runs to the end of the line.
//!
//! Every deviation tolerated here is reported separately by the raw-text
//! rules; the tokenizer itself never fails.

/// One physical line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// 1-based line number.
    pub number: usize,
    /// Line content without its terminator.
    pub text: &'a str,
    /// Whether the line ended with CR+LF.
    pub crlf: bool,
}

impl Line<'_> {
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Split text into lines on `\n`, dropping a trailing `\r` from each line.
///
/// A final `\n` does not open an empty trailing line.
pub fn lines(text: &str) -> impl Iterator<Item = Line<'_>> {
    let mut segments = text.split('\n').peekable();
    let mut number = 0;
    std::iter::from_fn(move || {
        let segment = segments.next()?;
        let is_last = segments.peek().is_none();
        if is_last && segment.is_empty() {
            return None;
        }
        number += 1;
        let (body, had_cr) = match segment.strip_suffix('\r') {
            Some(body) => (body, true),
            None => (segment, false),
        };
        Some(Line {
            number,
            text: body,
            crlf: had_cr && !is_last,
        })
    })
}

/// Extract the quoted fields of a line, in order.
pub fn quoted_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '"' {
            continue;
        }
        let mut current = String::new();
        loop {
            match chars.next() {
                Some('"') if chars.peek() == Some(&'"') => {
                    current.push('"');
                    chars.next();
                }
                Some('"') | None => break,
                Some(other) => current.push(other),
            }
        }
        fields.push(current);
    }

    fields
}

/// Quote a value for output, doubling embedded quotes.
pub fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_crlf_and_lf_lines() {
        let collected: Vec<_> = lines("\"A\"\r\n\"B\"\n\"C\"").collect();
        assert_eq!(collected.len(), 3);
        assert_eq!(collected[0].text, "\"A\"");
        assert!(collected[0].crlf);
        assert!(!collected[1].crlf);
        assert_eq!(collected[2].number, 3);
        assert!(!collected[2].crlf);
    }

    #[test]
    fn trailing_newline_does_not_add_a_line() {
        assert_eq!(lines("\"A\"\r\n").count(), 1);
        assert_eq!(lines("").count(), 0);
    }

    #[test]
    fn unterminated_cr_is_not_crlf() {
        let collected: Vec<_> = lines("\"A\"\r").collect();
        assert_eq!(collected[0].text, "\"A\"");
        assert!(!collected[0].crlf);
    }

    #[test]
    fn extracts_fields_and_skips_stray_bytes() {
        assert_eq!(quoted_fields(r#""DATA","BH1", "2.5""#), ["DATA", "BH1", "2.5"]);
        assert_eq!(quoted_fields(r#""A";"B"x"#), ["A", "B"]);
    }

    #[test]
    fn doubled_quotes_are_escapes() {
        assert_eq!(quoted_fields(r#""DATA","6"" pipe""#), ["DATA", "6\" pipe"]);
    }

    #[test]
    fn unterminated_span_runs_to_end() {
        assert_eq!(quoted_fields(r#""DATA","open"#), ["DATA", "open"]);
    }

    #[test]
    fn quote_doubles_embedded_quotes() {
        assert_eq!(quote("6\" pipe"), "\"6\"\" pipe\"");
    }
}
