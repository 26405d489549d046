//! Phonebook XML binding for contact fields.
//!
//! The router's phonebook import expects each email address as
//!
//! ```xml
//! <email id="0" classifier="private">alice@example.com</email>
//! ```
//!
//! Assembling the surrounding `<contact>`/`<telephony>` document is left to
//! the caller; this module only renders the field elements.

use crate::domain::{EmailClassifier, EmailField};
use crate::error::XmlResult;
use serde::Serialize;
use std::io::{BufRead, Write};

/// Element name of an email address in the phonebook document.
pub const EMAIL_TAG: &str = "email";

/// Borrowed view of an [`EmailField`] as it appears in the phonebook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EmailElement<'a> {
    #[serde(rename = "@id")]
    pub id: u32,

    #[serde(rename = "@classifier")]
    pub classifier: EmailClassifier,

    #[serde(rename = "$text")]
    pub value: &'a str,
}

/// Controls how fields are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OutputOptions {
    /// Skip the element entirely when the field holds no value.
    pub suppress_empty: bool,
}

impl EmailField {
    /// The phonebook representation of this field.
    pub fn to_element(&self) -> EmailElement<'_> {
        EmailElement {
            id: self.id(),
            classifier: self.classifier(),
            value: self.value(),
        }
    }
}

/// Render an email field as a phonebook `<email>` element.
///
/// An empty field is rendered with empty content unless
/// `options.suppress_empty` is set, in which case `None` is returned.
///
/// # Errors
///
/// Returns `XmlError::Serialize` if the XML writer fails.
pub fn email_to_xml(field: &EmailField, options: &OutputOptions) -> XmlResult<Option<String>> {
    if field.is_empty() && options.suppress_empty {
        tracing::debug!("Skipping empty email element");
        return Ok(None);
    }

    let xml = quick_xml::se::to_string_with_root(EMAIL_TAG, &field.to_element())?;
    Ok(Some(xml))
}

/// Counts reported by [`write_email_lines`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineStats {
    /// Input lines read
    pub lines: usize,
    /// Elements written
    pub written: usize,
    /// Lines that produced no address
    pub empty: usize,
}

/// Render one `<email>` element per input line.
///
/// Each line is a raw upstream email value. Lines that are not valid UTF-8
/// (for example Latin-1 exports) are reported and treated as an empty field,
/// like any other rejected address, so a bad line never stops the run.
///
/// # Errors
///
/// Returns `XmlError::Io` if reading or writing fails and
/// `XmlError::Serialize` if the XML writer fails.
pub fn write_email_lines<R, W>(
    mut input: R,
    mut output: W,
    options: &OutputOptions,
) -> XmlResult<LineStats>
where
    R: BufRead,
    W: Write,
{
    let mut stats = LineStats::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        stats.lines += 1;

        let line = strip_line_ending(&buf);
        let field = match std::str::from_utf8(line) {
            Ok(text) => EmailField::with_address(text),
            Err(_) => {
                let lossy = String::from_utf8_lossy(line);
                tracing::warn!(
                    line = stats.lines,
                    original = %lossy,
                    "Mail address '{}' on line {} is not valid UTF-8",
                    lossy,
                    stats.lines
                );
                EmailField::new()
            }
        };

        if field.is_empty() {
            stats.empty += 1;
        }

        if let Some(xml) = email_to_xml(&field, options)? {
            writeln!(output, "{}", xml)?;
            stats.written += 1;
        }
    }

    output.flush()?;
    Ok(stats)
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
