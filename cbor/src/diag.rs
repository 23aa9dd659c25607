/*!
Annotated diagnostic decoding

Walks a CBOR buffer item by item and produces one annotated line per item,
indented by nesting depth:

```text
83                   # ARRAY (3 items)
    01                   # POS INT: 1
    02                   # POS INT: 2
    03                   # POS INT: 3
```

Malformed input never aborts the transcript; each failure is reported as an
`ERROR:` line scoped to the item it occurred in.
*/

use super::decode::{self, Error, Header, Major};
use super::format::{self, plural};
use alloc::{format, string::String, vec::Vec};
use tracing::{debug, trace};

/// Decoder behaviour switches.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// Decode half/single/double precision payloads of major type 7 as `FLOAT` values
    pub floats: bool,
}

/// A cursor over a CBOR buffer.
///
/// Iterating a `Decoder` yields the lines of each top-level item in turn.
#[derive(Debug, Clone)]
pub struct Decoder<'a> {
    data: &'a [u8],
    offset: usize,
    options: Options,
}

impl<'a> Decoder<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_options(data, Options::default())
    }

    pub fn with_options(data: &'a [u8], options: Options) -> Self {
        Self {
            data,
            offset: 0,
            options,
        }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn is_at_end(&self) -> bool {
        self.offset >= self.data.len()
    }

    /// Decode the next top-level item, returning its lines and those of all nested items.
    ///
    /// Returns an empty `Vec` once the buffer is exhausted.
    pub fn decode_item(&mut self) -> Vec<String> {
        let mut lines = Vec::new();
        self.item(0, &mut lines);
        lines
    }

    /// Decode every remaining item.
    pub fn decode_all(&mut self) -> Vec<String> {
        let mut lines = Vec::new();
        while !self.is_at_end() {
            self.item(0, &mut lines);
        }
        lines
    }

    fn remaining(&self) -> &'a [u8] {
        &self.data[self.offset..]
    }

    fn fail(&mut self, start: usize, depth: usize, error: Error, lines: &mut Vec<String>) {
        debug!("Item at offset {start}, depth {depth} failed: {error}");
        lines.push(format::error_line(depth, &self.data[start..], &error));
    }

    fn item(&mut self, depth: usize, lines: &mut Vec<String>) {
        if self.is_at_end() {
            return;
        }

        let start = self.offset;
        if depth >= format::MAX_DEPTH {
            self.offset = self.data.len();
            return self.fail(start, depth, Error::MaxDepth, lines);
        }

        let header = Header::from(self.data[start]);
        self.offset += 1;
        trace!("Header {header:?} at offset {start}, depth {depth}");

        let annotation = match self.annotate(header) {
            Ok(annotation) => annotation,
            Err(e) => {
                // The rest of the buffer belongs to the incomplete item
                if matches!(
                    e,
                    Error::TruncatedArgument(_) | Error::TruncatedBytes(_) | Error::TruncatedText(_)
                ) {
                    self.offset = self.data.len();
                }
                return self.fail(start, depth, e, lines);
            }
        };

        lines.push(format::line(
            depth,
            &self.data[start..self.header_end(start, header)],
            &annotation.text,
        ));

        match annotation.children {
            Children::None => {}
            Children::Items(count, truncated) => {
                for _ in 0..count {
                    if self.is_at_end() {
                        self.fail(start, depth + 1, truncated.clone(), lines);
                        break;
                    }
                    self.item(depth + 1, lines);
                }
            }
            Children::Tagged => self.item(depth + 1, lines),
        }
    }

    /// The end of the header bytes of the item starting at `start`.
    ///
    /// For strings the payload follows the header and has already been consumed.
    fn header_end(&self, start: usize, header: Header) -> usize {
        match header.major {
            Major::Bytes | Major::Text => {
                start + 1 + decode::argument_width(header.info).unwrap_or(0)
            }
            _ => self.offset,
        }
    }

    fn argument(&mut self, header: Header) -> Result<u64, Error> {
        let (v, len) = decode::read_argument(header.info, self.remaining()).map_err(|e| {
            if e == Error::IndefiniteLength && !header.major.has_indefinite_form() {
                Error::Reserved(header.info)
            } else {
                e
            }
        })?;
        self.offset += len;
        Ok(v)
    }

    fn payload(&mut self, len: u64, truncated: Error) -> Result<&'a [u8], Error> {
        let data = self.remaining();
        if len > data.len() as u64 {
            return Err(truncated);
        }
        let len = len as usize;
        self.offset += len;
        Ok(&data[..len])
    }

    fn annotate(&mut self, header: Header) -> Result<Annotation, Error> {
        Ok(match header.major {
            Major::UnsignedInteger => {
                Annotation::leaf(format!("POS INT: {}", self.argument(header)?))
            }
            Major::NegativeInteger => {
                let n = -1 - self.argument(header)? as i128;
                Annotation::leaf(format!("NEG INT: {n}"))
            }
            Major::Bytes => {
                let len = self.argument(header)?;
                let bytes = self.payload(len, Error::TruncatedBytes(len))?;
                Annotation::leaf(format!(
                    "BYTE STR: {} ({len} {})",
                    format::render_bytes(bytes),
                    plural(len, "byte", "bytes")
                ))
            }
            Major::Text => {
                let len = self.argument(header)?;
                let text = self.payload(len, Error::TruncatedText(len))?;
                Annotation::leaf(format!(
                    "TEXT: {} ({len} {})",
                    format::render_text(text),
                    plural(len, "byte", "bytes")
                ))
            }
            Major::Array => {
                let count = self.argument(header)?;
                Annotation {
                    text: format!("ARRAY ({count} {})", plural(count, "item", "items")),
                    children: Children::Items(count, Error::TruncatedArray),
                }
            }
            Major::Map => {
                let count = self.argument(header)?;
                Annotation {
                    text: format!("MAP ({count} {})", plural(count, "pair", "pairs")),
                    children: Children::Items(count.saturating_mul(2), Error::TruncatedMap),
                }
            }
            Major::Tag => Annotation {
                text: format!("TAG ({})", self.argument(header)?),
                children: Children::Tagged,
            },
            Major::Simple => self.simple(header)?,
        })
    }

    fn simple(&mut self, header: Header) -> Result<Annotation, Error> {
        if self.options.floats
            && let Some((v, len)) = decode::read_float(header.info, self.remaining())?
        {
            self.offset += len;
            return Ok(Annotation::leaf(format!("FLOAT: {v:?}")));
        }
        Ok(Annotation::leaf(if header.info < 20 {
            format!("SIMPLE: {}", header.info)
        } else {
            String::from("SIMPLE (RESERVED)")
        }))
    }
}

impl Iterator for Decoder<'_> {
    type Item = Vec<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_at_end() {
            None
        } else {
            Some(self.decode_item())
        }
    }
}

/// What follows an item's own line.
enum Children {
    None,
    /// A declared number of items, and the error to report if the buffer runs out first
    Items(u64, Error),
    Tagged,
}

struct Annotation {
    text: String,
    children: Children,
}

impl Annotation {
    fn leaf(text: String) -> Self {
        Self {
            text,
            children: Children::None,
        }
    }
}

/// Decode the whole buffer into a diagnostic transcript.
pub fn annotate(data: &[u8]) -> Vec<String> {
    annotate_with(data, Options::default())
}

pub fn annotate_with(data: &[u8], options: Options) -> Vec<String> {
    Decoder::with_options(data, options).decode_all()
}
