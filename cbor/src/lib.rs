/*!
Annotated diagnostic decoding of CBOR (RFC 8949).

Turns a CBOR buffer into a line-per-item transcript pairing each item's raw
header bytes with its decoded meaning, for inspecting wire payloads by eye.

```
let lines = cbordiag::diag::annotate(&[0x83, 0x01, 0x02, 0x03]);
assert_eq!(lines.len(), 4);
assert!(lines[0].ends_with("# ARRAY (3 items)"));
```
*/
#![no_std]
extern crate alloc;

pub mod decode;
pub mod diag;
pub mod format;

#[cfg(test)]
mod decode_tests;
