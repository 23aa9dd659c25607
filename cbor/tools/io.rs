/*!
I/O utilities for reading and writing files or stdin/stdout
*/

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::str::FromStr;

/// Input source - either stdin or a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    /// Read all bytes from the input source
    pub fn read_all(&self) -> anyhow::Result<Vec<u8>> {
        match self {
            Input::Stdin => {
                let mut buffer = Vec::new();
                io::BufReader::new(io::stdin())
                    .read_to_end(&mut buffer)
                    .map_err(|e| anyhow::anyhow!("Failed to read from stdin: {e}"))?;
                Ok(buffer)
            }
            Input::File(path) => fs::read(path)
                .map_err(|e| anyhow::anyhow!("Failed to read from '{}': {e}", path.display())),
        }
    }
}

impl FromStr for Input {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(Input::Stdin)
        } else {
            Ok(Input::File(PathBuf::from(s)))
        }
    }
}

/// Output destination - either stdout or a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Stdout,
    File(PathBuf),
}

impl Output {
    /// Write a string to the output destination
    pub fn write_str(&self, data: &str) -> anyhow::Result<()> {
        match self {
            Output::Stdout => io::stdout()
                .lock()
                .write_all(data.as_bytes())
                .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {e}")),
            Output::File(path) => fs::write(path, data)
                .map_err(|e| anyhow::anyhow!("Failed to write to '{}': {e}", path.display())),
        }
    }
}

impl FromStr for Output {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s == "-" {
            Ok(Output::Stdout)
        } else {
            Ok(Output::File(PathBuf::from(s)))
        }
    }
}

/// Decode hex text into bytes.
///
/// ASCII whitespace is ignored, as is an optional leading `0x`.
pub fn decode_hex(text: &[u8]) -> anyhow::Result<Vec<u8>> {
    let mut digits: Vec<u8> = text
        .iter()
        .copied()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    if digits.starts_with(b"0x") || digits.starts_with(b"0X") {
        digits.drain(..2);
    }
    hex::decode(&digits).map_err(|e| anyhow::anyhow!("Invalid hex input: {e}"))
}
