/*!
cbordiag - annotated CBOR dumps

Reads a CBOR payload and prints one line per encoded item, pairing the raw
header bytes with the decoded meaning, indented by nesting depth.

# Examples

```bash
# Dump a CBOR file
cbordiag payload.cbor

# Dump hex text from a pipe
echo 'a26161016162820203' | cbordiag --hex

# Decode float payloads and log decode failures
cbordiag --floats --verbose=debug payload.cbor
```
*/

use clap::{Parser, ValueEnum};
use io::{Input, Output};

mod io;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Verbosity {
    /// Designates very low priority, often extremely verbose, information.
    #[value(name = "trace")]
    Trace,

    /// Designates lower priority information.
    #[value(name = "debug")]
    Debug,

    /// Designates useful information.
    #[value(name = "info")]
    Info,

    /// Designates hazardous situations.
    #[value(name = "warn")]
    Warn,

    /// Designates very serious errors.
    #[value(name = "error")]
    Error,
}

impl From<Verbosity> for tracing::Level {
    fn from(value: Verbosity) -> Self {
        match value {
            Verbosity::Trace => tracing::Level::TRACE,
            Verbosity::Debug => tracing::Level::DEBUG,
            Verbosity::Info => tracing::Level::INFO,
            Verbosity::Warn => tracing::Level::WARN,
            Verbosity::Error => tracing::Level::ERROR,
        }
    }
}

/// Print an annotated line-per-item dump of CBOR data
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output additional information to stderr, default 'info'.
    #[arg(short, long, num_args = 0..=1, require_equals = true, default_missing_value = "info")]
    verbose: Option<Verbosity>,

    /// Treat the input as hexadecimal text rather than raw bytes
    #[arg(long)]
    hex: bool,

    /// Decode half, single and double precision float payloads
    #[arg(long)]
    floats: bool,

    /// Output file (default: stdout)
    #[arg(short = 'o', long)]
    output: Option<Output>,

    /// Input CBOR file (use '-' for stdin)
    #[arg(default_value = "-")]
    input: Input,
}

impl Cli {
    fn exec(self) -> anyhow::Result<()> {
        if let Some(level) = self.verbose.map(tracing::Level::from) {
            let subscriber = tracing_subscriber::fmt()
                .with_max_level(level)
                .with_target(level > tracing::Level::INFO)
                .with_writer(std::io::stderr)
                .finish();
            tracing::subscriber::set_global_default(subscriber)
                .map_err(|e| anyhow::anyhow!("Failed to set global default subscriber: {e}"))?;
        }

        let mut data = self.input.read_all()?;
        if self.hex {
            data = io::decode_hex(&data)?;
        }
        tracing::info!("Read {} bytes", data.len());

        let text = transcript(
            &data,
            cbordiag::diag::Options {
                floats: self.floats,
            },
        )?;
        self.output.unwrap_or(Output::Stdout).write_str(&text)
    }
}

/// Render the full transcript, one line per item with a trailing newline.
fn transcript(data: &[u8], options: cbordiag::diag::Options) -> anyhow::Result<String> {
    if data.is_empty() {
        return Err(anyhow::anyhow!("No input data"));
    }

    let mut text = String::new();
    for line in cbordiag::diag::annotate_with(data, options) {
        text.push_str(&line);
        text.push('\n');
    }
    Ok(text)
}

fn main() -> anyhow::Result<()> {
    Cli::parse().exec()
}
