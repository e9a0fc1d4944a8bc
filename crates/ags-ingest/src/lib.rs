//! AGS4 ingestion utilities.
//!
//! This crate turns raw AGS4 text into a [`Document`](ags_model::Document)
//! and back:
//!
//! - **Tokenizer**: line splitting and lenient quoted-field extraction
//! - **Parser**: positional group blocks (GROUP, HEADING, UNIT, TYPE, DATA)
//! - **Writer**: serializer producing CR+LF terminated AGS4 text
//! - **Reader**: loading files from disk without rejecting bad encodings
//!
//! # Example
//!
//! ```ignore
//! use ags_ingest::{parse, serialize};
//!
//! let document = parse(&text);
//! let rewritten = serialize(&document);
//! // Same groups, headings and values; line numbers may shift.
//! assert_eq!(parse(&rewritten).group_names().count(), document.len());
//! ```

mod error;
mod parser;
mod reader;
pub mod tokenizer;
mod writer;

// === Error Types ===
pub use error::{IngestError, Result};

// === Parsing ===
pub use parser::{DuplicateGroup, ParseOutput, parse, parse_with_diagnostics};

// === Serialization ===
pub use writer::{serialize, write_group};

// === File Access ===
pub use reader::{read_ags_file, write_ags_file};
