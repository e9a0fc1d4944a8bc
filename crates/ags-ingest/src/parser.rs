//! Group parser.
//!
//! A group block starts at every line whose first quoted field is `GROUP`
//! and runs until the next such line or end of input. Within a block the
//! header lines are positional:
//!
//! ```text
//! 0  "GROUP","LOCA"
//! 1  "HEADING","LOCA_ID",...
//! 2  "UNIT","",...
//! 3  "TYPE","ID",...
//! 4+ "DATA",...            (other lines are skipped)
//! ```
//!
//! A header line is used only when its descriptor matches its position;
//! otherwise that list stays empty. Parsing never fails.

use ags_model::{Document, Group, Heading, Row};
use tracing::debug;

use crate::tokenizer::{lines, quoted_fields};

const HEADER_LINES: usize = 4;

/// A group dropped because a later group reused its name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateGroup {
    pub name: String,
    /// GROUP line of the discarded (earlier) group.
    pub discarded_line: usize,
    /// GROUP line of the group that replaced it.
    pub line_number: usize,
}

/// Parsed document plus what the parser had to drop.
#[derive(Debug, Clone, Default)]
pub struct ParseOutput {
    pub document: Document,
    pub duplicate_groups: Vec<DuplicateGroup>,
}

/// Parse AGS4 text into a document. Never fails.
pub fn parse(text: &str) -> Document {
    parse_with_diagnostics(text).document
}

/// Parse AGS4 text, also reporting duplicate group names.
pub fn parse_with_diagnostics(text: &str) -> ParseOutput {
    let mut output = ParseOutput::default();

    for block in split_blocks(text) {
        let group = build_group(&block);
        let name = group.name.clone();
        let line_number = group.line_number;
        if let Some(previous) = output.document.insert(group) {
            debug!(
                group = %name,
                discarded_line = previous.line_number,
                line = line_number,
                "duplicate group name; keeping the later group"
            );
            output.duplicate_groups.push(DuplicateGroup {
                name,
                discarded_line: previous.line_number,
                line_number,
            });
        }
    }

    output
}

/// Tokenized line of a group block.
struct BlockLine {
    number: usize,
    fields: Vec<String>,
}

impl BlockLine {
    fn descriptor(&self) -> Option<&str> {
        self.fields.first().map(String::as_str)
    }

    /// Fields after the descriptor.
    fn values(&self) -> &[String] {
        self.fields.get(1..).unwrap_or(&[])
    }
}

fn split_blocks(text: &str) -> Vec<Vec<BlockLine>> {
    let mut blocks: Vec<Vec<BlockLine>> = Vec::new();

    for line in lines(text) {
        let fields = quoted_fields(line.text);
        let block_line = BlockLine {
            number: line.number,
            fields,
        };
        if block_line.descriptor() == Some("GROUP") {
            blocks.push(vec![block_line]);
        } else if let Some(current) = blocks.last_mut() {
            current.push(block_line);
        }
        // Lines before the first GROUP belong to no group.
    }

    blocks
}

fn build_group(block: &[BlockLine]) -> Group {
    let start = &block[0];
    let name = start.values().first().cloned().unwrap_or_default();

    let names = header(block, 1, "HEADING");
    let units = header(block, 2, "UNIT");
    let types = header(block, 3, "TYPE");

    let headings: Vec<Heading> = names
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            Heading::new(
                name.clone(),
                types.get(idx).cloned().unwrap_or_default(),
                units.get(idx).cloned().unwrap_or_default(),
            )
        })
        .collect();

    let rows = block
        .iter()
        .skip(HEADER_LINES)
        .filter(|line| line.descriptor() == Some("DATA"))
        .map(|line| {
            let mut row = Row::new(line.number);
            for (heading, value) in headings.iter().zip(line.values()) {
                row.set(heading.name.clone(), value.clone());
            }
            row
        })
        .collect();

    let mut group = Group::new(name, start.number);
    group.headings = headings;
    group.rows = rows;
    group
}

/// Values of the header line at `position`, if its descriptor matches.
fn header<'a>(block: &'a [BlockLine], position: usize, descriptor: &str) -> &'a [String] {
    block
        .get(position)
        .filter(|line| line.descriptor() == Some(descriptor))
        .map(BlockLine::values)
        .unwrap_or(&[])
}
