//! Document assembler: wraps renderer blocks in the shared document shell
//! and serializes to `.docx`
//!
//! Shell, top to bottom: right-aligned gray brand mark, title (heading 1),
//! muted team-name subtitle, then the caller's blocks verbatim. Blocks are
//! not validated.

use std::borrow::Cow;
use std::io::Cursor;

use docx_rs::{AlignmentType, BreakType, Docx, Paragraph, Run, Table, TableCell, TableRow};

use crate::blocks::{Block, TableBlock};
use crate::error::ExportError;

pub const DOCX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const DOCX_EXTENSION: &str = "docx";

pub const DEFAULT_BRAND_MARK: &str = "Launchpad";

// Sizes are in half-points
const BRAND_SIZE: usize = 16;
const TITLE_SIZE: usize = 40;
const SUBTITLE_SIZE: usize = 24;
const HEADING2_SIZE: usize = 28;
const BODY_SIZE: usize = 22;

const BRAND_COLOR: &str = "999999";
const MUTED_COLOR: &str = "666666";
const LABEL_COLOR: &str = "333333";
const DIVIDER_COLOR: &str = "CCCCCC";
const DIVIDER_WIDTH: usize = 48;

#[derive(Debug, Clone)]
pub struct Assembler {
    brand_mark: String,
}

impl Default for Assembler {
    fn default() -> Self {
        Self::new(DEFAULT_BRAND_MARK)
    }
}

impl Assembler {
    pub fn new(brand_mark: impl Into<String>) -> Self {
        Self {
            brand_mark: brand_mark.into(),
        }
    }

    pub fn brand_mark(&self) -> &str {
        &self.brand_mark
    }

    /// Wrap `blocks` in the document shell and serialize to `.docx` bytes
    pub fn build(
        &self,
        team_name: &str,
        title: &str,
        blocks: &[Block],
    ) -> Result<Vec<u8>, ExportError> {
        let docx = blocks.iter().fold(self.shell(team_name, title), append_block);

        let mut buffer = Cursor::new(Vec::new());
        docx.build()
            .pack(&mut buffer)
            .map_err(|e| ExportError::Serialization(e.to_string()))?;

        Ok(buffer.into_inner())
    }

    fn shell(&self, team_name: &str, title: &str) -> Docx {
        Docx::new()
            .add_paragraph(
                Paragraph::new()
                    .add_run(
                        text_run(&self.brand_mark)
                            .size(BRAND_SIZE)
                            .color(BRAND_COLOR),
                    )
                    .align(AlignmentType::Right),
            )
            .add_paragraph(
                Paragraph::new()
                    .style("Heading1")
                    .add_run(text_run(title).bold().size(TITLE_SIZE)),
            )
            .add_paragraph(
                Paragraph::new().add_run(
                    text_run(team_name)
                        .size(SUBTITLE_SIZE)
                        .color(MUTED_COLOR),
                ),
            )
    }
}

fn append_block(docx: Docx, block: &Block) -> Docx {
    match block {
        Block::Heading1(text) => docx.add_paragraph(
            Paragraph::new()
                .style("Heading1")
                .add_run(text_run(text).bold().size(TITLE_SIZE)),
        ),
        Block::Heading2(text) => docx.add_paragraph(
            Paragraph::new()
                .style("Heading2")
                .add_run(text_run(text).bold().size(HEADING2_SIZE)),
        ),
        Block::Label(text) => docx.add_paragraph(
            Paragraph::new().add_run(
                text_run(text)
                    .bold()
                    .size(BODY_SIZE)
                    .color(LABEL_COLOR),
            ),
        ),
        Block::Body(text) => docx.add_paragraph(body_paragraph(text)),
        Block::Bullet(text) => docx.add_paragraph(body_paragraph(&format!("• {text}"))),
        Block::Divider => docx.add_paragraph(
            Paragraph::new().add_run(
                Run::new()
                    .add_text("─".repeat(DIVIDER_WIDTH))
                    .color(DIVIDER_COLOR),
            ),
        ),
        Block::Table(table) => docx
            .add_table(docx_table(table))
            .add_paragraph(Paragraph::new()),
    }
}

/// Body text; embedded newlines become line breaks within the paragraph
fn body_paragraph(text: &str) -> Paragraph {
    let lines: Vec<&str> = text.lines().collect();
    let last = lines.len().saturating_sub(1);

    let run = lines
        .iter()
        .enumerate()
        .fold(Run::new().size(BODY_SIZE), |run, (i, line)| {
            let run = run.add_text(xml_safe(line));
            if i < last {
                run.add_break(BreakType::TextWrapping)
            } else {
                run
            }
        });

    Paragraph::new().add_run(run)
}

/// Drop characters XML 1.0 does not allow in text content
pub(crate) fn xml_safe(text: &str) -> Cow<'_, str> {
    if text.chars().all(is_xml_char) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(text.chars().filter(|c| is_xml_char(*c)).collect())
    }
}

fn is_xml_char(c: char) -> bool {
    match c {
        '\t' | '\n' | '\r' => true,
        '\u{fffe}' | '\u{ffff}' => false,
        c => c >= '\u{20}',
    }
}

fn text_run(text: &str) -> Run {
    Run::new().add_text(xml_safe(text))
}

fn docx_table(table: &TableBlock) -> Table {
    let header = table_row(&table.header, true);
    let body = table.rows.iter().map(|cells| table_row(cells, false));
    let total = table.total.iter().map(|cells| table_row(cells, true));

    Table::new(std::iter::once(header).chain(body).chain(total).collect())
}

#[mutants::skip] // Bold run styling is not visible in extracted document text
fn table_row(cells: &[String], bold: bool) -> TableRow {
    TableRow::new(
        cells
            .iter()
            .map(|cell| {
                let run = text_run(cell).size(BODY_SIZE);
                let run = if bold { run.bold() } else { run };
                TableCell::new().add_paragraph(Paragraph::new().add_run(run))
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_produces_zip_container() {
        let bytes = Assembler::default()
            .build("Team Ubuntu", "Pitch Deck", &[Block::Body("Hello".to_string())])
            .unwrap();
        assert!(bytes.len() > 4);
        assert_eq!(&bytes[..2], b"PK");
    }

    #[test]
    fn test_build_accepts_every_block_kind() {
        let table = TableBlock::new(["A", "B"])
            .row(vec!["1".to_string(), "2".to_string()])
            .total(vec!["Total".to_string(), "2".to_string()]);
        let blocks = vec![
            Block::Heading1("H1".to_string()),
            Block::Heading2("H2".to_string()),
            Block::Label("Label".to_string()),
            Block::Body("line one\nline two".to_string()),
            Block::Bullet("item".to_string()),
            Block::Divider,
            Block::Table(table),
        ];
        assert!(Assembler::new("Incubator X")
            .build("Team", "Title", &blocks)
            .is_ok());
    }

    #[test]
    fn test_empty_block_list() {
        assert!(Assembler::default().build("", "", &[]).is_ok());
    }

    #[test]
    fn test_xml_safe_drops_control_characters() {
        assert!(matches!(xml_safe("plain text"), Cow::Borrowed(_)));
        assert_eq!(xml_safe("tab\there\nline"), "tab\there\nline");
        assert_eq!(xml_safe("pasted\u{1}from\u{b}excel"), "pastedfromexcel");
        assert_eq!(xml_safe("a\u{fffe}b\u{ffff}c\u{0}"), "abc");
        assert_eq!(xml_safe("R 15 000 — ok"), "R 15 000 — ok");
    }

    #[test]
    fn test_brand_mark() {
        assert_eq!(Assembler::default().brand_mark(), DEFAULT_BRAND_MARK);
        assert_eq!(Assembler::new("Acme").brand_mark(), "Acme");
    }
}
