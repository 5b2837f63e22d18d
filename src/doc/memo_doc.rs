//! Memo document layout: heading block, recipient block, subject,
//! narrative, the two tables and the signature lines.

use crate::doc::pdf::DocWriter;
use crate::errors::{AppError, AppResult};
use pdf_writer::Content;
use std::path::Path;

const BODY_SIZE: f32 = 11.0;
const HEADING_SIZE: f32 = 15.0;
const TABLE_SIZE: f32 = 9.0;
const RULER: &str = "======================================================";

/// Everything the memo needs, already formatted as strings.
pub struct MemoDocument {
    pub organization: String,
    pub recipient: String,
    pub through: String,
    pub author: String,
    pub date_line: String,
    pub subject: String,
    pub narrative: String,
    pub summary_headers: Vec<&'static str>,
    pub summary_rows: Vec<Vec<String>>,
    pub detail_headers: Vec<&'static str>,
    pub detail_rows: Vec<Vec<String>>,
}

impl MemoDocument {
    pub fn write_to(&self, path: &Path) -> AppResult<()> {
        let mut r = Renderer::new();

        r.centered(&self.organization, HEADING_SIZE, true);
        r.centered("MEMO", HEADING_SIZE, true);
        r.centered(RULER, 14.0, true);
        r.spacer(10.0);

        r.paragraph(&format!("To:      {}", self.recipient), BODY_SIZE, false);
        r.paragraph(&format!("Through: {}", self.through), BODY_SIZE, false);
        r.paragraph(&format!("From:    {}", self.author), BODY_SIZE, false);
        r.spacer(8.0);

        r.paragraph(&format!("Date: {}", self.date_line), BODY_SIZE, false);
        r.spacer(8.0);

        r.paragraph(&self.subject, BODY_SIZE, true);
        r.spacer(8.0);

        r.paragraph(&self.narrative, BODY_SIZE, false);
        r.spacer(14.0);

        r.table(&self.summary_headers, &self.summary_rows);
        r.spacer(18.0);

        r.table(&self.detail_headers, &self.detail_rows);
        r.spacer(24.0);

        r.paragraph("Prepared by: ___________________________", BODY_SIZE, false);
        r.spacer(10.0);
        r.paragraph("Approved by: ___________________________", BODY_SIZE, false);

        r.finish(path)
    }
}

/// Cursor-based page renderer: `y` is the top edge of the next element,
/// pages break automatically when an element does not fit.
struct Renderer {
    doc: DocWriter,
    content: Content,
    y: f32,
}

impl Renderer {
    fn new() -> Self {
        let mut doc = DocWriter::new();
        let mut content = doc.new_page();
        let y = doc.page_h - doc.margin;

        Self::page_footer(&doc, &mut content, 1);
        Self { doc, content, y }
    }

    fn page_footer(doc: &DocWriter, content: &mut Content, page: usize) {
        let label = format!("Page {page}");
        doc.draw_text(
            content,
            doc.page_w - doc.margin - 60.0,
            doc.margin - 35.0,
            9.0,
            false,
            &label,
        );
    }

    fn break_page(&mut self) {
        let done = std::mem::replace(&mut self.content, Content::new());
        self.doc.finalize_page(done);

        self.content = self.doc.new_page();
        self.y = self.doc.page_h - self.doc.margin;

        let page = self.doc.page_count();
        Self::page_footer(&self.doc, &mut self.content, page);
    }

    fn ensure_space(&mut self, needed: f32) {
        if self.y - needed < self.doc.margin {
            self.break_page();
        }
    }

    fn line_height(size: f32) -> f32 {
        size + 5.0
    }

    fn spacer(&mut self, h: f32) {
        self.y -= h;
    }

    fn centered(&mut self, text: &str, size: f32, bold: bool) {
        let lh = Self::line_height(size);
        self.ensure_space(lh);
        self.doc
            .draw_text_centered(&mut self.content, self.y - lh + 4.0, size, bold, text);
        self.y -= lh;
    }

    fn paragraph(&mut self, text: &str, size: f32, bold: bool) {
        let lh = Self::line_height(size);
        let lines = self
            .doc
            .wrap_to_width(text, size, self.doc.usable_width());

        for line in lines {
            self.ensure_space(lh);
            self.doc.draw_text(
                &mut self.content,
                self.doc.margin,
                self.y - lh + 4.0,
                size,
                bold,
                &line,
            );
            self.y -= lh;
        }
    }

    /// Bordered table with a shaded header row; cell text wraps and the
    /// header is repeated after every page break.
    fn table(&mut self, headers: &[&str], rows: &[Vec<String>]) {
        let widths = self.doc.compute_col_widths(headers, rows, TABLE_SIZE);
        self.table_header(headers, &widths);

        let lh = Self::line_height(TABLE_SIZE);

        for row in rows {
            let wrapped: Vec<Vec<String>> = row
                .iter()
                .enumerate()
                .map(|(i, cell)| {
                    let w = widths.get(i).copied().unwrap_or(40.0);
                    self.doc.wrap_to_width(cell, TABLE_SIZE, w - 8.0)
                })
                .collect();

            let line_count = wrapped.iter().map(|c| c.len().max(1)).max().unwrap_or(1);
            let row_h = line_count as f32 * lh + 4.0;

            if self.y - row_h < self.doc.margin {
                self.break_page();
                self.table_header(headers, &widths);
            }

            self.table_row(&wrapped, &widths, row_h, lh);
        }
    }

    fn table_header(&mut self, headers: &[&str], widths: &[f32]) {
        let lh = Self::line_height(TABLE_SIZE);
        let row_h = lh + 4.0;
        self.ensure_space(row_h);

        let total: f32 = widths.iter().sum();
        self.doc.fill_rect(
            &mut self.content,
            self.doc.margin,
            self.y - row_h,
            total,
            row_h,
            0.87,
        );

        let mut x = self.doc.margin;
        for (i, header) in headers.iter().enumerate() {
            let w = widths.get(i).copied().unwrap_or(40.0);
            self.doc.draw_text(
                &mut self.content,
                x + 4.0,
                self.y - lh + 4.0,
                TABLE_SIZE,
                true,
                header,
            );
            self.doc
                .draw_cell_borders(&mut self.content, x, self.y - row_h, w, row_h);
            x += w;
        }

        self.y -= row_h;
    }

    fn table_row(&mut self, cells: &[Vec<String>], widths: &[f32], row_h: f32, lh: f32) {
        let mut x = self.doc.margin;

        for (i, lines) in cells.iter().enumerate() {
            let w = widths.get(i).copied().unwrap_or(40.0);

            for (n, line) in lines.iter().enumerate() {
                self.doc.draw_text(
                    &mut self.content,
                    x + 4.0,
                    self.y - (n as f32 + 1.0) * lh + 4.0,
                    TABLE_SIZE,
                    false,
                    line,
                );
            }

            self.doc
                .draw_cell_borders(&mut self.content, x, self.y - row_h, w, row_h);
            x += w;
        }

        self.y -= row_h;
    }

    fn finish(mut self, path: &Path) -> AppResult<()> {
        let done = std::mem::replace(&mut self.content, Content::new());
        self.doc.finalize_page(done);

        self.doc
            .save(path)
            .map_err(|e| AppError::Document(format!("{}: {e}", path.display())))
    }
}
