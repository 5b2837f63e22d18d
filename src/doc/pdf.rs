//! Minimal PDF plumbing for generated documents.
//!
//! Object ids are managed by hand: catalog, pages tree, two Type1 fonts,
//! then one page object + one content stream per page. Geometry is A4
//! portrait with a uniform margin; text metrics are approximated from
//! character counts, which is good enough for tables and short paragraphs.

use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Average glyph advance per point of font size (Helvetica, approximate).
const CHAR_FACTOR: f32 = 0.62;

pub struct DocWriter {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,

    pub page_w: f32,
    pub page_h: f32,
    pub margin: f32,

    next_id: i32,
    font_id: Ref,
    bold_font_id: Ref,
}

impl Default for DocWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl DocWriter {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();

        // Hand-managed ids
        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let bold_font_id = Ref::new(4);
        let next_id = 5;

        // Global fonts
        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));
        pdf.type1_font(bold_font_id)
            .base_font(Name(b"Helvetica-Bold"));

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,

            page_w: 595.0,
            page_h: 842.0,
            margin: 50.0,

            next_id,
            font_id,
            bold_font_id,
        }
    }

    /// Generate a fresh unique Ref
    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    /// Create a new page and its content object
    pub fn new_page(&mut self) -> Content {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);

        let mut resources = page.resources();
        let mut fonts = resources.fonts();
        fonts.pair(Name(b"F1"), self.font_id);
        fonts.pair(Name(b"F2"), self.bold_font_id);

        self.current_content_id = Some(content_id);

        Content::new()
    }

    /// Write the current page's stream
    pub fn finalize_page(&mut self, content: Content) {
        if let Some(id) = self.current_content_id {
            self.pdf.stream(id, &content.finish());
        }
    }

    pub fn page_count(&self) -> usize {
        self.page_refs.len()
    }

    /// Set the `Pages` node with count and kids
    fn build_pages_tree(&mut self) {
        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
    }

    pub fn draw_text(
        &self,
        content: &mut Content,
        x: f32,
        y: f32,
        size: f32,
        bold: bool,
        text: &str,
    ) {
        let font = if bold { Name(b"F2") } else { Name(b"F1") };

        content.begin_text();
        content.set_font(font, size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(text.as_bytes()));
        content.end_text();
    }

    pub fn draw_text_centered(&self, content: &mut Content, y: f32, size: f32, bold: bool, text: &str) {
        let x = (self.page_w - self.text_width(text, size)) / 2.0;
        self.draw_text(content, x.max(self.margin), y, size, bold, text);
    }

    pub fn draw_cell_borders(&self, content: &mut Content, x: f32, y: f32, w: f32, h: f32) {
        content.save_state();
        content.set_stroke_rgb(0.65, 0.65, 0.65);
        content.rect(x, y, w, h);
        content.stroke();
        content.restore_state();
    }

    pub fn fill_rect(&self, content: &mut Content, x: f32, y: f32, w: f32, h: f32, grey: f32) {
        content.save_state();
        content.set_fill_rgb(grey, grey, grey);
        content.rect(x, y, w, h);
        content.fill_nonzero();
        content.restore_state();
    }

    pub fn text_width(&self, text: &str, size: f32) -> f32 {
        text.chars().count() as f32 * size * CHAR_FACTOR
    }

    pub fn usable_width(&self) -> f32 {
        self.page_w - 2.0 * self.margin
    }

    /// Wrap text so each line fits the given width at the given font size.
    pub fn wrap_to_width(&self, text: &str, size: f32, width: f32) -> Vec<String> {
        let max_chars = ((width / (size * CHAR_FACTOR)) as usize).max(1);
        textwrap::wrap(text, max_chars)
            .into_iter()
            .map(|line| line.into_owned())
            .collect()
    }

    /// Column widths: each column takes its widest content, capped at 300
    /// points plus padding, then the whole set is scaled to fit the page.
    pub fn compute_col_widths(&self, headers: &[&str], rows: &[Vec<String>], size: f32) -> Vec<f32> {
        let mut widths: Vec<f32> = headers
            .iter()
            .map(|h| self.text_width(h, size + 1.0))
            .collect();

        for row in rows {
            for (i, cell) in row.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(self.text_width(cell, size));
                }
            }
        }

        for w in &mut widths {
            *w = w.min(300.0) + 20.0;
        }

        let total: f32 = widths.iter().sum();
        let max = self.usable_width();

        if total > max {
            let scale = max / total;
            for w in &mut widths {
                *w *= scale;
            }
        }

        widths
    }

    pub fn save(mut self, path: &Path) -> std::io::Result<()> {
        // Build Catalog + Pages once, here
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.build_pages_tree();

        let bytes = self.pdf.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}
