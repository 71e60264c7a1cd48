use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::path::Path;

const REGULAR: Name<'static> = Name(b"F1");
const BOLD: Name<'static> = Name(b"F2");

/// A4 portrait geometry, in points.
#[derive(Debug, Clone, Copy)]
struct Layout {
    width: f32,
    height: f32,
    margin: f32,
    row_h: f32,
    body_size: f32,
    title_size: f32,
}

const A4: Layout = Layout {
    width: 595.0,
    height: 842.0,
    margin: 50.0,
    row_h: 20.0,
    body_size: 10.0,
    title_size: 14.0,
};

impl Layout {
    fn table_width(&self) -> f32 {
        self.width - 2.0 * self.margin
    }

    /// Baseline of the first table row below the title band.
    fn top(&self) -> f32 {
        self.height - self.margin - 30.0
    }

    /// Rows that fit between `top` (less `reserved`) and the bottom
    /// margin, header row excluded.
    fn rows_fitting(&self, reserved: f32) -> usize {
        let usable = self.top() - reserved - self.margin - self.row_h;
        ((usable / self.row_h).floor() as usize).max(1)
    }
}

/// Paginated monthly report: title and page number on every page, summary
/// lines on the first, then a zebra-striped table flowing over pages.
pub struct PdfReport {
    pdf: Pdf,
    layout: Layout,
    catalog_id: Ref,
    pages_id: Ref,
    regular_id: Ref,
    bold_id: Ref,
    next_id: i32,
    page_refs: Vec<Ref>,
}

impl Default for PdfReport {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfReport {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();
        let regular_id = Ref::new(3);
        let bold_id = Ref::new(4);

        pdf.type1_font(regular_id).base_font(Name(b"Helvetica"));
        pdf.type1_font(bold_id).base_font(Name(b"Helvetica-Bold"));

        Self {
            pdf,
            layout: A4,
            catalog_id: Ref::new(1),
            pages_id: Ref::new(2),
            regular_id,
            bold_id,
            next_id: 5,
            page_refs: Vec::new(),
        }
    }

    fn alloc(&mut self) -> Ref {
        let r = Ref::new(self.next_id);
        self.next_id += 1;
        r
    }

    /// Register a page and write `content` as its stream.
    fn emit_page(&mut self, content: Content) {
        let page_id = self.alloc();
        let content_id = self.alloc();
        let l = self.layout;

        {
            let mut page = self.pdf.page(page_id);
            page.parent(self.pages_id)
                .media_box(Rect::new(0.0, 0.0, l.width, l.height))
                .contents(content_id);
            let mut resources = page.resources();
            let mut fonts = resources.fonts();
            fonts.pair(REGULAR, self.regular_id);
            fonts.pair(BOLD, self.bold_id);
        }

        self.pdf.stream(content_id, &content.finish());
        self.page_refs.push(page_id);
    }

    /// Column widths proportional to the longest cell, scaled to the page.
    fn column_widths(&self, headers: &[&str], rows: &[Vec<String>]) -> Vec<f32> {
        let mut chars: Vec<usize> = headers.iter().map(|h| h.len()).collect();
        for row in rows {
            for (c, cell) in chars.iter_mut().zip(row) {
                *c = (*c).max(cell.len());
            }
        }

        let natural: Vec<f32> = chars.iter().map(|&c| c as f32 * 6.5 + 10.0).collect();
        let total: f32 = natural.iter().sum();
        let max = self.layout.table_width();

        if total > max {
            natural.iter().map(|w| w * max / total).collect()
        } else {
            natural
        }
    }

    /// Write the whole report. An empty `rows` still yields one page with
    /// the summary and the table header.
    pub fn write_report(
        &mut self,
        title: &str,
        summary: &[String],
        headers: &[&str],
        rows: &[Vec<String>],
    ) {
        let l = self.layout;
        let widths = self.column_widths(headers, rows);
        let header: Vec<String> = headers.iter().map(|h| h.to_string()).collect();

        let summary_h = if summary.is_empty() {
            0.0
        } else {
            summary.len() as f32 * l.row_h * 0.8 + l.row_h * 0.5
        };

        let mut rest = rows;
        let mut number = 1;

        loop {
            let reserved = if number == 1 { summary_h } else { 0.0 };
            let take = l.rows_fitting(reserved).min(rest.len());
            let (chunk, tail) = rest.split_at(take);

            let mut page = PageCanvas::new(l);
            page.title(title, number);

            let mut y = l.top();
            if number == 1 {
                for line in summary {
                    page.text(l.margin, y + 5.0, l.body_size, REGULAR, line);
                    y -= l.row_h * 0.8;
                }
                if !summary.is_empty() {
                    y -= l.row_h * 0.5;
                }
            }

            page.band(y, &widths, 0.85);
            page.row(y, &widths, &header, BOLD);
            y -= l.row_h;

            for (i, row) in chunk.iter().enumerate() {
                if i % 2 == 0 {
                    page.band(y, &widths, 0.96);
                }
                page.row(y, &widths, row, REGULAR);
                y -= l.row_h;
            }

            self.emit_page(page.content);
            rest = tail;
            number += 1;

            if rest.is_empty() {
                break;
            }
        }
    }

    pub fn page_count(&self) -> usize {
        self.page_refs.len()
    }

    pub fn finish(mut self) -> Vec<u8> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.pdf
            .pages(self.pages_id)
            .count(self.page_refs.len() as i32)
            .kids(self.page_refs.iter().copied());
        self.pdf.finish()
    }

    pub fn save(self, path: &Path) -> std::io::Result<()> {
        std::fs::write(path, self.finish())
    }
}

/// Drawing operations for one page.
struct PageCanvas {
    layout: Layout,
    content: Content,
}

impl PageCanvas {
    fn new(layout: Layout) -> Self {
        Self {
            layout,
            content: Content::new(),
        }
    }

    fn text(&mut self, x: f32, y: f32, size: f32, font: Name, text: &str) {
        self.content
            .begin_text()
            .set_font(font, size)
            .set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y])
            .show(Str(text.as_bytes()))
            .end_text();
    }

    fn title(&mut self, title: &str, number: usize) {
        let l = self.layout;
        self.text(l.margin, l.height - l.margin + 15.0, l.title_size, BOLD, title);
        self.text(
            l.width - l.margin - 60.0,
            l.margin - 35.0,
            l.body_size,
            REGULAR,
            &format!("Page {number}"),
        );
    }

    /// Filled background behind a table row.
    fn band(&mut self, y: f32, widths: &[f32], gray: f32) {
        let w: f32 = widths.iter().sum();
        self.content
            .save_state()
            .set_fill_rgb(gray, gray, gray + 0.03)
            .rect(self.layout.margin, y, w, self.layout.row_h)
            .fill_nonzero()
            .restore_state();
    }

    fn row(&mut self, y: f32, widths: &[f32], cells: &[String], font: Name) {
        let l = self.layout;
        let mut x = l.margin;

        for (cell, &w) in cells.iter().zip(widths) {
            self.text(x + 4.0, y + 5.0, l.body_size, font, cell);
            self.content
                .save_state()
                .set_stroke_rgb(0.65, 0.65, 0.65)
                .rect(x, y, w, l.row_h)
                .stroke()
                .restore_state();
            x += w;
        }
    }
}
