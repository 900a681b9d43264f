//! PDF report export.
//!
//! Renders a paginated A4 report: title block, drug information, the styled
//! release-profile table (grey header, alternating body shading, full grid),
//! the recommendation paragraph, and one paragraph per bibliography line.
//! Layout is a simple top-down y-cursor with page breaks; builtin Helvetica
//! keeps the document self-contained.

use std::io::BufWriter;

use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument,
    PdfDocumentReference, PdfLayerReference, Point, Polygon, Rgb,
};
use printpdf::path::{PaintMode, WindingOrder};

use pkpd_core::AnalysisReport;

use crate::error::{ExportError, ExportResult};
use crate::validate_report;

// Page geometry, in millimetres.
const PAGE_WIDTH: f64 = 210.0;
const PAGE_HEIGHT: f64 = 297.0;
const MARGIN_LEFT: f64 = 20.0;
const MARGIN_RIGHT: f64 = 20.0;
const TOP_Y: f64 = 277.0;
const BOTTOM_Y: f64 = 20.0;
const CONTENT_WIDTH: f64 = PAGE_WIDTH - MARGIN_LEFT - MARGIN_RIGHT;

// Table geometry.
const PARAM_COL_WIDTH: f64 = 38.0;
const HEADER_ROW_HEIGHT: f64 = 7.0;
const BODY_ROW_HEIGHT: f64 = 6.0;

fn mm(value: f64) -> Mm {
    Mm(value as f32)
}

fn rgb(r: f64, g: f64, b: f64) -> Color {
    Color::Rgb(Rgb::new(r as f32, g as f32, b as f32, None))
}

/// Serialize a report into a PDF byte buffer.
pub fn write_pdf(report: &AnalysisReport) -> ExportResult<Vec<u8>> {
    validate_report(report)?;

    let title = format!(
        "Pharmacokinetic/Pharmacodynamic Analysis - {}",
        report.drug_name
    );
    let (doc, page, layer) = PdfDocument::new(&title, mm(PAGE_WIDTH), mm(PAGE_HEIGHT), "Layer 1");
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ExportError::Pdf(format!("font error: {e}")))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ExportError::Pdf(format!("font error: {e}")))?;
    let layer = doc.get_page(page).get_layer(layer);

    let mut writer = PdfWriter {
        doc,
        layer,
        font,
        bold,
        y: TOP_Y,
    };

    writer.title_line("Pharmacokinetic/Pharmacodynamic Analysis", 15.0);
    writer.title_line(&report.drug_name, 13.0);
    writer.spacer(8.0);

    writer.heading("Drug Information");
    writer.paragraph(&report.explanation, 10.0, 95);
    writer.spacer(6.0);

    writer.heading("PK/PD Release Profile Table");
    writer.table(&report.table_data.structured_data);
    writer.spacer(6.0);

    writer.heading("Best Release Recommendation");
    writer.paragraph(&report.recommendation, 10.0, 95);
    writer.spacer(6.0);

    writer.heading("References");
    for line in report.references.lines().skip(1) {
        if !line.trim().is_empty() {
            writer.paragraph(line.trim(), 9.0, 105);
        }
    }

    let PdfWriter { doc, .. } = writer;
    let mut buf = BufWriter::new(Vec::new());
    doc.save(&mut buf)
        .map_err(|e| ExportError::Pdf(format!("save error: {e}")))?;
    buf.into_inner()
        .map_err(|e| ExportError::Pdf(format!("buffer error: {e}")))
}

/// Top-down layout cursor over a growing document.
struct PdfWriter {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    font: IndirectFontRef,
    bold: IndirectFontRef,
    y: f64,
}

impl PdfWriter {
    /// Start a fresh page when fewer than `needed` millimetres remain.
    fn ensure_space(&mut self, needed: f64) {
        if self.y - needed < BOTTOM_Y {
            let (page, layer) = self.doc.add_page(mm(PAGE_WIDTH), mm(PAGE_HEIGHT), "Layer 1");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = TOP_Y;
        }
    }

    fn spacer(&mut self, height: f64) {
        self.y -= height;
    }

    fn text_at(&self, text: &str, size: f64, x: f64, y: f64, font: &IndirectFontRef) {
        self.layer.use_text(text, size as f32, mm(x), mm(y), font);
    }

    fn title_line(&mut self, text: &str, size: f64) {
        self.ensure_space(10.0);
        self.layer.set_fill_color(rgb(0.0, 0.0, 0.0));
        self.text_at(text, size, MARGIN_LEFT, self.y, &self.bold);
        self.y -= 8.0;
    }

    fn heading(&mut self, text: &str) {
        self.ensure_space(12.0);
        self.layer.set_fill_color(rgb(0.0, 0.0, 0.0));
        self.text_at(text, 12.0, MARGIN_LEFT, self.y, &self.bold);
        self.y -= 7.0;
    }

    fn paragraph(&mut self, text: &str, size: f64, wrap_chars: usize) {
        self.layer.set_fill_color(rgb(0.0, 0.0, 0.0));
        for line in wrap_text(text, wrap_chars) {
            self.ensure_space(6.0);
            self.text_at(&line, size, MARGIN_LEFT, self.y, &self.font);
            self.y -= 4.5;
        }
        self.y -= 1.5;
    }

    /// Draw the structured table: header row on grey, alternating body
    /// shading, full grid lines. The table is kept on one page.
    fn table(&mut self, grid: &[Vec<String>]) {
        let columns = grid[0].len();
        let value_width = (CONTENT_WIDTH - PARAM_COL_WIDTH) / (columns - 1) as f64;
        let body_rows = grid.len() - 1;
        let table_height = HEADER_ROW_HEIGHT + BODY_ROW_HEIGHT * body_rows as f64;

        self.ensure_space(table_height + 2.0);

        let left = MARGIN_LEFT;
        let right = left + CONTENT_WIDTH;
        let top = self.y;

        // Column edges, left to right.
        let mut edges = Vec::with_capacity(columns + 1);
        edges.push(left);
        edges.push(left + PARAM_COL_WIDTH);
        for i in 1..columns {
            edges.push(left + PARAM_COL_WIDTH + value_width * i as f64);
        }

        // Header row.
        self.fill_rect(left, top, CONTENT_WIDTH, HEADER_ROW_HEIGHT, rgb(0.5, 0.5, 0.5));
        self.layer.set_fill_color(rgb(0.96, 0.96, 0.96));
        for (col, cell) in grid[0].iter().enumerate() {
            self.text_at(cell, 8.0, edges[col] + 1.5, top - 5.0, &self.bold);
        }

        // Body rows with alternating shading.
        let mut row_top = top - HEADER_ROW_HEIGHT;
        for (i, row) in grid[1..].iter().enumerate() {
            if i % 2 == 0 {
                self.fill_rect(left, row_top, CONTENT_WIDTH, BODY_ROW_HEIGHT, rgb(0.96, 0.96, 0.86));
            }
            self.layer.set_fill_color(rgb(0.0, 0.0, 0.0));
            for (col, cell) in row.iter().enumerate() {
                self.text_at(cell, 7.0, edges[col] + 1.5, row_top - 4.2, &self.font);
            }
            row_top -= BODY_ROW_HEIGHT;
        }
        let bottom = row_top;

        // Grid lines.
        self.layer.set_outline_color(rgb(0.0, 0.0, 0.0));
        self.layer.set_outline_thickness(0.4);
        self.stroke_line(left, top, right, top);
        let mut rule_y = top - HEADER_ROW_HEIGHT;
        self.stroke_line(left, rule_y, right, rule_y);
        for _ in 0..body_rows {
            rule_y -= BODY_ROW_HEIGHT;
            self.stroke_line(left, rule_y, right, rule_y);
        }
        for x in &edges {
            self.stroke_line(*x, top, *x, bottom);
        }

        self.y = bottom - 2.0;
    }

    fn fill_rect(&self, x: f64, y_top: f64, width: f64, height: f64, color: Color) {
        self.layer.set_fill_color(color);
        let ring = vec![
            (Point::new(mm(x), mm(y_top)), false),
            (Point::new(mm(x + width), mm(y_top)), false),
            (Point::new(mm(x + width), mm(y_top - height)), false),
            (Point::new(mm(x), mm(y_top - height)), false),
        ];
        self.layer.add_polygon(Polygon {
            rings: vec![ring],
            mode: PaintMode::Fill,
            winding_order: WindingOrder::NonZero,
        });
    }

    fn stroke_line(&self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.layer.add_line(Line {
            points: vec![
                (Point::new(mm(x1), mm(y1)), false),
                (Point::new(mm(x2), mm(y2)), false),
            ],
            is_closed: false,
        });
    }
}

/// Simple word-wrap helper for PDF text rendering.
fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.len() + word.len() + 1 > max_chars && !current.is_empty() {
            lines.push(current.clone());
            current.clear();
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_report;

    #[test]
    fn pdf_bytes_start_with_magic_number() {
        let report = sample_report("Metformin");
        let bytes = write_pdf(&report).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 1000);
    }

    #[test]
    fn overrides_and_category_fallbacks_both_render() {
        for drug in ["Penpulimab-kcqx", "Omeprazole", "Insulin", "Amlodipine"] {
            let report = sample_report(drug);
            assert!(write_pdf(&report).is_ok(), "{drug}");
        }
    }

    #[test]
    fn malformed_tables_never_produce_a_file() {
        let mut report = sample_report("Aspirin");
        report.table_data.structured_data[2].push("extra".into());
        assert!(matches!(
            write_pdf(&report),
            Err(ExportError::MalformedTable(_))
        ));
    }

    #[test]
    fn wrap_text_respects_the_width_limit() {
        let text = "one two three four five six seven eight nine ten";
        let lines = wrap_text(text, 12);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.len() <= 12, "{line}");
        }
        assert_eq!(lines.join(" "), text);
    }
}
