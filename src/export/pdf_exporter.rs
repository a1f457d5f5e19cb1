// ==========================================
// 库位报表系统 - PDF 导出
// ==========================================
// 版式: A4 横向 / 标题 + 生成时间 + 行数 / 固定 12 列
// 分页: 每页重复标题与表头,页脚显示页码
// 字体: 内置 Helvetica（仅 Latin-1,其它字符以 '?' 代替）
// ==========================================

use crate::domain::{Field, NormalizedRecord};
use crate::export::error::{ExportError, ExportResult};
use chrono::{DateTime, Utc};
use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};
use std::path::Path;
use tracing::info;

// ===== 版式常量（单位 mm）=====
const PAGE_WIDTH: f32 = 297.0;
const PAGE_HEIGHT: f32 = 210.0;
const MARGIN_LEFT: f32 = 10.0;
const MARGIN_BOTTOM: f32 = 15.0;
const TITLE_Y: f32 = 198.0;
const SUBTITLE_Y: f32 = 191.0;
const TABLE_HEADER_Y: f32 = 182.0;
const ROW_HEIGHT: f32 = 5.5;
const FOOTER_Y: f32 = 7.0;

const TITLE_FONT_SIZE: f32 = 14.0;
const TEXT_FONT_SIZE: f32 = 7.0;

/// 7pt Helvetica 平均字宽约 1.3mm
const CHAR_WIDTH_MM: f32 = 1.3;

/// 各列宽度（与 Field::EXPORT_COLUMNS 顺序一致,合计 277mm）
const COLUMN_WIDTHS: [f32; 12] = [
    14.0, 12.0, 17.0, 17.0, 45.0, 30.0, 28.0, 16.0, 28.0, 28.0, 20.0, 22.0,
];

/// 每页数据行数
pub fn rows_per_page() -> usize {
    ((TABLE_HEADER_Y - ROW_HEIGHT - MARGIN_BOTTOM) / ROW_HEIGHT).floor() as usize + 1
}

/// 总页数（无数据时仍输出 1 页表头）
pub fn page_count(record_count: usize) -> usize {
    record_count.div_ceil(rows_per_page()).max(1)
}

pub struct PdfExporter {
    title: String,
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

impl PdfExporter {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    /// 渲染为 PDF 字节
    pub fn render(
        &self,
        records: &[NormalizedRecord],
        generated_at: DateTime<Utc>,
    ) -> ExportResult<Vec<u8>> {
        let (doc, first_page, first_layer) =
            PdfDocument::new(&self.title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");

        let fonts = Fonts {
            regular: doc
                .add_builtin_font(BuiltinFont::Helvetica)
                .map_err(|e| ExportError::PdfWriteError(e.to_string()))?,
            bold: doc
                .add_builtin_font(BuiltinFont::HelveticaBold)
                .map_err(|e| ExportError::PdfWriteError(e.to_string()))?,
        };

        let per_page = rows_per_page();
        let total_pages = page_count(records.len());
        let subtitle = subtitle_line(generated_at, records.len());

        for page_idx in 0..total_pages {
            let layer = if page_idx == 0 {
                doc.get_page(first_page).get_layer(first_layer)
            } else {
                let (page, layer) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
                doc.get_page(page).get_layer(layer)
            };

            self.draw_page_header(&layer, &fonts, &subtitle);

            let start = page_idx * per_page;
            let end = (start + per_page).min(records.len());
            let mut y = TABLE_HEADER_Y - ROW_HEIGHT;
            for record in &records[start..end] {
                draw_row(&layer, &fonts.regular, y, |field| {
                    record.text(field).map(|v| v.into_owned()).unwrap_or_default()
                });
                y -= ROW_HEIGHT;
            }

            layer.use_text(
                format!("Page {} / {}", page_idx + 1, total_pages),
                TEXT_FONT_SIZE,
                Mm(PAGE_WIDTH - MARGIN_LEFT - 20.0),
                Mm(FOOTER_Y),
                &fonts.regular,
            );
        }

        doc.save_to_bytes()
            .map_err(|e| ExportError::PdfWriteError(e.to_string()))
    }

    fn draw_page_header(&self, layer: &PdfLayerReference, fonts: &Fonts, subtitle: &str) {
        layer.use_text(
            sanitize(&self.title),
            TITLE_FONT_SIZE,
            Mm(MARGIN_LEFT),
            Mm(TITLE_Y),
            &fonts.bold,
        );
        layer.use_text(
            subtitle,
            TEXT_FONT_SIZE,
            Mm(MARGIN_LEFT),
            Mm(SUBTITLE_Y),
            &fonts.regular,
        );
        draw_row(layer, &fonts.bold, TABLE_HEADER_Y, |field| {
            field.header().to_string()
        });
    }

    /// 写入文件
    ///
    /// generated_at: 报表页眉时间（从文件导出时为导入批次时间）
    pub fn write_to_path(
        &self,
        records: &[NormalizedRecord],
        path: &Path,
        generated_at: DateTime<Utc>,
    ) -> ExportResult<()> {
        let bytes = self.render(records, generated_at)?;
        std::fs::write(path, bytes)?;
        info!(
            "PDF 已导出: {} ({} 行, {} 页)",
            path.display(),
            records.len(),
            page_count(records.len())
        );
        Ok(())
    }
}

/// 页眉副标题: 生成时间 + 行数
fn subtitle_line(generated_at: DateTime<Utc>, row_count: usize) -> String {
    format!(
        "Generated: {}    Rows: {}",
        generated_at.format("%Y-%m-%d %H:%M UTC"),
        row_count
    )
}

fn draw_row(
    layer: &PdfLayerReference,
    font: &IndirectFontRef,
    y: f32,
    cell_text: impl Fn(Field) -> String,
) {
    let mut x = MARGIN_LEFT;
    for (field, width) in Field::EXPORT_COLUMNS.iter().zip(COLUMN_WIDTHS) {
        let text = fit_to_width(&sanitize(&cell_text(*field)), width);
        if !text.is_empty() {
            layer.use_text(text, TEXT_FONT_SIZE, Mm(x + 1.0), Mm(y), font);
        }
        x += width;
    }
}

/// 内置字体仅支持 Latin-1,超出范围的字符替换为 '?'
fn sanitize(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_control() {
                ' '
            } else if (c as u32) < 0x100 {
                c
            } else {
                '?'
            }
        })
        .collect()
}

/// 超出列宽的文本截断并以 ".." 结尾
fn fit_to_width(text: &str, width_mm: f32) -> String {
    let max_chars = ((width_mm - 2.0) / CHAR_WIDTH_MM).floor().max(1.0) as usize;
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let keep = max_chars.saturating_sub(2);
    let mut truncated: String = text.chars().take(keep).collect();
    truncated.push_str("..");
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FieldValue;
    use chrono::TimeZone;

    #[test]
    fn test_column_widths_fill_page() {
        let total: f32 = COLUMN_WIDTHS.iter().sum();
        assert!((total - (PAGE_WIDTH - 2.0 * MARGIN_LEFT)).abs() < 0.01);
        assert_eq!(COLUMN_WIDTHS.len(), Field::EXPORT_COLUMNS.len());
    }

    #[test]
    fn test_page_count() {
        let per_page = rows_per_page();
        assert!(per_page > 20);
        assert_eq!(page_count(0), 1);
        assert_eq!(page_count(per_page), 1);
        assert_eq!(page_count(per_page + 1), 2);
    }

    #[test]
    fn test_fit_to_width() {
        assert_eq!(fit_to_width("1A", 14.0), "1A");
        let long = "A very long product name that will not fit";
        let fitted = fit_to_width(long, 14.0);
        assert!(fitted.ends_with(".."));
        assert!(fitted.chars().count() <= 9);
    }

    #[test]
    fn test_subtitle_uses_given_timestamp() {
        let imported_at = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 0).unwrap();

        assert_eq!(
            subtitle_line(imported_at, 42),
            "Generated: 2024-03-09 14:05 UTC    Rows: 42"
        );
    }

    #[test]
    fn test_sanitize() {
        assert_eq!(sanitize("Café"), "Café");
        assert_eq!(sanitize("מחסן 1"), "???? 1");
        assert_eq!(sanitize("a\tb"), "a b");
    }

    #[test]
    fn test_render_produces_pdf() {
        let records: Vec<NormalizedRecord> = (0..(rows_per_page() + 3))
            .map(|i| {
                NormalizedRecord::new(i + 2)
                    .with_text(Field::Name, Some("Widget"))
                    .with_value(Field::Position1, Some(FieldValue::Integer(i as i64)))
            })
            .collect();

        let bytes = PdfExporter::new("Inventory Location Report")
            .render(&records, Utc::now())
            .unwrap();

        assert!(bytes.starts_with(b"%PDF"));
    }
}
