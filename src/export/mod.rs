// ==========================================
// 库位报表系统 - 导出层
// ==========================================
// 职责: 规范化记录 → Excel / PDF 文件
// ==========================================

pub mod error;
pub mod pdf_exporter;
pub mod xlsx_exporter;

pub use error::{ExportError, ExportResult};
pub use pdf_exporter::PdfExporter;
pub use xlsx_exporter::XlsxExporter;
