// ==========================================
// 库位报表系统 - 报表 API
// ==========================================
// 职责: 封装预览与导出流程,供命令行调用
// 预览: 文件 → 规范化记录（不过滤）+ 完整性报告
// 导出: 规范化记录 → 过滤排序 → Excel / PDF 文件
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::ReportConfig;
use crate::domain::{DqSummary, DqViolation, NormalizedRecord};
use crate::engine::prepare_export;
use crate::export::{PdfExporter, XlsxExporter};
use crate::importer::{RecordImporter, RecordImporterImpl};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 预览响应
#[derive(Debug, Clone, Serialize)]
pub struct PreviewResponse {
    pub message: String,
    /// processed_<原文件名>
    pub filename: String,
    /// 排序后的全部记录（未做导出过滤）
    pub data: Vec<NormalizedRecord>,
    pub dq_summary: DqSummary,
    pub dq_violations: Vec<DqViolation>,
    pub batch_id: String,
    /// 导入时间（导出 PDF 时作为页眉时间）
    pub imported_at: DateTime<Utc>,
    pub elapsed_ms: u128,
}

/// 导出请求
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExportRequest {
    /// 输出文件名（可选,缺省使用配置中的文件名）
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub data: Vec<NormalizedRecord>,
    /// PDF 页眉时间（可选,缺省为导出时刻）
    #[serde(default)]
    pub generated_at: Option<DateTime<Utc>>,
}

/// 导出响应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportResponse {
    /// 输出文件路径
    pub path: PathBuf,
    /// 写出的记录数
    pub exported: usize,
    /// 因字段不完整被剔除的记录数
    pub dropped: usize,
}

#[derive(Clone, Copy)]
enum ExportFormat {
    Xlsx,
    Pdf,
}

impl ExportFormat {
    fn extension(self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Pdf => "pdf",
        }
    }
}

/// 报表 API
pub struct ReportApi {
    config: ReportConfig,
}

impl ReportApi {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// 预览上传文件
    ///
    /// # 返回
    /// - Ok(PreviewResponse): 全部记录（含不完整记录）及完整性报告
    /// - Err(ApiError): 文件错误或结构错误（缺列、无数据行）
    pub fn preview_file(&self, file_path: &Path) -> ApiResult<PreviewResponse> {
        let importer = RecordImporterImpl::new(self.config.column_layout.clone());
        let batch = importer.import(file_path)?;

        let filename = format!(
            "processed_{}",
            batch.file_name.as_deref().unwrap_or("upload")
        );

        Ok(PreviewResponse {
            message: "File processed successfully".to_string(),
            filename,
            data: batch.records,
            dq_summary: batch.dq_report.summary,
            dq_violations: batch.dq_report.violations,
            batch_id: batch.batch_id,
            imported_at: batch.imported_at,
            elapsed_ms: batch.elapsed_ms,
        })
    }

    /// 导出 Excel
    pub fn export_xlsx(&self, request: ExportRequest, out_dir: &Path) -> ApiResult<ExportResponse> {
        self.export(request, out_dir, ExportFormat::Xlsx)
    }

    /// 导出 PDF
    pub fn export_pdf(&self, request: ExportRequest, out_dir: &Path) -> ApiResult<ExportResponse> {
        self.export(request, out_dir, ExportFormat::Pdf)
    }

    fn export(
        &self,
        request: ExportRequest,
        out_dir: &Path,
        format: ExportFormat,
    ) -> ApiResult<ExportResponse> {
        if !out_dir.is_dir() {
            return Err(ApiError::InvalidInput(format!(
                "输出目录不存在: {}",
                out_dir.display()
            )));
        }

        let default_name = match format {
            ExportFormat::Xlsx => &self.config.export.xlsx_filename,
            ExportFormat::Pdf => &self.config.export.pdf_filename,
        };
        let file_name = output_file_name(
            request.filename.as_deref().unwrap_or(default_name),
            format.extension(),
        )?;
        let path = out_dir.join(file_name);
        let generated_at = request.generated_at.unwrap_or_else(Utc::now);

        // 反序列化的记录不带行号,按请求顺序重新编号
        let records: Vec<NormalizedRecord> = request
            .data
            .into_iter()
            .enumerate()
            .map(|(idx, mut record)| {
                record.row_number = idx + 1;
                record
            })
            .collect();
        let total = records.len();

        let exported = prepare_export(records)?;
        let dropped = total - exported.len();

        match format {
            ExportFormat::Xlsx => {
                XlsxExporter::new(&self.config.export.sheet_name).write_to_path(&exported, &path)?
            }
            ExportFormat::Pdf => {
                PdfExporter::new(&self.config.export.report_title)
                .write_to_path(&exported, &path, generated_at)?
            }
        }

        Ok(ExportResponse {
            path,
            exported: exported.len(),
            dropped,
        })
    }
}

/// 解析导出请求 JSON
///
/// 接受两种形式: 记录数组,或 `{ "filename": ..., "data": [...] }` 对象
pub fn parse_export_payload(json: &str) -> ApiResult<ExportRequest> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Payload {
        Records(Vec<NormalizedRecord>),
        Request(ExportRequest),
    }

    let payload: Payload = serde_json::from_str(json)
        .map_err(|e| ApiError::InvalidInput(format!("导出数据格式错误: {}", e)))?;

    Ok(match payload {
        Payload::Records(data) => ExportRequest {
            data,
            ..ExportRequest::default()
        },
        Payload::Request(request) => request,
    })
}

/// 输出文件名: 仅保留最后一段路径,非常规字符替换为 '_',补全扩展名
fn output_file_name(requested: &str, extension: &str) -> ApiResult<String> {
    let base = Path::new(requested.trim())
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    let cleaned = cleaned.trim_start_matches('.').to_string();

    if cleaned.is_empty() {
        return Err(ApiError::InvalidInput(format!("无效的文件名: {:?}", requested)));
    }

    let has_extension = Path::new(&cleaned)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension));
    if has_extension {
        Ok(cleaned)
    } else {
        Ok(format!("{}.{}", cleaned, extension))
    }
}
