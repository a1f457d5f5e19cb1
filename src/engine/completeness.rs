// ==========================================
// 库位报表系统 - 完整性校验器
// ==========================================
// 职责: 标记缺少导出必填字段的记录 + 汇总报告
// 说明: 仅记录,不剔除（剔除在导出阶段进行）
// ==========================================

use crate::domain::{DqLevel, DqReport, DqSummary, DqViolation, Field, NormalizedRecord};

pub struct CompletenessValidator;

impl CompletenessValidator {
    /// 校验单条记录
    pub fn validate_record(&self, record: &NormalizedRecord) -> Vec<DqViolation> {
        let mut violations: Vec<DqViolation> = record
            .missing_fields(&Field::EXPORT_REQUIRED)
            .into_iter()
            .map(|field| DqViolation {
                row_number: record.row_number,
                level: DqLevel::Warning,
                field: field.header().to_string(),
                message: format!("{} 缺失,导出时将剔除该行", field.header()),
            })
            .collect();

        // 描述中有括号文本但不是合法库位编码
        if let (Some(text), None) = (record.text(Field::OriginalLocation), record.storage()) {
            violations.push(DqViolation {
                row_number: record.row_number,
                level: DqLevel::Info,
                field: Field::OriginalLocation.header().to_string(),
                message: format!("库位编码无法解析: {}", text),
            });
        }

        violations
    }

    /// 生成完整性报告
    pub fn validate(&self, records: &[NormalizedRecord]) -> DqReport {
        let mut violations = Vec::new();
        let mut complete = 0;

        for record in records {
            if record.is_export_complete() {
                complete += 1;
            }
            violations.extend(self.validate_record(record));
        }

        DqReport {
            summary: DqSummary {
                total_rows: records.len(),
                complete,
                incomplete: records.len() - complete,
            },
            violations,
        }
    }
}
