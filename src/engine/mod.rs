// ==========================================
// 库位报表系统 - 引擎层
// ==========================================
// 职责: 库位展平、多键排序、完整性校验、导出过滤
// 红线: 不读写文件,单批次内无共享可变状态
// ==========================================

pub mod completeness;
pub mod normalizer;
pub mod ordering;
pub mod pipeline;

// 重导出核心引擎
pub use completeness::CompletenessValidator;
pub use normalizer::{filter_for_export, flatten, normalize_and_sort};
pub use ordering::{compare_mixed, compare_records, sort_records};
pub use pipeline::{extract_and_normalize, prepare_export};
