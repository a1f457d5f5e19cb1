// ==========================================
// 配置集成测试
// ==========================================
// 测试目标: 自定义列布局从配置文件加载并作用于导入
// ==========================================

use inventory_report::api::ReportApi;
use inventory_report::config::{ConfigError, ConfigManager, SourceColumn};
use inventory_report::domain::Field;
use std::io::Write;
use tempfile::{tempdir, NamedTempFile};

fn config_file(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", json).unwrap();
    file
}

#[test]
fn test_custom_layout_drives_import() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("compact.csv");
    std::fs::write(
        &input,
        "Description,Qty,Serial,Customer,Client\n\
         Widget Foo (3C-2/7),qty: 5 units,SN123 None,Acme,Globex\n\
         Bolt (1A-2/5),2,SN-1,Acme,Globex\n",
    )
    .unwrap();

    let config = config_file(
        r#"{
            "column_layout": {
                "description": 0,
                "quantity": 1,
                "serial_number": 2,
                "customer": 3,
                "client": 4
            },
            "export": { "sheet_name": "Shelves" }
        }"#,
    );

    let manager = ConfigManager::load(Some(config.path())).unwrap();
    assert_eq!(manager.source(), Some(config.path()));
    assert_eq!(
        manager.config().column_layout.index_of(SourceColumn::PricePerUnit),
        None
    );
    assert_eq!(manager.config().export.sheet_name, "Shelves");
    assert_eq!(
        manager.config().export.pdf_filename,
        "formatted_locations.pdf"
    );

    let preview = ReportApi::new(manager.into_config())
        .preview_file(&input)
        .unwrap();

    assert_eq!(preview.data.len(), 2);
    assert_eq!(preview.data[0].text(Field::Name).as_deref(), Some("Bolt"));
    assert_eq!(preview.data[1].text(Field::Quantity).as_deref(), Some("5"));
    assert_eq!(preview.dq_summary.complete, 2);
}

#[test]
fn test_layout_without_description_is_rejected() {
    let config = config_file(r#"{ "column_layout": { "quantity": 3 } }"#);

    let result = ConfigManager::load(Some(config.path()));

    assert!(matches!(result, Err(ConfigError::Invalid(_))));
}

#[test]
fn test_explicit_missing_config_is_error() {
    let dir = tempdir().unwrap();

    let result = ConfigManager::load(Some(&dir.path().join("missing.json")));

    assert!(matches!(result, Err(ConfigError::NotFound(_))));
}
