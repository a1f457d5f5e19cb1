// ==========================================
// 导入 + 引擎 集成测试
// ==========================================
// 测试目标: 文件 → 规范化记录 → 导出过滤 的完整流程
// ==========================================


use inventory_report::config::ColumnLayout;
use inventory_report::domain::{DqLevel, Field, LocationCode, RawRow};
use inventory_report::engine::{extract_and_normalize, prepare_export};
use inventory_report::importer::{
    extract_record, parse_location, ImportError, RecordImporter, RecordImporterImpl,
};
use inventory_report::logging;
use tempfile::tempdir;
use test_helpers::{sample_rows, write_csv, write_narrow_csv, write_xlsx, InventoryRow};

fn names(records: &[inventory_report::NormalizedRecord]) -> Vec<String> {
    records
        .iter()
        .map(|r| r.text(Field::Name).unwrap_or_default().into_owned())
        .collect()
}

#[test]
fn test_csv_import_sorts_and_reports() {
    logging::init_test();
    let dir = tempdir().unwrap();
    let path = write_csv(&dir, "inventory.csv", &sample_rows()).unwrap();

    let batch = RecordImporterImpl::new(ColumnLayout::default())
        .import(&path)
        .unwrap();

    assert_eq!(batch.file_name.as_deref(), Some("inventory.csv"));
    assert_eq!(batch.total_rows, 6);
    assert_eq!(
        names(&batch.records),
        vec![
            "Nut",
            "Bolt",
            "Washer",
            "Gadget",
            "Widget Foo",
            "Loose item without code"
        ]
    );

    // 预览保留不完整记录,完整性报告给出原因
    let summary = &batch.dq_report.summary;
    assert_eq!(summary.total_rows, 6);
    assert_eq!(summary.complete, 4);
    assert_eq!(summary.incomplete, 2);
    assert!(batch
        .dq_report
        .violations
        .iter()
        .any(|v| v.row_number == 5 && v.field == "Quantity" && v.level == DqLevel::Warning));
}

#[test]
fn test_end_to_end_row_values() {
    let dir = tempdir().unwrap();
    let path = write_csv(&dir, "inventory.csv", &sample_rows()).unwrap();

    let batch = RecordImporterImpl::new(ColumnLayout::default())
        .import(&path)
        .unwrap();
    let widget = batch
        .records
        .iter()
        .find(|r| r.text(Field::Name).as_deref() == Some("Widget Foo"))
        .unwrap();

    assert_eq!(widget.row_number, 3);
    assert_eq!(widget.storage().as_deref(), Some("3"));
    assert_eq!(widget.shelf().as_deref(), Some("C"));
    assert_eq!(widget.position1(), Some(2));
    assert_eq!(widget.position2(), Some(7));
    assert_eq!(widget.text(Field::OriginalLocation).as_deref(), Some("3C-2/7"));
    assert_eq!(widget.text(Field::SerialNumber).as_deref(), Some("SN123"));
    assert_eq!(widget.text(Field::Quantity).as_deref(), Some("5"));
    assert_eq!(widget.text(Field::PricePerUnit).as_deref(), Some("12.5"));
}

#[test]
fn test_csv_and_xlsx_produce_same_records() {
    let dir = tempdir().unwrap();
    let csv_path = write_csv(&dir, "inventory.csv", &sample_rows()).unwrap();
    let xlsx_path = write_xlsx(&dir, "inventory.xlsx", &sample_rows()).unwrap();
    let importer = RecordImporterImpl::new(ColumnLayout::default());

    let from_csv = importer.import(&csv_path).unwrap();
    let from_xlsx = importer.import(&xlsx_path).unwrap();

    assert_eq!(from_csv.records, from_xlsx.records);
    assert_eq!(from_csv.dq_report, from_xlsx.dq_report);
}

#[test]
fn test_missing_columns_fail_whole_batch() {
    let dir = tempdir().unwrap();
    let path = write_narrow_csv(&dir, "narrow.csv", 10).unwrap();

    let result = RecordImporterImpl::new(ColumnLayout::default()).import(&path);

    match result {
        Err(ImportError::MissingColumns {
            sheet_width,
            missing,
        }) => {
            assert_eq!(sheet_width, 10);
            assert_eq!(missing.len(), 4);
            assert!(missing[0].starts_with("单价"));
            assert!(missing.iter().any(|m| m.contains("O列")));
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_layout_without_prices_leaves_prices_absent() {
    let dir = tempdir().unwrap();
    let path = write_csv(&dir, "inventory.csv", &sample_rows()).unwrap();
    let layout = ColumnLayout::without_prices();

    let batch = RecordImporterImpl::new(layout).import(&path).unwrap();

    assert_eq!(batch.records.len(), 6);
    assert!(batch
        .records
        .iter()
        .all(|r| r.text(Field::PricePerUnit).is_none() && r.text(Field::Total).is_none()));
    assert_eq!(batch.dq_report.summary.complete, 4);
}

#[test]
fn test_export_drops_record_missing_quantity() {
    let layout = ColumnLayout::default();
    let rows: Vec<RawRow> = sample_rows()
        .iter()
        .enumerate()
        .map(|(i, row)| RawRow::new(i + 2, row.cells()))
        .collect();

    let preview = extract_and_normalize(&rows, &layout).unwrap();
    assert!(names(&preview).contains(&"Nut".to_string()));

    let exported = prepare_export(preview).unwrap();
    assert_eq!(names(&exported), vec!["Bolt", "Washer", "Gadget", "Widget Foo"]);
    assert!(exported.iter().all(|r| r.is_export_complete()));
}

#[test]
fn test_location_parser_properties() {
    let expected = LocationCode {
        raw: "1A-1/5".to_string(),
        storage: '1',
        shelf: 'A',
        position1: 1,
        position2: 5,
    };
    assert_eq!(parse_location(Some("1A-1/5")), Some(expected));

    let wrapped = parse_location(Some("(2B-10/3)")).unwrap();
    assert_eq!(
        (wrapped.storage, wrapped.shelf, wrapped.position1, wrapped.position2),
        ('2', 'B', 10, 3)
    );

    for text in ["1A1/5", "1A-15", "1A-x/5", ""] {
        assert_eq!(parse_location(Some(text)), None, "input {:?}", text);
    }
    assert_eq!(parse_location(None), None);
}

#[test]
fn test_description_without_code_keeps_full_name() {
    let row = RawRow::new(
        2,
        InventoryRow::complete("Spare part (no code)").cells(),
    );

    let record = extract_record(&row, &ColumnLayout::default());

    assert!(record.location.is_none());
    assert_eq!(record.original_location(), Some("no code"));
    assert_eq!(record.name(), Some("Spare part"));
}
