// ==========================================
// 库位报表系统 - 命令行入口
// ==========================================
// 用法:
//   inventory-report preview <file> [--config <json>]
//   inventory-report export <file> <out_dir> [--config <json>]
//   inventory-report export-json <records.json> <out_dir> [--config <json>]
//
// 成功: 结果 JSON 输出到 stdout
// 失败: ErrorResponse JSON 输出到 stderr,退出码 1
// ==========================================

use chrono::{DateTime, Utc};
use inventory_report::api::{
    map_api_error, parse_export_payload, ApiError, ApiResult, ExportRequest, ReportApi,
};
use inventory_report::config::ConfigManager;
use inventory_report::logging;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const USAGE: &str = "用法:
  inventory-report preview <file> [--config <json>]
  inventory-report export <file> <out_dir> [--config <json>]
  inventory-report export-json <records.json> <out_dir> [--config <json>]";

/// 命令行参数
struct CliArgs {
    command: String,
    positional: Vec<String>,
    config_path: Option<PathBuf>,
}

fn parse_args(args: impl Iterator<Item = String>) -> ApiResult<CliArgs> {
    let mut args = args.peekable();
    let command = args
        .next()
        .ok_or_else(|| ApiError::InvalidInput(format!("缺少子命令\n{}", USAGE)))?;

    let mut positional = Vec::new();
    let mut config_path = None;
    while let Some(arg) = args.next() {
        if arg == "--config" {
            let path = args
                .next()
                .ok_or_else(|| ApiError::InvalidInput("--config 缺少路径参数".to_string()))?;
            config_path = Some(PathBuf::from(path));
        } else {
            positional.push(arg);
        }
    }

    Ok(CliArgs {
        command,
        positional,
        config_path,
    })
}

fn expect_args<'a>(args: &'a CliArgs, count: usize) -> ApiResult<&'a [String]> {
    if args.positional.len() != count {
        return Err(ApiError::InvalidInput(format!(
            "{} 需要 {} 个参数,实际 {} 个\n{}",
            args.command,
            count,
            args.positional.len(),
            USAGE
        )));
    }
    Ok(&args.positional)
}

fn run(args: CliArgs) -> ApiResult<serde_json::Value> {
    let manager = ConfigManager::load(args.config_path.as_deref())?;
    let snapshot = manager.snapshot_json()?;
    tracing::debug!("配置来源: {:?}, 快照: {}", manager.source(), snapshot);
    let api = ReportApi::new(manager.into_config());

    match args.command.as_str() {
        "preview" => {
            let params = expect_args(&args, 1)?;
            let response = api.preview_file(Path::new(&params[0]))?;
            to_json(&response)
        }
        "export" => {
            let params = expect_args(&args, 2)?;
            let preview = api.preview_file(Path::new(&params[0]))?;
            // PDF 页眉使用导入批次时间
            export_both(
                &api,
                preview.data,
                Some(preview.imported_at),
                Path::new(&params[1]),
            )
        }
        "export-json" => {
            let params = expect_args(&args, 2)?;
            let content = std::fs::read_to_string(&params[0]).map_err(|e| {
                ApiError::InvalidInput(format!("无法读取 {}: {}", params[0], e))
            })?;
            let request = parse_export_payload(&content)?;
            // 指定文件名时按扩展名只导出一种格式
            let wants_pdf = request
                .filename
                .as_deref()
                .map(|name| name.to_ascii_lowercase().ends_with(".pdf"));
            match wants_pdf {
                Some(true) => to_json(&api.export_pdf(request, Path::new(&params[1]))?),
                Some(false) => to_json(&api.export_xlsx(request, Path::new(&params[1]))?),
                None => export_both(
                    &api,
                    request.data,
                    request.generated_at,
                    Path::new(&params[1]),
                ),
            }
        }
        other => Err(ApiError::InvalidInput(format!(
            "未知子命令: {}\n{}",
            other, USAGE
        ))),
    }
}

fn export_both(
    api: &ReportApi,
    data: Vec<inventory_report::NormalizedRecord>,
    generated_at: Option<DateTime<Utc>>,
    out_dir: &Path,
) -> ApiResult<serde_json::Value> {
    let xlsx = api.export_xlsx(
        ExportRequest {
            filename: None,
            data: data.clone(),
            generated_at,
        },
        out_dir,
    )?;
    let pdf = api.export_pdf(
        ExportRequest {
            filename: None,
            data,
            generated_at,
        },
        out_dir,
    )?;
    Ok(serde_json::json!({ "xlsx": xlsx, "pdf": pdf }))
}

fn to_json<T: serde::Serialize>(value: &T) -> ApiResult<serde_json::Value> {
    serde_json::to_value(value).map_err(|e| ApiError::InternalError(e.to_string()))
}

fn main() -> ExitCode {
    logging::init();

    tracing::info!("{} v{}", inventory_report::APP_NAME, inventory_report::VERSION);

    let result = parse_args(std::env::args().skip(1)).and_then(run);
    match result {
        Ok(output) => {
            println!(
                "{}",
                serde_json::to_string_pretty(&output).unwrap_or_else(|_| output.to_string())
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!("命令执行失败: {}", err);
            let response = map_api_error(&err);
            eprintln!(
                "{}",
                serde_json::to_string(&response).unwrap_or_else(|_| err.to_string())
            );
            ExitCode::FAILURE
        }
    }
}
