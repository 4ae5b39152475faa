// ==========================================
// 钢板质量证明书校验 - 命令行入口
// ==========================================
// 用法: mill-cert-audit [--config settings.json] [--pretty] <certificate.json>...
// 输入: 每个文件为一张证书或证书数组（JSON）
// 输出: 标准输出打印校验报告 JSON；日志写标准错误
// 退出码: 全部通过为 0，存在未通过或中止的证书为 1
// ==========================================

use anyhow::{Context, Result};
use clap::Parser;
use mill_cert_audit::config::AuditSettings;
use mill_cert_audit::domain::{BatchSummary, Certificate, CertificateReport};
use mill_cert_audit::engine::VerificationOrchestrator;
use mill_cert_audit::logging;
use mill_cert_audit::rules::RuleBook;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "mill-cert-audit")]
#[command(version)]
#[command(about = "按船级社规则表校验钢板质量证明书", long_about = None)]
struct Cli {
    /// 运行配置文件（JSON）
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// 美化输出 JSON
    #[arg(long)]
    pretty: bool,

    /// 日志以 JSON 行格式输出
    #[arg(long)]
    log_json: bool,

    /// 禁用并行（覆盖配置文件中的 parallel）
    #[arg(long)]
    sequential: bool,

    /// 证书文件
    #[arg(value_name = "CERTIFICATE", required = true)]
    files: Vec<PathBuf>,
}

/// 单个文件可以是一张证书或证书数组
#[derive(Deserialize)]
#[serde(untagged)]
enum CertificateInput {
    Many(Vec<Certificate>),
    One(Box<Certificate>),
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AuditOutput {
    summary: BatchSummary,
    results: Vec<AuditEntry>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum AuditEntry {
    Report(Box<CertificateReport>),
    Aborted {
        #[serde(rename = "steelPlant")]
        steel_plant: String,
        grade: String,
        error: String,
    },
}

fn load_certificates(path: &Path) -> Result<Vec<Certificate>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("读取证书文件失败: {}", path.display()))?;
    let input: CertificateInput = serde_json::from_str(&text)
        .with_context(|| format!("证书文件格式错误: {}", path.display()))?;
    Ok(match input {
        CertificateInput::Many(certificates) => certificates,
        CertificateInput::One(certificate) => vec![*certificate],
    })
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut settings = match &cli.config {
        Some(path) => AuditSettings::load(path)
            .with_context(|| format!("加载配置文件失败: {}", path.display()))?,
        None => AuditSettings::default(),
    };
    if cli.sequential {
        settings.parallel = false;
    }

    match settings.log_filter.as_deref() {
        Some(filter) => logging::init_with_filter(filter, cli.log_json),
        None if cli.log_json => {
            let filter = std::env::var("RUST_LOG")
                .unwrap_or_else(|_| logging::DEFAULT_FILTER.to_string());
            logging::init_with_filter(&filter, true);
        }
        None => logging::init(),
    }

    tracing::info!("{} {}", mill_cert_audit::APP_NAME, mill_cert_audit::VERSION);

    let book = RuleBook::with_settings(&settings).context("构建规则表失败")?;

    let mut certificates = Vec::new();
    for path in &cli.files {
        certificates.extend(load_certificates(path)?);
    }
    tracing::info!(files = cli.files.len(), certificates = certificates.len(), "证书加载完成");

    let orchestrator = VerificationOrchestrator::with_settings(&book, settings);
    let (results, summary) = orchestrator.verify_batch(&certificates);

    let entries = certificates
        .iter()
        .zip(results)
        .map(|(certificate, result)| match result {
            Ok(report) => AuditEntry::Report(Box::new(report)),
            Err(e) => AuditEntry::Aborted {
                steel_plant: certificate.steel_plant.clone(),
                grade: certificate.grade.clone(),
                error: e.to_string(),
            },
        })
        .collect();

    let output = AuditOutput {
        summary,
        results: entries,
    };
    let json = if cli.pretty {
        serde_json::to_string_pretty(&output)
    } else {
        serde_json::to_string(&output)
    }
    .context("序列化校验报告失败")?;
    println!("{}", json);

    Ok(if summary.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
