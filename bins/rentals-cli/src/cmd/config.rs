use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Args, ValueEnum};
use serde::Deserialize;

use rentals::TableSpec;

use super::error::CliError;

// ═══════════════════════════════════════════════════════════════
//  Config file (TOML)
// ═══════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// DynamoDB (AWS или совместимый endpoint)
    Dynamo,
    /// In-process хранилище, без сети
    Memory,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub region: Option<String>,
    pub endpoint: Option<String>,
    pub table: Option<String>,
    pub read_capacity: Option<i64>,
    pub write_capacity: Option<i64>,
    pub wait_secs: Option<u64>,
    pub backend: Option<Backend>,
    pub update_id: Option<String>,
    pub update_qty: Option<i64>,
    pub delete_id: Option<String>,
}

pub fn load_config(path: &Path) -> Result<Config, CliError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| CliError::Config(format!("cannot read config {}: {e}", path.display())))?;
    toml::from_str(&content).map_err(|e| CliError::Config(format!("bad config {}: {e}", path.display())))
}

// ═══════════════════════════════════════════════════════════════
//  CLI args
// ═══════════════════════════════════════════════════════════════

#[derive(Args, Clone, Debug, Default)]
pub struct RunArgs {
    /// Путь к rentals.toml (отсутствующий файл не ошибка)
    #[arg(long, default_value = "rentals.toml", env = "RENTALS_CONFIG")]
    pub config: PathBuf,

    /// Регион AWS. Без указания — цепочка провайдеров SDK
    #[arg(long, env = "AWS_REGION")]
    pub region: Option<String>,

    /// Endpoint DynamoDB (напр. http://localhost:8000 для DynamoDB Local)
    #[arg(long, env = "DYNAMO_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Имя таблицы
    #[arg(long, env = "RENTALS_TABLE")]
    pub table: Option<String>,

    /// Provisioned read capacity units
    #[arg(long)]
    pub read_capacity: Option<i64>,

    /// Provisioned write capacity units
    #[arg(long)]
    pub write_capacity: Option<i64>,

    /// Сколько секунд ждать готовности таблицы после создания (0 = не ждать)
    #[arg(long)]
    pub wait_secs: Option<u64>,

    /// Backend хранилища
    #[arg(long, value_enum)]
    pub backend: Option<Backend>,

    /// ID записи, у которой меняется количество
    #[arg(long)]
    pub update_id: Option<String>,

    /// Новое количество для --update-id
    #[arg(long)]
    pub update_qty: Option<i64>,

    /// ID удаляемой записи
    #[arg(long)]
    pub delete_id: Option<String>,
}

// ═══════════════════════════════════════════════════════════════
//  Effective — merged config
// ═══════════════════════════════════════════════════════════════

/// Итоговая конфигурация после мержа: rentals.toml < env/CLI
#[derive(Debug)]
pub struct Effective {
    pub region: Option<String>,
    pub endpoint: Option<String>,
    pub table: TableSpec,
    pub table_wait: Duration,
    pub backend: Backend,
    pub update_id: String,
    pub update_qty: i64,
    pub delete_id: String,
}

fn non_empty(v: Option<String>) -> Option<String> {
    v.filter(|s| !s.trim().is_empty())
}

/// Record ids are table keys: an explicitly empty one is a config error,
/// not something to send to the store.
fn record_id(field: &str, v: Option<String>, default: &str) -> Result<String, CliError> {
    match v {
        Some(id) if id.trim().is_empty() => Err(CliError::Config(format!("{field} must not be empty"))),
        Some(id) => Ok(id),
        None => Ok(default.to_string()),
    }
}

impl Effective {
    pub fn new(args: &RunArgs) -> Result<Self, CliError> {
        let cfg = match load_config(&args.config) {
            Ok(c) => c,
            Err(e) => {
                if args.config.exists() {
                    return Err(e);
                }
                Config::default()
            }
        };

        let read_capacity = args
            .read_capacity
            .or(cfg.read_capacity)
            .unwrap_or(TableSpec::DEFAULT_CAPACITY);
        let write_capacity = args
            .write_capacity
            .or(cfg.write_capacity)
            .unwrap_or(TableSpec::DEFAULT_CAPACITY);
        let name = non_empty(args.table.clone())
            .or(non_empty(cfg.table))
            .unwrap_or_else(|| TableSpec::DEFAULT_NAME.to_string());
        let table = TableSpec::new(name).with_capacity(read_capacity, write_capacity);
        table.validate().map_err(|e| CliError::Config(e.to_string()))?;

        let update_id = record_id("update_id", args.update_id.clone().or(cfg.update_id), "001")?;
        let delete_id = record_id("delete_id", args.delete_id.clone().or(cfg.delete_id), "007")?;

        Ok(Self {
            region: non_empty(args.region.clone()).or(non_empty(cfg.region)),
            endpoint: non_empty(args.endpoint.clone()).or(non_empty(cfg.endpoint)),
            table,
            table_wait: Duration::from_secs(args.wait_secs.or(cfg.wait_secs).unwrap_or(30)),
            backend: args.backend.or(cfg.backend).unwrap_or(Backend::Dynamo),
            update_id,
            update_qty: args.update_qty.or(cfg.update_qty).unwrap_or(5),
            delete_id,
        })
    }
}
