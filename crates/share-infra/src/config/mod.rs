//! # Configuration Loader / 配置加载器
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Read TOML configuration files / 读取 TOML 配置文件
//! - ✅ Map `[extras]` and `[resolver]` tables to DTOs / 将 `[extras]` 与 `[resolver]` 表映射为 DTO
//! - ✅ Report I/O and parsing errors with context / 报告带上下文的 I/O 和解析错误
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No normalization rules / 禁止规范化规则**

mod resolver_config;

pub use resolver_config::FsResolverConfig;

use anyhow::Context;
use share_core::ShareConfig;
use std::path::Path;

/// Everything a host needs to wire the normalizer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShareNormalizerConfig {
    pub share: ShareConfig,
    pub resolver: FsResolverConfig,
}

impl ShareNormalizerConfig {
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        Ok(Self {
            share: ShareConfig::from_toml(toml_value)?,
            resolver: FsResolverConfig::from_toml(toml_value),
        })
    }
}

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// # Errors / 错误
///
/// Returns error if:
/// - File cannot be read (I/O error)
/// - Content is not valid TOML (parse error)
pub fn load_config(config_path: impl AsRef<Path>) -> anyhow::Result<ShareNormalizerConfig> {
    let config_path = config_path.as_ref();
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    ShareNormalizerConfig::from_toml(&toml_value)
}
