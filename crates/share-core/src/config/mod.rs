//! # Pure Data Module / 纯数据模块
//!
//! ## Responsibilities / 职责
//!
//! - ✅ Define the extras key names consulted during normalization / 定义规范化时读取的 extras 键名
//! - ✅ Provide TOML → DTO mapping / 提供 TOML → DTO 的映射
//!
//! ## Prohibited / 禁止事项
//!
//! ❌ **No normalization logic / 禁止任何规范化逻辑**
//! ❌ **No validation logic / 禁止验证逻辑**

/// Platform extra keys (Android `Intent` constants).
pub const EXTRA_TEXT: &str = "android.intent.extra.TEXT";
pub const EXTRA_SUBJECT: &str = "android.intent.extra.SUBJECT";
pub const EXTRA_STREAM: &str = "android.intent.extra.STREAM";
pub const EXTRA_EXIT_ON_SENT: &str = "exit_on_sent";

/// Names of the extras entries the normalizer reads.
/// 规范化器读取的 extras 键名
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtrasKeys {
    /// Literal shared text, used as the `url` of a text item
    pub text: String,
    /// Shared subject, used as the `title` of a text item
    pub subject: String,
    /// Single attached stream reference
    pub stream: String,
    /// "close after send" flag
    pub exit_on_sent: String,
}

impl ExtrasKeys {
    /// v1 默认值（Android 平台常量）
    pub fn defaults() -> Self {
        Self {
            text: EXTRA_TEXT.to_string(),
            subject: EXTRA_SUBJECT.to_string(),
            stream: EXTRA_STREAM.to_string(),
            exit_on_sent: EXTRA_EXIT_ON_SENT.to_string(),
        }
    }
}

impl Default for ExtrasKeys {
    fn default() -> Self {
        Self::defaults()
    }
}

/// Normalization configuration DTO (pure data, no logic)
/// 规范化配置 DTO（纯数据，无逻辑）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShareConfig {
    pub keys: ExtrasKeys,
}

impl ShareConfig {
    /// Create ShareConfig from a TOML value.
    /// 从 TOML 值创建 ShareConfig
    ///
    /// Reads the `[extras]` table. Keys that are missing keep the platform
    /// constant, so an empty document yields [`ShareConfig::default`].
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let defaults = ExtrasKeys::defaults();
        let extras = toml_value.get("extras");
        let read = |name: &str, fallback: String| -> String {
            extras
                .and_then(|e| e.get(name))
                .and_then(|v| v.as_str())
                .map(str::to_string)
                .unwrap_or(fallback)
        };

        Ok(Self {
            keys: ExtrasKeys {
                text: read("text", defaults.text),
                subject: read("subject", defaults.subject),
                stream: read("stream", defaults.stream),
                exit_on_sent: read("exit_on_sent", defaults.exit_on_sent),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toml::Value;

    #[test]
    fn test_from_toml_empty_document_uses_platform_keys() {
        let toml_value: Value = toml::from_str("").unwrap();

        let config = ShareConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config, ShareConfig::default());
        assert_eq!(config.keys.stream, "android.intent.extra.STREAM");
    }

    #[test]
    fn test_from_toml_overrides_only_present_keys() {
        let toml_str = r#"
            [extras]
            exit_on_sent = "close_after_share"
        "#;
        let toml_value: Value = toml::from_str(toml_str).unwrap();

        let config = ShareConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config.keys.exit_on_sent, "close_after_share");
        assert_eq!(config.keys.text, EXTRA_TEXT);
        assert_eq!(config.keys.subject, EXTRA_SUBJECT);
    }

    #[test]
    fn test_from_toml_ignores_non_string_values() {
        let toml_str = r#"
            [extras]
            text = 42
        "#;
        let toml_value: Value = toml::from_str(toml_str).unwrap();

        let config = ShareConfig::from_toml(&toml_value).unwrap();

        assert_eq!(config.keys.text, EXTRA_TEXT);
    }
}
