use std::collections::BTreeMap;
use std::path::PathBuf;

/// Filesystem resolver settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsResolverConfig {
    /// `content://<authority>/...` → directory holding that authority's files
    pub content_roots: BTreeMap<String, PathBuf>,
    /// Largest file `read_bytes` will load
    pub max_read_bytes: u64,
}

impl FsResolverConfig {
    /// v1 默认值：无 content 根目录，读取上限 64 MiB
    pub fn defaults() -> Self {
        Self {
            content_roots: BTreeMap::new(),
            max_read_bytes: 64 * 1024 * 1024,
        }
    }

    pub fn with_content_root(
        mut self,
        authority: impl Into<String>,
        root: impl Into<PathBuf>,
    ) -> Self {
        self.content_roots.insert(authority.into(), root.into());
        self
    }

    /// Read the `[resolver]` table. Missing entries keep their defaults.
    pub fn from_toml(toml_value: &toml::Value) -> Self {
        let mut config = Self::defaults();
        let Some(resolver) = toml_value.get("resolver") else {
            return config;
        };

        if let Some(max) = resolver
            .get("max_read_bytes")
            .and_then(|v| v.as_integer())
            .and_then(|v| u64::try_from(v).ok())
        {
            config.max_read_bytes = max;
        }

        if let Some(roots) = resolver.get("content_roots").and_then(|v| v.as_table()) {
            for (authority, root) in roots {
                if let Some(root) = root.as_str() {
                    config
                        .content_roots
                        .insert(authority.clone(), PathBuf::from(root));
                }
            }
        }

        config
    }
}

impl Default for FsResolverConfig {
    fn default() -> Self {
        Self::defaults()
    }
}
