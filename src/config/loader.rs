use crate::config::config::AppConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// 环境变量前缀
pub const ENV_PREFIX: &str = "POLINAV_";

/// Unprefixed variables and the keys they set, in merge order.
const LEGACY_VARIABLES: [(&str, &str); 3] = [
    ("GEMINI_API_KEY", "gemini.api_key"),
    ("GOOGLE_API_KEY", "gemini.api_key"),
    ("GEMINI_MODEL", "gemini.model"),
];

/// 配置加载器
pub struct ConfigLoader;

impl ConfigLoader {
    /// 从默认路径加载配置
    ///
    /// 优先级（后者覆盖前者）：
    /// 1. 内置默认值
    /// 2. ./config.toml
    /// 3. `POLINAV_` 前缀环境变量（嵌套键以 `__` 分隔）
    /// 4. `GEMINI_API_KEY` / `GOOGLE_API_KEY` / `GEMINI_MODEL`
    pub fn load() -> Result<AppConfig, figment::Error> {
        Self::load_from(default_config_path())
    }

    /// 从指定路径加载配置
    pub fn load_from(path: impl AsRef<Path>) -> Result<AppConfig, figment::Error> {
        Self::figment(path.as_ref()).extract()
    }

    fn figment(path: &Path) -> Figment {
        let figment = Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        LEGACY_VARIABLES
            .iter()
            .fold(figment, |figment, &(var, key)| merge_legacy(figment, var, key))
    }

    /// 验证配置
    pub fn validate(config: &AppConfig) -> Result<(), ConfigValidationError> {
        if config.server.port == 0 {
            return Err(ConfigValidationError::InvalidPort);
        }

        if config.gemini.model.trim().is_empty() {
            return Err(ConfigValidationError::MissingModel);
        }

        if config.gemini.timeout_secs == 0 {
            return Err(ConfigValidationError::InvalidTimeout);
        }

        Ok(())
    }
}

/// 配置验证错误
#[derive(thiserror::Error, Debug)]
pub enum ConfigValidationError {
    #[error("server port must be greater than 0")]
    InvalidPort,

    #[error("model identifier is empty")]
    MissingModel,

    #[error("model request timeout must be greater than 0")]
    InvalidTimeout,
}

/// Blank legacy variables are skipped so they cannot mask an earlier layer.
fn merge_legacy(figment: Figment, var: &'static str, key: &'static str) -> Figment {
    let is_set = std::env::var(var).is_ok_and(|value| !value.trim().is_empty());
    if !is_set {
        return figment;
    }
    figment.merge(Env::raw().only(&[var]).map(move |_| key.into()))
}

/// 获取默认配置文件路径
pub fn default_config_path() -> PathBuf {
    PathBuf::from("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_load_defaults_without_file() {
        Jail::expect_with(|_jail| {
            let config = ConfigLoader::load_from("missing.toml")?;
            assert_eq!(config.server.port, 8000);
            assert_eq!(config.gemini.model, "gemini-2.5-flash");
            Ok(())
        });
    }

    #[test]
    fn test_file_then_prefixed_env() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "config.toml",
                r#"
                [server]
                port = 9000

                [gemini]
                model = "gemini-file"
                "#,
            )?;
            jail.set_env("POLINAV_SERVER__HOST", "127.0.0.1");

            let config = ConfigLoader::load_from("config.toml")?;
            assert_eq!(config.server.port, 9000);
            assert_eq!(config.server.host, "127.0.0.1");
            assert_eq!(config.gemini.model, "gemini-file");
            Ok(())
        });
    }

    #[test]
    fn test_legacy_credential_variables() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.set_env("GEMINI_API_KEY", "gemini-key");
            jail.set_env("GEMINI_MODEL", "gemini-pro");
            let config = ConfigLoader::load_from("config.toml")?;
            assert_eq!(config.gemini.credential(), Some("gemini-key"));
            assert_eq!(config.gemini.model, "gemini-pro");

            jail.set_env("GOOGLE_API_KEY", "google-key");
            let config = ConfigLoader::load_from("config.toml")?;
            assert_eq!(config.gemini.credential(), Some("google-key"));
            Ok(())
        });
    }

    #[test]
    fn test_blank_legacy_variables_are_ignored() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.set_env("GEMINI_API_KEY", "gemini-key");
            jail.set_env("GOOGLE_API_KEY", "");
            let config = ConfigLoader::load_from("config.toml")?;
            assert_eq!(config.gemini.credential(), Some("gemini-key"));

            jail.set_env("GOOGLE_API_KEY", "   ");
            jail.set_env("GEMINI_MODEL", "");
            let config = ConfigLoader::load_from("config.toml")?;
            assert_eq!(config.gemini.credential(), Some("gemini-key"));
            assert_eq!(config.gemini.model, "gemini-2.5-flash");
            Ok(())
        });
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = AppConfig::development();
        assert!(ConfigLoader::validate(&config).is_ok());

        config.gemini.timeout_secs = 0;
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigValidationError::InvalidTimeout)
        ));
    }
}
