use std::{path::PathBuf, time::Duration};

use clap::{Parser, ValueEnum};
use despensa_core::{
    domain::common::{DespensaConfig, LLMConfig, LLMProvider, StorageConfig},
    infrastructure::llm::gemini_client::DEFAULT_GEMINI_BASE_URL,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "despensa-api", version, about = "Pantry tracking and recipe discovery API")]
pub struct Args {
    #[command(flatten)]
    pub log: LogArgs,

    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub storage: StorageArgs,
}

#[derive(clap::Args, Debug, Clone)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON", default_value_t = false)]
    pub json: bool,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "SERVER_PORT", default_value_t = 3333)]
    pub port: u16,

    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "http://localhost:5173"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LlmProviderArg {
    Gemini,
    Fake,
}

#[derive(clap::Args, Debug, Clone)]
pub struct LlmArgs {
    #[arg(long = "llm-provider", env = "LLM_PROVIDER", value_enum, default_value_t = LlmProviderArg::Gemini)]
    pub provider: LlmProviderArg,

    #[arg(long = "gemini-api-key", env = "GEMINI_API_KEY", hide_env_values = true)]
    pub gemini_api_key: Option<String>,

    #[arg(long = "gemini-model", env = "GEMINI_MODEL", default_value = "gemini-1.5-flash")]
    pub gemini_model: String,

    #[arg(long = "gemini-base-url", env = "GEMINI_BASE_URL", default_value = DEFAULT_GEMINI_BASE_URL)]
    pub gemini_base_url: String,

    #[arg(long = "llm-timeout-secs", env = "LLM_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageBackendArg {
    Memory,
    JsonFile,
}

#[derive(clap::Args, Debug, Clone)]
pub struct StorageArgs {
    #[arg(long = "storage-backend", env = "STORAGE_BACKEND", value_enum, default_value_t = StorageBackendArg::JsonFile)]
    pub backend: StorageBackendArg,

    #[arg(long = "storage-path", env = "STORAGE_PATH", default_value = "despensa-data.json")]
    pub path: PathBuf,
}

impl From<Args> for DespensaConfig {
    fn from(args: Args) -> Self {
        Self {
            llm: LLMConfig {
                provider: match args.llm.provider {
                    LlmProviderArg::Gemini => LLMProvider::Gemini,
                    LlmProviderArg::Fake => LLMProvider::Fake,
                },
                gemini_api_key: args.llm.gemini_api_key,
                gemini_model: args.llm.gemini_model,
                gemini_base_url: args.llm.gemini_base_url,
                timeout: Duration::from_secs(args.llm.timeout_secs),
            },
            storage: match args.storage.backend {
                StorageBackendArg::Memory => StorageConfig::Memory,
                StorageBackendArg::JsonFile => StorageConfig::JsonFile {
                    path: args.storage.path,
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_map_to_core_config() {
        let args = Args::parse_from([
            "despensa-api",
            "--llm-provider",
            "fake",
            "--llm-timeout-secs",
            "5",
            "--storage-backend",
            "json-file",
            "--storage-path",
            "/tmp/pantry.json",
        ]);

        let config = DespensaConfig::from(args);
        assert_eq!(config.llm.provider, LLMProvider::Fake);
        assert_eq!(config.llm.timeout, Duration::from_secs(5));
        assert_eq!(
            config.storage,
            StorageConfig::JsonFile {
                path: PathBuf::from("/tmp/pantry.json")
            }
        );
    }

    #[test]
    fn test_allowed_origins_are_comma_separated() {
        let args = Args::parse_from([
            "despensa-api",
            "--allowed-origins",
            "http://a.test,http://b.test",
        ]);

        assert_eq!(
            args.server.allowed_origins,
            vec!["http://a.test".to_string(), "http://b.test".to_string()]
        );
    }
}
