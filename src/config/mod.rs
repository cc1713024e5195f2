mod manager;

pub use manager::{
    ConfigFile, ConfigManager, ContextConfig, DEFAULT_API_KEY_ENV, DEFAULT_ENDPOINT,
    DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE, ResolveOptions, ResolvedConfig,
    resolve_config,
};
