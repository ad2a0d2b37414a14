//! Configuration for SoloKV
//!
//! Centralized configuration with sensible defaults.

/// Main configuration for a SoloKV engine
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Executor Configuration
    // -------------------------------------------------------------------------
    /// Name given to the executor thread (shows up in logs and debuggers)
    pub executor_thread_name: String,

    /// Stack size for the executor thread in bytes (`None` = platform default)
    pub executor_stack_size: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            executor_thread_name: "solokv-executor".to_string(),
            executor_stack_size: None,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the executor thread name
    pub fn executor_thread_name(mut self, name: impl Into<String>) -> Self {
        self.config.executor_thread_name = name.into();
        self
    }

    /// Set the executor thread stack size (in bytes)
    pub fn executor_stack_size(mut self, bytes: usize) -> Self {
        self.config.executor_stack_size = Some(bytes);
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
