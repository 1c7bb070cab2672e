use config::{Config, ConfigError, Environment, File};
use std::sync::OnceLock;

use super::AppConfig;

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

impl AppConfig {
    /// 加载配置
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            // 内置默认值
            .set_default("app.system_name", "ClassHub")?
            .set_default("app.environment", "development")?
            .set_default("app.log_level", "info")?
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8000)?
            .set_default("server.unix_socket_path", "")?
            .set_default("server.workers", 0)?
            .set_default("server.max_workers", 16)?
            .set_default("server.timeouts.client_request", 5000)?
            .set_default("server.timeouts.client_disconnect", 1000)?
            .set_default("server.timeouts.keep_alive", 30)?
            .set_default("server.limits.max_payload_size", 1_048_576)?
            .set_default("database.url", "classhub.db")?
            .set_default("database.pool_size", 10)?
            .set_default("database.timeout", 30)?
            .set_default("cors.allowed_origins", Vec::<String>::new())?
            .set_default("cors.max_age", 3600)?
            // 默认配置文件
            .add_source(File::with_name("config").required(false))
            // 然后根据环境加载特定配置文件
            .add_source(
                File::with_name(&format!(
                    "config.{}",
                    std::env::var("APP_ENV").unwrap_or_else(|_| "development".into())
                ))
                .required(false),
            )
            // 最后加载环境变量覆盖
            .add_source(
                Environment::with_prefix("CLASSHUB")
                    .separator("__")
                    .try_parsing(true),
            );

        // 支持从常用环境变量加载
        builder = builder
            .set_override_option("app.environment", std::env::var("APP_ENV").ok())?
            .set_override_option("app.log_level", std::env::var("RUST_LOG").ok())?
            .set_override_option("server.host", std::env::var("SERVER_HOST").ok())?
            .set_override_option("server.port", std::env::var("SERVER_PORT").ok())?
            .set_override_option("server.unix_socket_path", std::env::var("UNIX_SOCKET").ok())?
            .set_override_option("server.workers", std::env::var("CPU_COUNT").ok())?
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?;

        let config = builder.build()?;
        let mut app_config: AppConfig = config.try_deserialize()?;

        // FRONTEND_URL 可以是逗号分隔的多个地址
        if let Ok(frontend_url) = std::env::var("FRONTEND_URL") {
            app_config.merge_allowed_origins(&frontend_url);
        }

        // 处理工作线程数
        if app_config.server.workers == 0 {
            app_config.server.workers = num_cpus::get().min(app_config.server.max_workers);
        }

        app_config.validate()?;

        Ok(app_config)
    }

    /// 获取全局配置实例
    pub fn get() -> &'static AppConfig {
        APP_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                eprintln!("Failed to load configuration: {e}");
                std::process::exit(1);
            })
        })
    }

    /// 初始化配置 (在应用启动时调用)
    pub fn init() -> Result<(), ConfigError> {
        let config = Self::load()?;
        APP_CONFIG
            .set(config)
            .map_err(|_| ConfigError::Message("Configuration already initialized".to_string()))?;
        Ok(())
    }

    /// 启动前必须满足的配置
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cors.allowed_origins.is_empty() {
            return Err(ConfigError::Message(
                "Missing required configuration: FRONTEND_URL (or cors.allowed_origins)".into(),
            ));
        }
        if self.database.url.trim().is_empty() {
            return Err(ConfigError::Message(
                "Missing required configuration: DATABASE_URL (or database.url)".into(),
            ));
        }
        Ok(())
    }

    fn merge_allowed_origins(&mut self, raw: &str) {
        for origin in raw.split(',').map(str::trim).filter(|o| !o.is_empty()) {
            let origin = origin.trim_end_matches('/').to_string();
            if !self.cors.allowed_origins.contains(&origin) {
                self.cors.allowed_origins.push(origin);
            }
        }
    }

    /// 检查是否为生产环境
    pub fn is_production(&self) -> bool {
        self.app.environment == "production"
    }

    /// 检查是否为开发环境
    pub fn is_development(&self) -> bool {
        self.app.environment == "development"
    }

    /// 获取服务器绑定地址
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// 获取 Unix 套接字路径 (如果配置了)
    #[cfg(unix)]
    pub fn unix_socket_path(&self) -> Option<&str> {
        if self.server.unix_socket_path.is_empty() {
            None
        } else {
            Some(&self.server.unix_socket_path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        AppSettings, CorsConfig, DatabaseConfig, LimitConfig, ServerConfig, TimeoutConfig,
    };

    fn sample_config() -> AppConfig {
        AppConfig {
            app: AppSettings {
                system_name: "ClassHub".into(),
                environment: "development".into(),
                log_level: "info".into(),
            },
            server: ServerConfig {
                host: "127.0.0.1".into(),
                port: 8000,
                unix_socket_path: String::new(),
                workers: 1,
                max_workers: 1,
                timeouts: TimeoutConfig {
                    client_request: 5000,
                    client_disconnect: 1000,
                    keep_alive: 30,
                },
                limits: LimitConfig {
                    max_payload_size: 1024,
                },
            },
            database: DatabaseConfig {
                url: ":memory:".into(),
                pool_size: 1,
                timeout: 5,
            },
            cors: CorsConfig {
                allowed_origins: vec![],
                max_age: 3600,
            },
        }
    }

    #[test]
    fn test_missing_origin_is_rejected() {
        let config = sample_config();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("FRONTEND_URL"));
    }

    #[test]
    fn test_merge_allowed_origins() {
        let mut config = sample_config();
        config.merge_allowed_origins("http://localhost:5173/, https://app.example.com,,");
        config.merge_allowed_origins("http://localhost:5173");
        assert_eq!(
            config.cors.allowed_origins,
            vec!["http://localhost:5173", "https://app.example.com"]
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_bind_address() {
        assert_eq!(sample_config().server_bind_address(), "127.0.0.1:8000");
    }
}
