use serde::{Deserialize, Serialize};

/// Global client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub chart: ChartConfig,
    pub page: PageConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Tracker server origin, without a trailing slash
    pub base_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Script URL of the Lightweight Charts standalone build
    pub cdn_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageConfig {
    /// File the rendered dashboard is written to after each submission
    pub output: String,
    pub title: String,
    pub dark_theme: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    pub dir: String,
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                base_url: "http://127.0.0.1:5000".to_string(),
                timeout_secs: 10,
                user_agent: concat!("tracker/", env!("CARGO_PKG_VERSION")).to_string(),
            },
            chart: ChartConfig {
                cdn_url: "https://unpkg.com/lightweight-charts/dist/lightweight-charts.standalone.production.js"
                    .to_string(),
            },
            page: PageConfig {
                output: "dashboard.html".to_string(),
                title: "מעקב מניות".to_string(),
                dark_theme: false,
            },
            log: LogConfig {
                dir: "logs".to_string(),
                level: "info".to_string(),
            },
        }
    }
}

impl ServerConfig {
    /// `base_url` with any trailing slashes removed.
    pub fn origin(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
