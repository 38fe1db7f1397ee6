use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub mail: MailConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port(), worker_threads: None }
    }
}

fn default_host() -> String { "0.0.0.0".into() }
fn default_port() -> u16 { 3000 }

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Full connection URL; when empty the URL is composed from the parts below.
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub host: String,
    #[serde(default = "default_db_port")]
    pub port: u16,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub password: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,
    #[serde(default = "default_max_lifetime")]
    pub max_lifetime_secs: u64,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
    #[serde(default)]
    pub sqlx_logging: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            host: String::new(),
            port: default_db_port(),
            user: String::new(),
            name: String::new(),
            password: String::new(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_secs: default_connect_timeout(),
            idle_timeout_secs: default_idle_timeout(),
            max_lifetime_secs: default_max_lifetime(),
            acquire_timeout_secs: default_acquire_timeout(),
            sqlx_logging: false,
        }
    }
}

fn default_db_port() -> u16 { 5432 }
fn default_max_connections() -> u32 { 10 }
fn default_min_connections() -> u32 { 2 }
fn default_connect_timeout() -> u64 { 30 }
fn default_idle_timeout() -> u64 { 600 }
fn default_max_lifetime() -> u64 { 3600 }
fn default_acquire_timeout() -> u64 { 30 }

/// Outbound mail account used for contact-form notifications.
#[derive(Debug, Clone, Deserialize)]
pub struct MailConfig {
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub password: String,
    /// Address that receives every submission.
    #[serde(default)]
    pub recipient: String,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            smtp_host: default_smtp_host(),
            user: String::new(),
            password: String::new(),
            recipient: String::new(),
        }
    }
}

fn default_smtp_host() -> String { "smtp.gmail.com".into() }

/// Parse `path`; a missing file yields the defaults.
pub fn load_from_file_or_default(path: &str) -> Result<AppConfig> {
    match std::fs::read_to_string(path) {
        Ok(content) => parse(&content),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(AppConfig::default()),
        Err(e) => Err(anyhow!("cannot read {path}: {e}")),
    }
}

pub fn parse(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Config file (optional) + process environment, validated.
    pub fn load_and_validate() -> Result<Self> {
        let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
        let mut cfg = load_from_file_or_default(&path)?;
        cfg.apply_env(|key| std::env::var(key).ok());
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    /// Override fields from environment variables. Blank values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = get("SERVER_HOST") { self.server.host = v; }
        if let Some(p) = get("PORT").and_then(|v| v.parse::<u16>().ok()) { self.server.port = p; }
        if let Some(w) = get("TOKIO_WORKER_THREADS").and_then(|v| v.parse::<usize>().ok()) {
            self.server.worker_threads = Some(w);
        }

        if let Some(v) = get("DATABASE_URL") { self.database.url = v; }
        if let Some(v) = get("DB_HOST") { self.database.host = v; }
        if let Some(p) = get("DB_PORT").and_then(|v| v.parse::<u16>().ok()) { self.database.port = p; }
        if let Some(v) = get("DB_USER") { self.database.user = v; }
        if let Some(v) = get("DB_NAME") { self.database.name = v; }
        if let Some(v) = get("DB_PASSWORD") { self.database.password = v; }

        if let Some(v) = get("MAIL_SMTP_HOST") { self.mail.smtp_host = v; }
        if let Some(v) = get("MAIL_USER") { self.mail.user = v; }
        if let Some(v) = get("MAIL_PASSWORD") { self.mail.password = v; }
        if let Some(v) = get("MAIL_TO") { self.mail.recipient = v; }
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.database.validate()?;
        self.mail.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = default_host();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be within 1..=65535"));
        }
        // 0 means "let tokio decide"
        if self.worker_threads == Some(0) {
            self.worker_threads = None;
        }
        Ok(())
    }
}

impl DatabaseConfig {
    /// The URL handed to the pool: `url` verbatim, or one composed from
    /// host/user/password/name/port with credentials percent-encoded.
    pub fn connection_url(&self) -> Result<String> {
        if !self.url.trim().is_empty() {
            return Ok(self.url.trim().to_string());
        }
        if self.host.trim().is_empty() {
            return Err(anyhow!("database.host is empty; set DB_HOST or DATABASE_URL"));
        }
        let mut url = url::Url::parse("postgres://localhost")?;
        url.set_host(Some(self.host.trim()))?;
        url.set_port(Some(self.port))
            .map_err(|_| anyhow!("database.port cannot be applied to the URL"))?;
        if !self.user.is_empty() {
            url.set_username(&self.user)
                .map_err(|_| anyhow!("database.user cannot be applied to the URL"))?;
        }
        if !self.password.is_empty() {
            url.set_password(Some(&self.password))
                .map_err(|_| anyhow!("database.password cannot be applied to the URL"))?;
        }
        url.set_path(&format!("/{}", self.name.trim_start_matches('/')));
        Ok(url.to_string())
    }

    pub fn validate(&self) -> Result<()> {
        let url = self.connection_url()?;
        let lower = url.to_lowercase();
        if !(lower.starts_with("postgresql://") || lower.starts_with("postgres://")) {
            return Err(anyhow!("database url must start with postgresql:// or postgres://"));
        }
        if self.min_connections == 0 {
            return Err(anyhow!("database.min_connections must be >= 1"));
        }
        if self.max_connections < self.min_connections {
            return Err(anyhow!("database.max_connections must be >= min_connections"));
        }
        if self.connect_timeout_secs == 0 || self.acquire_timeout_secs == 0 {
            return Err(anyhow!("database timeouts must be positive seconds"));
        }
        Ok(())
    }
}

impl MailConfig {
    pub fn validate(&self) -> Result<()> {
        if self.smtp_host.trim().is_empty() {
            return Err(anyhow!("mail.smtp_host is empty"));
        }
        if self.user.trim().is_empty() || self.password.is_empty() {
            return Err(anyhow!("mail credentials missing; set MAIL_USER and MAIL_PASSWORD"));
        }
        if self.recipient.trim().is_empty() {
            return Err(anyhow!("mail.recipient is empty; set MAIL_TO"));
        }
        Ok(())
    }
}
