use std::net::{IpAddr, SocketAddr};

/// Cross-origin policy of a demo server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsPolicy {
    /// No CORS layer; browsers get no `Access-Control-*` headers.
    Disabled,
    /// Any origin, common methods, no credentials.
    Permissive,
    /// Only the listed origins, with credentials allowed.
    Origins(Vec<String>),
}

impl CorsPolicy {
    /// Parse a `CORS_ORIGINS` value: `*` is permissive, an empty value
    /// disables CORS, anything else is a comma-separated origin list.
    pub fn parse(raw: &str) -> Self {
        let origins: Vec<String> = raw
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        match origins.as_slice() {
            [] => CorsPolicy::Disabled,
            [only] if only == "*" => CorsPolicy::Permissive,
            _ => CorsPolicy::Origins(origins),
        }
    }
}

/// Built-in settings of a demo binary, overridable from the environment.
#[derive(Debug, Clone)]
pub struct ServerDefaults {
    /// Demo name reported by `/health` and in logs.
    pub service: &'static str,
    pub port: u16,
    pub cors: CorsPolicy,
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub service: &'static str,
    /// Bind address (default: `0.0.0.0`).
    pub host: IpAddr,
    /// Bind port (default: the demo's own port).
    pub port: u16,
    pub cors: CorsPolicy,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Largest accepted request body (default: 2 MiB).
    pub body_limit_bytes: usize,
}

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 2 * 1024 * 1024;

impl ServerConfig {
    /// Configuration with every value at the demo's default.
    pub fn with_defaults(defaults: ServerDefaults) -> Self {
        Self {
            service: defaults.service,
            host: IpAddr::from([0, 0, 0, 0]),
            port: defaults.port,
            cors: defaults.cors,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
        }
    }

    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                         |
    /// |------------------------|---------------------------------|
    /// | `HOST`                 | `0.0.0.0`                       |
    /// | `PORT`                 | demo port (`8080` / `8085`)     |
    /// | `CORS_ORIGINS`         | demo policy                     |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                            |
    /// | `BODY_LIMIT_BYTES`     | `2097152`                       |
    ///
    /// Panics on malformed values so misconfiguration fails at startup.
    pub fn from_env(defaults: ServerDefaults) -> Self {
        Self::from_lookup(defaults, |key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with a custom variable source.
    pub fn from_lookup<F>(defaults: ServerDefaults, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::with_defaults(defaults);

        if let Some(host) = lookup("HOST") {
            config.host = host.parse().expect("HOST must be an IP address");
        }
        if let Some(port) = lookup("PORT") {
            config.port = port.parse().expect("PORT must be a valid u16");
        }
        if let Some(origins) = lookup("CORS_ORIGINS") {
            config.cors = CorsPolicy::parse(&origins);
        }
        if let Some(secs) = lookup("REQUEST_TIMEOUT_SECS") {
            config.request_timeout_secs = secs
                .parse()
                .expect("REQUEST_TIMEOUT_SECS must be a valid u64");
        }
        if let Some(limit) = lookup("BODY_LIMIT_BYTES") {
            config.body_limit_bytes = limit
                .parse()
                .expect("BODY_LIMIT_BYTES must be a valid usize");
        }

        config
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
