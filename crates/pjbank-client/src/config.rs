//! Client configuration.

/// Production API base URL.
pub const PRODUCTION_BASE_URL: &str = "https://api.pjbank.com.br/";

/// Sandbox API base URL.
pub const SANDBOX_BASE_URL: &str = "https://sandbox.pjbank.com.br/";

/// PJBank deployment to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Live transactions.
    #[default]
    Production,
    /// Test transactions, no real charges.
    Sandbox,
}

impl Environment {
    /// Base URL of this environment.
    #[must_use]
    pub const fn base_url(self) -> &'static str {
        match self {
            Self::Production => PRODUCTION_BASE_URL,
            Self::Sandbox => SANDBOX_BASE_URL,
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Some(Self::Production),
            "sandbox" => Some(Self::Sandbox),
            _ => None,
        }
    }
}

/// Client options for customization.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// API base URL (default: production).
    pub base_url: String,
    /// Request timeout in seconds (default: 30).
    pub timeout_seconds: u64,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl ClientOptions {
    /// Options targeting the given environment.
    #[must_use]
    pub fn for_environment(environment: Environment) -> Self {
        Self {
            base_url: environment.base_url().to_string(),
            timeout_seconds: 30,
        }
    }

    /// Options targeting the sandbox.
    #[must_use]
    pub fn sandbox() -> Self {
        Self::for_environment(Environment::Sandbox)
    }

    /// Set the base URL.
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub fn with_timeout_seconds(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    /// Load options from `PJBANK_ENV`, `PJBANK_BASE_URL` and
    /// `PJBANK_TIMEOUT_SECONDS`. Unset or unparseable values keep defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let environment = lookup("PJBANK_ENV")
            .and_then(|name| {
                let parsed = Environment::from_name(&name);
                if parsed.is_none() {
                    tracing::warn!(value = %name, "Unknown PJBANK_ENV, using production");
                }
                parsed
            })
            .unwrap_or_default();

        let mut options = Self::for_environment(environment);

        if let Some(url) = lookup("PJBANK_BASE_URL").filter(|u| !u.trim().is_empty()) {
            options.base_url = url;
        }
        if let Some(seconds) = lookup("PJBANK_TIMEOUT_SECONDS").and_then(|s| s.parse().ok()) {
            options.timeout_seconds = seconds;
        }

        options
    }
}
