use anyhow::Context;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Reads HOST/PORT from the environment, falling back to `0.0.0.0` and
    /// the service's default port. Used by the customer service, whose port
    /// is overridable.
    pub fn from_env(default_port: u16) -> anyhow::Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| default_port.to_string())
                .parse()
                .context("PORT must be a valid number")?,
        })
    }

    /// A fixed port on all interfaces. The inventory service always listens
    /// on 8082.
    pub fn fixed(port: u16) -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port,
        }
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
