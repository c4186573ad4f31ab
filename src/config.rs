use std::env;

use secrecy::SecretString;

#[derive(Clone, Debug)]
pub struct Config {
    pub mongo_conn_string: String,
    pub mongo_db_name: String,
    /// Master API key. Empty string disables the bypass entirely.
    pub master_key: SecretString,
    pub web_server_host: String,
    pub web_server_port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            mongo_conn_string: env::var("MONGO_CONN_STRING")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            mongo_db_name: env::var("MONGO_DB_NAME")
                .unwrap_or_else(|_| "quizdeck-local".to_string()),
            master_key: SecretString::from(env::var("MASTER_KEY").unwrap_or_default()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
        }
    }

    /// Warn about configuration that is almost certainly wrong in production.
    pub fn validate_for_production(&self) {
        use secrecy::ExposeSecret;

        let master_key = self.master_key.expose_secret();

        if master_key.trim().is_empty() {
            log::warn!(
                "MASTER_KEY is not set; master-key bypass is disabled. \
                 All requests must present a stored API key."
            );
        } else if master_key.len() < 32 {
            panic!(
                "FATAL: MASTER_KEY is too short ({}). Must be at least 32 characters.",
                master_key.len()
            );
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            mongo_conn_string: "mongodb://localhost:27017".to_string(),
            mongo_db_name: "quizdeck-test".to_string(),
            master_key: SecretString::from("test_master_key".to_string()),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
        }
    }
}
