use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub log_dir: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://venue-directory.db?mode=rwc".to_string()),
            port: env::var("PORT").unwrap_or_else(|_| "5000".to_string()).parse().expect("PORT must be a number"),
            log_dir: env::var("LOG_DIR").unwrap_or_else(|_| "./logs".to_string()),
        }
    }

    pub fn is_postgres(&self) -> bool {
        self.database_url.starts_with("postgres://") || self.database_url.starts_with("postgresql://")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_selection_by_url() {
        let mut config = Config {
            database_url: "postgresql://localhost/venues".to_string(),
            port: 0,
            log_dir: "./logs".to_string(),
        };
        assert!(config.is_postgres());

        config.database_url = "sqlite://venues.db?mode=rwc".to_string();
        assert!(!config.is_postgres());
    }
}
