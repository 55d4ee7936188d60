use platform_db::DatabaseSettings;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database: DatabaseSettings,
    pub cors_allowed_origins: Vec<String>,
    pub migrate_on_startup: bool,
}

impl AppConfig {
    pub fn load() -> Self {
        // Empty means any origin.
        let cors_allowed_origins =
            parse_origins(&std::env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default());
        let migrate_on_startup =
            parse_flag(std::env::var("MIGRATE_ON_STARTUP").ok().as_deref(), true);

        Self {
            database: DatabaseSettings::from_env(),
            cors_allowed_origins,
            migrate_on_startup,
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .filter_map(|s| {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
        .collect()
}

fn parse_flag(raw: Option<&str>, default: bool) -> bool {
    raw.map(|val| matches!(val.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
        .unwrap_or(default)
}
