// secrets
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::env;

pub static SECRET_MANAGER: Lazy<SecretManager> = Lazy::new(|| SecretManager::new());

pub struct SecretManager {
    secrets: HashMap<String, String>,
}

impl SecretManager {
    fn new() -> Self {
        let mut secrets: HashMap<String, String> = HashMap::new();

        secrets.insert(
            "PORT".to_string(),
            env::var("PORT").unwrap_or("4000".to_string()),
        );

        // DATABASE_URL has no sensible default; fail fast at startup
        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| panic!("Missing env variable DATABASE_URL"));
        secrets.insert("DATABASE_URL".to_string(), database_url);

        SecretManager { secrets }
    }

    pub fn get(&self, key: &str) -> String {
        self.secrets.get(key).cloned().unwrap_or_default()
    }
}
