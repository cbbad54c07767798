
use std::env;

use tempfile::TempDir;

/// RAII guard for environment variables - automatically restores on drop
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::set_var(key, value);
            Self { key, original }
        }
    }

    pub(crate) fn remove(key: &'static str) -> Self {
        unsafe {
            let original = env::var(key).ok();
            env::remove_var(key);
            Self { key, original }
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

const OVERRIDE_VARS: [&str; 9] = [
    "TM_SERVER_HOST",
    "TM_SERVER_PORT",
    "TM_ENVIRONMENT",
    "TM_DATABASE_PATH",
    "TM_AUTH_JWT_SECRET",
    "TM_AUTH_TOKEN_TTL_DAYS",
    "TM_CORS_ALLOWED_ORIGINS",
    "TM_LOG_LEVEL",
    "TM_LOG_COLORED",
];

/// Create a temp config directory, point TM_CONFIG_DIR at it, and clear all
/// override variables so each test starts from defaults.
pub(crate) fn setup_config_dir() -> (TempDir, Vec<EnvGuard>) {
    let temp = TempDir::new().unwrap();

    let mut guards = vec![EnvGuard::set("TM_CONFIG_DIR", temp.path().to_str().unwrap())];
    guards.extend(OVERRIDE_VARS.iter().map(|var| EnvGuard::remove(var)));

    (temp, guards)
}
