use std::str::FromStr;

use serde::{Deserialize, Deserializer};

/// Deployment environment, driving the credential cookie attributes:
/// development keeps the cookie same-site strict over plain HTTP, production
/// sends it cross-site and secure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Production,
}

impl Environment {
    pub fn is_production(self) -> bool {
        self == Environment::Production
    }
}

impl<'de> Deserialize<'de> for Environment {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer).unwrap_or_default();

        // FromStr never fails, unknown values fall back to Development
        Ok(Environment::from_str(&s).unwrap())
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Ok(Environment::Production),
            _ => Ok(Environment::Development),
        }
    }
}
