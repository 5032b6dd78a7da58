// src/config.rs

use std::time::Duration;

use thiserror::Error;

pub const EVAL_DELAY_VAR: &str = "DEBUG_QUIZ_EVAL_DELAY_MS";
pub const THEME_VAR: &str = "DEBUG_QUIZ_THEME";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("valor no válido para {var}: {value}")]
    InvalidValue { var: &'static str, value: String },
}

/// Ajustes de arranque. Nada de esto se guarda entre sesiones salvo el tema.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Latencia simulada de "compilación" al pulsar Run.
    pub evaluation_delay: Duration,
    /// Tema forzado por entorno; `None` respeta la preferencia guardada.
    pub dark_mode: Option<bool>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            evaluation_delay: Duration::from_millis(800),
            dark_mode: None,
        }
    }
}

impl AppConfig {
    /// Lee la configuración de las variables de entorno (sólo escritorio).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw) = lookup(EVAL_DELAY_VAR) {
            let millis = raw.trim().parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: EVAL_DELAY_VAR,
                value: raw.clone(),
            })?;
            config.evaluation_delay = Duration::from_millis(millis);
        }

        if let Some(raw) = lookup(THEME_VAR) {
            config.dark_mode = match raw.trim().to_ascii_lowercase().as_str() {
                "dark" => Some(true),
                "light" => Some(false),
                _ => {
                    return Err(ConfigError::InvalidValue {
                        var: THEME_VAR,
                        value: raw,
                    });
                }
            };
        }

        Ok(config)
    }
}
