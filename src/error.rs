use thiserror::Error;

use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum QuizError {
    #[error("no se pudo parsear el banco de preguntas YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("identificador de pregunta duplicado: {0}")]
    DuplicateId(String),

    #[error("dificultad desconocida: {0}")]
    UnknownDifficulty(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
