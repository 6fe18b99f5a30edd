use thiserror::Error;

#[derive(Error, Debug)]
pub enum WhatdoError {
    #[error("Todo item not found: {0}")]
    ItemNotFound(String),

    #[error("Todo record is missing required field `{0}`")]
    MissingField(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, WhatdoError>;
