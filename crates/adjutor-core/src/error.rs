//! Error types for Adjutor

/// Result type alias using Adjutor's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for Adjutor operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A plugin with this name is already registered
    #[error("plugin {0} already exists")]
    DuplicatePlugin(String),

    /// No plugin is registered under this name
    #[error("plugin {0} doesn't exist")]
    UnknownPlugin(String),

    /// Constructor arguments rejected by a plugin or model
    #[error("invalid hyperparameters for {plugin}: {reason}")]
    InvalidParams { plugin: String, reason: String },

    /// Plugin manifest could not be loaded
    #[error("plugin load error: {0}")]
    Load(String),

    /// Model fit/transform/predict errors
    #[error("model error: {0}")]
    Model(String),

    /// Input dimensions do not line up
    #[error("shape error: {0}")]
    Shape(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// Filesystem errors
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML (de)serialization errors
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl Error {
    /// Create a new load error
    pub fn load(msg: impl Into<String>) -> Self {
        Self::Load(msg.into())
    }

    /// Create a new model error
    pub fn model(msg: impl Into<String>) -> Self {
        Self::Model(msg.into())
    }

    /// Create a new shape error
    pub fn shape(msg: impl Into<String>) -> Self {
        Self::Shape(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new invalid-hyperparameters error
    pub fn invalid_params(plugin: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            plugin: plugin.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_error_messages() {
        assert_eq!(
            Error::DuplicatePlugin("median".to_string()).to_string(),
            "plugin median already exists"
        );
        assert_eq!(
            Error::UnknownPlugin("nonexistent".to_string()).to_string(),
            "plugin nonexistent doesn't exist"
        );
    }

    #[test]
    fn test_invalid_params_message() {
        let err = Error::invalid_params("knn", "unknown field `depth`");
        assert_eq!(
            err.to_string(),
            "invalid hyperparameters for knn: unknown field `depth`"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
