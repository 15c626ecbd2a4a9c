use thiserror::Error;

/// Failures raised by the interactive console layer.
///
/// Invalid user input is never an error; prompts re-ask locally. Only the
/// terminal itself going away (or a real IO fault) unwinds the menu stack.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("end of input")]
    EndOfInput,
}

/// Failures raised while loading client settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}
