use crate::generator::ast::LiteralKind;

/// Failures that abort a generation pass. Everything recoverable is reported as a
/// [`GenerationWarning`](super::metrics::GenerationWarning) instead.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
  #[error("invalid configuration: {reason}")]
  InvalidConfig { reason: String },
  #[error("enum '{type_name}' has a member literal of unsupported kind '{literal_kind}'")]
  UnsupportedEnumMemberLiteral {
    type_name: String,
    literal_kind: LiteralKind,
  },
}

pub type ConversionResult<T> = Result<T, GenerationError>;
