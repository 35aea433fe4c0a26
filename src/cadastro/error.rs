use crate::validation::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CadastroError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Malformed record at line {line}: expected {expected} fields, found {found}")]
    MalformedRecord {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("Invalid id: {0:?}")]
    InvalidId(String),

    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, CadastroError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_record_mentions_line_and_counts() {
        let err = CadastroError::MalformedRecord {
            line: 4,
            expected: 11,
            found: 9,
        };
        let msg = err.to_string();
        assert!(msg.contains("line 4"), "got: {msg}");
        assert!(msg.contains("11"), "got: {msg}");
        assert!(msg.contains("9"), "got: {msg}");
    }

    #[test]
    fn invalid_id_quotes_the_offending_text() {
        let err = CadastroError::InvalidId("abc".into());
        assert_eq!(err.to_string(), "Invalid id: \"abc\"");
    }

    #[test]
    fn io_error_converts_with_question_mark() {
        fn fallible() -> Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope"))?
        }
        assert!(matches!(fallible(), Err(CadastroError::Io(_))));
    }

    #[test]
    fn validation_error_displays_its_own_message() {
        let err = CadastroError::from(ValidationError::MissingName);
        assert_eq!(err.to_string(), ValidationError::MissingName.to_string());
    }
}
