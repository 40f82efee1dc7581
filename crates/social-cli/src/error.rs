//! Error types for the social-cli crate.

use thiserror::Error;

use social_graph::GraphError;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("invalid {field}: {input:?} is not an integer")]
    InvalidNumber { field: &'static str, input: String },

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;

/// The line shown to the user when the database cannot be reached at startup.
pub fn startup_failure_message(err: &GraphError) -> &'static str {
    match err {
        GraphError::Authentication(_) => "Authentication failed. Check your username and password.",
        _ => "Could not connect to the Neo4j database. Check that the service is running.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_startup_messages() {
        assert_eq!(
            startup_failure_message(&GraphError::Authentication("bad creds".into())),
            "Authentication failed. Check your username and password."
        );
        assert_eq!(
            startup_failure_message(&GraphError::Unavailable("refused".into())),
            "Could not connect to the Neo4j database. Check that the service is running."
        );
        assert_eq!(
            startup_failure_message(&GraphError::Connection("bad uri".into())),
            "Could not connect to the Neo4j database. Check that the service is running."
        );
    }

    #[test]
    fn test_invalid_number_display() {
        let err = CliError::InvalidNumber {
            field: "age",
            input: "ten".to_string(),
        };
        assert_eq!(err.to_string(), "invalid age: \"ten\" is not an integer");
    }
}
