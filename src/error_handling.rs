use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CalcError {
    #[error("invalid character, '{0}', encountered")]
    unexpected_input(char),

    #[error("could not parse expression, expected {0}")]
    parse_error(String),

    #[error("could not evaluate expression, {0}")]
    evaluation_error(String),
}

pub type Result<T> = std::result::Result<T, CalcError>;
