use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Input,
    Resolution,
    Configuration,
    Internal,
}

#[derive(Debug)]
pub struct AppError {
    pub kind: ErrorKind,
    pub cause: String,
    pub message: Option<String>,
}

impl AppError {
    pub fn new(
        kind: ErrorKind,
        cause: &str,
        message: &str,
    ) -> Self {
        Self {
            kind,
            cause: cause.to_string(),
            message: Some(message.to_string()),
        }
    }

    pub fn input(cause: &str) -> Self {
        Self {
            kind: ErrorKind::Input,
            cause: cause.to_string(),
            message: Some("Received records are not valid SNS notifications".to_string()),
        }
    }

    pub fn resolution(
        cause: &str,
        message: &str,
    ) -> Self {
        Self::new(ErrorKind::Resolution, cause, message)
    }

    pub fn configuration(
        cause: &str,
        message: &str,
    ) -> Self {
        Self::new(ErrorKind::Configuration, cause, message)
    }

    pub fn internal(
        cause: &str,
        message: &str,
    ) -> Self {
        Self::new(ErrorKind::Internal, cause, message)
    }

    pub fn is_input(&self) -> bool {
        self.kind == ErrorKind::Input
    }

    pub fn is_resolution(&self) -> bool {
        self.kind == ErrorKind::Resolution
    }
}

impl std::error::Error for AppError {}

impl fmt::Display for AppError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{} - Cause: {}", message, self.cause),
            None => write!(f, "{}", self.cause),
        }
    }
}
