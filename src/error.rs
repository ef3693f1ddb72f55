#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("gateway error {code}: {message}")]
pub struct GatewayError {
    pub code: String,
    pub message: String,
    pub http_status: Option<u16>,
}

impl GatewayError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            http_status: None,
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.http_status = Some(status);
        self
    }

    /// Transport failures and 5xx answers may be retried with the same receipt.
    pub fn is_retryable(&self) -> bool {
        match self.http_status {
            Some(status) => status >= 500,
            None => matches!(self.code.as_str(), "TIMEOUT" | "NETWORK_ERROR"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum PaymentError {
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
    #[error("validation failed: {0}")]
    Validation(String),
    #[error(transparent)]
    Gateway(#[from] GatewayError),
    #[error("signature verification failed: {0}")]
    Verification(String),
}

impl PaymentError {
    pub fn code(&self) -> &str {
        match self {
            PaymentError::InvalidAmount(_) => "INVALID_AMOUNT",
            PaymentError::Validation(_) => "VALIDATION_ERROR",
            PaymentError::Gateway(e) => e.code.as_str(),
            PaymentError::Verification(_) => "VERIFICATION_FAILED",
        }
    }
}
