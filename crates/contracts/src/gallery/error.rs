/// Текст для пользователя при любой ошибке запроса списка
pub const FETCH_FAILURE_MESSAGE: &str = "Failed to fetch images";

pub type FetchResult<T> = Result<T, FetchError>;

/// Ошибка загрузки списка изображений
#[derive(Debug, Clone, PartialEq)]
pub struct FetchError {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
}

impl FetchError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Транспортная ошибка (DNS, CORS, обрыв соединения)
    pub fn request(message: impl Into<String>) -> Self {
        Self::new("REQUEST_ERROR", message)
    }

    pub fn http_status(status: u16) -> Self {
        Self::new("HTTP_ERROR", format!("HTTP error: {}", status))
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::new("PARSE_ERROR", message)
    }

    /// Для пользователя все виды ошибок дают одно сообщение
    pub fn user_message(&self) -> &'static str {
        FETCH_FAILURE_MESSAGE
    }
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(details) = &self.details {
            write!(f, ": {}", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for FetchError {}
