use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("Page request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("Invalid selector: {selector}")]
    Selector { selector: String },

    #[error("Element not found: {selector}")]
    ElementNotFound { selector: String },

    #[error("Attribute `{name}` not found on {element}")]
    AttributeNotFound { name: String, element: String },

    #[error("No text content in {selector}")]
    TextContent { selector: String },

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Integer field parse error: {0}")]
    ParseInt(#[from] std::num::ParseIntError),

    #[error("Float field parse error: {0}")]
    ParseFloat(#[from] std::num::ParseFloatError),

    #[error("Date parse error: {0}")]
    DateParse(#[from] chrono::ParseError),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing configuration field: {field}")]
    MissingConfig { field: String },
}

impl ScrapeError {
    pub fn element_not_found(selector: &str) -> Self {
        Self::ElementNotFound {
            selector: selector.to_string(),
        }
    }

    pub fn attribute_not_found(name: &str, element: &str) -> Self {
        Self::AttributeNotFound {
            name: name.to_string(),
            element: element.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;
