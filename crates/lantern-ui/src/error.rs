//! Error types for binding the page.

use thiserror::Error;

/// Convenience alias for page binding results.
pub type UiResult<T> = Result<T, UiError>;

/// Failures while wiring the controller to the document.
#[derive(Debug, Error)]
pub enum UiError {
    /// A required element was not found.
    #[error("element not found: {selector}")]
    MissingElement {
        /// Id or selector that matched nothing.
        selector: String,
    },
    /// An element was found but has the wrong type.
    #[error("element {selector} is not a {expected}")]
    UnexpectedElement {
        /// Id or selector of the element.
        selector: String,
        /// Expected DOM interface name.
        expected: &'static str,
    },
    /// The configuration attribute could not be parsed.
    #[error("invalid page configuration")]
    InvalidConfig {
        /// Parser error detail.
        #[source]
        source: serde_json::Error,
    },
    /// A DOM call failed.
    #[error("dom operation failed: {operation}: {detail}")]
    Dom {
        /// Operation that failed.
        operation: &'static str,
        /// Stringified `JsValue` detail.
        detail: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_culprit() {
        let missing = UiError::MissingElement {
            selector: "#themeToggle".to_string(),
        };
        assert_eq!(missing.to_string(), "element not found: #themeToggle");
        let wrong = UiError::UnexpectedElement {
            selector: "#name".to_string(),
            expected: "HtmlInputElement",
        };
        assert_eq!(wrong.to_string(), "element #name is not a HtmlInputElement");
    }
}
