use std::fmt;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::page::errors::CustomUrlError;
use crate::domain::page::errors::PageContentError;
use crate::domain::page::errors::PageIdError;
use crate::domain::user::models::UserId;

/// Static page served under a custom URL.
#[derive(Debug, Clone)]
pub struct CustomPage {
    pub id: PageId,
    pub custom_url: CustomUrl,
    pub content: PageContent,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageId(pub Uuid);

impl PageId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a page ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, PageIdError> {
        Uuid::parse_str(s)
            .map(PageId)
            .map_err(|e| PageIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for PageId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Path a page is published under, e.g. `/about-us`.
///
/// Must start with `/`, contain no whitespace and be at most 255 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomUrl(String);

impl CustomUrl {
    const MAX_LENGTH: usize = 255;

    /// # Errors
    /// * `Empty` - URL is blank
    /// * `MissingLeadingSlash` - URL does not start with `/`
    /// * `ContainsWhitespace` - URL contains whitespace
    /// * `TooLong` - URL exceeds 255 characters
    pub fn new(url: String) -> Result<Self, CustomUrlError> {
        let url = url.trim();

        if url.is_empty() {
            return Err(CustomUrlError::Empty);
        }
        if !url.starts_with('/') {
            return Err(CustomUrlError::MissingLeadingSlash);
        }
        if url.chars().any(char::is_whitespace) {
            return Err(CustomUrlError::ContainsWhitespace);
        }

        let length = url.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(CustomUrlError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        Ok(Self(url.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CustomUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Page body, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContent(String);

impl PageContent {
    pub fn new(content: String) -> Result<Self, PageContentError> {
        if content.trim().is_empty() {
            Err(PageContentError::Empty)
        } else {
            Ok(Self(content))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Command to create a custom page.
#[derive(Debug, Clone)]
pub struct CreatePageCommand {
    pub custom_url: CustomUrl,
    pub content: PageContent,
}

/// Command to replace the URL and content of a custom page.
#[derive(Debug, Clone)]
pub struct UpdatePageCommand {
    pub custom_url: CustomUrl,
    pub content: PageContent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_custom_url_accepts_paths() {
        assert_eq!(CustomUrl::new("/about".to_string()).unwrap().as_str(), "/about");
        assert_eq!(
            CustomUrl::new(" /contact-us ".to_string()).unwrap().as_str(),
            "/contact-us"
        );
        assert!(CustomUrl::new("/".to_string()).is_ok());
    }

    #[test]
    fn test_custom_url_rejects_invalid_paths() {
        assert_eq!(CustomUrl::new("".to_string()), Err(CustomUrlError::Empty));
        assert_eq!(
            CustomUrl::new("about".to_string()),
            Err(CustomUrlError::MissingLeadingSlash)
        );
        assert_eq!(
            CustomUrl::new("/about us".to_string()),
            Err(CustomUrlError::ContainsWhitespace)
        );
        assert!(matches!(
            CustomUrl::new(format!("/{}", "a".repeat(255))),
            Err(CustomUrlError::TooLong { max: 255, actual: 256 })
        ));
    }

    #[test]
    fn test_page_content_must_not_be_blank() {
        assert_eq!(PageContent::new("\n\t".to_string()), Err(PageContentError::Empty));
        assert_eq!(
            PageContent::new("  <h1>Hi</h1>".to_string()).unwrap().as_str(),
            "  <h1>Hi</h1>"
        );
    }

    #[test]
    fn test_page_id_parsing() {
        let id = PageId::new();
        assert_eq!(PageId::from_string(&id.to_string()).unwrap(), id);
        assert!(PageId::from_string("not-a-uuid").is_err());
    }
}
