//! Announcements posted to the board

use std::fmt;

/// Identifier for an announcement based on UUIDv7
///
/// UUIDv7 sorts chronologically, so newer announcements compare greater.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AnnouncementId(u128);

impl AnnouncementId {
    /// Generate a new UUIDv7-based id
    ///
    /// # Examples
    ///
    /// ```
    /// use gotham_domain::AnnouncementId;
    ///
    /// let id = AnnouncementId::new();
    /// assert!(id.value() > 0);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Parse an id from its string form
    pub fn from_string(s: &str) -> Result<Self, String> {
        uuid::Uuid::parse_str(s)
            .map(|u| Self(u.as_u128()))
            .map_err(|e| format!("Invalid announcement id: {}", e))
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }
}

impl Default for AnnouncementId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AnnouncementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

/// A published announcement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    /// Unique identifier
    pub id: AnnouncementId,
    /// Headline
    pub title: String,
    /// Body text
    pub content: String,
    /// Optional image link
    pub image_url: Option<String>,
    /// Optional author name
    pub author: Option<String>,
    /// Creation time (Unix epoch seconds)
    pub created_at: u64,
}

/// Unvalidated input for a new announcement
#[derive(Debug, Clone, Default)]
pub struct AnnouncementDraft {
    /// Headline (required)
    pub title: String,
    /// Body text (required)
    pub content: String,
    /// Optional image link
    pub image_url: Option<String>,
    /// Optional author name
    pub author: Option<String>,
}

impl AnnouncementDraft {
    /// Trim the draft and turn it into an announcement
    ///
    /// Title and content are required after trimming. Blank optional fields
    /// become `None`.
    pub fn publish(self, created_at: u64) -> Result<Announcement, String> {
        let title = self.title.trim().to_string();
        let content = self.content.trim().to_string();
        if title.is_empty() || content.is_empty() {
            return Err("Title and content are required.".to_string());
        }

        Ok(Announcement {
            id: AnnouncementId::new(),
            title,
            content,
            image_url: non_blank(self.image_url),
            author: non_blank(self.author),
            created_at,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
