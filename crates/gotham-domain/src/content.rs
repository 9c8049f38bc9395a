//! Content records rendered as cards and lists

/// A display card - wisdom quote, finance tip or health protocol
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentItem {
    /// Card heading
    pub title: String,

    /// Quote or tip text
    pub body: String,

    /// Category label shown under the heading
    pub category: String,

    /// Icon glyph
    pub icon: String,
}

impl ContentItem {
    /// Create a new card
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        category: impl Into<String>,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            category: category.into(),
            icon: icon.into(),
        }
    }

    /// Check the card has every field filled in
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [
            ("title", &self.title),
            ("body", &self.body),
            ("category", &self.category),
            ("icon", &self.icon),
        ] {
            if value.trim().is_empty() {
                return Err(format!("'{}' must not be empty", name));
            }
        }
        Ok(())
    }
}

/// One step of the daily routine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutineStep {
    /// Clock time, e.g. "5:00 AM"
    pub time: &'static str,
    /// What to do
    pub activity: &'static str,
    /// Icon glyph
    pub icon: &'static str,
}

/// A tile on the home features grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feature {
    /// Tile heading
    pub title: &'static str,
    /// One-line description
    pub description: &'static str,
    /// Icon glyph
    pub icon: &'static str,
    /// Route the tile links to
    pub path: &'static str,
}

/// A navigation link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    /// Route path
    pub path: &'static str,
    /// Link label
    pub label: &'static str,
}
