//! Static catalogs: tools and relief organizations

/// Category a tool belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolCategory {
    /// Terminals and developer utilities
    Development,
    /// Market tooling
    Finance,
    /// Wellness tracking
    Health,
    /// Crime analytics
    Justice,
    /// Reference material
    Knowledge,
    /// Planning
    Operations,
}

impl ToolCategory {
    /// All categories in display order
    pub const ALL: [ToolCategory; 6] = [
        ToolCategory::Development,
        ToolCategory::Finance,
        ToolCategory::Health,
        ToolCategory::Justice,
        ToolCategory::Knowledge,
        ToolCategory::Operations,
    ];

    /// Get the category label
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolCategory::Development => "Development",
            ToolCategory::Finance => "Finance",
            ToolCategory::Health => "Health",
            ToolCategory::Justice => "Justice",
            ToolCategory::Knowledge => "Knowledge",
            ToolCategory::Operations => "Operations",
        }
    }

    /// Parse a category label, case-insensitive
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
    }

    /// Filter labels offered to clients, "All" first
    pub fn filter_labels() -> Vec<&'static str> {
        std::iter::once("All")
            .chain(Self::ALL.iter().map(|c| c.as_str()))
            .collect()
    }
}

/// A tool tile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tool {
    /// Tool name
    pub name: &'static str,
    /// One-line description
    pub description: &'static str,
    /// Icon glyph
    pub icon: &'static str,
    /// Link target ("#" when not yet available)
    pub url: &'static str,
    /// Category
    pub category: ToolCategory,
}

impl Tool {
    /// Whether the tool links anywhere
    pub fn is_available(&self) -> bool {
        self.url != "#"
    }
}

/// Filter tools by a category label
///
/// `None` and `"All"` keep every tool. An unknown label keeps none.
pub fn filter_tools<'a>(tools: &'a [Tool], category: Option<&str>) -> Vec<&'a Tool> {
    match category.map(str::trim) {
        None | Some("") => tools.iter().collect(),
        Some(label) if label.eq_ignore_ascii_case("all") => tools.iter().collect(),
        Some(label) => match ToolCategory::parse(label) {
            Some(category) => tools.iter().filter(|t| t.category == category).collect(),
            None => Vec::new(),
        },
    }
}

/// Region a relief organization serves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReliefRegion {
    /// Gaza
    Gaza,
    /// Ukraine
    Ukraine,
    /// Sudan
    Sudan,
    /// Worldwide organizations
    Global,
    /// Crowdfunding platforms
    Crowdfunding,
}

impl ReliefRegion {
    /// All regions in display order
    pub const ALL: [ReliefRegion; 5] = [
        ReliefRegion::Gaza,
        ReliefRegion::Ukraine,
        ReliefRegion::Sudan,
        ReliefRegion::Global,
        ReliefRegion::Crowdfunding,
    ];

    /// Get the region key
    pub fn as_str(&self) -> &'static str {
        match self {
            ReliefRegion::Gaza => "gaza",
            ReliefRegion::Ukraine => "ukraine",
            ReliefRegion::Sudan => "sudan",
            ReliefRegion::Global => "global",
            ReliefRegion::Crowdfunding => "crowdfunding",
        }
    }
}

/// A donation link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReliefOrganization {
    /// Organization name
    pub name: &'static str,
    /// Donation page
    pub url: &'static str,
    /// Region served
    pub region: ReliefRegion,
}
