//! Missions - self-improvement tasks grouped by cadence

/// How often a mission repeats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cadence {
    /// Every day
    Daily,
    /// Every week
    Weekly,
    /// Every month
    Monthly,
}

impl Cadence {
    /// All cadences in display order
    pub const ALL: [Cadence; 3] = [Cadence::Daily, Cadence::Weekly, Cadence::Monthly];

    /// Get the cadence name
    pub fn as_str(&self) -> &'static str {
        match self {
            Cadence::Daily => "daily",
            Cadence::Weekly => "weekly",
            Cadence::Monthly => "monthly",
        }
    }

    /// Section heading shown above the missions
    pub fn heading(&self) -> &'static str {
        match self {
            Cadence::Daily => "DAILY MISSIONS",
            Cadence::Weekly => "WEEKLY MISSIONS",
            Cadence::Monthly => "MONTHLY MISSIONS",
        }
    }

    /// Line shown under the section
    pub fn inspiration(&self) -> &'static str {
        match self {
            Cadence::Daily => "Daily excellence creates lifetime legends",
            Cadence::Weekly => "Weekly consistency builds monthly momentum",
            Cadence::Monthly => "Monthly transformations create yearly revolutions",
        }
    }
}

/// Mission difficulty, lowest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Difficulty {
    /// Entry level
    Rookie,
    /// Regular effort
    Standard,
    /// Demanding
    Advanced,
    /// Weekly-scale commitment
    Elite,
    /// Month-long transformation
    Legendary,
}

impl Difficulty {
    /// Get the difficulty label
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Rookie => "Rookie",
            Difficulty::Standard => "Standard",
            Difficulty::Advanced => "Advanced",
            Difficulty::Elite => "Elite",
            Difficulty::Legendary => "Legendary",
        }
    }
}

/// A single mission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mission {
    /// Stable identifier, unique across cadences
    pub id: u32,
    /// Mission name
    pub title: &'static str,
    /// What to do
    pub description: &'static str,
    /// How hard it is
    pub difficulty: Difficulty,
    /// Icon glyph
    pub icon: &'static str,
}
