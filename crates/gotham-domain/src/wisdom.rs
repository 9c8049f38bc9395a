//! Wisdom kinds - the categories the wisdom proxy accepts

/// Category tag sent to the wisdom proxy
///
/// Each kind maps to exactly one prompt template. The wire names are the
/// camelCase tags clients send as `{"type": ...}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WisdomKind {
    /// One longer piece of life wisdom
    AskBatman,

    /// A small daily act of justice
    JusticeChallenge,

    /// A daily physical challenge with numbers
    HealthChallenge,

    /// Four quotes on justice, discipline, courage and integrity
    WisdomQuotes,

    /// Four quotes on training, rest, mental discipline and nutrition
    HealthProtocols,

    /// Six finance tips, three rookie and three wayne
    FinanceTips,
}

impl WisdomKind {
    /// All kinds in declaration order
    pub const ALL: [WisdomKind; 6] = [
        WisdomKind::AskBatman,
        WisdomKind::JusticeChallenge,
        WisdomKind::HealthChallenge,
        WisdomKind::WisdomQuotes,
        WisdomKind::HealthProtocols,
        WisdomKind::FinanceTips,
    ];

    /// Get the wire tag
    pub fn as_str(&self) -> &'static str {
        match self {
            WisdomKind::AskBatman => "askBatman",
            WisdomKind::JusticeChallenge => "justiceChallenge",
            WisdomKind::HealthChallenge => "healthChallenge",
            WisdomKind::WisdomQuotes => "wisdomQuotes",
            WisdomKind::HealthProtocols => "healthProtocols",
            WisdomKind::FinanceTips => "financeTips",
        }
    }

    /// Parse a wire tag. Matching is exact.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == s)
    }

    /// Whether the completion is expected to hold several structured items
    pub fn is_structured(&self) -> bool {
        matches!(
            self,
            WisdomKind::WisdomQuotes | WisdomKind::HealthProtocols | WisdomKind::FinanceTips
        )
    }

    /// Number of items a structured kind must produce
    pub fn expected_items(&self) -> usize {
        match self {
            WisdomKind::WisdomQuotes | WisdomKind::HealthProtocols => 4,
            WisdomKind::FinanceTips => 6,
            _ => 1,
        }
    }
}

impl std::fmt::Display for WisdomKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for WisdomKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid wisdom type: {}", s))
    }
}

/// Audience of a finance tip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FinanceTrack {
    /// Beginner advice
    #[default]
    Rookie,

    /// Advanced advice
    Wayne,
}

impl FinanceTrack {
    /// Get the track name
    pub fn as_str(&self) -> &'static str {
        match self {
            FinanceTrack::Rookie => "rookie",
            FinanceTrack::Wayne => "wayne",
        }
    }

    /// Parse a track name, case-insensitive
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "rookie" => Some(FinanceTrack::Rookie),
            "wayne" => Some(FinanceTrack::Wayne),
            _ => None,
        }
    }
}
