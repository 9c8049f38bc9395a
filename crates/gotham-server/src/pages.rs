//! Page documents.
//!
//! Every page renders as `{title, tagline, ...sections, notices}`. Sections
//! read widget slots and static catalogs; `notices` carries the transient
//! messages left by failed fetches.

use gotham_domain::catalog::filter_tools;
use gotham_domain::{
    fallback, AssetQuote, Cadence, CoinQuote, ContentItem, DiseaseSnapshot, FinanceTrack,
    FoodItem, HealthIndicator, ReliefRegion, TrialDetail, TrialSummary,
};
use gotham_feeds::{Feeds, Snapshot};
use gotham_oracle::Exchange;
use serde::{Deserialize, Serialize};

/// A rendered page
#[derive(Debug, Serialize)]
pub struct Page<S: Serialize> {
    /// Page heading
    pub title: &'static str,
    /// Quote under the heading
    pub tagline: &'static str,
    /// Page-specific sections
    #[serde(flatten)]
    pub sections: S,
    /// Messages from failed fetches
    pub notices: Vec<String>,
}

impl<S: Serialize> Page<S> {
    fn new(title: &'static str, tagline: &'static str, sections: S) -> Self {
        Self {
            title,
            tagline,
            sections,
            notices: Vec::new(),
        }
    }

    fn notice_from<T>(mut self, snapshot: &Snapshot<T>) -> Self {
        if let Some(notice) = &snapshot.notice {
            self.notices.push(notice.clone());
        }
        self
    }
}

/// A card of content
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CardView {
    /// Heading
    pub title: String,
    /// Body text
    pub body: String,
    /// Category label
    pub category: String,
    /// Emoji icon
    pub icon: String,
}

impl From<&ContentItem> for CardView {
    fn from(item: &ContentItem) -> Self {
        Self {
            title: item.title.clone(),
            body: item.body.clone(),
            category: item.category.clone(),
            icon: item.icon.clone(),
        }
    }
}

fn cards(items: &[ContentItem]) -> Vec<CardView> {
    items.iter().map(CardView::from).collect()
}

/// A headed block of text
#[derive(Debug, Serialize)]
pub struct TextBlock {
    /// Heading
    pub heading: &'static str,
    /// Text
    pub text: String,
}

/// A widget: its rows plus whether they came from a live fetch
#[derive(Debug, Serialize)]
pub struct Widget<T: Serialize> {
    /// Rows to show
    pub items: T,
    /// Whether the rows came from a fetch rather than the fallback
    pub live: bool,
    /// When the rows were fetched (Unix epoch seconds)
    pub updated_at: Option<u64>,
}

impl<T: Serialize> Widget<T> {
    fn from_snapshot<V>(snapshot: &Snapshot<V>, items: T) -> Self {
        Self {
            items,
            live: snapshot.live,
            updated_at: snapshot.updated_at,
        }
    }
}

// ---------------------------------------------------------------------------
// Home
// ---------------------------------------------------------------------------

/// Home page sections
#[derive(Debug, Serialize)]
pub struct HomeSections {
    /// Hero heading and copy
    pub hero: Hero,
    /// Protocols grid
    pub features: Vec<FeatureView>,
    /// Navigation links
    pub navigation: Vec<NavView>,
    /// Whether the visitor still has to pass the gate
    pub restricted: bool,
}

/// Hero block
#[derive(Debug, Serialize)]
pub struct Hero {
    /// Heading
    pub heading: &'static str,
    /// Subheading
    pub subheading: &'static str,
    /// Quote
    pub quote: &'static str,
    /// Description
    pub description: &'static str,
}

/// A feature tile
#[derive(Debug, Serialize)]
pub struct FeatureView {
    /// Heading
    pub title: &'static str,
    /// Description
    pub description: &'static str,
    /// Emoji icon
    pub icon: &'static str,
    /// Route the tile links to
    pub path: &'static str,
}

/// A navigation link
#[derive(Debug, Serialize)]
pub struct NavView {
    /// Route
    pub path: &'static str,
    /// Label
    pub label: &'static str,
}

/// `GET /`
pub fn home(restricted: bool) -> Page<HomeSections> {
    Page::new(
        "BATCOIN",
        "Forged in darkness. Built to guide.",
        HomeSections {
            hero: Hero {
                heading: "BATCOIN",
                subheading: "WISDOM FORGE",
                quote: "Forged in darkness. Built to guide.",
                description: "Access the wisdom of Gotham's greatest protector. Get guidance on justice, finance, health, and life itself from Batman's proven methodologies.",
            },
            features: fallback::features()
                .into_iter()
                .map(|f| FeatureView {
                    title: f.title,
                    description: f.description,
                    icon: f.icon,
                    path: f.path,
                })
                .collect(),
            navigation: fallback::navigation()
                .into_iter()
                .map(|n| NavView {
                    path: n.path,
                    label: n.label,
                })
                .collect(),
            restricted,
        },
    )
}

// ---------------------------------------------------------------------------
// Gate
// ---------------------------------------------------------------------------

/// The gate prompt, shown on `/access` and on restricted routes
#[derive(Debug, Serialize, Deserialize)]
pub struct GatePrompt {
    /// Heading
    pub title: String,
    /// Instruction
    pub prompt: String,
    /// Whether this visitor has passed the gate
    pub authenticated: bool,
    /// Submitted key echoed back; always cleared
    pub access_key: String,
    /// Inline error after a wrong key
    pub error: Option<String>,
}

/// Gate prompt for a visitor
pub fn gate_prompt(authenticated: bool, error: Option<String>) -> GatePrompt {
    GatePrompt {
        title: "RESTRICTED ACCESS".to_string(),
        prompt: "Enter access key to continue".to_string(),
        authenticated,
        access_key: String::new(),
        error,
    }
}

// ---------------------------------------------------------------------------
// Justice
// ---------------------------------------------------------------------------

/// Justice page sections
#[derive(Debug, Serialize)]
pub struct JusticeSections {
    /// Wisdom cards
    pub wisdom: Vec<CardView>,
    /// Today's justice challenge
    pub challenge: TextBlock,
}

/// `GET /justice`
pub fn justice(feeds: &Feeds) -> Page<JusticeSections> {
    let wisdom = feeds.wisdom_quotes.snapshot();
    let challenge = feeds.justice_challenge.snapshot();

    Page::new(
        "JUSTICE PROTOCOLS",
        "The training is nothing. The will is everything. The will to act.",
        JusticeSections {
            wisdom: cards(&wisdom.value),
            challenge: TextBlock {
                heading: "TODAY'S JUSTICE CHALLENGE",
                text: challenge.value.clone(),
            },
        },
    )
    .notice_from(&wisdom)
    .notice_from(&challenge)
}

// ---------------------------------------------------------------------------
// Finance
// ---------------------------------------------------------------------------

/// Finance page sections
#[derive(Debug, Serialize)]
pub struct FinanceSections {
    /// Selected track
    pub mode: &'static str,
    /// Track switch labels
    pub modes: Vec<ModeView>,
    /// Tips for the selected track
    pub tips: Vec<CardView>,
    /// Daily financial wisdom
    pub daily_wisdom: TextBlock,
    /// Crypto markets widget
    pub crypto: Widget<Vec<CoinView>>,
    /// Market insights widget
    pub markets: Widget<Vec<QuoteView>>,
}

/// A finance track switch
#[derive(Debug, Serialize)]
pub struct ModeView {
    /// Query value
    pub mode: &'static str,
    /// Label
    pub label: &'static str,
}

/// A crypto markets row
#[derive(Debug, Serialize)]
pub struct CoinView {
    /// Provider id
    pub id: String,
    /// Name
    pub name: String,
    /// Ticker
    pub symbol: String,
    /// Formatted price
    pub price: String,
    /// Formatted 24h change
    pub change_24h: String,
    /// Whether the change is non-negative
    pub positive: bool,
    /// Formatted market cap
    pub market_cap: String,
    /// Logo URL
    pub image: String,
}

impl From<&CoinQuote> for CoinView {
    fn from(coin: &CoinQuote) -> Self {
        Self {
            id: coin.id.clone(),
            name: coin.name.clone(),
            symbol: coin.symbol.clone(),
            price: coin.price_display(),
            change_24h: coin.change_display(),
            positive: coin.is_positive(),
            market_cap: coin.market_cap_display(),
            image: coin.image.clone(),
        }
    }
}

/// A market insights row
#[derive(Debug, Serialize)]
pub struct QuoteView {
    /// Symbol
    pub symbol: String,
    /// Asset kind
    pub asset_type: &'static str,
    /// Formatted price
    pub price: String,
    /// Formatted change
    pub change: String,
    /// Change in percent as reported
    pub change_percent: String,
    /// Whether the change is non-negative
    pub positive: bool,
}

impl From<&AssetQuote> for QuoteView {
    fn from(quote: &AssetQuote) -> Self {
        Self {
            symbol: quote.symbol.clone(),
            asset_type: quote.asset_type.as_str(),
            price: quote.price_display(),
            change: quote.change_display(),
            change_percent: quote.change_percent.clone(),
            positive: quote.is_positive(),
        }
    }
}

/// `GET /finance?mode=`
///
/// Unknown or missing modes show the rookie track.
pub fn finance(feeds: &Feeds, mode: Option<&str>) -> Page<FinanceSections> {
    let track = mode.and_then(FinanceTrack::parse).unwrap_or_default();
    let tips = feeds.finance_tips.snapshot();
    let crypto = feeds.crypto.snapshot();
    let markets = feeds.markets.snapshot();

    let sections = FinanceSections {
        mode: track.as_str(),
        modes: vec![
            ModeView {
                mode: FinanceTrack::Rookie.as_str(),
                label: "Rookie Mode",
            },
            ModeView {
                mode: FinanceTrack::Wayne.as_str(),
                label: "Wayne Protocols",
            },
        ],
        tips: cards(tips.value.for_track(track)),
        daily_wisdom: TextBlock {
            heading: "DAILY FINANCIAL WISDOM",
            text: fallback::DAILY_FINANCIAL_WISDOM.to_string(),
        },
        crypto: Widget::from_snapshot(&crypto, crypto.value.iter().map(CoinView::from).collect()),
        markets: Widget::from_snapshot(
            &markets,
            markets.value.iter().map(QuoteView::from).collect(),
        ),
    };

    Page::new(
        "GOTHAM FINANCE",
        "It's not about the money. It's about sending a message. But money helps.",
        sections,
    )
    .notice_from(&tips)
    .notice_from(&crypto)
    .notice_from(&markets)
}

// ---------------------------------------------------------------------------
// Health
// ---------------------------------------------------------------------------

/// Health page sections
#[derive(Debug, Serialize)]
pub struct HealthSections {
    /// Protocol cards
    pub protocols: Vec<CardView>,
    /// Daily routine
    pub routine: Vec<RoutineView>,
    /// Today's challenge
    pub challenge: TextBlock,
    /// Disease statistics widget
    pub disease: Widget<Option<DiseaseView>>,
    /// Health indicators widget
    pub indicators: Widget<Vec<IndicatorView>>,
    /// Clinical trials widget
    pub trials: Widget<Vec<TrialView>>,
}

/// A routine step
#[derive(Debug, Serialize)]
pub struct RoutineView {
    /// Time of day
    pub time: &'static str,
    /// Activity
    pub activity: &'static str,
    /// Emoji icon
    pub icon: &'static str,
}

/// Disease statistics
#[derive(Debug, Serialize)]
pub struct DiseaseView {
    /// Total cases
    pub cases: u64,
    /// Cases today
    pub today_cases: u64,
    /// Deaths
    pub deaths: u64,
    /// Recoveries
    pub recovered: u64,
    /// Active cases
    pub active: u64,
    /// Countries reporting
    pub affected_countries: u32,
    /// Recovery rate, two decimals
    pub recovery_rate: String,
    /// Provider update time (Unix epoch milliseconds)
    pub updated_ms: u64,
}

impl From<&DiseaseSnapshot> for DiseaseView {
    fn from(d: &DiseaseSnapshot) -> Self {
        Self {
            cases: d.cases,
            today_cases: d.today_cases,
            deaths: d.deaths,
            recovered: d.recovered,
            active: d.active,
            affected_countries: d.affected_countries,
            recovery_rate: format!("{:.2}%", d.recovery_rate()),
            updated_ms: d.updated_ms,
        }
    }
}

/// A health indicator row
#[derive(Debug, Serialize)]
pub struct IndicatorView {
    /// Indicator code
    pub code: String,
    /// Country code
    pub country: String,
    /// Year
    pub year: i32,
    /// Value, one decimal
    pub value: String,
}

impl From<&HealthIndicator> for IndicatorView {
    fn from(i: &HealthIndicator) -> Self {
        Self {
            code: i.code.clone(),
            country: i.country.clone(),
            year: i.year,
            value: format!("{:.1}", i.value),
        }
    }
}

/// A clinical trial row
#[derive(Debug, Serialize, Deserialize)]
pub struct TrialView {
    /// Registry id
    pub nct_id: String,
    /// Title
    pub title: String,
    /// Status
    pub status: String,
    /// Conditions
    pub conditions: Vec<String>,
    /// Detail route
    pub link: String,
}

impl From<&TrialSummary> for TrialView {
    fn from(t: &TrialSummary) -> Self {
        Self {
            nct_id: t.nct_id.clone(),
            title: t.title.clone(),
            status: t.status.clone(),
            conditions: t.conditions.clone(),
            link: format!("/health/trials/{}", t.nct_id),
        }
    }
}

/// `GET /health`
pub fn health(feeds: &Feeds) -> Page<HealthSections> {
    let protocols = feeds.health_protocols.snapshot();
    let challenge = feeds.health_challenge.snapshot();
    let disease = feeds.disease.snapshot();
    let indicators = feeds.indicators.snapshot();
    let trials = feeds.trials.snapshot();

    let sections = HealthSections {
        protocols: cards(&protocols.value),
        routine: fallback::daily_routine()
            .into_iter()
            .map(|s| RoutineView {
                time: s.time,
                activity: s.activity,
                icon: s.icon,
            })
            .collect(),
        challenge: TextBlock {
            heading: "TODAY'S CHALLENGE",
            text: challenge.value.clone(),
        },
        disease: Widget::from_snapshot(&disease, disease.value.as_ref().map(DiseaseView::from)),
        indicators: Widget::from_snapshot(
            &indicators,
            indicators.value.iter().map(IndicatorView::from).collect(),
        ),
        trials: Widget::from_snapshot(&trials, trials.value.iter().map(TrialView::from).collect()),
    };

    Page::new(
        "BAT-HEALTH PROTOCOL",
        "Your body is your temple. Your mind is your weapon. Train both with equal dedication.",
        sections,
    )
    .notice_from(&protocols)
    .notice_from(&challenge)
    .notice_from(&disease)
    .notice_from(&indicators)
    .notice_from(&trials)
}

/// Trial detail
#[derive(Debug, Serialize, Deserialize)]
pub struct TrialDetailView {
    /// Registry id
    pub nct_id: String,
    /// Short title
    pub brief_title: String,
    /// Official title
    pub official_title: Option<String>,
    /// Responsible organization
    pub organization: Option<String>,
    /// Overall status
    pub status: String,
    /// Start date
    pub start_date: Option<String>,
    /// Completion date
    pub completion_date: Option<String>,
    /// Study type
    pub study_type: Option<String>,
    /// Phases
    pub phases: Vec<String>,
    /// Enrollment
    pub enrollment: Option<u64>,
    /// Primary purpose
    pub primary_purpose: Option<String>,
    /// Conditions
    pub conditions: Vec<String>,
    /// Brief summary
    pub summary: Option<String>,
    /// Lead sponsor
    pub lead_sponsor: Option<String>,
    /// Collaborators
    pub collaborators: Vec<String>,
}

impl From<TrialDetail> for TrialDetailView {
    fn from(d: TrialDetail) -> Self {
        Self {
            nct_id: d.nct_id,
            brief_title: d.brief_title,
            official_title: d.official_title,
            organization: d.organization,
            status: d.status,
            start_date: d.start_date,
            completion_date: d.completion_date,
            study_type: d.study_type,
            phases: d.phases,
            enrollment: d.enrollment,
            primary_purpose: d.primary_purpose,
            conditions: d.conditions,
            summary: d.summary,
            lead_sponsor: d.lead_sponsor,
            collaborators: d.collaborators,
        }
    }
}

/// A nutrition search result
#[derive(Debug, Serialize, Deserialize)]
pub struct FoodView {
    /// Product name
    pub name: String,
    /// Brand
    pub brand: Option<String>,
    /// Energy per 100g (kcal)
    pub energy_kcal: Option<f64>,
    /// Protein per 100g (g)
    pub protein_g: Option<f64>,
    /// Carbohydrates per 100g (g)
    pub carbs_g: Option<f64>,
    /// Fat per 100g (g)
    pub fat_g: Option<f64>,
}

impl From<FoodItem> for FoodView {
    fn from(f: FoodItem) -> Self {
        Self {
            name: f.name,
            brand: f.brand,
            energy_kcal: f.energy_kcal,
            protein_g: f.protein_g,
            carbs_g: f.carbs_g,
            fat_g: f.fat_g,
        }
    }
}

/// Nutrition lookup result
#[derive(Debug, Serialize, Deserialize)]
pub struct NutritionResults {
    /// The query
    pub query: String,
    /// Matching products
    pub results: Vec<FoodView>,
}

// ---------------------------------------------------------------------------
// Ask Batman
// ---------------------------------------------------------------------------

/// Ask Batman page sections
#[derive(Debug, Serialize)]
pub struct AskBatmanSections {
    /// Daily wisdom
    pub daily_wisdom: TextBlock,
    /// Input placeholder
    pub prompt: &'static str,
}

/// `GET /askbatman`
pub fn ask_batman(feeds: &Feeds) -> Page<AskBatmanSections> {
    let wisdom = feeds.daily_wisdom.snapshot();
    Page::new(
        "ASK BATMAN",
        "I'm here to listen. Ask me anything about life, justice, fear, or the path forward.",
        AskBatmanSections {
            daily_wisdom: TextBlock {
                heading: "TODAY'S WISDOM",
                text: wisdom.value.clone(),
            },
            prompt: "Ask Batman anything...",
        },
    )
    .notice_from(&wisdom)
}

/// One line of a conversation
#[derive(Debug, Serialize, Deserialize)]
pub struct LineView {
    /// "user" or "batman"
    pub role: String,
    /// Text
    pub content: String,
}

/// `POST /askbatman` response
#[derive(Debug, Serialize, Deserialize)]
pub struct ExchangeView {
    /// Question then answer
    pub exchange: Vec<LineView>,
    /// Whether the answer is the canned failure reply
    pub degraded: bool,
}

impl From<Exchange> for ExchangeView {
    fn from(exchange: Exchange) -> Self {
        Self {
            exchange: exchange
                .lines
                .into_iter()
                .map(|line| LineView {
                    role: line.speaker.as_str().to_string(),
                    content: line.content,
                })
                .collect(),
            degraded: exchange.degraded,
        }
    }
}

// ---------------------------------------------------------------------------
// Missions, donations, tools
// ---------------------------------------------------------------------------

/// Missions page sections
#[derive(Debug, Serialize)]
pub struct MissionsSections {
    /// Daily, weekly and monthly groups
    pub groups: Vec<MissionGroupView>,
}

/// Missions of one cadence
#[derive(Debug, Serialize)]
pub struct MissionGroupView {
    /// "daily", "weekly" or "monthly"
    pub cadence: &'static str,
    /// Heading
    pub heading: &'static str,
    /// Closing line
    pub inspiration: &'static str,
    /// Missions
    pub missions: Vec<MissionView>,
}

/// A mission
#[derive(Debug, Serialize)]
pub struct MissionView {
    /// Identifier
    pub id: u32,
    /// Title
    pub title: &'static str,
    /// Description
    pub description: &'static str,
    /// Difficulty label
    pub difficulty: &'static str,
    /// Emoji icon
    pub icon: &'static str,
}

/// `GET /missions`
pub fn missions() -> Page<MissionsSections> {
    let groups = Cadence::ALL
        .into_iter()
        .map(|cadence| MissionGroupView {
            cadence: cadence.as_str(),
            heading: cadence.heading(),
            inspiration: cadence.inspiration(),
            missions: fallback::missions(cadence)
                .into_iter()
                .map(|m| MissionView {
                    id: m.id,
                    title: m.title,
                    description: m.description,
                    difficulty: m.difficulty.as_str(),
                    icon: m.icon,
                })
                .collect(),
        })
        .collect();

    Page::new(
        "GOTHAM MISSIONS",
        "Excellence isn't an act, but a habit. These missions will forge you into the person Gotham, and the world, needs.",
        MissionsSections { groups },
    )
}

/// Donation page sections
#[derive(Debug, Serialize)]
pub struct DonateSections {
    /// Organizations grouped by region
    pub regions: Vec<RegionView>,
}

/// Organizations of one region
#[derive(Debug, Serialize)]
pub struct RegionView {
    /// Region key
    pub region: &'static str,
    /// Heading
    pub heading: &'static str,
    /// Organizations
    pub organizations: Vec<OrganizationView>,
}

/// A relief organization
#[derive(Debug, Serialize)]
pub struct OrganizationView {
    /// Name
    pub name: &'static str,
    /// Donation URL
    pub url: &'static str,
}

fn region_heading(region: ReliefRegion) -> &'static str {
    match region {
        ReliefRegion::Gaza => "GAZA RELIEF ORGANIZATIONS",
        ReliefRegion::Ukraine => "UKRAINE RELIEF ORGANIZATIONS",
        ReliefRegion::Sudan => "SUDAN RELIEF ORGANIZATIONS",
        ReliefRegion::Global => "MAJOR INTERNATIONAL AID ORGANIZATIONS",
        ReliefRegion::Crowdfunding => "CROWDFUNDING PLATFORMS",
    }
}

/// `GET /donate`
pub fn donate() -> Page<DonateSections> {
    let organizations = fallback::relief_organizations();
    let regions = ReliefRegion::ALL
        .into_iter()
        .map(|region| RegionView {
            region: region.as_str(),
            heading: region_heading(region),
            organizations: organizations
                .iter()
                .filter(|o| o.region == region)
                .map(|o| OrganizationView {
                    name: o.name,
                    url: o.url,
                })
                .collect(),
        })
        .collect();

    Page::new(
        "DONATION CENTER",
        "Justice isn't just about fighting crime. It's about helping those in need.",
        DonateSections { regions },
    )
}

/// Tools page sections
#[derive(Debug, Serialize)]
pub struct ToolsSections {
    /// Selected filter
    pub category: String,
    /// Filter labels, "All" first
    pub categories: Vec<&'static str>,
    /// Tools matching the filter
    pub tools: Vec<ToolView>,
    /// Closing block
    pub coming_soon: TextBlock,
}

/// A tool
#[derive(Debug, Serialize)]
pub struct ToolView {
    /// Name
    pub name: &'static str,
    /// Description
    pub description: &'static str,
    /// Emoji icon
    pub icon: &'static str,
    /// Link, `None` while the tool is not available
    pub url: Option<&'static str>,
    /// Category label
    pub category: &'static str,
}

/// `GET /tools?category=`
pub fn tools(category: Option<&str>) -> Page<ToolsSections> {
    let catalog = fallback::tools();
    let selected = category
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or("All")
        .to_string();

    let tools = filter_tools(&catalog, category)
        .into_iter()
        .map(|t| ToolView {
            name: t.name,
            description: t.description,
            icon: t.icon,
            url: t.is_available().then_some(t.url),
            category: t.category.as_str(),
        })
        .collect();

    Page::new(
        "BATCOIN ECOSYSTEM TOOLS",
        "The right tool for every mission. Access the complete arsenal of Gotham's technology.",
        ToolsSections {
            category: selected,
            categories: gotham_domain::ToolCategory::filter_labels(),
            tools,
            coming_soon: TextBlock {
                heading: "MORE TOOLS COMING SOON",
                text: "The Batcoin ecosystem is constantly evolving. New tools and capabilities are being developed to enhance your mission capabilities.".to_string(),
            },
        },
    )
}

// ---------------------------------------------------------------------------
// Announcements
// ---------------------------------------------------------------------------

/// An announcement
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnouncementView {
    /// UUIDv7
    pub id: String,
    /// Title
    pub title: String,
    /// Content
    pub content: String,
    /// Image URL
    pub image_url: Option<String>,
    /// Author
    pub author: Option<String>,
    /// Creation time (Unix epoch seconds)
    pub created_at: u64,
}

impl From<&gotham_domain::Announcement> for AnnouncementView {
    fn from(a: &gotham_domain::Announcement) -> Self {
        Self {
            id: a.id.to_string(),
            title: a.title.clone(),
            content: a.content.clone(),
            image_url: a.image_url.clone(),
            author: a.author.clone(),
            created_at: a.created_at,
        }
    }
}

/// Announcements page sections
#[derive(Debug, Serialize)]
pub struct AnnouncementsSections {
    /// Newest first, at most `MAX_ANNOUNCEMENTS`
    pub announcements: Vec<AnnouncementView>,
    /// Shown when there are none
    pub empty_message: Option<&'static str>,
}

/// `GET /announcements`
pub fn announcements(items: Vec<AnnouncementView>) -> Page<AnnouncementsSections> {
    let empty_message = items
        .is_empty()
        .then_some("Check back later for important updates from Gotham.");
    Page::new(
        "ANNOUNCEMENTS",
        "Stay informed. Knowledge is power, and power protects Gotham.",
        AnnouncementsSections {
            announcements: items,
            empty_message,
        },
    )
}

// ---------------------------------------------------------------------------
// Not found
// ---------------------------------------------------------------------------

/// Not-found page sections
#[derive(Debug, Serialize)]
pub struct NotFoundSections {
    /// The requested path
    pub path: String,
    /// Link back home
    pub home: &'static str,
}

/// Any unknown route
pub fn not_found(path: &str) -> Page<NotFoundSections> {
    Page::new(
        "404",
        "Oops! Page not found",
        NotFoundSections {
            path: path.to_string(),
            home: "/",
        },
    )
}
