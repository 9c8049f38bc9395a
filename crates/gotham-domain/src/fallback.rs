//! Hardcoded fallback content
//!
//! Every page renders these records when its live source fails, returns
//! malformed output, or has not answered yet.

use crate::catalog::{ReliefOrganization, ReliefRegion, Tool, ToolCategory};
use crate::content::{ContentItem, Feature, NavItem, RoutineStep};
use crate::mission::{Cadence, Difficulty, Mission};
use crate::wisdom::{FinanceTrack, WisdomKind};

/// Justice wisdom cards
pub fn wisdom_quotes() -> Vec<ContentItem> {
    vec![
        ContentItem::new(
            "The Path of Justice",
            "Justice isn't just law. It's doing what's right when nobody's watching. Start by being disciplined with yourself.",
            "Daily Discipline",
            "⚖️",
        ),
        ContentItem::new(
            "Facing Fear",
            "Fear is real. So is courage. The difference is what you choose to feed. Face your fears head-on, every single day.",
            "Mental Strength",
            "🦇",
        ),
        ContentItem::new(
            "Preparation",
            "I don't rely on luck. I rely on preparation. Plan for every scenario, then execute with precision.",
            "Strategic Thinking",
            "🎯",
        ),
        ContentItem::new(
            "Integrity",
            "Your word is your bond. Make promises you can keep, and keep every promise you make.",
            "Character",
            "🛡️",
        ),
    ]
}

/// Health protocol cards
pub fn health_protocols() -> Vec<ContentItem> {
    vec![
        ContentItem::new(
            "Physical Training",
            "A strong mind needs a strong body. Train daily. Push beyond your limits. Your body is your primary weapon.",
            "Fitness",
            "💪",
        ),
        ContentItem::new(
            "Rest & Recovery",
            "Even Batman sleeps. Your body repairs itself in rest. 7-8 hours of quality sleep is non-negotiable.",
            "Recovery",
            "😴",
        ),
        ContentItem::new(
            "Mental Discipline",
            "Control your thoughts, control your life. Meditation isn't weakness—it's mental armor.",
            "Mental Health",
            "🧠",
        ),
        ContentItem::new(
            "Nutrition",
            "Fuel your body like the machine it is. Clean food, clean mind, clean performance.",
            "Diet",
            "🥗",
        ),
    ]
}

/// Finance tip cards for one track
pub fn finance_tips(track: FinanceTrack) -> Vec<ContentItem> {
    match track {
        FinanceTrack::Rookie => vec![
            ContentItem::new(
                "Emergency Fund",
                "Always have an escape route. Keep 6 months of expenses saved. You never know when you'll need to disappear.",
                "Safety Net",
                "🛡️",
            ),
            ContentItem::new(
                "Spend Wisely",
                "Don't buy what you don't need. That's how they control you. Every purchase should serve a purpose.",
                "Smart Spending",
                "💰",
            ),
            ContentItem::new(
                "Invest Early",
                "Time is your greatest weapon. Start investing young, and let compound interest do the heavy lifting.",
                "Long-term Growth",
                "⏰",
            ),
        ],
        FinanceTrack::Wayne => vec![
            ContentItem::new(
                "Diversification",
                "Never put all your resources in one place. Spread your investments like you spread your operations.",
                "Risk Management",
                "🏢",
            ),
            ContentItem::new(
                "Market Psychology",
                "Fear and greed move markets. When others panic, that's when opportunities reveal themselves.",
                "Strategic Investment",
                "🧠",
            ),
            ContentItem::new(
                "Passive Income",
                "Build systems that work while you sleep. True wealth comes from assets, not labor.",
                "Wealth Building",
                "🏭",
            ),
        ],
    }
}

/// Default single-text answer for a wisdom kind
pub fn wisdom_text(kind: WisdomKind) -> &'static str {
    match kind {
        WisdomKind::AskBatman => {
            "It's not who you are underneath, but what you do that defines you. Choose one hard thing today and finish it."
        }
        WisdomKind::JusticeChallenge => {
            "Stand up for someone who cannot stand up for themselves. Justice begins with the smallest acts of courage."
        }
        WisdomKind::HealthChallenge => {
            "Complete 100 push-ups today. Break them into sets. Your future self will thank you."
        }
        WisdomKind::WisdomQuotes | WisdomKind::HealthProtocols | WisdomKind::FinanceTips => {
            "The training is nothing. The will is everything. The will to act."
        }
    }
}

/// Daily financial wisdom on the finance page
pub const DAILY_FINANCIAL_WISDOM: &str = "A penny saved is a penny earned. But a dollar invested wisely becomes ten dollars in time. Start today, even if it's just spare change.";

/// Reply used when the conversation provider fails
pub const ASK_BATMAN_FAILURE: &str =
    "Even Batman's systems can fail. Check your API connection and try again.";

/// Daily routine on the health page
pub fn daily_routine() -> Vec<RoutineStep> {
    vec![
        RoutineStep { time: "5:00 AM", activity: "Wake up, no snooze", icon: "⏰" },
        RoutineStep { time: "5:30 AM", activity: "Physical training", icon: "🏃" },
        RoutineStep { time: "7:00 AM", activity: "Meditation/Planning", icon: "🧘" },
        RoutineStep { time: "8:00 AM", activity: "Nutritious breakfast", icon: "🍳" },
        RoutineStep { time: "10:00 PM", activity: "Wind down routine", icon: "📖" },
        RoutineStep { time: "11:00 PM", activity: "Sleep (no devices)", icon: "😴" },
    ]
}

/// Missions for one cadence
pub fn missions(cadence: Cadence) -> Vec<Mission> {
    use Difficulty::*;

    let m = |id, title, description, difficulty, icon| Mission {
        id,
        title,
        description,
        difficulty,
        icon,
    };

    match cadence {
        Cadence::Daily => vec![
            m(1, "Dawn Warrior", "Rise at 5 AM and conquer the morning with purpose and intention—before the world wakes up", Rookie, "🌅"),
            m(2, "Physical Dominance", "Complete 45 minutes of intense physical training—push your body beyond yesterday's limits", Standard, "💪"),
            m(3, "Knowledge Weaponization", "Read for 30 minutes or master a new skill that makes you more dangerous in your field", Standard, "📖"),
            m(4, "Justice in Action", "Perform one meaningful act of service—help someone who cannot help themselves today", Advanced, "⚖️"),
            m(5, "Digital Detox Protocol", "Spend 2 hours completely disconnected from all devices—reconnect with reality and yourself", Advanced, "📱"),
            m(6, "Mental Clarity Session", "Complete 15 minutes of focused meditation or deep reflection—sharpen your mental blade", Standard, "🧘"),
            m(7, "Nutrition Excellence", "Eat only whole, unprocessed foods today—fuel your body like the high-performance machine it is", Advanced, "🥗"),
            m(8, "Social Connection", "Have a meaningful conversation with someone important to you—relationships are your true wealth", Rookie, "💬"),
        ],
        Cadence::Weekly => vec![
            m(9, "Strategic Planning Mastery", "Plan your entire week every Sunday—preparation separates winners from everyone else", Elite, "📋"),
            m(10, "Financial Intelligence", "Track every expense and review your financial position—knowledge is power, ignorance is expensive", Elite, "💰"),
            m(11, "Skill Development Protocol", "Dedicate 1 hour daily to improving one specific professional skill—compound learning creates legends", Elite, "🎯"),
            m(12, "Community Impact Mission", "Volunteer for a cause larger than yourself—true heroes serve something greater than their own interests", Elite, "🤝"),
            m(13, "Network Expansion", "Connect with 3 new people in your field this week—your network determines your net worth", Elite, "🌐"),
            m(14, "Creative Expression", "Spend time on creative pursuits—writing, art, music—creativity solves problems logic cannot touch", Elite, "🎨"),
        ],
        Cadence::Monthly => vec![
            m(15, "Physical Transformation", "Complete a 30-day fitness challenge—your body is capable of more than your mind believes", Legendary, "🏆"),
            m(16, "Fear Elimination Protocol", "Do something that genuinely scares you—courage is not the absence of fear, but action despite it", Legendary, "🦇"),
            m(17, "Relationship Investment", "Strengthen your most important relationships through consistent, meaningful actions", Legendary, "❤️"),
            m(18, "Financial Fortress Building", "Increase your savings rate by 5% and optimize one investment strategy", Legendary, "🏰"),
        ],
    }
}

/// Tools page catalog
pub fn tools() -> Vec<Tool> {
    vec![
        Tool {
            name: "Terminal",
            description: "Access the Batcomputer's advanced terminal interface",
            icon: "💻",
            url: "https://batterminal.vercel.app",
            category: ToolCategory::Development,
        },
        Tool {
            name: "Market Scanner",
            description: "Real-time cryptocurrency and stock market analysis",
            icon: "📊",
            url: "#",
            category: ToolCategory::Finance,
        },
        Tool {
            name: "Health Monitor",
            description: "Track global health metrics and personal wellness",
            icon: "🏥",
            url: "#",
            category: ToolCategory::Health,
        },
        Tool {
            name: "Justice Analytics",
            description: "Crime pattern analysis and prediction tools",
            icon: "⚖️",
            url: "#",
            category: ToolCategory::Justice,
        },
        Tool {
            name: "Wisdom Database",
            description: "Access Batman's complete knowledge repository",
            icon: "🧠",
            url: "#",
            category: ToolCategory::Knowledge,
        },
        Tool {
            name: "Mission Planner",
            description: "Strategic mission planning and execution tools",
            icon: "🎯",
            url: "#",
            category: ToolCategory::Operations,
        },
    ]
}

/// Relief organizations on the donate page
pub fn relief_organizations() -> Vec<ReliefOrganization> {
    use ReliefRegion::*;

    let org = |name, url, region| ReliefOrganization { name, url, region };

    vec![
        org("UNRWA", "https://donate.unrwa.org/int/en/gaza", Gaza),
        org("Palestine Children's Relief Fund (PCRF)", "https://www.pcrf.net/", Gaza),
        org("Islamic Relief USA", "https://irusa.org/middle-east/palestine/", Gaza),
        org("Anera", "https://www.anera.org/where-we-work/palestine/gaza/", Gaza),
        org("Save the Children", "https://www.savethechildren.org/us/where-we-work/west-bank-gaza", Gaza),
        org("Gaza Soup Kitchen", "https://gazasoupkitchen.com/", Gaza),
        org("Dahnoun Mutual Aid", "https://chuffed.org/project/115245-dahnoun-mutual-aid", Gaza),
        org("HEAL Palestine", "https://www.healpalestine.org/donate/", Gaza),
        org("MedGlobal", "https://medglobal.org/campaign/gaza-rmm/donate/", Gaza),
        org("United24", "https://u24.gov.ua/", Ukraine),
        org("Razom for Ukraine", "https://razomforukraine.org/donate/", Ukraine),
        org("Nova Ukraine", "https://novaukraine.org/donate/", Ukraine),
        org("Doctors Without Borders (MSF) Ukraine", "https://donate.doctorswithoutborders.org/donate/msf-ukraine", Ukraine),
        org("International Committee of the Red Cross (ICRC) Ukraine", "https://www.icrc.org/en/where-we-work/europe-central-asia/ukraine", Ukraine),
        org("Sudan Relief Fund", "https://sudanrelieffund.com/donate/", Sudan),
        org("Doctors Without Borders (MSF) Sudan", "https://donate.doctorswithoutborders.org/donate/msf-sudan", Sudan),
        org("International Rescue Committee (IRC) Sudan", "https://www.rescue.org/country/sudan", Sudan),
        org("CARE International Sudan", "https://www.care.org/where-we-work/sudan/", Sudan),
        org("International Committee of the Red Cross (ICRC)", "https://www.icrc.org/en/donate", Global),
        org("Doctors Without Borders (MSF)", "https://donate.doctorswithoutborders.org/", Global),
        org("Direct Relief", "https://www.directrelief.org/", Global),
        org("CARE International", "https://www.care.org/donate/", Global),
        org("Oxfam International", "https://www.oxfam.org/en/donate", Global),
        org("World Food Programme (WFP)", "https://www.wfp.org/donate", Global),
        org("GoFundMe", "https://www.gofundme.com/c/cause/gaza-crisis-relief", Crowdfunding),
        org("JustGiving", "https://www.justgiving.com/", Crowdfunding),
        org("GlobalGiving", "https://www.globalgiving.org/projects/", Crowdfunding),
    ]
}

/// Features grid on the home page
pub fn features() -> Vec<Feature> {
    vec![
        Feature {
            title: "Justice Protocols",
            description: "Life guidance from Gotham's protector",
            icon: "⚖️",
            path: "/justice",
        },
        Feature {
            title: "Gotham Finance",
            description: "Strategic wealth management wisdom",
            icon: "💰",
            path: "/finance",
        },
        Feature {
            title: "Bat-Health Protocol",
            description: "Physical and mental conditioning",
            icon: "💪",
            path: "/health",
        },
        Feature {
            title: "Ask Batman",
            description: "Direct counsel from the Dark Knight",
            icon: "🦇",
            path: "/askbatman",
        },
    ]
}

/// Top navigation
pub fn navigation() -> Vec<NavItem> {
    vec![
        NavItem { path: "/", label: "Home" },
        NavItem { path: "/justice", label: "Justice" },
        NavItem { path: "/finance", label: "Finance" },
        NavItem { path: "/health", label: "Health" },
        NavItem { path: "/askbatman", label: "Ask Batman" },
        NavItem { path: "/missions", label: "Missions" },
    ]
}
