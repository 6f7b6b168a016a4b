//! Static page content: project showcase, headline stats, skills and links.

/// A showcased project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub features: &'static [&'static str],
    pub status: ProjectStatus,
    pub users: &'static str,
    pub duration: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectStatus {
    Live,
    Beta,
}

impl ProjectStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Live => "Live",
            ProjectStatus::Beta => "Beta",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            ProjectStatus::Live => "status-live",
            ProjectStatus::Beta => "status-beta",
        }
    }
}

/// Accent palette of a category card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Purple,
    Amber,
    Blue,
}

impl Accent {
    pub fn class(&self) -> &'static str {
        match self {
            Accent::Purple => "accent-purple",
            Accent::Amber => "accent-amber",
            Accent::Blue => "accent-blue",
        }
    }
}

/// A group of projects shown as one showcase card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectCategory {
    pub slug: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub accent: Accent,
    pub description: &'static str,
    pub total_projects: u32,
    pub technologies: &'static [&'static str],
    pub projects: &'static [Project],
}

pub const PROJECT_CATEGORIES: &[ProjectCategory] = &[
    ProjectCategory {
        slug: "mobile",
        name: "Mobile App Development",
        icon: "📱",
        accent: Accent::Purple,
        description: "Native & cross-platform mobile applications with stunning UI/UX",
        total_projects: 15,
        technologies: &["React Native", "Flutter", "iOS", "Android"],
        projects: &[
            Project {
                title: "FitTrack Pro",
                description: "AI-powered fitness tracking app with personalized workout plans and nutrition tracking",
                tech: &["React Native", "Firebase", "TensorFlow Lite"],
                features: &["Real-time tracking", "AI recommendations", "Social sharing"],
                status: ProjectStatus::Live,
                users: "50K+",
                duration: "4 months",
            },
            Project {
                title: "TravelMate",
                description: "Travel planning companion with itinerary management and local recommendations",
                tech: &["Flutter", "Node.js", "MongoDB"],
                features: &["Offline maps", "Trip sharing", "Budget tracking"],
                status: ProjectStatus::Live,
                users: "30K+",
                duration: "3 months",
            },
            Project {
                title: "MindfulMoments",
                description: "Meditation and mindfulness app with guided sessions and progress tracking",
                tech: &["React Native", "Redux", "AWS"],
                features: &["Daily reminders", "Progress analytics", "Custom sessions"],
                status: ProjectStatus::Live,
                users: "20K+",
                duration: "2 months",
            },
            Project {
                title: "FoodHub Delivery",
                description: "Food delivery platform connecting restaurants with customers in real-time",
                tech: &["React Native", "Socket.io", "PostgreSQL"],
                features: &["Live tracking", "Payment gateway", "Push notifications"],
                status: ProjectStatus::Live,
                users: "45K+",
                duration: "5 months",
            },
        ],
    },
    ProjectCategory {
        slug: "blockchain",
        name: "Crypto & Blockchain",
        icon: "₿",
        accent: Accent::Amber,
        description: "Decentralized applications and blockchain solutions",
        total_projects: 12,
        technologies: &["Web3", "Solidity", "Ethereum", "Smart Contracts"],
        projects: &[
            Project {
                title: "CryptoVault",
                description: "Secure multi-chain cryptocurrency wallet with DeFi integration and portfolio tracking",
                tech: &["React", "Web3.js", "Solidity", "Ethers.js"],
                features: &["Multi-chain support", "DeFi staking", "NFT gallery"],
                status: ProjectStatus::Live,
                users: "40K+",
                duration: "6 months",
            },
            Project {
                title: "NFT Marketplace",
                description: "Decentralized marketplace for creating, buying, and selling digital assets",
                tech: &["Next.js", "Hardhat", "IPFS", "Polygon"],
                features: &["Gas optimization", "Lazy minting", "Royalty system"],
                status: ProjectStatus::Live,
                users: "25K+",
                duration: "4 months",
            },
            Project {
                title: "DeFi Dashboard",
                description: "All-in-one DeFi portfolio tracker with yield farming and liquidity pool analytics",
                tech: &["React", "GraphQL", "The Graph", "Web3"],
                features: &["Portfolio tracking", "Yield comparison", "Gas tracker"],
                status: ProjectStatus::Live,
                users: "35K+",
                duration: "3 months",
            },
            Project {
                title: "TokenSwap Exchange",
                description: "Decentralized exchange for seamless token swapping across multiple chains",
                tech: &["Vue.js", "Solidity", "Uniswap", "Chainlink"],
                features: &["Low fees", "Price aggregation", "Slippage protection"],
                status: ProjectStatus::Beta,
                users: "18K+",
                duration: "5 months",
            },
        ],
    },
    ProjectCategory {
        slug: "web",
        name: "Web Development",
        icon: "🌐",
        accent: Accent::Blue,
        description: "Full-stack web applications with modern technologies",
        total_projects: 18,
        technologies: &["React", "Next.js", "Node.js", "GraphQL"],
        projects: &[
            Project {
                title: "ProjectHub",
                description: "Collaborative project management platform with real-time updates and team analytics",
                tech: &["Next.js", "PostgreSQL", "WebSocket", "Redis"],
                features: &["Real-time collaboration", "Kanban boards", "Time tracking"],
                status: ProjectStatus::Live,
                users: "100K+",
                duration: "7 months",
            },
            Project {
                title: "CloudDrive Pro",
                description: "Enterprise file storage solution with advanced sharing and encryption features",
                tech: &["React", "Node.js", "AWS S3", "Docker"],
                features: &["End-to-end encryption", "Version control", "Team workspaces"],
                status: ProjectStatus::Live,
                users: "75K+",
                duration: "6 months",
            },
            Project {
                title: "DataViz Studio",
                description: "Interactive data visualization platform for business intelligence and analytics",
                tech: &["Vue.js", "D3.js", "Python", "FastAPI"],
                features: &["Custom dashboards", "Real-time data", "Export reports"],
                status: ProjectStatus::Beta,
                users: "15K+",
                duration: "4 months",
            },
            Project {
                title: "EduLearn Platform",
                description: "Online learning management system with live classes and interactive courses",
                tech: &["Next.js", "MongoDB", "Zoom API", "Stripe"],
                features: &["Live sessions", "Course builder", "Progress tracking"],
                status: ProjectStatus::Live,
                users: "60K+",
                duration: "8 months",
            },
        ],
    },
];

/// Look up a category by slug.
pub fn category(slug: &str) -> Option<&'static ProjectCategory> {
    PROJECT_CATEGORIES.iter().find(|c| c.slug == slug)
}

/// A headline figure in the stats bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadlineStat {
    pub icon: &'static str,
    pub value: &'static str,
    pub label: &'static str,
}

pub const HEADLINE_STATS: &[HeadlineStat] = &[
    HeadlineStat { icon: "💼", value: "150+", label: "Projects" },
    HeadlineStat { icon: "👥", value: "80+", label: "Clients" },
    HeadlineStat { icon: "★", value: "5.0", label: "Rating" },
    HeadlineStat { icon: "</>", value: "6+", label: "Years" },
];

pub const SKILLS: &[&str] = &[
    "React",
    "Node.js",
    "Python",
    "MongoDB",
    "PostgreSQL",
    "Firebase",
    "TypeScript",
    "Next.js",
    "React Native",
    "Flutter",
    "Android Studio",
];

/// In-page navigation targets, in header order.
pub const NAV_SECTIONS: &[(&str, &str)] = &[
    ("about", "About"),
    ("projects", "Work"),
    ("clients", "Clients"),
    ("testimonials", "Testimonials"),
    ("contact", "Contact"),
];

/// An outbound profile or contact link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub icon: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "Github", icon: "⌥", href: "https://github.com/nevix-dev" },
    SocialLink { label: "LinkedIn", icon: "in", href: "https://www.linkedin.com/company/nevix-dev" },
    SocialLink { label: "Email", icon: "✉", href: "mailto:hello@nevix.dev" },
];
