//! Pools used to synthesize resume content.

use super::classify::{Domain, Industry};

/// A named group of action verbs. Bullets cycle through the groups.
#[derive(Debug, Clone, Copy)]
pub struct VerbGroup {
    pub name: &'static str,
    pub verbs: &'static [&'static str],
}

pub static ACTION_VERBS: &[VerbGroup] = &[
    VerbGroup {
        name: "development",
        verbs: &[
            "Developed", "Engineered", "Built", "Implemented", "Designed", "Created",
            "Architected", "Constructed", "Programmed", "Coded",
        ],
    },
    VerbGroup {
        name: "leadership",
        verbs: &[
            "Led", "Managed", "Directed", "Coordinated", "Oversaw", "Mentored", "Guided",
            "Supervised", "Spearheaded", "Championed",
        ],
    },
    VerbGroup {
        name: "improvement",
        verbs: &[
            "Optimized", "Improved", "Enhanced", "Streamlined", "Refactored", "Accelerated",
            "Reduced", "Increased", "Modernized", "Upgraded",
        ],
    },
    VerbGroup {
        name: "collaboration",
        verbs: &[
            "Collaborated", "Partnered", "Facilitated", "Contributed", "Engaged", "Liaised",
            "Consulted", "Integrated", "Aligned", "Coordinated",
        ],
    },
    VerbGroup {
        name: "analysis",
        verbs: &[
            "Analyzed", "Evaluated", "Assessed", "Investigated", "Researched", "Diagnosed",
            "Identified", "Discovered", "Audited", "Reviewed",
        ],
    },
    VerbGroup {
        name: "delivery",
        verbs: &[
            "Delivered", "Launched", "Deployed", "Released", "Shipped", "Executed", "Completed",
            "Published", "Migrated", "Transitioned",
        ],
    },
];

/// Bullet templates with `{verb}`, `{technology}`, `{metric}` and `{outcome}` slots.
pub static ACHIEVEMENT_TEMPLATES: &[&str] = &[
    "{verb} {technology} application serving {metric} users, achieving {outcome}% uptime",
    "{verb} system performance by {metric}% through {technology} optimization and caching strategies",
    "{verb} with cross-functional teams of {metric} engineers to deliver features on schedule",
    "{verb} and maintained {metric}+ RESTful APIs using {technology}, reducing response time by {outcome}%",
    "{verb} CI/CD pipelines using {technology}, reducing deployment time from hours to {metric} minutes",
    "{verb} comprehensive test suites achieving {metric}% code coverage using {technology}",
    "{verb} database queries resulting in {metric}% improvement in data retrieval performance",
    "{verb} microservices architecture handling {metric}+ requests per second using {technology}",
    "{verb} responsive UI components using {technology}, improving user engagement by {metric}%",
    "{verb} authentication and authorization system using {technology}, securing {metric}+ user accounts",
    "{verb} automated data pipeline processing {metric}+ records daily using {technology}",
    "{verb} team of {metric} developers, conducting code reviews and establishing coding standards",
    "{verb} legacy monolith into {metric} microservices, reducing deployment failures by {outcome}%",
    "{verb} real-time notification system using {technology}, delivering {metric}+ messages daily",
    "{verb} cloud infrastructure on {technology}, reducing operational costs by {metric}%",
    "{verb} A/B testing framework that increased conversion rates by {metric}%",
    "{verb} documentation and onboarding materials reducing new developer ramp-up time by {metric}%",
    "{verb} monitoring and alerting system using {technology}, reducing incident response time by {metric}%",
];

/// Percentage values substituted into achievement bullets.
pub static PERCENTAGES: &[&str] = &["15", "20", "25", "30", "35", "40", "45", "50", "60"];

pub static COMPANY_POOLS: &[(Industry, &[&str])] = &[
    (
        Industry::Tech,
        &[
            "TechNova Solutions", "CloudBridge Systems", "DataPulse Inc.", "InnovateTech Corp",
            "DigitalEdge Labs", "NexGen Software", "CyberVault Technologies",
        ],
    ),
    (
        Industry::Finance,
        &[
            "FinServe Global", "CapitalStream Technologies", "SecureBank Systems",
            "PayBridge Solutions", "WealthTech Partners",
        ],
    ),
    (
        Industry::Healthcare,
        &[
            "HealthSync Technologies", "MedConnect Systems", "CarePoint Digital",
            "BioTech Innovations", "HealthBridge Solutions",
        ],
    ),
    (
        Industry::Ecommerce,
        &[
            "ShopWave Technologies", "RetailStack Inc.", "CartGenius Solutions",
            "MarketPulse Digital", "CommercePro Systems",
        ],
    ),
];

/// Fallback when an industry has no pool of its own.
pub static GENERIC_COMPANIES: &[&str] = &[
    "Vertex Solutions", "Pinnacle Technologies", "Summit Digital", "Horizon Systems",
    "Catalyst Corp", "Ascend Technologies", "Vanguard Software",
];

pub static JOB_TITLES: &[(Domain, &[&str])] = &[
    (
        Domain::Frontend,
        &["Frontend Developer", "UI Engineer", "Frontend Software Engineer", "Web Developer"],
    ),
    (
        Domain::Backend,
        &["Backend Developer", "Software Engineer", "Backend Engineer", "API Developer"],
    ),
    (
        Domain::Fullstack,
        &[
            "Full Stack Developer", "Software Engineer", "Full Stack Engineer",
            "Web Application Developer",
        ],
    ),
    (
        Domain::Devops,
        &["DevOps Engineer", "Site Reliability Engineer", "Platform Engineer", "Infrastructure Engineer"],
    ),
    (
        Domain::Data,
        &["Data Engineer", "Data Analyst", "Data Scientist", "Analytics Engineer"],
    ),
    (
        Domain::Mobile,
        &["Mobile Developer", "iOS Developer", "Android Developer", "Mobile Engineer"],
    ),
    (
        Domain::Security,
        &[
            "Security Engineer", "Application Security Engineer", "Cybersecurity Analyst",
            "Security Consultant",
        ],
    ),
    (
        Domain::Cloud,
        &["Cloud Engineer", "Cloud Architect", "Solutions Architect", "Cloud Infrastructure Engineer"],
    ),
    (
        Domain::Qa,
        &["QA Engineer", "Test Automation Engineer", "Quality Engineer", "SDET"],
    ),
    (
        Domain::Management,
        &["Engineering Manager", "Technical Lead", "Team Lead", "Development Manager"],
    ),
    (
        Domain::Design,
        &["UX Designer", "UI/UX Designer", "Product Designer", "Design Engineer"],
    ),
    (
        Domain::General,
        &["Software Developer", "Software Engineer", "Application Developer", "Technology Consultant"],
    ),
];

/// Phrases filling `{specialty}` in summaries. Domains without an entry use "software".
pub static SPECIALTIES: &[(Domain, &str)] = &[
    (Domain::Fullstack, "full-stack web"),
    (Domain::Frontend, "frontend"),
    (Domain::Backend, "backend"),
    (Domain::Data, "data-driven"),
    (Domain::Mobile, "mobile"),
    (Domain::Devops, "cloud infrastructure"),
    (Domain::Cloud, "cloud-native"),
    (Domain::Security, "secure"),
    (Domain::Qa, "quality-focused"),
];

/// Summary templates with `{title}`, `{years}`, `{domains}`, `{specialty}` and `{passion}` slots.
pub static SUMMARY_TEMPLATES: &[&str] = &[
    "Results-driven {title} with {years} years of experience in {domains}. Proven track record of delivering high-quality {specialty} solutions that drive business growth. Passionate about {passion} and committed to writing clean, maintainable code.",
    "Accomplished {title} with {years}+ years of expertise in {domains}. Skilled at translating complex business requirements into scalable technical solutions. Strong advocate for {passion} and continuous improvement.",
    "Detail-oriented {title} with {years} years of hands-on experience building {specialty} applications. Adept at working in fast-paced agile environments and collaborating with cross-functional teams. Focused on {passion} and delivering exceptional user experiences.",
    "Innovative {title} bringing {years} years of professional experience in {domains}. Demonstrated ability to architect and implement robust {specialty} systems. Committed to {passion} and staying current with emerging technologies.",
];

pub static PASSIONS: &[&str] = &[
    "best practices and clean architecture",
    "developer experience and code quality",
    "scalable systems and performance optimization",
    "user-centric design and accessibility",
    "automation and continuous delivery",
    "mentoring junior developers and knowledge sharing",
];

pub static FIRST_NAMES: &[&str] = &[
    "Alex", "Jordan", "Morgan", "Taylor", "Casey", "Riley", "Avery", "Cameron", "Quinn", "Sage",
    "Reese", "Blake", "Skyler", "Dakota", "Emery",
];

pub static LAST_NAMES: &[&str] = &[
    "Anderson", "Martinez", "Thompson", "Nakamura", "Patel", "Rodriguez", "Chen", "Williams",
    "Kim", "Johnson", "Singh", "Park", "Mitchell", "Rivera", "Bennett",
];

pub static LOCATIONS: &[&str] = &[
    "San Francisco, CA", "New York, NY", "Austin, TX", "Seattle, WA",
    "Denver, CO", "Chicago, IL", "Boston, MA", "Portland, OR",
    "Atlanta, GA", "Raleigh, NC", "San Diego, CA", "Minneapolis, MN",
];

pub static MONTHS: &[&str] = &[
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
