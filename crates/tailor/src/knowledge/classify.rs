//! Classification tables: domains, industries, technologies and stop words.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Engineering domain of a posting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    Frontend,
    Backend,
    Fullstack,
    Devops,
    Data,
    Mobile,
    Security,
    Cloud,
    Qa,
    Management,
    Design,
    #[default]
    General,
}

impl Domain {
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Frontend => "frontend",
            Domain::Backend => "backend",
            Domain::Fullstack => "fullstack",
            Domain::Devops => "devops",
            Domain::Data => "data",
            Domain::Mobile => "mobile",
            Domain::Security => "security",
            Domain::Cloud => "cloud",
            Domain::Qa => "qa",
            Domain::Management => "management",
            Domain::Design => "design",
            Domain::General => "general",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Industry of the hiring company.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Industry {
    Finance,
    Healthcare,
    Ecommerce,
    #[default]
    Tech,
}

impl Industry {
    pub fn as_str(&self) -> &'static str {
        match self {
            Industry::Finance => "finance",
            Industry::Healthcare => "healthcare",
            Industry::Ecommerce => "ecommerce",
            Industry::Tech => "tech",
        }
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Domain keyword table. Ties on hit count go to the earlier entry.
pub static DOMAIN_KEYWORDS: &[(Domain, &[&str])] = &[
    (
        Domain::Frontend,
        &["frontend", "front-end", "react", "angular", "vue", "ui", "ux", "css", "html"],
    ),
    (
        Domain::Backend,
        &["backend", "back-end", "server", "api", "node", "django", "spring", "microservices"],
    ),
    (Domain::Fullstack, &["full stack", "fullstack", "full-stack", "mern", "mean"]),
    (
        Domain::Devops,
        &["devops", "ci/cd", "docker", "kubernetes", "infrastructure", "sre"],
    ),
    (
        Domain::Data,
        &["data science", "machine learning", "data engineer", "analytics", "ml", "ai"],
    ),
    (Domain::Mobile, &["mobile", "ios", "android", "react native", "flutter"]),
    (Domain::Security, &["security", "cybersecurity", "penetration", "owasp"]),
    (Domain::Cloud, &["cloud", "aws", "azure", "gcp", "solutions architect"]),
    (
        Domain::Qa,
        &["qa", "testing", "quality assurance", "test automation", "sdet"],
    ),
    (
        Domain::Management,
        &["engineering manager", "tech lead", "team lead", "director of engineering"],
    ),
    (Domain::Design, &["ux design", "ui design", "product design", "figma"]),
];

/// Industry keyword table. The first industry with any hit wins.
pub static INDUSTRY_KEYWORDS: &[(Industry, &[&str])] = &[
    (
        Industry::Finance,
        &["fintech", "financial", "banking", "payment", "trading", "investment", "insurance"],
    ),
    (
        Industry::Healthcare,
        &["healthcare", "health", "medical", "clinical", "patient", "pharma", "biotech"],
    ),
    (
        Industry::Ecommerce,
        &["ecommerce", "e-commerce", "retail", "marketplace", "shopping", "commerce"],
    ),
    (Industry::Tech, &["saas", "platform", "software", "tech", "startup", "product"]),
];

/// Technologies reported in scan order.
pub static TECHNOLOGIES: &[&str] = &[
    "react", "angular", "vue", "node.js", "nodejs", "express", "django", "flask",
    "spring", "java", "python", "typescript", "javascript", "go", "golang", "rust",
    "c#", ".net", "ruby", "rails", "php", "laravel", "swift", "kotlin",
    "aws", "azure", "gcp", "docker", "kubernetes", "terraform",
    "mongodb", "postgresql", "mysql", "redis", "elasticsearch",
    "graphql", "rest", "grpc", "kafka", "rabbitmq",
    "jenkins", "github actions", "circleci", "gitlab",
    "jest", "cypress", "selenium", "playwright",
    "figma", "sketch", "storybook",
    "tensorflow", "pytorch", "pandas", "scikit-learn",
    "react native", "flutter", "next.js", "nuxt", "svelte",
    "tailwind", "bootstrap", "material ui", "sass", "scss",
];

/// Terms dropped from extracted keywords.
pub static STOP_WORDS: &[&str] = &[
    "the", "and", "for", "with", "you", "our", "will", "are", "have", "this", "that", "from",
    "your", "can", "about", "more", "what", "who", "how", "been", "were", "able", "must",
    "should", "would", "could",
];
