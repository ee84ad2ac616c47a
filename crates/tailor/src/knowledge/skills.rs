//! Skill categories: the keywords that identify a category in a posting and
//! the skills a resume in that category lists.

use serde::Serialize;

/// A skill category with its detection keywords and resume skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkillCategory {
    /// Display name, also used in generated summaries.
    pub name: &'static str,
    /// Lower-case substrings that indicate this category.
    #[serde(skip)]
    pub keywords: &'static [&'static str],
    /// Skills offered when synthesizing a skill list.
    pub skills: &'static [&'static str],
}

impl SkillCategory {
    /// Number of keywords found as substrings of the lower-cased text.
    pub fn keyword_hits(&self, lower_text: &str) -> usize {
        self.keywords
            .iter()
            .filter(|kw| lower_text.contains(*kw))
            .count()
    }
}

/// Categories in declaration order. The first two are the fallback when a
/// posting matches nothing.
pub static SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        name: "Frontend",
        keywords: &[
            "frontend", "front-end", "ui", "ux", "react", "angular", "vue", "svelte", "html",
            "css", "sass", "scss", "tailwind", "bootstrap", "javascript", "typescript", "web",
            "responsive", "dom", "spa", "pwa", "nextjs", "next.js", "nuxt", "gatsby",
        ],
        skills: &[
            "React", "Angular", "Vue.js", "TypeScript", "JavaScript", "HTML5", "CSS3",
            "SASS/SCSS", "Tailwind CSS", "Bootstrap", "Responsive Design", "Redux", "Next.js",
            "Webpack", "REST APIs",
        ],
    },
    SkillCategory {
        name: "Backend",
        keywords: &[
            "backend", "back-end", "server", "api", "node", "nodejs", "express", "nestjs",
            "django", "flask", "spring", "java", "python", "ruby", "rails", "php", "laravel",
            "golang", "go", "rust", ".net", "c#", "microservices", "graphql", "rest", "grpc",
        ],
        skills: &[
            "Node.js", "Express.js", "Python", "Django", "Java", "Spring Boot",
            "REST API Design", "GraphQL", "Microservices Architecture",
            "Authentication & Authorization", "API Security", "Server-Side Rendering",
        ],
    },
    SkillCategory {
        name: "Database",
        keywords: &[
            "database", "sql", "nosql", "mongodb", "postgres", "postgresql", "mysql", "redis",
            "elasticsearch", "dynamodb", "cassandra", "oracle", "sqlite", "prisma", "sequelize",
            "mongoose", "orm", "data modeling",
        ],
        skills: &[
            "MongoDB", "PostgreSQL", "MySQL", "Redis", "Elasticsearch", "Database Design",
            "Query Optimization", "Data Modeling", "ORM (Prisma/Sequelize)", "Database Migration",
        ],
    },
    SkillCategory {
        name: "Cloud & DevOps",
        keywords: &[
            "aws", "azure", "gcp", "cloud", "docker", "kubernetes", "k8s", "ci/cd", "cicd",
            "jenkins", "terraform", "ansible", "devops", "deployment", "infrastructure", "lambda",
            "s3", "ec2", "ecs", "fargate", "cloudformation", "helm", "serverless",
        ],
        skills: &[
            "AWS (EC2, S3, Lambda, ECS)", "Docker", "Kubernetes", "CI/CD Pipelines", "Terraform",
            "GitHub Actions", "Infrastructure as Code", "Cloud Architecture", "Serverless",
            "Linux Administration",
        ],
    },
    SkillCategory {
        name: "Data Science & ML",
        keywords: &[
            "machine learning", "ml", "ai", "artificial intelligence", "data science",
            "deep learning", "nlp", "natural language", "tensorflow", "pytorch", "pandas",
            "numpy", "scikit", "computer vision", "neural network", "model training",
            "data analysis", "analytics", "statistics", "regression", "classification",
        ],
        skills: &[
            "Python", "TensorFlow", "PyTorch", "Scikit-learn", "Pandas", "NumPy",
            "Data Analysis", "Machine Learning", "Deep Learning",
            "Natural Language Processing", "Statistical Modeling", "Data Visualization",
        ],
    },
    SkillCategory {
        name: "Mobile",
        keywords: &[
            "mobile", "ios", "android", "react native", "flutter", "swift", "kotlin", "xamarin",
            "ionic", "app development", "mobile app",
        ],
        skills: &[
            "React Native", "Flutter", "iOS (Swift)", "Android (Kotlin)", "Mobile UI/UX",
            "App Store Deployment", "Push Notifications", "Mobile Performance Optimization",
            "Cross-Platform Development",
        ],
    },
    SkillCategory {
        name: "Security",
        keywords: &[
            "security", "cybersecurity", "penetration", "vulnerability", "encryption", "oauth",
            "jwt", "authentication", "authorization", "firewall", "compliance", "soc", "gdpr",
            "hipaa", "owasp",
        ],
        skills: &[
            "Application Security", "OAuth 2.0 / JWT", "OWASP Top 10",
            "Vulnerability Assessment", "Encryption", "Security Auditing",
            "Identity & Access Management", "Compliance (GDPR/HIPAA)", "Penetration Testing",
        ],
    },
    SkillCategory {
        name: "Testing & QA",
        keywords: &[
            "testing", "test", "qa", "quality", "jest", "mocha", "cypress", "selenium",
            "playwright", "unit test", "integration test", "e2e", "tdd", "bdd",
            "automation testing",
        ],
        skills: &[
            "Jest", "Cypress", "Selenium", "Playwright", "Unit Testing", "Integration Testing",
            "E2E Testing", "Test-Driven Development", "CI/CD Testing", "Performance Testing",
        ],
    },
    SkillCategory {
        name: "Project Management",
        keywords: &[
            "agile", "scrum", "kanban", "project management", "jira", "confluence", "product",
            "stakeholder", "roadmap", "sprint", "backlog", "product owner", "scrum master",
            "waterfall", "lean",
        ],
        skills: &[
            "Agile/Scrum", "Jira", "Confluence", "Sprint Planning", "Stakeholder Management",
            "Roadmap Development", "Cross-functional Collaboration", "Risk Management",
            "OKR/KPI Tracking",
        ],
    },
    SkillCategory {
        name: "Design",
        keywords: &[
            "design", "figma", "sketch", "adobe", "photoshop", "illustrator", "ui/ux",
            "wireframe", "prototype", "user research", "accessibility", "wcag", "design system",
        ],
        skills: &[
            "Figma", "Adobe Creative Suite", "UI/UX Design", "Wireframing", "Prototyping",
            "User Research", "Design Systems", "Accessibility (WCAG)", "Visual Design",
            "Interaction Design",
        ],
    },
];
