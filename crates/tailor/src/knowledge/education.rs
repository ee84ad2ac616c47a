//! Education templates for synthesized education history.

/// A school with the degree it grants and candidate fields/descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EducationTemplate {
    pub school: &'static str,
    pub degree: &'static str,
    pub fields: &'static [&'static str],
    pub descriptions: &'static [&'static str],
}

pub const BACHELOR_DEGREE: &str = "Bachelor of Science";
pub const MASTER_DEGREE: &str = "Master of Science";

pub static EDUCATION_TEMPLATES: &[EducationTemplate] = &[
    EducationTemplate {
        school: "Georgia Institute of Technology",
        degree: BACHELOR_DEGREE,
        fields: &["Computer Science", "Software Engineering", "Information Technology"],
        descriptions: &[
            "Dean's List, GPA: 3.8/4.0",
            "Relevant coursework: Data Structures, Algorithms, Software Engineering, Database Systems",
        ],
    },
    EducationTemplate {
        school: "University of California, Berkeley",
        degree: MASTER_DEGREE,
        fields: &["Computer Science", "Data Science", "Artificial Intelligence"],
        descriptions: &[
            "Graduate Research Assistant",
            "Thesis: Scalable Distributed Systems for Real-Time Data Processing",
        ],
    },
    EducationTemplate {
        school: "University of Texas at Austin",
        degree: BACHELOR_DEGREE,
        fields: &["Computer Engineering", "Electrical Engineering", "Computer Science"],
        descriptions: &[
            "Magna Cum Laude, GPA: 3.7/4.0",
            "Senior Capstone: Full-Stack Web Application for Campus Services",
        ],
    },
    EducationTemplate {
        school: "Carnegie Mellon University",
        degree: MASTER_DEGREE,
        fields: &["Software Engineering", "Information Systems", "Human-Computer Interaction"],
        descriptions: &[
            "Teaching Assistant for Software Architecture",
            "Published research on microservices patterns",
        ],
    },
    EducationTemplate {
        school: "University of Michigan",
        degree: BACHELOR_DEGREE,
        fields: &["Information Science", "Computer Science", "Data Analytics"],
        descriptions: &[
            "Dean's List, Honors Program",
            "Relevant coursework: Machine Learning, Cloud Computing, Cybersecurity",
        ],
    },
];
