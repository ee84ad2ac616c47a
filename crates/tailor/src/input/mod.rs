//! Input boundary: posting validation and candidate profiles.

mod posting;
mod profile;
mod record;

pub use posting::{JobPosting, PostingLimits};
pub use profile::{
    present, CandidateProfile, Gpa, ProfileEducation, ProfileExperience, ProfileSkill,
};
pub use record::{Address, PersonalInfo, ProfessionalSummary, ProfileInput, ProfileRecord};
