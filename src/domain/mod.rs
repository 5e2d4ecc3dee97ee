pub mod catalog;
pub mod errors;
pub mod user;
pub mod work_experience;

pub use catalog::{CatalogItem, CatalogKind, UserAssociation, DEFAULT_INTERESTS, DEFAULT_SKILLS};
pub use errors::DomainError;
pub use user::{AuthIdentity, AuthProvider, ExternalProfile, ProfileChanges, User, UserSession};
pub use work_experience::{
    ensure_date_range, JobType, WorkExperience, WorkExperienceChanges, DATE_RANGE_MESSAGE,
};
