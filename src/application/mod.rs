mod auth_service;
mod catalog_service;
mod profile_service;
mod search_service;
mod seed;
mod work_experience_service;

pub use auth_service::AuthService;
pub use catalog_service::CatalogService;
pub use profile_service::ProfileService;
pub use search_service::SearchService;
pub use seed::{seed_catalog, SeedSummary};
pub use work_experience_service::WorkExperienceService;
