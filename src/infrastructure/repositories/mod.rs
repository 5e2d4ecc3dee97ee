mod association_repository;
mod catalog_repository;
mod search;
mod traits;
mod user_repository;
mod utils;
mod work_experience_repository;

pub use association_repository::AssociationRepositoryImpl;
pub use catalog_repository::CatalogRepositoryImpl;
pub use traits::{
    AssociationRepository, AuthRepository, CatalogRepository, UserRepository, UserSearchFilter,
    WorkExperienceRepository,
};
pub use user_repository::{AuthRepositoryImpl, UserRepositoryImpl};
pub use utils::escape_like_pattern;
pub use work_experience_repository::WorkExperienceRepositoryImpl;
