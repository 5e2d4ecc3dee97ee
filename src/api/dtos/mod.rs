pub mod auth_dto;
pub mod catalog_dto;
pub mod profile_dto;
pub mod search_dto;
pub mod work_experience_dto;

pub use auth_dto::*;
pub use catalog_dto::*;
pub use profile_dto::*;
pub use search_dto::*;
pub use work_experience_dto::*;
