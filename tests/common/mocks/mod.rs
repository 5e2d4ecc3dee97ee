#[allow(dead_code, unused_imports)]
pub mod association_repo;
#[allow(dead_code, unused_imports)]
pub mod auth_repo;
#[allow(dead_code, unused_imports)]
pub mod catalog_repo;
#[allow(dead_code, unused_imports)]
pub mod identity_provider;
#[allow(dead_code, unused_imports)]
pub mod user_repo;
#[allow(dead_code, unused_imports)]
pub mod work_repo;

#[allow(dead_code, unused_imports)]
pub use association_repo::MockAssociationRepo;
#[allow(dead_code, unused_imports)]
pub use auth_repo::MockAuthRepo;
#[allow(dead_code, unused_imports)]
pub use catalog_repo::MockCatalogRepo;
#[allow(dead_code, unused_imports)]
pub use identity_provider::MockIdentityProvider;
#[allow(dead_code, unused_imports)]
pub use user_repo::MockUserRepo;
#[allow(dead_code, unused_imports)]
pub use work_repo::MockWorkRepo;
