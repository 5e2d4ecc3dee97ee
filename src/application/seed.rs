use tracing::info;

use crate::domain::{CatalogKind, DEFAULT_INTERESTS, DEFAULT_SKILLS};
use crate::error::AppResult;
use crate::infrastructure::repositories::CatalogRepository;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub created: usize,
    pub existing: usize,
}

/// Get-or-creates the default skills and interests. Safe to run repeatedly.
pub async fn seed_catalog(repo: &dyn CatalogRepository) -> AppResult<SeedSummary> {
    let mut summary = SeedSummary::default();

    for (kind, names) in [
        (CatalogKind::Skill, DEFAULT_SKILLS),
        (CatalogKind::Interest, DEFAULT_INTERESTS),
    ] {
        for name in names {
            let (item, created) = repo.get_or_create(kind, name).await?;
            if created {
                summary.created += 1;
                info!(kind = kind.label(), name = %item.name, "catalog entry created");
            } else {
                summary.existing += 1;
                info!(kind = kind.label(), name = %item.name, "catalog entry already exists");
            }
        }
    }

    Ok(summary)
}
