use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// The two global catalogs a user can tag themselves with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CatalogKind {
    Skill,
    Interest,
}

impl CatalogKind {
    pub const fn catalog_table(self) -> &'static str {
        match self {
            CatalogKind::Skill => "skills",
            CatalogKind::Interest => "interests",
        }
    }

    pub const fn association_table(self) -> &'static str {
        match self {
            CatalogKind::Skill => "user_skills",
            CatalogKind::Interest => "user_interests",
        }
    }

    pub const fn item_column(self) -> &'static str {
        match self {
            CatalogKind::Skill => "skill_id",
            CatalogKind::Interest => "interest_id",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            CatalogKind::Skill => "skill",
            CatalogKind::Interest => "interest",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct CatalogItem {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// A user's link to one catalog entry, with the entry's name joined in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct UserAssociation {
    pub id: Uuid,
    pub user_id: Uuid,
    pub item_id: Uuid,
    pub item_name: String,
    pub created_at: DateTime<Utc>,
}

pub const DEFAULT_SKILLS: &[&str] = &[
    "Python",
    "JavaScript",
    "Django",
    "React",
    "Data Science",
    "Java",
    "C++",
    "Ruby",
    "PHP",
    "Swift",
    "Kotlin",
    "Golang",
    "Rust",
];

pub const DEFAULT_INTERESTS: &[&str] = &[
    "Music",
    "Art",
    "Technology",
    "Sports",
    "Travel",
    "Cooking",
    "Reading",
    "Photography",
    "Fitness",
    "Gaming",
    "Writing",
    "DIY",
];
