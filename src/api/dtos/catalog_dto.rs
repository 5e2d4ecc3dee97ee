use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::{CatalogItem, UserAssociation};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItemResponse {
    pub id: Uuid,
    pub name: String,
}

impl From<&CatalogItem> for CatalogItemResponse {
    fn from(item: &CatalogItem) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
        }
    }
}

impl From<&UserAssociation> for CatalogItemResponse {
    fn from(association: &UserAssociation) -> Self {
        Self {
            id: association.item_id,
            name: association.item_name.clone(),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct AddUserSkillRequest {
    #[validate(length(min = 1, max = 50, message = "Skill name must be 1-50 characters"))]
    pub skill: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct AddUserInterestRequest {
    #[validate(length(min = 1, max = 50, message = "Interest name must be 1-50 characters"))]
    pub interest: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSkillResponse {
    pub id: Uuid,
    pub skill: CatalogItemResponse,
}

impl From<&UserAssociation> for UserSkillResponse {
    fn from(association: &UserAssociation) -> Self {
        Self {
            id: association.id,
            skill: association.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInterestResponse {
    pub id: Uuid,
    pub interest: CatalogItemResponse,
}

impl From<&UserAssociation> for UserInterestResponse {
    fn from(association: &UserAssociation) -> Self {
        Self {
            id: association.id,
            interest: association.into(),
        }
    }
}
