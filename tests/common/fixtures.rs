#![allow(dead_code)]

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{NaiveDate, Utc};
use skills_backend::api::dtos::{CreateWorkExperienceRequest, RegisterRequest};
use skills_backend::domain::{AuthIdentity, AuthProvider, JobType, User, WorkExperience};
use skills_backend::utils::hash::hash_password;
use uuid::Uuid;

static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

pub const TEST_PASSWORD: &str = "Passw0rd!";

pub fn next_id() -> u64 {
    TEST_COUNTER.fetch_add(1, Ordering::SeqCst)
}

pub fn date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").expect("fixture date")
}

pub fn test_user() -> User {
    let id = next_id();
    let now = Utc::now();
    User {
        id: Uuid::new_v4(),
        email: format!("user{id}@example.com"),
        name: format!("Test User {id}"),
        phone: Some("+14155551234".to_string()),
        profile_picture: None,
        is_active: true,
        created_at: now,
        updated_at: now,
    }
}

pub fn test_password_identity(user_id: Uuid) -> AuthIdentity {
    AuthIdentity {
        id: Uuid::new_v4(),
        user_id,
        provider: AuthProvider::Email,
        provider_id: None,
        password_hash: Some(hash_password(TEST_PASSWORD).expect("hash fixture password")),
        verified: false,
        created_at: Utc::now(),
    }
}

pub fn register_request() -> RegisterRequest {
    let id = next_id();
    RegisterRequest {
        name: format!("Member {id}"),
        email: format!("member{id}@example.com"),
        password: TEST_PASSWORD.to_string(),
        phone: "+14155551234".to_string(),
    }
}

pub fn create_work_request() -> CreateWorkExperienceRequest {
    CreateWorkExperienceRequest {
        job_title: "Engineer".to_string(),
        company_name: "Acme".to_string(),
        location: None,
        job_type: Some(JobType::FullTime),
        start_date: date("2023-01-01"),
        end_date: None,
        description: None,
    }
}

pub fn test_work_experience(user_id: Uuid, job_type: Option<JobType>) -> WorkExperience {
    let now = Utc::now();
    WorkExperience {
        id: Uuid::new_v4(),
        user_id,
        job_title: format!("Engineer {}", next_id()),
        company_name: "Acme".to_string(),
        location: Some("Remote".to_string()),
        job_type,
        start_date: date("2022-01-01"),
        end_date: Some(date("2022-12-31")),
        description: None,
        created_at: now,
        updated_at: now,
    }
}
