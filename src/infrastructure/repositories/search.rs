use super::traits::UserSearchFilter;
use super::utils::escape_like_pattern;
use crate::domain::User;
use crate::error::AppResult;
use sqlx::{PgPool, Postgres, QueryBuilder};

pub async fn search_users(pool: &PgPool, filter: &UserSearchFilter) -> AppResult<Vec<User>> {
    let mut builder = QueryBuilder::<Postgres>::new(
        r#"
        SELECT u.id, u.email, u.name, u.phone, u.profile_picture, u.is_active,
               u.created_at, u.updated_at
        FROM users u
        WHERE 1=1
        "#,
    );

    if let Some(skill) = filter.skill.as_deref() {
        builder.push(
            " AND EXISTS (
                SELECT 1 FROM user_skills us
                INNER JOIN skills s ON s.id = us.skill_id
                WHERE us.user_id = u.id AND s.name ILIKE ",
        );
        builder.push_bind(format!("%{}%", escape_like_pattern(skill)));
        builder.push(r" ESCAPE '\')");
    }
    if let Some(job_type) = filter.job_type {
        builder.push(
            " AND EXISTS (
                SELECT 1 FROM work_experiences w
                WHERE w.user_id = u.id AND w.job_type = ",
        );
        builder.push_bind(job_type);
        builder.push(")");
    }

    builder.push(" ORDER BY u.created_at, u.id");

    let users = builder.build_query_as::<User>().fetch_all(pool).await?;
    Ok(users)
}
