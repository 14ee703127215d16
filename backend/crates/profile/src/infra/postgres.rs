//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::{ProfileId, UserId};
use sqlx::PgPool;
use sqlx::types::Json;
use uuid::Uuid;

use crate::domain::entity::{
    education::Education,
    experience::Experience,
    owner::{ProfileWithOwner, UserSummary},
    profile::Profile,
};
use crate::domain::repository::{ProfileRepository, UserRepository};
use crate::domain::value_object::social::SocialLinks;
use crate::error::ProfileResult;

/// PostgreSQL-backed repository
#[derive(Clone)]
pub struct PgProfileRepository {
    pool: PgPool,
}

impl PgProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ProfileRepository for PgProfileRepository {
    async fn find_profile(&self, user_id: &UserId) -> ProfileResult<Option<Profile>> {
        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
            SELECT
                profile_id, user_id, company, website, location, status,
                githubusername, skills, bio, social, experience, education, created_at
            FROM profiles
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ProfileRow::into_profile))
    }

    async fn find_profile_with_owner(
        &self,
        user_id: &UserId,
    ) -> ProfileResult<Option<ProfileWithOwner>> {
        let row = sqlx::query_as::<_, ProfileWithOwnerRow>(
            r#"
            SELECT
                p.profile_id, p.user_id, p.company, p.website, p.location, p.status,
                p.githubusername, p.skills, p.bio, p.social, p.experience, p.education,
                p.created_at,
                u.name AS owner_name, u.avatar AS owner_avatar
            FROM profiles p
            LEFT JOIN users u ON u.user_id = p.user_id
            WHERE p.user_id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ProfileWithOwnerRow::into_profile_with_owner))
    }

    async fn list_profiles_with_owner(&self) -> ProfileResult<Vec<ProfileWithOwner>> {
        let rows = sqlx::query_as::<_, ProfileWithOwnerRow>(
            r#"
            SELECT
                p.profile_id, p.user_id, p.company, p.website, p.location, p.status,
                p.githubusername, p.skills, p.bio, p.social, p.experience, p.education,
                p.created_at,
                u.name AS owner_name, u.avatar AS owner_avatar
            FROM profiles p
            LEFT JOIN users u ON u.user_id = p.user_id
            ORDER BY p.created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(ProfileWithOwnerRow::into_profile_with_owner)
            .collect())
    }

    async fn save_profile(&self, profile: &Profile) -> ProfileResult<()> {
        sqlx::query(
            r#"
            INSERT INTO profiles (
                profile_id, user_id, company, website, location, status,
                githubusername, skills, bio, social, experience, education, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            ON CONFLICT (user_id) DO UPDATE SET
                company = EXCLUDED.company,
                website = EXCLUDED.website,
                location = EXCLUDED.location,
                status = EXCLUDED.status,
                githubusername = EXCLUDED.githubusername,
                skills = EXCLUDED.skills,
                bio = EXCLUDED.bio,
                social = EXCLUDED.social,
                experience = EXCLUDED.experience,
                education = EXCLUDED.education
            "#,
        )
        .bind(profile.id.as_uuid())
        .bind(profile.user_id.as_uuid())
        .bind(&profile.company)
        .bind(&profile.website)
        .bind(&profile.location)
        .bind(&profile.status)
        .bind(&profile.githubusername)
        .bind(profile.skills.as_slice())
        .bind(&profile.bio)
        .bind(Json(&profile.social))
        .bind(Json(profile.experience.as_slice()))
        .bind(Json(profile.education.as_slice()))
        .bind(profile.created_at)
        .execute(&self.pool)
        .await?;

        tracing::debug!(user_id = %profile.user_id, "Profile saved");

        Ok(())
    }

    async fn delete_profile(&self, user_id: &UserId) -> ProfileResult<bool> {
        let deleted = sqlx::query("DELETE FROM profiles WHERE user_id = $1")
            .bind(user_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

impl UserRepository for PgProfileRepository {
    async fn delete_user(&self, user_id: &UserId) -> ProfileResult<bool> {
        let deleted = sqlx::query("DELETE FROM users WHERE user_id = $1")
            .bind(user_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// Row types
// ============================================================================

#[derive(sqlx::FromRow)]
struct ProfileRow {
    profile_id: Uuid,
    user_id: Uuid,
    company: Option<String>,
    website: Option<String>,
    location: Option<String>,
    status: String,
    githubusername: Option<String>,
    skills: Vec<String>,
    bio: Option<String>,
    social: Json<SocialLinks>,
    experience: Json<Vec<Experience>>,
    education: Json<Vec<Education>>,
    created_at: DateTime<Utc>,
}

impl ProfileRow {
    fn into_profile(self) -> Profile {
        Profile {
            id: ProfileId::from_uuid(self.profile_id),
            user_id: UserId::from_uuid(self.user_id),
            company: self.company,
            website: self.website,
            location: self.location,
            status: self.status,
            githubusername: self.githubusername,
            skills: self.skills.into(),
            bio: self.bio,
            social: self.social.0,
            experience: self.experience.0.into(),
            education: self.education.0.into(),
            created_at: self.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct ProfileWithOwnerRow {
    #[sqlx(flatten)]
    profile: ProfileRow,
    owner_name: Option<String>,
    owner_avatar: Option<String>,
}

impl ProfileWithOwnerRow {
    fn into_profile_with_owner(self) -> ProfileWithOwner {
        let profile = self.profile.into_profile();
        let owner = self.owner_name.map(|name| UserSummary {
            id: profile.user_id,
            name,
            avatar: self.owner_avatar,
        });
        ProfileWithOwner { profile, owner }
    }
}
