//! Repository for the `projects` table.

use sqlx::PgPool;

use crate::models::project::Project;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, description, image, github_link, project_link, tags, category, created_at";

/// Provides read and insert operations for project records.
///
/// Records are insert-only: there is no update or delete surface.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a fully-assembled record. Single unconditional insert.
    pub async fn insert(pool: &PgPool, project: &Project) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO projects
                (id, name, description, image, github_link, project_link, tags, category, created_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)",
        )
        .bind(project.id)
        .bind(&project.name)
        .bind(&project.description)
        .bind(&project.image)
        .bind(&project.github_link)
        .bind(&project.project_link)
        .bind(&project.tags)
        .bind(&project.category)
        .bind(project.created_at)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// List every record in the store. No guaranteed order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// List records whose category equals `category`, via the category index.
    pub async fn list_by_category(
        pool: &PgPool,
        category: &str,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE category = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(category)
            .fetch_all(pool)
            .await
    }

    /// Number of stored records. Used by tests to assert no-persistence on
    /// rejected submissions.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM projects")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
