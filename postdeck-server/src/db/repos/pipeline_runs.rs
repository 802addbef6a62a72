//! Pipeline run repository (read-only)

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use super::DbError;

/// One execution of the external content workflow
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct PipelineRun {
    pub id: Uuid,
    pub flow_execution: Option<String>,
    pub pages_found: Option<i32>,
    pub pages_ok: Option<i32>,
    pub pages_error: Option<i32>,
    pub error_detail: Option<String>,
    pub executed_at: Option<DateTime<Utc>>,
}

impl PipelineRun {
    /// A run succeeded when it recorded no error detail.
    pub fn succeeded(&self) -> bool {
        self.error_detail
            .as_deref()
            .map_or(true, str::is_empty)
    }

    pub fn pages_found(&self) -> i64 {
        self.pages_found.unwrap_or(0).into()
    }

    pub fn pages_ok(&self) -> i64 {
        self.pages_ok.unwrap_or(0).into()
    }

    pub fn pages_error(&self) -> i64 {
        self.pages_error.unwrap_or(0).into()
    }
}

/// Pipeline run repository
pub struct PipelineRunRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> PipelineRunRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All runs, oldest first.
    pub async fn list(&self) -> Result<Vec<PipelineRun>, DbError> {
        let runs = sqlx::query_as::<_, PipelineRun>(
            r#"
            SELECT id, flow_execution, pages_found, pages_ok, pages_error,
                   error_detail, executed_at
            FROM pipeline_runs
            ORDER BY executed_at ASC
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(runs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(error_detail: Option<&str>) -> PipelineRun {
        PipelineRun {
            id: Uuid::new_v4(),
            flow_execution: Some("exec-1".into()),
            pages_found: Some(3),
            pages_ok: None,
            pages_error: Some(1),
            error_detail: error_detail.map(Into::into),
            executed_at: None,
        }
    }

    #[test]
    fn error_detail_marks_failure() {
        assert!(run(None).succeeded());
        assert!(!run(Some("timeout talking to workspace")).succeeded());
    }

    #[test]
    fn blank_error_detail_is_success() {
        assert!(run(Some("")).succeeded());
    }

    #[test]
    fn whitespace_error_detail_is_failure() {
        assert!(!run(Some(" ")).succeeded());
        assert!(!run(Some("  \n")).succeeded());
    }

    #[test]
    fn null_counts_read_as_zero() {
        let r = run(None);
        assert_eq!(r.pages_found(), 3);
        assert_eq!(r.pages_ok(), 0);
        assert_eq!(r.pages_error(), 1);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn list_is_ordered_by_execution_time() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = crate::db::create_pool(&url).await.expect("pool creation failed");
        crate::db::migrations::run(&pool).await.expect("migrations failed");

        let runs = PipelineRunRepo::new(&pool).list().await.unwrap();
        let stamps: Vec<_> = runs.iter().filter_map(|r| r.executed_at).collect();
        assert!(stamps.windows(2).all(|w| w[0] <= w[1]));
    }
}
