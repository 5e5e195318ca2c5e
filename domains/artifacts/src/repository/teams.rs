//! Read model over team-owned tables the export needs
//!
//! Teams and their value propositions are written by the teams service;
//! this domain only reads them.

use launchpad_common::RepositoryError;
use launchpad_exports::ValueProposition;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Debug, sqlx::FromRow)]
struct ValuePropositionRow {
    solution: Option<String>,
    customer: Option<String>,
    benefit: Option<String>,
    how_it_works: Option<String>,
    improvement: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

impl From<ValuePropositionRow> for ValueProposition {
    fn from(row: ValuePropositionRow) -> Self {
        Self {
            solution: non_blank(row.solution),
            customer: non_blank(row.customer),
            benefit: non_blank(row.benefit),
            how_it_works: non_blank(row.how_it_works),
            improvement: non_blank(row.improvement),
        }
    }
}

#[derive(Clone)]
pub struct TeamReadModel {
    pool: PgPool,
}

impl TeamReadModel {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Display name stamped on exported documents
    pub async fn team_name(&self, team_id: Uuid) -> Result<String, RepositoryError> {
        let name: Option<String> = sqlx::query_scalar("SELECT name FROM teams WHERE id = $1")
            .bind(team_id)
            .fetch_optional(&self.pool)
            .await?;

        name.ok_or(RepositoryError::NotFound)
    }

    /// The team's value proposition; `None` when unset or entirely blank
    pub async fn value_proposition(
        &self,
        team_id: Uuid,
    ) -> Result<Option<ValueProposition>, RepositoryError> {
        let row = sqlx::query_as::<_, ValuePropositionRow>(
            "SELECT solution, customer, benefit, how_it_works, improvement \
             FROM value_propositions WHERE team_id = $1",
        )
        .bind(team_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row
            .map(ValueProposition::from)
            .filter(|vp| !vp.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_blanks_become_none() {
        let vp = ValueProposition::from(ValuePropositionRow {
            solution: Some("Ledgerly".to_string()),
            customer: Some("  ".to_string()),
            benefit: None,
            how_it_works: Some(String::new()),
            improvement: Some("2x".to_string()),
        });
        assert_eq!(vp.solution.as_deref(), Some("Ledgerly"));
        assert_eq!(vp.customer, None);
        assert_eq!(vp.how_it_works, None);
        assert!(!vp.is_empty());
    }

    #[test]
    fn test_all_blank_row_is_empty() {
        let vp = ValueProposition::from(ValuePropositionRow {
            solution: Some(" ".to_string()),
            customer: None,
            benefit: None,
            how_it_works: None,
            improvement: None,
        });
        assert!(vp.is_empty());
    }
}
