use std::marker::PhantomData;

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PrimaryKeyTrait, QueryFilter, Select,
};

/// One CRUD access object per entity type, shared across the whole backend.
///
/// Absence is a normal value here: lookups return `Ok(None)` for a miss, and
/// it is the service layer's job to turn that into a "not found" failure.
/// `update` and `delete` are the only operations that swallow storage errors,
/// collapsing them to `false` so callers can pick their own error vocabulary.
pub struct Repository<E: EntityTrait> {
    db: DatabaseConnection,
    _entity: PhantomData<E>,
}

impl<E: EntityTrait> Clone for Repository<E> {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E> Repository<E>
where
    E: EntityTrait,
    E::Model: IntoActiveModel<E::ActiveModel>,
    E::ActiveModel: ActiveModelBehavior + Send,
{
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Point lookup by primary key. Does not load relations — callers that
    /// need owned collections must go through [`Self::get_all_attached`] (or
    /// `find_related` on the loaded model) and ask for them explicitly.
    pub async fn get_by_id(
        &self,
        id: impl Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
    ) -> Result<Option<E::Model>, DbErr> {
        E::find_by_id(id).one(&self.db).await
    }

    /// First row matching a store-translatable condition. The filter is
    /// pushed down to the database; prefer this over the in-memory variant
    /// for anything that can be expressed as a `Condition`.
    pub async fn first_or_default(&self, cond: Condition) -> Result<Option<E::Model>, DbErr> {
        E::find().filter(cond).one(&self.db).await
    }

    /// First row matching an arbitrary Rust predicate.
    ///
    /// Materializes the entire collection before scanning, so this must not
    /// be used on large tables — it exists for predicates the store cannot
    /// translate.
    pub async fn first_or_default_in_memory<P>(&self, pred: P) -> Result<Option<E::Model>, DbErr>
    where
        P: Fn(&E::Model) -> bool,
    {
        Ok(E::find().all(&self.db).await?.into_iter().find(|m| pred(m)))
    }

    /// Eagerly materialize every row.
    pub async fn get_all(&self) -> Result<Vec<E::Model>, DbErr> {
        E::find().all(&self.db).await
    }

    /// Lazy, composable query handle: callers can keep filtering or join in
    /// related collections before executing.
    pub fn get_all_attached(&self) -> Select<E> {
        E::find()
    }

    /// Insert one row. Commits immediately.
    pub async fn add(&self, item: E::ActiveModel) -> Result<E::Model, DbErr> {
        item.insert(&self.db).await
    }

    /// Insert many rows, one commit per row. There is no wrapping
    /// transaction: a failure partway leaves the earlier rows committed.
    pub async fn add_range(&self, items: Vec<E::ActiveModel>) -> Result<(), DbErr> {
        for item in items {
            item.insert(&self.db).await?;
        }
        Ok(())
    }

    /// Persist a modified row. Returns `false` on any storage failure
    /// instead of propagating it — callers translate that into their own
    /// "not updated" error.
    pub async fn update(&self, item: E::ActiveModel) -> bool {
        match item.update(&self.db).await {
            Ok(_) => true,
            Err(e) => {
                tracing::warn!("update failed: {e}");
                false
            }
        }
    }

    /// Delete one row. `true` only when the store reported at least one
    /// affected row; failures collapse to `false` like `update`.
    pub async fn delete(&self, item: E::ActiveModel) -> bool {
        match item.delete(&self.db).await {
            Ok(res) => res.rows_affected > 0,
            Err(e) => {
                tracing::warn!("delete failed: {e}");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::portfolio::{self, DisplayNames};
    use chrono::Utc;
    use sea_orm::{ActiveValue::Set, DatabaseBackend, MockDatabase, MockExecResult};
    use uuid::Uuid;

    fn sample(person_id: &str) -> portfolio::Model {
        portfolio::Model {
            id: Uuid::new_v4(),
            person_id: person_id.to_string(),
            names: DisplayNames(vec!["Alice".to_string()]),
            biography: "B".to_string(),
            rating: 0.0,
            avatar_url: None,
            background_theme: "default".to_string(),
            main_color: "#000000".to_string(),
            likes: 0,
            is_public: true,
            created_at: Utc::now(),
            cv_url: None,
            parent_portfolio_id: None,
        }
    }

    #[tokio::test]
    async fn get_by_id_miss_is_ok_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<portfolio::Model>::new()])
            .into_connection();

        let repo = Repository::<portfolio::Entity>::new(db);
        let got = repo.get_by_id(Uuid::new_v4()).await.unwrap();
        assert!(got.is_none());
    }

    #[tokio::test]
    async fn in_memory_predicate_scans_materialized_rows() {
        let rows = vec![sample("u1"), sample("u2")];
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([rows])
            .into_connection();

        let repo = Repository::<portfolio::Entity>::new(db);
        let found = repo
            .first_or_default_in_memory(|p| p.person_id == "u2")
            .await
            .unwrap();
        assert_eq!(found.unwrap().person_id, "u2");
    }

    #[tokio::test]
    async fn update_failure_becomes_false_not_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection lost".to_string())])
            .into_connection();

        let repo = Repository::<portfolio::Entity>::new(db);
        let mut active: portfolio::ActiveModel = sample("u1").into();
        active.biography = Set("changed".to_string());
        assert!(!repo.update(active).await);
    }

    #[tokio::test]
    async fn delete_reports_affected_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 0,
                },
            ])
            .into_connection();

        let repo = Repository::<portfolio::Entity>::new(db);
        let first: portfolio::ActiveModel = sample("u1").into();
        let second: portfolio::ActiveModel = sample("u2").into();
        assert!(repo.delete(first).await);
        assert!(!repo.delete(second).await);
    }
}
