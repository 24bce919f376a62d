//! PostgreSQL implementation of the persistence gateway.
//!
//! All statements bind caller-supplied values as positional parameters;
//! no user input is ever interpolated into SQL text. Rows decode into
//! the domain types with `completed` as a real `bool` in both
//! directions.
//!
//! # Example
//!
//! ```no_run
//! use todos_web::store::PgListStore;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let store = PgListStore::connect("postgresql://localhost/todos").await?;
//! store.migrate().await?;
//! # Ok(())
//! # }
//! ```

use super::{ListStore, Result, StoreError};
use crate::types::{ListId, Todo, TodoId, TodoList};
use async_trait::async_trait;
use sqlx::postgres::PgPool;
use sqlx::Row;

/// PostgreSQL-backed list store.
#[derive(Clone)]
pub struct PgListStore {
    /// Connection pool; one connection is acquired per statement and
    /// released when the statement completes, on every exit path.
    pool: PgPool,
}

impl PgListStore {
    /// Creates a store over an existing pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connects to the database at `url` and wraps the pool.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] when the connection fails.
    pub async fn connect(url: &str) -> Result<Self> {
        let pool = PgPool::connect(url).await?;
        Ok(Self::new(pool))
    }

    /// Runs the schema migrations in `./migrations`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] when a migration fails.
    pub async fn migrate(&self) -> Result<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(sqlx::Error::from)?;
        Ok(())
    }

    /// Fetches the todos owned by one list, in insertion (id) order.
    async fn todos_for(&self, list_id: ListId) -> Result<Vec<Todo>> {
        let rows = sqlx::query(
            "SELECT id, name, completed, list_id FROM todos WHERE list_id = $1 ORDER BY id",
        )
        .bind(list_id.get())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .iter()
            .map(|row| Todo {
                id: TodoId::new(row.get("id")),
                name: row.get("name"),
                completed: row.get("completed"),
                list_id: ListId::new(row.get("list_id")),
            })
            .collect())
    }
}

#[async_trait]
impl ListStore for PgListStore {
    async fn find_list(&self, id: ListId) -> Result<TodoList> {
        let row = sqlx::query("SELECT id, name FROM lists WHERE id = $1")
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::ListNotFound(id))?;

        let list_id = ListId::new(row.get("id"));
        Ok(TodoList {
            id: list_id,
            name: row.get("name"),
            todos: self.todos_for(list_id).await?,
        })
    }

    async fn all_lists(&self) -> Result<Vec<TodoList>> {
        let rows = sqlx::query("SELECT id, name FROM lists ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        let mut lists = Vec::with_capacity(rows.len());
        for row in rows {
            let id = ListId::new(row.get("id"));
            lists.push(TodoList {
                id,
                name: row.get("name"),
                todos: self.todos_for(id).await?,
            });
        }
        Ok(lists)
    }

    async fn create_list(&self, name: &str) -> Result<()> {
        sqlx::query("INSERT INTO lists (name) VALUES ($1)")
            .bind(name)
            .execute(&self.pool)
            .await?;
        tracing::info!(list_name = %name, "created list");
        Ok(())
    }

    async fn rename_list(&self, id: ListId, new_name: &str) -> Result<()> {
        // A missing id matches zero rows; that is deliberate, not an
        // error.
        sqlx::query("UPDATE lists SET name = $1 WHERE id = $2")
            .bind(new_name)
            .bind(id.get())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete_list(&self, id: ListId) -> Result<()> {
        sqlx::query("DELETE FROM lists WHERE id = $1")
            .bind(id.get())
            .execute(&self.pool)
            .await?;
        tracing::info!(list_id = %id, "deleted list");
        Ok(())
    }

    async fn create_todo(&self, list_id: ListId, name: &str) -> Result<()> {
        sqlx::query("INSERT INTO todos (name, list_id) VALUES ($1, $2)")
            .bind(name)
            .bind(list_id.get())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete_todo(&self, list_id: ListId, todo_id: TodoId) -> Result<()> {
        sqlx::query("DELETE FROM todos WHERE id = $1 AND list_id = $2")
            .bind(todo_id.get())
            .bind(list_id.get())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn set_todo_status(
        &self,
        list_id: ListId,
        todo_id: TodoId,
        completed: bool,
    ) -> Result<()> {
        sqlx::query("UPDATE todos SET completed = $1 WHERE id = $2 AND list_id = $3")
            .bind(completed)
            .bind(todo_id.get())
            .bind(list_id.get())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn mark_all_complete(&self, list_id: ListId) -> Result<()> {
        sqlx::query("UPDATE todos SET completed = true WHERE list_id = $1")
            .bind(list_id.get())
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
