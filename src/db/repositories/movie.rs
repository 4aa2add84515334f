use anyhow::{Context, Result};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, QueryOrder, Set};
use tracing::info;

use crate::entities::{movies, prelude::*};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movie {
    pub id: i32,
    pub title: String,
    pub year: String,
}

impl From<movies::Model> for Movie {
    fn from(model: movies::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            year: model.year,
        }
    }
}

pub struct MovieRepository {
    conn: DatabaseConnection,
}

impl MovieRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    /// All movies in insertion order
    pub async fn list(&self) -> Result<Vec<Movie>> {
        let rows = Movies::find()
            .order_by_asc(movies::Column::Id)
            .all(&self.conn)
            .await
            .context("Failed to list movies")?;

        Ok(rows.into_iter().map(Movie::from).collect())
    }

    pub async fn get(&self, id: i32) -> Result<Option<Movie>> {
        let row = Movies::find_by_id(id)
            .one(&self.conn)
            .await
            .context("Failed to query movie by id")?;

        Ok(row.map(Movie::from))
    }

    pub async fn create(&self, title: &str, year: &str) -> Result<Movie> {
        let active = movies::ActiveModel {
            title: Set(title.to_string()),
            year: Set(year.to_string()),
            ..Default::default()
        };

        let model = active.insert(&self.conn).await?;
        info!(id = model.id, title, "Movie created");
        Ok(Movie::from(model))
    }

    /// Overwrite both fields of an existing movie. Returns `None` when the
    /// id does not exist.
    pub async fn update(&self, id: i32, title: &str, year: &str) -> Result<Option<Movie>> {
        let Some(row) = Movies::find_by_id(id).one(&self.conn).await? else {
            return Ok(None);
        };

        let mut active: movies::ActiveModel = row.into();
        active.title = Set(title.to_string());
        active.year = Set(year.to_string());
        let model = active.update(&self.conn).await?;

        info!(id, title, "Movie updated");
        Ok(Some(Movie::from(model)))
    }

    /// Delete by id. Returns `false` when the id does not exist.
    pub async fn delete(&self, id: i32) -> Result<bool> {
        let result = Movies::delete_by_id(id)
            .exec(&self.conn)
            .await
            .context("Failed to delete movie")?;

        if result.rows_affected > 0 {
            info!(id, "Movie deleted");
        }
        Ok(result.rows_affected > 0)
    }
}
