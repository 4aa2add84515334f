use anyhow::{Context, Result};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, Set};

use crate::entities::{messages, prelude::*};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: i32,
    pub name: String,
    pub content: String,
}

impl From<messages::Model> for Message {
    fn from(model: messages::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            content: model.content,
        }
    }
}

pub struct MessageRepository {
    conn: DatabaseConnection,
}

impl MessageRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn list(&self) -> Result<Vec<Message>> {
        let rows = Messages::find()
            .order_by_asc(messages::Column::Id)
            .all(&self.conn)
            .await
            .context("Failed to list messages")?;

        Ok(rows.into_iter().map(Message::from).collect())
    }

    pub async fn count(&self) -> Result<u64> {
        Messages::find()
            .count(&self.conn)
            .await
            .context("Failed to count messages")
    }

    pub async fn create(&self, name: &str, content: &str) -> Result<Message> {
        let active = messages::ActiveModel {
            name: Set(name.to_string()),
            content: Set(content.to_string()),
            ..Default::default()
        };

        let model = active.insert(&self.conn).await?;
        Ok(Message::from(model))
    }
}
