use anyhow::Result;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::path::Path;
use std::time::Duration;
use tracing::info;

pub mod migrator;
pub mod repositories;

pub use repositories::message::Message;
pub use repositories::movie::Movie;
pub use repositories::user::{AdminUpsert, User};

/// Fixture data inserted by the `forge` command
const FIXTURE_MOVIES: &[(&str, &str)] = &[
    ("My Neighbor Totoro", "1988"),
    ("Dead Poets Society", "1989"),
    ("A Perfect World", "1993"),
    ("Leon", "1994"),
    ("Mahjong", "1996"),
    ("Swallowtail Butterfly", "1996"),
    ("King of Comedy", "1999"),
    ("Devils on the Doorstep", "1999"),
    ("WALL-E", "2008"),
    ("The Pork of Music", "2012"),
];

const FIXTURE_MESSAGES: &[(&str, &str)] = &[
    ("小江", "电影真好看啊！"),
    ("Small T", "Leon is still my favourite, twenty years on."),
    ("Brooks", "I'll call back later, great list by the way."),
];

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        // every pooled connection to an in-memory database gets its own db,
        // so clamp to a single connection there
        let (max_connections, min_connections) = if db_url.contains(":memory:") {
            (1, 1)
        } else {
            (max_connections, min_connections)
        };

        if !db_url.contains(":memory:") {
            let path_str = db_url.trim_start_matches("sqlite:");
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    fn user_repo(&self) -> repositories::user::UserRepository {
        repositories::user::UserRepository::new(self.conn.clone())
    }

    fn movie_repo(&self) -> repositories::movie::MovieRepository {
        repositories::movie::MovieRepository::new(self.conn.clone())
    }

    fn message_repo(&self) -> repositories::message::MessageRepository {
        repositories::message::MessageRepository::new(self.conn.clone())
    }

    // ========================================================================
    // Users
    // ========================================================================

    pub async fn first_user(&self) -> Result<Option<User>> {
        self.user_repo().first().await
    }

    pub async fn user_by_id(&self, id: i32) -> Result<Option<User>> {
        self.user_repo().by_id(id).await
    }

    pub async fn user_count(&self) -> Result<u64> {
        self.user_repo().count().await
    }

    pub async fn verify_login(&self, username: &str, password: &str) -> Result<Option<User>> {
        self.user_repo().verify_login(username, password).await
    }

    pub async fn update_user_name(&self, id: i32, name: &str) -> Result<()> {
        self.user_repo().update_name(id, name).await
    }

    pub async fn upsert_admin(&self, username: &str, password: &str) -> Result<AdminUpsert> {
        self.user_repo().upsert_admin(username, password).await
    }

    // ========================================================================
    // Movies
    // ========================================================================

    pub async fn list_movies(&self) -> Result<Vec<Movie>> {
        self.movie_repo().list().await
    }

    pub async fn get_movie(&self, id: i32) -> Result<Option<Movie>> {
        self.movie_repo().get(id).await
    }

    pub async fn create_movie(&self, title: &str, year: &str) -> Result<Movie> {
        self.movie_repo().create(title, year).await
    }

    pub async fn update_movie(&self, id: i32, title: &str, year: &str) -> Result<Option<Movie>> {
        self.movie_repo().update(id, title, year).await
    }

    pub async fn delete_movie(&self, id: i32) -> Result<bool> {
        self.movie_repo().delete(id).await
    }

    // ========================================================================
    // Messages
    // ========================================================================

    pub async fn list_messages(&self) -> Result<Vec<Message>> {
        self.message_repo().list().await
    }

    pub async fn message_count(&self) -> Result<u64> {
        self.message_repo().count().await
    }

    pub async fn create_message(&self, name: &str, content: &str) -> Result<Message> {
        self.message_repo().create(name, content).await
    }

    // ========================================================================
    // Administration
    // ========================================================================

    /// Recreate the schema, optionally dropping all tables first
    pub async fn init_schema(&self, drop: bool) -> Result<()> {
        use sea_orm_migration::MigratorTrait;

        if drop {
            migrator::Migrator::fresh(&self.conn).await?;
        } else {
            migrator::Migrator::up(&self.conn, None).await?;
        }
        Ok(())
    }

    /// Insert the fixture movies and guestbook messages
    pub async fn seed_fixtures(&self) -> Result<()> {
        let movies = self.movie_repo();
        for (title, year) in FIXTURE_MOVIES {
            movies.create(title, year).await?;
        }

        let messages = self.message_repo();
        for (name, content) in FIXTURE_MESSAGES {
            messages.create(name, content).await?;
        }

        info!(
            movies = FIXTURE_MOVIES.len(),
            messages = FIXTURE_MESSAGES.len(),
            "Fixture data inserted"
        );
        Ok(())
    }
}
