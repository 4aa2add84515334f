pub mod messages;
pub mod movies;
pub mod users;

pub mod prelude {
    pub use super::messages::Entity as Messages;
    pub use super::movies::Entity as Movies;
    pub use super::users::Entity as Users;
}
