mod admin;
mod forge;
mod initdb;

pub use admin::cmd_admin;
pub use forge::cmd_forge;
pub use initdb::cmd_initdb;
