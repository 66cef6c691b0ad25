pub mod analytics;
pub mod auth;
pub mod cases;
pub mod dispatch;
pub mod filter;
pub mod init;
pub mod notifications;
pub mod schema;
pub mod shared;
