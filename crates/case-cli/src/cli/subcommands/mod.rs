pub mod auth;
pub mod cases;
pub mod criteria;
pub mod filter;
pub mod notifications;

pub use auth::AuthCommands;
pub use cases::CasesCommands;
pub use criteria::CriteriaArgs;
pub use filter::FilterCommands;
pub use notifications::NotificationCommands;
