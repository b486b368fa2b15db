pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

pub use domain::auth;
pub use domain::category;
pub use domain::comment;
pub use domain::news;
pub use domain::page;
pub use domain::user;
pub use outbound::repositories;
