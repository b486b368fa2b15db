pub mod auth;
pub mod category;
pub mod comment;
pub mod news;
pub mod page;
pub mod user;
