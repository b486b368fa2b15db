pub mod category;
pub mod comment;
pub mod news;
pub mod page;
pub mod user;

pub use category::PostgresCategoryRepository;
pub use comment::PostgresCommentRepository;
pub use news::PostgresNewsRepository;
pub use page::PostgresPageRepository;
pub use user::PostgresUserRepository;
