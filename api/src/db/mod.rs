// Database module: connection pooling and data repositories

pub mod error;
pub mod pool;
pub mod repositories;

pub use error::DbError;
pub use pool::DbPool;
pub use repositories::Repositories;
