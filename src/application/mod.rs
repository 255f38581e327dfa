pub mod blog;
pub mod error;
pub mod fallback;

pub use blog::BlogService;
pub use error::AppError;
