// Handlers module

pub mod generate_blog;
pub mod health;

pub use generate_blog::generate_blog_handler;
pub use health::health_handler;
