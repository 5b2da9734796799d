pub mod get;
pub mod post;

pub use get::get_handler;
pub use post::post_handler;
