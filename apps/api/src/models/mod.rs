pub mod analysis;
pub mod comments;
pub mod post;
pub mod settings;
