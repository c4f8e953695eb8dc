pub mod comment;
pub mod content;
pub mod favourite;
pub mod genre;
pub mod root;
pub mod song;
pub mod user;
pub use root::RootController;
