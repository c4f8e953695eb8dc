pub mod comment;
pub mod content;
pub mod favourite;
pub mod genre;
pub mod song;
pub mod user;
