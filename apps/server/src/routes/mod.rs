//! Page endpoints, one module per page.

pub mod about;
pub mod audio;
pub mod flashcards;
pub mod home;
pub mod placeholder;
pub mod summary;
