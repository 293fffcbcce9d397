pub mod index;
pub mod library;
pub mod search;
pub mod uninstaller;
