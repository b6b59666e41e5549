pub mod app;
pub mod audio;
pub mod backend;
pub mod catalog;
pub mod error;
pub mod settings;
pub mod text_utils;
