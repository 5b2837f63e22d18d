pub mod backup;
pub mod config;
pub mod editor;
pub mod groups;
pub mod history;
pub mod log;
pub mod memo;
pub mod recorder;
