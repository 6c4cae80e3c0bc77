pub mod config;
pub mod pick;
pub mod show;
