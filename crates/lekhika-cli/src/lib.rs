pub mod commands;
pub mod data_dir;
