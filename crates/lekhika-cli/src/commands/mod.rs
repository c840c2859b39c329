pub mod config_ops;
pub mod translit_ops;
pub mod word_ops;
