pub mod common;
pub mod info;
