pub mod catalog;
pub mod common;
pub mod health;
pub mod pantry;
pub mod profile;
pub mod recipe;
pub mod storage;
