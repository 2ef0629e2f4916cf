pub mod llm;
pub mod pantry;
pub mod profile;
pub mod storage;
