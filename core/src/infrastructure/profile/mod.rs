pub mod repository;

pub use repository::KvProfileRepository;
