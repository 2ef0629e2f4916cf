pub mod repository;

pub use repository::KvPantryRepository;
