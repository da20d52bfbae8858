pub mod character_repo;

pub use character_repo::CharacterRepo;
