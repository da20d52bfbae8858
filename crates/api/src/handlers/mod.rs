pub mod characters;
pub mod info;
