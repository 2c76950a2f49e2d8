pub mod matcher;
pub mod romaji;
pub mod settings;
pub mod textbank;
pub mod unicode;
