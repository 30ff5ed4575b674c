pub mod banner;
pub mod chaos;
pub mod health;
pub mod version;
