pub mod category;
pub mod expense;
pub mod health;
pub mod level;
pub mod projection;
pub mod scenario;
pub mod settings;
pub mod summary;
