pub mod assets;
pub mod postgres;
