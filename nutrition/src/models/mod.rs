pub mod food;
pub mod nutrition;
