pub mod profile_store;
pub mod recommendations;
