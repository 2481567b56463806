pub mod food_analysis;
pub mod health_profile;
