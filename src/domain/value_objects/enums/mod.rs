pub mod app_categories;
pub mod price_durations;
pub mod user_roles;
