pub mod app_logos;
pub mod broadband_plans;
pub mod ott_plans;
pub mod users;
