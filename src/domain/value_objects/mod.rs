pub mod app_logos;
pub mod broadband_plans;
pub mod enums;
pub mod ott_plans;
pub mod sort_orders;
