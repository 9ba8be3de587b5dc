pub mod chart_service;
pub mod stats_service;
