pub mod analytics;
pub mod households;
pub mod regions;
pub mod stations;
