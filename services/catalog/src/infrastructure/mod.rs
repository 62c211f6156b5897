pub mod kpi;
pub mod persistence;
