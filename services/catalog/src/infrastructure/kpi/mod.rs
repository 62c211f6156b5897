mod generator;
mod jitter;

pub use generator::KpiGenerator;
pub use jitter::{FixedJitter, JitterSource, ThreadRngJitter};
