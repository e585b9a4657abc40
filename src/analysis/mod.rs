pub mod aggregate;
pub mod series;
