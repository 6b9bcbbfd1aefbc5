pub mod consolidate;
pub mod totals;
pub mod window;
