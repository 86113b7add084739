pub mod pretty;
pub mod tier;
