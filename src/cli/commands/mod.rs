pub mod patterns;
pub mod scan;
