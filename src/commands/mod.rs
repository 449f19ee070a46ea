pub mod compare;
pub mod scan;
