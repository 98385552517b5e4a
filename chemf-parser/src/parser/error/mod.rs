pub mod kind;

pub use chemf_error::Error;
