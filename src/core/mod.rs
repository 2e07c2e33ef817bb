pub mod arithmetic;
pub mod demo;
pub mod greeting;
pub mod selftest;

pub use crate::utils::error::Result;
