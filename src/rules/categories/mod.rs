//! Rule categories

pub mod compose;
pub mod kubernetes;
pub mod style;
pub mod workflows;
