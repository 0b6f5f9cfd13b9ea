#![allow(dead_code)]

pub mod source;

pub use source::{StubRegistry, StubSource};
