pub mod compare_app;

pub use compare_app::{CompareApp, CompareParams};
