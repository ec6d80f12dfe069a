pub mod file_browser;

pub use file_browser::{FileBrowser, Selection};
