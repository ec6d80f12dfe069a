pub mod app;
pub mod apps;
pub mod command;
pub mod runtime;
pub mod subscription;
pub mod theme;
pub mod widgets;

pub use app::App;
pub use command::Command;
pub use runtime::Runtime;
pub use subscription::{KeyBinding, Subscription};
pub use theme::{Theme, ThemeVariant};
