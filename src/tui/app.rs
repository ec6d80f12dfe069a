use anyhow::Result;
use ratatui::text::Line;
use ratatui::Frame;

use crate::tui::{Command, Subscription, Theme};

/// The main trait that TUI apps implement.
///
/// This follows the Elm architecture:
/// - State: data that represents the app's current state
/// - Msg: events/actions that can happen
/// - update: handles messages and returns commands
/// - view: renders the current state
/// - subscriptions: declares what inputs the app wants to receive
///
/// Configuration is handed in through `InitParams` at construction time so
/// apps stay independently testable, with no ambient state.
pub trait App: Sized + Send + 'static {
    /// The app's state type
    type State: Send;

    /// The app's message type
    type Msg: Clone + Send + 'static;

    /// Construction-time parameters (resolved config, start directory, ...)
    type InitParams;

    /// Build the initial state, optionally with a startup command
    fn init(params: Self::InitParams) -> Result<(Self::State, Command<Self::Msg>)>;

    /// Update the state based on a message and return a command
    fn update(state: &mut Self::State, msg: Self::Msg) -> Command<Self::Msg>;

    /// Render the current state to the frame
    fn view(state: &mut Self::State, frame: &mut Frame, area: ratatui::layout::Rect, theme: &Theme);

    /// Declare what inputs this app wants to receive
    fn subscriptions(state: &Self::State) -> Vec<Subscription<Self::Msg>>;

    /// Return the app's title (static string)
    fn title() -> &'static str;

    /// Return optional status text (dynamic, styled based on state)
    fn status(_state: &Self::State, _theme: &Theme) -> Option<Line<'static>> {
        None
    }
}
