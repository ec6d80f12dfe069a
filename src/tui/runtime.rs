use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{KeyEvent, KeyEventKind};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::tui::{App, Command, KeyBinding, Subscription, Theme};

/// The runtime manages one app's lifecycle: event routing, timers, pending
/// async work, and command execution.
pub struct Runtime<A: App> {
    /// Current app state
    state: A::State,

    /// Theme shared with the view
    theme: Theme,

    /// Keyboard subscriptions, re-derived from state after every update
    /// because the active keymap depends on what the app is showing
    key_subscriptions: Vec<(KeyBinding, A::Msg)>,

    /// Timer subscriptions: (interval, last_tick, msg)
    timers: Vec<(Duration, Instant, A::Msg)>,

    /// Pending async commands
    pending_async: Vec<Pin<Box<dyn Future<Output = A::Msg> + Send>>>,

    /// Set when the app returned Command::Quit
    should_quit: bool,
}

impl<A: App> Runtime<A> {
    pub fn new(params: A::InitParams, theme: Theme) -> Result<Self> {
        let (state, init_command) = A::init(params)?;

        let mut runtime = Self {
            state,
            theme,
            key_subscriptions: Vec::new(),
            timers: Vec::new(),
            pending_async: Vec::new(),
            should_quit: false,
        };

        runtime.update_subscriptions();
        runtime.execute_command(init_command);

        Ok(runtime)
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handle a keyboard event. Returns false once the app wants to quit.
    pub fn handle_key(&mut self, key_event: KeyEvent) -> Result<bool> {
        if key_event.kind != KeyEventKind::Press {
            return Ok(true);
        }

        let msg = self
            .key_subscriptions
            .iter()
            .find(|(binding, _)| binding.matches(&key_event))
            .map(|(_, msg)| msg.clone());

        if let Some(msg) = msg {
            self.dispatch(msg);
        }

        Ok(!self.should_quit)
    }

    /// Poll timer subscriptions and fire those that are ready
    pub fn poll_timers(&mut self) -> Result<()> {
        let now = Instant::now();
        let mut messages = Vec::new();

        for (interval, last_tick, msg) in &mut self.timers {
            if now.duration_since(*last_tick) >= *interval {
                messages.push(msg.clone());
                *last_tick = now;
            }
        }

        for msg in messages {
            self.dispatch(msg);
        }

        Ok(())
    }

    /// Poll pending async commands and process completed ones
    pub fn poll_async(&mut self) -> Result<()> {
        let waker = futures::task::noop_waker();
        let mut cx = Context::from_waker(&waker);

        let mut completed = Vec::new();

        for (i, future) in self.pending_async.iter_mut().enumerate() {
            if let Poll::Ready(msg) = future.as_mut().poll(&mut cx) {
                completed.push((i, msg));
            }
        }

        // Remove completed futures (in reverse order to maintain indices)
        completed.sort_by(|a, b| b.0.cmp(&a.0));
        for (i, msg) in completed {
            self.pending_async.remove(i);
            self.dispatch(msg);
        }

        Ok(())
    }

    /// Render the app, with a one-line status bar when the app provides one
    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();

        if let Some(status) = A::status(&self.state, &self.theme) {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(1)])
                .split(area);

            A::view(&mut self.state, frame, chunks[0], &self.theme);
            frame.render_widget(Paragraph::new(status), chunks[1]);
        } else {
            A::view(&mut self.state, frame, area, &self.theme);
        }
    }

    fn dispatch(&mut self, msg: A::Msg) {
        let command = A::update(&mut self.state, msg);
        self.execute_command(command);
        self.update_subscriptions();
    }

    /// Rebuild keyboard and timer subscriptions from current state. Timers
    /// keep their last-tick instants when the interval/message pair is
    /// structurally unchanged in count, resetting otherwise.
    fn update_subscriptions(&mut self) {
        self.key_subscriptions.clear();

        let subscriptions = A::subscriptions(&self.state);
        let mut new_timers: Vec<(Duration, Instant, A::Msg)> = Vec::new();

        for sub in subscriptions {
            match sub {
                Subscription::Keyboard { key, msg, description: _ } => {
                    // description is used for help lines, not for lookup
                    self.key_subscriptions.push((key, msg));
                }
                Subscription::Timer { interval, msg } => {
                    let last_tick = self
                        .timers
                        .iter()
                        .find(|(existing, _, _)| *existing == interval)
                        .map(|(_, tick, _)| *tick)
                        .unwrap_or_else(Instant::now);
                    new_timers.push((interval, last_tick, msg));
                }
            }
        }

        self.timers = new_timers;
    }

    fn execute_command(&mut self, command: Command<A::Msg>) {
        match command {
            Command::None => {}

            Command::Batch(commands) => {
                for cmd in commands {
                    self.execute_command(cmd);
                }
            }

            Command::Perform(future) => {
                self.pending_async.push(future);
            }

            Command::Quit => {
                self.should_quit = true;
            }
        }
    }
}
