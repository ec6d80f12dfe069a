//! The interactive comparison app: upload form, file picker overlay,
//! in-flight spinner, and result view
//!
//! The workflow core transitions synchronously; the only async edges are
//! the HTTP request and the cosmetic reveal delay, both delivered back as
//! messages through `Command::perform`.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::event::KeyCode;
use log::{error, warn};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::api::{CompareClient, ComparisonResult, DocumentSummary, SubmissionError};
use crate::render::{format_bytes, format_percent, group_digits, truncation_note, SimilarityTier};
use crate::tui::widgets::{FileBrowser, Selection};
use crate::tui::{App, Command, Subscription, Theme};
use crate::workflow::{ComparisonWorkflow, SelectedFile, Slot, WorkflowState};

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct CompareApp;

/// Construction-time configuration, resolved by the `tui` command.
pub struct CompareParams {
    pub endpoint: String,
    pub timeout: Duration,
    pub reveal_delay: Duration,
    pub start_dir: PathBuf,
}

pub struct State {
    workflow: ComparisonWorkflow,
    client: Arc<CompareClient>,
    reveal_delay: Duration,
    last_dir: PathBuf,
    /// Open picker overlay: which slot it is filling, and the listing.
    picker: Option<(Slot, FileBrowser)>,
    /// Decoded result held back during the reveal delay.
    pending_result: Option<ComparisonResult>,
    spinner_frame: usize,
    scroll: u16,
}

#[derive(Clone)]
pub enum Msg {
    OpenPicker(Slot),
    PickerUp,
    PickerDown,
    PickerEnter,
    PickerCancel,
    Submit,
    Completed(Result<ComparisonResult, SubmissionError>),
    Reveal,
    Reset,
    Tick,
    ScrollUp,
    ScrollDown,
    Quit,
}

impl App for CompareApp {
    type State = State;
    type Msg = Msg;
    type InitParams = CompareParams;

    fn init(params: CompareParams) -> Result<(State, Command<Msg>)> {
        let client = CompareClient::new(&params.endpoint, params.timeout)?;

        Ok((
            State {
                workflow: ComparisonWorkflow::new(),
                client: Arc::new(client),
                reveal_delay: params.reveal_delay,
                last_dir: params.start_dir,
                picker: None,
                pending_result: None,
                spinner_frame: 0,
                scroll: 0,
            },
            Command::None,
        ))
    }

    fn update(state: &mut State, msg: Msg) -> Command<Msg> {
        match msg {
            Msg::OpenPicker(slot) => {
                match FileBrowser::new(state.last_dir.clone()) {
                    Ok(browser) => state.picker = Some((slot, browser)),
                    Err(e) => error!("Failed to open file picker: {}", e),
                }
                Command::None
            }

            Msg::PickerUp => {
                if let Some((_, browser)) = &mut state.picker {
                    browser.select_previous();
                }
                Command::None
            }

            Msg::PickerDown => {
                if let Some((_, browser)) = &mut state.picker {
                    browser.select_next();
                }
                Command::None
            }

            Msg::PickerEnter => {
                let Some((slot, browser)) = &mut state.picker else {
                    return Command::None;
                };
                let slot = *slot;

                match browser.enter() {
                    Ok(Some(Selection::File(path))) => match SelectedFile::from_path(&path) {
                        Ok(file) => {
                            state.last_dir = browser.current_dir().clone();
                            state.workflow.select_file(slot, file);
                            state.picker = None;
                        }
                        Err(e) => warn!("Could not stat selected file: {}", e),
                    },
                    Ok(Some(Selection::DescendedInto(_))) | Ok(None) => {}
                    Err(e) => warn!("Picker navigation failed: {}", e),
                }
                Command::None
            }

            Msg::PickerCancel => {
                if let Some((_, browser)) = &state.picker {
                    state.last_dir = browser.current_dir().clone();
                }
                state.picker = None;
                Command::None
            }

            Msg::Submit => match state.workflow.submit() {
                Ok((document1, document2)) => {
                    let client = state.client.clone();
                    Command::perform(
                        async move { client.compare(&document1, &document2).await },
                        Msg::Completed,
                    )
                }
                // inline error already surfaced by the workflow
                Err(_) => Command::None,
            },

            Msg::Completed(Ok(result)) => {
                if state.reveal_delay.is_zero() {
                    state.workflow.complete(Ok(result));
                    state.scroll = 0;
                    Command::None
                } else {
                    state.pending_result = Some(result);
                    let delay = state.reveal_delay;
                    Command::perform(tokio::time::sleep(delay), |_| Msg::Reveal)
                }
            }

            Msg::Completed(Err(err)) => {
                state.workflow.complete(Err(err));
                Command::None
            }

            Msg::Reveal => {
                if let Some(result) = state.pending_result.take() {
                    state.workflow.complete(Ok(result));
                    state.scroll = 0;
                }
                Command::None
            }

            Msg::Reset => {
                state.workflow.reset();
                state.scroll = 0;
                Command::None
            }

            Msg::Tick => {
                state.spinner_frame = (state.spinner_frame + 1) % SPINNER_FRAMES.len();
                Command::None
            }

            Msg::ScrollUp => {
                state.scroll = state.scroll.saturating_sub(1);
                Command::None
            }

            Msg::ScrollDown => {
                state.scroll = state.scroll.saturating_add(1);
                Command::None
            }

            Msg::Quit => Command::Quit,
        }
    }

    fn view(state: &mut State, frame: &mut Frame, area: Rect, theme: &Theme) {
        if let Some((slot, browser)) = &mut state.picker {
            let title = format!("Select {} document", slot.label());
            browser.render(frame, area, theme, &title);
            return;
        }

        match state.workflow.state() {
            WorkflowState::Submitting => render_submitting(state, frame, area, theme),
            WorkflowState::ShowingResult(_) => render_result(state, frame, area, theme),
            _ => render_form(state, frame, area, theme),
        }
    }

    fn subscriptions(state: &State) -> Vec<Subscription<Msg>> {
        if state.picker.is_some() {
            return vec![
                Subscription::keyboard(KeyCode::Up, "Move up", Msg::PickerUp),
                Subscription::keyboard(KeyCode::Char('k'), "Move up", Msg::PickerUp),
                Subscription::keyboard(KeyCode::Down, "Move down", Msg::PickerDown),
                Subscription::keyboard(KeyCode::Char('j'), "Move down", Msg::PickerDown),
                Subscription::keyboard(KeyCode::Enter, "Select", Msg::PickerEnter),
                Subscription::keyboard(KeyCode::Esc, "Cancel", Msg::PickerCancel),
            ];
        }

        match state.workflow.state() {
            // No workflow action is enactable while the request is in
            // flight; only the spinner ticks.
            WorkflowState::Submitting => vec![Subscription::timer(
                Duration::from_millis(80),
                Msg::Tick,
            )],

            WorkflowState::ShowingResult(_) => vec![
                Subscription::keyboard(KeyCode::Char('n'), "New comparison", Msg::Reset),
                Subscription::keyboard(KeyCode::Up, "Scroll up", Msg::ScrollUp),
                Subscription::keyboard(KeyCode::Down, "Scroll down", Msg::ScrollDown),
                Subscription::keyboard(KeyCode::Char('q'), "Quit", Msg::Quit),
            ],

            _ => {
                let mut subs = vec![
                    Subscription::keyboard(
                        KeyCode::Char('1'),
                        "Select template document",
                        Msg::OpenPicker(Slot::Template),
                    ),
                    Subscription::keyboard(
                        KeyCode::Char('2'),
                        "Select comparison document",
                        Msg::OpenPicker(Slot::Comparison),
                    ),
                    Subscription::keyboard(KeyCode::Char('r'), "Reset", Msg::Reset),
                    Subscription::keyboard(KeyCode::Char('q'), "Quit", Msg::Quit),
                ];
                if state.workflow.can_submit() {
                    subs.push(Subscription::keyboard(
                        KeyCode::Enter,
                        "Compare documents",
                        Msg::Submit,
                    ));
                }
                subs
            }
        }
    }

    fn title() -> &'static str {
        "Document Comparison"
    }

    fn status(state: &State, theme: &Theme) -> Option<Line<'static>> {
        match state.workflow.state() {
            WorkflowState::Submitting if state.pending_result.is_some() => Some(Line::from(
                Span::styled("Generating results...", theme.info_style()),
            )),
            WorkflowState::Submitting => Some(Line::from(Span::styled(
                "Comparing documents...",
                theme.info_style(),
            ))),
            WorkflowState::ShowingError(_) => {
                Some(Line::from(Span::styled("Error", theme.error_style())))
            }
            _ => None,
        }
    }
}

fn render_form(state: &State, frame: &mut Frame, area: Rect, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(6),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    let title = Paragraph::new("Compare Documents")
        .style(Style::default().fg(theme.sky).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let slot_lines = vec![
        slot_line(state, Slot::Template, theme),
        Line::from(""),
        slot_line(state, Slot::Comparison, theme),
    ];
    let slots = Paragraph::new(slot_lines)
        .block(Block::default().borders(Borders::ALL).title("Documents"));
    frame.render_widget(slots, chunks[1]);

    if let Some(message) = state.workflow.error() {
        let error = Paragraph::new(message.to_string())
            .style(theme.error_style())
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::ALL).title("Error"));
        frame.render_widget(error, chunks[2]);
    }

    let compare_hint = if state.workflow.can_submit() {
        Span::styled("Enter compare", Style::default().fg(theme.green))
    } else {
        Span::styled("Enter compare (select both documents first)", Style::default().fg(theme.overlay0))
    };
    let footer = Paragraph::new(Line::from(vec![
        Span::styled("1", Style::default().fg(theme.yellow)),
        Span::raw(" template  "),
        Span::styled("2", Style::default().fg(theme.yellow)),
        Span::raw(" comparison  "),
        compare_hint,
        Span::raw("  "),
        Span::styled("r", Style::default().fg(theme.yellow)),
        Span::raw(" reset  "),
        Span::styled("q", Style::default().fg(theme.yellow)),
        Span::raw(" quit"),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, chunks[4]);
}

fn slot_line(state: &State, slot: Slot, theme: &Theme) -> Line<'static> {
    let label = match slot {
        Slot::Template => " [1] Template document:   ",
        Slot::Comparison => " [2] Comparison document: ",
    };

    match state.workflow.file(slot) {
        Some(file) => Line::from(vec![
            Span::styled(label, Style::default().fg(theme.subtext1)),
            Span::styled(file.name.clone(), Style::default().fg(theme.green)),
            Span::styled(
                format!("  ({})", format_bytes(file.size)),
                Style::default().fg(theme.overlay1),
            ),
        ]),
        None => Line::from(vec![
            Span::styled(label, Style::default().fg(theme.subtext1)),
            Span::styled("<none selected>", Style::default().fg(theme.overlay0)),
        ]),
    }
}

fn render_submitting(state: &State, frame: &mut Frame, area: Rect, theme: &Theme) {
    let message = if state.pending_result.is_some() {
        "Generating results..."
    } else {
        "Comparing documents..."
    };

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(
                SPINNER_FRAMES[state.spinner_frame],
                Style::default().fg(theme.sky).add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(message, Style::default().fg(theme.sky)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Please wait...",
            Style::default().fg(theme.overlay1),
        )),
    ];

    let panel = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Comparing"));
    frame.render_widget(panel, centered_rect(area, 50, 8));
}

fn render_result(state: &State, frame: &mut Frame, area: Rect, theme: &Theme) {
    let Some(result) = state.workflow.result() else {
        return;
    };

    let tier = SimilarityTier::from_score(result.similarity_score);
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(
        "Comparison Results",
        Style::default().fg(theme.sky).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Similarity: ", Style::default().fg(theme.subtext1)),
        Span::styled(
            format_percent(result.similarity_score),
            theme.tier_style(tier).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" ({})", tier.label()), theme.tier_style(tier)),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        result.summary.clone(),
        Style::default().fg(theme.text),
    )));
    lines.push(Line::from(""));

    lines.push(document_line("Template:  ", &result.document1, theme));
    lines.push(document_line("Comparison:", &result.document2, theme));
    lines.push(Line::from(""));

    let diffs = &result.differences;
    lines.push(Line::from(Span::styled(
        format!("Added content ({} total):", diffs.total_added),
        Style::default().fg(theme.green),
    )));
    for item in &diffs.added_content {
        lines.push(Line::from(Span::styled(
            format!("  + {}", item),
            Style::default().fg(theme.green),
        )));
    }
    if let Some(note) = truncation_note(diffs.added_content.len(), diffs.total_added) {
        lines.push(Line::from(Span::styled(
            format!("  {}", note),
            Style::default().fg(theme.overlay1),
        )));
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        format!("Removed content ({} total):", diffs.total_removed),
        Style::default().fg(theme.red),
    )));
    for item in &diffs.removed_content {
        lines.push(Line::from(Span::styled(
            format!("  - {}", item),
            Style::default().fg(theme.red),
        )));
    }
    if let Some(note) = truncation_note(diffs.removed_content.len(), diffs.total_removed) {
        lines.push(Line::from(Span::styled(
            format!("  {}", note),
            Style::default().fg(theme.overlay1),
        )));
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        format!("Common content: {} shared sentence(s)", group_digits(diffs.common_content_count as u64)),
        Style::default().fg(theme.subtext1),
    )));

    let structure = &result.structure_comparison;
    lines.push(Line::from(Span::styled(
        format!(
            "Structure: pages {} → {} ({:+}), tables {} → {} ({:+})",
            structure.doc1_pages,
            structure.doc2_pages,
            structure.page_count_diff,
            structure.doc1_tables,
            structure.doc2_tables,
            structure.table_count_diff,
        ),
        Style::default().fg(theme.subtext1),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("n", Style::default().fg(theme.yellow)),
        Span::raw(" new comparison  "),
        Span::styled("↑/↓", Style::default().fg(theme.yellow)),
        Span::raw(" scroll  "),
        Span::styled("q", Style::default().fg(theme.yellow)),
        Span::raw(" quit"),
    ]));

    let panel = Paragraph::new(lines)
        .scroll((state.scroll, 0))
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Comparison Results"));
    frame.render_widget(panel, area);
}

fn document_line(label: &'static str, doc: &DocumentSummary, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(label, Style::default().fg(theme.subtext1)),
        Span::styled(format!(" {}", doc.filename), Style::default().fg(theme.text)),
        Span::styled(
            format!(
                "  {} page(s), {} table(s), {} characters",
                doc.page_count,
                doc.table_count,
                group_digits(doc.content_length)
            ),
            Style::default().fg(theme.overlay1),
        ),
    ])
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
