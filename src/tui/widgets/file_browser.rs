//! Directory listing state for the file picker overlay

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::render::format_bytes;
use crate::tui::Theme;

#[derive(Debug, Clone)]
pub struct DirEntry {
    pub name: String,
    pub is_dir: bool,
    pub size: u64,
}

/// What pressing Enter on the highlighted entry means.
pub enum Selection {
    File(PathBuf),
    DescendedInto(PathBuf),
}

/// Navigable directory listing: `..` first, then directories, then files,
/// hidden entries skipped, names sorted case-insensitively.
pub struct FileBrowser {
    current_dir: PathBuf,
    entries: Vec<DirEntry>,
    list_state: ListState,
}

impl FileBrowser {
    pub fn new(dir: PathBuf) -> Result<Self> {
        let entries = read_directory_entries(&dir)?;
        let mut list_state = ListState::default();
        list_state.select(Some(0));

        Ok(Self {
            current_dir: dir,
            entries,
            list_state,
        })
    }

    pub fn current_dir(&self) -> &PathBuf {
        &self.current_dir
    }

    pub fn select_next(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i >= self.entries.len() - 1 => 0,
            Some(i) => i + 1,
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn select_previous(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => self.entries.len() - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
    }

    /// Act on the highlighted entry: descend into directories (including
    /// `..`), or hand back the file path for selection.
    pub fn enter(&mut self) -> Result<Option<Selection>> {
        let Some(i) = self.list_state.selected() else {
            return Ok(None);
        };
        let Some(entry) = self.entries.get(i) else {
            return Ok(None);
        };

        if entry.is_dir {
            let next_dir = if entry.name == ".." {
                match self.current_dir.parent() {
                    Some(parent) => parent.to_path_buf(),
                    None => return Ok(None),
                }
            } else {
                self.current_dir.join(&entry.name)
            };

            self.entries = read_directory_entries(&next_dir)?;
            self.current_dir = next_dir.clone();
            self.list_state.select(Some(0));
            Ok(Some(Selection::DescendedInto(next_dir)))
        } else {
            Ok(Some(Selection::File(self.current_dir.join(&entry.name))))
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme, title: &str) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(area);

        let header = Paragraph::new(format!("{} - {}", title, self.current_dir.display()))
            .style(Style::default().fg(theme.sky))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(header, chunks[0]);

        let items: Vec<ListItem> = self
            .entries
            .iter()
            .map(|entry| {
                let (display_name, color) = if entry.is_dir {
                    (format!("{}/", entry.name), theme.blue)
                } else {
                    (format!("{}  ({})", entry.name, format_bytes(entry.size)), theme.text)
                };
                ListItem::new(Line::from(Span::styled(
                    display_name,
                    Style::default().fg(color),
                )))
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title("Files & Directories"))
            .highlight_style(
                Style::default()
                    .bg(theme.surface1)
                    .fg(theme.text)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("► ");
        frame.render_stateful_widget(list, chunks[1], &mut self.list_state);

        let instructions = Paragraph::new("Use ↑/↓ to navigate, Enter to select, Esc to cancel")
            .style(Style::default().fg(theme.overlay1))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(instructions, chunks[2]);
    }
}

fn read_directory_entries(path: &PathBuf) -> Result<Vec<DirEntry>> {
    let mut entries = Vec::new();

    // Parent directory entry unless at filesystem root
    if path.parent().is_some() {
        entries.push(DirEntry {
            name: "..".to_string(),
            is_dir: true,
            size: 0,
        });
    }

    let dir_entries = fs::read_dir(path)
        .with_context(|| format!("Failed to read directory: {}", path.display()))?;
    let mut dirs = Vec::new();
    let mut files = Vec::new();

    for entry in dir_entries {
        let entry = entry?;
        let file_name = entry.file_name().to_string_lossy().to_string();

        // Skip hidden files/directories
        if file_name.starts_with('.') {
            continue;
        }

        let file_type = entry.file_type()?;
        if file_type.is_dir() {
            dirs.push(DirEntry {
                name: file_name,
                is_dir: true,
                size: 0,
            });
        } else {
            let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
            files.push(DirEntry {
                name: file_name,
                is_dir: false,
                size,
            });
        }
    }

    dirs.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    files.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

    entries.extend(dirs);
    entries.extend(files);

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_sorted_dirs_first_hidden_skipped() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("zeta")).unwrap();
        fs::create_dir(dir.path().join("Alpha")).unwrap();
        fs::write(dir.path().join("b.txt"), b"hi").unwrap();
        fs::write(dir.path().join("a.pdf"), b"hi").unwrap();
        fs::write(dir.path().join(".hidden"), b"hi").unwrap();

        let browser = FileBrowser::new(dir.path().to_path_buf()).unwrap();
        let names: Vec<&str> = browser.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["..", "Alpha", "zeta", "a.pdf", "b.txt"]);
    }

    #[test]
    fn test_selection_wraps_around() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("only.txt"), b"hi").unwrap();

        let mut browser = FileBrowser::new(dir.path().to_path_buf()).unwrap();
        // entries: [".." , "only.txt"]
        assert_eq!(browser.list_state.selected(), Some(0));
        browser.select_next();
        assert_eq!(browser.list_state.selected(), Some(1));
        browser.select_next();
        assert_eq!(browser.list_state.selected(), Some(0));
        browser.select_previous();
        assert_eq!(browser.list_state.selected(), Some(1));
    }

    #[test]
    fn test_enter_on_file_returns_full_path() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("doc.pdf"), b"hi").unwrap();

        let mut browser = FileBrowser::new(dir.path().to_path_buf()).unwrap();
        browser.select_next(); // move off ".."
        match browser.enter().unwrap() {
            Some(Selection::File(path)) => assert_eq!(path, dir.path().join("doc.pdf")),
            other => panic!("expected file selection, got {:?}", other.is_some()),
        }
    }

    #[test]
    fn test_enter_descends_into_directory() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();

        let mut browser = FileBrowser::new(dir.path().to_path_buf()).unwrap();
        browser.select_next();
        match browser.enter().unwrap() {
            Some(Selection::DescendedInto(path)) => {
                assert_eq!(path, dir.path().join("sub"));
                assert_eq!(browser.current_dir(), &dir.path().join("sub"));
            }
            other => panic!("expected descent, got {:?}", other.is_some()),
        }
    }
}
