use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use journal_archive_engine::{ArchiveFilter, ArchiveSession, ArchiveView, ArticleCard};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use std::io::{Stdout, stdout};

use crate::render::{article_count_label, card_lines};

/// One selectable line in the archive list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Row {
    Volume(u32),
    Article { volume: u32, index: usize },
}

impl Row {
    fn volume(self) -> u32 {
        match self {
            Row::Volume(volume) | Row::Article { volume, .. } => volume,
        }
    }
}

pub struct App {
    session: ArchiveSession,
    view: ArchiveView,
    rows: Vec<Row>,
    list_state: ListState,
}

impl App {
    pub fn new(session: ArchiveSession) -> Self {
        let mut app = Self {
            view: session.view(),
            session,
            rows: Vec::new(),
            list_state: ListState::default(),
        };
        app.refresh(None);
        app
    }

    /// Re-render from the session and reselect `keep_volume` if it is still shown
    fn refresh(&mut self, keep_volume: Option<u32>) {
        self.view = self.session.view();
        self.rows = self
            .view
            .sections()
            .iter()
            .flat_map(|section| {
                let volume = section.volume_number;
                let articles = if section.expanded {
                    section.articles.len()
                } else {
                    0
                };
                std::iter::once(Row::Volume(volume))
                    .chain((0..articles).map(move |index| Row::Article { volume, index }))
            })
            .collect();

        let selected = keep_volume
            .and_then(|volume| self.rows.iter().position(|row| *row == Row::Volume(volume)))
            .or_else(|| (!self.rows.is_empty()).then_some(0));
        self.list_state.select(selected);
    }

    fn selected_row(&self) -> Option<Row> {
        self.list_state
            .selected()
            .and_then(|index| self.rows.get(index).copied())
    }

    fn next(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % self.rows.len(),
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    fn previous(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => self.rows.len() - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
    }

    fn toggle_selected(&mut self) {
        if let Some(Row::Volume(volume)) = self.selected_row() {
            self.session.toggle(volume);
            self.refresh(Some(volume));
        }
    }

    fn expand_selected(&mut self) {
        if let Some(Row::Volume(volume)) = self.selected_row()
            && !self.session.expansion().is_expanded(volume)
        {
            self.session.expansion_mut().expand(volume);
            self.refresh(Some(volume));
        }
    }

    /// Collapse the section the selection is in, moving the selection to its header
    fn collapse_selected(&mut self) {
        if let Some(row) = self.selected_row() {
            let volume = row.volume();
            self.session.expansion_mut().collapse(volume);
            self.refresh(Some(volume));
        }
    }

    fn cycle_year(&mut self) {
        let filter = self.session.filter();
        let year = cycle(&self.session.years(), filter.year);
        self.apply_filter(filter.with_year(year));
    }

    fn cycle_volume(&mut self) {
        let filter = self.session.filter();
        let volume = cycle(&self.session.volumes(), filter.volume);
        self.apply_filter(filter.with_volume(volume));
    }

    fn clear_filters(&mut self) {
        self.apply_filter(ArchiveFilter::all());
    }

    fn apply_filter(&mut self, filter: ArchiveFilter) {
        let keep = self.selected_row().map(Row::volume);
        self.session.set_filter(filter);
        self.refresh(keep);
    }

    fn card(&self, volume: u32, index: usize) -> Option<&ArticleCard> {
        self.view
            .sections()
            .iter()
            .find(|section| section.volume_number == volume)
            .and_then(|section| section.articles.get(index))
    }

    fn filter_label(&self) -> String {
        let filter = self.session.filter();
        let year = filter
            .year
            .map_or_else(|| "all".to_string(), |y| y.to_string());
        let volume = filter
            .volume
            .map_or_else(|| "all".to_string(), |v| v.to_string());
        format!("year: {year} | volume: {volume}")
    }

    fn list_lines(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| match *row {
                Row::Volume(volume) => {
                    let section = self
                        .view
                        .sections()
                        .iter()
                        .find(|section| section.volume_number == volume);
                    match section {
                        Some(section) => format!(
                            "{} {} ({})",
                            if section.expanded { "▾" } else { "▸" },
                            section.title,
                            article_count_label(section.article_count)
                        ),
                        None => format!("Volume {volume}"),
                    }
                }
                Row::Article { volume, index } => self
                    .card(volume, index)
                    .map(|card| format!("    {}", card.title))
                    .unwrap_or_default(),
            })
            .collect()
    }

    fn detail_lines(&self) -> Vec<String> {
        if let Some(message) = self.view.message() {
            return vec![message.to_string()];
        }
        match self.selected_row() {
            Some(Row::Article { volume, index }) => self
                .card(volume, index)
                .map(|card| {
                    let mut lines = card_lines(card, "");
                    lines.push(format!("  Issue {}", card.issue_label));
                    lines
                })
                .unwrap_or_default(),
            Some(Row::Volume(volume)) => {
                let Some(section) = self
                    .view
                    .sections()
                    .iter()
                    .find(|section| section.volume_number == volume)
                else {
                    return Vec::new();
                };
                let hint = if section.expanded {
                    "Press Enter/Space or ← to collapse"
                } else {
                    "Press Enter/Space or → to expand"
                };
                vec![
                    section.title.clone(),
                    article_count_label(section.article_count),
                    String::new(),
                    hint.to_string(),
                ]
            }
            None => vec!["Select a volume to view its articles".to_string()],
        }
    }
}

/// Next option after `current`; `None` (no filter) follows the last option
fn cycle<T: Copy + PartialEq>(options: &[T], current: Option<T>) -> Option<T> {
    match current.and_then(|value| options.iter().position(|option| *option == value)) {
        Some(index) => options.get(index + 1).copied(),
        None => options.first().copied(),
    }
}

pub fn run(session: ArchiveSession) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(session);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next(),
                KeyCode::Up | KeyCode::Char('k') => app.previous(),
                KeyCode::Enter | KeyCode::Char(' ') => app.toggle_selected(),
                KeyCode::Right => app.expand_selected(),
                KeyCode::Left => app.collapse_selected(),
                KeyCode::Char('y') => app.cycle_year(),
                KeyCode::Char('v') => app.cycle_volume(),
                KeyCode::Char('c') => app.clear_filters(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
        .split(f.area());

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)].as_ref())
        .split(outer[0]);

    // Volume list panel
    let items: Vec<ListItem> = app
        .list_lines()
        .into_iter()
        .map(|line| ListItem::new(vec![Line::from(vec![Span::raw(line)])]))
        .collect();
    let title = format!("Archive | {} | {}", app.session.stats(), app.filter_label());
    let volumes = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(volumes, chunks[0], &mut app.list_state);

    // Detail panel
    let detail_text: Vec<Line> = app.detail_lines().into_iter().map(Line::from).collect();
    let detail = Paragraph::new(detail_text)
        .block(Block::default().borders(Borders::ALL).title("Details"))
        .wrap(Wrap { trim: true });

    f.render_widget(detail, chunks[1]);

    let help_text = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k ↓/j: Move | "),
        Span::raw("Enter/Space: Toggle | →/←: Expand/Collapse | "),
        Span::raw("y: Year | v: Volume | c: Clear filters"),
    ]);
    f.render_widget(Paragraph::new(vec![help_text]), outer[1]);
}
