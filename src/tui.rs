use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::{Backend, CrosstermBackend},
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
};
use std::io::{self, IsTerminal};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::profile::{Profile, active_index};

/// Reserved for the Quit entry, never handed to a profile
pub const QUIT_KEY: char = 'q';

const MIN_WIDTH: u16 = 40;
const MIN_HEIGHT: u16 = 10;

/// What the operator picked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Index into the profile list passed to the selector
    Chosen(usize),
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Profile(usize),
    Quit,
}

/// One selectable row of the menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: Option<char>,
    pub kind: EntryKind,
}

/// Characters handed out as mnemonics, in order, with the quit key removed
fn mnemonic_pool() -> impl Iterator<Item = char> {
    ('a'..='z')
        .chain('A'..='Z')
        .chain('0'..='9')
        .filter(|c| *c != QUIT_KEY)
}

/// Build the menu: one entry per profile followed by Quit
pub fn build_entries(profile_count: usize) -> Vec<Entry> {
    let mut keys = mnemonic_pool();
    let mut entries: Vec<Entry> = (0..profile_count)
        .map(|i| Entry {
            key: keys.next(),
            kind: EntryKind::Profile(i),
        })
        .collect();
    entries.push(Entry {
        key: Some(QUIT_KEY),
        kind: EntryKind::Quit,
    });
    entries
}

/// Selector state, independent of the terminal
pub struct Selector<'a> {
    pub profiles: &'a [Profile],
    pub entries: Vec<Entry>,
    pub focused: usize,
    pub outcome: Option<Selection>,
}

impl<'a> Selector<'a> {
    pub fn new(profiles: &'a [Profile]) -> Result<Self> {
        if profiles.is_empty() {
            return Err(Error::NoProfiles);
        }
        Ok(Self {
            profiles,
            entries: build_entries(profiles.len()),
            focused: active_index(profiles),
            outcome: None,
        })
    }

    pub fn select_next(&mut self) {
        self.focused = (self.focused + 1) % self.entries.len();
    }

    pub fn select_previous(&mut self) {
        self.focused = if self.focused == 0 {
            self.entries.len() - 1
        } else {
            self.focused - 1
        };
    }

    fn confirm(&mut self, entry: usize) {
        self.outcome = Some(match self.entries[entry].kind {
            EntryKind::Profile(i) => Selection::Chosen(i),
            EntryKind::Quit => Selection::Cancelled,
        });
    }

    /// Feed one key event; returns the outcome once the operator has decided
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Selection> {
        if key.kind == KeyEventKind::Release {
            return None;
        }
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.outcome = Some(Selection::Cancelled);
            }
            KeyCode::Up => self.select_previous(),
            KeyCode::Down => self.select_next(),
            KeyCode::Home => self.focused = 0,
            KeyCode::End => self.focused = self.entries.len() - 1,
            KeyCode::Enter => self.confirm(self.focused),
            KeyCode::Esc => self.outcome = Some(Selection::Cancelled),
            KeyCode::Char(c)
                if (key.modifiers - KeyModifiers::SHIFT).is_empty() =>
            {
                if let Some(i) = self.entries.iter().position(|e| e.key == Some(c)) {
                    self.focused = i;
                    self.confirm(i);
                }
            }
            _ => {}
        }
        self.outcome
    }

    pub fn render(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Menu
                Constraint::Length(3), // Footer
            ])
            .split(f.area());

        Self::render_header(f, chunks[0]);
        self.render_menu(f, chunks[1]);
        Self::render_footer(f, chunks[2]);
    }

    fn render_header(f: &mut Frame, area: Rect) {
        let header = Paragraph::new(Line::from(vec![Span::styled(
            "gcloud configuration",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Blue)),
        )
        .alignment(Alignment::Center);

        f.render_widget(header, area);
    }

    fn render_menu(&self, f: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = self
            .entries
            .iter()
            .map(|entry| {
                let key = match entry.key {
                    Some(c) => format!("[{}] ", c),
                    None => "    ".to_string(),
                };
                match entry.kind {
                    EntryKind::Profile(i) => {
                        let profile = &self.profiles[i];
                        let name_style = if profile.is_active {
                            Style::default().fg(Color::Green)
                        } else {
                            Style::default().fg(Color::Gray)
                        };
                        ListItem::new(vec![
                            Line::from(vec![
                                Span::styled(key, Style::default().fg(Color::Yellow)),
                                Span::styled(profile.label(), name_style),
                            ]),
                            Line::from(Span::styled(
                                format!("    {}", profile.details()),
                                Style::default().fg(Color::DarkGray),
                            )),
                        ])
                    }
                    EntryKind::Quit => ListItem::new(Line::from(vec![
                        Span::styled(key, Style::default().fg(Color::Red)),
                        Span::styled("Quit", Style::default().fg(Color::Red)),
                    ])),
                }
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(" Configurations ")
                    .border_style(Style::default().fg(Color::Blue)),
            )
            .highlight_style(
                Style::default()
                    .bg(Color::Rgb(50, 50, 100))
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )
            .highlight_symbol("> ");

        let mut list_state = ListState::default();
        list_state.select(Some(self.focused));

        f.render_stateful_widget(list, area, &mut list_state);
    }

    fn render_footer(f: &mut Frame, area: Rect) {
        let key_style = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
        let help = Line::from(vec![
            Span::styled("↑/↓", key_style),
            Span::styled(": Navigate ", Style::default().fg(Color::Gray)),
            Span::styled("Enter", key_style),
            Span::styled(": Activate ", Style::default().fg(Color::Gray)),
            Span::styled("[key]", key_style),
            Span::styled(": Pick ", Style::default().fg(Color::Gray)),
            Span::styled(
                QUIT_KEY.to_string(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(": Quit", Style::default().fg(Color::Gray)),
        ]);

        let footer = Paragraph::new(help)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::Blue)),
            )
            .alignment(Alignment::Center);

        f.render_widget(footer, area);
    }
}

/// Draw and read keys until the selector reaches an outcome
pub fn drive<B: Backend>(
    terminal: &mut Terminal<B>,
    selector: &mut Selector,
    mut next_key: impl FnMut() -> io::Result<Option<KeyEvent>>,
) -> Result<Selection> {
    loop {
        terminal
            .draw(|f| selector.render(f))
            .map_err(Error::ui)?;

        if let Some(key) = next_key().map_err(Error::ui)?
            && let Some(selection) = selector.handle_key(key)
        {
            return Ok(selection);
        }
    }
}

fn read_key() -> io::Result<Option<KeyEvent>> {
    match event::read()? {
        Event::Key(key) => Ok(Some(key)),
        _ => Ok(None),
    }
}

/// Owns the terminal while the menu is up and restores it on drop
struct TuiApp {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TuiApp {
    fn new() -> Result<Self> {
        enable_raw_mode().map_err(Error::ui)?;
        Self::enter().inspect_err(|_| restore_terminal())
    }

    fn enter() -> Result<Self> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(Error::ui)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend).map_err(Error::ui)?;
        Ok(Self { terminal })
    }
}

impl Drop for TuiApp {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

/// Show the menu on the real terminal and block until the operator decides
pub fn select_profile(profiles: &[Profile]) -> Result<Selection> {
    let mut selector = Selector::new(profiles)?;

    if !io::stdout().is_terminal() {
        return Err(Error::Ui(
            "interactive selection requires a terminal on stdout".to_string(),
        ));
    }

    if let Ok((width, height)) = crossterm::terminal::size()
        && (width < MIN_WIDTH || height < MIN_HEIGHT)
    {
        warn!(
            "terminal size ({}x{}) is smaller than recommended ({}x{})",
            width, height, MIN_WIDTH, MIN_HEIGHT
        );
    }

    let _ = color_eyre::install();

    let mut app = TuiApp::new()?;
    let selection = drive(&mut app.terminal, &mut selector, read_key)?;
    debug!("selector finished with {:?}", selection);
    Ok(selection)
}
