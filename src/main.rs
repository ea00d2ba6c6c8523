use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{
        self, Event, KeyCode, KeyEventKind, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    DefaultTerminal, Frame,
};
use tui_big_text::{BigText, PixelSize};

mod ai;
mod ball;
mod court;
mod input;
mod paddle;
mod render;
mod rng;
mod session;
mod theme;

use crate::court::DEFAULT_AI_DIFFICULTY;
use crate::input::{GameKey, InputState};
use crate::rng::GameRng;
use crate::session::{GameSession, Mode};
use crate::theme::Theme;

/// Nominal 60 Hz tick gate. There is no delta-time scaling: one elapsed
/// interval is one fixed simulation step, so game speed follows the actual
/// frame rate.
const TICK: Duration = Duration::from_millis(16);

const MAIN_MENU_OPTIONS: [&str; 4] = ["Single Player", "Two Players", "Settings", "Exit"];

#[derive(Debug)]
enum AppScreen {
    MainMenu,
    Game,
    Settings,
}

struct App {
    exit: bool,
    screen: AppScreen,
    menu_selected: usize,
    settings_selected: usize, // 0: difficulty, 1: theme, 2: back
    difficulty: f32,
    selected_theme: Theme,
    session: Option<GameSession>,
    input: InputState,
    release_events: bool,
    last_tick: Instant,
    paused: bool,
}

impl App {
    fn new(release_events: bool) -> Self {
        Self {
            exit: false,
            screen: AppScreen::MainMenu,
            menu_selected: 0,
            settings_selected: 0,
            difficulty: DEFAULT_AI_DIFFICULTY,
            selected_theme: Theme::Monokai,
            session: None,
            input: InputState::new(release_events),
            release_events,
            last_tick: Instant::now(),
            paused: false,
        }
    }

    fn run(&mut self, mut terminal: DefaultTerminal) -> io::Result<()> {
        while !self.exit {
            match self.screen {
                AppScreen::MainMenu => {
                    self.handle_menu_events()?;
                    terminal.draw(|frame| self.draw_menu(frame))?;
                }
                AppScreen::Settings => {
                    self.handle_settings_events()?;
                    terminal.draw(|frame| self.draw_settings(frame))?;
                }
                AppScreen::Game => {
                    self.handle_game_events()?;
                    if self.session.is_none() {
                        self.screen = AppScreen::MainMenu;
                        continue;
                    }
                    self.maybe_tick();
                    terminal.draw(|frame| self.draw_game(frame))?;
                }
            }
        }
        Ok(())
    }

    fn start_game(&mut self, mode: Mode) {
        self.session = Some(GameSession::new(mode, self.difficulty, GameRng::from_os()));
        self.input = InputState::new(self.release_events);
        self.paused = false;
        self.last_tick = Instant::now();
        self.screen = AppScreen::Game;
    }

    /// Run one fixed simulation step if a tick interval has elapsed. Pausing
    /// just stops scheduling ticks; the session itself has no pause state.
    fn maybe_tick(&mut self) {
        if self.paused {
            return;
        }
        if let Some(session) = self.session.as_mut() {
            if self.last_tick.elapsed() >= TICK {
                session.tick(&self.input);
                self.last_tick = Instant::now();
            }
        }
    }

    // --- Main menu ---

    fn handle_menu_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(10))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    return Ok(());
                }
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => self.exit = true,
                    KeyCode::Up => {
                        self.menu_selected = self
                            .menu_selected
                            .checked_sub(1)
                            .unwrap_or(MAIN_MENU_OPTIONS.len() - 1);
                    }
                    KeyCode::Down => {
                        self.menu_selected = (self.menu_selected + 1) % MAIN_MENU_OPTIONS.len();
                    }
                    KeyCode::Enter => match self.menu_selected {
                        0 => self.start_game(Mode::SinglePlayer),
                        1 => self.start_game(Mode::TwoPlayer),
                        2 => {
                            self.settings_selected = 0;
                            self.screen = AppScreen::Settings;
                        }
                        3 => self.exit = true,
                        _ => {}
                    },
                    _ => {}
                }
            }
        }
        Ok(())
    }

    fn draw_menu(&self, frame: &mut Frame) {
        let colors = self.selected_theme.colors();
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Length(12), Constraint::Length(10)])
            .flex(Flex::Center)
            .split(frame.area());

        let big_text = BigText::builder()
            .pixel_size(PixelSize::Sextant)
            .style(Style::new().blue())
            .lines(vec![
                "".into(),
                "tui".cyan().into(),
                "PONG".white().into(),
                "~~~~~".light_green().into(),
            ])
            .alignment(Alignment::Center)
            .build();
        frame.render_widget(big_text, layout[0]);

        let [options_area] = Layout::horizontal([Constraint::Length(34)])
            .flex(Flex::Center)
            .areas(layout[1]);
        frame.render_widget(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(colors.accent)),
            options_area,
        );

        for (i, &option) in MAIN_MENU_OPTIONS.iter().enumerate() {
            let row = Rect::new(
                options_area.x + 1,
                options_area.y + 2 + i as u16,
                options_area.width.saturating_sub(2),
                1,
            );
            let style = if i == self.menu_selected {
                Style::default().fg(Color::White).bold().italic()
            } else {
                Style::default().fg(colors.text)
            };
            frame.render_widget(
                Paragraph::new(option).style(style).alignment(Alignment::Center),
                row,
            );
        }

        let hint = Rect::new(
            options_area.x + 1,
            options_area.y + options_area.height.saturating_sub(2),
            options_area.width.saturating_sub(2),
            1,
        );
        frame.render_widget(
            Paragraph::new("↑/↓ select · Enter confirm · Q quit")
                .style(Style::default().fg(colors.net))
                .alignment(Alignment::Center),
            hint,
        );
    }

    // --- Settings ---

    fn handle_settings_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(10))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    return Ok(());
                }
                match key.code {
                    KeyCode::Up => {
                        self.settings_selected = self.settings_selected.checked_sub(1).unwrap_or(2);
                    }
                    KeyCode::Down => {
                        self.settings_selected = (self.settings_selected + 1) % 3;
                    }
                    KeyCode::Left => match self.settings_selected {
                        0 => self.difficulty = (self.difficulty - 0.1).clamp(0.0, 1.0),
                        1 => self.selected_theme = self.selected_theme.prev(),
                        _ => {}
                    },
                    KeyCode::Right => match self.settings_selected {
                        0 => self.difficulty = (self.difficulty + 0.1).clamp(0.0, 1.0),
                        1 => self.selected_theme = self.selected_theme.next(),
                        _ => {}
                    },
                    KeyCode::Enter if self.settings_selected == 2 => {
                        self.screen = AppScreen::MainMenu;
                    }
                    KeyCode::Esc => self.screen = AppScreen::MainMenu,
                    _ => {}
                }
            }
        }
        Ok(())
    }

    fn draw_settings(&self, frame: &mut Frame) {
        let colors = self.selected_theme.colors();
        let area = frame.area();
        let entries = [
            format!("AI Difficulty: {:.1}", self.difficulty),
            format!("Theme: {}", self.selected_theme.name()),
            "Back".to_string(),
        ];

        let popup = centered_rect(44, 10, area);
        frame.render_widget(Clear, popup);
        frame.render_widget(
            Block::default()
                .title("Settings")
                .borders(Borders::ALL)
                .border_type(BorderType::Thick)
                .style(Style::default().fg(colors.accent))
                .title_alignment(Alignment::Center),
            popup,
        );

        for (i, entry) in entries.iter().enumerate() {
            let row = Rect::new(
                popup.x + 2,
                popup.y + 2 + 2 * i as u16,
                popup.width.saturating_sub(4),
                1,
            );
            let text = if i == self.settings_selected {
                format!("> {} <", entry)
            } else {
                format!("  {}  ", entry)
            };
            let style = if i == self.settings_selected {
                Style::default().fg(Color::White).bold()
            } else {
                Style::default().fg(colors.text)
            };
            frame.render_widget(
                Paragraph::new(text).style(style).alignment(Alignment::Center),
                row,
            );
        }

        let hint = Rect::new(
            popup.x + 2,
            popup.y + popup.height.saturating_sub(2),
            popup.width.saturating_sub(4),
            1,
        );
        frame.render_widget(
            Paragraph::new("←/→ adjust · Esc back")
                .style(Style::default().fg(colors.net))
                .alignment(Alignment::Center),
            hint,
        );
    }

    // --- Game ---

    fn handle_game_events(&mut self) -> io::Result<()> {
        // Drain everything pending so paddle input never lags the tick.
        while event::poll(Duration::from_millis(5))? {
            if let Event::Key(key) = event::read()? {
                match key.kind {
                    KeyEventKind::Press | KeyEventKind::Repeat => {
                        if let Some(game_key) = map_game_key(key.code) {
                            self.input.press(game_key);
                            continue;
                        }
                        match key.code {
                            KeyCode::Esc | KeyCode::Char('q') => {
                                self.session = None;
                                self.input.clear();
                                self.screen = AppScreen::MainMenu;
                            }
                            KeyCode::Char('p') => self.paused = !self.paused,
                            KeyCode::Char('1') => {
                                if let Some(session) = self.session.as_mut() {
                                    session.set_mode(Mode::SinglePlayer);
                                }
                            }
                            KeyCode::Char('2') => {
                                if let Some(session) = self.session.as_mut() {
                                    session.set_mode(Mode::TwoPlayer);
                                }
                            }
                            _ => {}
                        }
                    }
                    KeyEventKind::Release => {
                        if let Some(game_key) = map_game_key(key.code) {
                            self.input.release(game_key);
                        }
                    }
                }
            }
        }
        Ok(())
    }

    fn draw_game(&self, frame: &mut Frame) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        let colors = self.selected_theme.colors();
        let snap = session.snapshot();

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Fill(1), Constraint::Length(3)])
            .split(frame.area());

        render::draw_court(frame, layout[0], &snap, &colors);

        let controls_text = match snap.mode {
            Mode::SinglePlayer => {
                " You: W/S  │  1 = vs CPU  2 = two players  │  P = pause  Esc = menu "
            }
            Mode::TwoPlayer => {
                " P1: W/S  P2: ↑/↓  │  1 = vs CPU  2 = two players  │  P = pause  Esc = menu "
            }
        };
        frame.render_widget(
            Paragraph::new(controls_text)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_type(BorderType::Rounded)
                        .style(Style::default().fg(colors.border)),
                )
                .style(Style::default().fg(colors.text))
                .alignment(Alignment::Center),
            layout[1],
        );

        if self.paused {
            let popup = centered_rect(36, 5, frame.area());
            frame.render_widget(Clear, popup);
            frame.render_widget(
                Block::default()
                    .title("Paused")
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .style(Style::default().fg(colors.accent))
                    .title_alignment(Alignment::Center),
                popup,
            );
            let text = Rect::new(popup.x + 1, popup.y + 2, popup.width.saturating_sub(2), 1);
            frame.render_widget(
                Paragraph::new("P resume · Esc menu")
                    .style(Style::default().fg(colors.text))
                    .alignment(Alignment::Center),
                text,
            );
        }
    }
}

fn map_game_key(code: KeyCode) -> Option<GameKey> {
    match code {
        KeyCode::Char('w') => Some(GameKey::W),
        KeyCode::Char('s') => Some(GameKey::S),
        KeyCode::Up => Some(GameKey::ArrowUp),
        KeyCode::Down => Some(GameKey::ArrowDown),
        _ => None,
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

fn main() -> io::Result<()> {
    let terminal = ratatui::init();

    // Key-release reporting needs the kitty keyboard protocol; fall back to
    // press-decay input where the terminal lacks it.
    let release_events = terminal::supports_keyboard_enhancement().unwrap_or(false);
    if release_events {
        io::stdout().execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))?;
    }

    let mut app = App::new(release_events);
    let app_result = app.run(terminal);

    if release_events {
        let _ = io::stdout().execute(PopKeyboardEnhancementFlags);
    }
    ratatui::restore();

    if app_result.is_ok() {
        println!("Thanks for playing tui-pong!");
    }
    app_result
}
