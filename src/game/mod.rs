mod direction;
mod grid;
mod snake;
use self::direction::Direction;
use self::grid::Grid;
use self::snake::Snake;
use crate::app::Screen;
use crate::command::Command;
use crate::consts;
use crate::menu::MainMenu;
use crate::options::Options;
use crate::util::{center_rect, get_display_area};
use crossterm::event::{poll, read, Event};
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Widget},
    Frame,
};
use std::io;
use std::time::Instant;

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    options: Options,
    grid: Grid,
    snake: Snake,
    food: Option<Position>,
    score: u32,
    phase: Phase,
    next_tick: Option<Instant>,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(options: Options) -> Self {
        Game::new_with_rng(options, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(options: Options, rng: R) -> Game<R> {
        let grid = Grid::new(options.grid_size.cells());
        let heading = (!options.wait_for_key).then_some(Direction::Right);
        let mut game = Game {
            rng,
            options,
            grid,
            snake: Snake::new(grid.center(), heading),
            food: None,
            score: 0,
            phase: Phase::Playing,
            next_tick: None,
        };
        game.place_food();
        game
    }

    pub(crate) fn process_input(&mut self) -> io::Result<Option<Screen>> {
        if self.ticking() {
            if self.next_tick.is_none() {
                self.next_tick = Some(Instant::now() + self.options.speed.tick_period());
            }
            let when = self.next_tick.expect("next_tick should be Some");
            let wait = when.saturating_duration_since(Instant::now());
            if wait.is_zero() || !poll(wait)? {
                self.advance();
                self.next_tick = None;
                Ok(None)
            } else {
                Ok(self.handle_event(read()?))
            }
        } else {
            Ok(self.handle_event(read()?))
        }
    }

    /// One simulation step: move the snake one cell along its heading,
    /// crashing on a wall or body cell, growing when it reaches the food.
    fn advance(&mut self) {
        if self.phase != Phase::Playing {
            return;
        }
        let Some(heading) = self.snake.heading() else {
            return;
        };
        let Some(target) = heading.advance(self.snake.head(), self.grid) else {
            self.phase = Phase::Crashed;
            return;
        };
        // The tail has not moved yet, so running into it counts too.
        if self.snake.occupies(target) {
            self.phase = Phase::Crashed;
            return;
        }
        if self.food == Some(target) {
            self.snake.slither(target, true);
            self.score += 1;
            self.place_food();
        } else {
            self.snake.slither(target, false);
        }
    }

    /// Sample a fresh food cell uniformly, rejecting cells under the snake.
    /// When the snake covers the whole board there is nowhere left to put
    /// food and the game ends in [`Phase::Cleared`].
    fn place_food(&mut self) {
        if self.snake.len() >= self.grid.area() {
            self.food = None;
            self.phase = Phase::Cleared;
            return;
        }
        let cells = self.grid.cells();
        loop {
            let pos = Position::new(
                self.rng.random_range(0..cells),
                self.rng.random_range(0..cells),
            );
            if !self.snake.occupies(pos) {
                self.food = Some(pos);
                return;
            }
        }
    }
}

impl<R> Game<R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    fn handle_event(&mut self, event: Event) -> Option<Screen> {
        match self.phase {
            Phase::Playing => {
                if event == Event::FocusLost {
                    self.pause();
                } else {
                    match Command::from_key_event(event.as_key_press_event()?)? {
                        Command::Quit => return Some(Screen::Quit),
                        Command::Up => self.snake.steer(Direction::Up),
                        Command::Down => self.snake.steer(Direction::Down),
                        Command::Left => self.snake.steer(Direction::Left),
                        Command::Right => self.snake.steer(Direction::Right),
                        Command::Esc => self.pause(),
                        _ => (),
                    }
                }
            }
            Phase::Paused => match Command::from_key_event(event.as_key_press_event()?)? {
                Command::Esc | Command::Space | Command::Enter => self.resume(),
                Command::R => return Some(Screen::Game(Game::new(self.options))),
                Command::M => return Some(Screen::Menu(MainMenu::new(self.options))),
                Command::Quit | Command::Q => return Some(Screen::Quit),
                _ => (),
            },
            Phase::Crashed | Phase::Cleared => {
                match Command::from_key_event(event.as_key_press_event()?)? {
                    Command::R => return Some(Screen::Game(Game::new(self.options))),
                    Command::M => return Some(Screen::Menu(MainMenu::new(self.options))),
                    Command::Quit | Command::Q => return Some(Screen::Quit),
                    _ => (),
                }
            }
        }
        None
    }

    /// Is the tick timer running?  Not while paused or dead, and not before
    /// the first steering key when the wait-for-key gate is on.
    fn ticking(&self) -> bool {
        self.phase == Phase::Playing && self.snake.heading().is_some()
    }

    fn pause(&mut self) {
        self.phase = Phase::Paused;
    }

    fn resume(&mut self) {
        self.phase = Phase::Playing;
        self.next_tick = None;
    }
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [score_area, board_area, msg_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(display);
        Line::styled(format!(" Score: {}", self.score), consts::SCORE_BAR_STYLE)
            .render(score_area, buf);

        let mut board_size = self.grid.size();
        board_size.width = board_size.width.saturating_add(2);
        board_size.height = board_size.height.saturating_add(2);
        let board_area = center_rect(board_area, board_size);
        Block::bordered().render(board_area, buf);

        let mut board = Canvas {
            area: board_area.inner(Margin::new(1, 1)),
            buf,
        };
        for &pos in self.snake.body() {
            board.draw_cell(pos, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
        }
        if let Some(food) = self.food {
            board.draw_cell(food, consts::FOOD_SYMBOL, consts::FOOD_STYLE);
        }
        // Draw the head last so that, after a crash, the crash glyph
        // overwrites whatever was hit.
        if self.phase == Phase::Crashed {
            board.draw_cell(self.snake.head(), consts::CRASH_SYMBOL, consts::CRASH_STYLE);
        } else {
            board.draw_cell(self.snake.head(), consts::SNAKE_HEAD_SYMBOL, consts::SNAKE_STYLE);
        }

        match self.phase {
            Phase::Playing => {
                if self.snake.heading().is_none() {
                    Span::from(" Press an arrow key to start").render(msg_area, buf);
                }
            }
            Phase::Paused => {
                Line::from_iter([
                    Span::raw(" PAUSED  Resume ("),
                    Span::styled("Esc", consts::KEY_STYLE),
                    Span::raw(") / Restart ("),
                    Span::styled("r", consts::KEY_STYLE),
                    Span::raw(") / Main Menu ("),
                    Span::styled("m", consts::KEY_STYLE),
                    Span::raw(") / Quit ("),
                    Span::styled("q", consts::KEY_STYLE),
                    Span::raw(")"),
                ])
                .render(msg_area, buf);
            }
            Phase::Crashed => {
                banner_line(" GAME OVER! ").render(msg_area, buf);
            }
            Phase::Cleared => {
                banner_line(" BOARD CLEARED! ").render(msg_area, buf);
            }
        }
    }
}

/// End-of-game message line with the restart/menu/quit key reminders
fn banner_line(lead: &str) -> Line<'_> {
    Line::from_iter([
        Span::raw(lead),
        Span::raw(" Restart ("),
        Span::styled("r", consts::KEY_STYLE),
        Span::raw(") / Main Menu ("),
        Span::styled("m", consts::KEY_STYLE),
        Span::raw(") / Quit ("),
        Span::styled("q", consts::KEY_STYLE),
        Span::raw(")"),
    ])
}

#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn draw_cell(&mut self, pos: Position, symbol: char, style: Style) {
        let Some(x) = self.area.x.checked_add(pos.x) else {
            return;
        };
        let Some(y) = self.area.y.checked_add(pos.y) else {
            return;
        };
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_char(symbol);
            cell.set_style(Style::reset().patch(style));
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Phase {
    Playing,
    Paused,
    /// The snake hit a wall or its own body; cleared only by a restart
    Crashed,
    /// The snake covers every cell of the board, leaving nowhere to place
    /// food
    Cleared,
}
