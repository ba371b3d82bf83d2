mod direction;
mod food;
mod sidebar;
mod snake;
pub(crate) use self::direction::{Axis, Direction};
pub(crate) use self::food::FoodKind;
use self::food::{Food, FoodSlot};
use self::sidebar::Sidebar;
use self::snake::Snake;
use crate::consts;
use crate::util::{center_rect, Bounds, EnumExt};
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Layout, Margin, Position, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Widget},
    Frame,
};

/// The complete state of a game of snake: the snake, the food, and the scores
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    bounds: Bounds,
    snake: Snake,
    food: FoodSlot,
    score: u32,
    high_score: u32,
    state: GameState,
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(rng: R) -> Game<R> {
        Game::with_bounds(Bounds::from(consts::GRID_SIZE), rng)
    }

    pub(crate) fn with_bounds(bounds: Bounds, rng: R) -> Game<R> {
        let mut game = Game {
            rng,
            bounds,
            snake: Snake::new(bounds),
            food: FoodSlot::Respawning { ticks_left: 0 },
            score: 0,
            high_score: 0,
            state: GameState::Running,
        };
        game.place_food();
        game
    }

    /// Advance the game by one tick.  Does nothing once the snake has run
    /// into itself.
    pub(crate) fn update(&mut self) -> Advance {
        if !self.running() {
            return Advance::Stalled;
        }
        self.tick_food();
        let head = self.snake.next_head(self.bounds);
        // The tail hasn't moved out of the way yet, so it counts.
        if self.snake.occupies(head) {
            log::info!("Snake ran into itself at {head:?}; final score {}", self.score);
            self.state = GameState::Dead;
            return Advance::Collided;
        }
        self.snake.push_head(head);
        match self.food {
            FoodSlot::Visible(food) if food.position == head => {
                self.score = self.score.saturating_add(food.kind.value());
                self.high_score = self.high_score.max(self.score);
                log::debug!(
                    "Ate {:?} at {head:?}; score is now {}, length {}",
                    food.kind,
                    self.score,
                    self.snake.len()
                );
                self.place_food();
                Advance::Ate(food.kind)
            }
            _ => {
                self.snake.drop_tail();
                Advance::Moved
            }
        }
    }

    /// Count down the life of the current food, or the wait for the next food
    /// to appear
    fn tick_food(&mut self) {
        match self.food {
            FoodSlot::Visible(ref mut food) => {
                food.ticks_left = food.ticks_left.saturating_sub(1);
                if food.ticks_left == 0 {
                    log::debug!("Food at {:?} vanished uneaten", food.position);
                    self.food = FoodSlot::Respawning {
                        ticks_left: consts::FOOD_RESPAWN_TICKS,
                    };
                }
            }
            FoodSlot::Respawning { ref mut ticks_left } => {
                *ticks_left = ticks_left.saturating_sub(1);
                if *ticks_left == 0 {
                    self.place_food();
                    if let Some(food) = self.food.visible() {
                        log::debug!("{:?} respawned at {:?}", food.kind, food.position);
                    }
                }
            }
        }
    }

    /// Put a random kind of food with a random lifetime at a random position
    /// not occupied by the snake
    fn place_food(&mut self) {
        let kind = FoodKind::random(&mut self.rng);
        let ticks_left = self
            .rng
            .random_range(consts::MIN_FOOD_TICKS..consts::MAX_FOOD_TICKS);
        let position = loop {
            let pos = self.bounds.random_position(&mut self.rng);
            if !self.snake.occupies(pos) {
                break pos;
            }
        };
        self.food = FoodSlot::Visible(Food {
            position,
            kind,
            ticks_left,
        });
    }

    /// If the game is over, start a new one, keeping the best score seen so
    /// far.  Returns `false` and does nothing if the game is still going.
    pub(crate) fn restart(&mut self) -> bool {
        if self.running() {
            return false;
        }
        self.high_score = self.high_score.max(self.score);
        self.score = 0;
        self.snake = Snake::new(self.bounds);
        self.state = GameState::Running;
        self.place_food();
        log::info!("Starting new game; high score is {}", self.high_score);
        true
    }
}

impl<R> Game<R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }

    /// Ask the snake to turn to face `direction` at the next tick.  Returns
    /// `false` if the request was ignored because it would reverse the snake
    /// or because the game is over.
    pub(crate) fn set_direction(&mut self, direction: Direction) -> bool {
        self.running() && self.snake.turn(direction)
    }

    /// Return the direction the snake will move in on the next tick
    pub(crate) fn heading(&self) -> Direction {
        self.snake.heading()
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn high_score(&self) -> u32 {
        self.high_score
    }

    pub(crate) fn running(&self) -> bool {
        self.state == GameState::Running
    }

    #[cfg(test)]
    pub(crate) fn end(&mut self) {
        self.state = GameState::Dead;
    }
}

impl<R> Widget for &Game<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block_size = Size {
            width: self.bounds.width.saturating_add(2),
            height: self.bounds.height.saturating_add(2),
        };
        let display = center_rect(
            area,
            Size {
                width: consts::SIDEBAR_WIDTH.saturating_add(block_size.width),
                height: block_size.height.max(Sidebar::HEIGHT),
            },
        );
        let [sidebar_area, block_area] =
            Layout::horizontal([consts::SIDEBAR_WIDTH, block_size.width]).areas(display);
        Sidebar {
            score: self.score,
            high_score: self.high_score,
        }
        .render(sidebar_area, buf);

        let block_area = center_rect(block_area, block_size);
        Block::bordered()
            .border_type(BorderType::Thick)
            .render(block_area, buf);

        let level_area = block_area.inner(Margin::new(1, 1));
        let mut level = Canvas {
            area: level_area,
            buf,
        };
        level.fill(consts::EMPTY_CELL_SYMBOL, consts::EMPTY_CELL_STYLE);
        if let Some(food) = self.food.visible() {
            level.draw_cell(food.position, food.kind.symbol(), food.style());
        }
        for &p in self.snake.segments().iter().skip(1) {
            level.draw_cell(p, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
        }
        if self.state == GameState::Dead {
            level.draw_cell(
                self.snake.head(),
                consts::COLLISION_SYMBOL,
                consts::COLLISION_STYLE,
            );
            GameOver { score: self.score }.render(level_area, buf);
        } else {
            level.draw_cell(
                self.snake.head(),
                self.snake.head_symbol(),
                consts::SNAKE_STYLE,
            );
        }
    }
}

/// What happened during a call to [`Game::update()`]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Advance {
    /// The snake moved without eating anything
    Moved,

    /// The snake moved onto a piece of food and ate it
    Ate(FoodKind),

    /// The snake ran into itself, ending the game
    Collided,

    /// The game was already over, so nothing happened
    Stalled,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum GameState {
    Running,
    Dead,
}

#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    fn fill(&mut self, symbol: char, style: Style) {
        for pos in self.area.positions() {
            if let Some(cell) = self.buf.cell_mut(pos) {
                cell.set_char(symbol);
                cell.set_style(Style::reset().patch(style));
            }
        }
    }

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

/// A banner drawn across the middle of the playing field once the game is over
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct GameOver {
    score: u32,
}

impl Widget for GameOver {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = [
            Line::from(Span::styled("GAME OVER", consts::GAME_OVER_STYLE)),
            Line::from(format!("Final Score: {}", self.score)),
            Line::from_iter([
                Span::raw("Restart ("),
                Span::styled("r", consts::KEY_STYLE),
                Span::raw(") — Quit ("),
                Span::styled("q", consts::KEY_STYLE),
                Span::raw(")"),
            ]),
        ];
        let top = area.y.saturating_add((area.height / 2).saturating_sub(1));
        for (line, y) in lines.into_iter().zip(top..area.bottom()) {
            let row = Rect {
                y,
                height: 1,
                ..area
            };
            Clear.render(row, buf);
            line.centered().render(row, buf);
        }
    }
}
