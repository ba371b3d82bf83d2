//! Assorted constants & hard-coded game rules
use ratatui::{
    layout::Size,
    style::{Color, Modifier, Style},
};
use std::num::NonZeroU64;
use std::time::Duration;

/// Size of the playing field in cells, not counting the border
pub(crate) const GRID_SIZE: Size = Size {
    width: 40,
    height: 15,
};

/// Width of the sidebar to the left of the playing field, including its
/// separator column
pub(crate) const SIDEBAR_WIDTH: u16 = 20;

/// Length of the snake at the start of a game
pub(crate) const INITIAL_SNAKE_LENGTH: u16 = 3;

/// Default time in milliseconds between movements of the snake while it's
/// moving horizontally
pub(crate) const DEFAULT_TICK_MILLIS: NonZeroU64 = match NonZeroU64::new(100) {
    Some(n) => n,
    None => panic!("DEFAULT_TICK_MILLIS must be nonzero"),
};

/// Longest time allowed between movements of the snake, along either axis
pub(crate) const MAX_TICK: Duration = Duration::from_secs(60);

/// Default factor by which vertical movement is slowed down, compensating for
/// terminal cells being taller than they are wide
pub(crate) const DEFAULT_VERTICAL_RATIO: f64 = 1.8;

/// Minimum number of ticks that a food item stays on the board
pub(crate) const MIN_FOOD_TICKS: u32 = 50;

/// Maximum number of ticks (exclusive) that a food item stays on the board
pub(crate) const MAX_FOOD_TICKS: u32 = 150;

/// Number of ticks between a food item vanishing and the next one appearing
pub(crate) const FOOD_RESPAWN_TICKS: u32 = 20;

/// Glyph for the snake's head when it is moving north/up
pub(crate) const SNAKE_HEAD_NORTH_SYMBOL: char = 'v';

/// Glyph for the snake's head when it is moving south/down
pub(crate) const SNAKE_HEAD_SOUTH_SYMBOL: char = '^';

/// Glyph for the snake's head when it is moving east/right
pub(crate) const SNAKE_HEAD_EAST_SYMBOL: char = '<';

/// Glyph for the snake's head when it is moving west/left
pub(crate) const SNAKE_HEAD_WEST_SYMBOL: char = '>';

/// Glyph for board cells with nothing on them
pub(crate) const EMPTY_CELL_SYMBOL: char = '⬚';

/// Glyph for the parts of the snake's body
pub(crate) const SNAKE_BODY_SYMBOL: char = '■';

/// Glyph for the snake's head when it's run into itself
pub(crate) const COLLISION_SYMBOL: char = '×';

/// Style for the snake's head and body
pub(crate) const SNAKE_STYLE: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Style for [`EMPTY_CELL_SYMBOL`]
pub(crate) const EMPTY_CELL_STYLE: Style = Style::new().fg(Color::DarkGray);

/// Style for [`COLLISION_SYMBOL`]
pub(crate) const COLLISION_STYLE: Style = Style::new()
    .fg(Color::LightRed)
    .add_modifier(Modifier::REVERSED);

/// Extra style for food that will vanish soon
pub(crate) const FOOD_FADING_STYLE: Style = Style::new().add_modifier(Modifier::BOLD);

/// Extra style for food that is about to vanish
pub(crate) const FOOD_VANISHING_STYLE: Style = Style::new().add_modifier(Modifier::SLOW_BLINK);

/// Style for the score shown in the sidebar
pub(crate) const SCORE_STYLE: Style = Style::new()
    .fg(Color::Yellow)
    .add_modifier(Modifier::BOLD);

/// Style for point values in the sidebar's food legend
pub(crate) const POINTS_STYLE: Style = Style::new().fg(Color::Yellow);

/// Style for the "GAME OVER" headline
pub(crate) const GAME_OVER_STYLE: Style = Style::new().fg(Color::LightRed).add_modifier(Modifier::BOLD);

/// Style for key codes shown in the interface
pub(crate) const KEY_STYLE: Style = Style::new().fg(Color::Yellow);
