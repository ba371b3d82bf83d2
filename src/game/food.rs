use crate::consts;
use enum_map::Enum;
use ratatui::{
    layout::Position,
    style::{Color, Style},
};

/// The kinds of food that can appear on the board.  Rarer-looking food is not
/// actually rarer; each kind is equally likely.
#[derive(Clone, Copy, Debug, Enum, Eq, PartialEq)]
pub(crate) enum FoodKind {
    Clover,
    Diamond,
    Heart,
    Star,
}

impl FoodKind {
    pub(crate) fn symbol(self) -> char {
        match self {
            FoodKind::Clover => '♣',
            FoodKind::Diamond => '♦',
            FoodKind::Heart => '♥',
            FoodKind::Star => '★',
        }
    }

    /// The number of points awarded for eating this food
    pub(crate) fn value(self) -> u32 {
        match self {
            FoodKind::Clover => 1,
            FoodKind::Diamond => 3,
            FoodKind::Heart => 5,
            FoodKind::Star => 7,
        }
    }

    pub(crate) fn style(self) -> Style {
        let color = match self {
            FoodKind::Clover => Color::LightGreen,
            FoodKind::Diamond => Color::LightCyan,
            FoodKind::Heart => Color::LightRed,
            FoodKind::Star => Color::LightMagenta,
        };
        Style::new().fg(color)
    }
}

/// A piece of food sitting on the board
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Food {
    pub(crate) position: Position,
    pub(crate) kind: FoodKind,
    /// Number of ticks remaining before the food vanishes
    pub(crate) ticks_left: u32,
}

impl Food {
    /// Return the style to draw the food with, getting more urgent as the food
    /// nears the end of its life
    pub(crate) fn style(&self) -> Style {
        let style = self.kind.style();
        if self.ticks_left < consts::MIN_FOOD_TICKS / 3 {
            style.patch(consts::FOOD_VANISHING_STYLE)
        } else if self.ticks_left < consts::MIN_FOOD_TICKS / 2 {
            style.patch(consts::FOOD_FADING_STYLE)
        } else {
            style
        }
    }
}

/// The board's single food slot
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum FoodSlot {
    /// There is food on the board
    Visible(Food),

    /// The last food vanished uneaten; new food appears after the given
    /// number of ticks
    Respawning { ticks_left: u32 },
}

impl FoodSlot {
    pub(crate) fn visible(&self) -> Option<&Food> {
        match self {
            FoodSlot::Visible(food) => Some(food),
            FoodSlot::Respawning { .. } => None,
        }
    }
}
