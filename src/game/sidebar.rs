use super::food::FoodKind;
use crate::consts;
use crate::util::EnumExt;
use enum_map::Enum;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{
        block::{Block, Padding},
        Borders, Widget,
    },
};

/// A widget for the panel to the left of the playing field, showing the
/// scores and what each kind of food is worth
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Sidebar {
    pub(super) score: u32,
    pub(super) high_score: u32,
}

impl Sidebar {
    /// The minimum height needed to show everything in the sidebar
    #[allow(clippy::cast_possible_truncation)]
    pub(super) const HEIGHT: u16 = 5 + FoodKind::LENGTH as u16;
}

impl Widget for Sidebar {
    /*
     *
     *   Score: 12        │
     *   High:  40        │
     *                    │
     *   Food:            │
     *     ♣ = 1          │
     *     ♦ = 3          │
     *     ♥ = 5          │
     *     ★ = 7          │
     */

    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::new()
            .borders(Borders::RIGHT)
            .padding(Padding::new(2, 0, 1, 0));
        let inner = block.inner(area);
        block.render(area, buf);
        let lines = [
            Line::from(Span::styled(
                format!("Score: {}", self.score),
                consts::SCORE_STYLE,
            )),
            Line::from(format!("High:  {}", self.high_score)),
            Line::default(),
            Line::from("Food:"),
        ]
        .into_iter()
        .chain(FoodKind::iter().map(legend_line));
        for (line, row) in lines.zip(inner.rows()) {
            line.render(row, buf);
        }
    }
}

fn legend_line(kind: FoodKind) -> Line<'static> {
    Line::from_iter([
        Span::raw("  "),
        Span::styled(kind.symbol().to_string(), kind.style()),
        Span::raw(" = "),
        Span::styled(kind.value().to_string(), consts::POINTS_STYLE),
    ])
}
