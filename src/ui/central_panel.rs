//! Central panel: paints the cave one tile per cell and tracks the hovered
//! cell.

use std::sync::Arc;
use parking_lot::RwLock;
use egui::{Color32, Context, Painter, Pos2, Rect, Sense, Vec2};

use crate::cave::{Cell, Grid};
use crate::ui::session::CaveSession;
use crate::ui::TILE_SIZE;

/// Display color of each cell kind.
pub fn cell_color(cell: Cell) -> Color32 {
    match cell {
        Cell::Dead => Color32::BLUE,
        Cell::Alive => Color32::BLACK,
        Cell::Treasure => Color32::YELLOW,
        Cell::Player => Color32::GREEN,
    }
}

pub struct CentralPanel {
    session: Arc<RwLock<CaveSession>>,
}

impl CentralPanel {
    pub fn new(session: Arc<RwLock<CaveSession>>) -> Self {
        Self { session }
    }

    pub fn update(&mut self, ctx: &Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both().show(ui, |ui| {
                let hovered = {
                    let session = self.session.read();
                    let grid = session.engine().grid();
                    let size = Vec2::new(
                        grid.width() as f32 * TILE_SIZE,
                        grid.height() as f32 * TILE_SIZE,
                    );
                    let (response, painter) = ui.allocate_painter(size, Sense::hover());
                    draw_grid(&painter, grid, response.rect.min);
                    response
                        .hover_pos()
                        .map(|pos| screen_to_cell(pos, response.rect.min))
                };

                let mut session = self.session.write();
                match hovered {
                    Some((x, y)) => session.hover(x, y),
                    None => session.hovered = None,
                }
            });
        });
    }
}

fn draw_grid(painter: &Painter, grid: &Grid, origin: Pos2) {
    let tile = Vec2::splat(TILE_SIZE);
    for (x, y) in grid.positions() {
        let min = origin + Vec2::new(x as f32 * TILE_SIZE, y as f32 * TILE_SIZE);
        painter.rect_filled(Rect::from_min_size(min, tile), 0.0, cell_color(grid.at(x, y)));
    }
}

/// Converts a screen position into grid coordinates relative to `origin`.
/// The result may lie past the grid's far edges; the caller checks bounds.
fn screen_to_cell(pos: Pos2, origin: Pos2) -> (usize, usize) {
    let local = pos - origin;
    let x = (local.x / TILE_SIZE).floor().max(0.0) as usize;
    let y = (local.y / TILE_SIZE).floor().max(0.0) as usize;
    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_colors() {
        assert_eq!(cell_color(Cell::Dead), Color32::BLUE);
        assert_eq!(cell_color(Cell::Alive), Color32::BLACK);
        assert_eq!(cell_color(Cell::Treasure), Color32::YELLOW);
        assert_eq!(cell_color(Cell::Player), Color32::GREEN);
    }

    #[test]
    fn test_four_distinct_colors() {
        let colors = [
            cell_color(Cell::Dead),
            cell_color(Cell::Alive),
            cell_color(Cell::Treasure),
            cell_color(Cell::Player),
        ];
        for i in 0..colors.len() {
            for j in i + 1..colors.len() {
                assert_ne!(colors[i], colors[j]);
            }
        }
    }

    #[test]
    fn test_screen_to_cell() {
        let origin = Pos2::new(10.0, 20.0);
        assert_eq!(screen_to_cell(Pos2::new(10.0, 20.0), origin), (0, 0));
        assert_eq!(
            screen_to_cell(Pos2::new(10.0 + TILE_SIZE * 3.5, 20.0 + TILE_SIZE), origin),
            (3, 1)
        );
        assert_eq!(screen_to_cell(Pos2::new(0.0, 0.0), origin), (0, 0));
    }
}
