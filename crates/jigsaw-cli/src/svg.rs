//! SVG sheet rendering.
//!
//! One renderer serves both variants: thick boundary segments are drawn
//! wherever two adjacent cells belong to different regions, which reduces to
//! ordinary box lines on the mini grid.

use jigsaw_core::{Difficulty, Grid, Position, RegionMap};

const CELL: usize = 50;
const MARGIN: usize = 24;
const TOP: usize = 10;
const BOTTOM: usize = 24;

/// Render one grid as a standalone SVG document. Empty cells stay blank, so
/// the same call renders puzzle sheets and solution sheets.
pub fn render(grid: &Grid, regions: &RegionMap, difficulty: Difficulty, puzzle_id: &str) -> String {
    let size = grid.size();
    let width = MARGIN * 2 + size * CELL;
    let height = TOP + MARGIN + size * CELL + BOTTOM;
    let left = MARGIN;
    let top = TOP + MARGIN;

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns='http://www.w3.org/2000/svg' width='{w}' height='{h}' viewBox='0 0 {w} {h}'>\n",
        w = width,
        h = height,
    ));
    svg.push_str(
        "<style> .num{font-family:Arial; font-size:22px;} \
         .id{font-family:Arial; font-size:10px; fill:gray;} </style>\n",
    );

    // Unit cell lines; the outer border is drawn thick.
    for r in 0..=size {
        let y = top + r * CELL;
        let stroke = if r == 0 || r == size { 3 } else { 1 };
        svg.push_str(&format!(
            "<line x1='{x1}' y1='{y}' x2='{x2}' y2='{y}' stroke='black' stroke-width='{s}' />\n",
            x1 = left,
            x2 = left + size * CELL,
            y = y,
            s = stroke,
        ));
    }
    for c in 0..=size {
        let x = left + c * CELL;
        let stroke = if c == 0 || c == size { 3 } else { 1 };
        svg.push_str(&format!(
            "<line x1='{x}' y1='{y1}' x2='{x}' y2='{y2}' stroke='black' stroke-width='{s}' />\n",
            x = x,
            y1 = top,
            y2 = top + size * CELL,
            s = stroke,
        ));
    }

    // Region boundaries between horizontally adjacent cells.
    for row in 0..size {
        for col in 0..size - 1 {
            let here = regions.region_of(Position::new(row, col));
            let right = regions.region_of(Position::new(row, col + 1));
            if here != right {
                let x = left + (col + 1) * CELL;
                let y = top + row * CELL;
                svg.push_str(&format!(
                    "<line x1='{x}' y1='{y1}' x2='{x}' y2='{y2}' stroke='black' stroke-width='3' />\n",
                    x = x,
                    y1 = y,
                    y2 = y + CELL,
                ));
            }
        }
    }
    // Region boundaries between vertically adjacent cells.
    for row in 0..size - 1 {
        for col in 0..size {
            let here = regions.region_of(Position::new(row, col));
            let below = regions.region_of(Position::new(row + 1, col));
            if here != below {
                let x = left + col * CELL;
                let y = top + (row + 1) * CELL;
                svg.push_str(&format!(
                    "<line x1='{x1}' y1='{y}' x2='{x2}' y2='{y}' stroke='black' stroke-width='3' />\n",
                    x1 = x,
                    x2 = x + CELL,
                    y = y,
                ));
            }
        }
    }

    for row in 0..size {
        for col in 0..size {
            let symbol = grid.get(Position::new(row, col));
            if symbol == 0 {
                continue;
            }
            let cx = left + col * CELL + CELL / 2;
            let cy = top + row * CELL + CELL / 2 + 7;
            svg.push_str(&format!(
                "<text x='{cx}' y='{cy}' class='num' text-anchor='middle'>{v}</text>\n",
                cx = cx,
                cy = cy,
                v = symbol,
            ));
        }
    }

    svg.push_str(&format!(
        "<text x='{x}' y='{y}' class='id' text-anchor='start'>ID: {id} - {name}</text>\n",
        x = MARGIN,
        y = height - 6,
        id = puzzle_id,
        name = difficulty.name(),
    ));
    svg.push_str("</svg>\n");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;
    use jigsaw_core::BoxShape;

    #[test]
    fn test_box_grid_boundary_count() {
        let regions = RegionMap::boxes(6, BoxShape::new(2, 3));
        let grid = Grid::empty(6);
        let difficulty = Difficulty::new(3).unwrap();
        let svg = render(&grid, &regions, difficulty, "TESTID00");

        // 2x3 boxes on a 6x6 grid: one interior vertical boundary crossed by
        // 6 rows, two interior horizontal boundaries crossed by 6 columns
        // each, plus the 4 thick border lines.
        let thick = svg.matches("stroke-width='3'").count();
        assert_eq!(thick, 6 + 12 + 4);
    }

    #[test]
    fn test_renders_every_clue_and_the_caption() {
        let regions = RegionMap::boxes(6, BoxShape::new(2, 3));
        let grid = Grid::from_string(6, "123456456123231564564231312645645312").unwrap();
        let difficulty = Difficulty::new(2).unwrap();
        let svg = render(&grid, &regions, difficulty, "ABCD1234");

        assert_eq!(svg.matches("class='num'").count(), 36);
        assert!(svg.contains("ID: ABCD1234"));
        assert!(svg.contains(difficulty.name()));
    }

    #[test]
    fn test_empty_cells_are_blank() {
        let regions = RegionMap::boxes(6, BoxShape::new(2, 3));
        let mut grid = Grid::from_string(6, "123456456123231564564231312645645312").unwrap();
        grid.clear(Position::new(0, 0));
        let svg = render(&grid, &regions, Difficulty::new(1).unwrap(), "ABCD1234");
        assert_eq!(svg.matches("class='num'").count(), 35);
    }
}
