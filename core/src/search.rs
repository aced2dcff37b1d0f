// Diagonal staircase search for the nearest anchor value.
//
// A probe leaves its start cell along one axis, then steps back diagonally
// toward that axis, then extends the axis by one more step, and so on. The
// probes sweep one quadrant in growing staircases until they land on a
// registered feature or leave the interior.

use crate::grid::Grid;

// The four sweeps, named for the quadrant they cover with row 0 on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    LowerRight,
    UpperRight,
    UpperLeft,
    LowerLeft,
}

impl Direction {
    // Blend order used by the interpolation pass.
    pub const ALL: [Direction; 4] = [
        Direction::LowerRight,
        Direction::UpperRight,
        Direction::UpperLeft,
        Direction::LowerLeft,
    ];

    // Unit step along the axis that anchors the staircase.
    pub fn axis_step(self) -> (isize, isize) {
        match self {
            Direction::LowerRight => (0, 1),
            Direction::UpperRight => (1, 0),
            Direction::UpperLeft => (0, -1),
            Direction::LowerLeft => (-1, 0),
        }
    }

    // Diagonal step that carries the probe back toward the start row or column.
    pub fn diagonal_step(self) -> (isize, isize) {
        match self {
            Direction::LowerRight => (1, -1),
            Direction::UpperRight => (-1, -1),
            Direction::UpperLeft => (-1, 1),
            Direction::LowerLeft => (1, 1),
        }
    }
}

// Where a search stopped and what it found there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Probe {
    pub x: usize,
    pub y: usize,
    pub elevation: f32,
    pub distance: f32,
}

// Walk from an interior start cell until a feature or the boundary is hit.
//
// The walk only stops on a boundary cell or a feature, so the reported
// elevation is always a final value. When the stopping cell shares the start
// row or column the distance is the staircase step count, otherwise it is
// the Euclidean distance.
pub fn find_closest_feature(
    grid: &Grid,
    direction: Direction,
    start_x: usize,
    start_y: usize,
) -> Probe {
    let (sx, sy) = (start_x as isize, start_y as isize);
    let (ax, ay) = direction.axis_step();
    let (dx, dy) = direction.diagonal_step();

    // Vertical axes return along y, horizontal ones along x.
    let on_anchor = |x: isize, y: isize| if ay != 0 { y == sy } else { x == sx };

    let (mut x, mut y) = (sx, sy);
    let mut steps: isize = 0;

    while grid.is_interior(x, y) {
        if on_anchor(x, y) {
            steps += 1;
            x = sx + ax * steps;
            y = sy + ay * steps;
        } else {
            x += dx;
            y += dy;
            // back on the anchor line, extend the axis next round
            if on_anchor(x, y) {
                continue;
            }
        }

        if grid.is_feature(x as usize, y as usize) {
            break;
        }
    }

    let distance = if x == sx || y == sy {
        steps as f32
    } else {
        let ex = (x - sx) as f64;
        let ey = (y - sy) as f64;
        (ex * ex + ey * ey).sqrt() as f32
    };

    let (x, y) = (x as usize, y as usize);
    Probe {
        x,
        y,
        elevation: grid.get(x, y),
        distance,
    }
}
