use crate::grid::Grid;
use std::io::{self, Write};

// One line per row; each value as a sign-or-space fixed-point number
// with three decimals, followed by a space.
pub fn write_grid<W: Write>(grid: &Grid, mut out: W) -> io::Result<()> {
    for row in grid.rows() {
        for &v in row {
            if v.is_sign_negative() {
                write!(out, "{:.3} ", v)?;
            } else {
                write!(out, " {:.3} ", v)?;
            }
        }
        writeln!(out)?;
    }
    out.flush()
}
