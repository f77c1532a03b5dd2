use crate::core_types::SeatPos;
use crate::error::{SeatResult, SeatingError};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seat {
    pub row: usize,
    pub col: usize,
    pub is_vip: bool,
    /// Euclidean distance to a stage point one row in front of row 0,
    /// centered on the columns.
    pub distance_to_stage: f32,
}

/// Immutable seat grid. Seats are indexed row-major: seat `r * cols + c`
/// sits at row `r`, column `c`. The top `vip_rows` rows are VIP seats.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Venue {
    pub rows: usize,
    pub cols: usize,
    pub vip_rows: usize,
    pub seats: Vec<Seat>,
    /// Normalization constant for stage-distance scores.
    pub max_distance: f32,
}

impl Venue {
    pub fn new(rows: usize, cols: usize, vip_rows: usize) -> SeatResult<Self> {
        if rows == 0 || cols == 0 {
            return Err(SeatingError::Config(format!(
                "venue must have at least one row and one column (got {}x{})",
                rows, cols
            )));
        }
        if vip_rows > rows {
            return Err(SeatingError::Config(format!(
                "vip_rows ({}) exceeds row count ({})",
                vip_rows, rows
            )));
        }

        let center = cols as f32 / 2.0;
        let mut seats = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for col in 0..cols {
                let dy = (row + 1) as f32;
                let dx = col as f32 - center;
                seats.push(Seat {
                    row,
                    col,
                    is_vip: row < vip_rows,
                    distance_to_stage: (dy * dy + dx * dx).sqrt(),
                });
            }
        }

        let max_distance = (((rows + 1) * (rows + 1)) as f32 + center * center).sqrt();

        Ok(Venue {
            rows,
            cols,
            vip_rows,
            seats,
            max_distance,
        })
    }

    #[inline]
    pub fn seat_count(&self) -> usize {
        self.seats.len()
    }

    #[inline]
    pub fn seat(&self, pos: SeatPos) -> &Seat {
        &self.seats[pos]
    }

    /// Manhattan distance between two seat positions.
    #[inline]
    pub fn manhattan(&self, a: SeatPos, b: SeatPos) -> usize {
        let sa = &self.seats[a];
        let sb = &self.seats[b];
        sa.row.abs_diff(sb.row) + sa.col.abs_diff(sb.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_major_indexing() {
        let venue = Venue::new(4, 6, 1).unwrap();
        for r in 0..4 {
            for c in 0..6 {
                let seat = venue.seat(r * 6 + c);
                assert_eq!((seat.row, seat.col), (r, c));
            }
        }
    }

    #[test]
    fn test_vip_rows_are_the_front_rows() {
        let venue = Venue::new(5, 4, 2).unwrap();
        for seat in &venue.seats {
            assert_eq!(seat.is_vip, seat.row < 2);
        }
    }

    #[test]
    fn test_stage_distance_grows_with_row() {
        let venue = Venue::new(6, 5, 0).unwrap();
        // Same column, deeper row is always further from the stage.
        for r in 0..5 {
            let near = venue.seat(r * 5 + 2).distance_to_stage;
            let far = venue.seat((r + 1) * 5 + 2).distance_to_stage;
            assert!(far > near);
        }
        // All distances fit under the normalization constant.
        for seat in &venue.seats {
            assert!(seat.distance_to_stage < venue.max_distance);
        }
    }

    #[test]
    fn test_manhattan_metric() {
        let venue = Venue::new(4, 4, 0).unwrap();
        assert_eq!(venue.manhattan(0, 0), 0);
        assert_eq!(venue.manhattan(0, 1), 1);
        assert_eq!(venue.manhattan(0, 5), 2); // (0,0) -> (1,1)
        assert_eq!(venue.manhattan(3, 12), 6); // (0,3) -> (3,0)
    }

    #[test]
    fn test_rejects_degenerate_shapes() {
        assert!(Venue::new(0, 5, 0).is_err());
        assert!(Venue::new(5, 0, 0).is_err());
        assert!(Venue::new(3, 3, 4).is_err());
    }
}
