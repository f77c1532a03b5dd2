use crate::attendees::{Attendee, Roster};
use crate::core_types::SeatPos;
use crate::error::{SeatResult, SeatingError};
use crate::venue::Venue;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannedSeat {
    pub row: usize,
    pub col: usize,
    /// Row letter, 'A' for the front row.
    pub row_label: String,
    /// 1-based seat number within the row.
    pub seat_number: usize,
    pub is_vip: bool,
    /// Display id, e.g. "B7". External contract for tickets and charts.
    pub seat_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanEntry {
    pub attendee: Attendee,
    pub seat: PlannedSeat,
}

/// Decodes an assignment into display rows, one per attendee in input
/// order. Reading `seat.row` / `seat.col` back recovers the assignment.
pub fn seating_plan(
    venue: &Venue,
    roster: &Roster,
    assignment: &[SeatPos],
) -> SeatResult<Vec<PlanEntry>> {
    if assignment.len() != roster.len() {
        return Err(SeatingError::Config(format!(
            "assignment covers {} attendees, roster has {}",
            assignment.len(),
            roster.len()
        )));
    }

    assignment
        .iter()
        .enumerate()
        .map(|(i, &pos)| {
            if pos >= venue.seat_count() {
                return Err(SeatingError::Config(format!(
                    "seat position {} outside venue of {} seats",
                    pos,
                    venue.seat_count()
                )));
            }
            let seat = venue.seat(pos);
            let row_label = char::from_u32('A' as u32 + seat.row as u32)
                .unwrap_or('?')
                .to_string();
            let seat_number = seat.col + 1;
            Ok(PlanEntry {
                attendee: roster.attendees[i].clone(),
                seat: PlannedSeat {
                    row: seat.row,
                    col: seat.col,
                    seat_id: format!("{}{}", row_label, seat_number),
                    row_label,
                    seat_number,
                    is_vip: seat.is_vip,
                },
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attendees::{AttendeeKind, ZonePreference};

    fn roster(n: usize) -> Roster {
        Roster::new(
            (0..n)
                .map(|i| Attendee {
                    id: Some(format!("guest-{}", i)),
                    kind: AttendeeKind::Regular,
                    group: None,
                    preference: ZonePreference::Any,
                    priority: 5,
                })
                .collect(),
        )
    }

    #[test]
    fn test_seat_ids_letter_plus_number() {
        let venue = Venue::new(3, 8, 1).unwrap();
        let roster = roster(3);
        let plan = seating_plan(&venue, &roster, &[0, 14, 17]).unwrap();

        assert_eq!(plan[0].seat.seat_id, "A1");
        assert_eq!(plan[1].seat.seat_id, "B7");
        assert_eq!(plan[2].seat.seat_id, "C2");
        assert!(plan[0].seat.is_vip);
        assert!(!plan[2].seat.is_vip);
    }

    #[test]
    fn test_round_trip_recovers_assignment() {
        let venue = Venue::new(5, 6, 2).unwrap();
        let roster = roster(7);
        let assignment = vec![3, 29, 11, 0, 17, 25, 8];

        let plan = seating_plan(&venue, &roster, &assignment).unwrap();
        let recovered: Vec<usize> = plan
            .iter()
            .map(|e| e.seat.row * venue.cols + e.seat.col)
            .collect();
        assert_eq!(recovered, assignment);
    }

    #[test]
    fn test_rejects_out_of_range_positions() {
        let venue = Venue::new(2, 2, 0).unwrap();
        let roster = roster(1);
        assert!(seating_plan(&venue, &roster, &[4]).is_err());
        assert!(seating_plan(&venue, &roster, &[0, 1]).is_err());
    }
}
