use crate::attendees::{Roster, ZonePreference};
use crate::core_types::{Assignment, SeatPos};
use crate::venue::Venue;
use fastrand::Rng;
use std::cmp::Reverse;

/// Uniform random assignment: shuffle every seat position and keep a prefix.
pub fn random_assignment(rng: &mut Rng, venue: &Venue, count: usize) -> Assignment {
    let mut positions: Vec<SeatPos> = (0..venue.seat_count()).collect();
    rng.shuffle(&mut positions);
    positions.truncate(count);
    positions
}

/// Priority-ordered greedy placement: VIPs first, then higher priority,
/// then larger groups; each attendee takes the free seat with the best
/// local score, first seat winning ties.
pub fn greedy_assignment(venue: &Venue, roster: &Roster) -> Assignment {
    let n = roster.len();

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by_key(|&i| {
        (
            Reverse(roster.is_vip(i)),
            Reverse(roster.priority(i)),
            Reverse(roster.group_size(i)),
        )
    });

    let mut assignment = vec![usize::MAX; n];
    let mut taken = vec![false; venue.seat_count()];

    for &i in &order {
        let mut best: Option<(SeatPos, f32)> = None;
        let mut first_free = None;

        for pos in 0..venue.seat_count() {
            if taken[pos] {
                continue;
            }
            if first_free.is_none() {
                first_free = Some(pos);
            }
            let score = seat_score(venue, roster, &assignment, i, pos);
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((pos, score));
            }
        }

        // A scanned free seat always produces a score; the fallback only
        // matters if that ever stops holding.
        let pos = best
            .map(|(p, _)| p)
            .or(first_free)
            .expect("greedy placement ran out of seats");
        assignment[i] = pos;
        taken[pos] = true;
    }

    assignment
}

fn seat_score(
    venue: &Venue,
    roster: &Roster,
    placed: &[SeatPos],
    attendee: usize,
    pos: SeatPos,
) -> f32 {
    let seat = venue.seat(pos);
    let mut score = 0.0f32;

    if roster.is_vip(attendee) {
        score += if seat.is_vip { 200.0 } else { -100.0 };
    }

    let priority = roster.priority(attendee) as f32;
    score += (200.0 * priority / 10.0) / (seat.distance_to_stage + 1.0);

    let row = seat.row as f32;
    let third = venue.rows as f32 / 3.0;
    let zone_hit = match roster.attendees[attendee].preference {
        ZonePreference::Front => row < third,
        ZonePreference::Middle => row >= third && row < 2.0 * third,
        ZonePreference::Back => row >= 2.0 * third,
        ZonePreference::Any => false,
    };
    if zone_hit {
        score += 50.0;
    }

    for &friend in &roster.friendships[attendee] {
        if placed[friend] != usize::MAX {
            let d = venue.manhattan(pos, placed[friend]) as f32;
            score += (100.0 - 20.0 * d).max(0.0);
        }
    }

    score
}
