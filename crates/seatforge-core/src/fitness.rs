use crate::attendees::Roster;
use crate::config::FitnessWeights;
use crate::core_types::SeatPos;
use crate::error::SeatResult;
use crate::venue::Venue;
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Four normalized sub-scores plus their weighted total, all in [0, 1].
/// A sub-score whose category is empty (no friendships, no VIPs, no
/// multi-member groups) reports a neutral 1.0.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Fitness {
    pub friend_proximity: f32,
    pub vip_placement: f32,
    pub group_cohesion: f32,
    pub stage_distance: f32,
    pub total: f32,
}

/// Pure scoring function over an assignment. Holds the immutable indices
/// for one optimization call; never touches an RNG.
pub struct Evaluator<'a> {
    venue: &'a Venue,
    roster: &'a Roster,
    weights: FitnessWeights,
}

impl<'a> Evaluator<'a> {
    pub fn new(venue: &'a Venue, roster: &'a Roster, weights: &FitnessWeights) -> SeatResult<Self> {
        Ok(Evaluator {
            venue,
            roster,
            weights: weights.normalized()?,
        })
    }

    #[inline]
    pub fn venue(&self) -> &Venue {
        self.venue
    }

    #[inline]
    pub fn roster(&self) -> &Roster {
        self.roster
    }

    pub fn evaluate(&self, assignment: &[SeatPos]) -> Fitness {
        let friend_proximity = self.friend_proximity(assignment);
        let vip_placement = self.vip_placement(assignment);
        let group_cohesion = self.group_cohesion(assignment);
        let stage_distance = self.stage_distance(assignment);

        let w = &self.weights;
        let total = friend_proximity * w.friend
            + vip_placement * w.vip
            + group_cohesion * w.group
            + stage_distance * w.distance;

        Fitness {
            friend_proximity,
            vip_placement,
            group_cohesion,
            stage_distance,
            total,
        }
    }

    /// Awards each directed friendship pair by seat distance:
    /// adjacent 10, distance 2 -> 7, within 4 -> 4, then a fading tail.
    fn friend_proximity(&self, assignment: &[SeatPos]) -> f32 {
        let mut score = 0.0f32;
        let mut max = 0.0f32;

        for (i, friends) in self.roster.friendships.iter().enumerate() {
            for &j in friends {
                let d = self.venue.manhattan(assignment[i], assignment[j]);
                score += match d {
                    1 => 10.0,
                    2 => 7.0,
                    3 | 4 => 4.0,
                    _ => (2.0 - 0.1 * d as f32).max(0.0),
                };
                max += 10.0;
            }
        }

        normalize(score, max)
    }

    /// VIP seats score full marks; otherwise credit decays with the row.
    /// Regular attendees neither score nor widen the denominator.
    fn vip_placement(&self, assignment: &[SeatPos]) -> f32 {
        let mut score = 0.0f32;
        let mut max = 0.0f32;

        for (i, &pos) in assignment.iter().enumerate() {
            if !self.roster.is_vip(i) {
                continue;
            }
            let seat = self.venue.seat(pos);
            score += if seat.is_vip {
                20.0
            } else {
                (10.0 - 2.0 * seat.row as f32).max(0.0)
            };
            max += 20.0;
        }

        normalize(score, max)
    }

    /// Per group of m >= 2: 2 points per adjacent pair, 1 per distance-2
    /// pair, scaled against an (m-1)*2 normalizer and capped at 10m.
    fn group_cohesion(&self, assignment: &[SeatPos]) -> f32 {
        let mut score = 0.0f32;
        let mut max = 0.0f32;

        for members in self.roster.groups.values() {
            let m = members.len();
            if m < 2 {
                continue;
            }

            let mut points = 0.0f32;
            for (&a, &b) in members.iter().tuple_combinations() {
                match self.venue.manhattan(assignment[a], assignment[b]) {
                    1 => points += 2.0,
                    2 => points += 1.0,
                    _ => {}
                }
            }

            let cap = 10.0 * m as f32;
            let normalizer = ((m - 1) * 2).max(1) as f32;
            score += (points / normalizer * cap).min(cap);
            max += cap;
        }

        normalize(score, max)
    }

    /// Priority-weighted stage nearness: attendee with priority p earns up
    /// to p points, scaled linearly by closeness to the stage.
    fn stage_distance(&self, assignment: &[SeatPos]) -> f32 {
        let mut score = 0.0f32;
        let mut max = 0.0f32;

        for (i, &pos) in assignment.iter().enumerate() {
            let cap = self.roster.priority(i) as f32;
            let seat = self.venue.seat(pos);
            let closeness = 1.0 - seat.distance_to_stage / self.venue.max_distance;
            score += (closeness * cap).max(0.0);
            max += cap;
        }

        normalize(score, max)
    }
}

#[inline]
fn normalize(score: f32, max: f32) -> f32 {
    if max > 0.0 {
        score / max
    } else {
        1.0
    }
}
