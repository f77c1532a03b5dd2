use crate::attendees::Roster;
use crate::consts::BLOCK_SWAP_RATE;
use crate::core_types::SeatPos;
use crate::fitness::Fitness;
use crate::optimizer::is_valid_assignment;
use crate::venue::Venue;
use fastrand::Rng;

/// Effective mutation rate for a generation: the base rate scaled up by
/// `1 + e^(-gen/20)` so early generations explore more, capped at 1.
pub fn adaptive_rate(base: f32, generation: usize) -> f32 {
    (base * (1.0 + (-(generation as f32) / 20.0).exp())).min(1.0)
}

/// Swaps two uniformly chosen positions.
pub fn swap_mutation(genes: &mut [SeatPos], rng: &mut Rng) {
    if genes.len() < 2 {
        return;
    }
    let a = rng.usize(0..genes.len());
    let b = rng.usize(0..genes.len());
    genes.swap(a, b);
}

/// Exchanges two equally sized blocks (length 2..=6) by copy. Overlapping
/// blocks would duplicate seats, so the result is validated and the swap
/// reverted when it breaks the assignment. Returns whether it stuck.
pub fn block_swap_mutation(genes: &mut Vec<SeatPos>, seat_count: usize, rng: &mut Rng) -> bool {
    let n = genes.len();
    if n < 2 {
        return false;
    }
    let len = rng.usize(2..=n.min(6));
    let s1 = rng.usize(0..=n - len);
    let s2 = rng.usize(0..=n - len);
    if s1 == s2 {
        return false;
    }

    let snapshot = genes.clone();
    let b1: Vec<SeatPos> = genes[s1..s1 + len].to_vec();
    let b2: Vec<SeatPos> = genes[s2..s2 + len].to_vec();
    genes[s1..s1 + len].copy_from_slice(&b2);
    genes[s2..s2 + len].copy_from_slice(&b1);

    if !is_valid_assignment(genes, seat_count) {
        *genes = snapshot;
        return false;
    }
    true
}

/// Standard mutation step: with the adaptive rate, swap two positions and
/// occasionally attempt a block swap on top.
pub fn mutate(
    genes: &mut Vec<SeatPos>,
    seat_count: usize,
    base_rate: f32,
    generation: usize,
    rng: &mut Rng,
) {
    if rng.f32() < adaptive_rate(base_rate, generation) {
        swap_mutation(genes, rng);
        if rng.f32() < BLOCK_SWAP_RATE {
            block_swap_mutation(genes, seat_count, rng);
        }
    }
}

/// Fitness-guided repair: when friend proximity lags, pull one far friend
/// next to the other; failing that, when VIP placement lags, trade a
/// displaced VIP with a regular sitting in a VIP seat. At most one swap.
pub fn smart_mutation(genes: &mut [SeatPos], venue: &Venue, roster: &Roster, fitness: &Fitness) {
    if fitness.friend_proximity < 0.7 && improve_friend_proximity(genes, venue, roster) {
        return;
    }
    if fitness.vip_placement < 0.8 {
        if let Some((a, b)) = vip_swap_pair(genes, venue, roster) {
            genes.swap(a, b);
        }
    }
}

/// Finds a friendship pair seated more than 3 apart, then a third attendee
/// adjacent to the first of them, and swaps that neighbor with the far
/// friend. Scans in attendee-index order so results are reproducible.
fn improve_friend_proximity(genes: &mut [SeatPos], venue: &Venue, roster: &Roster) -> bool {
    let n = genes.len();
    for i in 0..n {
        for &j in &roster.friendships[i] {
            if j <= i || venue.manhattan(genes[i], genes[j]) <= 3 {
                continue;
            }
            for k in 0..n {
                if k == i || k == j {
                    continue;
                }
                if venue.manhattan(genes[k], genes[i]) == 1 {
                    genes.swap(k, j);
                    return true;
                }
            }
        }
    }
    false
}

/// First VIP stuck in a regular seat paired with the first regular seated
/// in a VIP seat. Shared by smart mutation and the annealer's weak-area
/// targeting.
pub fn vip_swap_pair(genes: &[SeatPos], venue: &Venue, roster: &Roster) -> Option<(usize, usize)> {
    let displaced = (0..genes.len()).find(|&i| roster.is_vip(i) && !venue.seat(genes[i]).is_vip)?;
    let usurper = (0..genes.len()).find(|&i| !roster.is_vip(i) && venue.seat(genes[i]).is_vip)?;
    Some((displaced, usurper))
}
