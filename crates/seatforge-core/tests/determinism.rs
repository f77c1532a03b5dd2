mod common;

use common::{regular, vip};
use seatforge_core::api::{NoProgress, SeatingPlanner};
use seatforge_core::attendees::Attendee;
use seatforge_core::config::{Config, Mode};

fn crowd() -> Vec<Attendee> {
    let mut attendees = vec![vip(10), vip(8)];
    attendees.extend((0..4).map(|_| regular(5, Some("band"))));
    attendees.extend((0..6).map(|i| regular(1 + (i % 10) as u8, None)));
    attendees
}

fn run_once(seed: u64) -> (Vec<usize>, Vec<f32>) {
    let mut planner = SeatingPlanner::new(Config {
        mode: Mode::Fast,
        ..Config::default()
    });
    planner.set_venue(5, 5, 1).unwrap();
    planner.set_attendees(crowd());
    let outcome = planner.optimize(Some(seed), &NoProgress).unwrap();
    (outcome.solution, outcome.history)
}

#[test]
fn test_same_seed_reproduces_solution_and_history() {
    let (sol_a, hist_a) = run_once(4242);
    let (sol_b, hist_b) = run_once(4242);
    assert_eq!(sol_a, sol_b);
    assert_eq!(hist_a, hist_b);
}
