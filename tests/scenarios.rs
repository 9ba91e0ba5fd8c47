use bounded_dp::problems::{
    min_subset::solve_min,
    step_count::{count, count_windowed},
    subset_sum::{solve, SubsetOutcome},
};
use bounded_dp::DpError;

#[test]
fn duplicate_weights_reach_four() {
    let weights = [1, 3, 2, 2, 1];
    let sel = solve(&weights, 4).unwrap().into_selection().unwrap();
    let sum: i64 = sel.indices.iter().map(|&i| weights[i - 1]).sum();
    assert_eq!(sum, 4);
    assert_eq!(sel.indices, vec![1, 2]);
}

#[test]
fn equal_weights_cannot_reach_one() {
    assert_eq!(solve(&[5, 5, 5], 1).unwrap(), SubsetOutcome::NoSolution);
    assert_eq!(solve_min(&[5, 5, 5], 1).unwrap(), SubsetOutcome::NoSolution);
}

#[test]
fn every_card_used() {
    let sel = solve(&[2, 2, 3], 7).unwrap().into_selection().unwrap();
    assert_eq!(sel.indices, vec![1, 2, 3]);
}

#[test]
fn three_and_four_steps_to_eleven() {
    assert_eq!(count(11, &[3, 4]).unwrap(), 3);
    assert_eq!(count_windowed(11, &[3, 4]).unwrap(), 3);
}

#[test]
fn two_three_four_steps_to_seven() {
    // 3+4, 4+3, 2+2+3, 2+3+2, 3+2+2
    assert_eq!(count(7, &[2, 3, 4]).unwrap(), 5);
    assert_eq!(count_windowed(7, &[2, 3, 4]).unwrap(), 5);
}

#[test]
fn no_solution_is_not_an_error_but_bad_input_is() {
    assert!(solve(&[5], 1).is_ok());
    assert!(matches!(solve(&[5, -5], 0), Err(DpError::Precondition(_))));
}
