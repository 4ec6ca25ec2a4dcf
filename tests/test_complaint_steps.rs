//! Tests for the complaint status stepper derivation: a pure function from
//! the status enum to the ordered completed/current flags per step.

mod common;

use common::*;

fn flags(status: ComplaintStatus) -> Vec<(bool, bool)> {
    status
        .steps()
        .iter()
        .map(|s| (s.completed, s.current))
        .collect()
}

#[test]
fn submitted_marks_only_the_first_step() {
    assert_eq!(
        flags(ComplaintStatus::Submitted),
        vec![(true, true), (false, false), (false, false), (false, false)]
    );
}

#[test]
fn under_review_marks_the_first_two_steps() {
    assert_eq!(
        flags(ComplaintStatus::UnderReview),
        vec![(true, false), (true, true), (false, false), (false, false)]
    );
}

#[test]
fn assigned_marks_steps_zero_through_two() {
    // Steps 0-2 completed, step 2 current, step 3 neither.
    assert_eq!(
        flags(ComplaintStatus::Assigned),
        vec![(true, false), (true, false), (true, true), (false, false)]
    );
}

#[test]
fn resolved_completes_every_step() {
    assert_eq!(
        flags(ComplaintStatus::Resolved),
        vec![(true, false), (true, false), (true, false), (true, true)]
    );
}

#[test]
fn step_labels_follow_the_fixed_order() {
    let labels: Vec<&str> = ComplaintStatus::Submitted
        .steps()
        .iter()
        .map(|s| s.label)
        .collect();
    assert_eq!(labels, vec!["Submitted", "Under Review", "Assigned", "Resolved"]);
}

#[test]
fn status_ordering_matches_the_stepper() {
    assert!(ComplaintStatus::Submitted < ComplaintStatus::UnderReview);
    assert!(ComplaintStatus::UnderReview < ComplaintStatus::Assigned);
    assert!(ComplaintStatus::Assigned < ComplaintStatus::Resolved);
    for (i, status) in ComplaintStatus::ALL.iter().enumerate() {
        assert_eq!(status.index(), i);
    }
}
