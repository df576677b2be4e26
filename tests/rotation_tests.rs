use hostrota::core::allocator::{find_slot, find_slot_from};
use hostrota::core::rotation::RotationLogic;
use hostrota::core::rules::{ChooserPlacement, Rules};
use hostrota::errors::AppError;
use hostrota::models::queue::queue_from_names;
use hostrota::models::{AttendanceStatus, Member, QueueEntry};
use std::collections::HashMap;

fn standing(active: bool) -> AttendanceStatus {
    let mut s = AttendanceStatus::empty();
    s.tenure = 3;
    s.total_watched = if active { 1 } else { 0 };
    s.active = active;
    s
}

fn statuses(entries: &[(&str, bool)]) -> HashMap<Member, AttendanceStatus> {
    entries
        .iter()
        .map(|(name, active)| (Member::new(name), standing(*active)))
        .collect()
}

fn names(queue: &[QueueEntry]) -> Vec<&str> {
    queue.iter().map(|e| e.member.name.as_str()).collect()
}

// ---------------------------
// Slot allocator
// ---------------------------

#[test]
fn find_slot_takes_the_desired_slot_when_free() {
    let slots: Vec<Option<u8>> = vec![None, None, None];
    assert_eq!(find_slot(&slots, 2).unwrap(), 2);
}

#[test]
fn find_slot_walks_backwards() {
    let slots = vec![None, None, Some(1), Some(2)];
    assert_eq!(find_slot(&slots, 3).unwrap(), 1);
}

#[test]
fn find_slot_clamps_past_the_end() {
    let slots: Vec<Option<u8>> = vec![None, None];
    assert_eq!(find_slot(&slots, 9).unwrap(), 1);
}

#[test]
fn find_slot_fails_when_nothing_is_free() {
    let slots = vec![Some(1), Some(2)];
    let err = find_slot(&slots, 1).unwrap_err();
    assert!(matches!(err, AppError::NoAvailableSlot { desired: 1 }));
    assert!(err.is_fatal_invariant());

    let empty: Vec<Option<u8>> = Vec::new();
    assert!(find_slot(&empty, 0).is_err());
}

#[test]
fn find_slot_from_grows_the_arena() {
    let mut slots = vec![None, Some(1), Some(2)];
    assert_eq!(find_slot_from(&mut slots, 0), 0);
    assert_eq!(find_slot_from(&mut slots, 1), 3);
    assert_eq!(slots.len(), 4);
}

// ---------------------------
// Rotation
// ---------------------------

#[test]
fn greened_member_overtakes_a_misser() {
    // Alice chose, Bob missed, Carol greened
    let current = queue_from_names(&["Alice", "Bob", "Carol"], &[false, false, true]);
    let advance =
        RotationLogic::advance(&current, &HashMap::new(), &Rules::default()).expect("advance");

    assert_eq!(names(&advance.next_queue), ["Carol", "Bob", "Alice"]);
    assert_eq!(advance.chooser.as_ref().map(|c| c.member.name.as_str()), Some("Alice"));
    assert_eq!(advance.chooser_slot, Some(3));

    let bob = &advance.placements[0];
    assert_eq!((bob.desired, bob.assigned), (2, 2));
    let carol = &advance.placements[1];
    assert_eq!((carol.desired, carol.assigned), (2, 1));
}

#[test]
fn everyone_greened_moves_up_one() {
    let current = queue_from_names(&["A", "B", "C", "D"], &[true, true, true, true]);
    let advance =
        RotationLogic::advance(&current, &HashMap::new(), &Rules::default()).expect("advance");

    assert_eq!(names(&advance.next_queue), ["B", "C", "D", "A"]);
    for (slot, entry) in advance.next_queue.iter().enumerate() {
        assert_eq!(entry.slot, slot);
        assert!(!entry.greened);
    }
    assert_eq!(advance.next_queue[0].previous_slot, Some(1));
    assert_eq!(advance.next_queue[3].previous_slot, Some(0));
}

#[test]
fn everyone_missed_keeps_the_order() {
    let current = queue_from_names(&["A", "B", "C", "D"], &[false; 4]);
    let advance =
        RotationLogic::advance(&current, &HashMap::new(), &Rules::default()).expect("advance");

    assert_eq!(names(&advance.next_queue), ["B", "C", "D", "A"]);
    assert_eq!(advance.chooser_slot, Some(5));
}

#[test]
fn inactive_member_is_removed_and_the_rest_shift_up() {
    let current = queue_from_names(&["Alice", "Bob", "Carol", "Dave"], &[true, true, true, true]);

    let with_bob = RotationLogic::advance(
        &current,
        &statuses(&[("Alice", true), ("Bob", true), ("Carol", true), ("Dave", true)]),
        &Rules::default(),
    )
    .expect("advance");
    assert_eq!(names(&with_bob.next_queue), ["Bob", "Carol", "Dave", "Alice"]);

    let without_bob = RotationLogic::advance(
        &current,
        &statuses(&[("Alice", true), ("Bob", false), ("Carol", true), ("Dave", true)]),
        &Rules::default(),
    )
    .expect("advance");
    assert_eq!(names(&without_bob.next_queue), ["Carol", "Dave", "Alice"]);
    assert_eq!(names(&without_bob.removed), ["Bob"]);
}

#[test]
fn inactive_chooser_hands_over_to_the_next_active_member() {
    let current = queue_from_names(&["Alice", "Bob", "Carol"], &[true, true, true]);
    let advance = RotationLogic::advance(
        &current,
        &statuses(&[("Alice", false), ("Bob", true), ("Carol", true)]),
        &Rules::default(),
    )
    .expect("advance");

    assert_eq!(advance.chooser.map(|c| c.member.name), Some("Bob".to_string()));
    assert_eq!(names(&advance.next_queue), ["Carol", "Bob"]);
}

#[test]
fn members_without_status_stay_in_the_rotation() {
    let current = queue_from_names(&["Alice", "Newbie"], &[true, false]);
    let advance = RotationLogic::advance(
        &current,
        &statuses(&[("Alice", true)]),
        &Rules::default(),
    )
    .expect("advance");

    assert_eq!(names(&advance.next_queue), ["Newbie", "Alice"]);
}

#[test]
fn chooser_placement_table() {
    struct Case {
        greened: [bool; 4],
        placement: ChooserPlacement,
        expected: [&'static str; 4],
    }

    let cases = [
        Case {
            greened: [true, true, true, true],
            placement: ChooserPlacement::Last,
            expected: ["B", "C", "D", "A"],
        },
        Case {
            greened: [true, true, true, true],
            placement: ChooserPlacement::FirstOpen,
            expected: ["B", "C", "D", "A"],
        },
        // D missed and takes the tail slot; the chooser still goes behind D
        Case {
            greened: [true, true, true, false],
            placement: ChooserPlacement::Last,
            expected: ["B", "C", "D", "A"],
        },
        Case {
            greened: [true, true, true, false],
            placement: ChooserPlacement::FirstOpen,
            expected: ["B", "C", "D", "A"],
        },
        Case {
            greened: [true, false, true, true],
            placement: ChooserPlacement::FirstOpen,
            expected: ["C", "B", "D", "A"],
        },
    ];

    for case in cases {
        let current = queue_from_names(&["A", "B", "C", "D"], &case.greened);
        let rules = Rules::default().with_placement(case.placement);
        let advance = RotationLogic::advance(&current, &HashMap::new(), &rules).expect("advance");
        assert_eq!(
            names(&advance.next_queue),
            case.expected,
            "{:?} with {:?}",
            case.greened,
            case.placement
        );
    }
}

#[test]
fn chooser_never_lands_ahead_of_a_misser() {
    for placement in [ChooserPlacement::Last, ChooserPlacement::FirstOpen] {
        let rules = Rules::default().with_placement(placement);

        let pair = queue_from_names(&["Alice", "Bob"], &[false, false]);
        let advance = RotationLogic::advance(&pair, &HashMap::new(), &rules).expect("pair");
        assert_eq!(names(&advance.next_queue), ["Bob", "Alice"], "{:?}", placement);

        let three = queue_from_names(&["A", "B", "C"], &[false, true, false]);
        let advance = RotationLogic::advance(&three, &HashMap::new(), &rules).expect("three");
        assert_eq!(names(&advance.next_queue), ["B", "C", "A"], "{:?}", placement);
    }
}

#[test]
fn first_open_reuses_tail_slots_freed_by_removal() {
    let current = queue_from_names(&["Alice", "Bob", "Carol", "Dave"], &[true; 4]);
    let statuses = statuses(&[("Alice", true), ("Bob", false), ("Carol", true), ("Dave", true)]);

    let last = RotationLogic::advance(&current, &statuses, &Rules::default()).expect("last");
    let first_open = RotationLogic::advance(
        &current,
        &statuses,
        &Rules::default().with_placement(ChooserPlacement::FirstOpen),
    )
    .expect("first open");

    assert_eq!(last.chooser_slot, Some(4));
    assert_eq!(first_open.chooser_slot, Some(3));
    assert_eq!(names(&last.next_queue), ["Carol", "Dave", "Alice"]);
    assert_eq!(names(&first_open.next_queue), ["Carol", "Dave", "Alice"]);
}

#[test]
fn input_order_does_not_matter() {
    let mut current = queue_from_names(&["Alice", "Bob", "Carol"], &[false, false, true]);
    current.reverse();
    let advance =
        RotationLogic::advance(&current, &HashMap::new(), &Rules::default()).expect("advance");
    assert_eq!(names(&advance.next_queue), ["Carol", "Bob", "Alice"]);
}

#[test]
fn duplicate_slot_is_fatal() {
    let mut current = queue_from_names(&["Alice", "Bob", "Carol"], &[true; 3]);
    current[2].slot = 1;
    let err = RotationLogic::advance(&current, &HashMap::new(), &Rules::default()).unwrap_err();
    assert!(matches!(err, AppError::ReorderingInconsistency(_)));
    assert!(err.is_fatal_invariant());
}

#[test]
fn duplicate_member_is_fatal() {
    let current = queue_from_names(&["Alice", "Bob", "alice"], &[true; 3]);
    let err = RotationLogic::advance(&current, &HashMap::new(), &Rules::default()).unwrap_err();
    assert!(matches!(err, AppError::ReorderingInconsistency(_)));
}

#[test]
fn tiny_queues() {
    let empty = RotationLogic::advance(&[], &HashMap::new(), &Rules::default()).expect("empty");
    assert!(empty.next_queue.is_empty());
    assert!(empty.chooser.is_none());

    let solo = queue_from_names(&["Alice"], &[false]);
    let advance = RotationLogic::advance(&solo, &HashMap::new(), &Rules::default()).expect("solo");
    assert_eq!(names(&advance.next_queue), ["Alice"]);
    assert_eq!(advance.next_queue[0].slot, 0);
    assert_eq!(advance.chooser_slot, Some(1));
}
