use std::collections::{HashSet, VecDeque};

use picslide_core::arrangement::{grid_neighbors, is_adjacent, Arrangement};
use picslide_core::shuffle::default_min_difficulty;
use picslide_core::{puzzle_key, GridSpec, PuzzleSession, Shuffler, SourceImage};
use pretty_assertions::assert_eq;

fn session_2x2(slots: Vec<usize>) -> PuzzleSession {
    let spec = GridSpec::compute(100, 100, 2, 2).unwrap();
    PuzzleSession::new(puzzle_key("test", "nobody"), spec, Arrangement::from_slots(slots))
}

#[test]
fn layout_matches_ceiling_division() {
    let spec = GridSpec::compute(100, 97, 3, 3).unwrap();
    assert_eq!(spec.block_width, 34);
    assert_eq!(spec.block_height, 33);
    assert_eq!(spec.cols, 102);
    assert_eq!(spec.rows, 99);
    // padding stays below one block dimension
    assert!(spec.cols - 100 < spec.block_width);
    assert!(spec.rows - 97 < spec.block_height);
}

#[test]
fn layout_rejects_zero_inputs() {
    assert!(GridSpec::compute(100, 100, 0, 3).is_err());
    assert!(GridSpec::compute(100, 100, 3, 0).is_err());
    assert!(GridSpec::compute(0, 100, 3, 3).is_err());
    assert!(GridSpec::compute(100, 0, 3, 3).is_err());
}

#[test]
fn layout_geometry_helpers() {
    let spec = GridSpec::compute(90, 60, 3, 2).unwrap();
    assert_eq!(spec.total_blocks(), 6);
    assert_eq!(spec.cell_origin(4), (30, 30));
    assert_eq!(spec.index_at_pixel(31, 31), Some(4));
    assert_eq!(spec.index_at_pixel(90, 0), None);
    assert_eq!(spec.cell_rects().len(), 6);
}

#[test]
fn padding_preserves_source_pixels() {
    let spec = GridSpec::compute(3, 3, 2, 2).unwrap();
    assert_eq!((spec.cols, spec.rows), (4, 4));
    let img = SourceImage::new(3, 3, vec![7u8; 27]);
    let padded = img.pad_to_grid(&spec);
    assert_eq!((padded.width, padded.height), (4, 4));
    assert_eq!(padded.data.len(), 48);
    // source pixel survives, filler is black
    assert_eq!(&padded.data[0..3], &[7, 7, 7]);
    assert_eq!(&padded.data[9..12], &[0, 0, 0]);
    assert_eq!(&padded.data[44..48], &[0, 0, 0, 0]);
}

#[test]
fn solved_detection_checks_every_tile() {
    assert!(Arrangement::from_slots(vec![0, 1, 2, 3]).is_solved());
    assert!(!Arrangement::from_slots(vec![0, 1, 3, 2]).is_solved());
    assert!(!Arrangement::from_slots(vec![1, 0, 2, 3]).is_solved());
}

#[test]
fn manhattan_distance_ignores_blank() {
    // blank moved to the far corner of a 2x2, tiles rotated one step
    let arr = Arrangement::from_slots(vec![1, 3, 2, 0]);
    // 1: (0,0) vs (1,0) -> 1; 3: (1,0) vs (1,1) -> 1; 2: (0,1) home -> 0
    assert_eq!(arr.manhattan_distance(2), 2);
    assert_eq!(Arrangement::identity(9).manhattan_distance(3), 0);
}

#[test]
fn adjacency_is_one_step_on_one_axis() {
    // 3x3 grid, center cell
    assert!(is_adjacent(4, 1, 3));
    assert!(is_adjacent(4, 3, 3));
    assert!(!is_adjacent(4, 0, 3)); // diagonal
    assert!(!is_adjacent(4, 4, 3));
    // wrap-around must not count as adjacency
    assert!(!is_adjacent(2, 3, 3));
}

#[test]
fn shuffle_meets_difficulty_floor() {
    let mut shuffler = Shuffler::new(Some(42));
    for n in 2..=6usize {
        let arr = shuffler.shuffle(n, n);
        let floor = default_min_difficulty(n * n);
        assert!(
            arr.manhattan_distance(n) >= floor,
            "{0}x{0} scramble below floor {1}",
            n,
            floor
        );
        assert_eq!(arr.slots()[arr.blank_index()], 0);
    }
}

#[test]
fn shuffle_produces_a_permutation() {
    let mut shuffler = Shuffler::new(Some(7));
    let arr = shuffler.shuffle(4, 4);
    let mut seen: Vec<usize> = arr.slots().to_vec();
    seen.sort_unstable();
    assert_eq!(seen, (0..16).collect::<Vec<_>>());
}

fn bfs_reaches_identity(start: &Arrangement, nbx: usize, nby: usize) -> bool {
    let target: Vec<usize> = (0..nbx * nby).collect();
    let mut seen = HashSet::new();
    let mut queue = VecDeque::new();
    seen.insert(start.slots().to_vec());
    queue.push_back((start.slots().to_vec(), start.blank_index()));
    while let Some((slots, blank)) = queue.pop_front() {
        if slots == target {
            return true;
        }
        for n in grid_neighbors(blank, nbx, nby) {
            let mut next = slots.clone();
            next.swap(blank, n);
            if seen.insert(next.clone()) {
                queue.push_back((next, n));
            }
        }
    }
    false
}

#[test]
fn shuffled_grids_are_solvable() {
    let mut shuffler = Shuffler::new(Some(1));
    for _ in 0..5 {
        let arr = shuffler.shuffle(2, 2);
        assert!(bfs_reaches_identity(&arr, 2, 2));
    }
    let arr = shuffler.shuffle(3, 3);
    assert!(bfs_reaches_identity(&arr, 3, 3));
}

#[test]
fn non_adjacent_move_is_a_noop() {
    let mut session = session_2x2(vec![3, 2, 1, 0]);
    let before = session.arrangement().clone();
    let blank_before = session.blank_position();
    // blank is at index 3; index 0 is diagonal
    let result = session.attempt_move(0);
    assert!(!result.applied);
    assert_eq!(session.arrangement(), &before);
    assert_eq!(session.blank_position(), blank_before);
}

#[test]
fn out_of_range_and_blank_targets_are_noops() {
    let mut session = session_2x2(vec![1, 0, 2, 3]);
    assert!(!session.attempt_move(4).applied);
    assert!(!session.attempt_move(1).applied); // the blank itself
    assert_eq!(session.moves(), 0);
}

#[test]
fn a_slide_is_its_own_inverse() {
    let mut session = session_2x2(vec![1, 2, 0, 3]);
    let before = session.arrangement().clone();
    let blank_before = session.blank_position();
    assert!(session.attempt_move(0).applied);
    assert!(session.attempt_move(2).applied);
    assert_eq!(session.arrangement(), &before);
    assert_eq!(session.blank_position(), blank_before);
}

#[test]
fn blank_position_tracks_blank_index() {
    let spec = GridSpec::compute(100, 100, 2, 2).unwrap();
    let mut session =
        PuzzleSession::new(puzzle_key("a", "b"), spec, Arrangement::from_slots(vec![1, 2, 0, 3]));
    assert_eq!(session.blank_position().x, 0);
    assert_eq!(session.blank_position().y, 50);
    assert!(session.attempt_move(3).applied);
    assert_eq!(session.blank_position().x, 50);
    assert_eq!(session.blank_position().y, 50);
}

#[test]
fn solving_move_sets_flag_and_locks_session() {
    // one slide away from solved: tile 1 sits next to its home
    let mut session = session_2x2(vec![1, 0, 2, 3]);
    assert!(!session.solved());
    assert!(session.attempt_move(0).applied);
    assert!(session.solved());
    assert!(session.arrangement().is_solved());

    // post-solve lock, adjacency irrelevant
    let before = session.arrangement().clone();
    assert!(!session.attempt_move(1).applied);
    assert!(!session.attempt_move(2).applied);
    assert_eq!(session.arrangement(), &before);
    assert_eq!(session.moves(), 1);
}

#[test]
fn key_is_name_and_artist() {
    assert_eq!(puzzle_key("Great Wave", "Hokusai"), "Great Wave|Hokusai");
}
