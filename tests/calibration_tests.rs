use darts501::board::{Board, FieldId, Ring};
use darts501::calibration::{CalibrationEngine, PracticeSettings};
use darts501::error::DartsError;
use darts501::geometry::Point;
use darts501::judge::{ScriptedJudge, SimulatedJudge, ThrowOutcome, ThrowerProfile};
use rstest::rstest;

fn engine() -> CalibrationEngine {
    CalibrationEngine::new(PracticeSettings::default())
}

#[rstest]
#[case(0, 0)]
#[case(163, 0)]
#[case(164, 164)]
#[case(1000, 984)]
#[case(1640, 1640)]
#[case(100_000, 99_876)]
fn test_throws_as_many_darts_as_announced(#[case] requested: u32, #[case] usable: u32) {
    let board = Board::regulation();
    let mut judge = ScriptedJudge::default();

    engine().practice(&board, &mut judge, requested).unwrap();

    assert_eq!(judge.announcements, vec![usable]);
    assert_eq!(judge.throws(), usable as usize);
}

#[test]
fn test_excessive_practice_fails_before_any_call() {
    let board = Board::regulation();
    let mut judge = ScriptedJudge::default();

    let err = engine().practice(&board, &mut judge, 100_001).unwrap_err();

    assert!(matches!(err, DartsError::ExcessivePractice { .. }));
    assert!(err.to_string().contains("100001"));
    assert!(judge.announcements.is_empty());
    assert_eq!(judge.throws(), 0);
}

#[test]
fn test_accuracy_is_undefined_without_practice() {
    let board = Board::regulation();
    let mut judge = ScriptedJudge::default();
    let table = engine().practice(&board, &mut judge, 100).unwrap();

    for (id, field) in board.iter() {
        let stats = table.get(id).unwrap();
        assert_eq!(stats.accuracy(), None, "{}", field);
        assert_eq!(stats.expected_value(field), None);
        assert_eq!(table.corrected_target(&board, id), Some(field.cartesian_center()));
    }
}

#[test]
fn test_batches_follow_board_order() {
    let board = Board::regulation();
    let mut judge = ScriptedJudge::default();
    engine().practice(&board, &mut judge, 328).unwrap();

    // Two measurement darts, then two accuracy darts, per field.
    assert_eq!(judge.targets.len(), 328);
    for (i, chunk) in judge.targets.chunks(4).enumerate() {
        let center = board.fields()[i].cartesian_center();
        assert_eq!(chunk[0], center);
        assert_eq!(chunk[1], center);
    }
}

#[test]
fn test_hits_need_matching_score_and_multiplier() {
    let board = Board::regulation();
    // First field is the inner bull: 25 x2 counts, 25 x1 does not.
    let bull_hit = ThrowOutcome::new(Point::ORIGIN, 2, 25);
    let outer_bull = ThrowOutcome::new(Point::ORIGIN, 1, 25);
    let mut judge = ScriptedJudge::new(vec![
        bull_hit, bull_hit, bull_hit, // measurement
        bull_hit, outer_bull, bull_hit, // accuracy
        outer_bull,
    ]);

    let table = engine().practice(&board, &mut judge, 492).unwrap();

    let inner = table.get(FieldId(0)).unwrap();
    assert_eq!(inner.attempts(), 3);
    assert_eq!(inner.hits(), 2);
    assert!((inner.accuracy().unwrap() - 2.0 / 3.0).abs() < 1e-12);

    let outer = table.get(FieldId(1)).unwrap();
    assert_eq!(outer.accuracy(), Some(1.0));
}

#[test]
fn test_mean_delta_compensates_bias() {
    let board = Board::regulation();
    let profile = ThrowerProfile {
        bias_x: 0.02,
        bias_y: -0.03,
        spread: 0.0,
    };
    let mut judge = SimulatedJudge::new(board.clone(), profile, Some(3));
    let table = engine().practice(&board, &mut judge, 1640).unwrap();

    let (t20, field) = board.find(20, Ring::Treble).unwrap();
    let stats = table.get(t20).unwrap();
    let delta = stats.avg_targeting_delta();
    assert!((delta.x + 0.02).abs() < 1e-9);
    assert!((delta.y - 0.03).abs() < 1e-9);

    // Corrected aim lands exactly on the centre, so every accuracy dart hits.
    assert_eq!(stats.accuracy(), Some(1.0));
    assert_eq!(stats.expected_value(field), Some(60.0));
    assert_eq!(judge.announcements(), &[1640]);
}

#[test]
fn test_ranking_is_sorted_by_expected_value() {
    let board = Board::regulation();
    let profile = ThrowerProfile {
        spread: 0.02,
        ..Default::default()
    };
    let mut judge = SimulatedJudge::new(board.clone(), profile, Some(11));
    let table = engine().practice(&board, &mut judge, 3280).unwrap();

    let ranking = table.ranking(&board);
    assert_eq!(ranking.len(), 82);
    for pair in ranking.windows(2) {
        assert!(pair[0].expected_value.unwrap() >= pair[1].expected_value.unwrap());
    }
}

#[test]
fn test_csv_export_has_a_row_per_field() {
    let board = Board::regulation();
    let mut judge = ScriptedJudge::default();
    let table = engine().practice(&board, &mut judge, 164).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("calibration.csv");
    table
        .write_csv(&board, std::fs::File::create(&path).unwrap())
        .unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let mut lines = content.lines();
    assert_eq!(
        lines.next().unwrap(),
        "label,score,multiplier,samples,accuracy,expected_value,aim_x,aim_y"
    );
    assert_eq!(lines.count(), 82);
}
