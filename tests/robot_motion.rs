// tests/robot_motion.rs
use glam::IVec2;
use toy_robot::{Error, Facing, ReportSink, Robot, RobotState, Table};

fn buffered(table: &Table) -> Robot<'_> {
    Robot::with_sink(table, ReportSink::Buffer(Vec::new()))
}

#[test]
fn test_table_bounds() {
    let table = Table::default();
    assert!(table.contains(IVec2::new(0, 0)));
    assert!(table.contains(IVec2::new(1, 2)));
    assert!(table.contains(IVec2::new(4, 4)));
    assert!(!table.contains(IVec2::new(5, 5)));
    assert!(!table.contains(IVec2::new(-1, -1)));
    assert!(!table.contains(IVec2::new(5, 0)));

    // Non-square: length runs along x, width along y.
    let wide = Table::new(7, 3).unwrap();
    assert!(wide.contains(IVec2::new(6, 2)));
    assert!(!wide.contains(IVec2::new(2, 3)));
}

#[test]
fn test_table_rejects_empty_dimensions() {
    assert!(matches!(
        Table::new(0, 5),
        Err(Error::InvalidTable {
            length: 0,
            width: 5
        })
    ));
    assert!(Table::new(5, -2).is_err());
}

#[test]
fn test_position_addition() {
    assert_eq!(IVec2::new(1, 2) + IVec2::new(3, 4), IVec2::new(4, 6));
    assert_eq!(IVec2::new(-1, -2) + IVec2::new(1, 2), IVec2::ZERO);
}

#[test]
fn test_facing_turns() {
    let left = [
        (Facing::North, Facing::West),
        (Facing::West, Facing::South),
        (Facing::South, Facing::East),
        (Facing::East, Facing::North),
    ];
    for (from, to) in left {
        assert_eq!(from.left(), to, "turning left from {from}");
        assert_eq!(to.right(), from, "turning right from {to}");
    }

    for facing in Facing::ALL {
        assert_eq!(facing.left().left().left().left(), facing);
        assert_eq!(facing.right().right().right().right(), facing);
        assert_eq!(facing.left().right(), facing);
    }
}

#[test]
fn test_facing_names() {
    for facing in Facing::ALL {
        assert_eq!(facing.to_string().parse::<Facing>().unwrap(), facing);
    }
    assert!("Up".parse::<Facing>().is_err());
}

#[test]
fn test_placement() {
    let table = Table::default();
    let cases = [
        (0, 0, Facing::North, true),
        (4, 4, Facing::South, true),
        (5, 5, Facing::East, false),
        (-1, -1, Facing::West, false),
    ];
    for (x, y, facing, expected) in cases {
        let mut robot = buffered(&table);
        assert_eq!(robot.place(x, y, facing), expected, "PLACE {x},{y},{facing}");
        assert_eq!(robot.is_placed(), expected);
    }
}

#[test]
fn test_failed_place_keeps_previous_state() {
    let table = Table::default();
    let mut robot = buffered(&table);
    assert!(robot.place(2, 3, Facing::East));
    assert!(!robot.place(9, 0, Facing::North));
    assert_eq!(
        robot.state(),
        RobotState::Placed {
            position: IVec2::new(2, 3),
            facing: Facing::East
        }
    );

    // Re-placing an already placed robot is allowed.
    assert!(robot.place(0, 4, Facing::South));
    assert_eq!(robot.position(), Some(IVec2::new(0, 4)));
    assert_eq!(robot.facing(), Some(Facing::South));
}

#[test]
fn test_move_from_origin() {
    let table = Table::default();
    let cases = [
        (Facing::North, IVec2::new(0, 1), true),
        (Facing::East, IVec2::new(1, 0), true),
        (Facing::South, IVec2::new(0, 0), false),
        (Facing::West, IVec2::new(0, 0), false),
    ];
    for (facing, expected, ok) in cases {
        let mut robot = buffered(&table);
        robot.place(0, 0, facing);
        assert_eq!(robot.move_forward(), ok, "MOVE facing {facing}");
        assert_eq!(robot.position(), Some(expected));
        assert_eq!(robot.facing(), Some(facing));
    }
}

#[test]
fn test_move_stops_at_far_edge() {
    let table = Table::default();
    let mut robot = buffered(&table);
    robot.place(0, 0, Facing::North);
    for _ in 0..4 {
        assert!(robot.move_forward());
    }
    assert!(!robot.move_forward());
    assert_eq!(robot.position(), Some(IVec2::new(0, 4)));
}

#[test]
fn test_unplaced_robot_refuses_everything() {
    let table = Table::default();
    let mut robot = buffered(&table);
    for _ in 0..3 {
        assert!(!robot.move_forward());
        assert!(!robot.left());
        assert!(!robot.right());
        assert!(!robot.report().unwrap());
        assert_eq!(robot.state(), RobotState::Unplaced);
    }
    assert!(robot.sink().lines().is_empty());
}

#[test]
fn test_turning_keeps_position() {
    let table = Table::default();
    let mut robot = buffered(&table);
    robot.place(3, 1, Facing::North);
    assert!(robot.left());
    assert_eq!(robot.facing(), Some(Facing::West));
    assert!(robot.right());
    assert!(robot.right());
    assert_eq!(robot.facing(), Some(Facing::East));
    assert_eq!(robot.position(), Some(IVec2::new(3, 1)));
}

#[test]
fn test_report_format() {
    let table = Table::default();
    let mut robot = buffered(&table);
    robot.place(0, 0, Facing::North);
    assert!(robot.left());
    assert!(robot.report().unwrap());
    assert_eq!(robot.sink().lines(), ["0, 0, WEST"]);
    assert_eq!(robot.snapshot().unwrap().to_string(), "0, 0, WEST");
}

#[test]
fn test_report_serializes_with_facing_name() {
    let table = Table::default();
    let mut robot = buffered(&table);
    robot.place(3, 3, Facing::North);
    let report = robot.snapshot().unwrap();

    let text = toml::to_string(&report).unwrap();
    assert!(text.contains("facing = \"NORTH\""), "{text}");

    let back: toy_robot::Report = toml::from_str(&text).unwrap();
    assert_eq!(back, report);
}
