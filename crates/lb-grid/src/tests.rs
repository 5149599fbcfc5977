//! Unit tests for lb-grid.
//!
//! All boards are small literals so expected paths can be checked by eye.

#[cfg(test)]
mod helpers {
    use crate::Board;

    pub fn board(rows: &[&str]) -> Board {
        Board::from_lines(rows).unwrap()
    }

    /// Two open rooms joined by a single gap at (3,2):
    ///
    /// ```text
    /// ..#..
    /// .....
    /// ..#..
    /// ```
    pub fn two_rooms() -> Board {
        board(&["..#..", ".....", "..#.."])
    }
}

// ── Board construction ────────────────────────────────────────────────────────

#[cfg(test)]
mod construction {
    use lb_core::{Cell, Direction, Position};

    use crate::{Board, BoardDefect, GridError};

    #[test]
    fn dimensions_and_cells() {
        let b = super::helpers::board(&["#.*", "o>."]);
        assert_eq!(b.width(), 3);
        assert_eq!(b.height(), 2);
        assert_eq!(b.get(Position::new(1, 1)), Cell::Wall);
        assert_eq!(b.get(Position::new(3, 1)), Cell::Leaf);
        assert_eq!(b.get(Position::new(1, 2)), Cell::Mushroom);
        assert_eq!(b.get(Position::new(2, 2)), Cell::Ladybug(Direction::Right));
    }

    #[test]
    fn empty_board_rejected() {
        let none: [&str; 0] = [];
        assert_eq!(Board::from_lines(&none), Err(GridError::MalformedBoard(BoardDefect::Empty)));
        assert_eq!(Board::from_lines(&[""]), Err(GridError::MalformedBoard(BoardDefect::Empty)));
    }

    #[test]
    fn ragged_rows_rejected() {
        let err = Board::from_lines(&["...", ".."]).unwrap_err();
        assert_eq!(
            err,
            GridError::MalformedBoard(BoardDefect::RaggedRow { row: 2, expected: 3, got: 2 })
        );
    }

    #[test]
    fn unknown_glyph_rejected() {
        let err = Board::from_lines(&["..x"]).unwrap_err();
        assert!(matches!(
            err,
            GridError::MalformedBoard(BoardDefect::BadGlyph { row: 1, col: 3, .. })
        ));
    }

    #[test]
    fn carriage_returns_ignored() {
        let b = Board::from_lines(&["..\r", "#.\r"]).unwrap();
        assert_eq!(b.width(), 2);
    }

    #[test]
    fn display_has_border() {
        let b = super::helpers::board(&[".>", "#."]);
        assert_eq!(b.to_string(), "+--+\n|.>|\n|#.|\n+--+");
    }

    #[test]
    fn iter_is_row_major() {
        let b = super::helpers::board(&[".#", ".."]);
        let order: Vec<Position> = b.iter().map(|(p, _)| p).collect();
        assert_eq!(order[0], Position::new(1, 1));
        assert_eq!(order[1], Position::new(2, 1));
        assert_eq!(order[2], Position::new(1, 2));
    }
}

// ── Bounds semantics ──────────────────────────────────────────────────────────

#[cfg(test)]
mod bounds {
    use lb_core::{Cell, Position};

    #[test]
    fn out_of_bounds_reads_as_wall() {
        let b = super::helpers::board(&["...", "..."]);
        for p in [
            Position::new(0, 1),
            Position::new(1, 0),
            Position::new(4, 1),
            Position::new(1, 3),
            Position::new(-5, -5),
            Position::new(100, 100),
        ] {
            assert_eq!(b.get(p), Cell::Wall, "{p}");
        }
    }

    #[test]
    fn out_of_bounds_write_is_noop_and_idempotent() {
        let mut b = super::helpers::board(&["...", "..."]);
        let before = b.clone();
        for _ in 0..3 {
            assert!(!b.set(Position::new(0, 0), Cell::Leaf));
            assert!(!b.set(Position::new(4, 2), Cell::Leaf));
        }
        assert_eq!(b, before);
        assert!(b.set(Position::new(3, 2), Cell::Leaf));
        assert_eq!(b.get(Position::new(3, 2)), Cell::Leaf);
    }

    #[test]
    fn edge_ring() {
        let b = super::helpers::board(&["...", "...", "..."]);
        assert!(b.is_edge(Position::new(1, 2)));
        assert!(b.is_edge(Position::new(3, 3)));
        assert!(!b.is_edge(Position::new(2, 2)));
        assert!(!b.is_edge(Position::new(0, 2)));
    }
}

// ── Reachability ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod reachability {
    use lb_core::Position;

    use crate::{BfsReachability, Reachability};

    #[test]
    fn same_walkable_cell_reaches_itself() {
        let b = super::helpers::two_rooms();
        let p = Position::new(1, 1);
        assert!(BfsReachability.exists_path(&b, p, p));
    }

    #[test]
    fn path_through_gap() {
        let b = super::helpers::two_rooms();
        assert!(BfsReachability.exists_path(&b, Position::new(1, 1), Position::new(5, 3)));
    }

    #[test]
    fn symmetric() {
        let b = super::helpers::board(&["..#..", "..#..", "..#.."]);
        let pairs = [
            (Position::new(1, 1), Position::new(2, 3)),
            (Position::new(1, 1), Position::new(5, 1)),
            (Position::new(4, 2), Position::new(5, 3)),
        ];
        for (a, c) in pairs {
            assert_eq!(
                BfsReachability.exists_path(&b, a, c),
                BfsReachability.exists_path(&b, c, a),
                "{a} vs {c}"
            );
        }
        assert!(!BfsReachability.exists_path(&b, Position::new(1, 1), Position::new(5, 1)));
    }

    #[test]
    fn mushrooms_are_walkable_leaves_are_not() {
        let b = super::helpers::board(&[".o.", "###"]);
        assert!(BfsReachability.exists_path(&b, Position::new(1, 1), Position::new(3, 1)));
        let b = super::helpers::board(&[".*.", "###"]);
        assert!(!BfsReachability.exists_path(&b, Position::new(1, 1), Position::new(3, 1)));
    }

    #[test]
    fn fails_closed_on_blocked_endpoints() {
        let b = super::helpers::board(&["#..", "..."]);
        assert!(!BfsReachability.exists_path(&b, Position::new(1, 1), Position::new(3, 2)));
        assert!(!BfsReachability.exists_path(&b, Position::new(3, 2), Position::new(1, 1)));
        assert!(!BfsReachability.exists_path(&b, Position::new(0, 1), Position::new(3, 2)));
        assert!(!BfsReachability.exists_path(&b, Position::new(2, 1), Position::new(9, 9)));
    }

    #[test]
    fn ladybug_origin_blocks() {
        let b = super::helpers::board(&[">..", "..."]);
        let origin = Position::new(1, 1);
        assert!(!BfsReachability.exists_path(&b, origin, Position::new(3, 2)));
        assert!(!BfsReachability.exists_path(&b, Position::new(3, 2), origin));
        assert!(BfsReachability.exists_path(&b, Position::new(2, 1), Position::new(3, 2)));
    }
}
