//! Unit tests for lb-world.

#[cfg(test)]
mod helpers {
    use lb_agent::{AgentStore, AgentStoreBuilder};
    use lb_behavior::{ActionCommand, Predicate, World};
    use lb_core::AgentId;
    use lb_grid::{BfsReachability, Board};

    use crate::GridWorld;

    pub struct Fixture {
        pub board:  Board,
        pub agents: AgentStore,
    }

    impl Fixture {
        pub fn new(rows: &[&str]) -> Self {
            let board = Board::from_lines(rows).unwrap();
            let (agents, _) = AgentStoreBuilder::new(&board).build();
            Self { board, agents }
        }

        pub fn act(&mut self, agent: u32, action: ActionCommand) -> bool {
            let reach = BfsReachability;
            GridWorld::new(&mut self.board, &mut self.agents, &reach).perform(AgentId(agent), &action)
        }

        pub fn check(&mut self, agent: u32, predicate: Predicate) -> bool {
            let reach = BfsReachability;
            GridWorld::new(&mut self.board, &mut self.agents, &reach).holds(AgentId(agent), &predicate)
        }

        pub fn rows(&self) -> Vec<String> {
            self.board.rows().collect()
        }
    }
}

// ── Actions ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod actions {
    use lb_behavior::ActionCommand::{self, *};
    use lb_core::{AgentId, Direction, Position};

    use super::helpers::Fixture;

    #[test]
    fn move_into_open_cell() {
        let mut f = Fixture::new(&["...", ".>.", "..."]);
        assert!(f.act(1, Move));
        assert_eq!(f.agents.position(AgentId(1)), Some(Position::new(3, 2)));
        assert_eq!(f.rows(), ["...", "..>", "..."]);
    }

    #[test]
    fn wall_and_border_block() {
        let mut f = Fixture::new(&[".>#"]);
        assert!(!f.act(1, Move));
        assert_eq!(f.rows(), [".>#"]);

        let mut f = Fixture::new(&["..>"]);
        assert!(!f.act(1, Move));
        assert_eq!(f.agents.position(AgentId(1)), Some(Position::new(3, 1)));
    }

    #[test]
    fn other_ladybug_blocks() {
        let mut f = Fixture::new(&[">v."]);
        assert!(!f.act(1, Move));
        assert_eq!(f.rows(), [">v."]);
    }

    #[test]
    fn mushroom_is_pushed_onto_empty() {
        let mut f = Fixture::new(&[">o.."]);
        assert!(f.act(1, Move));
        assert_eq!(f.rows(), [".>o."]);
        assert!(f.act(1, Move));
        assert_eq!(f.rows(), ["..>o"]);
        // Now against the border.
        assert!(!f.act(1, Move));
        assert_eq!(f.rows(), ["..>o"]);
    }

    #[test]
    fn mushroom_against_obstacle_blocks() {
        for row in [">o#", ">oo", ">o*", ">o<"] {
            let mut f = Fixture::new(&[row]);
            assert!(!f.act(1, Move), "{row}");
            assert_eq!(f.rows(), [row]);
        }
    }

    #[test]
    fn leaf_is_walked_over() {
        let mut f = Fixture::new(&[">*"]);
        assert!(f.act(1, Move));
        assert_eq!(f.rows(), [".>"]);
    }

    #[test]
    fn turning_cycles_and_redraws() {
        let mut f = Fixture::new(&["^"]);
        assert!(f.act(1, TurnRight));
        assert_eq!(f.rows(), [">"]);
        assert!(f.act(1, TurnRight));
        assert!(f.act(1, TurnRight));
        assert!(f.act(1, TurnRight));
        assert_eq!(f.agents.direction(AgentId(1)), Some(Direction::Up));
        assert!(f.act(1, TurnLeft));
        assert_eq!(f.rows(), ["<"]);
    }

    #[test]
    fn fly_reorients_along_dominant_axis() {
        let mut f = Fixture::new(&["^....", ".....", "....."]);
        assert!(f.act(1, ActionCommand::Fly(Position::new(4, 3))));
        assert_eq!(f.agents.direction(AgentId(1)), Some(Direction::Right));
        assert_eq!(f.rows(), [".....", ".....", "...>."]);

        assert!(f.act(1, ActionCommand::Fly(Position::new(4, 1))));
        assert_eq!(f.agents.direction(AgentId(1)), Some(Direction::Up));

        // Tie goes horizontal.
        assert!(f.act(1, ActionCommand::Fly(Position::new(2, 3))));
        assert_eq!(f.agents.direction(AgentId(1)), Some(Direction::Left));
    }

    #[test]
    fn fly_needs_empty_destination() {
        let mut f = Fixture::new(&["^.#", "*o."]);
        for target in [(3, 1), (1, 2), (2, 2), (1, 1), (9, 9), (0, 1)] {
            let to = Position::new(target.0, target.1);
            assert!(!f.act(1, ActionCommand::Fly(to)), "{to}");
        }
        assert_eq!(f.rows(), ["^.#", "*o."]);
    }

    #[test]
    fn place_and_take_leaf() {
        let mut f = Fixture::new(&[">."]);
        assert!(!f.act(1, TakeLeaf));
        assert!(f.act(1, PlaceLeaf));
        assert_eq!(f.rows(), [">*"]);
        assert!(!f.act(1, PlaceLeaf));
        assert!(f.act(1, TakeLeaf));
        assert_eq!(f.rows(), [">."]);
    }

    #[test]
    fn place_leaf_off_board_fails() {
        let mut f = Fixture::new(&["<."]);
        assert!(!f.act(1, PlaceLeaf));
    }

    #[test]
    fn unknown_agent_does_nothing() {
        let mut f = Fixture::new(&[">."]);
        assert!(!f.act(7, Move));
        assert!(!f.act(7, TurnLeft));
        assert_eq!(f.rows(), [">."]);
    }
}

// ── Conditions ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod conditions {
    use lb_behavior::Predicate::{self, *};
    use lb_core::Position;

    use super::helpers::Fixture;

    #[test]
    fn front_cell_probes() {
        let mut f = Fixture::new(&[">*", ">#", ">o", ">."]);
        assert!(f.check(1, LeafFront));
        assert!(!f.check(1, TreeFront));
        assert!(f.check(2, TreeFront));
        assert!(f.check(3, MushroomFront));
        assert!(!f.check(3, LeafFront));
        assert!(!f.check(4, TreeFront));
        assert!(!f.check(4, MushroomFront));
    }

    #[test]
    fn border_counts_as_tree() {
        let mut f = Fixture::new(&["<."]);
        assert!(f.check(1, TreeFront));
    }

    #[test]
    fn at_edge() {
        let mut f = Fixture::new(&["...", ".>.", "..^"]);
        assert!(!f.check(1, AtEdge));
        assert!(f.check(2, AtEdge));
    }

    #[test]
    fn exists_path_from_the_ladybug_fails_closed() {
        let mut f = Fixture::new(&[">.#.", "..#.", "...."]);
        // (4,1) is reachable from the free cell beside the ladybug, but the
        // ladybug's own cell is not walkable.
        let to = Position::new(4, 1);
        assert!(f.check(1, ExistsPath { from: Some(Position::new(2, 1)), to }));
        assert!(!f.check(1, ExistsPath { from: None, to }));
        assert!(!f.check(1, ExistsPath { from: None, to: Position::new(2, 1) }));
    }

    #[test]
    fn exists_path_between_points() {
        let mut f = Fixture::new(&[">.#.", "..#.", "..#."]);
        let check = |f: &mut Fixture, a: (i32, i32), b: (i32, i32)| {
            f.check(1, Predicate::ExistsPath {
                from: Some(Position::new(a.0, a.1)),
                to:   Position::new(b.0, b.1),
            })
        };
        assert!(check(&mut f, (2, 1), (1, 3)));
        assert!(!check(&mut f, (2, 1), (4, 1)));
        // An explicit endpoint on a ladybug is not walkable.
        assert!(!check(&mut f, (1, 1), (2, 2)));
    }
}
