//! Integration tests for lb-sim.

#[cfg(test)]
mod helpers {
    use lb_behavior::TraceEvent;

    use crate::{Sim, SimBuilder};

    pub fn sim(board: &[&str], trees: &[&str]) -> Sim {
        let mut sim = SimBuilder::new().build();
        sim.load_board(board).unwrap();
        sim.load_tree_sources(trees).unwrap();
        sim
    }

    pub fn rows(sim: &Sim) -> Vec<String> {
        sim.board().unwrap().rows().collect()
    }

    pub fn lines(events: &[TraceEvent]) -> Vec<String> {
        events.iter().map(ToString::to_string).collect()
    }
}

// ── Loading ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loading {
    use lb_behavior::TreeError;
    use lb_core::{AgentId, Position};
    use lb_grid::GridError;

    use super::helpers::{rows, sim};
    use crate::{SimBuilder, SimError};

    #[test]
    fn board_scan_numbers_ladybugs() {
        let mut s = SimBuilder::new().build();
        s.load_board(&["<..", "..^", ">.."]).unwrap();
        assert_eq!(s.agents.count, 3);
        assert_eq!(s.position(AgentId(2)).unwrap(), Position::new(3, 2));
        // Nothing has a tree yet.
        assert!(s.active_agents().is_empty());
    }

    #[test]
    fn ragged_board_rejected_and_old_board_kept() {
        let mut s = SimBuilder::new().build();
        s.load_board(&[">."]).unwrap();
        let err = s.load_board(&["...", ".."]).unwrap_err();
        assert!(matches!(err, SimError::Grid(GridError::MalformedBoard(_))));
        assert_eq!(rows(&s), [">."]);
    }

    #[test]
    fn extra_ladybugs_are_removed() {
        let s = sim(&[">.v", "...", "^.."], &["A[move]", "A[turnLeft]"]);
        assert_eq!(s.agents.count, 2);
        assert_eq!(s.active_agents(), [AgentId(1), AgentId(2)]);
        assert!(matches!(s.position(AgentId(3)), Err(SimError::AgentNotFound(_))));
        assert_eq!(rows(&s), [">.v", "...", "..."]);
    }

    #[test]
    fn too_many_trees() {
        let mut s = SimBuilder::new().build();
        s.load_board(&[">."]).unwrap();
        let err = s.load_tree_sources(&["A[move]", "A[move]"]).unwrap_err();
        assert!(matches!(err, SimError::TooManyTrees { trees: 2, agents: 1 }));
        assert_eq!(s.agents.count, 1);
    }

    #[test]
    fn trees_need_a_board() {
        let mut s = SimBuilder::new().build();
        assert!(matches!(s.load_tree_sources(&["A[move]"]), Err(SimError::NoBoard)));
    }

    #[test]
    fn bad_source_leaves_everything_untouched() {
        let mut s = sim(&[">.<"], &["A[move]", "A[move]"]);
        let err = s.load_tree_sources(&["A[move]", "A[?] --> B([atEdge])"]).unwrap_err();
        assert!(matches!(
            err,
            SimError::TreeSource { index: 1, source: TreeError::NoActionNodes }
        ));
        assert_eq!(s.active_agents().len(), 2);
        assert_eq!(s.head(AgentId(2)).unwrap(), "A");
    }

    #[test]
    fn reloading_the_board_drops_trees() {
        let mut s = sim(&[">."], &["A[move]"]);
        s.load_board(&[">."]).unwrap();
        assert!(s.active_agents().is_empty());
        assert!(matches!(s.head(AgentId(1)), Err(SimError::Uninitialized(_))));
    }
}

// ── Ticking ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod ticking {
    use lb_behavior::{NoopSink, Outcome, TraceEvent};
    use lb_core::{AgentId, Position};

    use super::helpers::{lines, rows, sim};
    use crate::{SimBuilder, SimError};

    #[test]
    fn sequence_move_on_open_board() {
        let mut s = sim(&["...", ".>.", "..."], &["A[->] --> B[move]"]);
        let mut trace: Vec<TraceEvent> = Vec::new();
        let reports = s.advance_all(&mut trace).unwrap();

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].1.root, Outcome::Success);
        assert_eq!(s.position(AgentId(1)).unwrap(), Position::new(3, 2));
        assert_eq!(rows(&s), ["...", "..>", "..."]);
        assert_eq!(
            lines(&trace),
            ["1 A sequence ENTRY", "1 B move SUCCESS", "1 A sequence SUCCESS"]
        );
    }

    #[test]
    fn move_into_wall_fails() {
        let mut s = sim(&[".>#"], &["B[move]"]);
        let mut trace: Vec<TraceEvent> = Vec::new();
        let report = s.advance_agent(AgentId(1), &mut trace).unwrap().unwrap();

        assert_eq!(report.action.unwrap().outcome, Outcome::Failure);
        assert_eq!(s.position(AgentId(1)).unwrap(), Position::new(2, 1));
        assert_eq!(lines(&trace), ["1 B move FAILURE"]);
    }

    #[test]
    fn exactly_one_action_per_ladybug_per_tick() {
        let tree = "A[->] --> B[turnRight]\nA --> C[move]\nA --> D[move]";
        let mut s = sim(&[".....", ".....", "^...."], &[tree]);
        let mut trace: Vec<TraceEvent> = Vec::new();

        for _ in 0..5 {
            trace.clear();
            s.advance_all(&mut trace).unwrap();
            let actions = trace.iter().filter(|e| matches!(e, TraceEvent::Action { .. })).count();
            assert_eq!(actions, 1);
        }
        // turnRight, move, move, turnRight, then a move blocked by the border.
        assert_eq!(s.position(AgentId(1)).unwrap(), Position::new(3, 3));
    }

    #[test]
    fn ladybugs_move_in_id_order() {
        // Both want (2,1); ladybug 1 gets there first and blocks ladybug 2.
        let mut s = sim(&[">.<"], &["A[move]", "A[move]"]);
        let reports = s.advance_all(&mut NoopSink).unwrap();
        assert_eq!(reports[0].1.root, Outcome::Success);
        assert_eq!(reports[1].1.root, Outcome::Failure);
        assert_eq!(rows(&s), [".><"]);
    }

    #[test]
    fn trace_events_carry_the_ladybug() {
        let mut s = sim(&[">..", "<.."], &["A[turnLeft]", "A[turnLeft]"]);
        let mut trace: Vec<TraceEvent> = Vec::new();
        s.advance_all(&mut trace).unwrap();
        assert_eq!(lines(&trace), ["1 A turnLeft SUCCESS", "2 A turnLeft SUCCESS"]);
    }

    #[test]
    fn empty_roster_is_a_noop() {
        let mut s = SimBuilder::new().build();
        s.load_board(&["..", ".#"]).unwrap();
        assert!(s.advance_all(&mut NoopSink).unwrap().is_empty());
        assert!(s.advance_agent(AgentId(1), &mut NoopSink).unwrap().is_none());
    }

    #[test]
    fn ladybug_without_tree_is_skipped() {
        let mut s = SimBuilder::new().build();
        s.load_board(&[">."]).unwrap();
        assert!(s.advance_agent(AgentId(1), &mut NoopSink).unwrap().is_none());
        assert!(s.advance_all(&mut NoopSink).unwrap().is_empty());
    }

    #[test]
    fn unknown_ladybug() {
        let mut s = sim(&[">."], &["A[move]"]);
        let err = s.advance_agent(AgentId(4), &mut NoopSink).unwrap_err();
        assert!(matches!(err, SimError::AgentNotFound(AgentId(4))));
    }

    #[test]
    fn no_board_yet() {
        let mut s = SimBuilder::new().build();
        assert!(matches!(s.advance_all(&mut NoopSink), Err(SimError::NoBoard)));
    }

    #[test]
    fn exists_path_condition_uses_the_board() {
        let tree = "A[->] --> B([existsPath 2,1 3,3])\nA --> C[turnLeft]";
        let mut s = sim(&[">#.", "###", "..."], &[tree]);
        let mut trace: Vec<TraceEvent> = Vec::new();
        s.advance_all(&mut trace).unwrap();
        assert_eq!(lines(&trace)[1], "1 B existsPath 2,1 3,3 FAILURE");

        let mut s = sim(&[">..", "...", "..."], &[tree]);
        trace.clear();
        s.advance_all(&mut trace).unwrap();
        assert_eq!(lines(&trace)[1], "1 B existsPath 2,1 3,3 SUCCESS");
    }

    #[test]
    fn exists_path_from_the_ladybug_never_holds() {
        let tree = "A[->] --> B([existsPath 3,3])\nA --> C[move]";
        let mut s = sim(&["...", ">..", "..."], &[tree]);
        let mut trace: Vec<TraceEvent> = Vec::new();
        s.advance_all(&mut trace).unwrap();
        assert_eq!(lines(&trace), [
            "1 A sequence ENTRY",
            "1 B existsPath 3,3 FAILURE",
            "1 A sequence FAILURE",
        ]);
        assert_eq!(s.position(AgentId(1)).unwrap(), Position::new(1, 2));
    }
}

// ── Inspection and mutation ───────────────────────────────────────────────────

#[cfg(test)]
mod mutation {
    use lb_behavior::{TraceEvent, TreeError};
    use lb_core::AgentId;

    use super::helpers::{lines, sim};
    use crate::{SimBuilder, SimError};

    const TREE: &str = "A[?] --> B[->]\nB --> C([leafFront])\nB --> D[takeLeaf]\nA --> E[move]";

    #[test]
    fn head_jump_and_reset() {
        let mut s = sim(&[">.."], &[TREE]);
        let bug = AgentId(1);
        assert_eq!(s.head(bug).unwrap(), "A");
        assert!(s.jump_to_node(bug, "D").unwrap());
        assert_eq!(s.head(bug).unwrap(), "D");
        assert!(!s.jump_to_node(bug, "nope").unwrap());
        s.reset_tree(bug).unwrap();
        assert_eq!(s.head(bug).unwrap(), "A");
    }

    #[test]
    fn add_sibling_defaults_to_head() {
        let mut s = sim(&[">.."], &[TREE]);
        let bug = AgentId(1);
        s.jump_to_node(bug, "E").unwrap();
        s.add_sibling(bug, None, "F([atEdge])").unwrap();

        let tree = s.trees.get(0).unwrap();
        let f = tree.find("F").unwrap();
        assert_eq!(tree.parent(f), tree.find("A"));
        assert_eq!(tree.children(tree.root()).last(), Some(&f));
    }

    #[test]
    fn add_sibling_errors() {
        let mut s = sim(&[">.."], &[TREE]);
        let bug = AgentId(1);
        s.add_sibling(bug, Some("C"), "F[turnLeft]").unwrap();
        assert!(matches!(
            s.add_sibling(bug, Some("E"), "F[move]"),
            Err(SimError::Tree(TreeError::DuplicateId(_)))
        ));
        assert!(matches!(
            s.add_sibling(bug, Some("A"), "G[move]"),
            Err(SimError::Tree(TreeError::NoParent(_)))
        ));
        assert!(matches!(
            s.add_sibling(bug, Some("Q"), "G[move]"),
            Err(SimError::Tree(TreeError::NodeNotFound(_)))
        ));
        assert!(matches!(
            s.add_sibling(bug, Some("C"), "not a node"),
            Err(SimError::Tree(TreeError::InvalidDefinition(_)))
        ));
        // Default target is the root head, which has no parent.
        assert!(matches!(
            s.add_sibling(bug, None, "G[move]"),
            Err(SimError::Tree(TreeError::NoParent(_)))
        ));
    }

    #[test]
    fn add_sibling_needs_a_tree() {
        let mut s = SimBuilder::new().build();
        s.load_board(&[">."]).unwrap();
        assert!(matches!(
            s.add_sibling(AgentId(1), Some("A"), "B[move]"),
            Err(SimError::Uninitialized(AgentId(1)))
        ));
    }

    #[test]
    fn spliced_sibling_runs_on_a_later_tick() {
        // C joins the end of sequence A and runs once B has.
        let mut s = sim(&["v..", "...", "..."], &["A[->] --> B[turnLeft]"]);
        let bug = AgentId(1);
        s.add_sibling(bug, Some("B"), "C[move]").unwrap();

        let mut trace: Vec<TraceEvent> = Vec::new();
        s.advance_all(&mut trace).unwrap();
        trace.clear();
        s.advance_all(&mut trace).unwrap();
        assert_eq!(
            lines(&trace),
            ["1 A sequence ENTRY", "1 C move SUCCESS", "1 A sequence SUCCESS"]
        );
    }
}
