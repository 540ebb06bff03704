use std::collections::BTreeMap;

use cubelab_sequencer_core::{
    NodeLayout, NodeStyle, PlannedNode, SceneGraph, SceneSynchronizer, StepSequencer,
};

#[derive(Clone, Debug, PartialEq)]
enum Kind {
    Cube { index: usize, style: NodeStyle },
    Label { index: usize, text: String },
}

/// In-memory scene graph that records every live node.
#[derive(Default)]
struct MemoryGraph {
    next: u32,
    live: BTreeMap<u32, Kind>,
    removed: usize,
}

impl MemoryGraph {
    fn cubes(&self) -> Vec<(usize, NodeStyle)> {
        let mut v: Vec<_> = self
            .live
            .values()
            .filter_map(|k| match k {
                Kind::Cube { index, style } => Some((*index, *style)),
                _ => None,
            })
            .collect();
        v.sort_by_key(|(i, _)| *i);
        v
    }

    fn labels(&self) -> Vec<String> {
        self.live
            .values()
            .filter_map(|k| match k {
                Kind::Label { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    fn label_indices(&self) -> Vec<usize> {
        let mut v: Vec<_> = self
            .live
            .values()
            .filter_map(|k| match k {
                Kind::Label { index, .. } => Some(*index),
                _ => None,
            })
            .collect();
        v.sort();
        v
    }
}

impl SceneGraph for MemoryGraph {
    type Handle = u32;

    fn add_cube(&mut self, node: &PlannedNode) -> u32 {
        self.next += 1;
        self.live.insert(
            self.next,
            Kind::Cube {
                index: node.index,
                style: node.style,
            },
        );
        self.next
    }

    fn add_label(&mut self, node: &PlannedNode) -> u32 {
        self.next += 1;
        self.live.insert(
            self.next,
            Kind::Label {
                index: node.index,
                text: node.label.clone(),
            },
        );
        self.next
    }

    fn remove(&mut self, handle: u32) {
        assert!(self.live.remove(&handle).is_some(), "double removal");
        self.removed += 1;
    }
}

fn assert_matches_index(graph: &MemoryGraph, index: usize) {
    let cubes = graph.cubes();
    assert_eq!(cubes.len(), index + 1);
    for (i, (idx, style)) in cubes.iter().enumerate() {
        assert_eq!(*idx, i, "duplicate or missing node");
        let expected = if i == index {
            NodeStyle::Current
        } else {
            NodeStyle::Placed
        };
        assert_eq!(*style, expected);
    }
    assert_eq!(graph.label_indices(), (0..=index).collect::<Vec<_>>());
}

/// it should show exactly indices [0, current] after every kind of state change
#[test]
fn visible_set_tracks_every_change() {
    let mut seq = StepSequencer::default();
    let mut graph = MemoryGraph::default();
    let mut sync = SceneSynchronizer::new(NodeLayout::default());

    sync.sync(&mut graph, &seq);
    assert_matches_index(&graph, 0);

    for _ in 0..5 {
        seq.advance();
        sync.sync(&mut graph, &seq);
        assert_matches_index(&graph, seq.current_index());
    }
    seq.retreat();
    sync.sync(&mut graph, &seq);
    assert_matches_index(&graph, 4);

    seq.reset();
    sync.sync(&mut graph, &seq);
    assert_matches_index(&graph, 0);

    for _ in 0..30 {
        seq.advance();
    }
    sync.sync(&mut graph, &seq);
    assert_matches_index(&graph, 26);
    assert_eq!(sync.live_count(), 27);
}

/// it should skip the rebuild when nothing changed
#[test]
fn sync_is_revision_gated() {
    let mut seq = StepSequencer::default();
    let mut graph = MemoryGraph::default();
    let mut sync = SceneSynchronizer::default();

    assert!(sync.sync(&mut graph, &seq));
    assert!(!sync.sync(&mut graph, &seq));
    assert_eq!(graph.removed, 0);

    seq.advance();
    assert!(sync.sync(&mut graph, &seq));
    // The two nodes of step 0 were retired before step 1 was added.
    assert_eq!(graph.removed, 2);
}

/// it should rebuild idempotently when forced
#[test]
fn forced_rebuild_is_idempotent() {
    let mut seq = StepSequencer::default();
    seq.advance();
    seq.advance();
    let mut graph = MemoryGraph::default();
    let mut sync = SceneSynchronizer::default();
    sync.rebuild(&mut graph, &seq);
    sync.rebuild(&mut graph, &seq);
    assert_matches_index(&graph, 2);
    assert_eq!(graph.live.len(), 6);
}

/// it should leave nothing behind after retire_all
#[test]
fn retire_all_empties_the_graph() {
    let mut seq = StepSequencer::default();
    for _ in 0..8 {
        seq.advance();
    }
    let mut graph = MemoryGraph::default();
    let mut sync = SceneSynchronizer::default();
    sync.sync(&mut graph, &seq);
    sync.retire_all(&mut graph);
    assert!(graph.live.is_empty());
    assert_eq!(sync.live_count(), 0);

    // A retired synchronizer rebuilds on the next sync even without a change.
    assert!(sync.sync(&mut graph, &seq));
}

/// it should label every node with its literal coordinate
#[test]
fn labels_carry_coordinate_text() {
    let mut seq = StepSequencer::default();
    seq.advance();
    let mut graph = MemoryGraph::default();
    let mut sync = SceneSynchronizer::default();
    sync.sync(&mut graph, &seq);
    let mut labels = graph.labels();
    labels.sort();
    assert_eq!(labels, vec!["(-1, -1, -1)", "(-1, -1, 0)"]);
}

/// it should hand out the live cube and label handles in index order
#[test]
fn handles_point_at_live_nodes_in_index_order() {
    let mut seq = StepSequencer::default();
    for _ in 0..3 {
        seq.advance();
    }
    let mut graph = MemoryGraph::default();
    let mut sync = SceneSynchronizer::default();
    sync.sync(&mut graph, &seq);

    let cube_indices: Vec<usize> = sync
        .cubes()
        .map(|h| match graph.live.get(h) {
            Some(Kind::Cube { index, .. }) => *index,
            other => panic!("cube handle {h} points at {other:?}"),
        })
        .collect();
    assert_eq!(cube_indices, vec![0, 1, 2, 3]);

    let label_indices: Vec<usize> = sync
        .labels()
        .map(|h| match graph.live.get(h) {
            Some(Kind::Label { index, .. }) => *index,
            other => panic!("label handle {h} points at {other:?}"),
        })
        .collect();
    assert_eq!(label_indices, cube_indices);

    sync.retire_all(&mut graph);
    assert_eq!(sync.cubes().count(), 0);
    assert_eq!(sync.labels().count(), 0);
}
