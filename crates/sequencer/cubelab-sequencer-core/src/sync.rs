//! Scene synchronizer and the scene-graph trait it drives.
//!
//! The synchronizer keeps the handles of every node it added last time. A
//! rebuild retires all of them before adding the freshly planned set, so the
//! host never sees two generations of nodes at once.

use log::debug;

use crate::plan::{plan_visible_nodes, NodeLayout, PlannedNode};
use crate::sequencer::StepSequencer;

/// Host scene graph that accepts opaque visual nodes.
/// Adapters (Bevy/WASM) implement this and pass it into SceneSynchronizer::sync().
pub trait SceneGraph {
    type Handle;

    fn add_cube(&mut self, node: &PlannedNode) -> Self::Handle;
    fn add_label(&mut self, node: &PlannedNode) -> Self::Handle;
    fn remove(&mut self, handle: Self::Handle);
}

/// Handles for one planned node.
#[derive(Clone, Debug)]
struct LiveNode<H> {
    cube: H,
    label: H,
}

#[derive(Debug)]
pub struct SceneSynchronizer<H> {
    layout: NodeLayout,
    live: Vec<LiveNode<H>>,
    synced_revision: Option<u64>,
}

impl<H> SceneSynchronizer<H> {
    pub fn new(layout: NodeLayout) -> Self {
        Self {
            layout,
            live: Vec::new(),
            synced_revision: None,
        }
    }

    #[inline]
    pub fn layout(&self) -> &NodeLayout {
        &self.layout
    }

    /// Number of planned nodes currently in the host graph (cube + label pairs).
    #[inline]
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    /// Iterate the live cube handles in index order.
    pub fn cubes(&self) -> impl Iterator<Item = &H> {
        self.live.iter().map(|n| &n.cube)
    }

    pub fn labels(&self) -> impl Iterator<Item = &H> {
        self.live.iter().map(|n| &n.label)
    }

    /// Rebuild when the sequencer changed since the last sync.
    /// Returns true when a rebuild happened.
    pub fn sync<G>(&mut self, graph: &mut G, seq: &StepSequencer) -> bool
    where
        G: SceneGraph<Handle = H>,
    {
        if self.synced_revision == Some(seq.revision()) {
            return false;
        }
        self.rebuild(graph, seq);
        true
    }

    /// Retire every live node, then add the planned set for the current index.
    pub fn rebuild<G>(&mut self, graph: &mut G, seq: &StepSequencer)
    where
        G: SceneGraph<Handle = H>,
    {
        self.retire_all(graph);
        let plan = plan_visible_nodes(seq.coordinates(), seq.current_index(), &self.layout);
        self.live.reserve(plan.len());
        for node in &plan.nodes {
            let cube = graph.add_cube(node);
            let label = graph.add_label(node);
            self.live.push(LiveNode { cube, label });
        }
        self.synced_revision = Some(seq.revision());
        debug!(
            "scene rebuilt with {} nodes at index {}",
            self.live.len(),
            seq.current_index()
        );
    }

    /// Remove every node this synchronizer added. Used on unmount.
    pub fn retire_all<G>(&mut self, graph: &mut G)
    where
        G: SceneGraph<Handle = H>,
    {
        for LiveNode { cube, label } in self.live.drain(..) {
            graph.remove(cube);
            graph.remove(label);
        }
        self.synced_revision = None;
    }
}

impl<H> Default for SceneSynchronizer<H> {
    fn default() -> Self {
        Self::new(NodeLayout::default())
    }
}
