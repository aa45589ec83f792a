//! Drop target tree abstraction.
//!
//! The render layer owns the visual tree. The drag core only needs to look at a
//! node's markers and walk upward through its parents, so any scene graph can
//! take part by implementing [`DropNode`]. [`SceneTree`] is a small arena
//! implementation for hosts that do not have one of their own.

use chrono::NaiveDate;
use egui::Rect;

/// A node in the rendered calendar tree, as seen at drop time.
///
/// Implementors are expected to be cheap handles (references or ids), since
/// walking the tree hands out a new handle per parent.
pub trait DropNode: Sized {
    /// Date attached to calendar cells by the render layer.
    fn date_marker(&self) -> Option<NaiveDate>;

    /// True for boxes that display an event.
    fn is_event_box(&self) -> bool;

    /// True for cells of a time grid, whose vertical extent maps onto clock time.
    fn is_time_slot(&self) -> bool;

    /// On-screen bounds, if the node has been laid out.
    fn bounds(&self) -> Option<Rect>;

    fn parent(&self) -> Option<Self>;
}

/// Index of a node inside a [`SceneTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// Markers attached to a node when it is added to a [`SceneTree`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SceneNodeSpec {
    pub label: Option<String>,
    pub date: Option<NaiveDate>,
    pub event_box: bool,
    pub time_slot: bool,
    pub bounds: Option<Rect>,
}

impl SceneNodeSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// A calendar day cell carrying a date marker.
    pub fn date_cell(date: NaiveDate) -> Self {
        Self::new().with_date(date)
    }

    /// A box displaying an event.
    pub fn event_box() -> Self {
        Self {
            event_box: true,
            ..Self::default()
        }
    }

    /// A time-grid cell with measurable bounds.
    pub fn time_slot(bounds: Rect) -> Self {
        Self {
            time_slot: true,
            bounds: Some(bounds),
            ..Self::default()
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_bounds(mut self, bounds: Rect) -> Self {
        self.bounds = Some(bounds);
        self
    }

    pub fn as_time_slot(mut self) -> Self {
        self.time_slot = true;
        self
    }
}

#[derive(Debug, Clone)]
struct SceneNode {
    spec: SceneNodeSpec,
    parent: Option<NodeId>,
}

/// Arena-backed tree of calendar cells and event boxes.
#[derive(Debug, Clone, Default)]
pub struct SceneTree {
    nodes: Vec<SceneNode>,
}

impl SceneTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_root(&mut self, spec: SceneNodeSpec) -> NodeId {
        self.push(spec, None)
    }

    /// Add a child under `parent`. Ids from another tree yield a detached node.
    pub fn add_child(&mut self, parent: NodeId, spec: SceneNodeSpec) -> NodeId {
        let parent = (parent.0 < self.nodes.len()).then_some(parent);
        self.push(spec, parent)
    }

    fn push(&mut self, spec: SceneNodeSpec, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(SceneNode { spec, parent });
        id
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Handle for `id`, or `None` if the id is not part of this tree.
    pub fn node(&self, id: NodeId) -> Option<NodeRef<'_>> {
        (id.0 < self.nodes.len()).then_some(NodeRef { tree: self, id })
    }

    /// Find the first node with the given label.
    pub fn find(&self, label: &str) -> Option<NodeRef<'_>> {
        self.nodes
            .iter()
            .position(|node| node.spec.label.as_deref() == Some(label))
            .map(|index| NodeRef {
                tree: self,
                id: NodeId(index),
            })
    }
}

/// Borrowed handle to a node of a [`SceneTree`].
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    tree: &'a SceneTree,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn label(&self) -> Option<&'a str> {
        self.spec().label.as_deref()
    }

    fn spec(&self) -> &'a SceneNodeSpec {
        &self.tree.nodes[self.id.0].spec
    }
}

impl std::fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("label", &self.label())
            .finish()
    }
}

impl DropNode for NodeRef<'_> {
    fn date_marker(&self) -> Option<NaiveDate> {
        self.spec().date
    }

    fn is_event_box(&self) -> bool {
        self.spec().event_box
    }

    fn is_time_slot(&self) -> bool {
        self.spec().time_slot
    }

    fn bounds(&self) -> Option<Rect> {
        self.spec().bounds
    }

    fn parent(&self) -> Option<Self> {
        let parent = self.tree.nodes[self.id.0].parent?;
        Some(NodeRef {
            tree: self.tree,
            id: parent,
        })
    }
}
