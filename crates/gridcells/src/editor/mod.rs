//! Subdivision editor: the only mutation path into the graph.
//!
//! Purpose
//! - Three edit commands (`AddDivider`, `MoveDivider`, `EraseDivider`) keep the
//!   graph crossing-free and orthogonal; rejected edits leave it untouched and
//!   report a `NoChange` reason instead of an error.
//! - `WorkMode` selects which gesture the editor accepts; `command_for` maps a
//!   gesture to a command as a pure function of (mode, graph, gesture).
//! - After every change the graph is normalized and the minimal faces are
//!   recomputed, so queries always see dense indices and current faces.
//!
//! Coordinates: every point, region and offset is local to the area
//! (`Rect::to_local` converts caller coordinates).
//!
//! Code cross-refs: `graph::Graph` (store), `faces::minimal_faces`

mod add;
mod erase;
mod gesture;
mod shift;
mod types;

pub use gesture::{command_for, pick_edge, Gesture};
pub use shift::chain_through;
pub use types::{Command, GridCfg, NoChange, Outcome, WorkMode};

use tracing::debug;

use crate::faces::{self, face_polygon, Faces};
use crate::geom::{Point, Rect};
use crate::graph::{Edge, EdgeId, Graph, GraphError, Node, NodeId};

/// Editing session over one graph.
#[derive(Clone, Debug)]
pub struct Editor {
    graph: Graph,
    cfg: GridCfg,
    mode: WorkMode,
    gesture: Option<Gesture>,
    faces: Faces,
    selected: Vec<NodeId>,
}

impl Editor {
    pub fn new(area: Rect, cfg: GridCfg) -> Result<Self, GraphError> {
        let graph = Graph::new(area)?;
        let faces = faces::minimal_faces(&graph);
        Ok(Self {
            graph,
            cfg,
            mode: WorkMode::default(),
            gesture: None,
            faces,
            selected: Vec::new(),
        })
    }

    /// Start over on `area`: four corners, Draw mode, nothing selected.
    pub fn init(&mut self, area: Rect) -> Result<(), GraphError> {
        self.graph.init(area)?;
        self.mode = WorkMode::default();
        self.gesture = None;
        self.selected.clear();
        self.faces = faces::minimal_faces(&self.graph);
        Ok(())
    }

    #[inline]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    #[inline]
    pub fn nodes(&self) -> &[Node] {
        self.graph.nodes()
    }

    #[inline]
    pub fn edges(&self) -> &[Edge] {
        self.graph.edges()
    }

    #[inline]
    pub fn cfg(&self) -> &GridCfg {
        &self.cfg
    }

    #[inline]
    pub fn mode(&self) -> WorkMode {
        self.mode
    }

    /// Switch mode; a gesture in progress is dropped.
    pub fn set_mode(&mut self, mode: WorkMode) {
        self.mode = mode;
        self.gesture = None;
    }

    pub fn add_divider(&mut self, a: Point, b: Point) -> Outcome {
        self.apply(Command::AddDivider { a, b })
    }

    pub fn move_divider(&mut self, edge: EdgeId, offset: i64) -> Outcome {
        self.apply(Command::MoveDivider { edge, offset })
    }

    pub fn erase_divider(&mut self, region: Rect) -> Outcome {
        self.apply(Command::EraseDivider { region })
    }

    /// Run one command to completion, then refresh faces if anything changed.
    pub fn apply(&mut self, command: Command) -> Outcome {
        let outcome = match command {
            Command::AddDivider { a, b } => add::add_divider(&mut self.graph, &self.cfg, a, b),
            Command::MoveDivider { edge, offset } => {
                shift::move_divider(&mut self.graph, &self.cfg, edge, offset)
            }
            Command::EraseDivider { region } => erase::erase_divider(&mut self.graph, region),
        };
        match outcome {
            Outcome::Changed => self.settle(),
            Outcome::Unchanged(reason) => debug!(?command, %reason, "edit rejected"),
        }
        outcome
    }

    fn settle(&mut self) {
        self.graph.normalize();
        self.faces = faces::minimal_faces(&self.graph);
        if !self.selected.is_empty() && !self.faces.contains_cycle(&self.selected) {
            self.selected.clear();
        }
        debug!(
            nodes = self.graph.nodes().len(),
            edges = self.graph.edges().len(),
            faces = self.faces.len(),
            "edit applied"
        );
    }

    pub fn press(&mut self, p: Point) {
        self.gesture = Some(Gesture::at(p));
    }

    /// Update the pending gesture; ignored without a prior `press`.
    pub fn drag(&mut self, p: Point) {
        if let Some(g) = self.gesture.as_mut() {
            g.current = p;
        }
    }

    /// Finish the gesture and apply the command it issues.
    pub fn release(&mut self, p: Point) -> Outcome {
        let Some(mut gesture) = self.gesture.take() else {
            return Outcome::Unchanged(NoChange::Degenerate);
        };
        gesture.current = p;
        match command_for(self.mode, &self.graph, &self.cfg, &gesture) {
            Some(command) => self.apply(command),
            None => Outcome::Unchanged(NoChange::Degenerate),
        }
    }

    /// Command the pending gesture would issue on release.
    pub fn preview(&self) -> Option<Command> {
        let gesture = self.gesture.as_ref()?;
        command_for(self.mode, &self.graph, &self.cfg, gesture)
    }

    #[inline]
    pub fn minimal_faces(&self) -> &Faces {
        &self.faces
    }

    #[inline]
    pub fn selected_face(&self) -> &[NodeId] {
        &self.selected
    }

    /// Set the highlighted node sequence (empty clears it).
    ///
    /// A sequence naming a node outside the graph clears the selection and
    /// returns false.
    pub fn select_face(&mut self, cycle: Vec<NodeId>) -> bool {
        let n = self.graph.nodes().len();
        if cycle.iter().any(|id| id.0 >= n) {
            debug!(len = cycle.len(), nodes = n, "selection names unknown nodes");
            self.selected.clear();
            return false;
        }
        self.selected = cycle;
        true
    }

    /// Select the face under `p`; clears the selection and returns false if none.
    pub fn select_face_at(&mut self, p: Point) -> bool {
        let hit = self.faces.face_at(&self.graph, p).map(|(_, c)| c.to_vec());
        self.selected = hit.unwrap_or_default();
        !self.selected.is_empty()
    }

    /// Area of the selected face in square pixels, if one is selected.
    pub fn selected_area(&self) -> Option<i128> {
        let n = self.graph.nodes().len();
        if self.selected.is_empty() || self.selected.iter().any(|id| id.0 >= n) {
            return None;
        }
        Some(face_polygon(&self.graph, &self.selected).area2().abs() / 2)
    }
}
