//! Cycle keys, catalogs and the filtered face set.

use std::collections::BTreeMap;
use std::fmt;

use crate::geom::{Location, Point};
use crate::graph::{Graph, NodeId};

use super::filter::face_polygon;

/// De-duplication key: the node indices of a cycle, sorted ascending.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CycleKey(pub Vec<usize>);

impl CycleKey {
    /// Key of a closed sequence `[v, a, b, ..., v]` (the repeated start is skipped).
    pub fn from_cycle(cycle: &[NodeId]) -> Self {
        let mut ids: Vec<usize> = cycle.iter().skip(1).map(|n| n.0).collect();
        ids.sort_unstable();
        Self(ids)
    }
}

impl fmt::Display for CycleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (k, id) in self.0.iter().enumerate() {
            if k > 0 {
                f.write_str("-")?;
            }
            write!(f, "{id}")?;
        }
        Ok(())
    }
}

/// Key → closed node sequence (first == last).
pub type CycleCatalog = BTreeMap<CycleKey, Vec<NodeId>>;

/// Minimal faces of a graph, as produced by `filter_minimal`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Faces {
    catalog: CycleCatalog,
}

impl From<CycleCatalog> for Faces {
    fn from(catalog: CycleCatalog) -> Self {
        Self { catalog }
    }
}

impl Faces {
    #[inline]
    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CycleKey, &[NodeId])> + '_ {
        self.catalog.iter().map(|(k, c)| (k, c.as_slice()))
    }

    pub fn get(&self, key: &CycleKey) -> Option<&[NodeId]> {
        self.catalog.get(key).map(Vec::as_slice)
    }

    /// True if `cycle` is exactly one of the stored face sequences.
    pub fn contains_cycle(&self, cycle: &[NodeId]) -> bool {
        self.get(&CycleKey::from_cycle(cycle)) == Some(cycle)
    }

    /// Face whose interior contains `p` (boundary points belong to no face).
    pub fn face_at(&self, graph: &Graph, p: Point) -> Option<(&CycleKey, &[NodeId])> {
        self.iter()
            .find(|(_, cycle)| face_polygon(graph, cycle).locate(p) == Location::Inside)
    }

    #[inline]
    pub fn catalog(&self) -> &CycleCatalog {
        &self.catalog
    }
}
