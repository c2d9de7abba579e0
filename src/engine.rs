//! The citation engine: single owner of all mutable view state.
//!
//! Holds the matrix store, the author registry, and the current threshold
//! in one explicit instance constructed at load. UI events mutate the
//! active set or threshold through the engine, then an explicit
//! [`CitationEngine::refresh`] runs the pure pipeline and emits an
//! immutable snapshot for the rendering layer. Nothing lives in ambient
//! globals, and nothing recomputes until `refresh` is called, so batched
//! membership changes cost exactly one pass.

use tracing::debug;

use crate::matrix::MatrixStore;
use crate::pipeline;
use crate::registry::{AuthorRecord, AuthorRegistry};
use crate::types::{Author, AuthorId, GraphSnapshot};
use crate::{DEFAULT_ACTIVE_COUNT, DEFAULT_THRESHOLD, MAX_THRESHOLD};

/// Engine instance owning Matrix Store + Author Registry + Threshold.
#[derive(Debug, Clone)]
pub struct CitationEngine {
    matrix: MatrixStore,
    registry: AuthorRegistry,
    threshold: u32,
}

impl CitationEngine {
    /// Construct the engine from a loaded matrix and metadata records.
    ///
    /// Seeds the initial active set with the top
    /// [`DEFAULT_ACTIVE_COUNT`](crate::DEFAULT_ACTIVE_COUNT) authors by
    /// full-matrix incoming rank and starts at the default threshold.
    pub fn new(matrix: MatrixStore, metadata: &[AuthorRecord]) -> Self {
        let mut registry = AuthorRegistry::from_matrix(&matrix, metadata);
        registry.seed_active(&matrix, DEFAULT_ACTIVE_COUNT);
        Self {
            matrix,
            registry,
            threshold: DEFAULT_THRESHOLD,
        }
    }

    /// Current threshold.
    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Set the threshold, clamped to `[0, MAX_THRESHOLD]`.
    ///
    /// Marks state only; call [`refresh`](Self::refresh) to recompute.
    pub fn set_threshold(&mut self, threshold: u32) {
        self.threshold = threshold.min(MAX_THRESHOLD);
    }

    /// Set active membership for one author. Returns false for an
    /// unregistered id. Marks state only.
    pub fn set_active(&mut self, id: &AuthorId, active: bool) -> bool {
        self.registry.set_active(id, active)
    }

    /// The immutable matrix store.
    pub fn matrix(&self) -> &MatrixStore {
        &self.matrix
    }

    /// The author registry.
    pub fn registry(&self) -> &AuthorRegistry {
        &self.registry
    }

    /// Run the full pipeline and emit a snapshot.
    ///
    /// In order: aggregate over the active set, write the totals back onto
    /// the registry, classify bidirectional pairs, rebuild the edge list,
    /// then emit `{nodes, edges}`. Nodes are active authors with a
    /// resolved birth year, in registry order; the classifier and builder
    /// see the same plottable id set, which is what keeps every emitted
    /// edge endpoint inside the emitted node list.
    pub fn refresh(&mut self) -> GraphSnapshot {
        let active = self.registry.active_ids();
        let totals = pipeline::recompute(&self.matrix, &active);
        self.registry.apply_totals(&totals);

        let plottable = self.registry.plottable_ids();
        let pairs = pipeline::classify(&self.matrix, &plottable, self.threshold);
        let edges = pipeline::build(&self.matrix, &plottable, self.threshold, &pairs);

        let nodes: Vec<Author> = self
            .registry
            .iter()
            .filter(|a| a.active && a.is_resolved())
            .cloned()
            .collect();

        debug!(
            active = active.len(),
            nodes = nodes.len(),
            edges = edges.len(),
            bidirectional = pairs.len(),
            threshold = self.threshold,
            "pipeline refresh"
        );

        GraphSnapshot::new(nodes, edges, self.threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap as Map;

    fn matrix_of(pairs: &[(&str, &str, u32)], columns: &[&str]) -> MatrixStore {
        let mut rows: Map<AuthorId, Map<AuthorId, u32>> = Map::new();
        for (s, t, c) in pairs {
            rows.entry(AuthorId::new(*s))
                .or_default()
                .insert(AuthorId::new(*t), *c);
        }
        MatrixStore::new(columns.iter().map(|c| AuthorId::new(*c)).collect(), rows)
    }

    fn record(name: &str, birth: Option<i32>, death: Option<i32>) -> AuthorRecord {
        AuthorRecord {
            name: name.to_string(),
            birth_year: birth,
            death_year: death,
        }
    }

    fn two_author_engine() -> CitationEngine {
        let m = matrix_of(
            &[("Plato", "Aristotle", 5), ("Aristotle", "Plato", 3)],
            &["Plato", "Aristotle"],
        );
        let meta = vec![
            record("Plato", Some(-428), None),
            record("Aristotle", Some(-384), None),
        ];
        CitationEngine::new(m, &meta)
    }

    #[test]
    fn test_threshold_is_clamped() {
        let mut engine = two_author_engine();
        engine.set_threshold(99);
        assert_eq!(engine.threshold(), MAX_THRESHOLD);
        engine.set_threshold(0);
        assert_eq!(engine.threshold(), 0);
    }

    #[test]
    fn test_refresh_writes_totals_onto_registry() {
        let mut engine = two_author_engine();
        engine.set_threshold(3);
        engine.refresh();

        let plato = engine.registry().get(&AuthorId::new("Plato")).unwrap();
        assert_eq!(plato.outgoing_refs, 5);
        assert_eq!(plato.incoming_refs, 3);
    }

    #[test]
    fn test_deactivated_author_reads_zero_totals() {
        let mut engine = two_author_engine();
        engine.refresh();
        engine.set_active(&AuthorId::new("Aristotle"), false);
        engine.refresh();

        let aristotle = engine.registry().get(&AuthorId::new("Aristotle")).unwrap();
        assert_eq!(aristotle.outgoing_refs, 0);
        assert_eq!(aristotle.incoming_refs, 0);

        // Plato alone: no active counterparts, aggregate-zero but plotted.
        let plato = engine.registry().get(&AuthorId::new("Plato")).unwrap();
        assert_eq!(plato.outgoing_refs, 0);
        let snapshot = engine.refresh();
        assert!(snapshot.contains_node(&AuthorId::new("Plato")));
    }

    #[test]
    fn test_snapshot_is_internally_consistent() {
        let mut engine = two_author_engine();
        engine.set_threshold(3);
        let snapshot = engine.refresh();
        assert!(snapshot.is_consistent());
        assert_eq!(snapshot.edges.len(), 2);
    }

    #[test]
    fn test_unresolved_author_never_linked_but_counted() {
        let m = matrix_of(
            &[
                ("Plato", "Mystery", 8),
                ("Mystery", "Plato", 8),
                ("Plato", "Aristotle", 5),
                ("Aristotle", "Plato", 3),
            ],
            &["Plato", "Aristotle", "Mystery"],
        );
        // Mystery has no metadata record at all.
        let meta = vec![
            record("Plato", Some(-428), None),
            record("Aristotle", Some(-384), None),
        ];
        let mut engine = CitationEngine::new(m, &meta);
        engine.set_threshold(3);
        let snapshot = engine.refresh();

        // Mystery is active (top-ranked) but unplaceable: absent from
        // nodes, untouched by edges.
        assert!(engine.registry().is_active(&AuthorId::new("Mystery")));
        assert!(!snapshot.contains_node(&AuthorId::new("Mystery")));
        assert!(snapshot
            .edges
            .iter()
            .all(|e| e.source.as_str() != "Mystery" && e.target.as_str() != "Mystery"));

        // Peers still count their references to and from it.
        let plato = engine.registry().get(&AuthorId::new("Plato")).unwrap();
        assert_eq!(plato.outgoing_refs, 13);
        assert_eq!(plato.incoming_refs, 11);
    }
}
