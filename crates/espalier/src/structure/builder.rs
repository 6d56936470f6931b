//! Two-pass forest construction from flat employee records.
//!
//! The build is a pure function of the record list and never fails:
//!
//! 1. **Allocation pass**: one childless [`HierarchyNode`] per record goes
//!    into an id-keyed arena, O(n).
//! 2. **Link pass**: each node is filed under its literal manager id when
//!    that id resolves in the arena; otherwise it is classified as a root,
//!    O(n). A missing, empty, or dangling manager reference all mean "root".
//! 3. **Assembly**: nodes are moved out of the arena into the owning nested
//!    structure, roots first. Children are moved, never aliased, so the
//!    output cannot contain reference cycles.
//!
//! Nodes still left in the arena after assembly sit on a manager-reference
//! cycle (a record naming itself included); the configured [`CyclePolicy`]
//! decides whether those components are re-attached as extra roots or
//! dropped. Either way the forest records a [`StructuralWarning`].

use std::collections::HashMap;

use indexmap::IndexMap;
use log::warn;

use espalier_core::identifier::Id;

use crate::config::CyclePolicy;
use crate::record::EmployeeRecord;

use super::{Forest, HierarchyNode, StructuralWarning};

/// Builds a hierarchy forest from a flat record list.
///
/// Roots and children both keep the relative order of their records in the
/// input list. The same input (and policy) always produces a structurally
/// identical forest; under [`CyclePolicy::Reparent`] every distinct record
/// id appears in the forest exactly once.
///
/// The builder performs no re-parenting: callers that want the reports of a
/// deleted manager to become roots must re-point them in the record list
/// before building.
pub(crate) fn build_forest(records: &[EmployeeRecord], cycle_policy: CyclePolicy) -> Forest {
    let mut warnings = Vec::new();

    // Allocation pass. IndexMap keeps first-occurrence order, so the link
    // pass below sees records in input order even after an overwrite.
    let mut arena: IndexMap<Id, HierarchyNode> = IndexMap::with_capacity(records.len());
    for record in records {
        let id = Id::new(record.id());
        if arena
            .insert(id, HierarchyNode::new(id, record.clone()))
            .is_some()
        {
            warn!(employee_id:% = id; "Duplicate employee id; the last record wins");
            warnings.push(StructuralWarning::DuplicateId { id });
        }
    }

    // Link pass. Only arena membership is checked: a dangling manager id
    // makes the node a root, a resolvable one files it under that manager.
    let mut children_of: HashMap<Id, Vec<Id>> = HashMap::new();
    let mut root_ids: Vec<Id> = Vec::new();
    for (&id, node) in arena.iter() {
        let manager = node
            .record()
            .manager_id()
            .filter(|manager| !manager.is_empty());
        match manager {
            Some(manager) if arena.contains_key(&Id::new(manager)) => {
                children_of.entry(Id::new(manager)).or_default().push(id);
            }
            _ => root_ids.push(id),
        }
    }

    // Assembly: move every reachable subtree out of the arena.
    let mut slots = NodeSlots::new(arena, children_of);
    let mut roots = Vec::with_capacity(root_ids.len());
    for id in root_ids {
        if let Some(root) = slots.detach_subtree(id) {
            roots.push(root);
        }
    }

    // Whatever is still in the arena hangs on a cycle. Consume one component
    // per remaining node, in input order.
    for id in slots.remaining_ids() {
        let Some(component) = slots.detach_subtree(id) else {
            continue;
        };

        let mut members = Vec::with_capacity(component.count());
        collect_member_ids(&component, &mut members);
        warn!(
            member_count = members.len(),
            first_member:% = members[0];
            "Manager references form a cycle"
        );
        warnings.push(StructuralWarning::CycleDetected { members });

        match cycle_policy {
            CyclePolicy::Reparent => roots.push(component),
            CyclePolicy::Discard => {}
        }
    }

    Forest::new(roots, warnings)
}

/// Arena of partially assembled nodes.
///
/// `detach_subtree` takes a node out of its slot and recursively moves its
/// children into it. Because a consumed slot yields `None`, traversal of a
/// cyclic component terminates when it reaches an already-taken node.
struct NodeSlots {
    nodes: IndexMap<Id, Option<HierarchyNode>>,
    children_of: HashMap<Id, Vec<Id>>,
}

impl NodeSlots {
    fn new(arena: IndexMap<Id, HierarchyNode>, children_of: HashMap<Id, Vec<Id>>) -> Self {
        Self {
            nodes: arena
                .into_iter()
                .map(|(id, node)| (id, Some(node)))
                .collect(),
            children_of,
        }
    }

    fn detach_subtree(&mut self, id: Id) -> Option<HierarchyNode> {
        let mut node = self.nodes.get_mut(&id)?.take()?;
        for child_id in self.children_of.remove(&id).unwrap_or_default() {
            if let Some(child) = self.detach_subtree(child_id) {
                node.push_child(child);
            }
        }
        Some(node)
    }

    /// Ids whose slots are still occupied, in input order.
    fn remaining_ids(&self) -> Vec<Id> {
        self.nodes
            .iter()
            .filter_map(|(&id, slot)| slot.is_some().then_some(id))
            .collect()
    }
}

fn collect_member_ids(node: &HierarchyNode, members: &mut Vec<Id>) {
    members.push(node.id());
    for child in node.children() {
        collect_member_ids(child, members);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, manager: Option<&str>) -> EmployeeRecord {
        let record = EmployeeRecord::new(id);
        match manager {
            Some(manager) => record.with_manager(manager),
            None => record,
        }
    }

    fn child_ids(node: &HierarchyNode) -> Vec<&str> {
        node.children().iter().map(|c| c.record().id()).collect()
    }

    fn root_ids(forest: &Forest) -> Vec<&str> {
        forest.roots().iter().map(|r| r.record().id()).collect()
    }

    #[test]
    fn test_empty_input_builds_empty_forest() {
        let forest = build_forest(&[], CyclePolicy::Reparent);
        assert!(forest.is_empty());
        assert!(forest.warnings().is_empty());
    }

    #[test]
    fn test_example_org() {
        // One CEO with two reports, plus a record whose manager is unknown.
        let records = vec![
            record("1", None),
            record("2", Some("1")),
            record("3", Some("1")),
            record("4", Some("9")),
        ];

        let forest = build_forest(&records, CyclePolicy::Reparent);

        assert_eq!(root_ids(&forest), vec!["1", "4"]);
        assert_eq!(child_ids(&forest.roots()[0]), vec!["2", "3"]);
        assert!(forest.roots()[1].children().is_empty());
        assert_eq!(forest.node_count(), 4);
        assert!(forest.warnings().is_empty());
    }

    #[test]
    fn test_missing_and_empty_manager_are_roots() {
        let records = vec![
            record("a", None),
            record("b", Some("")),
            record("c", Some("absent")),
        ];

        let forest = build_forest(&records, CyclePolicy::Reparent);
        assert_eq!(root_ids(&forest), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_children_and_roots_keep_input_order() {
        let records = vec![
            record("r2", None),
            record("c3", Some("r1")),
            record("r1", None),
            record("c1", Some("r1")),
            record("c2", Some("r1")),
        ];

        let forest = build_forest(&records, CyclePolicy::Reparent);

        assert_eq!(root_ids(&forest), vec!["r2", "r1"]);
        let r1 = &forest.roots()[1];
        assert_eq!(child_ids(r1), vec!["c3", "c1", "c2"]);
    }

    #[test]
    fn test_deep_chain() {
        let records = vec![
            record("1", None),
            record("2", Some("1")),
            record("3", Some("2")),
            record("4", Some("3")),
        ];

        let forest = build_forest(&records, CyclePolicy::Reparent);

        assert_eq!(forest.roots().len(), 1);
        assert_eq!(forest.node_count(), 4);
        let mut node = &forest.roots()[0];
        for expected in ["1", "2", "3", "4"] {
            assert_eq!(node.record().id(), expected);
            if !node.children().is_empty() {
                node = &node.children()[0];
            }
        }
    }

    #[test]
    fn test_forward_reference_resolves() {
        // Child appears before its manager in the list.
        let records = vec![record("2", Some("1")), record("1", None)];

        let forest = build_forest(&records, CyclePolicy::Reparent);
        assert_eq!(root_ids(&forest), vec!["1"]);
        assert_eq!(child_ids(&forest.roots()[0]), vec!["2"]);
    }

    #[test]
    fn test_self_reference_becomes_root_with_warning() {
        let records = vec![record("1", None), record("2", Some("2"))];

        let forest = build_forest(&records, CyclePolicy::Reparent);

        assert_eq!(root_ids(&forest), vec!["1", "2"]);
        assert!(forest.roots()[1].children().is_empty());
        assert_eq!(
            forest.warnings(),
            &[StructuralWarning::CycleDetected {
                members: vec![Id::new("2")],
            }]
        );
    }

    #[test]
    fn test_two_cycle_reparents_as_one_component() {
        let records = vec![record("a", Some("b")), record("b", Some("a"))];

        let forest = build_forest(&records, CyclePolicy::Reparent);

        // The first cycle member in input order becomes the component root.
        assert_eq!(root_ids(&forest), vec!["a"]);
        assert_eq!(child_ids(&forest.roots()[0]), vec!["b"]);
        assert_eq!(forest.node_count(), 2);
        assert_eq!(
            forest.warnings(),
            &[StructuralWarning::CycleDetected {
                members: vec![Id::new("a"), Id::new("b")],
            }]
        );
    }

    #[test]
    fn test_subtree_hanging_off_a_cycle_stays_attached() {
        let records = vec![
            record("a", Some("b")),
            record("b", Some("a")),
            record("c", Some("a")),
        ];

        let forest = build_forest(&records, CyclePolicy::Reparent);

        assert_eq!(root_ids(&forest), vec!["a"]);
        assert_eq!(child_ids(&forest.roots()[0]), vec!["b", "c"]);
        assert_eq!(forest.node_count(), 3);
        assert_eq!(forest.warnings().len(), 1);
    }

    #[test]
    fn test_discard_policy_drops_cyclic_component() {
        let records = vec![
            record("1", None),
            record("a", Some("b")),
            record("b", Some("a")),
        ];

        let forest = build_forest(&records, CyclePolicy::Discard);

        assert_eq!(root_ids(&forest), vec!["1"]);
        assert_eq!(forest.node_count(), 1);
        // The warning survives even though the component does not.
        assert_eq!(forest.warnings().len(), 1);
    }

    #[test]
    fn test_duplicate_id_last_record_wins() {
        let records = vec![
            record("1", None),
            EmployeeRecord::new("2")
                .with_manager("1")
                .with_attribute("position", "old"),
            EmployeeRecord::new("2")
                .with_manager("1")
                .with_attribute("position", "new"),
        ];

        let forest = build_forest(&records, CyclePolicy::Reparent);

        assert_eq!(forest.node_count(), 2);
        let child = &forest.roots()[0].children()[0];
        assert_eq!(child.record().attribute("position"), Some("new"));
        assert_eq!(
            forest.warnings(),
            &[StructuralWarning::DuplicateId { id: Id::new("2") }]
        );
    }

    #[test]
    fn test_build_is_deterministic() {
        let records = vec![
            record("1", None),
            record("2", Some("1")),
            record("3", Some("1")),
            record("4", Some("9")),
            record("5", Some("5")),
        ];

        let first = build_forest(&records, CyclePolicy::Reparent);
        let second = build_forest(&records.clone(), CyclePolicy::Reparent);
        assert_eq!(first, second);
    }
}
