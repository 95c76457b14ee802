//! Property-based tests for the convergence planner.
//!
//! Uses `proptest` to verify the planner's invariants across many random
//! desired/current membership sets.

#![allow(clippy::expect_used)]

use std::collections::{BTreeMap, BTreeSet};

use proptest::prelude::*;

use hostsync::domain::plan::{Action, ResolvedRefs, plan};
use hostsync::domain::{
    DesiredHost, EntityId, GroupRef, HostSnapshot, ObservedHost, TemplateRef,
};

use crate::mocks::desired;

/// Strategy: a small set of group-like names.
fn name_set() -> impl Strategy<Value = BTreeSet<String>> {
    proptest::collection::btree_set("[a-e]{1,2}", 0..5)
}

/// Fake ids derived from names keep the refs and snapshot consistent.
fn refs_for(groups: &BTreeSet<String>, templates: &BTreeSet<String>) -> ResolvedRefs {
    ResolvedRefs {
        groups: groups
            .iter()
            .map(|n| GroupRef {
                name: n.clone(),
                id: EntityId(format!("g-{n}")),
            })
            .collect(),
        templates: templates
            .iter()
            .map(|n| TemplateRef {
                name: n.clone(),
                id: EntityId(format!("t-{n}")),
            })
            .collect(),
    }
}

fn membership(names: &BTreeSet<String>, prefix: &str) -> BTreeMap<String, EntityId> {
    names
        .iter()
        .map(|n| (n.clone(), EntityId(format!("{prefix}-{n}"))))
        .collect()
}

fn scenario(
    current_groups: &BTreeSet<String>,
    desired_groups: &BTreeSet<String>,
    remove_groups: bool,
    enabled: bool,
) -> (DesiredHost, ResolvedRefs, ObservedHost) {
    let mut d = desired("srv1");
    d.groups = desired_groups.clone();
    d.remove_groups = remove_groups;
    let refs = refs_for(desired_groups, &BTreeSet::new());
    let observed = ObservedHost {
        id: EntityId::from("10101"),
        snapshot: HostSnapshot {
            enabled,
            groups: membership(current_groups, "g"),
            templates: BTreeMap::new(),
        },
    };
    (d, refs, observed)
}

/// Replay a plan's effects onto the snapshot, as the server would.
fn simulate(snapshot: &HostSnapshot, actions: &[Action]) -> HostSnapshot {
    let mut next = snapshot.clone();
    for action in actions {
        match action {
            Action::SetStatus { enabled, .. } => next.enabled = *enabled,
            Action::AddToGroup { group, .. } => {
                next.groups.insert(group.name.clone(), group.id.clone());
            }
            Action::RemoveFromGroup { group, .. } => {
                next.groups.remove(&group.name);
            }
            Action::LinkTemplate { template, .. } => {
                next.templates
                    .insert(template.name.clone(), template.id.clone());
            }
            Action::UnlinkTemplate { template, .. } => {
                next.templates.remove(&template.name);
            }
            Action::CreateHost { .. } | Action::DeleteHost { .. } => {
                unreachable!("existence actions are not planned for an existing present host")
            }
        }
    }
    next
}

proptest! {
    /// Applying a plan converges: re-planning against the resulting state
    /// yields an empty plan, whatever the starting sets were.
    #[test]
    fn prop_replanning_after_apply_is_empty(
        current in name_set(),
        wanted in name_set(),
        remove_groups in any::<bool>(),
        enabled in any::<bool>(),
    ) {
        let (d, refs, observed) = scenario(&current, &wanted, remove_groups, enabled);
        let first = plan(&d, &refs, Some(&observed));

        let converged = ObservedHost {
            id: observed.id.clone(),
            snapshot: simulate(&observed.snapshot, &first.actions),
        };
        let second = plan(&d, &refs, Some(&converged));
        prop_assert!(second.is_empty(), "second plan not empty: {:?}", second.actions);
    }

    /// Additive mode never plans a removal, whatever the extra groups are.
    #[test]
    fn prop_additive_mode_never_removes(
        current in name_set(),
        wanted in name_set(),
    ) {
        let (d, refs, observed) = scenario(&current, &wanted, false, true);
        let p = plan(&d, &refs, Some(&observed));
        prop_assert!(
            !p.actions.iter().any(|a| matches!(a, Action::RemoveFromGroup { .. })),
            "additive plan contained a removal"
        );
    }

    /// Planned group additions are exactly desired-minus-current.
    #[test]
    fn prop_additions_are_set_difference(
        current in name_set(),
        wanted in name_set(),
    ) {
        let (d, refs, observed) = scenario(&current, &wanted, true, true);
        let p = plan(&d, &refs, Some(&observed));

        let added: BTreeSet<String> = p
            .actions
            .iter()
            .filter_map(|a| match a {
                Action::AddToGroup { group, .. } => Some(group.name.clone()),
                _ => None,
            })
            .collect();
        let expected: BTreeSet<String> = wanted.difference(&current).cloned().collect();
        prop_assert_eq!(added, expected);

        let removed: BTreeSet<String> = p
            .actions
            .iter()
            .filter_map(|a| match a {
                Action::RemoveFromGroup { group, .. } => Some(group.name.clone()),
                _ => None,
            })
            .collect();
        let expected_removed: BTreeSet<String> = current.difference(&wanted).cloned().collect();
        prop_assert_eq!(removed, expected_removed);
    }
}
