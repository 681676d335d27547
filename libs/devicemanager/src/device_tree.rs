// Copyright (c) ScaleFS LLC; used with permission
// Licensed under the MIT License

use std::collections::HashMap;

/// Canonical form used to match instance IDs across subsystems.
///
/// Instance IDs read from a device directly may come back in lower or mixed case (e.g.
/// `scsi\disk&ven_x`) while the device tree hierarchy stores them upper-cased (`SCSI\DISK&VEN_X`).
pub fn normalize_instance_id(instance_id: &str) -> String {
    instance_id.to_uppercase()
}

pub fn instance_ids_match(left: &str, right: &str) -> bool {
    normalize_instance_id(left) == normalize_instance_id(right)
}

/// Parent/child index over device instance IDs, keyed by normalized ID.
///
/// Built once from a listing of (parent, child) relations; lookups accept an ID in any case and return
/// the IDs as they were recorded in the listing.
#[derive(Clone, Debug, Default)]
pub struct DeviceTree {
    children: HashMap<String, Vec<String>>,
    parents: HashMap<String, String>,
}

impl DeviceTree {
    pub fn from_relations<I, P, C>(relations: I) -> Self
    where
        I: IntoIterator<Item = (P, C)>,
        P: AsRef<str>,
        C: AsRef<str>,
    {
        let mut tree = DeviceTree::default();
        for (parent, child) in relations {
            tree.insert(parent.as_ref(), child.as_ref());
        }
        tree
    }

    pub fn insert(&mut self, parent: &str, child: &str) {
        let child_key = normalize_instance_id(child);
        if let Some(previous_parent) = self.parents.get(&child_key) {
            if instance_ids_match(previous_parent, parent) {
                return;
            }
            // a device has one parent; the latest relation wins
            let previous_key = normalize_instance_id(previous_parent);
            if let Some(siblings) = self.children.get_mut(&previous_key) {
                siblings.retain(|sibling| !instance_ids_match(sibling, child));
            }
        }

        self.parents.insert(child_key, parent.to_string());
        self.children.entry(normalize_instance_id(parent)).or_default().push(child.to_string());
    }

    /// Recorded children of `instance_id`; empty when it has none (the common case for leaf devices).
    pub fn children_of(&self, instance_id: &str) -> &[String] {
        self.children.get(&normalize_instance_id(instance_id)).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn parent_of(&self, instance_id: &str) -> Option<&str> {
        self.parents.get(&normalize_instance_id(instance_id)).map(String::as_str)
    }

    /// Number of recorded (parent, child) relations.
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }
}
