// ============================================================================
// Menu Core - Flattener
// File: crates/menu-core/src/tree/flatten.rs
// Description: Rows to pre-order annotated nodes (depth, path, url)
// ============================================================================

use std::collections::HashMap;

use uuid::Uuid;

use crate::domain::{Forest, MenuItem, MenuNode};

/// Turn the items of one menu into a pre-order sequence of annotated nodes.
///
/// Every item is followed by all of its descendants; siblings keep `sort`
/// order with ties resolved by input order. Inactive or removed items are
/// dropped together with their subtrees, as are items whose parent is not
/// part of the input.
pub fn flatten(items: &[MenuItem]) -> Forest {
    let mut ordered: Vec<&MenuItem> = items
        .iter()
        .filter(|item| item.is_active && !item.is_deleted())
        .collect();
    // stable: ties keep store order
    ordered.sort_by_key(|item| item.sort);

    let mut by_parent: HashMap<Option<Uuid>, Vec<&MenuItem>> = HashMap::new();
    for item in ordered {
        by_parent.entry(item.parent_id).or_default().push(item);
    }

    let mut flat = Vec::with_capacity(items.len());
    walk(&by_parent, None, 0, "", &mut flat);
    flat
}

fn walk(
    by_parent: &HashMap<Option<Uuid>, Vec<&MenuItem>>,
    parent_id: Option<Uuid>,
    depth: usize,
    parent_path: &str,
    flat: &mut Forest,
) {
    let Some(children) = by_parent.get(&parent_id) else {
        return;
    };

    for item in children {
        let path = if parent_path.is_empty() {
            item.id.to_string()
        } else {
            format!("{}{}{}", parent_path, menu_shared::constants::PATH_SEPARATOR, item.id)
        };
        flat.push(MenuNode::from_item(item, depth, path.clone()));
        walk(by_parent, Some(item.id), depth + 1, &path, flat);
    }
}
