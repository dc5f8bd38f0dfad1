// ============================================================================
// Menu Core - Tree Assembler
// File: crates/menu-core/src/tree/assemble.rs
// Description: Flat pre-order nodes to a nested forest
// ============================================================================

use std::collections::{HashMap, HashSet};

use uuid::Uuid;

use crate::domain::{Forest, MenuNode};

/// Nest a flat sequence by `parent_id`.
///
/// Roots and siblings keep their relative order from `flat`. A node whose
/// parent is missing from `flat` becomes a root. The input is left untouched;
/// every node in the result is a fresh copy.
pub fn assemble(flat: &[MenuNode]) -> Forest {
    let known: HashSet<Uuid> = flat.iter().map(|node| node.id).collect();

    let mut children_of: HashMap<Uuid, Vec<usize>> = HashMap::new();
    let mut roots = Vec::new();
    for (pos, node) in flat.iter().enumerate() {
        match node.parent_id.filter(|parent| known.contains(parent)) {
            Some(parent) => children_of.entry(parent).or_default().push(pos),
            None => roots.push(pos),
        }
    }

    roots
        .into_iter()
        .map(|pos| build(flat, pos, &children_of))
        .collect()
}

fn build(flat: &[MenuNode], pos: usize, children_of: &HashMap<Uuid, Vec<usize>>) -> MenuNode {
    let mut node = flat[pos].clone();
    node.children = children_of
        .get(&node.id)
        .map(|positions| {
            positions
                .iter()
                .map(|&child| build(flat, child, children_of))
                .collect()
        })
        .unwrap_or_default();
    node
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::item;
    use crate::tree::flatten;

    fn sample() -> Forest {
        let menu_id = Uuid::new_v4();
        let home = item(menu_id, None, "Home", "/", 1);
        let products = item(menu_id, Some(home.id), "Products", "/products", 1);
        let laptops = item(menu_id, Some(products.id), "Laptops", "/products/laptops", 1);
        let phones = item(menu_id, Some(products.id), "Phones", "/products/phones", 2);
        let services = item(menu_id, Some(home.id), "Services", "/services", 2);
        let about = item(menu_id, None, "About", "/about", 2);
        flatten(&[home, products, laptops, phones, services, about])
    }

    fn title(node: &MenuNode) -> &str {
        node.title.as_deref().unwrap_or_default()
    }

    #[test]
    fn test_builds_hierarchy() {
        let forest = assemble(&sample());

        assert_eq!(forest.len(), 2);
        assert_eq!(title(&forest[0]), "Home");
        assert_eq!(title(&forest[1]), "About");

        let home_children: Vec<&str> = forest[0].children.iter().map(title).collect();
        assert_eq!(home_children, vec!["Products", "Services"]);

        let product_children: Vec<&str> = forest[0].children[0].children.iter().map(title).collect();
        assert_eq!(product_children, vec!["Laptops", "Phones"]);

        assert!(forest[1].children.is_empty());
        assert_eq!(forest[0].sort, 1);
        assert_eq!(forest[1].sort, 2);
    }

    #[test]
    fn test_keeps_every_node_once() {
        let flat = sample();
        let forest = assemble(&flat);
        assert_eq!(forest.iter().map(MenuNode::subtree_len).sum::<usize>(), flat.len());
    }

    #[test]
    fn test_missing_parent_becomes_root() {
        let mut flat = sample();
        // drop "Products"; its children must surface as roots in flat order
        flat.remove(1);

        let forest = assemble(&flat);
        let roots: Vec<&str> = forest.iter().map(title).collect();
        assert_eq!(roots, vec!["Home", "Laptops", "Phones", "About"]);
        assert_eq!(forest[0].children.len(), 1);
    }

    #[test]
    fn test_assembling_twice_yields_equal_independent_forests() {
        let flat = sample();
        let mut first = assemble(&flat);
        let second = assemble(&flat);
        assert_eq!(first, second);

        first[0].children.clear();
        first[0].title = Some("Changed".to_string());
        assert_ne!(first, second);
        assert_eq!(second[0].children.len(), 2);

        // input untouched
        assert!(flat.iter().all(|node| node.children.is_empty()));
        assert_eq!(title(&flat[0]), "Home");
    }

    #[test]
    fn test_empty_input() {
        assert!(assemble(&[]).is_empty());
    }
}
