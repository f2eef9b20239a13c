//! Parent/child forest of categories and the ordering batches sent back
//! after a drag.

use contracts::domain::a001_category::aggregate::{Category, CategoryOrderItem};
use std::collections::{HashMap, HashSet};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryNode {
    pub category: Category,
    pub depth: usize,
    pub children: Vec<CategoryNode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("Category {0} was not found")]
    NotFound(String),
    #[error("Category {dragged} can not be moved under {target}, which is inside it")]
    Cycle { dragged: String, target: String },
}

/// Groups the flat list by parent in one pass, then builds nodes top-down.
///
/// Children keep the order of the input list. A category whose parent is
/// not in the list is promoted to a root. Categories only reachable through
/// a parent cycle are left out.
pub fn build_forest(flat: &[Category]) -> Vec<CategoryNode> {
    let existing_ids: HashSet<&str> = flat.iter().map(|c| c.id.as_str()).collect();

    let mut children_map: HashMap<Option<&str>, Vec<&Category>> = HashMap::new();
    for category in flat {
        let parent = match category.parent() {
            Some(pid) if pid == category.id => {
                log::warn!("category {} is its own parent, shown as root", category.id);
                None
            }
            Some(pid) if existing_ids.contains(pid) => Some(pid),
            Some(pid) => {
                log::warn!("category {} has unknown parent {}, shown as root", category.id, pid);
                None
            }
            None => None,
        };
        children_map.entry(parent).or_default().push(category);
    }

    fn build_node<'a>(
        category: &'a Category,
        depth: usize,
        children_map: &HashMap<Option<&'a str>, Vec<&'a Category>>,
        visited: &mut HashSet<&'a str>,
    ) -> CategoryNode {
        visited.insert(category.id.as_str());
        let mut children = Vec::new();
        for kid in children_map.get(&Some(category.id.as_str())).into_iter().flatten() {
            if !visited.contains(kid.id.as_str()) {
                children.push(build_node(*kid, depth + 1, children_map, visited));
            }
        }
        CategoryNode {
            category: category.clone(),
            depth,
            children,
        }
    }

    let mut visited = HashSet::new();
    let mut roots = Vec::new();
    for root in children_map.get(&None).into_iter().flatten() {
        roots.push(build_node(*root, 0, &children_map, &mut visited));
    }

    if visited.len() < existing_ids.len() {
        log::warn!(
            "{} categories are only reachable through a parent cycle and were skipped",
            existing_ids.len() - visited.len()
        );
    }
    log::debug!("category forest: {} categories, {} roots", visited.len(), roots.len());
    roots
}

/// Pre-order listing of the forest: the local sibling ordering.
pub fn flatten(forest: &[CategoryNode]) -> Vec<&Category> {
    fn walk<'a>(nodes: &'a [CategoryNode], out: &mut Vec<&'a Category>) {
        for node in nodes {
            out.push(&node.category);
            walk(&node.children, out);
        }
    }
    let mut out = Vec::new();
    walk(forest, &mut out);
    out
}

pub fn find_node<'a>(forest: &'a [CategoryNode], id: &str) -> Option<&'a CategoryNode> {
    forest.iter().find_map(|node| {
        if node.category.id == id {
            Some(node)
        } else {
            find_node(&node.children, id)
        }
    })
}

/// True when `candidate` sits anywhere below `ancestor`.
pub fn is_descendant(forest: &[CategoryNode], ancestor: &str, candidate: &str) -> bool {
    find_node(forest, ancestor)
        .map(|node| find_node(&node.children, candidate).is_some())
        .unwrap_or(false)
}

/// Moves the element at `from` to index `to`. Out-of-range indices leave the
/// list unchanged.
pub fn reorder<T>(mut list: Vec<T>, from: usize, to: usize) -> Vec<T> {
    if from == to || from >= list.len() || to >= list.len() {
        return list;
    }
    let item = list.remove(from);
    list.insert(to, item);
    list
}

fn order_batch(ordering: Vec<(&Category, Option<String>)>) -> Vec<CategoryOrderItem> {
    ordering
        .into_iter()
        .enumerate()
        .map(|(index, (category, parent_id))| CategoryOrderItem {
            id: category.id.clone(),
            order: index as u32 + 1,
            parent_id,
        })
        .collect()
}

/// Drop of `dragged` onto `target`: `dragged` takes the target's position in
/// the local ordering and keeps its parent. Returns the full batch for
/// `PUT /category/updateOrder`, or `None` when nothing moves.
pub fn move_category(forest: &[CategoryNode], dragged: &str, target: &str) -> Option<Vec<CategoryOrderItem>> {
    if dragged == target {
        return None;
    }
    let ordering = flatten(forest);
    let from = ordering.iter().position(|c| c.id == dragged)?;
    let to = ordering.iter().position(|c| c.id == target)?;
    let moved = reorder(ordering, from, to)
        .into_iter()
        .map(|c| (c, c.parent().map(str::to_string)))
        .collect();
    Some(order_batch(moved))
}

/// Drop of `dragged` onto a nest zone: it becomes the last child of
/// `new_parent`, or the last root when `new_parent` is `None`.
pub fn reparent_category(
    forest: &[CategoryNode],
    dragged: &str,
    new_parent: Option<&str>,
) -> Result<Vec<CategoryOrderItem>, TreeError> {
    if find_node(forest, dragged).is_none() {
        return Err(TreeError::NotFound(dragged.to_string()));
    }
    if let Some(parent) = new_parent {
        let parent_node =
            find_node(forest, parent).ok_or_else(|| TreeError::NotFound(parent.to_string()))?;
        if parent == dragged || is_descendant(forest, dragged, parent) {
            return Err(TreeError::Cycle {
                dragged: dragged.to_string(),
                target: parent_node.category.id.clone(),
            });
        }
    }

    let mut ordering: Vec<(&Category, Option<String>)> = flatten(forest)
        .into_iter()
        .map(|c| (c, c.parent().map(str::to_string)))
        .collect();
    let from = ordering
        .iter()
        .position(|(c, _)| c.id == dragged)
        .ok_or_else(|| TreeError::NotFound(dragged.to_string()))?;
    let (category, _) = ordering.remove(from);

    let insert_at = match new_parent.and_then(|p| find_node(forest, p)) {
        Some(parent_node) => {
            let subtree: HashSet<&str> = std::iter::once(parent_node.category.id.as_str())
                .chain(flatten(&parent_node.children).into_iter().map(|c| c.id.as_str()))
                .collect();
            ordering
                .iter()
                .rposition(|(c, _)| subtree.contains(c.id.as_str()))
                .map(|i| i + 1)
                .unwrap_or(ordering.len())
        }
        None => ordering.len(),
    };
    ordering.insert(insert_at, (category, new_parent.map(str::to_string)));
    Ok(order_batch(ordering))
}

/// CSS modifier per nesting level; level 3 and deeper share one style.
pub fn depth_class(depth: usize) -> &'static str {
    match depth {
        0 => "category-tree__node category-tree__node--level-0",
        1 => "category-tree__node category-tree__node--level-1",
        2 => "category-tree__node category-tree__node--level-2",
        _ => "category-tree__node category-tree__node--level-3",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat(id: &str, parent: Option<&str>) -> Category {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "name_category": format!("Category {}", id),
            "parentId": parent,
        }))
        .unwrap()
    }

    fn ids(nodes: &[CategoryNode]) -> Vec<&str> {
        nodes.iter().map(|n| n.category.id.as_str()).collect()
    }

    fn batch_ids(batch: &[CategoryOrderItem]) -> Vec<&str> {
        batch.iter().map(|i| i.id.as_str()).collect()
    }

    fn sample() -> Vec<Category> {
        vec![
            cat("1", None),
            cat("2", Some("1")),
            cat("3", Some("1")),
            cat("4", None),
            cat("5", Some("2")),
        ]
    }

    #[test]
    fn children_follow_parent_ids() {
        let forest = build_forest(&[cat("1", None), cat("2", Some("1")), cat("3", Some("1"))]);
        assert_eq!(ids(&forest), vec!["1"]);
        assert_eq!(ids(&forest[0].children), vec!["2", "3"]);
        assert!(forest[0].children.iter().all(|c| c.children.is_empty()));
    }

    #[test]
    fn every_category_appears_once_with_depth() {
        let flat = sample();
        let forest = build_forest(&flat);
        let listed = flatten(&forest);
        assert_eq!(listed.len(), flat.len());
        let unique: HashSet<&str> = listed.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(unique.len(), flat.len());
        assert_eq!(find_node(&forest, "5").map(|n| n.depth), Some(2));
        assert_eq!(
            listed.iter().map(|c| c.id.as_str()).collect::<Vec<_>>(),
            vec!["1", "2", "5", "3", "4"]
        );
    }

    #[test]
    fn children_keep_input_order_not_order_field() {
        let mut late = cat("b", Some("r"));
        late.order = 1;
        let mut early = cat("a", Some("r"));
        early.order = 9;
        let forest = build_forest(&[cat("r", None), early, late]);
        assert_eq!(ids(&forest[0].children), vec!["a", "b"]);
    }

    #[test]
    fn orphans_become_roots() {
        let forest = build_forest(&[cat("1", None), cat("7", Some("missing")), cat("8", Some(""))]);
        assert_eq!(ids(&forest), vec!["1", "7", "8"]);
    }

    #[test]
    fn pure_cycles_are_skipped() {
        let forest = build_forest(&[cat("1", None), cat("a", Some("b")), cat("b", Some("a"))]);
        assert_eq!(ids(&forest), vec!["1"]);
        let self_parent = build_forest(&[cat("s", Some("s"))]);
        assert_eq!(ids(&self_parent), vec!["s"]);
    }

    #[test]
    fn reorder_moves_single_element() {
        assert_eq!(reorder(vec!['a', 'b', 'c', 'd'], 0, 2), vec!['b', 'c', 'a', 'd']);
        assert_eq!(reorder(vec!['a', 'b', 'c', 'd'], 3, 1), vec!['a', 'd', 'b', 'c']);
        assert_eq!(reorder(vec!['a', 'b'], 0, 5), vec!['a', 'b']);
    }

    #[test]
    fn dropping_on_itself_sends_nothing() {
        let forest = build_forest(&sample());
        assert_eq!(move_category(&forest, "3", "3"), None);
        assert_eq!(move_category(&forest, "3", "unknown"), None);
    }

    #[test]
    fn move_sends_full_batch_with_one_based_order() {
        let forest = build_forest(&sample());
        let batch = move_category(&forest, "4", "2").unwrap();
        assert_eq!(batch_ids(&batch), vec!["1", "4", "2", "5", "3"]);
        assert_eq!(batch.iter().map(|i| i.order).collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
        let moved = batch.iter().find(|i| i.id == "4").unwrap();
        assert_eq!(moved.parent_id, None);
        let child = batch.iter().find(|i| i.id == "5").unwrap();
        assert_eq!(child.parent_id.as_deref(), Some("2"));
    }

    #[test]
    fn reparent_appends_under_new_parent() {
        let forest = build_forest(&sample());
        let batch = reparent_category(&forest, "4", Some("1")).unwrap();
        assert_eq!(batch_ids(&batch), vec!["1", "2", "5", "3", "4"]);
        let moved = batch.iter().find(|i| i.id == "4").unwrap();
        assert_eq!(moved.parent_id.as_deref(), Some("1"));

        let to_root = reparent_category(&forest, "5", None).unwrap();
        assert_eq!(batch_ids(&to_root), vec!["1", "2", "3", "4", "5"]);
        assert_eq!(to_root.last().unwrap().parent_id, None);
    }

    #[test]
    fn reparent_under_own_descendant_is_rejected() {
        let forest = build_forest(&sample());
        assert_eq!(
            reparent_category(&forest, "1", Some("5")),
            Err(TreeError::Cycle { dragged: "1".into(), target: "5".into() })
        );
        assert!(matches!(reparent_category(&forest, "2", Some("2")), Err(TreeError::Cycle { .. })));
        assert_eq!(
            reparent_category(&forest, "x", None),
            Err(TreeError::NotFound("x".into()))
        );
        assert!(is_descendant(&forest, "1", "5"));
        assert!(!is_descendant(&forest, "5", "1"));
    }

    #[test]
    fn depth_classes_cap_at_level_three() {
        assert!(depth_class(0).ends_with("level-0"));
        assert_eq!(depth_class(3), depth_class(7));
    }
}
