//! Drag-and-drop view of the category hierarchy.
//!
//! Dropping a row onto another row moves it to that position among the
//! flattened ordering; dropping it onto a row's nest zone makes it the last
//! child of that row. The root zone at the bottom promotes it to a root.

use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_category::api;
use crate::domain::a001_category::tree::{build_forest, depth_class, move_category, reparent_category, CategoryNode};
use crate::layout::notifications::use_notifications;
use crate::shared::components::cell_renderers::{status_badge, thumbnail};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_TREE};
use crate::system::auth::context::use_session;
use contracts::domain::a001_category::aggregate::CategoryOrderItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DropZone {
    Row,
    Nest,
}

#[component]
pub fn CategoryTree() -> impl IntoView {
    let session = use_session();
    let notify = use_notifications();

    let forest: RwSignal<Vec<CategoryNode>> = RwSignal::new(Vec::new());
    let (loading, set_loading) = signal(false);
    let (saving, set_saving) = signal(false);
    let dragged: RwSignal<Option<String>> = RwSignal::new(None);
    let hovered: RwSignal<Option<(String, DropZone)>> = RwSignal::new(None);

    let load = move || {
        set_loading.set(true);
        let token = session.token();
        spawn_local(async move {
            match api::fetch_all(token.as_deref()).await {
                Ok(flat) => {
                    log::debug!("category tree: {} categories", flat.len());
                    forest.set(build_forest(&flat));
                }
                Err(e) => notify.error(format!("Failed to load categories: {}", e)),
            }
            set_loading.set(false);
        });
    };

    let save = move |batch: Vec<CategoryOrderItem>| {
        set_saving.set(true);
        let token = session.token();
        spawn_local(async move {
            match api::update_order(batch, token.as_deref()).await {
                Ok(()) => {
                    notify.success("Category order saved");
                    load();
                }
                Err(e) => notify.error(format!("Failed to save order: {}", e)),
            }
            set_saving.set(false);
        });
    };

    let drop_on = move |target: Option<String>, zone: DropZone| {
        hovered.set(None);
        let Some(source) = dragged.get_untracked() else {
            return;
        };
        dragged.set(None);
        if saving.get_untracked() {
            return;
        }
        let outcome = forest.with_untracked(|f| match (zone, target.as_deref()) {
            (DropZone::Row, Some(target)) => Ok(move_category(f, &source, target)),
            (_, parent) => reparent_category(f, &source, parent).map(Some),
        });
        match outcome {
            Ok(Some(batch)) => save(batch),
            Ok(None) => {}
            Err(e) => notify.error(e.to_string()),
        }
    };

    Effect::new(move |_| load());

    let rows = move || {
        forest.with(|f| {
            let mut out = Vec::new();
            collect_rows(f, &mut out);
            out
        })
    };

    view! {
        <PageFrame page_id="a001_category--tree" category=PAGE_CAT_TREE>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("tree")}
                    <h1 class="page__title">"Category tree"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load()
                        disabled=Signal::derive(move || loading.get() || saving.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Loading..." } else { " Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content category-tree">
                <Show when=move || !rows().is_empty() fallback=move || view! {
                    <p class="table__empty">
                        {move || if loading.get() { "Loading..." } else { "No categories yet" }}
                    </p>
                }>
                    <For
                        each=rows
                        key=|node: &TreeRow| (node.id.clone(), node.depth, node.position)
                        children=move |node: TreeRow| {
                            let id = node.id.clone();
                            let id_drag = id.clone();
                            let id_row = id.clone();
                            let id_row_drop = id.clone();
                            let id_nest = id.clone();
                            let id_nest_drop = id.clone();
                            let row_hovered = move || hovered.with(|h| h.as_ref() == Some(&(id_row.clone(), DropZone::Row)));
                            let nest_hovered = move || hovered.with(|h| h.as_ref() == Some(&(id_nest.clone(), DropZone::Nest)));
                            let is_dragged = move || dragged.with(|d| d.as_deref() == Some(id.as_str()));
                            let row_target = id_drag.clone();
                            let nest_target = id_drag.clone();
                            view! {
                                <div
                                    class=depth_class(node.depth)
                                    class:category-tree__node--dragging=is_dragged
                                    class:category-tree__node--drop-target=row_hovered
                                    draggable="true"
                                    on:dragstart=move |ev: leptos::ev::DragEvent| {
                                        if let Some(dt) = ev.data_transfer() {
                                            let _ = dt.set_data("text/plain", &id_drag);
                                        }
                                        dragged.set(Some(id_drag.clone()));
                                    }
                                    on:dragend=move |_| {
                                        dragged.set(None);
                                        hovered.set(None);
                                    }
                                    on:dragover=move |ev: leptos::ev::DragEvent| {
                                        ev.prevent_default();
                                        hovered.set(Some((row_target.clone(), DropZone::Row)));
                                    }
                                    on:drop=move |ev: leptos::ev::DragEvent| {
                                        ev.prevent_default();
                                        drop_on(Some(id_row_drop.clone()), DropZone::Row);
                                    }
                                >
                                    <span class="category-tree__grip">{icon("grip")}</span>
                                    {thumbnail(node.image.clone(), node.name.clone())}
                                    <span class="category-tree__name">{node.name.clone()}</span>
                                    <span class="category-tree__order">{format!("#{}", node.order)}</span>
                                    {status_badge(node.status.clone())}
                                    <span
                                        class="category-tree__nest"
                                        class:category-tree__nest--active=nest_hovered
                                        title="Drop here to nest inside this category"
                                        on:dragover=move |ev: leptos::ev::DragEvent| {
                                            ev.prevent_default();
                                            ev.stop_propagation();
                                            hovered.set(Some((nest_target.clone(), DropZone::Nest)));
                                        }
                                        on:drop=move |ev: leptos::ev::DragEvent| {
                                            ev.prevent_default();
                                            ev.stop_propagation();
                                            drop_on(Some(id_nest_drop.clone()), DropZone::Nest);
                                        }
                                    >
                                        {icon("chevron-right")}
                                        " Nest"
                                    </span>
                                </div>
                            }
                        }
                    />
                </Show>
                <div
                    class="category-tree__root-zone"
                    on:dragover=move |ev: leptos::ev::DragEvent| ev.prevent_default()
                    on:drop=move |ev: leptos::ev::DragEvent| {
                        ev.prevent_default();
                        drop_on(None, DropZone::Nest);
                    }
                >
                    "Drop here to make a top-level category"
                </div>
            </div>
        </PageFrame>
    }
}

/// One visible line of the tree.
#[derive(Debug, Clone, PartialEq)]
struct TreeRow {
    id: String,
    name: String,
    image: Option<String>,
    status: String,
    order: i64,
    depth: usize,
    position: usize,
}

fn collect_rows(forest: &[CategoryNode], out: &mut Vec<TreeRow>) {
    for node in forest {
        out.push(TreeRow {
            id: node.category.id.clone(),
            name: node.category.name_category.clone(),
            image: node.category.image_category.clone(),
            status: node.category.status.clone(),
            order: node.category.order,
            depth: node.depth,
            position: out.len(),
        });
        collect_rows(&node.children, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_category::aggregate::Category;

    fn cat(id: &str, parent: Option<&str>) -> Category {
        Category {
            id: id.to_string(),
            name_category: format!("Category {}", id),
            slug_name_category: id.to_string(),
            image_category: None,
            status: "Disponivel".to_string(),
            description: None,
            order: 0,
            parent_id: parent.map(str::to_string),
            created_at: String::new(),
        }
    }

    #[test]
    fn rows_follow_pre_order_with_depth() {
        let forest = build_forest(&[cat("a", None), cat("b", Some("a")), cat("c", None)]);
        let mut rows = Vec::new();
        collect_rows(&forest, &mut rows);
        let ids: Vec<_> = rows.iter().map(|r| (r.id.as_str(), r.depth, r.position)).collect();
        assert_eq!(ids, vec![("a", 0, 0), ("b", 1, 1), ("c", 0, 2)]);
    }
}
