//! Configuration-driven list table shared by every content screen.
//!
//! A screen supplies a [`TableResource`] (endpoints), its columns and the
//! enabled [`TableFeatures`]; the table owns the query state, fetching,
//! selection, inline editing, bulk delete and export.

pub mod bulk;
pub mod column;
pub mod export_dialog;
pub mod inline_edit;
pub mod pagination;
pub mod record;
pub mod resource;
pub mod selection;

pub use column::{ColumnDescriptor, EditKind, TableFeatures};
pub use record::TableRecord;
pub use resource::TableResource;

use chrono::NaiveDate;
use contracts::shared::export::ExportFormat;
use contracts::shared::list_query::{ListQuery, SortDirection};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use thaw::*;

use crate::layout::notifications::use_notifications;
use crate::shared::components::date_range_filter::DateRangeFilter;
use crate::shared::components::modal_dialog::ConfirmDialog;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::{SortableHeaderCell, TableCellCheckbox, TableHeaderCheckbox};
use crate::shared::export::{download_bytes, export_file_name, ExportSelection};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::query_state::{QueryPatch, QueryStateController};
use crate::shared::request_seq::RequestSequencer;
use crate::system::auth::context::use_session;
use bulk::{BulkActionState, BulkModal, DeleteDecision};
use column::sortable_keys;
use export_dialog::ExportDialog;
use inline_edit::{apply_update, InlineEditState};
use pagination::clamp_page;
use record::{cell_text, field_value, raw_text};
use selection::SelectionSet;

/// Editor shown in place of a cell while it is being edited. Commits on blur
/// or Enter, Escape discards.
fn inline_editor(kind: EditKind, edit: RwSignal<InlineEditState>, on_commit: Callback<EditKind>) -> AnyView {
    let value = move || edit.with(|e| e.value().unwrap_or_default().to_string());
    let on_input = move |ev: leptos::ev::Event| edit.update(|e| e.set_value(event_target_value(&ev)));
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| match ev.key().as_str() {
        "Enter" => on_commit.run(kind),
        "Escape" => edit.update(|e| e.cancel()),
        _ => {}
    };

    match kind {
        EditKind::TextArea => view! {
            <textarea
                class="table__inline-input"
                autofocus=true
                prop:value=value
                on:input=on_input
                on:blur=move |_| on_commit.run(kind)
                on:click=|ev| ev.stop_propagation()
            ></textarea>
        }
        .into_any(),
        EditKind::Number { min } => view! {
            <input
                type="number"
                class="table__inline-input"
                autofocus=true
                min=min.map(|m| m.to_string())
                prop:value=value
                on:input=on_input
                on:keydown=on_keydown
                on:blur=move |_| on_commit.run(kind)
                on:click=|ev| ev.stop_propagation()
            />
        }
        .into_any(),
        EditKind::Select(options) => view! {
            <select
                class="table__inline-select"
                autofocus=true
                prop:value=value
                on:change=on_input
                on:keydown=on_keydown
                on:blur=move |_| on_commit.run(kind)
                on:click=|ev| ev.stop_propagation()
            >
                {options
                    .iter()
                    .map(|&opt| view! { <option value=opt selected=move || value() == opt>{opt}</option> })
                    .collect_view()}
            </select>
        }
        .into_any(),
        EditKind::Text | EditKind::ReadOnly => view! {
            <input
                type="text"
                class="table__inline-input"
                autofocus=true
                prop:value=value
                on:input=on_input
                on:keydown=on_keydown
                on:blur=move |_| on_commit.run(kind)
                on:click=|ev| ev.stop_propagation()
            />
        }
        .into_any(),
    }
}

#[component]
pub fn DataTable<T>(
    title: &'static str,
    /// Root element id, see [`PageFrame`].
    page_id: &'static str,
    resource: TableResource,
    columns: Vec<ColumnDescriptor<T>>,
    #[prop(optional)]
    features: Option<TableFeatures>,
    #[prop(optional, into)]
    search_placeholder: Option<String>,
    /// `(key, header)` pairs offered for export; the exportable columns otherwise.
    #[prop(optional)]
    export_columns: Option<Vec<(&'static str, &'static str)>>,
    /// Rows the screen never shows, e.g. accounts that must not be edited inline.
    #[prop(optional)]
    hide_row: Option<fn(&T) -> bool>,
) -> impl IntoView
where
    T: TableRecord,
{
    let features = features.unwrap_or_default();
    let search_placeholder = search_placeholder.unwrap_or_else(|| "Search...".to_string());
    let session = use_session();
    let notify = use_notifications();

    let order_options: Vec<(&'static str, &'static str)> =
        columns.iter().filter(|c| c.sortable).map(|c| (c.key, c.label)).collect();
    let controller = QueryStateController::initialize(sortable_keys(&columns));
    let export_columns = export_columns.unwrap_or_else(|| {
        columns.iter().filter(|c| c.exportable).map(|c| (c.key, c.label)).collect()
    });
    let export_selection = RwSignal::new(ExportSelection::from_columns(export_columns));
    let columns = StoredValue::new(columns);

    let rows: RwSignal<Vec<T>> = RwSignal::new(Vec::new());
    let total_pages = RwSignal::new(1u32);
    let (loading, set_loading) = signal(false);
    let selection = RwSignal::new(SelectionSet::default());
    let bulk = RwSignal::new(BulkActionState::default());
    let edit = RwSignal::new(InlineEditState::default());
    let export_format = RwSignal::new(ExportFormat::default());
    let sequencer = StoredValue::new(RequestSequencer::new());
    let search_input = RwSignal::new(controller.current().search);

    let visible_ids = Signal::derive(move || {
        rows.with(|rs| rs.iter().map(|r| r.record_id()).collect::<Vec<_>>())
    });
    let modal = Memo::new(move |_| bulk.with(|b| b.modal()));
    let bulk_busy = Signal::derive(move || bulk.with(|b| b.in_flight()));

    let load = move |query: ListQuery| {
        let ticket = sequencer.with_value(|s| s.issue());
        let token = session.token();
        set_loading.set(true);
        spawn_local(async move {
            let result = resource.fetch_page::<T>(&query, token.as_deref()).await;
            if !sequencer.with_value(|s| s.is_latest(ticket)) {
                log::debug!("discarding stale {} response (ticket {})", resource.list_path, ticket);
                return;
            }
            set_loading.set(false);
            match result {
                Ok(page) => {
                    if let Some(last) = clamp_page(query.page, page.total_pages) {
                        log::debug!("{}: page {} is past the end, moving to {}", resource.list_path, query.page, last);
                        controller.set_filter(QueryPatch::page(last));
                        return;
                    }
                    log::debug!(
                        "{}: {} rows, {} pages",
                        resource.list_path,
                        page.items.len(),
                        page.total_pages
                    );
                    let mut items = page.items;
                    if let Some(hide) = hide_row {
                        items.retain(|row| !hide(row));
                    }
                    rows.set(items);
                    total_pages.set(page.total_pages);
                    selection.update(|s| s.clear());
                    edit.update(|e| e.cancel());
                }
                Err(e) => notify.error(format!("Failed to load {}: {}", title.to_lowercase(), e)),
            }
        });
    };

    Effect::new(move |_| {
        let query = controller.query().get();
        load(query);
    });

    let commit_edit = move |kind: EditKind| {
        let mut outcome = None;
        edit.update(|e| outcome = e.commit(kind));
        match outcome {
            None => {}
            Some(Err(e)) => notify.error(e.to_string()),
            Some(Ok(update)) => {
                let token = session.token();
                spawn_local(async move {
                    match resource.update_field(&update, token.as_deref()).await {
                        Ok(()) => {
                            rows.update(|rs| {
                                apply_update(rs, &update);
                            });
                            notify.success("Record updated");
                        }
                        Err(e) => notify.error(format!("Failed to update record: {}", e)),
                    }
                });
            }
        }
    };
    let on_commit = Callback::new(move |kind: EditKind| commit_edit(kind));

    let request_delete = move || {
        let current = selection.get_untracked();
        let mut decision = DeleteDecision::Blocked;
        bulk.update(|b| decision = b.request_delete(&current));
        if decision == DeleteDecision::NothingSelected {
            notify.warning("Select at least one record to delete");
        }
    };

    let confirm_delete = move || {
        let current = selection.get_untracked();
        let mut ids = None;
        bulk.update(|b| ids = b.confirm_delete(&current));
        let Some(ids) = ids else {
            return;
        };
        let token = session.token();
        spawn_local(async move {
            let result = resource.delete_records(&ids, token.as_deref()).await;
            let mut current = selection.get_untracked();
            bulk.update(|b| b.finish_delete(result.is_ok(), &mut current));
            selection.set(current);
            match result {
                Ok(()) => {
                    notify.success(format!("{} record(s) deleted", ids.len()));
                    controller.refresh();
                }
                Err(e) => notify.error(format!("Failed to delete records: {}", e)),
            }
        });
    };

    let run_export = move || {
        let request = export_selection.with_untracked(|sel| {
            sel.build_request(resource.export_table, export_format.get_untracked(), session.user_id())
        });
        let Some(request) = request else {
            notify.warning("Select at least one column to export");
            return;
        };
        let mut started = false;
        bulk.update(|b| started = b.begin_export());
        if !started {
            return;
        }
        let token = session.token();
        spawn_local(async move {
            let file_name = export_file_name(resource.export_title, request.format);
            let result = match resource.export(&request, token.as_deref()).await {
                Ok(bytes) => download_bytes(&bytes, &file_name, request.format.mime_type()),
                Err(e) => Err(e.to_string()),
            };
            bulk.update(|b| b.finish_export(result.is_ok()));
            match result {
                Ok(()) => notify.success(format!("Exported {}", file_name)),
                Err(e) => notify.error(format!("Export failed: {}", e)),
            }
        });
    };

    let render_cell = move |col: ColumnDescriptor<T>, id: String| -> AnyView {
        let key = col.key;
        let kind = col.edit;
        let render = col.render;
        let editable =
            features.enable_inline_edit && kind.is_editable() && resource.update_path.is_some();

        let lookup = {
            let id = id.clone();
            move || rows.with(|rs| rs.iter().find(|r| r.record_id() == id).cloned())
        };
        let lookup_for_edit = lookup.clone();
        let display = move || -> AnyView {
            match lookup() {
                Some(row) => match render {
                    Some(cb) => cb.run(row),
                    None => view! { <span>{cell_text(&field_value(&row, key))}</span> }.into_any(),
                },
                None => view! { <></> }.into_any(),
            }
        };

        if editable {
            let id_for_check = id.clone();
            let is_editing = move || edit.with(|e| e.is_editing(&id_for_check, key));
            let begin = move |_| {
                if edit.with_untracked(|e| e.is_editing(&id, key)) {
                    return;
                }
                let current = lookup_for_edit()
                    .map(|row| raw_text(&field_value(&row, key)))
                    .unwrap_or_default();
                edit.update(|e| e.begin(id.clone(), key, current));
            };
            view! {
                <TableCell class="table__cell--editable" on:click=begin>
                    {move || if is_editing() { inline_editor(kind, edit, on_commit) } else { display() }}
                </TableCell>
            }
            .into_any()
        } else {
            match resource.detail_href(&id) {
                Some(href) => view! {
                    <TableCell class="table__cell--link">
                        <A href=href>{display}</A>
                    </TableCell>
                }
                .into_any(),
                None => view! { <TableCell>{display}</TableCell> }.into_any(),
            }
        }
    };

    view! {
        <PageFrame page_id=page_id category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{title}</h1>
                </div>
                <div class="page__header-right">
                    {features.enable_bulk_delete.then(|| view! {
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| request_delete()
                            disabled=bulk_busy
                        >
                            {icon("trash")}
                            {move || format!(" Delete ({})", selection.with(|s| s.len()))}
                        </Button>
                    })}
                    {features.enable_export.then(|| view! {
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| bulk.update(|b| {
                                b.open_export();
                            })
                            disabled=bulk_busy
                        >
                            {icon("download")}
                            " Export"
                        </Button>
                    })}
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| controller.refresh()
                        disabled=Signal::derive(move || loading.get())
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Loading..." } else { " Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="filter-panel">
                    <div class="filter-panel-content">
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            {features.enable_search.then(|| view! {
                                <div style="flex: 1; max-width: 320px;">
                                    <Input value=search_input placeholder=search_placeholder.clone() />
                                </div>
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    on_click=move |_| {
                                        let text = search_input.get_untracked().trim().to_string();
                                        controller.set_filter(QueryPatch::search(text));
                                    }
                                >
                                    {icon("search")}
                                    " Search"
                                </Button>
                            })}
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| {
                                    search_input.set(String::new());
                                    controller.reset();
                                }
                            >
                                "Reset"
                            </Button>
                            {(!order_options.is_empty()).then(|| view! {
                                <select
                                    class="order-select"
                                    on:change=move |ev| controller.set_filter(QueryPatch::order_by(event_target_value(&ev)))
                                >
                                    {order_options
                                        .iter()
                                        .map(|&(key, label)| view! {
                                            <option
                                                value=key
                                                selected=move || controller.query().with(|q| q.order_by == key)
                                            >
                                                {format!("Order by: {}", label)}
                                            </option>
                                        })
                                        .collect_view()}
                                </select>
                                <select
                                    class="order-select"
                                    on:change=move |ev| {
                                        if let Some(direction) = SortDirection::parse(&event_target_value(&ev)) {
                                            controller.set_filter(QueryPatch::order_direction(direction));
                                        }
                                    }
                                >
                                    <option
                                        value="asc"
                                        selected=move || controller.query().with(|q| q.order_direction == SortDirection::Asc)
                                    >
                                        "Ascending"
                                    </option>
                                    <option
                                        value="desc"
                                        selected=move || controller.query().with(|q| q.order_direction == SortDirection::Desc)
                                    >
                                        "Descending"
                                    </option>
                                </select>
                            })}
                            {features.enable_date_filter.then(|| view! {
                                <DateRangeFilter
                                    start=Signal::derive(move || controller.query().with(|q| q.start_date))
                                    end=Signal::derive(move || controller.query().with(|q| q.end_date))
                                    on_change=Callback::new(move |(start, end): (Option<NaiveDate>, Option<NaiveDate>)| {
                                        controller.set_filter(QueryPatch::date_range(start, end));
                                    })
                                />
                            })}
                        </Flex>
                    </div>
                </div>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                {features.enable_bulk_delete.then(|| view! {
                                    <TableHeaderCheckbox
                                        visible_ids=visible_ids
                                        selection=selection
                                        on_toggle_all=Callback::new(move |_: ()| {
                                            let ids = visible_ids.get_untracked();
                                            selection.update(|s| s.toggle_all(&ids));
                                        })
                                    />
                                })}
                                {columns.with_value(|cols| {
                                    cols.iter()
                                        .map(|col| {
                                            if col.sortable {
                                                view! {
                                                    <SortableHeaderCell
                                                        label=col.label
                                                        sort_field=col.key
                                                        current_sort_field=Signal::derive(move || controller.query().with(|q| q.order_by.clone()))
                                                        direction=Signal::derive(move || controller.query().with(|q| q.order_direction))
                                                        on_sort=Callback::new(move |field: &'static str| {
                                                            controller.set_filter(QueryPatch::toggle_sort(&controller.current(), field));
                                                        })
                                                    />
                                                }
                                                .into_any()
                                            } else {
                                                let label = col.label;
                                                view! { <TableHeaderCell resizable=false>{label}</TableHeaderCell> }
                                                    .into_any()
                                            }
                                        })
                                        .collect_view()
                                })}
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || visible_ids.get()
                                key=|id: &String| id.clone()
                                children=move |id: String| {
                                    let cells = columns.with_value(|cols| {
                                        cols.iter()
                                            .cloned()
                                            .map(|col| render_cell(col, id.clone()))
                                            .collect_view()
                                    });
                                    view! {
                                        <TableRow>
                                            {features.enable_bulk_delete.then(|| view! {
                                                <TableCellCheckbox
                                                    item_id=id.clone()
                                                    selection=selection
                                                    on_change=Callback::new(move |(id, checked): (String, bool)| {
                                                        selection.update(|s| s.set(&id, checked));
                                                    })
                                                />
                                            })}
                                            {cells}
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    {move || (!loading.get() && rows.with(|r| r.is_empty())).then(|| view! {
                        <div class="table__empty">"No records found"</div>
                    })}
                </div>

                <PaginationControls
                    current_page=Signal::derive(move || controller.query().with(|q| q.page))
                    total_pages=total_pages
                    page_size=Signal::derive(move || controller.query().with(|q| q.limit))
                    on_page_change=Callback::new(move |page: u32| controller.set_filter(QueryPatch::page(page)))
                    on_page_size_change=Callback::new(move |size: u32| controller.set_filter(QueryPatch::limit(size)))
                />
            </div>

            {move || match modal.get() {
                BulkModal::Closed => view! { <></> }.into_any(),
                BulkModal::ConfirmDelete => view! {
                    <ConfirmDialog
                        title="Delete records"
                        message=Signal::derive(move || {
                            format!(
                                "Delete {} selected record(s)? This can not be undone.",
                                selection.with(|s| s.len())
                            )
                        })
                        confirm_label="Delete"
                        on_confirm=Callback::new(move |_: ()| confirm_delete())
                        on_cancel=Callback::new(move |_: ()| bulk.update(|b| b.close()))
                        busy=bulk_busy
                    />
                }
                .into_any(),
                BulkModal::Export => view! {
                    <ExportDialog
                        selection=export_selection
                        format=export_format
                        busy=bulk_busy
                        on_export=Callback::new(move |_: ()| run_export())
                        on_close=Callback::new(move |_: ()| bulk.update(|b| b.close()))
                    />
                }
                .into_any(),
            }}
        </PageFrame>
    }
}
