use contracts::shared::list_query::SortDirection;
use leptos::prelude::*;
use thaw::*;

/// ▲ / ▼ on the active column, a neutral marker elsewhere.
pub fn sort_indicator(current_field: &str, field: &str, direction: SortDirection) -> &'static str {
    if current_field != field {
        return "⇅";
    }
    match direction {
        SortDirection::Asc => "▲",
        SortDirection::Desc => "▼",
    }
}

pub fn sort_class(current_field: &str, field: &str) -> &'static str {
    if current_field == field {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

/// Header cell that asks the list to sort by `sort_field` when clicked.
#[component]
pub fn SortableHeaderCell(
    #[prop(into)]
    label: String,

    sort_field: &'static str,

    #[prop(into)]
    current_sort_field: Signal<String>,

    #[prop(into)]
    direction: Signal<SortDirection>,

    on_sort: Callback<&'static str>,
) -> impl IntoView {
    view! {
        <TableHeaderCell resizable=false>
            <div
                class="table__sortable-header"
                style="cursor: pointer;"
                on:click=move |_| on_sort.run(sort_field)
            >
                {label}
                <span class=move || sort_class(&current_sort_field.get(), sort_field)>
                    {move || sort_indicator(&current_sort_field.get(), sort_field, direction.get())}
                </span>
            </div>
        </TableHeaderCell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indicator_follows_active_column() {
        assert_eq!(sort_indicator("name", "name", SortDirection::Asc), "▲");
        assert_eq!(sort_indicator("name", "name", SortDirection::Desc), "▼");
        assert_eq!(sort_indicator("created_at", "name", SortDirection::Asc), "⇅");
        assert!(sort_class("name", "name").ends_with("--active"));
    }
}
