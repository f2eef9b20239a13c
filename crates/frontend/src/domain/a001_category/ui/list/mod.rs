use contracts::domain::a001_category::aggregate::{Category, CATEGORY_STATUSES};
use leptos::prelude::*;

use crate::shared::components::cell_renderers::{status_badge, text_or_hint, thumbnail};
use crate::shared::data_table::{ColumnDescriptor, DataTable, EditKind, TableFeatures, TableResource};

pub const RESOURCE: TableResource = TableResource {
    list_path: "/category/cms/all_categories",
    items_key: "categories",
    update_path: Some("/category/update"),
    id_field: "category_id",
    delete_path: Some("/category/delete_category"),
    delete_ids_field: "category_ids",
    export_table: "category",
    export_title: "Categories",
    detail_route: None,
};

const EXPORT_COLUMNS: [(&str, &str); 6] = [
    ("id", "Category ID"),
    ("name_category", "Category name"),
    ("description", "Description"),
    ("status", "Status"),
    ("parentId", "Parent category"),
    ("created_at", "Created at"),
];

/// Subcategories hang off categories, so the list offers no bulk delete.
pub const FEATURES: TableFeatures = TableFeatures {
    enable_search: true,
    enable_export: true,
    enable_bulk_delete: false,
    enable_date_filter: true,
    enable_inline_edit: true,
};

fn columns() -> Vec<ColumnDescriptor<Category>> {
    vec![
        ColumnDescriptor::new("image_category", "Image")
            .skip_export()
            .render(|c: Category| thumbnail(c.image_category, c.name_category)),
        ColumnDescriptor::new("name_category", "Name")
            .sortable()
            .editable(EditKind::Text),
        ColumnDescriptor::new("description", "Description")
            .editable(EditKind::TextArea)
            .render(|c: Category| text_or_hint(c.description, "Add a description")),
        ColumnDescriptor::new("order", "Order").editable(EditKind::Number { min: Some(1) }),
        ColumnDescriptor::new("status", "Status")
            .editable(EditKind::Select(&CATEGORY_STATUSES))
            .render(|c: Category| status_badge(c.status)),
        ColumnDescriptor::new("created_at", "Created at").sortable(),
    ]
}

#[component]
pub fn CategoryList() -> impl IntoView {
    view! {
        <DataTable
            title="All categories"
            page_id="a001_category--list"
            resource=RESOURCE
            columns=columns()
            features=FEATURES
            search_placeholder="Search categories..."
            export_columns=EXPORT_COLUMNS.to_vec()
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_list_has_no_bulk_delete() {
        assert!(!FEATURES.enable_bulk_delete);
        assert!(FEATURES.enable_export);
        assert!(FEATURES.enable_inline_edit);
    }
}
