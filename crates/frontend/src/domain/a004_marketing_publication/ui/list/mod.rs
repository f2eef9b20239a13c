use contracts::domain::a004_marketing_publication::{MarketingPublication, PUBLICATION_STATUSES};
use leptos::prelude::*;

use crate::shared::components::cell_renderers::{status_badge, text_or_hint, thumbnail};
use crate::shared::data_table::{ColumnDescriptor, DataTable, EditKind, TableFeatures, TableResource};

pub const RESOURCE: TableResource = TableResource {
    list_path: "/marketing_publication/all_publications",
    items_key: "publications",
    update_path: Some("/marketing_publication/update"),
    id_field: "marketingPublication_id",
    delete_path: Some("/marketing_publication/delete_publications"),
    delete_ids_field: "marketingPublication_ids",
    export_table: "marketingPublication",
    export_title: "Marketing publications",
    detail_route: Some("/marketing"),
};

fn columns() -> Vec<ColumnDescriptor<MarketingPublication>> {
    vec![
        ColumnDescriptor::new("image_url", "Banner")
            .skip_export()
            .render(|p: MarketingPublication| thumbnail(p.image_url, p.title)),
        ColumnDescriptor::new("title", "Title")
            .sortable()
            .editable(EditKind::Text),
        ColumnDescriptor::new("description", "Description")
            .editable(EditKind::TextArea)
            .render(|p: MarketingPublication| text_or_hint(p.description, "Add a description")),
        ColumnDescriptor::new("clicks", "Clicks").sortable(),
        ColumnDescriptor::new("status", "Status")
            .editable(EditKind::Select(&PUBLICATION_STATUSES))
            .render(|p: MarketingPublication| status_badge(p.status)),
        ColumnDescriptor::new("created_at", "Created at").sortable(),
    ]
}

#[component]
pub fn MarketingPublicationList() -> impl IntoView {
    view! {
        <DataTable
            title="Marketing publications"
            page_id="a004_marketing_publication--list"
            resource=RESOURCE
            columns=columns()
            features=TableFeatures::default()
            search_placeholder="Search publications..."
        />
    }
}
