use contracts::domain::a002_comment::{Comment, COMMENT_STATUSES};
use leptos::prelude::*;

use crate::shared::components::cell_renderers::{status_badge, text_or_hint};
use crate::shared::data_table::{ColumnDescriptor, DataTable, EditKind, TableFeatures, TableResource};

pub const RESOURCE: TableResource = TableResource {
    list_path: "/comment/cms/get_comments",
    items_key: "comments",
    update_path: Some("/comment/update"),
    id_field: "comment_id",
    delete_path: Some("/comment/delete_comment"),
    delete_ids_field: "comment_ids",
    export_table: "comment",
    export_title: "Comments",
    detail_route: None,
};

fn columns() -> Vec<ColumnDescriptor<Comment>> {
    vec![
        ColumnDescriptor::new("comment", "Comment"),
        ColumnDescriptor::new("user_name", "Author")
            .render(|c: Comment| text_or_hint(c.user_name, "Anonymous")),
        ColumnDescriptor::new("post_title", "Post"),
        ColumnDescriptor::new("status", "Status")
            .sortable()
            .editable(EditKind::Select(&COMMENT_STATUSES))
            .render(|c: Comment| status_badge(c.status)),
        ColumnDescriptor::new("comment_like", "Likes"),
        ColumnDescriptor::new("created_at", "Created at").sortable(),
    ]
}

/// Moderation queue: comments are approved, rejected or binned by status.
#[component]
pub fn CommentList() -> impl IntoView {
    view! {
        <DataTable
            title="Comments"
            page_id="a002_comment--list"
            resource=RESOURCE
            columns=columns()
            features=TableFeatures::default()
            search_placeholder="Search comments..."
        />
    }
}
