use contracts::domain::a003_contact_form::ContactForm;
use leptos::prelude::*;

use crate::shared::components::cell_renderers::text_or_hint;
use crate::shared::data_table::{ColumnDescriptor, DataTable, TableFeatures, TableResource};

pub const RESOURCE: TableResource = TableResource {
    list_path: "/contacts_form/all_contacts",
    items_key: "contacts",
    update_path: None,
    id_field: "form_contact_id",
    delete_path: Some("/form_contact/delete_form_contatct"),
    delete_ids_field: "form_contact_ids",
    export_table: "formContact",
    export_title: "Contacts",
    detail_route: Some("/contacts"),
};

fn columns() -> Vec<ColumnDescriptor<ContactForm>> {
    vec![
        ColumnDescriptor::new("name_user", "Name").sortable(),
        ColumnDescriptor::new("email_user", "Email"),
        ColumnDescriptor::new("subject", "Subject")
            .render(|c: ContactForm| text_or_hint(c.subject, "No subject")),
        ColumnDescriptor::new("created_at", "Received at").sortable(),
    ]
}

/// Contact form submissions are read-only; a row opens the full message.
#[component]
pub fn ContactFormList() -> impl IntoView {
    view! {
        <DataTable
            title="Contacts"
            page_id="a003_contact_form--list"
            resource=RESOURCE
            columns=columns()
            features=TableFeatures {
                enable_inline_edit: false,
                enable_date_filter: true,
                ..TableFeatures::default()
            }
            search_placeholder="Search by name or email..."
        />
    }
}
