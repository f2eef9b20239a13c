//! "Select all" checkbox in the table header.

use crate::shared::data_table::selection::{CheckState, SelectionSet};
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

/// Three-state header checkbox. Checked when every visible row is selected,
/// indeterminate on a partial selection.
#[component]
pub fn TableHeaderCheckbox(
    /// Ids of the rows on the current page
    #[prop(into)]
    visible_ids: Signal<Vec<String>>,

    #[prop(into)]
    selection: Signal<SelectionSet>,

    on_toggle_all: Callback<()>,
) -> impl IntoView {
    let state = Signal::derive(move || {
        let ids = visible_ids.get();
        selection.with(|s| s.check_state(&ids))
    });

    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    Effect::new(move |_| {
        if let Some(input) = checkbox_ref.get() {
            let indeterminate = state.get() == CheckState::Indeterminate;
            if let Some(input_el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                input_el.set_indeterminate(indeterminate);
            }
        }
    });

    view! {
        <TableHeaderCell resizable=false class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                disabled=move || visible_ids.with(|ids| ids.is_empty())
                prop:checked=move || state.get() == CheckState::Checked
                on:change=move |_| on_toggle_all.run(())
            />
        </TableHeaderCell>
    }
}
