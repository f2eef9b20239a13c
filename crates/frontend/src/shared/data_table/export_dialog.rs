use contracts::shared::export::ExportFormat;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::modal_dialog::ModalDialog;
use crate::shared::export::ExportSelection;

/// Column picker with editable header names and the file format.
#[component]
pub fn ExportDialog(
    selection: RwSignal<ExportSelection>,
    format: RwSignal<ExportFormat>,
    #[prop(into)]
    busy: Signal<bool>,
    on_export: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let keys = move || {
        selection.with(|s| s.columns().iter().map(|c| c.key.clone()).collect::<Vec<_>>())
    };

    view! {
        <ModalDialog title="Export data" on_close=on_close busy=busy>
            <div class="export-columns">
                <div class="export-columns__actions">
                    <Button size=ButtonSize::Small on_click=move |_| selection.update(|s| s.select_all(true))>
                        "Select all"
                    </Button>
                    <Button size=ButtonSize::Small on_click=move |_| selection.update(|s| s.select_all(false))>
                        "Clear"
                    </Button>
                </div>
                <For
                    each=keys
                    key=|key: &String| key.clone()
                    children=move |key: String| {
                        let key_checked = key.clone();
                        let key_toggle = key.clone();
                        let key_name = key.clone();
                        let key_rename = key.clone();
                        view! {
                            <div class="export-column">
                                <input
                                    type="checkbox"
                                    prop:checked=move || selection.with(|s| {
                                        s.columns().iter().any(|c| c.key == key_checked && c.selected)
                                    })
                                    on:change=move |_| selection.update(|s| s.toggle(&key_toggle))
                                />
                                <input
                                    type="text"
                                    class="export-column__name"
                                    prop:value=move || selection.with(|s| {
                                        s.columns()
                                            .iter()
                                            .find(|c| c.key == key_name)
                                            .map(|c| c.display_name.clone())
                                            .unwrap_or_default()
                                    })
                                    on:input=move |ev| {
                                        selection.update(|s| s.rename(&key_rename, event_target_value(&ev)))
                                    }
                                />
                                <span class="export-column__key">{key}</span>
                            </div>
                        }
                    }
                />
            </div>
            <div class="form-group">
                <label>"Format"</label>
                <select on:change=move |ev| {
                    if let Some(f) = ExportFormat::parse(&event_target_value(&ev)) {
                        format.set(f);
                    }
                }>
                    {ExportFormat::ALL
                        .iter()
                        .map(|&f| {
                            view! {
                                <option value=f.extension() selected=move || format.get() == f>
                                    {f.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
            <div class="modal-actions">
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=busy
                    on_click=move |_| on_close.run(())
                >
                    "Cancel"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=busy
                    on_click=move |_| on_export.run(())
                >
                    {move || if busy.get() { "Exporting..." } else { "Export" }}
                </Button>
            </div>
        </ModalDialog>
    }
}
