use contracts::domain::a004_marketing_publication::{
    MarketingPublication, UpdatePublicationRequest, PUBLICATION_STATUSES,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;
use thaw::{Button, ButtonAppearance, Input, Select, Textarea};

use crate::domain::a004_marketing_publication::api;
use crate::layout::notifications::use_notifications;
use crate::shared::components::cell_renderers::thumbnail;
use crate::shared::date_utils::{format_datetime, from_datetime_local, to_datetime_local};
use crate::shared::form_validation::{optional, required, FieldError, FormErrors};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};
use crate::system::auth::context::use_session;

/// Editable fields of a publication, as typed into the inputs.
/// Dates hold `datetime-local` values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PublicationForm {
    pub id: String,
    pub title: String,
    pub description: String,
    pub redirect_url: String,
    pub status: String,
    pub publish_at_start: String,
    pub publish_at_end: String,
}

impl PublicationForm {
    pub fn from_record(p: &MarketingPublication) -> Self {
        Self {
            id: p.id.clone(),
            title: p.title.clone(),
            description: p.description.clone().unwrap_or_default(),
            redirect_url: p.redirect_url.clone().unwrap_or_default(),
            status: p.status.clone(),
            publish_at_start: p.publish_at_start.as_deref().map(to_datetime_local).unwrap_or_default(),
            publish_at_end: p.publish_at_end.as_deref().map(to_datetime_local).unwrap_or_default(),
        }
    }

    /// Blank optional fields are sent as `null`.
    pub fn validate(&self) -> Result<UpdatePublicationRequest, FormErrors> {
        let mut errors = FormErrors::default();

        let title = required(&self.title).unwrap_or_else(|e| {
            errors.add("title", e);
            String::new()
        });

        if !PUBLICATION_STATUSES.contains(&self.status.as_str()) {
            errors.add("status", FieldError::NotAnOption);
        }

        let mut date = |field: &'static str, value: &str| -> Option<String> {
            let value = optional(value)?;
            let parsed = from_datetime_local(&value);
            if parsed.is_none() {
                errors.add(field, FieldError::InvalidDateTime);
            }
            parsed
        };
        let start = date("publish_at_start", &self.publish_at_start);
        let end = date("publish_at_end", &self.publish_at_end);

        // Same fixed-width format, so string order is time order.
        if let (Some(start), Some(end)) = (&start, &end) {
            if end < start {
                errors.add("publish_at_end", FieldError::EndsBeforeStart);
            }
        }

        errors.into_result(UpdatePublicationRequest {
            id: self.id.clone(),
            title,
            description: optional(&self.description),
            redirect_url: optional(&self.redirect_url),
            status: self.status.clone(),
            publish_at_start: start,
            publish_at_end: end,
        })
    }
}

#[component]
pub fn MarketingPublicationDetails() -> impl IntoView {
    let params = use_params_map();
    let session = use_session();
    let notify = use_notifications();

    let publication: RwSignal<Option<MarketingPublication>> = RwSignal::new(None);
    let loading = RwSignal::new(true);
    let saving = RwSignal::new(false);
    let reload = RwSignal::new(0u32);
    let errors = RwSignal::new(FormErrors::default());

    let id = RwSignal::new(String::new());
    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let redirect_url = RwSignal::new(String::new());
    let status = RwSignal::new(String::new());
    let publish_at_start = RwSignal::new(String::new());
    let publish_at_end = RwSignal::new(String::new());

    let fill = move |form: PublicationForm| {
        id.set(form.id);
        title.set(form.title);
        description.set(form.description);
        redirect_url.set(form.redirect_url);
        status.set(form.status);
        publish_at_start.set(form.publish_at_start);
        publish_at_end.set(form.publish_at_end);
    };

    Effect::new(move |_| {
        reload.track();
        let Some(pub_id) = params.with(|p| p.get("id")) else {
            loading.set(false);
            return;
        };
        let token = session.token();
        loading.set(true);
        spawn_local(async move {
            match api::fetch_publication(&pub_id, token.as_deref()).await {
                Ok(p) => {
                    fill(PublicationForm::from_record(&p));
                    errors.set(FormErrors::default());
                    publication.set(Some(p));
                }
                Err(e) => {
                    publication.set(None);
                    notify.error(format!("Failed to load publication: {}", e));
                }
            }
            loading.set(false);
        });
    });

    let save = move |_| {
        let form = PublicationForm {
            id: id.get_untracked(),
            title: title.get_untracked(),
            description: description.get_untracked(),
            redirect_url: redirect_url.get_untracked(),
            status: status.get_untracked(),
            publish_at_start: publish_at_start.get_untracked(),
            publish_at_end: publish_at_end.get_untracked(),
        };
        let request = match form.validate() {
            Ok(request) => request,
            Err(e) => {
                errors.set(e);
                notify.warning("Check the highlighted fields");
                return;
            }
        };
        errors.set(FormErrors::default());
        saving.set(true);

        let token = session.token();
        spawn_local(async move {
            match api::update_publication(&request, token.as_deref()).await {
                Ok(()) => {
                    notify.success("Publication saved");
                    reload.update(|n| *n += 1);
                }
                Err(e) => notify.error(format!("Failed to save publication: {}", e)),
            }
            saving.set(false);
        });
    };

    let field_error = move |field: &'static str| {
        move || {
            errors
                .with(|e| e.message(field))
                .map(|m| view! { <div class="form-group__error">{m}</div> })
        }
    };

    let date_input = move |value: RwSignal<String>| {
        view! {
            <input
                type="datetime-local"
                class="form-group__input"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        }
    };

    view! {
        <PageFrame page_id="a004_marketing_publication--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <div class="page__header-left">
                    <A href="/marketing">{icon("chevron-left")}" Marketing"</A>
                    <h1 class="page__title">"Publication"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || saving.get() || publication.with(Option::is_none))
                        on_click=save
                    >
                        {move || if saving.get() { "Saving..." } else { "Save" }}
                    </Button>
                </div>
            </div>
            <div class="page__content">
                {move || match publication.get() {
                    Some(p) => view! {
                        <dl class="detail-list">
                            <dt>"Banner"</dt>
                            <dd>{thumbnail(p.image_url.clone(), p.title.clone())}</dd>
                            <dt>"Shown as popup"</dt>
                            <dd>{if p.is_popup { "Yes" } else { "No" }}</dd>
                            <dt>"Clicks"</dt>
                            <dd>{p.clicks}</dd>
                            <dt>"Created at"</dt>
                            <dd>{format_datetime(&p.created_at)}</dd>
                        </dl>
                        <div class="form-group">
                            <label>"Title"</label>
                            <Input value=title />
                            {field_error("title")}
                        </div>
                        <div class="form-group">
                            <label>"Description"</label>
                            <Textarea value=description />
                        </div>
                        <div class="form-group">
                            <label>"Redirect URL"</label>
                            <Input value=redirect_url placeholder="https://" />
                        </div>
                        <div class="form-group">
                            <label>"Status"</label>
                            <Select value=status>
                                {PUBLICATION_STATUSES
                                    .iter()
                                    .map(|s| view! { <option value=*s>{*s}</option> })
                                    .collect_view()}
                            </Select>
                            {field_error("status")}
                        </div>
                        <div class="form-group">
                            <label>"Publish from"</label>
                            {date_input(publish_at_start)}
                            {field_error("publish_at_start")}
                        </div>
                        <div class="form-group">
                            <label>"Publish until"</label>
                            {date_input(publish_at_end)}
                            {field_error("publish_at_end")}
                        </div>
                    }
                    .into_any(),
                    None if loading.get() => view! { <p class="table__empty">"Loading..."</p> }.into_any(),
                    None => view! { <p class="table__empty">"Publication not found"</p> }.into_any(),
                }}
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> MarketingPublication {
        MarketingPublication {
            id: "m1".to_string(),
            title: "Summer sale".to_string(),
            description: None,
            image_url: Some("banner.png".to_string()),
            status: "Disponivel".to_string(),
            clicks: 12,
            redirect_url: Some("https://blog.com/sale".to_string()),
            is_popup: true,
            publish_at_start: Some("2024-06-01T09:00:00.000Z".to_string()),
            publish_at_end: None,
            created_at: "2024-05-20T10:00:00.000Z".to_string(),
        }
    }

    #[test]
    fn unchanged_record_saves_as_loaded() {
        let request = PublicationForm::from_record(&record()).validate().unwrap();
        assert_eq!(request.id, "m1");
        assert_eq!(request.title, "Summer sale");
        assert_eq!(request.description, None);
        assert_eq!(request.redirect_url.as_deref(), Some("https://blog.com/sale"));
        assert_eq!(request.publish_at_start.as_deref(), Some("2024-06-01T09:00:00.000Z"));
        assert_eq!(request.publish_at_end, None);
    }

    #[test]
    fn blank_title_and_unknown_status_are_rejected() {
        let mut form = PublicationForm::from_record(&record());
        form.title = "   ".to_string();
        form.status = "Archived".to_string();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("title"), Some(&FieldError::Required));
        assert_eq!(errors.get("status"), Some(&FieldError::NotAnOption));
    }

    #[test]
    fn end_before_start_is_rejected() {
        let mut form = PublicationForm::from_record(&record());
        form.publish_at_end = "2024-05-31T23:59".to_string();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("publish_at_end"), Some(&FieldError::EndsBeforeStart));

        form.publish_at_end = "2024-06-01T09:00".to_string();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn malformed_date_is_reported_per_field() {
        let mut form = PublicationForm::from_record(&record());
        form.publish_at_start = "tomorrow".to_string();
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get("publish_at_start"), Some(&FieldError::InvalidDateTime));
        assert!(errors.get("publish_at_end").is_none());
    }

    #[test]
    fn blank_optional_fields_become_null() {
        let mut form = PublicationForm::from_record(&record());
        form.redirect_url = "  ".to_string();
        form.publish_at_start.clear();
        let request = form.validate().unwrap();
        assert_eq!(request.redirect_url, None);
        assert_eq!(request.publish_at_start, None);
    }
}
