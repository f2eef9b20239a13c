use chrono::{Datelike, NaiveDate, Utc};
use contracts::shared::list_query::DATE_FORMAT;
use leptos::prelude::*;
use thaw::*;

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

fn format_date(value: Option<NaiveDate>) -> String {
    value.map(|d| d.format(DATE_FORMAT).to_string()).unwrap_or_default()
}

/// First and last day of the month containing `day`.
pub fn month_bounds(day: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = day.with_day(1).unwrap_or(day);
    let next_month = if start.month() == 12 {
        NaiveDate::from_ymd_opt(start.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(start.year(), start.month() + 1, 1)
    };
    let end = next_month.and_then(|d| d.pred_opt()).unwrap_or(start);
    (start, end)
}

/// Created-at range of a list. Empty inputs mean an open bound.
#[component]
pub fn DateRangeFilter(
    #[prop(into)]
    start: Signal<Option<NaiveDate>>,
    #[prop(into)]
    end: Signal<Option<NaiveDate>>,
    on_change: Callback<(Option<NaiveDate>, Option<NaiveDate>)>,
) -> impl IntoView {
    let input_style = "padding: 6px 8px; border: 1px solid #ced4da; border-radius: 4px; font-size: 0.875rem; background: #fff; width: 140px;";

    view! {
        <div class="date-range-filter">
            <input
                type="date"
                style=input_style
                prop:value=move || format_date(start.get())
                on:change=move |ev| {
                    on_change.run((parse_date(&event_target_value(&ev)), end.get_untracked()));
                }
            />
            <span>"–"</span>
            <input
                type="date"
                style=input_style
                prop:value=move || format_date(end.get())
                on:change=move |ev| {
                    on_change.run((start.get_untracked(), parse_date(&event_target_value(&ev))));
                }
            />
            <Button
                size=ButtonSize::Small
                on_click=move |_| {
                    let (from, to) = month_bounds(Utc::now().date_naive());
                    on_change.run((Some(from), Some(to)));
                }
            >
                "This month"
            </Button>
            <Button size=ButtonSize::Small on_click=move |_| on_change.run((None, None))>
                "Clear"
            </Button>
        </div>
    }
}
