//! Pager Component
//!
//! Previous/next controls plus a "Showing a-b of n items" summary.

use leptos::prelude::*;

/// Number of pages needed for `total` rows (at least one)
pub fn page_count(total: u64, page_size: u32) -> u32 {
    let size = u64::from(page_size.max(1));
    let pages = total.div_ceil(size).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Range summary for the rows currently shown. `page` is the page those rows
/// were loaded for, which may differ from the page being requested.
pub fn showing_label(page: u32, page_size: u32, total: u64, shown: usize) -> String {
    let start = u64::from(page.max(1) - 1) * u64::from(page_size) + 1;
    if total == 0 || shown == 0 || start > total {
        return "No items".to_string();
    }
    let end = (start + shown as u64 - 1).min(total);
    format!("Showing {}-{} of {} items", start, end, total)
}

#[component]
pub fn Pager(
    #[prop(into)] page: Signal<u32>,
    /// Page the shown rows belong to
    #[prop(into)] rows_page: Signal<u32>,
    #[prop(into)] page_size: Signal<u32>,
    #[prop(into)] total: Signal<u64>,
    #[prop(into)] shown: Signal<usize>,
    #[prop(into)] on_change: Callback<u32>,
) -> impl IntoView {
    let pages = move || page_count(total.get(), page_size.get());

    view! {
        <div class="pager">
            <span class="pager-summary">
                {move || showing_label(rows_page.get(), page_size.get(), total.get(), shown.get())}
            </span>
            <button
                type="button"
                disabled=move || page.get() <= 1
                on:click=move |_| on_change.run(page.get().saturating_sub(1).max(1))
            >
                "‹"
            </button>
            <span class="pager-position">{move || format!("{} / {}", page.get(), pages())}</span>
            <button
                type="button"
                disabled=move || page.get() >= pages()
                on:click=move |_| on_change.run(page.get() + 1)
            >
                "›"
            </button>
        </div>
    }
}
