//! Pager Components
//!
//! Range label and page-number row for a `PageSnapshot`.

use leptos::prelude::*;

use crate::paginator::PageSnapshot;
use crate::window::PageControl;

/// "Mostrando X - Y de Z"
#[component]
pub fn PageRange(#[prop(into)] snapshot: Signal<PageSnapshot>) -> impl IntoView {
    view! {
        <span class="pager-range">{move || snapshot.get().range.to_string()}</span>
    }
}

/// Page-number buttons with the active page highlighted
#[component]
pub fn PageControls(
    #[prop(into)] snapshot: Signal<PageSnapshot>,
    #[prop(into)] on_select: Callback<usize>,
) -> impl IntoView {
    view! {
        <div class="pager-controls">
            {move || snapshot.get().controls.into_iter().map(|control| match control {
                PageControl::Page { number, active } => view! {
                    <button
                        type="button"
                        class=if active { "page-btn active" } else { "page-btn" }
                        on:click=move |_| on_select.run(number)
                    >
                        {number}
                    </button>
                }.into_any(),
                PageControl::Ellipsis => view! {
                    <span class="page-ellipsis">"..."</span>
                }.into_any(),
            }).collect_view()}
        </div>
    }
}
