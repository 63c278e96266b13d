use leptos::prelude::*;

/// PaginationControls component - previous/next pager for short lists
#[component]
pub fn PaginationControls(
    /// Current page (1-indexed)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Page count as displayed, at least 1
    #[prop(into)]
    total_pages: Signal<usize>,

    #[prop(into)]
    has_previous: Signal<bool>,

    #[prop(into)]
    has_next: Signal<bool>,

    /// Callback when page changes
    on_page_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <div class="paginacao">
            <button
                class="pagination-btn"
                on:click=move |_| {
                    if has_previous.get_untracked() {
                        on_page_change.run(current_page.get_untracked() - 1);
                    }
                }
                disabled=move || !has_previous.get()
            >
                "← Anterior"
            </button>
            <span class="pagination-info">
                {move || format!("Página {} de {}", current_page.get(), total_pages.get())}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    if has_next.get_untracked() {
                        on_page_change.run(current_page.get_untracked() + 1);
                    }
                }
                disabled=move || !has_next.get()
            >
                "Próxima →"
            </button>
        </div>
    }
}
