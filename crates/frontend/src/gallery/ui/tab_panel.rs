use crate::gallery::state::{GalleryState, GalleryTab};
use leptos::prelude::*;

/// Область содержимого одного таба.
///
/// Неактивная панель остаётся в DOM с атрибутом `hidden`, убирается только тело.
#[component]
pub fn TabPanel(tab: GalleryTab, state: RwSignal<GalleryState>, children: ChildrenFn) -> impl IntoView {
    let is_hidden = move || state.with(|s| s.is_hidden(tab));

    view! {
        <div
            role="tabpanel"
            class="gallery__panel"
            hidden=is_hidden
            id=tab.panel_id()
            aria-labelledby=tab.tab_id()
        >
            <Show when=move || !is_hidden()>
                <div class="gallery__panel-body" style="padding: 24px;">
                    {children()}
                </div>
            </Show>
        </div>
    }
}
