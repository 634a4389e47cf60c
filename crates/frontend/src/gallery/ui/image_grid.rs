use super::preview::PreviewBox;
use crate::gallery::state::{GalleryState, ImagePanelView, Thumbnail};
use leptos::prelude::*;

/// Тело таба "Image": строка ошибки, затем либо полная сетка, либо
/// полоса миниатюр с окном предпросмотра.
#[component]
pub fn ImagePanel(state: RwSignal<GalleryState>) -> impl IntoView {
    let on_select = Callback::new(move |url: String| {
        let accepted = state.try_update(|s| s.click_thumbnail(&url)).unwrap_or(false);
        if accepted {
            log::debug!("Preview opened: {}", url);
        }
    });

    let on_close = Callback::new(move |_: ()| {
        state.update(|s| s.close_preview());
    });

    view! {
        <div class="gallery__images">
            {move || {
                state
                    .with(|s| s.error.clone())
                    .map(|err| view! { <p class="gallery__error">{err}</p> })
            }}

            {move || match state.with(|s| s.image_panel()) {
                ImagePanelView::Grid { thumbnails } => {
                    view! { <ImageGrid thumbnails=thumbnails on_select=on_select /> }.into_any()
                }
                ImagePanelView::Preview { thumbnails, selected } => {
                    view! {
                        <div style="display: flex; flex-direction: column; gap: 16px;">
                            <ImageGrid thumbnails=thumbnails on_select=on_select compact=true />
                            <PreviewBox url=selected on_close=on_close />
                        </div>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}

/// Сетка миниатюр с переносом, по четыре в ряд.
#[component]
pub fn ImageGrid(
    thumbnails: Vec<Thumbnail>,
    on_select: Callback<String>,
    #[prop(optional)] compact: bool,
) -> impl IntoView {
    let style = if compact {
        "display: flex; flex-wrap: wrap; gap: 10px;"
    } else {
        "display: flex; flex-wrap: wrap;"
    };

    view! {
        <div class="gallery__grid" style=style>
            {thumbnails
                .into_iter()
                .map(|thumb| {
                    let url = thumb.url.clone();
                    view! {
                        <img
                            src=thumb.url
                            alt=thumb.alt
                            data-index=thumb.index.to_string()
                            style="width: 25%; height: auto; cursor: pointer;"
                            on:click=move |_| on_select.run(url.clone())
                        />
                    }
                })
                .collect_view()}
        </div>
    }
}
