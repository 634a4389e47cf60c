use crate::shared::icons::close_icon;
use leptos::prelude::*;

#[component]
pub fn PreviewBox(url: String, on_close: Callback<()>) -> impl IntoView {
    view! {
        <div
            class="gallery__preview"
            style="
                position: relative;
                margin-top: 16px;
                padding: 16px;
                border: 1px solid var(--colorNeutralStroke2, #e0e0e0);
                border-radius: 4px;
                width: 100%;
                height: 400px;
                box-sizing: border-box;
                display: flex;
                align-items: center;
                justify-content: center;
                background-color: var(--colorNeutralBackground2, #fafafa);
            "
        >
            <button
                type="button"
                class="gallery__preview-close"
                aria-label="close"
                style="position: absolute; top: 8px; right: 8px; border: none; background: transparent; color: #9e9e9e; cursor: pointer;"
                on:click=move |_| on_close.run(())
            >
                {close_icon()}
            </button>
            <img src=url alt="Preview" style="max-height: 100%; max-width: 100%;" />
        </div>
    }
}
