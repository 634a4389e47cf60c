use crate::gallery::GalleryPanel;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ConfigProvider>
            <GalleryPanel />
        </ConfigProvider>
    }
}
