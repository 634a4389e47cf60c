use super::image_grid::ImagePanel;
use super::tab_panel::TabPanel;
use crate::config::GalleryConfig;
use crate::gallery::api;
use crate::gallery::state::{GalleryState, GalleryTab};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Галерея с табами: "Image" (загруженная сетка с предпросмотром), "Media", "Others".
#[component]
pub fn GalleryPanel(#[prop(optional)] config: Option<GalleryConfig>) -> impl IntoView {
    let config = StoredValue::new(config.unwrap_or_default());
    let state = RwSignal::new(GalleryState::default());
    let selected_tab_value = RwSignal::new(GalleryTab::default().key().to_string());

    // Загрузка списка изображений один раз при монтировании
    Effect::new(move |_| {
        let config = config.get_value();
        spawn_local(async move {
            let result = api::fetch_image_list(&config).await;
            match &result {
                Ok(urls) => log::info!("Gallery: loaded {} images", urls.len()),
                Err(err) => log::error!("Gallery: failed to load image list: {}", err),
            }
            if state.try_update(|s| s.apply_fetch_result(result)).is_none() {
                log::debug!("Gallery: disposed before the image list arrived, result dropped");
            }
        });
    });

    // Синхронизация selected_tab_value -> state.active_tab
    Effect::new(move |_| {
        let key = selected_tab_value.get();
        let Some(tab) = GalleryTab::from_key(&key) else {
            log::warn!("Gallery: unknown tab key '{}'", key);
            return;
        };
        if state.with_untracked(|s| !s.is_active(tab)) {
            log::debug!("Gallery: tab '{}' selected", tab.label());
            state.update(|s| s.select_tab(tab));
        }
    });

    let panels = state.with_untracked(|s| s.panels());

    view! {
        <div class="gallery" style="flex-grow: 1; display: flex;">
            <div
                class="gallery__tabs"
                aria-label="Gallery sections"
                style="border-right: 1px solid var(--colorNeutralStroke2, #e0e0e0); min-width: 150px;"
            >
                <TabList selected_value=selected_tab_value>
                    {GalleryTab::ALL
                        .into_iter()
                        .map(|tab| {
                            view! {
                                <Tab value=tab.key()>
                                    <span id=tab.tab_id() aria-controls=tab.panel_id()>
                                        {tab.label()}
                                    </span>
                                </Tab>
                            }
                        })
                        .collect_view()}
                </TabList>
            </div>

            {panels
                .into_iter()
                .map(|panel| match panel.tab {
                    GalleryTab::Image => {
                        view! {
                            <TabPanel tab=panel.tab state=state>
                                <ImagePanel state=state />
                            </TabPanel>
                        }
                            .into_any()
                    }
                    GalleryTab::Media => {
                        view! {
                            <TabPanel tab=panel.tab state=state>
                                "Media"
                            </TabPanel>
                        }
                            .into_any()
                    }
                    GalleryTab::Others => {
                        view! {
                            <TabPanel tab=panel.tab state=state>
                                "Others"
                            </TabPanel>
                        }
                            .into_any()
                    }
                })
                .collect_view()}
        </div>
    }
}
