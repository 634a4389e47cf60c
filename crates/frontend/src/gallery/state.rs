//! Состояние галереи и правила отрисовки.
//!
//! Здесь только данные: Leptos-компоненты держат сигнал с [`GalleryState`]
//! и лишь переводят [`ImagePanelView`] / [`PanelView`] в разметку.

use contracts::gallery::FetchError;

/// Сколько миниатюр остаётся над окном предпросмотра
pub const PREVIEW_STRIP_LEN: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GalleryTab {
    #[default]
    Image,
    Media,
    Others,
}

impl GalleryTab {
    pub const ALL: [GalleryTab; 3] = [GalleryTab::Image, GalleryTab::Media, GalleryTab::Others];

    pub fn index(self) -> usize {
        match self {
            GalleryTab::Image => 0,
            GalleryTab::Media => 1,
            GalleryTab::Others => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GalleryTab::Image => "Image",
            GalleryTab::Media => "Media",
            GalleryTab::Others => "Others",
        }
    }

    /// Значение для TabList
    pub fn key(self) -> &'static str {
        match self {
            GalleryTab::Image => "image",
            GalleryTab::Media => "media",
            GalleryTab::Others => "others",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.key() == key)
    }

    pub fn tab_id(self) -> String {
        format!("vertical-tab-{}", self.index())
    }

    pub fn panel_id(self) -> String {
        format!("vertical-tabpanel-{}", self.index())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GalleryState {
    pub active_tab: GalleryTab,
    /// download_url в порядке ответа
    pub images: Vec<String>,
    pub error: Option<String>,
    pub preview: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    pub index: usize,
    pub url: String,
    pub alt: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImagePanelView {
    Grid {
        thumbnails: Vec<Thumbnail>,
    },
    Preview {
        thumbnails: Vec<Thumbnail>,
        selected: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelView {
    pub tab: GalleryTab,
    pub hidden: bool,
}

impl GalleryState {
    pub fn select_tab(&mut self, tab: GalleryTab) {
        self.active_tab = tab;
    }

    /// Сохранить результат единственного запроса списка.
    ///
    /// При ошибке список не трогаем, записываем фиксированное сообщение;
    /// оно больше не сбрасывается.
    pub fn apply_fetch_result(&mut self, result: Result<Vec<String>, FetchError>) {
        match result {
            Ok(urls) => self.images = urls,
            Err(err) => self.error = Some(err.user_message().to_string()),
        }
    }

    /// false, если `url` нет в списке изображений.
    pub fn click_thumbnail(&mut self, url: &str) -> bool {
        if !self.images.iter().any(|u| u == url) {
            return false;
        }
        self.preview = Some(url.to_string());
        true
    }

    pub fn close_preview(&mut self) {
        self.preview = None;
    }

    pub fn is_active(&self, tab: GalleryTab) -> bool {
        self.active_tab == tab
    }

    /// Неактивная панель остаётся в DOM с атрибутом `hidden`
    pub fn is_hidden(&self, tab: GalleryTab) -> bool {
        !self.is_active(tab)
    }

    pub fn panels(&self) -> Vec<PanelView> {
        GalleryTab::ALL
            .into_iter()
            .map(|tab| PanelView {
                tab,
                hidden: self.is_hidden(tab),
            })
            .collect()
    }

    pub fn image_panel(&self) -> ImagePanelView {
        match &self.preview {
            None => ImagePanelView::Grid {
                thumbnails: thumbnails(self.images.iter(), "Random"),
            },
            Some(selected) => ImagePanelView::Preview {
                thumbnails: thumbnails(self.images.iter().take(PREVIEW_STRIP_LEN), "Thumbnail"),
                selected: selected.clone(),
            },
        }
    }
}

fn thumbnails<'a>(urls: impl Iterator<Item = &'a String>, alt_prefix: &str) -> Vec<Thumbnail> {
    urls.enumerate()
        .map(|(index, url)| Thumbnail {
            index,
            url: url.clone(),
            alt: format!("{} {}", alt_prefix, index),
        })
        .collect()
}
