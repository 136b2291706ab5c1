//! Outbound browser actions and DOM measurement.
//!
//! Everything here is a no-op when rendering on the server.

#[cfg(feature = "hydrate")]
use leptos::web_sys;

use crate::models::SectionId;
use crate::state::SectionProbe;

/// Reads section tops from the live document
pub struct DocumentProbe;

impl SectionProbe for DocumentProbe {
    #[cfg(feature = "hydrate")]
    fn top_of(&self, id: &SectionId) -> Option<f64> {
        let document = web_sys::window()?.document()?;
        let element = document.get_element_by_id(id.as_str())?;
        Some(element.get_bounding_client_rect().top())
    }

    #[cfg(not(feature = "hydrate"))]
    fn top_of(&self, _id: &SectionId) -> Option<f64> {
        None
    }
}

/// Vertical scroll offset, document height and viewport height
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PageMetrics {
    pub offset_y: f64,
    pub scroll_height: f64,
    pub viewport_height: f64,
}

#[cfg(feature = "hydrate")]
pub fn page_metrics() -> PageMetrics {
    let Some(window) = web_sys::window() else {
        return PageMetrics::default();
    };
    let offset_y = window.scroll_y().unwrap_or_default();
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or_default();
    let scroll_height = window
        .document()
        .and_then(|d| d.document_element())
        .map(|root| f64::from(root.scroll_height()))
        .unwrap_or_default();
    PageMetrics {
        offset_y,
        scroll_height,
        viewport_height,
    }
}

#[cfg(not(feature = "hydrate"))]
pub fn page_metrics() -> PageMetrics {
    PageMetrics::default()
}

/// Smooth-scrolls the window back to the top. Browsers without smooth
/// scrolling jump instead.
pub fn scroll_to_top() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
}

/// Smooth-scrolls to the in-page section `id`. Returns false if the element is missing.
#[cfg(feature = "hydrate")]
pub fn scroll_to_anchor(id: &str) -> bool {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return false;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

#[cfg(not(feature = "hydrate"))]
pub fn scroll_to_anchor(_id: &str) -> bool {
    false
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum OpenError {
    #[error("popup blocked")]
    Blocked,
    #[error("window.open failed: {0}")]
    Failed(String),
}

/// `window.open` yields no window when a popup blocker intervenes
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn check_opened<W, E: std::fmt::Debug>(result: Result<Option<W>, E>) -> Result<(), OpenError> {
    match result {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err(OpenError::Blocked),
        Err(e) => Err(OpenError::Failed(format!("{e:?}"))),
    }
}

/// Opens `url` in a new tab, logging a warning when the browser refuses
pub fn open_external(url: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = check_opened(window.open_with_url_and_target(url, "_blank")) {
                leptos::logging::warn!("could not open {url}: {e}");
            }
        }
    }

    #[cfg(not(feature = "hydrate"))]
    let _ = url;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opened_window_is_success() {
        assert_eq!(check_opened::<(), ()>(Ok(Some(()))), Ok(()));
    }

    #[test]
    fn refusals_are_reported() {
        assert_eq!(check_opened::<(), ()>(Ok(None)), Err(OpenError::Blocked));
        assert_eq!(
            check_opened::<(), &str>(Err("SecurityError")),
            Err(OpenError::Failed("\"SecurityError\"".into()))
        );
    }
}
