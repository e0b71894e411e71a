//! `IntersectionObserver` adapter for the reveal-on-view watcher.

use platform_host::{
    ObservationHandle, ObserveError, ObserveRequest, RevealCallback, ViewportObserverService,
};

/// DOM attribute carrying the [`platform_host::RevealTargetId`] assigned during enumeration.
pub const REVEAL_TARGET_ATTR: &str = "data-reveal-target";

#[derive(Debug, Clone, Copy, Default)]
/// Browser viewport observer adapter.
pub struct WebViewportObserverService;

impl WebViewportObserverService {
    /// Returns whether the host exposes the `IntersectionObserver` constructor.
    pub fn is_supported() -> bool {
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::window()
                .map(|window| {
                    js_sys::Reflect::has(
                        &window,
                        &wasm_bindgen::JsValue::from_str("IntersectionObserver"),
                    )
                    .unwrap_or(false)
                })
                .unwrap_or(false)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            false
        }
    }
}

impl ViewportObserverService for WebViewportObserverService {
    fn observe(
        &self,
        request: &ObserveRequest,
        on_samples: RevealCallback,
    ) -> Result<Box<dyn ObservationHandle>, ObserveError> {
        if !Self::is_supported() {
            return Err(ObserveError::Unsupported(
                "IntersectionObserver is not available".to_string(),
            ));
        }
        observe(request, on_samples)
    }
}

#[cfg(target_arch = "wasm32")]
fn observe(
    request: &ObserveRequest,
    mut on_samples: RevealCallback,
) -> Result<Box<dyn ObservationHandle>, ObserveError> {
    use std::rc::Rc;

    use platform_host::{IntersectionSample, RevealTargetId};
    use wasm_bindgen::{closure::Closure, JsCast, JsValue};

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| ObserveError::Unsupported("document unavailable".to_string()))?;
    let nodes = document
        .query_selector_all(&format!(".{}", request.marker_class))
        .map_err(|err| ObserveError::Construction(format!("marker query failed: {err:?}")))?;

    let mut elements = Vec::with_capacity(nodes.length() as usize);
    for index in 0..nodes.length() {
        let Some(node) = nodes.item(index) else {
            continue;
        };
        let Ok(element) = node.dyn_into::<web_sys::Element>() else {
            continue;
        };
        let _ = element.set_attribute(REVEAL_TARGET_ATTR, &elements.len().to_string());
        elements.push(element);
    }
    let elements = Rc::new(elements);

    let revealed_class = request.revealed_class.clone();
    let targets = elements.clone();
    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
            let samples = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<web_sys::IntersectionObserverEntry>().ok())
                .filter_map(|entry| {
                    let target = entry
                        .target()
                        .get_attribute(REVEAL_TARGET_ATTR)?
                        .parse::<usize>()
                        .ok()?;
                    Some(IntersectionSample {
                        target: RevealTargetId(target),
                        is_intersecting: entry.is_intersecting(),
                        ratio: entry.intersection_ratio(),
                    })
                })
                .collect::<Vec<_>>();

            for RevealTargetId(index) in on_samples(&samples) {
                if let Some(element) = targets.get(index) {
                    let _ = element.class_list().add_1(&revealed_class);
                }
            }
        },
    );

    let options = web_sys::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(request.threshold));
    let observer = web_sys::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    )
    .map_err(|err| ObserveError::Construction(format!("{err:?}")))?;

    for element in elements.iter() {
        observer.observe(element);
    }

    Ok(Box::new(WebObservationHandle {
        target_count: elements.len(),
        observer: Some(observer),
        callback: Some(callback),
    }))
}

#[cfg(not(target_arch = "wasm32"))]
fn observe(
    _request: &ObserveRequest,
    _on_samples: RevealCallback,
) -> Result<Box<dyn ObservationHandle>, ObserveError> {
    Err(ObserveError::Unsupported(
        "IntersectionObserver requires a browser host".to_string(),
    ))
}

#[cfg(target_arch = "wasm32")]
struct WebObservationHandle {
    target_count: usize,
    observer: Option<web_sys::IntersectionObserver>,
    callback: Option<
        wasm_bindgen::closure::Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
    >,
}

#[cfg(target_arch = "wasm32")]
impl ObservationHandle for WebObservationHandle {
    fn target_count(&self) -> usize {
        self.target_count
    }

    fn disconnect(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
        // The closure must outlive the observer; release it only after disconnecting.
        self.callback = None;
    }

    fn is_connected(&self) -> bool {
        self.observer.is_some()
    }
}

#[cfg(target_arch = "wasm32")]
impl Drop for WebObservationHandle {
    fn drop(&mut self) {
        self.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn native_observer_degrades_to_unsupported() {
        let request = ObserveRequest {
            marker_class: "fade-on-scroll".to_string(),
            revealed_class: "animate-fade-in".to_string(),
            threshold: 0.1,
        };
        let result = WebViewportObserverService.observe(&request, Box::new(|_| Vec::new()));
        assert!(!WebViewportObserverService::is_supported());
        assert!(matches!(result, Err(ObserveError::Unsupported(_))));
    }
}
