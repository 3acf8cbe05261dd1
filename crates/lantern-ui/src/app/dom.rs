//! Thin, error-mapped wrappers over the web-sys calls the page needs.

use crate::error::{UiError, UiResult};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement};

pub(crate) fn by_id(document: &Document, id: &str) -> UiResult<Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| UiError::MissingElement {
            selector: format!("#{id}"),
        })
}

pub(crate) fn typed_by_id<T: JsCast>(
    document: &Document,
    id: &str,
    expected: &'static str,
) -> UiResult<T> {
    by_id(document, id)?
        .dyn_into::<T>()
        .map_err(|_| UiError::UnexpectedElement {
            selector: format!("#{id}"),
            expected,
        })
}

pub(crate) fn html_by_id(document: &Document, id: &str) -> UiResult<HtmlElement> {
    typed_by_id(document, id, "HtmlElement")
}

pub(crate) fn query(document: &Document, selector: &str) -> UiResult<Element> {
    document
        .query_selector(selector)
        .map_err(dom_error("query_selector"))?
        .ok_or_else(|| missing(selector))
}

pub(crate) fn query_in(parent: &Element, selector: &str) -> UiResult<Element> {
    parent
        .query_selector(selector)
        .map_err(dom_error("query_selector"))?
        .ok_or_else(|| missing(selector))
}

pub(crate) fn query_all(document: &Document, selector: &str) -> UiResult<Vec<Element>> {
    let nodes = document
        .query_selector_all(selector)
        .map_err(dom_error("query_selector_all"))?;
    Ok((0..nodes.length())
        .filter_map(|index| nodes.get(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub(crate) fn set_class(element: &Element, class: &str, on: bool) {
    let _ = element.class_list().toggle_with_force(class, on);
}

pub(crate) fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

pub(crate) fn set_display(element: &HtmlElement, visible: bool) {
    let value = if visible { "block" } else { "none" };
    let _ = element.style().set_property("display", value);
}

pub(crate) fn set_text(element: &Element, text: &str) {
    element.set_text_content(Some(text));
}

fn missing(selector: &str) -> UiError {
    UiError::MissingElement {
        selector: selector.to_string(),
    }
}

fn dom_error(operation: &'static str) -> impl FnOnce(JsValue) -> UiError {
    move |value| UiError::Dom {
        operation,
        detail: format!("{value:?}"),
    }
}
