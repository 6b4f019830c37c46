//! Server-rendered Table Pagination
//!
//! Paginates the rows already present in a `<tbody>` by toggling their
//! visibility, and drives the range label and page buttons found by id.

use std::cell::RefCell;
use std::rc::Rc;

use leptos_pager::{PageControl, PageSnapshot, PagerError, Paginator, RenderPage};
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::config::{DomTable, DOM_TABLES};

/// Element ids a paginated table needs in the document
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableAnchors {
    /// `<tbody>` whose direct child rows are paginated
    pub rows: &'static str,
    pub range_start: &'static str,
    pub range_end: &'static str,
    pub range_total: Option<&'static str>,
    /// Container for the page buttons
    pub controls: &'static str,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AttachError {
    #[error("no document available")]
    NoDocument,
    #[error("missing element #{0}")]
    MissingAnchor(&'static str),
    #[error(transparent)]
    Pager(#[from] PagerError),
    #[error("DOM error: {0}")]
    Dom(String),
}

struct Anchors {
    document: Document,
    range_start: Element,
    range_end: Element,
    range_total: Option<Element>,
    controls: Element,
}

fn lookup(document: &Document, id: &'static str) -> Result<Element, AttachError> {
    document.get_element_by_id(id).ok_or(AttachError::MissingAnchor(id))
}

/// Attach every configured table present on this page. Tables whose row
/// container is absent belong to other pages and are skipped.
pub fn attach_configured() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    for table in DOM_TABLES {
        if document.get_element_by_id(table.anchors.rows).is_none() {
            continue;
        }
        match attach(table) {
            Ok(total) => web_sys::console::log_1(
                &format!("[Pager] {}: {} rows paginated", table.name, total).into(),
            ),
            Err(e) => web_sys::console::warn_1(&format!("[Pager] {} not attached: {}", table.name, e).into()),
        }
    }
}

/// Look up all anchors, then render page 1 and install the click handler.
/// Nothing is touched if any anchor is missing.
pub fn attach(table: &DomTable) -> Result<usize, AttachError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or(AttachError::NoDocument)?;
    let ids = table.anchors;
    let tbody = lookup(&document, ids.rows)?;
    let anchors = Anchors {
        range_start: lookup(&document, ids.range_start)?,
        range_end: lookup(&document, ids.range_end)?,
        range_total: ids.range_total.map(|id| lookup(&document, id)).transpose()?,
        controls: lookup(&document, ids.controls)?,
        document,
    };

    let rows = collect_rows(&tbody);
    let total = rows.len();
    let pager = Rc::new(RefCell::new(Paginator::new(rows.clone(), table.pager, hide_other_rows(rows))?));

    let snapshot = pager.borrow_mut().show_page(1);
    paint(&anchors, &snapshot)?;

    let anchors = Rc::new(anchors);
    let container = anchors.controls.clone();
    let on_click = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let Some(page) = clicked_page(&ev) else {
            return;
        };
        let snapshot = pager.borrow_mut().show_page(page);
        if let Err(e) = paint(&anchors, &snapshot) {
            web_sys::console::error_1(&format!("[Pager] {}", e).into());
        }
    });
    container
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .map_err(|e| AttachError::Dom(format!("{:?}", e)))?;
    on_click.forget();

    Ok(total)
}

fn collect_rows(tbody: &Element) -> Vec<HtmlElement> {
    let children = tbody.children();
    (0..children.length())
        .filter_map(|i| children.item(i))
        .filter_map(|el| el.dyn_into::<HtmlElement>().ok())
        .collect()
}

/// Render callback: every row hidden except those of the shown page
fn hide_other_rows(all: Vec<HtmlElement>) -> RenderPage<HtmlElement> {
    Box::new(move |page: &[HtmlElement]| {
        for row in &all {
            let _ = row.style().set_property("display", "none");
        }
        for row in page {
            let _ = row.style().remove_property("display");
        }
    })
}

/// Page number carried by the clicked button, if any
fn clicked_page(ev: &web_sys::MouseEvent) -> Option<usize> {
    let target = ev.target()?.dyn_into::<Element>().ok()?;
    let button = target.closest("button[data-page]").ok()??;
    button.get_attribute("data-page")?.parse().ok()
}

fn paint(anchors: &Anchors, snapshot: &PageSnapshot) -> Result<(), AttachError> {
    let dom_err = |e: wasm_bindgen::JsValue| AttachError::Dom(format!("{:?}", e));

    anchors.range_start.set_text_content(Some(&snapshot.range.first.to_string()));
    anchors.range_end.set_text_content(Some(&snapshot.range.last.to_string()));
    if let Some(total) = &anchors.range_total {
        total.set_text_content(Some(&snapshot.range.total.to_string()));
    }

    anchors.controls.set_inner_html("");
    for control in &snapshot.controls {
        let node = match control {
            PageControl::Page { number, active } => {
                let button = anchors.document.create_element("button").map_err(dom_err)?;
                button.set_attribute("type", "button").map_err(dom_err)?;
                button.set_attribute("data-page", &number.to_string()).map_err(dom_err)?;
                button.set_class_name(if *active { "page-btn active" } else { "page-btn" });
                button.set_text_content(Some(&number.to_string()));
                button
            }
            PageControl::Ellipsis => {
                let span = anchors.document.create_element("span").map_err(dom_err)?;
                span.set_class_name("page-ellipsis");
                span.set_text_content(Some("..."));
                span
            }
        };
        anchors.controls.append_child(&node).map_err(dom_err)?;
    }
    Ok(())
}
