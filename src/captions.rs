// Caption reveal/hide for the focused project. The markup puts each
// project's text under `#<title>` with `.title`, `.left` and `.right`
// children; the stylesheet animates on these exact class names, so they
// must not change. All toggles are class-list operations and therefore
// idempotent under repeated identical calls.

use web_sys as web;

const GROUPS: [(&str, &str); 3] = [
    (".title", "animate-title"),
    (".left", "animate-left"),
    (".right", "animate-right"),
];

/// Reveal the caption group for `title`: drop `hidden` and any `-back`
/// classes, add the reveal classes.
pub fn reveal(document: &web::Document, title: &str) {
    for (child, class) in GROUPS {
        if let Some(el) = query(document, title, child) {
            let cl = el.class_list();
            _ = cl.remove_1("hidden");
            _ = cl.remove_1(&format!("{class}-back"));
            _ = cl.add_1(class);
        }
    }
}

/// Hide the caption group for `title`: swap the reveal classes for their
/// `-back` variants plus `hidden`.
pub fn hide(document: &web::Document, title: &str) {
    for (child, class) in GROUPS {
        if let Some(el) = query(document, title, child) {
            let cl = el.class_list();
            _ = cl.remove_1(class);
            _ = cl.add_1(&format!("{class}-back"));
            _ = cl.add_1("hidden");
        }
    }
}

fn query(document: &web::Document, title: &str, child: &str) -> Option<web::Element> {
    document
        .query_selector(&format!("#{title} {child}"))
        .ok()
        .flatten()
}
