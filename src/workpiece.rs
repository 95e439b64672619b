use crate::constants::*;
use crate::dom;
use crate::layout::px;
use comparator_core::{ComparatorConfig, WorkpieceError, WorkpieceSpec};
use wasm_bindgen::JsCast;
use web_sys as web;

/// All selectable workpieces on the page, in document order.
pub fn source_workpieces(document: &web::Document) -> Vec<web::HtmlElement> {
    let Ok(list) = document.query_selector_all(WORKPIECE_SELECTOR) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

/// Read a source element's declarative attributes.
pub fn read_spec(el: &web::HtmlElement) -> Result<WorkpieceSpec, WorkpieceError> {
    let data = el.dataset();
    WorkpieceSpec::from_attributes(
        data.get(DATA_NOMINAL_HEIGHT).as_deref(),
        data.get(DATA_PROFILE_TYPE).as_deref(),
        data.get(DATA_FILL).as_deref(),
        data.get(DATA_BORDER).as_deref(),
    )
}

/// Size, colour and clip the active clone so its outline is the measured
/// profile.
pub fn apply_styles(el: &web::HtmlElement, spec: &WorkpieceSpec, config: &ComparatorConfig) {
    dom::set_style(el, "height", &px(config.mm_to_px(spec.box_height_mm())));
    dom::set_style(el, "background-color", &spec.fill);
    dom::set_style(el, "border-color", &spec.border);
    dom::set_style(el, "clip-path", &spec.clip_path(config.silhouette_samples));
    dom::set_style(el, "cursor", CURSOR_GRAB);
}

/// Replace the container's content with a styled deep clone of `source`.
pub fn mount_clone(
    source: &web::HtmlElement,
    container: &web::HtmlElement,
    spec: &WorkpieceSpec,
    config: &ComparatorConfig,
) -> anyhow::Result<web::HtmlElement> {
    container.set_inner_html("");
    let clone: web::HtmlElement = source
        .clone_node_with_deep(true)
        .map_err(|e| anyhow::anyhow!("clone failed: {:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("clone is not an HtmlElement: {:?}", e))?;
    clone.set_id(ACTIVE_WORKPIECE_ID);
    _ = clone.class_list().remove_1(WORKPIECE_CLASS);
    apply_styles(&clone, spec, config);
    container
        .append_child(&clone)
        .map_err(|e| anyhow::anyhow!("append failed: {:?}", e))?;
    Ok(clone)
}
