//! A headless element backend.
//!
//! `HeadlessFactory` builds elements that never draw. Their size comes from
//! a fixed monospace text metric, which makes layouts reproducible in tests
//! and in tools that only need geometry.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use chipview_core::logging::targets;

use super::element::{ChipElement, ElementFactory};
use super::layout::{Margins, MeasureSpec};
use crate::geometry::{Rect, Size};
use crate::model::{ChipStyle, DefaultChipVisual, TemplateId};

/// Width of one label character, relative to the text size.
const CHAR_WIDTH: f32 = 0.5;
/// Height of a label line, relative to the text size.
const LINE_HEIGHT: f32 = 1.25;

/// An element that records what the view does to it.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadlessElement {
    label: String,
    text_size: f32,
    padding: Margins,
    fixed_size: Option<Size>,
    template: Option<TemplateId>,
    margins: Margins,
    measured: Size,
    visible: bool,
    interactive: bool,
    geometry: Option<Rect>,
}

impl HeadlessElement {
    /// An element measured from its label.
    pub fn new(text_size: f32, padding: Margins) -> Self {
        Self {
            label: String::new(),
            text_size,
            padding,
            fixed_size: None,
            template: None,
            margins: Margins::ZERO,
            measured: Size::ZERO,
            visible: true,
            interactive: false,
            geometry: None,
        }
    }

    /// An element that always measures to `size`.
    pub fn fixed(size: Size) -> Self {
        Self {
            fixed_size: Some(size),
            ..Self::new(0.0, Margins::ZERO)
        }
    }

    /// Set the margins (builder pattern).
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    /// Show or hide the element.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// The bound label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Template this element was inflated from.
    pub fn template(&self) -> Option<&TemplateId> {
        self.template.as_ref()
    }

    /// Rectangle assigned by the last layout, if any.
    pub fn geometry(&self) -> Option<Rect> {
        self.geometry
    }

    /// Whether the element was made clickable.
    pub fn is_interactive(&self) -> bool {
        self.interactive
    }
}

impl ChipElement for HeadlessElement {
    fn measure(&mut self, _spec: MeasureSpec) {
        // Chips report their natural size; the flow layout handles overflow.
        self.measured = match self.fixed_size {
            Some(size) => size,
            None => Size::new(
                self.label.chars().count() as f32 * self.text_size * CHAR_WIDTH
                    + self.padding.horizontal(),
                self.text_size * LINE_HEIGHT + self.padding.vertical(),
            ),
        };
    }

    fn measured_size(&self) -> Size {
        self.measured
    }

    fn margins(&self) -> Margins {
        self.margins
    }

    fn set_margins(&mut self, margins: Margins) {
        self.margins = margins;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn set_geometry(&mut self, rect: Rect) {
        self.geometry = Some(rect);
    }

    fn set_interactive(&mut self, interactive: bool) {
        self.interactive = interactive;
    }

    fn set_label(&mut self, label: &str) {
        self.label = label.to_owned();
    }
}

/// A registered headless template.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeadlessTemplate {
    /// Fixed size; `None` measures from the label and the style text size.
    pub size: Option<Size>,
    /// Margins defined by the template. Zero right or bottom margins are
    /// replaced by the adapter's spacing.
    pub margins: Margins,
    /// Padding around the label when measuring from text.
    pub padding: Margins,
}

impl HeadlessTemplate {
    /// Always measure to `size`.
    pub fn with_size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    /// Define margins.
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    /// Pad the label.
    pub fn with_padding(mut self, padding: Margins) -> Self {
        self.padding = padding;
        self
    }
}

/// Builds [`HeadlessElement`]s.
#[derive(Debug, Default)]
pub struct HeadlessFactory {
    templates: HashMap<TemplateId, HeadlessTemplate>,
    created: AtomicUsize,
}

impl HeadlessFactory {
    /// A factory with no templates.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a template under `id`, replacing any previous one.
    pub fn register_template(&mut self, id: impl Into<TemplateId>, template: HeadlessTemplate) {
        self.templates.insert(id.into(), template);
    }

    /// Register a template (builder pattern).
    pub fn with_template(mut self, id: impl Into<TemplateId>, template: HeadlessTemplate) -> Self {
        self.register_template(id, template);
        self
    }

    /// Number of elements created so far.
    pub fn created_count(&self) -> usize {
        self.created.load(Ordering::Relaxed)
    }
}

impl ElementFactory for HeadlessFactory {
    type Element = HeadlessElement;

    fn create_default(&self, visual: &DefaultChipVisual) -> HeadlessElement {
        self.created.fetch_add(1, Ordering::Relaxed);
        HeadlessElement::new(visual.text_size, visual.padding)
    }

    fn inflate(&self, template: &TemplateId, style: &ChipStyle) -> HeadlessElement {
        self.created.fetch_add(1, Ordering::Relaxed);

        let mut element = match self.templates.get(template) {
            Some(registered) => {
                let element = match registered.size {
                    Some(size) => HeadlessElement::fixed(size),
                    None => HeadlessElement::new(style.chip_text_size, registered.padding),
                };
                element.with_margins(registered.margins)
            }
            None => {
                tracing::warn!(
                    target: targets::VIEW,
                    template = %template,
                    "unknown template, using the default chip visual"
                );
                let visual = style.default_visual();
                HeadlessElement::new(visual.text_size, visual.padding)
            }
        };
        element.template = Some(template.clone());
        element
    }
}
