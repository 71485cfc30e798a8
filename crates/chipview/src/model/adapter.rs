//! The chip adapter: content, style and change notification.
//!
//! `ChipAdapter` owns the ordered list of chips shown by a
//! [`ChipView`](crate::widget::ChipView), the style used to build their
//! elements, and the signal that tells subscribed views to rebuild.
//!
//! Every content mutation emits exactly one notification, synchronously,
//! after the content lock has been released. Style changes never notify.

use std::sync::atomic::{AtomicBool, Ordering};

use chipview_core::logging::targets;
use chipview_core::{ConnectionId, Signal};
use parking_lot::RwLock;

use super::chip::Chip;
use super::delegate::{ChipDelegate, DefaultChipDelegate};
use super::style::{ChipStyle, TemplateId};
use crate::geometry::Color;
use crate::widget::layout::Margins;
use crate::widget::{ChipElement, ElementFactory};

/// Owns a list of chips and turns positions into elements.
///
/// # Example
///
/// ```
/// use chipview::model::{ChipAdapter, TextChip};
/// use chipview::widget::headless::HeadlessElement;
///
/// let adapter = ChipAdapter::<TextChip, HeadlessElement>::new();
/// adapter.subscribe(|| println!("chips changed"));
///
/// adapter.add(TextChip::new("rust"));
/// adapter.add(TextChip::new("rust")); // duplicate, ignored
/// assert_eq!(adapter.count(), 1);
/// ```
pub struct ChipAdapter<C: Chip, E: ChipElement> {
    content: RwLock<Vec<C>>,
    style: RwLock<ChipStyle>,
    tolerating_duplicates: AtomicBool,
    delegate: Box<dyn ChipDelegate<C, E>>,
    content_changed: Signal<()>,
}

impl<C: Chip, E: ChipElement> ChipAdapter<C, E> {
    /// Create an empty adapter that shows chip labels.
    pub fn new() -> Self {
        Self::with_delegate(DefaultChipDelegate)
    }

    /// Create an empty adapter with custom element hooks.
    pub fn with_delegate<D>(delegate: D) -> Self
    where
        D: ChipDelegate<C, E> + 'static,
    {
        Self {
            content: RwLock::new(Vec::new()),
            style: RwLock::new(ChipStyle::default()),
            tolerating_duplicates: AtomicBool::new(false),
            delegate: Box::new(delegate),
            content_changed: Signal::new(),
        }
    }

    /// Set the initial style (builder pattern).
    pub fn with_style(self, style: ChipStyle) -> Self {
        *self.style.write() = style;
        self
    }
}

impl<C: Chip, E: ChipElement> Default for ChipAdapter<C, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Chip, E: ChipElement> ChipAdapter<C, E> {
    // =========================================================================
    // Content
    // =========================================================================

    /// Number of chips.
    pub fn count(&self) -> usize {
        self.content.read().len()
    }

    /// Returns `true` if there are no chips.
    pub fn is_empty(&self) -> bool {
        self.content.read().is_empty()
    }

    /// The chip at `position`, or `None` when out of range.
    pub fn chip_at(&self, position: usize) -> Option<C> {
        self.content.read().get(position).cloned()
    }

    /// A snapshot of all chips, in order.
    pub fn chip_list(&self) -> Vec<C> {
        self.content.read().clone()
    }

    /// Whether a chip with the same identity is present.
    pub fn contains(&self, chip: &C) -> bool {
        self.content.read().iter().any(|c| c.same_identity(chip))
    }

    /// Append a chip.
    ///
    /// Does nothing when a chip with the same identity is already present
    /// and duplicates are not tolerated. Returns whether the chip was
    /// appended; only an append notifies.
    pub fn add(&self, chip: C) -> bool {
        let tolerate = self.is_tolerating_duplicates();
        let appended = {
            let mut content = self.content.write();
            if !tolerate && content.iter().any(|c| c.same_identity(&chip)) {
                false
            } else {
                content.push(chip);
                true
            }
        };

        if appended {
            self.notify_changed();
        } else {
            tracing::trace!(target: targets::ADAPTER, "duplicate chip ignored");
        }
        appended
    }

    /// Remove every chip with the same identity as `chip`.
    ///
    /// Always notifies, even when nothing matched. Returns the number of
    /// chips removed.
    pub fn remove(&self, chip: &C) -> usize {
        let removed = {
            let mut content = self.content.write();
            let before = content.len();
            content.retain(|c| !c.same_identity(chip));
            before - content.len()
        };

        tracing::trace!(target: targets::ADAPTER, removed, "chip removed");
        self.notify_changed();
        removed
    }

    /// Replace all chips.
    pub fn set_chip_list(&self, chips: Vec<C>) {
        *self.content.write() = chips;
        self.notify_changed();
    }

    /// Replace all chips from any iterable.
    pub fn set_content<I>(&self, chips: I)
    where
        I: IntoIterator<Item = C>,
    {
        self.set_chip_list(chips.into_iter().collect());
    }

    /// Remove all chips.
    pub fn clear(&self) {
        self.content.write().clear();
        self.notify_changed();
    }

    // =========================================================================
    // Notification
    // =========================================================================

    /// Tell every subscriber that the content changed.
    ///
    /// Content mutations call this themselves. Call it directly after
    /// changing chip data in place.
    pub fn notify_changed(&self) {
        tracing::debug!(
            target: targets::ADAPTER,
            subscribers = self.content_changed.connection_count(),
            "content changed"
        );
        self.content_changed.emit(());
    }

    /// Subscribe to content changes.
    pub fn subscribe<F>(&self, listener: F) -> ConnectionId
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.content_changed.connect(move |_| listener())
    }

    /// Remove a subscription. Returns `false` if it was not active.
    pub fn unsubscribe(&self, id: ConnectionId) -> bool {
        self.content_changed.disconnect(id)
    }

    /// Number of active subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.content_changed.connection_count()
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Build the element for the chip at `position`.
    ///
    /// Returns `None` for an out-of-range position without touching the
    /// factory or the delegate.
    pub fn render_item<F>(&self, factory: &F, position: usize) -> Option<E>
    where
        F: ElementFactory<Element = E> + ?Sized,
    {
        let chip = self.chip_at(position)?;
        let style = self.style();

        let template = self
            .delegate
            .layout_template(position)
            .or_else(|| style.chip_template.clone());

        let mut element = match template {
            None => {
                let mut element = factory.create_default(&style.default_visual());
                element.set_margins(style.default_margins());
                element
            }
            Some(template) => {
                let mut element = factory.inflate(&template, &style);
                let defined = element.margins();
                element.set_margins(Margins::new(
                    defined.left,
                    defined.top,
                    if defined.right > 0.0 {
                        defined.right
                    } else {
                        style.chip_spacing
                    },
                    if defined.bottom > 0.0 {
                        defined.bottom
                    } else {
                        style.line_spacing
                    },
                ));
                element
            }
        };

        self.delegate.new_element(&mut element);
        self.delegate.bind_element(&mut element, &chip, position);
        Some(element)
    }

    // =========================================================================
    // Style
    // =========================================================================

    /// A copy of the current style.
    pub fn style(&self) -> ChipStyle {
        self.style.read().clone()
    }

    /// Replace the whole style. Does not notify.
    pub fn set_style(&self, style: ChipStyle) {
        *self.style.write() = style;
    }

    /// Whether chips with equal identity may coexist.
    pub fn is_tolerating_duplicates(&self) -> bool {
        self.tolerating_duplicates.load(Ordering::SeqCst)
    }

    /// Allow or forbid chips with equal identity.
    pub fn set_tolerating_duplicates(&self, tolerate: bool) {
        self.tolerating_duplicates.store(tolerate, Ordering::SeqCst);
    }

    /// Horizontal gap after each chip.
    pub fn chip_spacing(&self) -> f32 {
        self.style.read().chip_spacing
    }

    /// Set the horizontal gap after each chip.
    pub fn set_chip_spacing(&self, spacing: f32) {
        self.style.write().chip_spacing = spacing;
    }

    /// Vertical gap below each chip.
    pub fn line_spacing(&self) -> f32 {
        self.style.read().line_spacing
    }

    /// Set the vertical gap below each chip.
    pub fn set_line_spacing(&self, spacing: f32) {
        self.style.write().line_spacing = spacing;
    }

    /// Padding above and below the label.
    pub fn chip_padding(&self) -> f32 {
        self.style.read().chip_padding
    }

    /// Set the padding above and below the label.
    pub fn set_chip_padding(&self, padding: f32) {
        self.style.write().chip_padding = padding;
    }

    /// Padding left and right of the label.
    pub fn chip_side_padding(&self) -> f32 {
        self.style.read().chip_side_padding
    }

    /// Set the padding left and right of the label.
    pub fn set_chip_side_padding(&self, padding: f32) {
        self.style.write().chip_side_padding = padding;
    }

    /// Background corner radius.
    pub fn chip_corner_radius(&self) -> f32 {
        self.style.read().chip_corner_radius
    }

    /// Set the background corner radius.
    pub fn set_chip_corner_radius(&self, radius: f32) {
        self.style.write().chip_corner_radius = radius;
    }

    /// Label text size.
    pub fn chip_text_size(&self) -> f32 {
        self.style.read().chip_text_size
    }

    /// Set the label text size.
    pub fn set_chip_text_size(&self, size: f32) {
        self.style.write().chip_text_size = size;
    }

    /// Chip background color.
    pub fn chip_background(&self) -> Color {
        self.style.read().chip_background
    }

    /// Set the chip background color.
    pub fn set_chip_background(&self, color: Color) {
        self.style.write().chip_background = color;
    }

    /// Chip background color while selected.
    pub fn chip_background_selected(&self) -> Color {
        self.style.read().chip_background_selected
    }

    /// Set the chip background color while selected.
    pub fn set_chip_background_selected(&self, color: Color) {
        self.style.write().chip_background_selected = color;
    }

    /// Layout template used for every chip.
    pub fn chip_template(&self) -> Option<TemplateId> {
        self.style.read().chip_template.clone()
    }

    /// Set the layout template used for every chip.
    pub fn set_chip_template(&self, template: Option<TemplateId>) {
        self.style.write().chip_template = template;
    }
}

static_assertions::assert_impl_all!(
    ChipAdapter<super::TextChip, crate::widget::headless::HeadlessElement>: Send, Sync
);
