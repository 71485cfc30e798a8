//! The chip container.
//!
//! `ChipView` observes a [`ChipAdapter`], keeps one element per chip and
//! answers the host's measure and layout callbacks with a [`FlowLayout`].
//!
//! # Lifecycle
//!
//! ```text
//! adapter mutation ─► notification ─► rebuild (drop all, render each chip)
//!                                          │
//! host: measure(spec) ◄────────────────────┘
//!   └─► host: layout() ─► rectangles applied, clicks bound
//! ```
//!
//! Rebuilds run synchronously inside the adapter's notification and end by
//! emitting [`layout_requested`](ChipView::layout_requested), which is the
//! host's cue to call `measure` and `layout` again. Every method takes
//! `&self`; the view's state sits behind a mutex that is never held while
//! adapter mutations, signal slots or the click listener run.
//!
//! # Example
//!
//! ```
//! use chipview::prelude::*;
//!
//! let view: ChipView<TextChip, HeadlessFactory> = ChipView::new(HeadlessFactory::new());
//! view.set_padding(Margins::uniform(8.0));
//! view.set_on_chip_click(|chip: &TextChip| println!("clicked {chip}"));
//!
//! view.add(TextChip::new("rust"));
//! view.add(TextChip::new("layout"));
//!
//! let size = view.measure(MeasureSpec::Exactly(320.0));
//! view.layout();
//!
//! assert_eq!(view.child_count(), 2);
//! assert_eq!(view.line_heights().len(), 1);
//! assert!(size.height > 0.0);
//! assert!(view.click(1));
//! ```

use std::fmt;
use std::sync::Arc;

use chipview_core::logging::{span_names, targets};
use chipview_core::{ConnectionId, PerfSpan, Signal};
use parking_lot::Mutex;

use super::element::{ChipElement, ElementFactory};
use super::layout::{FlowLayout, Margins, MeasureSpec, MeasuredChild};
use crate::config::ChipViewConfig;
use crate::geometry::{Point, Rect, Size};
use crate::model::{Chip, ChipAdapter, ChipStyle, TemplateId};

type ClickListener<C> = Arc<dyn Fn(&C) + Send + Sync>;

/// Mutable state of a chip view.
struct ViewState<C: Chip, E: ChipElement> {
    adapter: Arc<ChipAdapter<C, E>>,
    subscription: ConnectionId,
    /// One element per chip, in adapter order.
    children: Vec<E>,
    /// Rectangle and chip bound to each placed child by the last layout.
    click_bindings: Vec<Option<(Rect, C)>>,
    layout: FlowLayout,
    last_spec: Option<MeasureSpec>,
    on_chip_click: Option<ClickListener<C>>,
    rebuild_count: usize,
}

impl<C: Chip, E: ChipElement> ViewState<C, E> {
    fn measured_children(&self) -> Vec<MeasuredChild> {
        self.children
            .iter()
            .map(|child| MeasuredChild {
                size: child.measured_size(),
                margins: child.margins(),
                visible: child.is_visible(),
            })
            .collect()
    }

    fn measure(&mut self, spec: MeasureSpec) -> Size {
        let child_spec = spec.shrink(self.layout.padding().horizontal());
        for child in &mut self.children {
            child.measure(child_spec);
        }

        let measured = self.measured_children();
        self.last_spec = Some(spec);
        self.layout.measure(&measured, spec)
    }
}

/// A container that lays out chips in wrapping lines.
///
/// Generic over the chip type `C` and the host's [`ElementFactory`].
pub struct ChipView<C: Chip, F: ElementFactory + 'static> {
    factory: Arc<F>,
    state: Arc<Mutex<ViewState<C, F::Element>>>,
    layout_requested: Arc<Signal<()>>,
}

impl<C: Chip, F: ElementFactory + 'static> ChipView<C, F> {
    /// Create a view over a new, empty adapter.
    pub fn new(factory: F) -> Self {
        Self::with_adapter(factory, Arc::new(ChipAdapter::new()))
    }

    /// Create a view over an existing adapter.
    ///
    /// The view subscribes immediately and builds its children.
    pub fn with_adapter(factory: F, adapter: Arc<ChipAdapter<C, F::Element>>) -> Self {
        let factory = Arc::new(factory);
        let state = Arc::new(Mutex::new(ViewState {
            adapter: Arc::clone(&adapter),
            subscription: ConnectionId::default(),
            children: Vec::new(),
            click_bindings: Vec::new(),
            layout: FlowLayout::new(),
            last_spec: None,
            on_chip_click: None,
            rebuild_count: 0,
        }));

        let layout_requested = Arc::new(Signal::new());

        let subscription = subscribe(&adapter, &state, &factory, &layout_requested);
        state.lock().subscription = subscription;

        let view = Self {
            factory,
            state,
            layout_requested,
        };
        view.refresh();
        view
    }

    // =========================================================================
    // Adapter
    // =========================================================================

    /// The observed adapter.
    pub fn adapter(&self) -> Arc<ChipAdapter<C, F::Element>> {
        Arc::clone(&self.state.lock().adapter)
    }

    /// Observe a different adapter.
    ///
    /// Unsubscribes from the previous adapter, subscribes to `adapter` and
    /// rebuilds the children right away.
    pub fn set_adapter(&self, adapter: Arc<ChipAdapter<C, F::Element>>) {
        let (previous, subscription) = {
            let mut state = self.state.lock();
            let previous = std::mem::replace(&mut state.adapter, Arc::clone(&adapter));
            (previous, state.subscription)
        };
        previous.unsubscribe(subscription);

        let subscription = subscribe(&adapter, &self.state, &self.factory, &self.layout_requested);
        self.state.lock().subscription = subscription;

        tracing::debug!(target: targets::VIEW, chips = adapter.count(), "adapter replaced");
        self.refresh();
    }

    /// Drop every child and render one element per chip again.
    ///
    /// Runs automatically on every adapter notification.
    pub fn refresh(&self) {
        rebuild::<C, F>(&self.state, &self.factory, &self.layout_requested);
    }

    /// Emitted after the children or the padding changed.
    ///
    /// The host should measure and lay out the view again. Slots run
    /// without the view lock, so they may call back into the view.
    pub fn layout_requested(&self) -> &Signal<()> {
        &self.layout_requested
    }

    /// Apply a configuration to the adapter and the container, then rebuild.
    pub fn configure(&self, config: &ChipViewConfig) {
        let adapter = self.adapter();
        config.apply(&*adapter);
        self.set_padding(config.padding);
        self.refresh();
    }

    // =========================================================================
    // Host callbacks
    // =========================================================================

    /// Measure the children and the container.
    ///
    /// Each child is offered the container width minus the horizontal
    /// padding, as an upper bound.
    pub fn measure(&self, spec: MeasureSpec) -> Size {
        self.state.lock().measure(spec)
    }

    /// Position every child and bind click routing.
    ///
    /// Measures first, with the last spec offered, if the children changed
    /// since the last [`measure`](Self::measure).
    pub fn layout(&self) {
        let mut state = self.state.lock();

        if !state.layout.is_measured_for(state.children.len()) {
            let spec = state.last_spec.unwrap_or(MeasureSpec::Unspecified);
            tracing::warn!(
                target: targets::VIEW,
                children = state.children.len(),
                ?spec,
                "layout without a current measurement, measuring first"
            );
            state.measure(spec);
        }

        let measured = state.measured_children();
        let arrangement = state.layout.arrange(&measured);

        let state = &mut *state;
        for (child, placement) in state.children.iter_mut().zip(arrangement.placements()) {
            if let Some(placement) = placement {
                child.set_geometry(placement.rect);
            }
        }

        // Hidden children have no placement and stay unbound.
        state.click_bindings = arrangement
            .placements()
            .iter()
            .enumerate()
            .map(|(index, placement)| {
                let rect = placement.as_ref()?.rect;
                state.adapter.chip_at(index).map(|chip| (rect, chip))
            })
            .collect();

        tracing::debug!(
            target: targets::VIEW,
            children = state.children.len(),
            lines = arrangement.line_count(),
            "layout applied"
        );
    }

    // =========================================================================
    // Clicks
    // =========================================================================

    /// Set the listener called with the chip behind a clicked child.
    ///
    /// Existing children become interactive immediately.
    pub fn set_on_chip_click<L>(&self, listener: L)
    where
        L: Fn(&C) + Send + Sync + 'static,
    {
        let mut state = self.state.lock();
        state.on_chip_click = Some(Arc::new(listener));
        for child in &mut state.children {
            child.set_interactive(true);
        }
    }

    /// Remove the click listener.
    pub fn clear_on_chip_click(&self) {
        let mut state = self.state.lock();
        state.on_chip_click = None;
        for child in &mut state.children {
            child.set_interactive(false);
        }
    }

    /// Whether a click listener is set.
    pub fn has_chip_click_listener(&self) -> bool {
        self.state.lock().on_chip_click.is_some()
    }

    /// Route a click on the child at `index`.
    ///
    /// Returns `true` if the listener was called. Children that have not
    /// been laid out yet, and hidden children, are not bound and ignore
    /// clicks.
    pub fn click(&self, index: usize) -> bool {
        let (listener, chip) = {
            let state = self.state.lock();
            let Some(listener) = state.on_chip_click.clone() else {
                return false;
            };
            let Some((_, chip)) = state.click_bindings.get(index).cloned().flatten() else {
                tracing::debug!(target: targets::VIEW, index, "click on an unbound child");
                return false;
            };
            (listener, chip)
        };

        listener(&chip);
        true
    }

    /// Index of the bound child whose rectangle contains `point`.
    pub fn child_at(&self, point: Point) -> Option<usize> {
        self.state
            .lock()
            .click_bindings
            .iter()
            .position(|binding| binding.as_ref().is_some_and(|(rect, _)| rect.contains(point)))
    }

    /// Route a click at `point`, in container coordinates.
    ///
    /// Returns `true` if a bound child was hit and the listener was called.
    pub fn click_at(&self, point: Point) -> bool {
        self.child_at(point).is_some_and(|index| self.click(index))
    }

    // =========================================================================
    // Container properties
    // =========================================================================

    /// Container padding.
    pub fn padding(&self) -> Margins {
        self.state.lock().layout.padding()
    }

    /// Set the container padding.
    ///
    /// Emits [`layout_requested`](Self::layout_requested) if the padding
    /// changed.
    pub fn set_padding(&self, padding: Margins) {
        {
            let mut state = self.state.lock();
            if state.layout.padding() == padding {
                return;
            }
            state.layout.set_padding(padding);
        }
        self.layout_requested.emit(());
    }

    /// Number of child elements.
    pub fn child_count(&self) -> usize {
        self.state.lock().children.len()
    }

    /// Inspect the child at `index`.
    pub fn with_child<R>(&self, index: usize, f: impl FnOnce(&F::Element) -> R) -> Option<R> {
        self.state.lock().children.get(index).map(f)
    }

    /// Modify the child at `index`.
    ///
    /// Drops the current measurement, so the next [`layout`](Self::layout)
    /// measures again, and emits [`layout_requested`](Self::layout_requested).
    pub fn with_child_mut<R>(
        &self,
        index: usize,
        f: impl FnOnce(&mut F::Element) -> R,
    ) -> Option<R> {
        let result = {
            let mut state = self.state.lock();
            let result = state.children.get_mut(index).map(f);
            if result.is_some() {
                state.layout.invalidate();
            }
            result
        };
        if result.is_some() {
            self.layout_requested.emit(());
        }
        result
    }

    /// Line heights from the last measurement.
    pub fn line_heights(&self) -> Vec<f32> {
        self.state.lock().layout.line_heights().to_vec()
    }

    /// Container size from the last measurement.
    pub fn measured_size(&self) -> Size {
        self.state.lock().layout.measured_size()
    }

    /// Number of rebuilds since creation.
    pub fn rebuild_count(&self) -> usize {
        self.state.lock().rebuild_count
    }

    // =========================================================================
    // Adapter forwarding
    // =========================================================================

    /// Append a chip to the adapter. See [`ChipAdapter::add`].
    pub fn add(&self, chip: C) -> bool {
        self.adapter().add(chip)
    }

    /// Remove a chip from the adapter. See [`ChipAdapter::remove`].
    pub fn remove(&self, chip: &C) -> usize {
        self.adapter().remove(chip)
    }

    /// Number of chips in the adapter.
    pub fn count(&self) -> usize {
        self.adapter().count()
    }

    /// A snapshot of the adapter's chips.
    pub fn chip_list(&self) -> Vec<C> {
        self.adapter().chip_list()
    }

    /// Replace the adapter's chips.
    pub fn set_chip_list(&self, chips: Vec<C>) {
        self.adapter().set_chip_list(chips);
    }

    /// Whether the adapter keeps duplicate chips.
    pub fn is_tolerating_duplicates(&self) -> bool {
        self.adapter().is_tolerating_duplicates()
    }

    /// Allow or forbid duplicate chips in the adapter.
    pub fn set_tolerating_duplicates(&self, tolerate: bool) {
        self.adapter().set_tolerating_duplicates(tolerate);
    }

    /// The adapter's chip template.
    pub fn chip_template(&self) -> Option<TemplateId> {
        self.adapter().chip_template()
    }

    /// Set the adapter's chip template. Applies from the next rebuild.
    pub fn set_chip_template(&self, template: Option<TemplateId>) {
        self.adapter().set_chip_template(template);
    }

    /// A copy of the adapter's style.
    pub fn style(&self) -> ChipStyle {
        self.adapter().style()
    }
}

impl<C: Chip, F: ElementFactory + 'static> fmt::Debug for ChipView<C, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("ChipView")
            .field("children", &state.children.len())
            .field("padding", &state.layout.padding())
            .field("line_heights", &state.layout.line_heights())
            .field("has_click_listener", &state.on_chip_click.is_some())
            .finish()
    }
}

impl<C: Chip, F: ElementFactory + 'static> Drop for ChipView<C, F> {
    fn drop(&mut self) {
        let (adapter, subscription) = {
            let state = self.state.lock();
            (Arc::clone(&state.adapter), state.subscription)
        };
        adapter.unsubscribe(subscription);
    }
}

/// Subscribe `state` to `adapter`'s notifications.
///
/// The subscription holds the state weakly, so a dropped view is never
/// rebuilt.
fn subscribe<C, F>(
    adapter: &ChipAdapter<C, F::Element>,
    state: &Arc<Mutex<ViewState<C, F::Element>>>,
    factory: &Arc<F>,
    layout_requested: &Arc<Signal<()>>,
) -> ConnectionId
where
    C: Chip,
    F: ElementFactory + 'static,
{
    let state = Arc::downgrade(state);
    let factory = Arc::clone(factory);
    let layout_requested = Arc::clone(layout_requested);
    adapter.subscribe(move || {
        if let Some(state) = state.upgrade() {
            rebuild::<C, F>(&state, &factory, &layout_requested);
        }
    })
}

/// Drop all children, render one element per chip and request a layout.
fn rebuild<C, F>(
    state: &Mutex<ViewState<C, F::Element>>,
    factory: &F,
    layout_requested: &Signal<()>,
) where
    C: Chip,
    F: ElementFactory + 'static,
{
    let _span = PerfSpan::new(span_names::REBUILD);

    let (adapter, interactive) = {
        let state = state.lock();
        (Arc::clone(&state.adapter), state.on_chip_click.is_some())
    };

    // Rendering calls into the adapter and its delegate without the view lock.
    let children: Vec<_> = (0..adapter.count())
        .filter_map(|position| adapter.render_item(factory, position))
        .map(|mut element| {
            if interactive {
                element.set_interactive(true);
            }
            element
        })
        .collect();

    {
        let mut state = state.lock();
        state.children = children;
        state.click_bindings.clear();
        state.layout.invalidate();
        state.rebuild_count += 1;

        tracing::debug!(
            target: targets::VIEW,
            children = state.children.len(),
            rebuild = state.rebuild_count,
            "children rebuilt"
        );
    }

    layout_requested.emit(());
}

static_assertions::assert_impl_all!(
    ChipView<crate::model::TextChip, super::headless::HeadlessFactory>: Send, Sync
);
