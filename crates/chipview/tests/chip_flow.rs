//! Integration tests for the adapter, container and flow layout together.

use std::sync::Arc;

use chipview::prelude::*;
use chipview::widget::headless::HeadlessTemplate;
use parking_lot::Mutex;

type View = ChipView<TextChip, HeadlessFactory>;

/// A view whose chips all measure 100x30 with no spacing.
fn fixed_view(padding: f32) -> View {
    let factory = HeadlessFactory::new().with_template(
        "fixed",
        HeadlessTemplate::default().with_size(Size::new(100.0, 30.0)),
    );
    let view = View::new(factory);

    let adapter = view.adapter();
    adapter.set_chip_template(Some(TemplateId::new("fixed")));
    adapter.set_chip_spacing(0.0);
    adapter.set_line_spacing(0.0);

    view.set_padding(Margins::uniform(padding));
    view
}

fn tags(labels: &[&str]) -> Vec<TextChip> {
    labels.iter().copied().map(TextChip::new).collect()
}

fn geometry(view: &View, index: usize) -> Option<Rect> {
    view.with_child(index, |child| child.geometry()).flatten()
}

#[test]
fn test_four_chips_in_300_wide_container() {
    let view = fixed_view(10.0);
    view.set_chip_list(tags(&["a", "b", "c", "d"]));

    let size = view.measure(MeasureSpec::Exactly(300.0));
    view.layout();

    assert_eq!(view.line_heights(), vec![30.0, 30.0]);
    assert_eq!(size, Size::new(300.0, 80.0));
    assert_eq!(geometry(&view, 0), Some(Rect::new(10.0, 10.0, 100.0, 30.0)));
    assert_eq!(geometry(&view, 1), Some(Rect::new(110.0, 10.0, 100.0, 30.0)));
    assert_eq!(geometry(&view, 2), Some(Rect::new(10.0, 40.0, 100.0, 30.0)));
    assert_eq!(geometry(&view, 3), Some(Rect::new(110.0, 40.0, 100.0, 30.0)));
}

#[test]
fn test_empty_content_is_padding_only() {
    let view = fixed_view(7.0);

    let size = view.measure(MeasureSpec::Exactly(200.0));
    view.layout();

    assert!(view.line_heights().is_empty());
    assert_eq!(size.height, 14.0);
}

#[test]
fn test_oversized_chip_widens_container() {
    let factory = HeadlessFactory::new().with_template(
        "wide",
        HeadlessTemplate::default().with_size(Size::new(500.0, 40.0)),
    );
    let view = View::new(factory);
    view.set_chip_template(Some(TemplateId::new("wide")));
    view.adapter().set_chip_spacing(0.0);
    view.adapter().set_line_spacing(0.0);
    view.add(TextChip::new("huge"));

    let size = view.measure(MeasureSpec::Exactly(200.0));
    view.layout();

    assert_eq!(size.width, 500.0);
    assert_eq!(view.line_heights(), vec![40.0]);
    assert_eq!(geometry(&view, 0), Some(Rect::new(0.0, 0.0, 500.0, 40.0)));
}

#[test]
fn test_wrap_boundary() {
    // width = 2 * padding + k * 100 fits exactly k chips per line
    for k in 1..=4 {
        let view = fixed_view(5.0);
        view.set_chip_list(tags(&["a", "b", "c", "d", "e", "f", "g", "h"]));

        let width = 10.0 + k as f32 * 100.0;
        view.measure(MeasureSpec::Exactly(width));
        view.layout();

        assert_eq!(view.line_heights().len(), 8usize.div_ceil(k), "k = {k}");
        assert_eq!(geometry(&view, k - 1).map(|r| r.top()), Some(5.0));
        assert_eq!(geometry(&view, k).map(|r| r.top()), Some(35.0));

        // one pixel narrower pushes the k-th chip to the next line
        view.measure(MeasureSpec::Exactly(width - 1.0));
        view.layout();
        if k > 1 {
            assert_eq!(geometry(&view, k - 1).map(|r| r.top()), Some(35.0), "k = {k}");
        }
    }
}

#[test]
fn test_unspecified_width_keeps_one_line() {
    let view = fixed_view(10.0);
    view.set_chip_list(tags(&["a", "b", "c", "d", "e"]));

    let size = view.measure(MeasureSpec::Unspecified);
    view.layout();

    assert_eq!(size, Size::new(520.0, 50.0));
    assert_eq!(view.line_heights(), vec![30.0]);
}

#[test]
fn test_duplicates_and_removal_notifications() {
    let view = View::new(HeadlessFactory::new());
    let adapter = view.adapter();

    let notifications = Arc::new(Mutex::new(0));
    let counter = notifications.clone();
    adapter.subscribe(move || *counter.lock() += 1);

    assert!(adapter.add(TextChip::new("rust")));
    assert!(!adapter.add(TextChip::new("rust")));
    assert_eq!(*notifications.lock(), 1);
    assert_eq!(view.child_count(), 1);

    adapter.set_tolerating_duplicates(true);
    assert!(adapter.add(TextChip::new("rust")));
    assert_eq!(view.child_count(), 2);

    assert_eq!(adapter.remove(&TextChip::new("go")), 0);
    assert_eq!(*notifications.lock(), 3);
    assert_eq!(view.child_count(), 2);

    assert_eq!(adapter.remove(&TextChip::new("rust")), 2);
    assert_eq!(view.child_count(), 0);
}

#[test]
fn test_content_round_trip() {
    let view = View::new(HeadlessFactory::new());
    let list = tags(&["alpha", "beta", "gamma", "beta"]);

    view.adapter().set_content(list.clone());
    assert_eq!(view.chip_list(), list);
    assert_eq!(view.count(), 4);

    view.adapter().clear();
    assert!(view.chip_list().is_empty());
    assert_eq!(view.child_count(), 0);
}

#[test]
fn test_two_views_share_an_adapter() {
    let adapter = Arc::new(ChipAdapter::new());
    let first = View::with_adapter(HeadlessFactory::new(), Arc::clone(&adapter));
    let second = View::with_adapter(HeadlessFactory::new(), Arc::clone(&adapter));

    adapter.set_content(tags(&["a", "b", "c"]));
    assert_eq!(first.child_count(), 3);
    assert_eq!(second.child_count(), 3);

    drop(first);
    assert_eq!(adapter.subscriber_count(), 1);

    adapter.add(TextChip::new("d"));
    assert_eq!(second.child_count(), 4);
}

#[test]
fn test_click_resolves_chip_at_layout_time() {
    let view = fixed_view(0.0);
    let clicked = Arc::new(Mutex::new(Vec::new()));
    let sink = clicked.clone();
    view.set_on_chip_click(move |chip: &TextChip| sink.lock().push(chip.label().to_owned()));

    view.set_chip_list(tags(&["first", "second", "third"]));
    view.measure(MeasureSpec::Exactly(400.0));
    view.layout();

    assert!(view.click(2));
    assert!(view.click(0));
    assert_eq!(*clicked.lock(), vec!["third", "first"]);
}

#[test]
fn test_configure_from_toml() {
    let config = ChipViewConfig::from_toml_str(
        r#"
        tolerating_duplicates = true

        [style]
        chip_spacing = 0.0
        line_spacing = 0.0
        chip_template = "fixed"

        [padding]
        left = 10.0
        top = 10.0
        right = 10.0
        bottom = 10.0
        "#,
    )
    .unwrap();

    let factory = HeadlessFactory::new().with_template(
        "fixed",
        HeadlessTemplate::default().with_size(Size::new(100.0, 30.0)),
    );
    let view = View::new(factory);
    view.configure(&config);
    view.set_chip_list(tags(&["a", "a", "b", "c"]));

    let size = view.measure(MeasureSpec::Exactly(300.0));
    assert!(view.is_tolerating_duplicates());
    assert_eq!(view.padding(), Margins::uniform(10.0));
    assert_eq!(size, Size::new(300.0, 80.0));
}
