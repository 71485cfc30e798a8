//! Tag cloud example.
//!
//! Lays out a set of tags at a few container widths with the headless
//! backend and prints where every chip lands.
//!
//! Run with: cargo run -p chipview --example tag_cloud
//! Set `RUST_LOG=chipview=debug` to watch rebuilds and layout passes.

use chipview::prelude::*;
use tracing_subscriber::EnvFilter;

const TAGS: &[&str] = &[
    "rust", "layout", "flow", "chips", "widgets", "adapter", "observer", "gui", "tags",
    "wrap", "measure", "arrange",
];

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let view: ChipView<TextChip, HeadlessFactory> = ChipView::new(HeadlessFactory::new());
    view.set_padding(Margins::uniform(8.0));
    view.set_on_chip_click(|chip: &TextChip| tracing::info!(tag = chip.label(), "tag clicked"));
    view.set_chip_list(TAGS.iter().copied().map(TextChip::new).collect());

    for width in [160.0, 280.0, 480.0] {
        let size = view.measure(MeasureSpec::AtMost(width));
        view.layout();

        println!(
            "width {width}: {} lines, {:.0}x{:.0}",
            view.line_heights().len(),
            size.width,
            size.height
        );
        for (index, tag) in TAGS.iter().enumerate() {
            if let Some(rect) = view.with_child(index, |child| child.geometry()).flatten() {
                println!(
                    "  {tag:<10} x={:>6.1} y={:>6.1} w={:>5.1}",
                    rect.left(),
                    rect.top(),
                    rect.width()
                );
            }
        }
    }

    view.click(0);
}
