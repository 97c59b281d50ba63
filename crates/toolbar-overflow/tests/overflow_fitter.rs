//! End-to-end tests: options in, window events in, visible subset out.

use std::sync::Arc;

use parking_lot::Mutex;
use toolbar_overflow::{
    CaptureState, Diagnostic, FitterConfig, OptionSet, OverflowFitter, Rect, SurfaceSnapshot,
    ToolOption, Viewport,
};
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;

fn setup() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("toolbar_overflow=trace")
        .try_init();
}

/// A mounted toolbar with headless surfaces.
struct Harness {
    fitter: Arc<OverflowFitter>,
    wrapper: Arc<SurfaceSnapshot>,
    items: Arc<SurfaceSnapshot>,
    viewport: Arc<Viewport>,
}

impl Harness {
    fn new(config: FitterConfig, options: OptionSet) -> Self {
        setup();
        let fitter = Arc::new(OverflowFitter::new(config));
        let wrapper = Arc::new(SurfaceSnapshot::new());
        let items = Arc::new(SurfaceSnapshot::new());
        let viewport = Arc::new(Viewport::new(1024.0));

        fitter.set_wrapper(Some(wrapper.clone()));
        fitter.set_items_surface(Some(items.clone()));
        fitter.on_inputs_changed(options, None);
        fitter.mount(&viewport);

        Self {
            fitter,
            wrapper,
            items,
            viewport,
        }
    }

    /// Render items so that, with a 10px gap, offsets are
    /// `[50, 120, 200, 300, 420]`.
    fn render_scenario_items(&self) {
        // Item i spans [x_i, x_i + w_i); the first starts at 16px.
        let rects = Rect::row(16.0, 4.0, 24.0, 0.0, &[40.0, 70.0, 80.0, 100.0, 120.0]);
        self.items.set_item_bounds(rects);
        self.fitter.after_render();
    }

    fn resize_wrapper(&self, width: f32) {
        self.wrapper.set_bounds(Rect::new(0.0, 0.0, width, 32.0));
        self.viewport.resize(width + 200.0);
    }

    fn visible_ids(&self) -> Vec<String> {
        self.fitter
            .visible_options()
            .into_iter()
            .map(|o| o.id)
            .collect()
    }
}

fn plain_options(epoch: u64) -> OptionSet {
    OptionSet::new(
        epoch,
        ["open", "save", "print", "share", "export"]
            .iter()
            .map(|id| ToolOption::new(*id, id.to_uppercase()))
            .collect(),
    )
}

fn options_with_child_at(epoch: u64, index: usize) -> OptionSet {
    let mut set = plain_options(epoch);
    set.options[index] = set.options[index]
        .clone()
        .with_children(vec![ToolOption::new("pdf", "PDF"), ToolOption::new("png", "PNG")]);
    set
}

#[test]
fn test_scenario_offsets_captured_relative_to_first_item() {
    let harness = Harness::new(FitterConfig::new(8, 10.0), plain_options(1));
    harness.render_scenario_items();

    assert_eq!(harness.fitter.state(), CaptureState::Captured);
    assert_eq!(harness.fitter.offsets(), vec![50.0, 120.0, 200.0, 300.0, 420.0]);
}

#[test]
fn test_resize_publishes_fitting_prefix() {
    let harness = Harness::new(FitterConfig::new(8, 10.0), plain_options(1));
    harness.render_scenario_items();

    harness.resize_wrapper(250.0);
    assert_eq!(harness.visible_ids(), vec!["open", "save"]);

    harness.resize_wrapper(1000.0);
    assert_eq!(harness.visible_ids().len(), 5);

    harness.resize_wrapper(30.0);
    assert!(harness.visible_ids().is_empty());
}

#[test]
fn test_resize_respects_max_visible() {
    let harness = Harness::new(FitterConfig::new(3, 10.0), plain_options(1));
    harness.render_scenario_items();

    harness.resize_wrapper(1000.0);
    assert_eq!(harness.visible_ids(), vec!["open", "save", "print"]);
    assert_eq!(harness.fitter.overflow_options().len(), 2);
}

#[test]
fn test_child_overflow_leaves_subset_stale() {
    let harness = Harness::new(FitterConfig::new(8, 10.0), options_with_child_at(1, 2));
    harness.render_scenario_items();

    harness.resize_wrapper(1000.0);
    let before = harness.visible_ids();
    assert_eq!(before.len(), 5);

    // 200 >= 205 - 10
    harness.resize_wrapper(205.0);
    assert_eq!(harness.visible_ids(), before);

    // The child-bearing item fits again.
    harness.resize_wrapper(215.0);
    assert_eq!(harness.visible_ids(), vec!["open", "save", "print"]);
}

#[test]
fn test_every_resize_event_recomputes() {
    let harness = Harness::new(FitterConfig::new(8, 10.0), plain_options(1));
    harness.render_scenario_items();

    let passes = Arc::new(Mutex::new(0usize));
    let passes_clone = passes.clone();
    harness.viewport.resized.connect(move |_| *passes_clone.lock() += 1);

    let changes = Arc::new(Mutex::new(Vec::new()));
    let changes_clone = changes.clone();
    harness
        .fitter
        .visible_changed
        .connect(move |subset| changes_clone.lock().push(subset.len()));

    for _ in 0..3 {
        harness.resize_wrapper(250.0);
    }

    assert_eq!(*passes.lock(), 3);
    assert_eq!(*changes.lock(), vec![2]);
}

#[test]
fn test_window_event_falls_back_to_viewport_width() {
    let harness = Harness::new(FitterConfig::new(8, 10.0), plain_options(1));
    harness.render_scenario_items();

    // No wrapper measurement yet: the window width is used.
    assert!(
        harness
            .viewport
            .handle_window_event(&WindowEvent::Resized(PhysicalSize::new(320, 600)))
    );
    assert_eq!(harness.visible_ids(), vec!["open", "save", "print", "share"]);
}

#[test]
fn test_new_epoch_recaptures_geometry() {
    let harness = Harness::new(FitterConfig::new(8, 10.0), plain_options(1));
    harness.render_scenario_items();

    harness.fitter.on_inputs_changed(plain_options(2), None);
    assert_eq!(harness.fitter.state(), CaptureState::Uncaptured);

    harness
        .items
        .set_item_bounds(Rect::row(0.0, 0.0, 24.0, 0.0, &[100.0, 100.0, 100.0, 100.0, 100.0]));
    assert!(harness.fitter.after_render());
    assert_eq!(harness.fitter.offsets(), vec![110.0, 210.0, 310.0, 410.0, 510.0]);

    harness.resize_wrapper(250.0);
    assert_eq!(harness.visible_ids().len(), 2);
}

#[test]
fn test_inputs_changed_with_width_runs_fit() {
    let harness = Harness::new(FitterConfig::new(8, 10.0), plain_options(1));
    harness.render_scenario_items();

    let report = harness.fitter.on_inputs_changed(plain_options(1), Some(320.0));
    assert!(report.is_clean());
    assert_eq!(harness.visible_ids().len(), 4);
}

#[test]
fn test_missing_options_is_diagnosed_not_fatal() {
    let harness = Harness::new(FitterConfig::default(), OptionSet::default());
    assert!(harness.fitter.validate().contains(&Diagnostic::MissingOptions));

    harness.render_scenario_items();
    harness.resize_wrapper(1000.0);
    assert!(harness.visible_ids().is_empty());
}

#[test]
fn test_teardown_stops_refitting() {
    let harness = Harness::new(FitterConfig::new(8, 10.0), plain_options(1));
    harness.render_scenario_items();
    harness.resize_wrapper(250.0);

    harness.fitter.teardown();
    harness.resize_wrapper(1000.0);

    assert_eq!(harness.visible_ids().len(), 2);
    assert!(!harness.fitter.is_listening());
}

#[test]
fn test_options_from_toml() {
    let set = OptionSet::from_toml_str(
        r#"
        epoch = 7

        [[option]]
        id = "open"
        label = "Open"
        icon = "document-open"

        [[option]]
        id = "recent"
        label = "Recent"
        children = []
        "#,
    )
    .unwrap();

    let harness = Harness::new(FitterConfig::default(), set);
    assert_eq!(harness.fitter.epoch(), 7);
    assert!(harness.fitter.options().options[1].has_children());
}
