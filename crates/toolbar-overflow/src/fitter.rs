//! OverflowFitter implementation.
//!
//! This module provides [`OverflowFitter`], which decides how many leading
//! toolbar options fit in the available width and publishes that prefix as
//! the visible subset. The remainder is left for an overflow ("more") menu.
//!
//! # Lifecycle
//!
//! 1. The host supplies options with [`on_inputs_changed`](OverflowFitter::on_inputs_changed)
//!    and binds its surfaces.
//! 2. [`mount`](OverflowFitter::mount) validates the inputs and, when a
//!    wrapper surface is bound, starts listening to viewport resizes.
//! 3. After each render the host calls
//!    [`after_render`](OverflowFitter::after_render); the first render of an
//!    epoch captures item geometry.
//! 4. Each resize runs one fit pass and publishes the result.
//! 5. [`teardown`](OverflowFitter::teardown) removes the resize listener.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use toolbar_overflow::{
//!     FitterConfig, OptionSet, OverflowFitter, Rect, SurfaceSnapshot, ToolOption, Viewport,
//! };
//!
//! let fitter = Arc::new(OverflowFitter::new(FitterConfig::new(8, 10.0)));
//! let wrapper = Arc::new(SurfaceSnapshot::new());
//! let items = Arc::new(SurfaceSnapshot::new());
//! fitter.set_wrapper(Some(wrapper.clone()));
//! fitter.set_items_surface(Some(items.clone()));
//!
//! let options = ["Open", "Save", "Print", "Share"]
//!     .iter()
//!     .map(|label| ToolOption::new(label.to_lowercase(), *label))
//!     .collect();
//! fitter.on_inputs_changed(OptionSet::new(1, options), None);
//!
//! let viewport = Arc::new(Viewport::new(1024.0));
//! fitter.mount(&viewport);
//!
//! // The renderer laid out four 60px items.
//! items.set_item_bounds(Rect::row(0.0, 0.0, 32.0, 0.0, &[60.0; 4]));
//! fitter.after_render();
//!
//! // The window shrinks; the wrapper now has 150px.
//! wrapper.set_bounds(Rect::new(0.0, 0.0, 150.0, 32.0));
//! viewport.resize(150.0);
//!
//! assert_eq!(fitter.visible_options().len(), 2);
//! assert_eq!(fitter.overflow_options().len(), 2);
//! ```

use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use toolbar_overflow_core::logging::{span_names, targets};
use toolbar_overflow_core::{PerfSpan, Property, Signal};

use crate::cache::{self, CaptureState, OffsetCache};
use crate::config::FitterConfig;
use crate::fit;
use crate::geometry::Rect;
use crate::option::{OptionSet, ToolOption};
use crate::surface::{ItemsSurface, WidthSurface};
use crate::validate::{self, ValidationInput, ValidationReport};
use crate::viewport::{ResizeBinding, Viewport};

/// The options currently shown directly in the toolbar.
///
/// Always a prefix of the option sequence it was computed from.
pub type VisibleSubset = Vec<ToolOption>;

/// Mutable inputs and cached geometry, guarded by one lock.
struct FitterState {
    options: OptionSet,
    cache: OffsetCache,
    config: FitterConfig,
    wrapper: Option<Arc<dyn WidthSurface>>,
    items: Option<Arc<dyn ItemsSurface>>,
    viewport: Option<Weak<Viewport>>,
}

impl FitterState {
    fn validate(&mut self) -> ValidationReport {
        validate::validate(ValidationInput {
            cache: &mut self.cache,
            config: &self.config,
            options: &self.options,
            wrapper_bound: self.wrapper.is_some(),
            items_bound: self.items.is_some(),
        })
    }

    /// Wrapper width, else the viewport width, else zero.
    fn resolve_width(&self) -> f32 {
        self.wrapper
            .as_ref()
            .and_then(|wrapper| wrapper.width())
            .or_else(|| {
                self.viewport
                    .as_ref()
                    .and_then(Weak::upgrade)
                    .map(|viewport| viewport.width())
            })
            .unwrap_or(0.0)
    }
}

/// Fits a toolbar's options into the available width.
///
/// The fitter is shared as `Arc<OverflowFitter>`: the resize listener holds a
/// weak reference to it, so dropping the last `Arc` also ends listening.
///
/// # Signals
///
/// - [`visible_changed`](OverflowFitter::visible_changed): Emitted with the new
///   visible subset whenever a fit pass changes it
/// - [`offsets_captured`](OverflowFitter::offsets_captured): Emitted with the
///   number of offsets when geometry is captured for an epoch
pub struct OverflowFitter {
    /// Inputs and offset cache.
    state: Mutex<FitterState>,

    /// Last published visible subset.
    visible: Property<VisibleSubset>,

    /// Live resize listener, present while mounted with a wrapper.
    binding: Mutex<Option<ResizeBinding>>,

    // Signals
    /// Signal emitted when the visible subset changes.
    pub visible_changed: Signal<VisibleSubset>,
    /// Signal emitted when geometry is captured.
    pub offsets_captured: Signal<usize>,
}

impl OverflowFitter {
    /// Create a fitter with no options and no bound surfaces.
    pub fn new(config: FitterConfig) -> Self {
        Self {
            state: Mutex::new(FitterState {
                options: OptionSet::default(),
                cache: OffsetCache::new(),
                config,
                wrapper: None,
                items: None,
                viewport: None,
            }),
            visible: Property::new(Vec::new()),
            binding: Mutex::new(None),
            visible_changed: Signal::new(),
            offsets_captured: Signal::new(),
        }
    }

    // =========================================================================
    // Inputs
    // =========================================================================

    /// Get the configuration.
    pub fn config(&self) -> FitterConfig {
        self.state.lock().config
    }

    /// Replace the configuration and re-validate.
    pub fn set_config(&self, config: FitterConfig) -> ValidationReport {
        let mut state = self.state.lock();
        state.config = config;
        state.validate()
    }

    /// Bind or unbind the wrapper surface.
    ///
    /// The wrapper's width is the available width for fitting. Unbinding
    /// removes the resize listener; binding a wrapper starts listening at the
    /// next [`mount`](Self::mount).
    pub fn set_wrapper(&self, wrapper: Option<Arc<dyn WidthSurface>>) {
        let unbound = wrapper.is_none();
        self.state.lock().wrapper = wrapper;
        if unbound && self.binding.lock().take().is_some() {
            tracing::debug!(target: targets::RESIZE, "wrapper unbound; resize listener released");
        }
    }

    /// Bind or unbind the items surface used for geometry capture.
    pub fn set_items_surface(&self, items: Option<Arc<dyn ItemsSurface>>) {
        self.state.lock().items = items;
    }

    /// Get the current option set.
    pub fn options(&self) -> OptionSet {
        self.state.lock().options.clone()
    }

    /// Epoch of the current option set.
    pub fn epoch(&self) -> u64 {
        self.state.lock().options.epoch
    }

    /// Supply new inputs.
    ///
    /// A different epoch clears the offset cache so the next
    /// [`after_render`](Self::after_render) recaptures geometry. Inputs are
    /// validated, and when `width` is given a fit pass runs against it.
    pub fn on_inputs_changed(&self, options: OptionSet, width: Option<f32>) -> ValidationReport {
        let report = {
            let mut state = self.state.lock();
            if state.cache.ensure_epoch(options.epoch) {
                tracing::debug!(
                    target: targets::CAPTURE,
                    epoch = options.epoch,
                    "option set changed, offset cache invalidated"
                );
            }
            state.options = options;
            state.validate()
        };

        if let Some(width) = width {
            self.compute_visible(width);
        }
        report
    }

    /// Run the validation pass on the current inputs.
    pub fn validate(&self) -> ValidationReport {
        self.state.lock().validate()
    }

    // =========================================================================
    // Geometry capture
    // =========================================================================

    /// Whether geometry has been captured for the current epoch.
    pub fn state(&self) -> CaptureState {
        self.state.lock().cache.state()
    }

    /// The cached offsets.
    pub fn offsets(&self) -> Vec<f32> {
        self.state.lock().cache.read().to_vec()
    }

    /// Capture end-offsets from rendered item bounds.
    ///
    /// Offsets are only written while the cache is empty; later calls in the
    /// same epoch are no-ops. Returns the cache contents after the call.
    pub fn capture_offsets(&self, rendered: Option<&[Rect]>) -> Vec<f32> {
        let _span = PerfSpan::new(span_names::CAPTURE);
        let (captured, offsets) = {
            let mut state = self.state.lock();
            if state.cache.is_populated() {
                tracing::trace!(target: targets::CAPTURE, "offsets already captured");
                return state.cache.read().to_vec();
            }
            let measured = cache::measure_offsets(rendered, state.config.min_gap);
            let captured = state.cache.populate(measured);
            (captured, state.cache.read().to_vec())
        };

        if captured {
            tracing::debug!(target: targets::CAPTURE, count = offsets.len(), "offsets captured");
            self.offsets_captured.emit(offsets.len());
        } else {
            tracing::trace!(target: targets::CAPTURE, "no rendered items to measure");
        }
        offsets
    }

    /// Host hook to call after each render of the options or visible subset.
    ///
    /// Reads item bounds from the items surface and captures them if the
    /// cache is empty. Returns `true` if geometry was captured by this call.
    pub fn after_render(&self) -> bool {
        let items = {
            let state = self.state.lock();
            if state.cache.is_populated() {
                return false;
            }
            state.items.clone()
        };
        let Some(items) = items else {
            tracing::trace!(target: targets::CAPTURE, "no items surface, capture skipped");
            return false;
        };

        let bounds = items.item_bounds();
        !self.capture_offsets(bounds.as_deref()).is_empty()
    }

    // =========================================================================
    // Fit computation
    // =========================================================================

    /// Whether a child-bearing option already overflows `width`.
    pub fn is_overflowed_by_child(&self, width: f32) -> bool {
        let state = self.state.lock();
        fit::is_overflowed_by_child(
            &state.options.options,
            state.cache.read(),
            width,
            state.config.min_gap,
        )
    }

    /// Run one fit pass against `width` and publish the result.
    ///
    /// When a child-bearing option overflows, the previously published subset
    /// is kept as is. Otherwise the published subset becomes the longest
    /// prefix allowed by the cached offsets, `max_visible` and the option
    /// count. Returns the subset published after the pass.
    pub fn compute_visible(&self, width: f32) -> VisibleSubset {
        let _span = PerfSpan::new(span_names::FIT);
        let next = {
            let mut state = self.state.lock();
            if let Some(diagnostic) = validate::repair_cache(&mut state.cache) {
                diagnostic.log();
            }

            let min_gap = state.config.min_gap;
            let offsets = state.cache.read();
            let options = &state.options.options;

            if fit::is_overflowed_by_child(options, offsets, width, min_gap) {
                tracing::debug!(
                    target: targets::FIT,
                    width,
                    "child-bearing option overflows, keeping previous subset"
                );
                None
            } else {
                let fitting = fit::fitting_count(offsets, width, min_gap);
                let count = fit::visible_count(fitting, state.config.visible_limit(), options.len());
                tracing::debug!(
                    target: targets::FIT,
                    width,
                    fitting,
                    visible = count,
                    total = options.len(),
                    "fit pass"
                );
                Some(options[..count].to_vec())
            }
        };

        match next {
            Some(subset) => {
                self.publish(subset.clone());
                subset
            }
            None => self.visible.get(),
        }
    }

    /// Fit against the current width: the wrapper's if it is measured,
    /// otherwise the viewport's.
    pub fn refit(&self) -> VisibleSubset {
        let width = self.state.lock().resolve_width();
        self.compute_visible(width)
    }

    fn publish(&self, subset: VisibleSubset) {
        if self.visible.set(subset.clone()) {
            self.visible_changed.emit(subset);
        }
    }

    // =========================================================================
    // Output
    // =========================================================================

    /// The last published visible subset.
    pub fn visible_options(&self) -> VisibleSubset {
        self.visible.get()
    }

    /// Options not in the visible subset, for the overflow menu.
    pub fn overflow_options(&self) -> Vec<ToolOption> {
        let shown = self.visible.with(Vec::len);
        self.state
            .lock()
            .options
            .options
            .iter()
            .skip(shown)
            .cloned()
            .collect()
    }

    /// Whether any option is collapsed into the overflow menu.
    pub fn has_overflow(&self) -> bool {
        let shown = self.visible.with(Vec::len);
        self.state.lock().options.len() > shown
    }

    // =========================================================================
    // Resize binding
    // =========================================================================

    /// Validate inputs and start listening to `viewport` resizes.
    ///
    /// The listener is only installed while a wrapper surface is bound. An
    /// existing listener is replaced.
    pub fn mount(self: &Arc<Self>, viewport: &Arc<Viewport>) -> ValidationReport {
        let (report, wrapper_bound) = {
            let mut state = self.state.lock();
            state.viewport = Some(Arc::downgrade(viewport));
            (state.validate(), state.wrapper.is_some())
        };

        let mut binding = self.binding.lock();
        *binding = None;
        if wrapper_bound {
            let weak = Arc::downgrade(self);
            *binding = Some(ResizeBinding::connect(viewport, move |width| {
                if let Some(fitter) = weak.upgrade() {
                    fitter.handle_resize(width);
                }
            }));
        }
        report
    }

    /// Stop listening to resizes. Safe to call when not mounted.
    pub fn teardown(&self) {
        self.binding.lock().take();
        self.state.lock().viewport = None;
    }

    /// Whether a resize listener is currently installed.
    pub fn is_listening(&self) -> bool {
        self.binding
            .lock()
            .as_ref()
            .is_some_and(ResizeBinding::is_connected)
    }

    fn handle_resize(&self, viewport_width: f32) {
        let _span = PerfSpan::new(span_names::RESIZE);
        let width = self
            .state
            .lock()
            .wrapper
            .as_ref()
            .and_then(|wrapper| wrapper.width())
            .unwrap_or(viewport_width);
        self.compute_visible(width);
    }
}

impl Default for OverflowFitter {
    fn default() -> Self {
        Self::new(FitterConfig::default())
    }
}

static_assertions::assert_impl_all!(OverflowFitter: Send, Sync);
