//! The plugin session: owns the input state and wires it to the pipeline.

use crate::color::HexColor;
use crate::config::PluginConfig;
use crate::error::Result;
use crate::host::{HostBridge, HostMode, NotifyVariant};
use crate::materialize::RasterCapture;
use crate::pipeline::{render, Preview};
use crate::state::{EquationInput, InputState, Resolution};
use crate::submit::{messages, Outcome, Submitter};
use crate::typeset::{Engine, Readiness, Typesetter};

/// Placeholder text for the equation input.
pub const PLACEHOLDER: &str = "Insert LaTeX equation\ne.g. \\frac{a}{b}";

/// One open plugin panel.
///
/// Every setter re-renders the preview. A render that fails leaves the
/// previous preview in place and notifies the user.
pub struct Session<H: HostBridge> {
    host: H,
    config: PluginConfig,
    engine: Engine,
    state: InputState,
    preview: Preview,
    submitter: Submitter,
}

impl<H: HostBridge> Session<H> {
    /// Open the panel with an engine that is still loading.
    pub fn open(host: H, config: PluginConfig) -> Self {
        Self::with_engine(host, config, Engine::new())
    }

    /// Open the panel around an existing engine.
    pub fn with_engine(mut host: H, config: PluginConfig, engine: Engine) -> Self {
        if let Err(err) = host.show_ui(&config.panel) {
            tracing::error!(error = %err, "failed to show plugin panel");
        }

        let state = InputState {
            colors: config.colors(host.theme()),
            resolution: config.export.resolution,
            ..Default::default()
        };
        let preview = Preview::empty(state.colors.clone(), state.resolution);
        let submitter = Submitter {
            materializer: config.materializer(),
            insertion: config.export.insertion,
            frame_name: config.export.frame_name.clone(),
            error: config.notify_options(NotifyVariant::Error),
            success: config.notify_options(NotifyVariant::Success),
        };

        Self {
            host,
            config,
            engine,
            state,
            preview,
            submitter,
        }
    }

    /// Replace the raster capture used for raster exports.
    ///
    /// HTML previews (KaTeX, MathML) can only be rasterized by a capture the
    /// host provides.
    pub fn with_capture(mut self, capture: Box<dyn RasterCapture>) -> Self {
        self.submitter.materializer = self.config.materializer().with_capture(capture);
        self
    }

    /// Load the configured backend.
    pub fn load_engine(&mut self) -> &Readiness {
        if self.engine.readiness() == &Readiness::Loading {
            let readiness = self.engine.load(self.config.backend).clone();
            self.loaded(readiness);
        }
        self.engine.readiness()
    }

    /// Load the engine with a custom loader. Only the first call has effect.
    pub fn load_engine_with<F>(&mut self, loader: F) -> &Readiness
    where
        F: FnOnce() -> Result<Box<dyn Typesetter>>,
    {
        if self.engine.readiness() == &Readiness::Loading {
            let readiness = self.engine.load_with(loader).clone();
            self.loaded(readiness);
        }
        self.engine.readiness()
    }

    fn loaded(&mut self, readiness: Readiness) {
        match readiness {
            Readiness::Ready => self.refresh(),
            Readiness::Failed(_) => {
                let options = self.config.notify_options(NotifyVariant::Error);
                self.host.notify(messages::ENGINE_LOAD_FAILED, &options);
            }
            Readiness::Loading => {}
        }
    }

    pub fn set_equation(&mut self, text: impl Into<String>) {
        self.state.equation = EquationInput::new(text);
        self.refresh();
    }

    pub fn set_foreground(&mut self, color: HexColor) {
        self.state.colors.foreground = color;
        self.refresh();
    }

    pub fn set_background(&mut self, color: HexColor) {
        self.state.colors.background = color;
        self.refresh();
    }

    pub fn set_resolution(&mut self, resolution: Resolution) {
        self.state.resolution = resolution;
        self.refresh();
    }

    /// Recompute the preview from the current state.
    pub fn refresh(&mut self) {
        let result = render(
            &self.engine,
            &self.state.equation,
            &self.state.colors,
            self.state.resolution,
            self.config.color_strategy,
        );

        match result {
            Ok(preview) => self.preview = preview,
            Err(err) => {
                tracing::warn!(error = %err, latex = self.state.equation.as_str(), "rendering failed");
                let options = self.config.notify_options(NotifyVariant::Error);
                self.host.notify(messages::INVALID_LATEX, &options);
            }
        }
    }

    /// Export the preview and hand it to the host.
    pub fn submit(&mut self) -> Outcome {
        self.submitter.submit(
            &mut self.host,
            self.engine.is_ready(),
            &self.state.equation,
            &self.preview,
        )
    }

    /// Whether the submit button is enabled.
    pub fn can_submit(&self) -> bool {
        self.engine.is_ready() && !self.preview.is_empty()
    }

    pub fn button_label(&self) -> &'static str {
        if !self.engine.is_ready() {
            return "Loading...";
        }
        match self.host.mode() {
            HostMode::Image => "Use Equation",
            HostMode::Canvas => "Add to Canvas",
        }
    }

    pub fn description(&self) -> &'static str {
        match self.host.mode() {
            HostMode::Image => "Create a LaTeX equation image to use in your design.",
            HostMode::Canvas => "Convert LaTeX expressions into images for your website.",
        }
    }

    pub fn state(&self) -> &InputState {
        &self.state
    }

    pub fn preview(&self) -> &Preview {
        &self.preview
    }

    pub fn readiness(&self) -> &Readiness {
        self.engine.readiness()
    }

    /// Register a callback for engine readiness changes.
    pub fn on_readiness(&mut self, listener: impl Fn(&Readiness) + 'static) {
        self.engine.subscribe(listener);
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }
}
