//! Submission: check preconditions, export the preview and hand it to the host.

use crate::error::{Error, HostError, PreconditionError, Result};
use crate::host::{
    FrameNode, FrameSpec, HostBridge, HostMode, ImageUpload, NodeId, NotifyOptions, NotifyVariant,
};
use crate::markup::Markup;
use crate::materialize::{ExportFormat, Materializer};
use crate::pipeline::Preview;
use crate::state::EquationInput;
use serde::{Deserialize, Serialize};

/// User-visible notification texts.
pub mod messages {
    pub const EMPTY_EQUATION: &str = "Please enter a LaTeX equation";
    pub const ENGINE_LOADING: &str = "Typesetting engine is still loading";
    pub const PREVIEW_PENDING: &str = "Please wait for equation to render";
    pub const INVALID_LATEX: &str = "Invalid LaTeX equation";
    pub const ENGINE_LOAD_FAILED: &str = "Failed to load typesetting engine";
    pub const ADDED_TO_CANVAS: &str = "Equation added to canvas";
    pub const ADD_FAILED: &str = "Failed to add image to canvas";
    pub const FRAME_CREATE_FAILED: &str = "Failed to create frame";
    pub const FRAME_MISSING_ID: &str = "Frame node has no ID";
    pub const IMAGE_SET: &str = "Equation image set";
    pub const SET_FAILED: &str = "Failed to set image";
}

impl PreconditionError {
    /// Notification shown when this check fails.
    pub fn message(&self) -> &'static str {
        match self {
            PreconditionError::EmptyEquation => messages::EMPTY_EQUATION,
            PreconditionError::EngineNotReady => messages::ENGINE_LOADING,
            PreconditionError::PreviewNotReady => messages::PREVIEW_PENDING,
        }
    }
}

/// Order of host calls when inserting a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Insertion {
    /// Upload-then-create for vector exports, create-then-fill for raster.
    #[default]
    Auto,
    /// Upload the image, then create a frame that already carries it.
    UploadThenCreate,
    /// Create an empty frame, then set its fill to the image.
    CreateThenFill,
}

impl Insertion {
    pub fn resolve(self, format: ExportFormat) -> Insertion {
        match (self, format) {
            (Insertion::Auto, ExportFormat::Raster) => Insertion::CreateThenFill,
            (Insertion::Auto, _) => Insertion::UploadThenCreate,
            (explicit, _) => explicit,
        }
    }
}

/// What a submission did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A frame was created, filled and selected.
    Inserted(NodeId),
    /// The edited image was replaced.
    Replaced,
    /// A precondition failed; the host was not touched.
    Rejected(PreconditionError),
    /// Export or a host call failed.
    Failed(String),
}

/// Check everything needed before the host may be called.
pub fn check_preconditions<'a>(
    engine_ready: bool,
    input: &EquationInput,
    preview: &'a Preview,
) -> std::result::Result<&'a Markup, PreconditionError> {
    if input.is_blank() {
        return Err(PreconditionError::EmptyEquation);
    }
    if !engine_ready {
        return Err(PreconditionError::EngineNotReady);
    }
    preview.markup().ok_or(PreconditionError::PreviewNotReady)
}

/// Runs submissions against a host.
#[derive(Debug)]
pub struct Submitter {
    pub materializer: Materializer,
    pub insertion: Insertion,
    pub frame_name: String,
    pub error: NotifyOptions,
    pub success: NotifyOptions,
}

impl Submitter {
    pub fn submit<H: HostBridge + ?Sized>(
        &self,
        host: &mut H,
        engine_ready: bool,
        input: &EquationInput,
        preview: &Preview,
    ) -> Outcome {
        let markup = match check_preconditions(engine_ready, input, preview) {
            Ok(markup) => markup,
            Err(err) => {
                host.notify(err.message(), &self.error);
                return Outcome::Rejected(err);
            }
        };

        match host.mode() {
            HostMode::Image => match self.replace_image(host, markup, input, preview) {
                Ok(()) => {
                    host.notify(messages::IMAGE_SET, &self.success);
                    Outcome::Replaced
                }
                Err(err) => {
                    tracing::error!(error = %err, "failed to set equation image");
                    host.notify(messages::SET_FAILED, &self.error);
                    Outcome::Failed(err.to_string())
                }
            },
            HostMode::Canvas => match self.insert_frame(host, markup, input, preview) {
                Ok(id) => {
                    tracing::info!(node = %id.0, "equation added to canvas");
                    host.notify(messages::ADDED_TO_CANVAS, &self.success);
                    Outcome::Inserted(id)
                }
                Err(err) => {
                    tracing::error!(error = %err, "failed to add equation to canvas");
                    host.notify(canvas_failure_message(&err), &self.error);
                    Outcome::Failed(err.to_string())
                }
            },
        }
    }

    fn replace_image<H: HostBridge + ?Sized>(
        &self,
        host: &mut H,
        markup: &Markup,
        input: &EquationInput,
        preview: &Preview,
    ) -> Result<()> {
        let image = self
            .materializer
            .materialize(markup, preview.colors(), preview.resolution())?;
        host.set_image(&ImageUpload {
            image: image.data_url,
            alt_text: input.as_str().to_string(),
        })?;
        Ok(())
    }

    fn insert_frame<H: HostBridge + ?Sized>(
        &self,
        host: &mut H,
        markup: &Markup,
        input: &EquationInput,
        preview: &Preview,
    ) -> Result<NodeId> {
        let image = self
            .materializer
            .materialize(markup, preview.colors(), preview.resolution())?;
        let upload = ImageUpload {
            image: image.data_url,
            alt_text: input.as_str().to_string(),
        };
        let mut spec = FrameSpec {
            name: self.frame_name.clone(),
            width: image.frame.width,
            height: image.frame.height,
            background_image: None,
        };

        let format = self.materializer.format().resolve(markup.kind());
        let id = match self.insertion.resolve(format) {
            Insertion::CreateThenFill => {
                let id = frame_id(host.create_frame(&spec)?)?;
                host.set_frame_fill(&id, &upload)?;
                id
            }
            _ => {
                spec.background_image = Some(host.upload_image(&upload)?);
                frame_id(host.create_frame(&spec)?)?
            }
        };

        host.set_selection(std::slice::from_ref(&id))?;
        Ok(id)
    }
}

fn canvas_failure_message(err: &Error) -> &'static str {
    match err {
        Error::Host(HostError::MissingFrame) => messages::FRAME_CREATE_FAILED,
        Error::Host(HostError::MissingNodeId) => messages::FRAME_MISSING_ID,
        _ => messages::ADD_FAILED,
    }
}

fn frame_id(frame: Option<FrameNode>) -> std::result::Result<NodeId, HostError> {
    frame
        .ok_or(HostError::MissingFrame)?
        .id
        .ok_or(HostError::MissingNodeId)
}
