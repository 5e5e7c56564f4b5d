//! The surface the plugin consumes from its host application.

use crate::color::Theme;
use crate::error::HostError;
use serde::{Deserialize, Serialize};

/// What the host opened the plugin for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostMode {
    /// Insert new content on the canvas.
    #[default]
    Canvas,
    /// Replace the image currently being edited.
    Image,
}

/// Identifier of a node in the host document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeId(pub String);

/// An image registered with the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef(pub String);

/// Image payload for upload or replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUpload {
    /// `data:` URL of the image.
    pub image: String,
    pub alt_text: String,
}

/// A frame to be created on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameSpec {
    pub name: String,
    pub width: f64,
    pub height: f64,
    pub background_image: Option<ImageRef>,
}

/// A node the host created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameNode {
    pub id: Option<NodeId>,
}

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotifyVariant {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotifyOptions {
    pub variant: NotifyVariant,
    /// `None` keeps the notification until dismissed.
    pub duration_ms: Option<u64>,
}

/// Placement and size of the plugin panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelOptions {
    pub position: String,
    pub width: u32,
    pub height: u32,
    pub resizable: bool,
}

impl Default for PanelOptions {
    fn default() -> Self {
        Self {
            position: "top right".to_string(),
            width: 260,
            height: 406,
            resizable: false,
        }
    }
}

/// Operations provided by the host application.
///
/// Calls are made one at a time from the plugin session.
pub trait HostBridge {
    fn mode(&self) -> HostMode;

    fn theme(&self) -> Theme;

    fn show_ui(&mut self, options: &PanelOptions) -> Result<(), HostError>;

    /// Register an image and return a reference usable in node attributes.
    fn upload_image(&mut self, upload: &ImageUpload) -> Result<ImageRef, HostError>;

    /// Create a frame. `Ok(None)` means the host declined without an error.
    fn create_frame(&mut self, spec: &FrameSpec) -> Result<Option<FrameNode>, HostError>;

    /// Upload an image and use it as the fill of an existing node.
    fn set_frame_fill(&mut self, node: &NodeId, upload: &ImageUpload) -> Result<ImageRef, HostError>;

    fn set_selection(&mut self, nodes: &[NodeId]) -> Result<(), HostError>;

    /// Replace the image being edited (image mode).
    fn set_image(&mut self, upload: &ImageUpload) -> Result<(), HostError>;

    fn notify(&mut self, message: &str, options: &NotifyOptions);
}
