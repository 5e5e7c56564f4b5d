//! Test doubles shared by unit tests.

use crate::color::Theme;
use crate::error::{HostError, RenderError};
use crate::host::{
    FrameNode, FrameSpec, HostBridge, HostMode, ImageRef, ImageUpload, NodeId, NotifyOptions,
    NotifyVariant, PanelOptions,
};
use crate::markup::{Element, Markup, MarkupKind, Node};
use crate::materialize::{CaptureOptions, RasterCapture, RasterImage};
use crate::typeset::Typesetter;
use std::collections::HashMap;

/// Deterministic typesetter that rejects unbalanced braces.
pub(crate) struct FakeTypesetter {
    kind: MarkupKind,
}

impl FakeTypesetter {
    pub(crate) fn svg() -> Self {
        Self {
            kind: MarkupKind::Svg,
        }
    }

    pub(crate) fn html() -> Self {
        Self {
            kind: MarkupKind::Html,
        }
    }
}

impl Typesetter for FakeTypesetter {
    fn name(&self) -> &'static str {
        "fake"
    }

    fn markup_kind(&self) -> MarkupKind {
        self.kind
    }

    fn typeset(&self, latex: &str) -> Result<Markup, RenderError> {
        if latex.matches('{').count() != latex.matches('}').count() {
            return Err(RenderError::Invalid(format!("unbalanced braces in {latex:?}")));
        }

        match self.kind {
            MarkupKind::Svg => {
                let mut glyph = Element::new("path");
                glyph.set_attr("id", "glyph");
                glyph.set_attr("d", "M0 -700L1000 -700L1000 0L0 0Z");
                let mut defs = Element::new("defs");
                defs.children.push(Node::Element(glyph));

                let mut used = Element::new("use");
                used.set_attr("xlink:href", "#glyph");
                let mut group = Element::new("g");
                group.set_attr("fill", "currentColor");
                group.set_attr("data-latex", latex);
                group.children.push(Node::Element(used));

                let mut svg = Element::new("svg");
                svg.set_attr("xmlns", "http://www.w3.org/2000/svg");
                svg.set_attr("xmlns:xlink", "http://www.w3.org/1999/xlink");
                svg.set_attr("width", "8");
                svg.set_attr("height", "4");
                svg.set_attr("viewBox", "0 -750 2000 1000");
                svg.children.push(Node::Element(defs));
                svg.children.push(Node::Element(group));
                Ok(Markup::Svg(svg.to_xml()))
            }
            MarkupKind::Html => {
                let escaped = latex
                    .replace('&', "&amp;")
                    .replace('<', "&lt;")
                    .replace('>', "&gt;");
                Ok(Markup::Html(format!(
                    r#"<span class="katex-display"><span class="katex">{escaped}</span></span>"#
                )))
            }
        }
    }
}

/// Raster capture standing in for a host's DOM capture.
///
/// Reports a fixed preview size scaled by the capture scale and accepts any
/// markup.
pub(crate) struct FakeCapture {
    width: u32,
    height: u32,
}

impl FakeCapture {
    pub(crate) fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl RasterCapture for FakeCapture {
    fn capture(&self, markup: &Markup, options: &CaptureOptions) -> Result<RasterImage, RenderError> {
        let scale = options.scale as u32;
        let mut png = b"\x89PNG\r\n\x1a\n".to_vec();
        png.extend_from_slice(markup.as_str().as_bytes());
        Ok(RasterImage {
            png,
            width: self.width * scale,
            height: self.height * scale,
        })
    }
}

/// A host call, as observed by [`RecordingHost`].
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum HostCall {
    ShowUi(PanelOptions),
    UploadImage(ImageUpload),
    CreateFrame(FrameSpec),
    SetFrameFill(NodeId, ImageUpload),
    SetSelection(Vec<NodeId>),
    SetImage(ImageUpload),
    Notify(String, NotifyOptions),
}

impl HostCall {
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            HostCall::ShowUi(_) => "show_ui",
            HostCall::UploadImage(_) => "upload_image",
            HostCall::CreateFrame(_) => "create_frame",
            HostCall::SetFrameFill(..) => "set_frame_fill",
            HostCall::SetSelection(_) => "set_selection",
            HostCall::SetImage(_) => "set_image",
            HostCall::Notify(..) => "notify",
        }
    }
}

/// In-memory host that records every call.
pub(crate) struct RecordingHost {
    pub(crate) mode: HostMode,
    pub(crate) theme: Theme,
    pub(crate) calls: Vec<HostCall>,
    /// Name of a call kind that should be rejected.
    pub(crate) fail_on: Option<&'static str>,
    /// Whether created frames carry an identifier.
    pub(crate) frame_ids: bool,
    /// Answer frame creation with `Ok(None)`.
    pub(crate) declines_frames: bool,
    pub(crate) selection: Vec<NodeId>,
    pub(crate) fills: HashMap<NodeId, ImageRef>,
    next_id: usize,
}

impl RecordingHost {
    pub(crate) fn canvas() -> Self {
        Self {
            mode: HostMode::Canvas,
            theme: Theme::Dark,
            calls: Vec::new(),
            fail_on: None,
            frame_ids: true,
            declines_frames: false,
            selection: Vec::new(),
            fills: HashMap::new(),
            next_id: 0,
        }
    }

    pub(crate) fn image() -> Self {
        Self {
            mode: HostMode::Image,
            ..Self::canvas()
        }
    }

    /// Calls that change the host document.
    pub(crate) fn mutations(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| !matches!(c, HostCall::Notify(..) | HostCall::ShowUi(_)))
            .count()
    }

    pub(crate) fn notifications(&self) -> Vec<(String, NotifyVariant)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                HostCall::Notify(msg, opts) => Some((msg.clone(), opts.variant)),
                _ => None,
            })
            .collect()
    }

    fn record(&mut self, call: HostCall) -> Result<(), HostError> {
        let kind = call.kind();
        self.calls.push(call);
        if self.fail_on == Some(kind) {
            return Err(HostError::rejected(kind, "rejected by test host"));
        }
        Ok(())
    }

    fn register(&mut self, upload: &ImageUpload) -> ImageRef {
        self.next_id += 1;
        ImageRef(format!("image-{}-{}", self.next_id, upload.image.len()))
    }
}

impl HostBridge for RecordingHost {
    fn mode(&self) -> HostMode {
        self.mode
    }

    fn theme(&self) -> Theme {
        self.theme
    }

    fn show_ui(&mut self, options: &PanelOptions) -> Result<(), HostError> {
        self.record(HostCall::ShowUi(options.clone()))
    }

    fn upload_image(&mut self, upload: &ImageUpload) -> Result<ImageRef, HostError> {
        self.record(HostCall::UploadImage(upload.clone()))?;
        Ok(self.register(upload))
    }

    fn create_frame(&mut self, spec: &FrameSpec) -> Result<Option<FrameNode>, HostError> {
        self.record(HostCall::CreateFrame(spec.clone()))?;
        if self.declines_frames {
            return Ok(None);
        }
        self.next_id += 1;
        let id = NodeId(format!("frame-{}", self.next_id));
        if let Some(image) = &spec.background_image {
            self.fills.insert(id.clone(), image.clone());
        }
        Ok(Some(FrameNode {
            id: self.frame_ids.then_some(id),
        }))
    }

    fn set_frame_fill(&mut self, node: &NodeId, upload: &ImageUpload) -> Result<ImageRef, HostError> {
        self.record(HostCall::SetFrameFill(node.clone(), upload.clone()))?;
        let image = self.register(upload);
        self.fills.insert(node.clone(), image.clone());
        Ok(image)
    }

    fn set_selection(&mut self, nodes: &[NodeId]) -> Result<(), HostError> {
        self.record(HostCall::SetSelection(nodes.to_vec()))?;
        self.selection = nodes.to_vec();
        Ok(())
    }

    fn set_image(&mut self, upload: &ImageUpload) -> Result<(), HostError> {
        self.record(HostCall::SetImage(upload.clone()))
    }

    fn notify(&mut self, message: &str, options: &NotifyOptions) {
        self.calls.push(HostCall::Notify(message.to_string(), *options));
    }
}
