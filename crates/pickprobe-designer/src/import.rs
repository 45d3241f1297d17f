//! # File Import Module
//!
//! Turns SVG and DXF files into drawing primitives.
//!
//! Supports:
//! - File format detection by extension, falling back to content sniffing
//! - DXF LINE and CIRCLE entities (via the `dxf` crate)
//! - SVG `<line>`, `<circle>` and `<rect>` elements
//! - Y mirroring of SVG content so "up" matches DXF conventions
//!
//! Other entity kinds are reported as [`Primitive::Unsupported`] and take no
//! part in fitting.

use pickprobe_core::{
    BoundingBox, BoundingBoxAccumulator, Canvas, CoordinateTransform, DrawingPoint, Primitive,
};
use regex::Regex;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::error::{DrawingLoadError, LoadResult};

/// Supported import file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// SVG (Scalable Vector Graphics)
    Svg,
    /// DXF (Drawing Exchange Format)
    Dxf,
}

impl FileFormat {
    /// Format implied by the file extension, case-insensitive.
    pub fn from_extension(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "svg" => Some(Self::Svg),
            "dxf" => Some(Self::Dxf),
            _ => None,
        }
    }

    /// Format recognised from the first bytes of the file.
    pub fn sniff(content: &[u8]) -> Option<Self> {
        if content.starts_with(b"AutoCAD Binary DXF") {
            return Some(Self::Dxf);
        }

        let head = String::from_utf8_lossy(&content[..content.len().min(1024)]);
        let mut lines = head.lines().map(str::trim).filter(|l| !l.is_empty());
        // group code / value pairs, optionally led by 999 comments
        while let (Some(code), Some(value)) = (lines.next(), lines.next()) {
            match code {
                "999" => continue,
                "0" if value == "SECTION" => return Some(Self::Dxf),
                _ => break,
            }
        }

        let trimmed = head.trim_start();
        if trimmed.starts_with('<') && head.contains("<svg") {
            return Some(Self::Svg);
        }
        None
    }

    /// Extension first, then content.
    pub fn detect(path: &Path, content: &[u8]) -> Option<Self> {
        Self::from_extension(path).or_else(|| Self::sniff(content))
    }

    /// Loader able to parse this format.
    pub fn loader(&self) -> Box<dyn DrawingLoader> {
        match self {
            Self::Svg => Box::new(SvgLoader),
            Self::Dxf => Box::new(DxfLoader),
        }
    }
}

/// Parses one drawing format into primitives.
pub trait DrawingLoader {
    fn format(&self) -> FileFormat;

    /// Parses raw file content.
    fn parse_bytes(&self, content: &[u8]) -> LoadResult<Vec<Primitive>>;

    /// Reads and parses the file at `path`.
    fn parse(&self, path: &Path) -> LoadResult<Vec<Primitive>> {
        let content = std::fs::read(path)?;
        self.parse_bytes(&content)
    }
}

/// Resolves a loader for `path` from its extension or, failing that, its content.
pub fn loader_for_path(path: &Path) -> LoadResult<Box<dyn DrawingLoader>> {
    if let Some(format) = FileFormat::from_extension(path) {
        return Ok(format.loader());
    }
    let content = std::fs::read(path)?;
    FileFormat::sniff(&content)
        .map(|format| format.loader())
        .ok_or_else(|| DrawingLoadError::UnsupportedFormat(path.display().to_string()))
}

/// DXF importer. Reads model-space LINE and CIRCLE entities.
#[derive(Debug, Clone, Copy, Default)]
pub struct DxfLoader;

impl DxfLoader {
    fn entity_to_primitive(entity: &dxf::entities::EntityType) -> Primitive {
        use dxf::entities::EntityType;

        match entity {
            EntityType::Line(line) => Primitive::line(
                DrawingPoint::new(line.p1.x, line.p1.y),
                DrawingPoint::new(line.p2.x, line.p2.y),
            ),
            EntityType::Circle(circle) => Primitive::circle(
                DrawingPoint::new(circle.center.x, circle.center.y),
                circle.radius,
            ),
            other => Primitive::Unsupported {
                kind: Self::entity_name(other).to_string(),
            },
        }
    }

    fn entity_name(entity: &dxf::entities::EntityType) -> &'static str {
        use dxf::entities::EntityType;

        match entity {
            EntityType::Arc(_) => "ARC",
            EntityType::Ellipse(_) => "ELLIPSE",
            EntityType::Insert(_) => "INSERT",
            EntityType::LwPolyline(_) => "LWPOLYLINE",
            EntityType::Polyline(_) => "POLYLINE",
            EntityType::Spline(_) => "SPLINE",
            EntityType::Text(_) => "TEXT",
            _ => "OTHER",
        }
    }
}

impl DrawingLoader for DxfLoader {
    fn format(&self) -> FileFormat {
        FileFormat::Dxf
    }

    fn parse_bytes(&self, content: &[u8]) -> LoadResult<Vec<Primitive>> {
        let mut reader = content;
        let drawing = dxf::Drawing::load(&mut reader)
            .map_err(|e| DrawingLoadError::DxfParse(e.to_string()))?;

        let primitives: Vec<Primitive> = drawing
            .entities()
            .filter(|entity| !entity.common.is_in_paper_space)
            .map(|entity| Self::entity_to_primitive(&entity.specific))
            .collect();

        debug!(entities = primitives.len(), "Parsed DXF entities");
        Ok(primitives)
    }
}

/// SVG importer. Reads `<line>`, `<circle>` and `<rect>` elements.
///
/// SVG's Y axis points down, so the result is mirrored about the vertical
/// centre of the content before it is handed on.
#[derive(Debug, Clone, Copy, Default)]
pub struct SvgLoader;

impl SvgLoader {
    fn compile(pattern: &str) -> LoadResult<Regex> {
        Regex::new(pattern).map_err(|e| DrawingLoadError::SvgParse(e.to_string()))
    }

    fn attributes<'a>(attr_re: &Regex, tag: &'a str) -> HashMap<&'a str, &'a str> {
        attr_re
            .captures_iter(tag)
            .filter_map(|caps| {
                let name = caps.get(1)?.as_str();
                let value = caps.get(2).or_else(|| caps.get(3))?.as_str();
                Some((name, value))
            })
            .collect()
    }

    /// Leading number of an SVG length such as `12.5`, `10mm` or `3e2px`.
    fn parse_length(value: &str) -> Option<f64> {
        let value = value.trim();
        let end = value
            .char_indices()
            .find(|&(i, c)| {
                !(c.is_ascii_digit()
                    || c == '.'
                    || ((c == '-' || c == '+')
                        && (i == 0 || value[..i].ends_with(&['e', 'E'][..])))
                    || ((c == 'e' || c == 'E') && i > 0))
            })
            .map(|(i, _)| i)
            .unwrap_or(value.len());
        value[..end].parse().ok().filter(|v: &f64| v.is_finite())
    }

    /// A missing attribute defaults to 0. A present but unusable one is `None`.
    fn length(attrs: &HashMap<&str, &str>, name: &str) -> Option<f64> {
        match attrs.get(name) {
            Some(v) => Self::parse_length(v),
            None => Some(0.0),
        }
    }

    /// All of `names`, or `None` if any of them is unusable.
    fn lengths<const N: usize>(
        attrs: &HashMap<&str, &str>,
        names: [&str; N],
    ) -> Option<[f64; N]> {
        let mut values = [0.0; N];
        for (value, name) in values.iter_mut().zip(names) {
            *value = Self::length(attrs, name)?;
        }
        Some(values)
    }

    fn mirror_y(primitives: Vec<Primitive>) -> Vec<Primitive> {
        let acc: BoundingBoxAccumulator = primitives.iter().collect();
        let Some(bounds) = acc.result() else {
            return primitives;
        };
        let axis = bounds.min_y + bounds.max_y;
        let flip = |p: DrawingPoint| DrawingPoint::new(p.x, axis - p.y);

        primitives
            .into_iter()
            .map(|primitive| match primitive {
                Primitive::Line { start, end } => Primitive::line(flip(start), flip(end)),
                Primitive::Circle { center, radius } => Primitive::circle(flip(center), radius),
                other => other,
            })
            .collect()
    }
}

impl DrawingLoader for SvgLoader {
    fn format(&self) -> FileFormat {
        FileFormat::Svg
    }

    fn parse_bytes(&self, content: &[u8]) -> LoadResult<Vec<Primitive>> {
        let content = std::str::from_utf8(content)
            .map_err(|e| DrawingLoadError::SvgParse(format!("invalid UTF-8: {}", e)))?;
        if !content.contains("<svg") {
            return Err(DrawingLoadError::SvgParse(
                "missing <svg> element".to_string(),
            ));
        }

        let markup_re = Self::compile(r"(?s)<!--.*?-->|<!\[CDATA\[.*?\]\]>")?;
        let element_re = Self::compile(r"<([A-Za-z][\w:-]*)\b([^>]*)>")?;
        let attr_re = Self::compile(r#"([A-Za-z_:][\w:.-]*)\s*=\s*(?:"([^"]*)"|'([^']*)')"#)?;

        let content = markup_re.replace_all(content, "");
        let mut primitives = Vec::new();
        let mut skipped = 0usize;
        for caps in element_re.captures_iter(&content) {
            let name = &caps[1];
            let tag = &caps[2];
            match name {
                "line" => {
                    let attrs = Self::attributes(&attr_re, tag);
                    match Self::lengths(&attrs, ["x1", "y1", "x2", "y2"]) {
                        Some([x1, y1, x2, y2]) => primitives.push(Primitive::line(
                            DrawingPoint::new(x1, y1),
                            DrawingPoint::new(x2, y2),
                        )),
                        None => skipped += 1,
                    }
                }
                "circle" => {
                    let attrs = Self::attributes(&attr_re, tag);
                    match Self::lengths(&attrs, ["cx", "cy", "r"]) {
                        Some([cx, cy, r]) if r > 0.0 => {
                            primitives.push(Primitive::circle(DrawingPoint::new(cx, cy), r))
                        }
                        Some(_) => {}
                        None => skipped += 1,
                    }
                }
                "rect" => {
                    let attrs = Self::attributes(&attr_re, tag);
                    match Self::lengths(&attrs, ["x", "y", "width", "height"]) {
                        Some([x, y, w, h]) if w > 0.0 && h > 0.0 => {
                            let corners = [
                                DrawingPoint::new(x, y),
                                DrawingPoint::new(x + w, y),
                                DrawingPoint::new(x + w, y + h),
                                DrawingPoint::new(x, y + h),
                            ];
                            for i in 0..4 {
                                primitives.push(Primitive::line(corners[i], corners[(i + 1) % 4]));
                            }
                        }
                        Some(_) => {}
                        None => skipped += 1,
                    }
                }
                "path" | "polyline" | "polygon" | "ellipse" | "text" => {
                    primitives.push(Primitive::Unsupported {
                        kind: name.to_ascii_uppercase(),
                    });
                }
                _ => {}
            }
        }

        if skipped > 0 {
            warn!(skipped, "Skipped SVG elements with unreadable coordinates");
        }
        debug!(elements = primitives.len(), "Parsed SVG elements");
        Ok(Self::mirror_y(primitives))
    }
}

/// A drawing that has been parsed and measured.
#[derive(Debug, Clone)]
pub struct ImportedDrawing {
    /// Source file format
    pub format: FileFormat,
    /// Human-readable origin, usually the file path
    pub source: String,
    /// Everything the loader produced, including unsupported entities
    pub primitives: Vec<Primitive>,
    /// Union of all drawable extents
    pub bounds: BoundingBox,
}

impl ImportedDrawing {
    /// Measures `primitives`; fails if none of them is drawable.
    pub fn new(
        format: FileFormat,
        source: impl Into<String>,
        primitives: Vec<Primitive>,
    ) -> LoadResult<Self> {
        let source = source.into();
        let acc: BoundingBoxAccumulator = primitives.iter().collect();
        let bounds = acc
            .result()
            .ok_or_else(|| DrawingLoadError::NoDrawableEntities(source.clone()))?;

        let skipped = primitives.len() - acc.contributed();
        if skipped > 0 {
            debug!(skipped, "Ignored unsupported entities");
        }

        Ok(Self {
            format,
            source,
            primitives,
            bounds,
        })
    }

    /// Number of primitives that carry geometry.
    pub fn drawable_count(&self) -> usize {
        self.primitives.iter().filter(|p| p.is_drawable()).count()
    }

    /// Fits this drawing onto `canvas`.
    pub fn fit(&self, canvas: &Canvas) -> pickprobe_core::Result<CoordinateTransform> {
        canvas.fit(self.bounds)
    }
}

/// Reads, detects and parses the drawing at `path`.
pub fn load_drawing(path: &Path) -> LoadResult<ImportedDrawing> {
    let content = std::fs::read(path)?;
    let format = FileFormat::detect(path, &content)
        .ok_or_else(|| DrawingLoadError::UnsupportedFormat(path.display().to_string()))?;

    let primitives = format.loader().parse_bytes(&content)?;
    let drawing = ImportedDrawing::new(format, path.display().to_string(), primitives)?;

    info!(
        path = %path.display(),
        format = ?drawing.format,
        drawable = drawing.drawable_count(),
        width = drawing.bounds.width(),
        height = drawing.bounds.height(),
        "Loaded drawing"
    );
    Ok(drawing)
}
