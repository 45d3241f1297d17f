//! # PickProbe Designer
//!
//! The drawing side of PickProbe: loads SVG/DXF files into primitives and
//! keeps the pick session that maps canvas clicks back into drawing space.
//!
//! Features:
//! - Loader abstraction with SVG and DXF implementations
//! - Format detection by extension or content
//! - Pick sessions with numbered overlay markers
//! - Probe program export to any writer or file

pub mod error;
pub mod import;
pub mod pick_session;

pub use error::{DrawingLoadError, LoadResult, SessionError, SessionResult};
pub use import::{
    load_drawing, loader_for_path, DrawingLoader, DxfLoader, FileFormat, ImportedDrawing,
    SvgLoader,
};
pub use pick_session::{PickEvent, PickMarker, PickSession};
