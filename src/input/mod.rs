pub mod memory_surface;
pub mod surface;

pub use memory_surface::MemorySurface;
pub use surface::{
    ChangeEvent, ChangeListener, ContextId, EditProvenance, SurfaceError, TextSurface,
};
