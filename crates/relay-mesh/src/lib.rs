//! CPU meshing: primitive variants, aggregate buffers, and the world builder.
//!
//! The renderer and the model loader live behind the [`RenderBackend`] and
//! [`MeshSource`] traits; this crate never touches a device or a file format.
#![forbid(unsafe_code)]

pub mod buffer;
pub mod builder;
pub mod library;
pub mod source;

pub use buffer::{MeshBuf, Vertex};
pub use builder::{RenderBackend, WIRE_CENTER, rebuild};
pub use library::{LibraryError, Primitive, PrimitiveLibrary};
pub use source::{MeshSource, MeshSourceError, Triangle};
