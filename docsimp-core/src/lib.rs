pub mod analysis;
pub mod consts;
pub mod error;
pub mod layout;
pub mod simplify;

// Re-export commonly used types
pub use error::SimplifyError;
pub use layout::annotation::{Annotation, BoundingBox, Page, Relationships};
pub use simplify::{
    SimplifyConfig, simplify_page,
    batch::{simplify_dir, simplify_file},
};
