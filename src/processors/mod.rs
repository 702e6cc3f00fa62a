// shotscale/src/processors/mod.rs
mod labeler;
mod loader;
mod resizer;
mod writer;

pub use labeler::Labeler;
pub use loader::Loader;
pub use resizer::Resizer;
pub use writer::Writer;

pub mod prelude {
    pub use super::{Labeler, Loader, Resizer, Writer};
}
