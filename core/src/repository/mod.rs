pub mod file;
pub mod traits;

pub use file::FileOutlineRepository;
pub use traits::OutlineRepository;
