pub mod cnb;
pub mod file;

pub use cnb::CnbProvider;
pub use file::FileSource;
