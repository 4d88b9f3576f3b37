pub mod init;
pub mod interactive;
pub mod lookup;
mod source;
pub mod tables;

pub use source::open_source;
