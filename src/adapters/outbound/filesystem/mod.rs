/// Filesystem adapters for directory walking and report output
mod directory_walker;
mod file_writer;

pub use directory_walker::FileSystemWalker;
pub use file_writer::FileSystemWriter;
