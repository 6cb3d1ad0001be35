//! Storage module: the object store gateway and batch file operations

pub mod batch;
mod gateway;

pub use batch::{delete_many, run_batch, upload_many};
pub use gateway::{join_path, StorageGateway};
