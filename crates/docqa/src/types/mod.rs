//! Core types for the document query system

pub mod inference;
pub mod object;
pub mod query;
pub mod response;

pub use inference::{
    Content, DocumentData, FilePart, GenerationConfig, InferenceRequest, InlineData, Part,
    RequestEntry, Role,
};
pub use object::{BatchSummary, ObjectRef, OperationResult};
pub use query::{DeleteFilesRequest, DeletePrefixRequest, FilesQuery, GenerateRequest, QueryRequest};
pub use response::{AnswerResponse, FileListResponse};
