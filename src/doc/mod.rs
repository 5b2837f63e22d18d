pub mod memo_doc;
pub mod pdf;

pub use memo_doc::MemoDocument;
