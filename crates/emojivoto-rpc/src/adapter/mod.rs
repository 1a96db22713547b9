//! Callback-to-future adaptation for backend calls

mod call_adapter;

pub use call_adapter::CallAdapter;
