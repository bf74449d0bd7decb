pub mod openapi;

pub use openapi::ApiDoc;
