//! Application-layer configuration

mod request_params;

pub use request_params::RequestParams;
