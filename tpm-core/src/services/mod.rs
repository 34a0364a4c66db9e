//! 业务逻辑服务层

mod field_validator;
mod payload_builder;
mod signup_service;

pub use field_validator::first_failure;
pub use payload_builder::build_payload;
pub use signup_service::SignUpService;
