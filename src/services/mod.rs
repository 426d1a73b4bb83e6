pub mod generator;
pub mod http_helpers;
pub mod prompt_builder;
pub mod quiz_service;
pub mod response_parser;
pub mod shape_validator;
