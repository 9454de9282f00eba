pub mod classify_request;
pub mod classify_response;
