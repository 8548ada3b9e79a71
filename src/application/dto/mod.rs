/// Data transfer objects for the application layer
mod credits_request;
mod credits_response;

pub use credits_request::CreditsRequest;
pub use credits_response::CreditsResponse;
