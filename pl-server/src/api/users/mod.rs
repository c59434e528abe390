pub mod auth_response;
pub mod connect_request;
pub mod connect_response;
pub mod login_request;
pub mod signup_request;
pub mod update_user_request;
pub mod user_dto;
pub mod user_response;
pub mod users;
