pub mod url_param;
pub mod request_status;
