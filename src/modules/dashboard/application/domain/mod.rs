mod general_command;
mod login_request;
mod notice;

pub use general_command::{CropChange, SaveGeneralCommand};
pub use login_request::{LoginRequest, LoginRequestError};
pub use notice::{Notice, NoticeLevel};
