mod add_skill;
mod delete_record;
mod login;
mod logout;
mod open_form;
mod save_general;
mod show_dashboard;
mod submit_record;

pub use add_skill::*;
pub use delete_record::*;
pub use login::*;
pub use logout::*;
pub use open_form::*;
pub use save_general::*;
pub use show_dashboard::*;
pub use submit_record::*;
