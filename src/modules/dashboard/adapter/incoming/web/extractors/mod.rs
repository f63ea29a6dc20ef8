mod admin_session;

pub use admin_session::{
    cookie_token, lookup_session, removal_cookie, session_cookie, AdminSession, SessionLookup,
};
