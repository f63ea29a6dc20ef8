mod gotrue_auth;
mod postgrest_record_store;
pub mod rest_client;
mod storage_bucket;
mod supabase_config;

pub use gotrue_auth::GoTrueAuth;
pub use postgrest_record_store::PostgrestRecordStore;
pub use rest_client::SupabaseClient;
pub use storage_bucket::StorageBucket;
pub use supabase_config::SupabaseConfig;
