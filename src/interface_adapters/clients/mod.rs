// Clients for the external services this API forwards to.
pub mod supabase;

pub use supabase::SupabaseClient;
