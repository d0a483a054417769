pub mod entities;
pub mod errors;
pub mod ports;

// Re-export the domain boundary types and ports.
pub use entities::{AuthOutcome, Credentials, IdentityUser, Product, ProductRow, ProviderSession};
pub use errors::{AuthError, CatalogError, ProviderError};
pub use ports::{IdentityProvider, ProductCatalog};
