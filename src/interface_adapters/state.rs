use crate::domain::ports::{IdentityProvider, ProductCatalog};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    // We use Arc<dyn Trait> to hold any implementation (dependency injection).
    pub identity: Arc<dyn IdentityProvider>,
    pub catalog: Arc<dyn ProductCatalog>,
    // Directory holding index.html and the static/ assets.
    pub frontend_dir: PathBuf,
}
