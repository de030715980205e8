use async_trait::async_trait;

use crate::features::registration::NewUser;
use crate::services::errors::RegistrationResult;

/// Creates accounts on the backend - WASM-only, so no Send bound
#[async_trait(?Send)]
pub trait AccountRegistrar {
    /// Register a new account. `Ok` means the backend accepted it.
    async fn register(&self, user: &NewUser) -> RegistrationResult<()>;
}
