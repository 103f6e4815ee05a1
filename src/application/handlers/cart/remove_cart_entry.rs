//! RemoveCartEntryHandler - Command handler for removing one cart entry.

use std::sync::Arc;

use crate::domain::foundation::{CartItemId, Email};
use crate::domain::ordering::OrderingError;
use crate::ports::CartRepository;

/// Command to remove `id` from `owner`'s cart.
#[derive(Debug, Clone)]
pub struct RemoveCartEntryCommand {
    pub id: CartItemId,
    pub owner: Email,
}

/// Number of entries removed (0 or 1).
pub type RemoveCartEntryResult = u64;

/// Removes an entry only if the caller owns it. Another user's entry is
/// reported as not removed rather than as forbidden, so ids cannot be probed.
pub struct RemoveCartEntryHandler {
    carts: Arc<dyn CartRepository>,
}

impl RemoveCartEntryHandler {
    pub fn new(carts: Arc<dyn CartRepository>) -> Self {
        Self { carts }
    }

    pub async fn handle(
        &self,
        cmd: RemoveCartEntryCommand,
    ) -> Result<RemoveCartEntryResult, OrderingError> {
        let removed = self.carts.delete_owned(&cmd.id, &cmd.owner).await?;
        Ok(removed as u64)
    }
}
