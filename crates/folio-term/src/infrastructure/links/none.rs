use async_trait::async_trait;

use crate::domain::models::Link;
use crate::domain::models::LinkError;
use crate::domain::models::LinkOpener;
use crate::domain::models::LinkOpenerName;

/// Records the request and opens nothing. Useful over SSH or in CI.
pub struct NoOpener {}

#[async_trait]
impl LinkOpener for NoOpener {
    fn name(&self) -> LinkOpenerName {
        LinkOpenerName::None
    }

    async fn open(&self, link: Link) -> Result<(), LinkError> {
        tracing::info!(url = link.url(), "link opening disabled");
        Ok(())
    }
}
