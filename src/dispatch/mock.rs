//! Mock dispatcher for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::dispatch::{DispatchOutcome, LeadDispatcher};
use crate::domain::lead::Lead;

mock! {
    pub Dispatcher {}

    #[async_trait]
    impl LeadDispatcher for Dispatcher {
        async fn dispatch(&self, lead: &Lead) -> DispatchOutcome;
    }
}
