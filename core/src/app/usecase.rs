//! The use case contract
//!
//! Every application operation is its own type, built once with the
//! gateway it needs and then invoked through `execute`. Instances hold no
//! mutable state, so one instance can serve any number of concurrent calls.
//!
//! Cancellation and deadlines belong to the caller: dropping the future
//! returned by `execute` (or racing it against `tokio::time::timeout`)
//! abandons the in-flight gateway call. Use cases add no timeout or retry
//! of their own.

use async_trait::async_trait;

/// A single application operation with one entry point
#[async_trait]
pub trait UseCase: Send + Sync {
    type Input: Send;
    type Output: Send;
    type Error: std::error::Error + Send;

    async fn execute(&self, input: Self::Input) -> Result<Self::Output, Self::Error>;
}
