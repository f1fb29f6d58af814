//! Async wrapper around [`PetroleumPrices`] for use in async runtimes (Tokio, etc.).
//!
//! Runs loads and queries on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], so feed downloads never stall the
//! async event loop.
//!
//! # Example
//!
//! ```no_run
//! use petroleum_prices::{AsyncPetroleumPrices, FuelType, PetroleumPrices};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let prices = AsyncPetroleumPrices::build(PetroleumPrices::builder())
//!         .await
//!         .unwrap();
//!
//!     let _avg = prices
//!         .run(|p| p.average_price("2025-01-03", FuelType::Ago))
//!         .await
//!         .unwrap();
//! }
//! ```

use std::sync::{Arc, Mutex};

use crate::error::{PriceError, Result};
use crate::{PetroleumPrices, PetroleumPricesBuilder};

/// Async wrapper around [`PetroleumPrices`].
///
/// The inner SDK is protected by a [`Mutex`] so that [`refresh()`](Self::refresh)
/// can replace the loaded records.
#[derive(Clone)]
pub struct AsyncPetroleumPrices {
    inner: Arc<Mutex<PetroleumPrices>>,
}

impl AsyncPetroleumPrices {
    /// Build the SDK on the blocking thread pool.
    pub async fn build(builder: PetroleumPricesBuilder) -> Result<Self> {
        tokio::task::spawn_blocking(move || {
            let prices = builder.build()?;
            Ok(Self {
                inner: Arc::new(Mutex::new(prices)),
            })
        })
        .await
        .map_err(|e| PriceError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Run a sync SDK operation on the blocking thread pool.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&PetroleumPrices) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let prices = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let guard = prices
                .lock()
                .map_err(|_| PriceError::InvalidArgument("SDK lock poisoned".into()))?;
            f(&guard)
        })
        .await
        .map_err(|e| PriceError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Reload records from the source.
    pub async fn refresh(&self) -> Result<usize> {
        let prices = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let mut guard = prices
                .lock()
                .map_err(|_| PriceError::InvalidArgument("SDK lock poisoned".into()))?;
            guard.refresh()
        })
        .await
        .map_err(|e| PriceError::InvalidArgument(format!("Task join error: {e}")))?
    }
}
