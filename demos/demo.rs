//! # Example: demo
//!
//! Runs a toaster with the built-in [`LogWriter`] and plays a short script of
//! host interactions against it.
//!
//! ## Flow
//! ```text
//! add("Saved") ─► add("Upload failed") ─► hover "Saved" ─► add("Saved") again
//!      ─► leave ─► dismiss "Upload failed" ─► wait for expiry ─► shutdown
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example demo --features logging
//! ```

use std::sync::Arc;
use std::time::Duration;

use toastvisor::{LogWriter, Subscribe, ToastSpec, Toaster, ToasterConfig};

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let cfg = ToasterConfig {
        default_duration: Duration::from_millis(1500),
        ..ToasterConfig::default()
    };
    let subs: Vec<Arc<dyn Subscribe>> = vec![Arc::new(LogWriter::new())];
    let toaster = Toaster::builder(cfg).with_subscribers(subs).build();
    let handle = toaster.handle();
    let mut list = handle.subscribe();

    let watcher = tokio::spawn(async move {
        while list.changed().await.is_ok() {
            let rendered: Vec<String> = list
                .borrow_and_update()
                .iter()
                .map(|t| format!("{} [{}]", t.message(), t.kind()))
                .collect();
            println!("on screen: {rendered:?}");
        }
    });

    handle.add(ToastSpec::success("Saved"))?;
    handle.add(ToastSpec::error("Upload failed").with_millis(4000))?;

    let snapshot = handle.snapshot().await?;
    let saved = snapshot[0].id();
    let failed = snapshot[1].id();

    tokio::time::sleep(Duration::from_millis(500)).await;
    handle.pointer_enter(saved)?;
    tokio::time::sleep(Duration::from_secs(2)).await;

    handle.add(ToastSpec::success("Saved"))?;
    handle.pointer_leave(saved)?;
    handle.dismiss(failed)?;

    tokio::time::sleep(Duration::from_secs(2)).await;
    println!("remaining: {}", handle.toasts().len());

    toaster.shutdown().await?;
    watcher.abort();
    Ok(())
}
