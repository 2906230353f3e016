//! Schema setup command.
//!
//! Idempotent: creates the `posts` table only when it is missing.

use anyhow::Result;

use crate::connect_storage;

pub(crate) async fn run() -> Result<()> {
    let storage = connect_storage().await?;
    storage.migrate().await?;
    println!("posts table ready");
    Ok(())
}
