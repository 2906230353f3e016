use std::sync::Arc;

use anyhow::Result;
use sample_crud_core::PageRequest;
use sample_crud_service::PostService;

use crate::connect_storage;

pub(crate) async fn run(page: Option<String>, limit: Option<String>) -> Result<()> {
    let storage = Arc::new(connect_storage().await?);
    let service = PostService::new(storage);
    let request = PageRequest::from_params(page.as_deref(), limit.as_deref());
    let result = service.list_posts(request).await?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
