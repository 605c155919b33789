use cvscan_core::Config;

// Use mimalloc as the global allocator for lower fragmentation under
// concurrent uploads.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let config = Config::from_env()?;

    let router = cvscan_api::setup::initialize_app(config.clone()).await?;

    cvscan_api::setup::server::start_server(&config, router).await?;

    Ok(())
}
