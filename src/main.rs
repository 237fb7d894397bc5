#[tokio::main]
async fn main() -> anyhow::Result<()> {
    framestore::run_server().await
}
