#[tokio::main]
async fn main() -> anyhow::Result<()> {
    mcq_testbank_backend::run().await
}
