#[tokio::main]
async fn main() -> anyhow::Result<()> {
    texcards_backend::run().await
}
