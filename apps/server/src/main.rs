#[tokio::main]
async fn main() -> anyhow::Result<()> {
    edu_helper_server::run().await
}
