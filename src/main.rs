#[tokio::main]
async fn main() -> data_showcase::Result<()> {
    data_showcase::app::run().await
}
