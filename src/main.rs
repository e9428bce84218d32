#[tokio::main]
async fn main() {
    recetario::run().await
}
