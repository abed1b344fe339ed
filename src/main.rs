#[tokio::main]
async fn main() {
    if let Err(e) = po_prevoditelj::run().await {
        eprintln!("{e:#}");
        std::process::exit(1);
    }
}
