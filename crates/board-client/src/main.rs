use board_client::AboutUsPage;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "board_client=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let server_hostname =
        std::env::var("SERVER_HOSTNAME").unwrap_or_else(|_| "http://localhost:3000".into());

    let client = reqwest::Client::builder().build()?;

    let mut page = AboutUsPage::new(server_hostname);
    println!("{}", page.render());

    page.mount(&client).await;
    println!("{}", page.render());

    Ok(())
}
