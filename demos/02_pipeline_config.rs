use fmp_rs::{NormalizeOptions, Normalizer};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Options usually live in the endpoint layer's own config file.
    let config = r#"{"fields": ["symbol", "price", "changesPercentage"], "precision": 2, "mode": "tuple"}"#;
    let options: NormalizeOptions = serde_json::from_str(config)?;
    let normalizer = Normalizer::builder().options(options).build()?;

    let body = r#"[
        {"symbol": "AAPL", "name": "Apple Inc.", "price": 189.98765, "changesPercentage": 1.23456},
        {"symbol": "MSFT", "name": "Microsoft", "price": 402.5, "changesPercentage": -0.1}
    ]"#;
    let out = normalizer.run_json(body)?;
    println!("{}", serde_json::to_string(&out)?);

    // A lone status object goes through the same pipeline.
    let status = Normalizer::default().run_json(r#"{"exchange": "NASDAQ", "isTheStockMarketOpen": true}"#)?;
    println!("{status}");

    Ok(())
}
