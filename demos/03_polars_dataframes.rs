//! Run with: cargo run --example 03_polars_dataframes --features dataframe

use fmp_rs::{Mode, Normalizer, ToDataFrame};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let normalizer = Normalizer::builder()
        .mode(Mode::Tuple)
        .precision_digits(2)
        .build()?;

    let body = r#"[
        {"holder": "Vanguard Group Inc", "shares": 1300000000, "weight": 8.41237},
        {"holder": "BlackRock Inc", "shares": 1000000000, "weight": 6.5}
    ]"#;

    if let Some(table) = normalizer.run_json(body)?.as_table() {
        let df = table.to_dataframe()?;
        println!("DataFrame shape: {:?}", df.shape());
        for name in df.get_column_names() {
            println!("   column: {name}");
        }
    }

    Ok(())
}
