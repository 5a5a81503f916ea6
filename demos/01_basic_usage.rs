use fmp_rs::{Mode, Payload, Precision, apply_precision, encode, resolve_fields};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. A body as the historical-price endpoint would hand it over.
    let body = r#"[
        {"date": "2024-01-02", "open": 187.15, "high": 188.44, "low": 183.885, "close": 185.64, "volume": 82488700},
        {"date": "2024-01-03", "open": 184.22, "high": 185.88, "low": 183.43, "close": 184.25, "volume": 58414500}
    ]"#;
    let payload = Payload::from_json_str(body)?;

    // 2. Columns derived from the first record.
    let fields = resolve_fields(&payload, None);
    println!("--- Columns ---");
    println!("{}", fields.as_slice().join(", "));
    println!();

    // 3. Round to one decimal, then encode both ways.
    let rounded = apply_precision(payload, Precision::Digits(1));

    println!("--- TSV ---");
    println!("{}", encode(&rounded, None, Mode::Tsv));
    println!();

    println!("--- Tuple table ---");
    if let Some(table) = encode(&rounded, Some(&fields), Mode::Tuple).as_table() {
        for tuple in table.to_tuples() {
            println!("{tuple:?}");
        }
    }

    Ok(())
}
