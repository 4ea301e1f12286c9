use serde_json::json;
use valuehaus::prelude::*;

fn main() -> anyhow::Result<()> {
    println!("🚀 Valuehaus Codec Tour\n");

    let codec = ValueCodec::from_env()?;

    // Classification
    println!("📋 Classifying column types...");
    for declaration in ["varchar(255)", "decimal(10,2)", "int(10) unsigned", "set('a','b','c')"] {
        let decl = codec.classify(declaration)?;
        println!(
            "   {:<20} -> {:<8} {:?} (length {}, precision {:?}, options {:?})",
            declaration,
            decl.pure_type(),
            decl.category(),
            decl.length(),
            decl.precision(),
            decl.options()
        );
    }
    if let Err(err) = codec.classify("foobar") {
        println!("   foobar               -> {}", err);
    }

    // Decoding
    println!("\n🔍 Decoding raw values...");
    let rows: Vec<(&str, RawValue)> = vec![
        ("bit(8)", RawValue::Bytes(vec![0b0000_0101])),
        ("binary(5)", RawValue::Bytes(vec![72, 101, 121, 0, 0])),
        ("longblob", RawValue::Bytes(vec![0; 2048])),
        ("time", "13:45:00".into()),
        ("datetime", "2024-06-01T12:30:45.678Z".into()),
        ("json", json!({"a": 1, "tags": ["x", "y"]}).into()),
        (
            "polygon",
            json!({"type": "Polygon", "coordinates": [[[0, 0], [4, 0], [4, 4], [0, 0]]]}).into(),
        ),
    ];
    for (declaration, raw) in &rows {
        let shown = codec.decode_column(declaration, raw)?;
        println!("   {:<10} {}", declaration, shown.as_deref().unwrap_or("<null>"));
    }

    // Encoding
    println!("\n✏️  Encoding user input...");
    let edits: Vec<(&str, UserInput)> = vec![
        ("bit(8)", "00000101".into()),
        ("set('a','b','c')", vec!["a".to_string(), "c".to_string()].into()),
        ("datetime", "2024-06-01T14:30:45+02:00".into()),
        ("json", r#"{"a":1}"#.into()),
        ("point", GeometryNode::Point { coordinates: [1.0, 2.0] }.into()),
        ("varchar(10)", UserInput::Absent),
    ];
    for (declaration, input) in edits {
        let value = codec.encode_column(declaration, input)?;
        println!("   {:<18} {}", declaration, serde_json::to_string(&value)?);
    }

    // Conditions
    println!("\n🔎 Encoding a query condition...");
    let binary = codec.classify("binary(5)")?;
    let condition = codec.encode_condition(&binary, "Hey".into())?;
    println!("   binary(5) = 'Hey' -> {:?}", condition);

    println!("\n🎉 Tour complete!");
    Ok(())
}
