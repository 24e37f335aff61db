use serde_json::{Value, json};
use std::path::{Path, PathBuf};

pub const INVOICES_CSV: &str = "\
invoice_id,customer_name,date,amount,description
INV-001,Acme Ltd,2024-01-15,1500,Consulting services
INV-002,Globex,2024-02-01,320,Hosting
INV-001,Duplicate,2024-03-01,1,Ignored
";

pub fn nested_invoices() -> Value {
    json!({
        "invoices": [
            {"id": "X1", "amount": 100},
            {"invoice_id": "X2", "customer_name": "Initech", "amount": 42.5}
        ]
    })
}

pub fn write_file(dir: &Path, name: &str, contents: &str) -> std::io::Result<PathBuf> {
    let path = dir.join(name);
    std::fs::write(&path, contents)?;
    Ok(path)
}

/// A description long enough to push the invoice onto a second page.
pub fn long_description() -> String {
    "Line item with a fairly long explanation of the work delivered. ".repeat(400)
}
