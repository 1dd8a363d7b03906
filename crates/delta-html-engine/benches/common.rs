// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
use serde_json::{Value, json};

#[allow(dead_code)]
pub fn generate_delta_ops(paragraphs: usize) -> Value {
    let mut ops = Vec::new();
    for i in 0..paragraphs {
        ops.push(json!({"insert": format!("Heading {i}")}));
        ops.push(json!({"insert": "\n", "attributes": {"header": 2}}));
        ops.push(json!({"insert": "Some text with "}));
        ops.push(json!({"insert": "bold", "attributes": {"bold": true, "color": "#333"}}));
        ops.push(json!({"insert": " and a ", "attributes": {"italic": true}}));
        ops.push(json!({"insert": "link", "attributes": {"link": "https://example.com/?q=1"}}));
        ops.push(json!({"insert": "\nfirst item\nsecond item"}));
        ops.push(json!({"insert": "\n", "attributes": {"list": "bullet", "indent": 1}}));
        ops.push(json!({"insert": {"image": "https://example.com/a.png"}}));
        ops.push(json!({"insert": {"mention": {"name": "Ann", "user": "u-1"}}}));
    }
    Value::Array(ops)
}
