// demos/answer_key.rs
// Run with:
//   cargo run --example answer_key
// RUST_LOG=debug shows the anchor clusters behind the selection.

use morse_rules::{Mode, generate};

fn main() {
    env_logger::init();

    let set = generate(42, Mode::Clustered, "en").expect("built-in pools cover 16 rules");
    for (freq, term) in &set.mapping {
        println!("3.{freq} MHz  ->  {term}");
    }
}
