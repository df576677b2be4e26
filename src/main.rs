//! hostrota main entrypoint.

use hostrota::run;

fn main() {
    println!();
    if let Err(e) = run() {
        hostrota::ui::messages::error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
