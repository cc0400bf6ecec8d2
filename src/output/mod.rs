pub mod json;
pub mod text;

use serde_json::Value;

use crate::error::MealplanError;

pub fn print_json(value: &Value) {
    println!("{value:#}");
}

pub fn report_error(e: &MealplanError, json_output: bool) {
    if json_output {
        print_json(&json::error(e));
    } else {
        eprintln!("Error: {}", e.message);
    }
}
