use serde_json::json;

use crate::config::Config;
use crate::db::connection;
use crate::output;

pub fn run(config: &Config, json_output: bool) -> i32 {
    let result = connection::init_db(config).map(|path| {
        if json_output {
            output::print_json(&output::json::success(json!({
                "path": path.to_string_lossy()
            })));
        } else {
            println!("Initialized mealplan at {}", path.display());
        }
        0
    });
    super::finish(result, json_output)
}
