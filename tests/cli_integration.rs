#[allow(deprecated)]
use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use std::fs;
use tempfile::TempDir;

// ─── helpers ───────────────────────────────────────────────────────

struct TestEnv {
    dir: TempDir,
}

impl TestEnv {
    fn new() -> Self {
        let dir = TempDir::new().expect("create tempdir");
        Self { dir }
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("mealplan").expect("binary");
        cmd.current_dir(self.dir.path())
            .env_remove("MEALPLAN_DIR")
            .env_remove("MEALPLAN_LOG");
        cmd
    }

    fn parse(stdout: &[u8]) -> Value {
        let stdout = String::from_utf8_lossy(stdout);
        serde_json::from_str(&stdout).unwrap_or_else(|e| panic!("parse JSON failed: {e}\nstdout: {stdout}"))
    }

    fn run_json(&self, args: &[&str]) -> Value {
        let mut a: Vec<&str> = args.to_vec();
        a.push("--json");
        let output = self.cmd().args(&a).output().expect("run");
        Self::parse(&output.stdout)
    }

    fn run_ok(&self, args: &[&str]) -> Value {
        let v = self.run_json(args);
        assert_eq!(v["success"], true, "expected success=true: {v}");
        v
    }

    fn run_err(&self, args: &[&str]) -> Value {
        let v = self.run_json(args);
        assert_eq!(v["success"], false, "expected success=false: {v}");
        v
    }

    fn run_stdin(&self, args: &[&str], stdin: &str) -> Value {
        let mut a: Vec<&str> = args.to_vec();
        a.push("--json");
        let output = self.cmd().args(&a).write_stdin(stdin).output().expect("run");
        Self::parse(&output.stdout)
    }

    /// Add a recipe and return its id.
    fn add_recipe(&self, recipe: Value) -> String {
        let v = self.run_stdin(&["recipe", "add"], &recipe.to_string());
        assert_eq!(v["success"], true, "recipe add failed: {v}");
        v["data"]["recipe"]["id"].as_str().unwrap().to_string()
    }
}

fn recipe_json(name: &str, meal_type: &str, energy: f64, protein: f64) -> Value {
    json!({
        "name": name,
        "meal_type": meal_type,
        "serves": 2,
        "energy": energy,
        "protein": protein
    })
}

fn setup() -> TestEnv {
    let env = TestEnv::new();
    env.run_ok(&["init"]);
    env
}

fn error_code(v: &Value) -> &str {
    v["error"]["code"].as_str().unwrap()
}

fn id_list(v: &Value) -> Vec<String> {
    v.as_array()
        .unwrap()
        .iter()
        .map(|id| id.as_str().unwrap().to_string())
        .collect()
}

// ─── 1. init ───────────────────────────────────────────────────────

#[test]
fn test_init_creates_database() {
    let env = TestEnv::new();
    let v = env.run_ok(&["init"]);
    let path = v["data"]["path"].as_str().unwrap();
    assert!(path.ends_with("mealplan.db"), "unexpected path: {path}");
    assert!(env.dir.path().join(".mealplan").join("mealplan.db").exists());
}

#[test]
fn test_init_is_idempotent() {
    let env = setup();
    let id = env.add_recipe(recipe_json("Oats", "breakfast", 350.0, 12.0));
    env.run_ok(&["init"]);
    let v = env.run_ok(&["recipe", "show", &id]);
    assert_eq!(v["data"]["recipe"]["name"], "Oats");
}

#[test]
fn test_commands_before_init_fail() {
    let env = TestEnv::new();
    let v = env.run_err(&["plan", "show"]);
    assert_eq!(error_code(&v), "NOT_INITIALIZED");
    let v = env.run_err(&["recipe", "list"]);
    assert_eq!(error_code(&v), "NOT_INITIALIZED");
}

#[test]
fn test_data_dir_flag() {
    let env = TestEnv::new();
    let data_dir = env.dir.path().join("elsewhere");
    let data_dir = data_dir.to_str().unwrap();
    env.run_ok(&["init", "--data-dir", data_dir]);
    env.run_ok(&["plan", "show", "--data-dir", data_dir]);
    assert!(!env.dir.path().join(".mealplan").exists());
}

#[test]
fn test_data_dir_found_from_subdirectory() {
    let env = setup();
    env.add_recipe(recipe_json("Oats", "breakfast", 350.0, 12.0));
    let sub = env.dir.path().join("a").join("b");
    fs::create_dir_all(&sub).unwrap();

    let output = env
        .cmd()
        .current_dir(&sub)
        .args(["recipe", "list", "--json"])
        .output()
        .expect("run");
    let v = TestEnv::parse(&output.stdout);
    assert_eq!(v["data"]["recipes"].as_array().unwrap().len(), 1);
}

#[test]
fn test_malformed_config_file_is_ignored() {
    let env = setup();
    fs::write(env.dir.path().join(".mealplan").join("config.json"), "{ not json").unwrap();
    env.cmd()
        .args(["plan", "show", "--json"])
        .assert()
        .success()
        .stderr(predicate::str::contains("ignoring malformed"));
}

#[test]
fn test_version_has_no_v_prefix() {
    let env = TestEnv::new();
    env.cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("mealplan "))
        .stdout(predicate::str::contains("mealplan v").not());
}

// ─── 2. recipes ────────────────────────────────────────────────────

#[test]
fn test_recipe_add_and_show() {
    let env = setup();
    let recipe = json!({
        "name": "Masala Oats",
        "meal_type": "breakfast",
        "is_vegetarian": true,
        "serves": 1,
        "ingredients": [
            {"name": "oats", "quantity": 40, "serving_unit": "g"},
            {"name": "milk", "quantity": 1, "serving_unit": "cup"}
        ],
        "instructions": "Cook the oats.\nAdd spices.",
        "energy": 320.5,
        "protein": 11,
        "fiber": 6
    });
    let id = env.add_recipe(recipe);
    assert_eq!(id.len(), 26, "ids are ULIDs");

    let v = env.run_ok(&["recipe", "show", &id]);
    let r = &v["data"]["recipe"];
    assert_eq!(r["name"], "Masala Oats");
    assert_eq!(r["meal_type"], "breakfast");
    assert_eq!(r["ingredients"].as_array().unwrap().len(), 2);
    assert_eq!(r["ingredients"][1]["serving_unit"], "cup");
    assert_eq!(r["energy"], 320.5);
    assert_eq!(r["carbs"], Value::Null);
}

#[test]
fn test_recipe_add_defaults() {
    let env = setup();
    let id = env.add_recipe(json!({"name": "Plain Toast", "meal_type": "breakfast"}));
    let v = env.run_ok(&["recipe", "show", &id]);
    let r = &v["data"]["recipe"];
    assert_eq!(r["serves"], 1);
    assert_eq!(r["is_vegetarian"], true);
    assert_eq!(r["ingredients"], json!([]));
}

#[test]
fn test_recipe_add_accepts_legacy_meal_type_spelling() {
    let env = setup();
    let id = env.add_recipe(json!({"name": "Soaked Almonds", "meal_type": "pre-breakfast"}));
    let v = env.run_ok(&["recipe", "show", &id]);
    assert_eq!(v["data"]["recipe"]["meal_type"], "pre_breakfast");
}

#[test]
fn test_recipe_add_validation() {
    let env = setup();
    let v = env.run_stdin(&["recipe", "add"], r#"{"name": "", "meal_type": "lunch"}"#);
    assert_eq!(error_code(&v), "VALIDATION_ERROR");

    let v = env.run_stdin(&["recipe", "add"], r#"{"name": "Dal", "meal_type": "lunch", "serves": 0}"#);
    assert_eq!(error_code(&v), "VALIDATION_ERROR");

    let v = env.run_stdin(&["recipe", "add"], r#"{"name": "Dal", "meal_type": "brunch"}"#);
    assert_eq!(error_code(&v), "VALIDATION_ERROR");

    let v = env.run_stdin(
        &["recipe", "add"],
        r#"{"name": "Dal", "meal_type": "lunch", "ingredients": [{"name": "lentils", "quantity": -1, "serving_unit": "g"}]}"#,
    );
    assert_eq!(error_code(&v), "VALIDATION_ERROR");

    let v = env.run_stdin(&["recipe", "add"], "not json");
    assert_eq!(error_code(&v), "VALIDATION_ERROR");

    let v = env.run_ok(&["recipe", "list"]);
    assert!(v["data"]["recipes"].as_array().unwrap().is_empty());
}

#[test]
fn test_recipe_list_filters_by_meal_type() {
    let env = setup();
    env.add_recipe(recipe_json("Oats", "breakfast", 1.0, 1.0));
    env.add_recipe(recipe_json("Apple", "snack", 1.0, 1.0));
    env.add_recipe(recipe_json("Dal", "lunch", 1.0, 1.0));

    let v = env.run_ok(&["recipe", "list"]);
    let names: Vec<&str> = v["data"]["recipes"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Apple", "Dal", "Oats"]);

    let v = env.run_ok(&["recipe", "list", "--meal-type", "snack"]);
    let recipes = v["data"]["recipes"].as_array().unwrap();
    assert_eq!(recipes.len(), 1);
    assert_eq!(recipes[0]["name"], "Apple");

    let v = env.run_err(&["recipe", "list", "--meal-type", "brunch"]);
    assert_eq!(error_code(&v), "INVALID_KEY");
}

#[test]
fn test_recipe_resolve_by_prefix_and_name() {
    let env = setup();
    let id = env.add_recipe(recipe_json("Lentil Soup", "dinner", 1.0, 1.0));
    env.add_recipe(recipe_json("Tomato Soup", "dinner", 1.0, 1.0));

    let v = env.run_ok(&["recipe", "show", &id[..12].to_lowercase()]);
    assert_eq!(v["data"]["recipe"]["id"], id.as_str());

    let v = env.run_ok(&["recipe", "show", "lentil"]);
    assert_eq!(v["data"]["recipe"]["id"], id.as_str());

    let v = env.run_err(&["recipe", "show", "soup"]);
    assert_eq!(error_code(&v), "AMBIGUOUS_REF");

    let v = env.run_err(&["recipe", "show", "pancakes"]);
    assert_eq!(error_code(&v), "RECIPE_NOT_FOUND");
}

#[test]
fn test_recipe_update() {
    let env = setup();
    let id = env.add_recipe(recipe_json("Dal", "lunch", 300.0, 15.0));
    let v = env.run_stdin(
        &["recipe", "update", &id],
        &recipe_json("Dal Tadka", "dinner", 420.0, 18.0).to_string(),
    );
    assert_eq!(v["success"], true, "update failed: {v}");
    assert_eq!(v["data"]["recipe"]["id"], id.as_str());
    assert_eq!(v["data"]["recipe"]["name"], "Dal Tadka");
    assert_eq!(v["data"]["recipe"]["energy"], 420.0);

    let v = env.run_stdin(&["recipe", "update", "missing"], &recipe_json("X", "lunch", 1.0, 1.0).to_string());
    assert_eq!(error_code(&v), "RECIPE_NOT_FOUND");
}

#[test]
fn test_recipe_delete() {
    let env = setup();
    let id = env.add_recipe(recipe_json("Dal", "lunch", 300.0, 15.0));
    let v = env.run_ok(&["recipe", "delete", "dal"]);
    assert_eq!(v["data"]["deleted"]["id"], id.as_str());
    let v = env.run_err(&["recipe", "show", &id]);
    assert_eq!(error_code(&v), "RECIPE_NOT_FOUND");
}

#[test]
fn test_recipe_text_output() {
    let env = setup();
    env.add_recipe(recipe_json("Dal", "lunch", 300.0, 15.0));
    env.cmd()
        .args(["recipe", "show", "dal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recipe: Dal"))
        .stdout(predicate::str::contains("300.0 kcal"));
}

// ─── 3. plan slots ─────────────────────────────────────────────────

#[test]
fn test_plan_get_unassigned_slot_is_empty() {
    let env = setup();
    let v = env.run_ok(&["plan", "get", "Monday", "lunch"]);
    assert_eq!(v["data"]["day"], "Monday");
    assert_eq!(v["data"]["meal"], "lunch");
    assert_eq!(v["data"]["recipe_ids"], json!([]));
}

#[test]
fn test_plan_set_replaces_slot() {
    let env = setup();
    let dal = env.add_recipe(recipe_json("Dal", "lunch", 300.0, 15.0));
    let rice = env.add_recipe(recipe_json("Rice", "sides", 200.0, 4.0));
    let curry = env.add_recipe(recipe_json("Curry", "dinner", 450.0, 9.0));

    let v = env.run_ok(&["plan", "set", "Monday", "lunch", &dal, &rice]);
    assert_eq!(id_list(&v["data"]["recipe_ids"]), vec![dal.clone(), rice.clone()]);

    let v = env.run_ok(&["plan", "set", "monday", "lunch", "curry"]);
    assert_eq!(id_list(&v["data"]["recipe_ids"]), vec![curry.clone()]);

    let v = env.run_ok(&["plan", "get", "Monday", "lunch"]);
    assert_eq!(id_list(&v["data"]["recipe_ids"]), vec![curry]);
    assert_eq!(v["data"]["recipes"][0]["name"], "Curry");
}

#[test]
fn test_plan_set_dedups_and_clears() {
    let env = setup();
    let dal = env.add_recipe(recipe_json("Dal", "lunch", 300.0, 15.0));
    let v = env.run_ok(&["plan", "set", "Tuesday", "dinner", &dal, "dal"]);
    assert_eq!(id_list(&v["data"]["recipe_ids"]), vec![dal]);

    let v = env.run_ok(&["plan", "set", "Tuesday", "dinner"]);
    assert_eq!(v["data"]["recipe_ids"], json!([]));
}

#[test]
fn test_plan_set_bad_reference_changes_nothing() {
    let env = setup();
    let dal = env.add_recipe(recipe_json("Dal", "lunch", 300.0, 15.0));
    env.run_ok(&["plan", "set", "Monday", "lunch", &dal]);

    let v = env.run_err(&["plan", "set", "Monday", "lunch", &dal, "pancakes"]);
    assert_eq!(error_code(&v), "RECIPE_NOT_FOUND");
    let v = env.run_ok(&["plan", "get", "Monday", "lunch"]);
    assert_eq!(id_list(&v["data"]["recipe_ids"]), vec![dal]);
}

#[test]
fn test_plan_add_and_duplicate() {
    let env = setup();
    let oats = env.add_recipe(recipe_json("Oats", "breakfast", 350.0, 12.0));
    let eggs = env.add_recipe(recipe_json("Eggs", "breakfast", 150.0, 13.0));

    let v = env.run_ok(&["plan", "add", "Monday", "breakfast", "oats"]);
    assert_eq!(v["data"]["added"]["id"], oats.as_str());
    let v = env.run_ok(&["plan", "add", "Monday", "breakfast", "eggs"]);
    assert_eq!(id_list(&v["data"]["recipe_ids"]), vec![oats.clone(), eggs.clone()]);

    let v = env.run_err(&["plan", "add", "Monday", "breakfast", "oats"]);
    assert_eq!(error_code(&v), "DUPLICATE_ASSIGNMENT");

    let v = env.run_ok(&["plan", "get", "Monday", "breakfast"]);
    assert_eq!(id_list(&v["data"]["recipe_ids"]), vec![oats, eggs]);
}

#[test]
fn test_plan_invalid_keys() {
    let env = setup();
    env.add_recipe(recipe_json("Oats", "breakfast", 350.0, 12.0));

    let v = env.run_err(&["plan", "get", "Funday", "lunch"]);
    assert_eq!(error_code(&v), "INVALID_KEY");
    let v = env.run_err(&["plan", "get", "Monday", "brunch"]);
    assert_eq!(error_code(&v), "INVALID_KEY");
    let v = env.run_err(&["plan", "add", "Monday", "weekend_prep", "oats"]);
    assert_eq!(error_code(&v), "INVALID_KEY");
    let v = env.run_err(&["plan", "show", "--day", "Someday"]);
    assert_eq!(error_code(&v), "INVALID_KEY");
}

#[test]
fn test_plan_rejects_ineligible_recipes() {
    let env = setup();
    env.add_recipe(recipe_json("Apple", "snack", 95.0, 0.5));
    env.add_recipe(recipe_json("Almonds", "pre_breakfast", 80.0, 3.0));
    env.add_recipe(recipe_json("Dal", "lunch", 300.0, 15.0));

    let v = env.run_err(&["plan", "add", "Monday", "lunch", "apple"]);
    assert_eq!(error_code(&v), "INELIGIBLE_RECIPE");
    let v = env.run_err(&["plan", "add", "Monday", "pre-breakfast", "dal"]);
    assert_eq!(error_code(&v), "INELIGIBLE_RECIPE");
    let v = env.run_err(&["plan", "set", "Monday", "snack", "almonds"]);
    assert_eq!(error_code(&v), "INELIGIBLE_RECIPE");

    env.run_ok(&["plan", "add", "Monday", "snack", "apple"]);
    env.run_ok(&["plan", "add", "Monday", "pre_breakfast", "almonds"]);
}

#[test]
fn test_plan_eligible_lists() {
    let env = setup();
    env.add_recipe(recipe_json("Apple", "snack", 95.0, 0.5));
    env.add_recipe(recipe_json("Almonds", "pre_breakfast", 80.0, 3.0));
    env.add_recipe(recipe_json("Dal", "lunch", 300.0, 15.0));
    env.add_recipe(recipe_json("Batch Chili", "weekend_prep", 500.0, 25.0));
    env.add_recipe(recipe_json("Raita", "sides", 60.0, 3.0));

    let names = |meal: &str| -> Vec<String> {
        let v = env.run_ok(&["plan", "eligible", meal]);
        v["data"]["recipes"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["name"].as_str().unwrap().to_string())
            .collect()
    };

    assert_eq!(names("snack"), vec!["Apple"]);
    assert_eq!(names("pre_breakfast"), vec!["Almonds"]);
    assert_eq!(names("dinner"), vec!["Batch Chili", "Dal", "Raita"]);
    assert_eq!(names("breakfast"), names("lunch"));
}

#[test]
fn test_plan_remove() {
    let env = setup();
    let oats = env.add_recipe(recipe_json("Oats", "breakfast", 350.0, 12.0));
    let eggs = env.add_recipe(recipe_json("Eggs", "breakfast", 150.0, 13.0));
    env.run_ok(&["plan", "set", "Friday", "breakfast", &oats, &eggs]);

    let v = env.run_ok(&["plan", "remove", "Friday", "breakfast", "oats"]);
    assert_eq!(v["data"]["removed"], oats.as_str());
    assert_eq!(id_list(&v["data"]["recipe_ids"]), vec![eggs]);

    let v = env.run_err(&["plan", "remove", "Friday", "breakfast", "oats"]);
    assert_eq!(error_code(&v), "VALIDATION_ERROR");
}

#[test]
fn test_plan_show_week() {
    let env = setup();
    env.add_recipe(recipe_json("Oats", "breakfast", 350.0, 12.0));
    env.run_ok(&["plan", "add", "Wednesday", "breakfast", "oats"]);

    let v = env.run_ok(&["plan", "show"]);
    let days = v["data"]["days"].as_array().unwrap();
    assert_eq!(days.len(), 7);
    assert_eq!(days[0]["day"], "Monday");
    assert_eq!(days[6]["day"], "Sunday");
    assert_eq!(days[0]["slots"].as_array().unwrap().len(), 5);
    assert_eq!(days[2]["slots"][1]["meal"], "breakfast");
    assert_eq!(days[2]["slots"][1]["recipes"][0]["name"], "Oats");
    assert_eq!(days[2]["nutrition"]["energy"], 350.0);

    let v = env.run_ok(&["plan", "show", "--day", "wednesday"]);
    assert_eq!(v["data"]["days"].as_array().unwrap().len(), 1);
}

#[test]
fn test_plan_clear() {
    let env = setup();
    env.add_recipe(recipe_json("Oats", "breakfast", 350.0, 12.0));
    env.add_recipe(recipe_json("Dal", "lunch", 300.0, 15.0));
    env.run_ok(&["plan", "add", "Monday", "breakfast", "oats"]);
    env.run_ok(&["plan", "add", "Monday", "lunch", "dal"]);

    let v = env.run_ok(&["plan", "clear"]);
    assert_eq!(v["data"]["cleared"], 2);
    let v = env.run_ok(&["plan", "get", "Monday", "lunch"]);
    assert_eq!(v["data"]["recipe_ids"], json!([]));
}

#[test]
fn test_plan_text_output() {
    let env = setup();
    env.add_recipe(recipe_json("Oats", "breakfast", 350.0, 12.0));
    env.run_ok(&["plan", "add", "Monday", "breakfast", "oats"]);
    env.cmd()
        .args(["plan", "show", "--day", "Monday"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Monday"))
        .stdout(predicate::str::contains("Oats"));
}

#[test]
fn test_error_without_json_goes_to_stderr() {
    let env = setup();
    env.cmd()
        .args(["plan", "get", "Funday", "lunch"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

// ─── 4. nutrition ──────────────────────────────────────────────────

#[test]
fn test_nutrition_slot_sum() {
    let env = setup();
    env.add_recipe(recipe_json("Oats", "breakfast", 200.0, 10.0));
    env.add_recipe(recipe_json("Eggs", "breakfast", 300.0, 5.0));
    env.run_ok(&["plan", "set", "Monday", "breakfast", "oats", "eggs"]);

    let v = env.run_ok(&["nutrition", "slot", "Monday", "breakfast"]);
    let n = &v["data"]["nutrition"];
    assert_eq!(n["energy"], 500.0);
    assert_eq!(n["protein"], 15.0);
    assert_eq!(n["carbs"], 0.0);
}

#[test]
fn test_nutrition_day_and_week() {
    let env = setup();
    env.add_recipe(recipe_json("Oats", "breakfast", 200.0, 10.0));
    env.add_recipe(recipe_json("Dal", "lunch", 300.0, 15.0));
    env.run_ok(&["plan", "add", "Monday", "breakfast", "oats"]);
    env.run_ok(&["plan", "add", "Monday", "lunch", "dal"]);
    env.run_ok(&["plan", "add", "Sunday", "dinner", "dal"]);

    let v = env.run_ok(&["nutrition", "day", "Monday"]);
    assert_eq!(v["data"]["nutrition"]["energy"], 500.0);
    assert_eq!(v["data"]["slots"].as_array().unwrap().len(), 5);
    assert_eq!(v["data"]["slots"][2]["meal"], "lunch");
    assert_eq!(v["data"]["slots"][2]["nutrition"]["energy"], 300.0);

    let v = env.run_ok(&["nutrition", "week"]);
    let days = v["data"]["days"].as_array().unwrap();
    assert_eq!(days.len(), 7);
    assert_eq!(days[0]["nutrition"]["energy"], 500.0);
    assert_eq!(days[6]["nutrition"]["energy"], 300.0);
    assert_eq!(v["data"]["total"]["energy"], 800.0);
    assert_eq!(v["data"]["total"]["protein"], 40.0);
}

#[test]
fn test_nutrition_day_defaults_to_today() {
    let env = setup();
    let v = env.run_ok(&["nutrition", "day"]);
    let day = v["data"]["day"].as_str().unwrap();
    assert!(
        ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"].contains(&day),
        "unexpected day: {day}"
    );
}

#[test]
fn test_deleted_recipe_leaves_dangling_reference() {
    let env = setup();
    let oats = env.add_recipe(recipe_json("Oats", "breakfast", 200.0, 10.0));
    let eggs = env.add_recipe(recipe_json("Eggs", "breakfast", 300.0, 5.0));
    env.run_ok(&["plan", "set", "Monday", "breakfast", &oats, &eggs]);
    env.run_ok(&["recipe", "delete", &oats]);

    let v = env.run_ok(&["plan", "get", "Monday", "breakfast"]);
    assert_eq!(id_list(&v["data"]["recipe_ids"]), vec![oats.clone(), eggs.clone()]);
    assert_eq!(id_list(&v["data"]["unresolved"]), vec![oats.clone()]);
    assert_eq!(v["data"]["recipes"].as_array().unwrap().len(), 1);

    let v = env.run_ok(&["nutrition", "slot", "Monday", "breakfast"]);
    assert_eq!(v["data"]["nutrition"]["energy"], 300.0);

    // The stale id can still be removed by exact id
    let v = env.run_ok(&["plan", "remove", "Monday", "breakfast", &oats]);
    assert_eq!(id_list(&v["data"]["recipe_ids"]), vec![eggs]);
}
