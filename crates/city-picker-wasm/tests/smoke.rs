#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use city_picker_wasm::JsCityPicker;
use serde_json::json;
use serde_wasm_bindgen::from_value;

const DATA: &str = r#"{
    "hotCities": [{"id": "1", "name": "北京", "spell": "beijing"}],
    "cities": {
        "B": [{"id": "1", "name": "北京", "spell": "beijing"}],
        "S": [{"id": "2", "name": "上海", "spell": "shanghai"}]
    }
}"#;

#[wasm_bindgen_test]
fn bundled_picker_has_letters() {
    city_picker_wasm::start();

    let picker = JsCityPicker::new(0.0, 20.0).unwrap();
    assert!(!picker.letters().is_empty());
    assert_eq!(picker.selected_city(), "北京");
}

#[wasm_bindgen_test]
fn search_then_choose_result() {
    let mut picker = JsCityPicker::from_json(DATA, None, 0.0, 20.0).unwrap();
    picker.set_query(0.0, "shang".to_string());
    picker.tick(250.0).unwrap();
    assert!(picker.choose_result(0));
    assert_eq!(picker.selected_city(), "上海");
}

#[wasm_bindgen_test]
fn touch_maps_to_letter_without_callback() {
    let mut picker = JsCityPicker::from_json(DATA, Some("touch_debounce_ms = 10".into()), 100.0, 20.0).unwrap();
    assert_eq!(picker.letters(), vec!["B".to_string(), "S".to_string()]);
    picker.touch_start();
    picker.touch_move(0.0, 125.0);
    let events: Vec<serde_json::Value> = from_value(picker.tick(10.0).unwrap()).unwrap();
    assert_eq!(events, vec![json!({"kind": "letterSelected", "letter": "S"})]);
    picker.touch_end();
    assert!(picker.choose_grouped("S", 0));
    assert_eq!(picker.selected_city(), "上海");
}
